pub mod annotated;
pub mod inventory;
pub mod package;

pub use annotated::{AnnotatedInventory, AnnotatedPackage};
pub use inventory::Inventory;
pub use package::{Category, InstallRecord, Package, PackageName, Version};
