//! Read models for the report
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for rendering.

pub mod report_read_model;
pub mod report_read_model_builder;

pub use report_read_model::{ReportReadModel, RowView, SectionView};
pub use report_read_model_builder::ReportReadModelBuilder;
