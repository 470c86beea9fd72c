mod root_policy;

pub use root_policy::RootPolicy;
