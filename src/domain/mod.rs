pub mod configuration;
pub mod error;
pub mod release_ref;
pub mod specifier;

pub use configuration::{ClusterSpecConfig, SchemaSourceConfig, parse_config_content};
pub use error::AppError;
pub use release_ref::release_branch_for;
pub use specifier::{SpecKind, Specifier};
