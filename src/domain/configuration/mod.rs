pub mod parse;
pub mod source_config;

pub use parse::parse_config_content;
pub use source_config::{ClusterSpecConfig, REF_PLACEHOLDER, SchemaSourceConfig};
