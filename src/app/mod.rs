pub mod cluster_spec;
pub mod config;
pub mod file_spec;
pub mod live_spec;
pub mod logging;
pub mod resolver;
pub mod version_spec;

pub use cluster_spec::ClusterSpec;
pub use file_spec::FileSpec;
pub use live_spec::LiveSpec;
pub use resolver::{ClusterSpecResolver, parse_cluster_spec};
pub use version_spec::VersionSpec;
