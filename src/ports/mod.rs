mod http_client;
mod spec_filesystem;

pub use http_client::{HttpClient, HttpResponse};
pub use spec_filesystem::SpecFilesystem;
