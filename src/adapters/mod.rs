pub mod local_filesystem;
pub mod reqwest_http_client;

pub use local_filesystem::LocalFilesystem;
pub use reqwest_http_client::ReqwestHttpClient;
