mod fake_http_client;
mod memory_filesystem;

pub use fake_http_client::FakeHttpClient;
pub use memory_filesystem::MemoryFilesystem;
