pub mod inference_client_http;
pub mod offline_resolver;

pub use inference_client_http::RemoteResolver;
pub use offline_resolver::OfflineResolver;
