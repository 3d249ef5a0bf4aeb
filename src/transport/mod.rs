//! HTTP transport for the Folio backend.

mod http;

pub use http::HttpClient;
