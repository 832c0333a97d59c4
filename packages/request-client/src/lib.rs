// Library exports for the request client

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod query;
pub mod telemetry;
pub mod transport;

// Re-export commonly used types
pub use client::RequestClient;
pub use config::{ClientConfig, ConfigError};
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use error::{BoxError, ClientError};
pub use query::{build_url, encode_query};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
