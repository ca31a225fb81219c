// libris-api: async HTTP transport for the books service

pub mod client;
pub mod error;
pub mod transport;

pub use client::{HttpTransport, Transport};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
