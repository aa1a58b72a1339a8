// ionscope-api: Async Rust client for the CloudGenix / Prisma SD-WAN controller API

pub mod auth;
pub mod error;
pub mod models;
pub mod resources;
pub mod session;
pub mod transport;

pub use error::Error;
pub use session::ApiSession;
pub use transport::{TlsMode, TransportConfig};
