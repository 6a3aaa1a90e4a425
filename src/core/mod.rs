//! Core module containing shared infrastructure components.
//!
//! Configuration, the MCP server handler and the transport layer live here.

pub mod config;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
