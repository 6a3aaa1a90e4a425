//! DNF MCP Server Library
//!
//! An MCP (Model Context Protocol) server that exposes the Dungeon & Fighter
//! Open API as tools. Each tool forwards one call to the upstream API and
//! returns the raw response body as text.
//!
//! # Architecture
//!
//! - **core**: Configuration, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Passthrough tools over the upstream API
//!   - **resources**: Reference data such as the timeline code table
//!
//! # Example
//!
//! ```rust,no_run
//! use dnf_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
pub use domains::tools::{ParameterBag, build_callback_object, build_request_url};
