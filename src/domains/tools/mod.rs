//! Tools domain module.
//!
//! Every tool forwards to one endpoint of the Dungeon & Fighter Open API and
//! returns the raw response body as text.
//!
//! ## Architecture
//!
//! - `definitions/` - Per-tool parameters, path templates and query mapping
//! - `passthrough.rs` - The shared validate/build/fetch/wrap pipeline
//! - `request.rs` - Parameter bag and request URL construction
//! - `envelope.rs` - Result envelope construction
//! - `upstream.rs` - Outbound HTTP client seam
//! - `registry.rs` - Central tool registry and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//!
//! ## Adding a New Tool
//!
//! 1. Implement `PassthroughTool` in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolRegistry::with_upstream`

pub mod definitions;
pub mod envelope;
mod error;
pub mod passthrough;
mod registry;
pub mod request;
pub mod router;
pub mod upstream;

pub use envelope::build_callback_object;
pub use error::ToolError;
pub use passthrough::{PassthroughContext, PassthroughTool};
pub use registry::{ToolEntry, ToolHandlerFn, ToolRegistry};
pub use request::{ParamValue, ParameterBag, build_request_url};
pub use router::build_tool_router;
pub use upstream::{HttpUpstream, UpstreamClient};
