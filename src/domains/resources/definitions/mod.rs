//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! content provider.

use rmcp::model::ResourceContents;

use super::service::ResourceContent;
use crate::core::config::Config;

pub mod server_info;
pub mod timeline_codes;

pub use server_info::ServerInfoResource;
pub use timeline_codes::{TIMELINE_CODES, TimelineCodesResource, timeline_code_table};

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed on read.
pub trait DynamicResourceProvider {
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, String>;
}
