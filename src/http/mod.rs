//! HTTP protocol layer module
//!
//! Response descriptors, body conversion, and MIME lookup, decoupled from the
//! individual method handlers.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{HttpBody, ResponseBody, ResponseDescriptor};
