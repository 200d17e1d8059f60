//! The operation registry exposed to the endpoint.

pub mod registry;
pub mod types;

pub use registry::{definitions, Operation};
pub use types::ToolParameters;
