//! Markdown presentation of models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "created" banners or empty-list
//! messages. Both the CLI renderer and the MCP server print these as-is.
//!
//! ```rust
//! use studioflow_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Deleted project 3".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Deliverables, Projects, Steps};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, ResolveResult};
pub use status::OperationStatus;
