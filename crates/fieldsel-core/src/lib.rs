//! fieldsel Core
//!
//! GraphQL selection strategies for admin dashboard field types.
//!
//! # Core Concepts
//!
//! - [`FieldTypeId`]: Built-in field kinds (checkbox, image, password, ...)
//! - [`SelectionFragment`]: Selection-set entry that fetches one field
//! - [`FieldSelectionRegistry`]: Immutable tag → strategy table
//! - [`ListSchema`]: Lists and their field types, loaded from a file
//! - [`ItemQuery`]: Items query composed from a list's fragments
//!
//! # Example
//!
//! ```rust
//! use fieldsel_core::{selection_for, FieldSelectionRegistry, FieldPath, SelectionFragment};
//!
//! assert_eq!(selection_for("password", "secret").unwrap(), "secret { isSet }");
//!
//! fn relationship(path: FieldPath) -> SelectionFragment {
//!     SelectionFragment::inline(path, &["id", "label"])
//! }
//!
//! let registry = FieldSelectionRegistry::builder()
//!     .register("relationship", relationship)
//!     .unwrap()
//!     .build();
//! let fragment = registry.selection_for("relationship", "author").unwrap();
//! assert_eq!(fragment.to_string(), "author { id label }");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod field_type;
mod fragment;
mod path;
mod query;
mod registry;
mod schema;
pub mod strategy;

// Re-exports
pub use error::{QueryError, SchemaError, SelectionError, SelectionResult};
pub use field_type::FieldTypeId;
pub use fragment::{Layout, SelectionFragment};
pub use path::FieldPath;
pub use query::{ItemQuery, QueryConfig, ID_FIELD};
pub use registry::{selection_for, FieldSelectionRegistry, FieldSelectionRegistryBuilder};
pub use schema::{ListDef, ListSchema};
pub use strategy::SelectionFn;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
