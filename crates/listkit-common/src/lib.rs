//! # listkit common
//!
//! Shared value model for the `listkit` combinators.
//!
//! ## Modules
//!
//! - [`tree`]: Values that are either a single item or a nested list
//! - [`record`]: Persistent string-keyed records backed by `im::HashMap`
//! - [`truthy`]: An explicit falsy table (`0`, `""`, `false`, `None`, `NaN`)
//! - [`key`]: Coercion of values into record keys
//! - [`error`]: Error type shared by the fallible record operations
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new values instead of mutating
//! 2. **Ownership-based**: Inputs are borrowed, outputs are owned
//! 3. **Explicit semantics**: Truthiness and key coercion are traits with
//!    spelled-out tables, not implicit conversions

pub mod error;
pub mod key;
pub mod record;
pub mod tree;
pub mod truthy;

// Re-export main types for convenience
pub use error::{ListError, Result};
pub use key::ToKey;
pub use record::Record;
pub use tree::Tree;
pub use truthy::Truthy;
