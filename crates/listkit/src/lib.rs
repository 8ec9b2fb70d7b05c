//! # listkit
//!
//! Small, pure combinators over lists and string-keyed records.
//!
//! Every function borrows its inputs and returns a freshly built `Vec` or
//! [`Record`], so a caller's data is never modified. None of them fail on
//! awkward input: an out-of-range index, an empty list or lists of
//! different lengths all produce a well-defined result.
//!
//! ## Modules
//!
//! - [`compose`]: `pipe` and `compose`, as functions and as macros
//! - [`pairing`]: `zip`, `xprod`
//! - [`shape`]: `intersperse`, `insert`, `insert_all`, `reverse`, `flatten`, `flat_map`
//! - [`membership`]: `includes`, `compact`, `deduplicate`
//! - [`records`]: `array_into_object`, `from_pairs`, `merge_all`
//! - [`generate`]: `range`, `repeat`, `times`
//! - [`update`]: `adjust`
//! - `json` (feature `json`): the same ideas over `serde_json::Value`
//!
//! ## Example
//!
//! ```
//! use listkit::{compact, deduplicate, intersperse, pipe, range};
//!
//! let odds = pipe!(
//!     |v: Vec<i64>| v.into_iter().map(|n| n % 2 * n).collect::<Vec<_>>(),
//!     |v: Vec<i64>| compact(&v),
//!     |v: Vec<i64>| deduplicate(&v),
//! );
//! assert_eq!(odds(range(1, 6)), vec![1, 3, 5]);
//!
//! assert_eq!(intersperse(&0, &[1, 2]), vec![1, 0, 2]);
//! ```
//!
//! ## Logging
//!
//! Degenerate inputs (an append fallback in `insert`, an out-of-range
//! `adjust`, an empty `range`, a rejected lookup-table item) are reported as
//! `tracing` events at `TRACE` level. The crate never installs a subscriber.

pub mod compose;
pub mod generate;
#[cfg(feature = "json")]
pub mod json;
pub mod membership;
pub mod pairing;
pub mod records;
pub mod shape;
pub mod update;

pub use listkit_common::{ListError, Record, Result, ToKey, Tree, Truthy};

pub use compose::{Transform, compose, pipe};
pub use generate::{range, repeat, times};
pub use membership::{compact, deduplicate, deduplicate_by, deduplicate_coerced, includes};
pub use pairing::{Pair, unzip, xprod, zip};
pub use records::{array_into_object, from_pairs, index_by, merge_all};
pub use shape::{flat_map, flatten, flatten_tree, insert, insert_all, intersperse, reverse};
pub use update::{adjust, update};
