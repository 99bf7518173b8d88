//! Collection helpers over slices and JSON values.
//!
//! - [`helpers`]: generic slice helpers.
//! - [`object`]: `serde_json` object/array helpers.

pub mod helpers;
pub mod object;

pub use helpers::{
    all, any, average, count, difference, each, find, intersection, map, max_by, min_by,
    partition, pick, pick_many, remove, select, step, times, union, unique, zip,
};
pub use object::{compact, deep_merge, flatten, merge, select_entries};
