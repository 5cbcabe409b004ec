//! A sorted key-value container ordered by a pluggable comparison policy.
//!
//! [`Dictionary`] keeps its entries sorted by key at all times, so lookups
//! are binary searches and iteration walks keys in order. The sort order is
//! a zero-sized strategy type fixed when the container is built; see
//! [`order`] for the stock policies.

pub mod dictionary;
pub mod order;

pub use dictionary::{Dictionary, DictionaryError, Entry, Iter};
pub use order::{Ascending, Compare, Descending};
