//! Preference persistence and propagation.
//!
//! - [`PreferenceStore`]: defaulting reads and best-effort writes over a
//!   [`Storage`](crate::storage::Storage).
//! - [`PreferenceContext`]: the root-owned state every view reads from.

pub mod context;
pub mod store;

pub use context::{PreferenceContext, PreferenceEvent, SubscriptionId};
pub use store::PreferenceStore;
