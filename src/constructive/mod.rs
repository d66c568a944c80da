//! Route construction.
//!
//! - [`round_robin_greedy`] — Round-robin greedy assignment with partial
//!   deliveries and forced depot returns, O(I·m·n)

mod round_robin;

pub use round_robin::round_robin_greedy;
