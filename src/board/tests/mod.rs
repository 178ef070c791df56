//! Board module tests.
//!
//! - `adapter.rs` - `set_occupant` bookkeeping and the provided adapter queries
//! - `proptest.rs` - hash and arena consistency under random placements

mod adapter;
