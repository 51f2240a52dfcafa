//! Application layer containing the allocation procedure.
//!
//! [`allocator::PaymentAllocator`] takes exclusive borrows of the orders and
//! payment methods for one run and mutates them in place.

pub mod allocator;
