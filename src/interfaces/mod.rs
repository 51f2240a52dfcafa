//! Adapters between the allocator and the outside world: the JSON feed the
//! ledger is loaded from and the plain-text report of spend totals.

pub mod csv;
pub mod json;
