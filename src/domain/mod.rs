//! Domain entities: currency arithmetic, the order and payment-method ledger,
//! and the per-method spend record an allocation run produces.

pub mod money;
pub mod order;
pub mod payment_method;
pub mod spend;
