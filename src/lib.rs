//! Greedy allocation of order payments across a loyalty-points balance and
//! card-like payment methods, chasing the largest discounts first.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logging;
