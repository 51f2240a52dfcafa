use super::money::Money;
use std::fmt;

/// Total charged to one payment method over an allocation run.
#[derive(Debug, PartialEq, Clone)]
pub struct MethodSpend {
    pub method_id: String,
    pub amount: Money,
}

impl MethodSpend {
    pub fn new(method_id: impl Into<String>, amount: Money) -> Self {
        Self {
            method_id: method_id.into(),
            amount,
        }
    }
}

impl fmt::Display for MethodSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method_id, self.amount)
    }
}
