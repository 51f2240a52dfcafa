use super::money::Money;
use serde::Deserialize;

/// Shape of an order as it appears in the input feed.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: String,
    value: Money,
    #[serde(default)]
    promotions: Option<Vec<String>>,
}

/// A customer order waiting to be paid.
///
/// `promotions` lists the payment methods that grant their own discount when
/// they pay the whole order. Payment state only moves from unpaid to paid.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(from = "OrderRecord")]
pub struct Order {
    /// Unique within one allocation run.
    pub id: String,
    /// Value before any discount.
    pub value: Money,
    pub promotions: Option<Vec<String>>,
    paid: bool,
    remaining_value_to_pay: Money,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self::new(record.id, record.value, record.promotions)
    }
}

impl Order {
    pub fn new(id: impl Into<String>, value: Money, promotions: Option<Vec<String>>) -> Self {
        Self {
            id: id.into(),
            value,
            promotions,
            paid: false,
            remaining_value_to_pay: value,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn remaining_value_to_pay(&self) -> Money {
        self.remaining_value_to_pay
    }

    /// Payment method ids eligible for a full-payment discount, if any.
    pub fn promotions(&self) -> &[String] {
        self.promotions.as_deref().unwrap_or_default()
    }

    /// Marks the order as paid; nothing is left to pay afterwards.
    pub fn mark_as_paid(&mut self) {
        self.paid = true;
        self.remaining_value_to_pay = Money::ZERO;
    }

    /// Restores the unpaid state so the order can take part in a new run.
    pub fn reset(&mut self) {
        self.paid = false;
        self.remaining_value_to_pay = self.value;
    }
}
