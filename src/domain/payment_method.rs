use super::money::Money;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Shape of a payment method as it appears in the input feed.
#[derive(Debug, Deserialize)]
struct PaymentMethodRecord {
    id: String,
    #[serde(deserialize_with = "deserialize_percent")]
    discount: i32,
    limit: Money,
}

/// Accepts a percentage written either as a JSON number or as a string.
fn deserialize_percent<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPercent {
        Number(i32),
        Text(String),
    }

    match RawPercent::deserialize(deserializer)? {
        RawPercent::Number(percent) => Ok(percent),
        RawPercent::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A payment instrument with a spending limit and a discount rate.
///
/// At all times `remaining_limit + total_spent == limit`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(from = "PaymentMethodRecord")]
pub struct PaymentMethod {
    pub id: String,
    /// Discount percentage, e.g. `15` for 15%.
    pub discount: i32,
    pub limit: Money,
    remaining_limit: Money,
    total_spent: Money,
}

impl From<PaymentMethodRecord> for PaymentMethod {
    fn from(record: PaymentMethodRecord) -> Self {
        Self::new(record.id, record.discount, record.limit)
    }
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, discount: i32, limit: Money) -> Self {
        Self {
            id: id.into(),
            discount,
            limit,
            remaining_limit: limit,
            total_spent: Money::ZERO,
        }
    }

    pub fn remaining_limit(&self) -> Money {
        self.remaining_limit
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Whether `amount` fits in what is left of the limit.
    pub fn can_cover(&self, amount: Money) -> bool {
        self.remaining_limit >= amount
    }

    /// Moves `amount` from the remaining limit to the spend total.
    ///
    /// Negative amounts are ignored.
    pub fn charge(&mut self, amount: Money) {
        if amount.is_negative() {
            return;
        }
        self.remaining_limit -= amount;
        self.total_spent += amount;
    }

    /// Restores the full limit and clears the spend total.
    pub fn reset(&mut self) {
        self.remaining_limit = self.limit;
        self.total_spent = Money::ZERO;
    }
}

/// Payment methods keyed by id, iterated in the order they were supplied.
///
/// Enumeration order decides which card wins a "first sufficient card"
/// search, so the methods live in a `Vec` and the map only indexes into it.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethods {
    methods: Vec<PaymentMethod>,
    index: HashMap<String, usize>,
}

impl PaymentMethods {
    /// Builds the book, rejecting duplicate ids.
    pub fn new(methods: Vec<PaymentMethod>) -> Result<Self> {
        let mut index = HashMap::with_capacity(methods.len());
        for (position, method) in methods.iter().enumerate() {
            if index.insert(method.id.clone(), position).is_some() {
                return Err(PaymentError::DuplicatePaymentMethod(method.id.clone()));
            }
        }
        Ok(Self { methods, index })
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Position of `id` in enumeration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.position(id).and_then(|position| self.methods.get(position))
    }

    pub fn at(&self, position: usize) -> Option<&PaymentMethod> {
        self.methods.get(position)
    }

    pub fn at_mut(&mut self, position: usize) -> Option<&mut PaymentMethod> {
        self.methods.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter()
    }

    pub fn reset(&mut self) {
        self.methods.iter_mut().for_each(PaymentMethod::reset);
    }
}
