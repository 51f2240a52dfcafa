use crate::domain::order::Order;
use crate::domain::payment_method::{PaymentMethod, PaymentMethods};
use crate::error::{PaymentError, Result};
use serde::de::DeserializeOwned;
use std::io::{BufReader, Read};

/// Reads a JSON array of records from any `Read` source.
fn read_array<T: DeserializeOwned, R: Read>(source: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(BufReader::new(source))?)
}

/// Reads orders from a JSON document.
///
/// Expects an array of `{"id", "value", "promotions"}` objects; `promotions`
/// may be missing or `null`. Every order comes back unpaid.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn orders(self) -> Result<Vec<Order>> {
        let orders: Vec<Order> = read_array(self.source)?;
        if let Some(order) = orders.iter().find(|o| o.value.is_negative()) {
            return Err(PaymentError::ValidationError(format!(
                "Order {} has a negative value",
                order.id
            )));
        }
        Ok(orders)
    }
}

/// Reads payment methods from a JSON document.
///
/// Expects an array of `{"id", "discount", "limit"}` objects. Their order in
/// the document is kept as the enumeration order of the returned book.
pub struct PaymentMethodReader<R: Read> {
    source: R,
}

impl<R: Read> PaymentMethodReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn payment_methods(self) -> Result<PaymentMethods> {
        let methods: Vec<PaymentMethod> = read_array(self.source)?;
        for method in &methods {
            if !(0..=100).contains(&method.discount) {
                return Err(PaymentError::ValidationError(format!(
                    "Payment method {} has discount {} outside 0-100",
                    method.id, method.discount
                )));
            }
            if method.limit.is_negative() {
                return Err(PaymentError::ValidationError(format!(
                    "Payment method {} has a negative limit",
                    method.id
                )));
            }
        }
        PaymentMethods::new(methods)
    }
}
