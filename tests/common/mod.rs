#![allow(dead_code)]

use payment_allocator::domain::money::Money;
use payment_allocator::domain::order::Order;
use payment_allocator::domain::payment_method::{PaymentMethod, PaymentMethods};
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn order(id: &str, value: Decimal, promotions: &[&str]) -> Order {
    let promotions = if promotions.is_empty() {
        None
    } else {
        Some(promotions.iter().map(|p| p.to_string()).collect())
    };
    Order::new(id, Money::new(value), promotions)
}

pub fn method(id: &str, discount: i32, limit: Decimal) -> PaymentMethod {
    PaymentMethod::new(id, discount, Money::new(limit))
}

fn cents<R: Rng>(rng: &mut R, max: i64) -> Money {
    Money::new(Decimal::new(rng.gen_range(0..=max), 2))
}

/// A random ledger: optional points, up to four cards, up to ten orders
/// whose promotion lists may name unknown or points methods.
pub fn random_ledger(rng: &mut StdRng) -> (Vec<Order>, PaymentMethods) {
    let mut methods = Vec::new();
    let card_count = rng.gen_range(1..=4);
    let points_slot = rng.gen_bool(0.8).then(|| rng.gen_range(0..=card_count));

    for slot in 0..=card_count {
        if Some(slot) == points_slot {
            methods.push(PaymentMethod::new(
                "PUNKTY",
                rng.gen_range(0..=30),
                cents(rng, 30_000),
            ));
        }
        if slot < card_count {
            methods.push(PaymentMethod::new(
                format!("CARD{slot}"),
                rng.gen_range(0..=25),
                cents(rng, 60_000),
            ));
        }
    }

    let mut promotion_pool: Vec<String> = (0..card_count).map(|i| format!("CARD{i}")).collect();
    promotion_pool.push("PUNKTY".to_string());
    promotion_pool.push("GHOST".to_string());

    let orders = (0..rng.gen_range(1..=10))
        .map(|i| {
            let promotions: Vec<String> = promotion_pool
                .iter()
                .filter(|_| rng.gen_bool(0.3))
                .cloned()
                .collect();
            Order::new(
                format!("ORDER{i}"),
                cents(rng, 25_000),
                (!promotions.is_empty()).then_some(promotions),
            )
        })
        .collect();

    (orders, PaymentMethods::new(methods).unwrap())
}
