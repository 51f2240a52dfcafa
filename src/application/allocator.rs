use crate::config::AllocatorConfig;
use crate::domain::money::{self, Money};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethods;
use crate::domain::spend::MethodSpend;
use crate::error::{PaymentError, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A full payment of one order by one method, considered during the
/// discount phase and discarded once the phase ends.
#[derive(Debug)]
struct Candidate {
    order: usize,
    method: usize,
    charge: Money,
    discount: Money,
}

/// Splits a batch of orders across payment methods, greedily chasing the
/// largest discounts first.
///
/// The allocator keeps no state of its own. It mutates the orders and the
/// payment methods it is handed, and the exclusive borrows keep a second
/// run from touching the same ledger at the same time.
#[derive(Debug, Clone, Default)]
pub struct PaymentAllocator {
    config: AllocatorConfig,
}

impl PaymentAllocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Pays every order and returns what each used method was charged.
    ///
    /// Runs in three phases:
    ///
    /// 1. Full payments that earn a discount (a promoted card, or points
    ///    alone), committed globally by descending discount.
    /// 2. For each order still unpaid, in list order: points for part of it
    ///    plus one card for the rest at the fixed partial-points rate, else
    ///    one card for the full value.
    /// 3. Verification that nothing was left unpaid.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::AllocationInfeasible`] listing every unpaid
    /// order. Commits made before the failure are not rolled back, so the
    /// ledger must then be treated as a spent snapshot.
    pub fn allocate(
        &self,
        orders: &mut [Order],
        methods: &mut PaymentMethods,
    ) -> Result<Vec<MethodSpend>> {
        ensure_unique_order_ids(orders)?;

        let points = methods.position(&self.config.points_method_id);
        self.warn_on_configuration(points, methods);
        info!(
            orders = orders.len(),
            methods = methods.len(),
            "Starting payment allocation"
        );

        let discounted = self.allocate_full_payments_with_discount(orders, methods, points);
        debug!(paid = discounted, "Discounted full payments committed");

        let failed = self.allocate_remaining_payments(orders, methods, points);
        if failed > 0 {
            warn!(failed, "Some orders could not be paid");
        }

        verify_all_orders_paid(orders)?;

        let spends = collect_spends(methods);
        info!(used_methods = spends.len(), "Payment allocation complete");
        Ok(spends)
    }

    fn warn_on_configuration(&self, points: Option<usize>, methods: &PaymentMethods) {
        if points.is_none() {
            warn!(
                points_method = %self.config.points_method_id,
                "Points payment method not found, points promotions are unavailable"
            );
        }
        if !methods.iter().any(|m| !self.is_points(&m.id)) {
            warn!("No card payment methods found, only points payments are possible");
        }
    }

    fn is_points(&self, method_id: &str) -> bool {
        method_id == self.config.points_method_id
    }

    /// Phase 1. Returns how many orders it paid.
    fn allocate_full_payments_with_discount(
        &self,
        orders: &mut [Order],
        methods: &mut PaymentMethods,
        points: Option<usize>,
    ) -> usize {
        let mut candidates = Vec::new();
        for (position, order) in orders.iter().enumerate() {
            if order.is_paid() {
                continue;
            }
            if let Some(points) = points {
                self.push_candidate(&mut candidates, position, order, methods, points);
            }
            for promotion in order.promotions() {
                if self.is_points(promotion) {
                    continue;
                }
                if let Some(card) = methods.position(promotion) {
                    self.push_candidate(&mut candidates, position, order, methods, card);
                }
            }
        }

        // Stable, so equal discounts keep generation order.
        candidates.sort_by(|a, b| b.discount.cmp(&a.discount));

        let mut paid = 0;
        for candidate in candidates {
            let Some(order) = orders.get_mut(candidate.order) else {
                continue;
            };
            let Some(method) = methods.at_mut(candidate.method) else {
                continue;
            };
            if order.is_paid() || !method.can_cover(candidate.charge) {
                continue;
            }
            method.charge(candidate.charge);
            order.mark_as_paid();
            paid += 1;
            debug!(
                order = %order.id,
                method = %method.id,
                charge = %candidate.charge,
                discount = %candidate.discount,
                "Full payment with discount"
            );
        }
        paid
    }

    fn push_candidate(
        &self,
        candidates: &mut Vec<Candidate>,
        position: usize,
        order: &Order,
        methods: &PaymentMethods,
        method: usize,
    ) {
        let Some(payment_method) = methods.at(method) else {
            return;
        };
        let discount = money::discount_amount(order.value, payment_method.discount);
        if !discount.is_positive() {
            return;
        }
        candidates.push(Candidate {
            order: position,
            method,
            charge: money::apply_discount(order.value, payment_method.discount),
            discount,
        });
    }

    /// Phase 2. Returns how many orders are still unpaid afterwards.
    fn allocate_remaining_payments(
        &self,
        orders: &mut [Order],
        methods: &mut PaymentMethods,
        points: Option<usize>,
    ) -> usize {
        orders
            .iter_mut()
            .filter(|order| !order.is_paid())
            .fold(0, |failed, order| {
                let paid = points
                    .is_some_and(|points| self.pay_partially_with_points(order, methods, points))
                    || self.pay_with_card(order, methods);
                if paid {
                    failed
                } else {
                    warn!(order = %order.id, "No payment method can cover order");
                    failed + 1
                }
            })
    }

    fn pay_partially_with_points(
        &self,
        order: &mut Order,
        methods: &mut PaymentMethods,
        points: usize,
    ) -> bool {
        let percent = self.config.partial_points_percent;
        let Some(points_remaining) = methods.at(points).map(|m| m.remaining_limit()) else {
            return false;
        };

        let threshold = money::percentage(order.value, percent);
        if points_remaining < threshold {
            return false;
        }

        let cost = money::apply_discount(order.value, percent);
        let points_portion = cost.min(points_remaining);
        let card_portion = cost - points_portion;

        let Some(card) = self.find_card_with_sufficient_limit(methods, card_portion) else {
            return false;
        };

        if let Some(points_method) = methods.at_mut(points) {
            points_method.charge(points_portion);
        }
        if let Some(card_method) = methods.at_mut(card) {
            card_method.charge(card_portion);
            debug!(
                order = %order.id,
                points = %points_portion,
                method = %card_method.id,
                charge = %card_portion,
                "Partial payment with points"
            );
        }
        order.mark_as_paid();
        true
    }

    fn pay_with_card(&self, order: &mut Order, methods: &mut PaymentMethods) -> bool {
        let Some(card) = self.find_card_with_sufficient_limit(methods, order.value) else {
            return false;
        };
        let Some(card_method) = methods.at_mut(card) else {
            return false;
        };
        card_method.charge(order.value);
        order.mark_as_paid();
        debug!(
            order = %order.id,
            method = %card_method.id,
            charge = %order.value,
            "Base payment without discount"
        );
        true
    }

    /// First non-points method, in enumeration order, able to cover `amount`.
    ///
    /// A non-positive amount never matches, so an order whose cost comes to
    /// zero cannot be paid by a card.
    fn find_card_with_sufficient_limit(
        &self,
        methods: &PaymentMethods,
        amount: Money,
    ) -> Option<usize> {
        if !amount.is_positive() {
            return None;
        }
        methods
            .iter()
            .position(|m| !self.is_points(&m.id) && m.can_cover(amount))
    }
}

fn ensure_unique_order_ids(orders: &[Order]) -> Result<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            return Err(PaymentError::DuplicateOrder(order.id.clone()));
        }
    }
    Ok(())
}

fn verify_all_orders_paid(orders: &[Order]) -> Result<()> {
    let unpaid: Vec<String> = orders
        .iter()
        .filter(|order| !order.is_paid())
        .map(|order| order.id.clone())
        .collect();
    if unpaid.is_empty() {
        Ok(())
    } else {
        Err(PaymentError::AllocationInfeasible { unpaid })
    }
}

fn collect_spends(methods: &PaymentMethods) -> Vec<MethodSpend> {
    methods
        .iter()
        .filter(|m| m.total_spent().is_positive())
        .map(|m| MethodSpend::new(m.id.clone(), m.total_spent()))
        .collect()
}
