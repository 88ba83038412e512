use rust_decimal::Decimal;

use super::Cart;
use crate::money::{parse_count, parse_money};

/// User-supplied planning inputs, normalized from free-text fields.
#[derive(Debug, Clone)]
pub struct PlanInputs {
    /// Rental duration in days, always at least 1.
    pub days: u32,
    /// Spending ceiling. Zero means no target is set.
    pub budget_target: Decimal,
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self {
            days: 1,
            budget_target: Decimal::ZERO,
        }
    }
}

impl PlanInputs {
    /// Set the duration from raw text. Anything non-numeric or below 1
    /// becomes 1; decimal text is floored.
    pub fn set_days_raw(&mut self, raw: &str) {
        let wanted = parse_count(raw).map_or(1, |n| n.max(1));
        self.days = u32::try_from(wanted).unwrap_or(u32::MAX);
    }

    /// Set the budget target from raw text. Garbage becomes zero, which
    /// reads as "unset".
    pub fn set_budget_raw(&mut self, raw: &str) {
        self.budget_target = parse_money(raw);
    }
}

/// Tunable thresholds for budget classification. The near-budget ratio has
/// no stated business rationale, so it stays data rather than code.
#[derive(Debug, Clone)]
pub struct BudgetPolicy {
    pub near_budget_ratio: Decimal,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            // 0.9: within 10% of the target counts as "near".
            near_budget_ratio: Decimal::new(9, 1),
        }
    }
}

/// Where the grand total stands relative to the budget target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No target set; remaining/overage are not meaningful.
    Unset,
    OnBudget { remaining: Decimal },
    NearBudget { remaining: Decimal },
    OverBudget { overage: Decimal },
}

/// Totals derived from the cart and inputs. Never stored independently;
/// recomputed after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTotals {
    pub subtotal_per_day: Decimal,
    pub grand_total: Decimal,
    pub status: BudgetStatus,
}

impl Default for DerivedTotals {
    fn default() -> Self {
        Self {
            subtotal_per_day: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            status: BudgetStatus::Unset,
        }
    }
}

/// Compute subtotal, grand total and budget classification. Totals carry
/// full precision; rounding happens only at display and export.
pub fn evaluate(cart: &Cart, inputs: &PlanInputs, policy: &BudgetPolicy) -> DerivedTotals {
    let subtotal_per_day = cart.subtotal_per_day();
    let grand_total = subtotal_per_day * Decimal::from(inputs.days.max(1));

    let target = inputs.budget_target;
    let status = if target <= Decimal::ZERO {
        // Checked first so the threshold comparison never sees a zero target.
        BudgetStatus::Unset
    } else if grand_total > target {
        BudgetStatus::OverBudget {
            overage: grand_total - target,
        }
    } else if grand_total > target * policy.near_budget_ratio {
        BudgetStatus::NearBudget {
            remaining: target - grand_total,
        }
    } else {
        BudgetStatus::OnBudget {
            remaining: target - grand_total,
        }
    };

    DerivedTotals {
        subtotal_per_day,
        grand_total,
        status,
    }
}
