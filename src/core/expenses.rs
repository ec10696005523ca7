//! Eight-category expense model: every category is a percent of gross
//! monthly income.

use super::numeric::round_half_up;
use super::types::{ExpenseCategory, ExpenseLine, ExpenseRates, MONTHS_PER_YEAR};

/// Back-computes a rate from a dollar amount. Zero income gives a non-finite
/// rate, which is returned untouched.
pub fn rate_from_amount(amount: f64, gross_monthly_income: f64) -> f64 {
    (amount / gross_monthly_income) * 100.0
}

pub fn category_amount(rate: f64, gross_monthly_income: f64) -> f64 {
    (rate * gross_monthly_income) / 100.0
}

impl ExpenseRates {
    pub fn with_amount(
        self,
        category: ExpenseCategory,
        amount: f64,
        gross_monthly_income: f64,
    ) -> Self {
        self.with_rate(category, rate_from_amount(amount, gross_monthly_income))
    }
}

pub fn monthly_expense_total(rates: &ExpenseRates, gross_monthly_income: f64) -> f64 {
    rates.total_rate() * gross_monthly_income / 100.0
}

/// Whole-dollar monthly total shown on the summary cards.
pub fn rounded_monthly_expense_total(rates: &ExpenseRates, gross_monthly_income: f64) -> f64 {
    round_half_up(monthly_expense_total(rates, gross_monthly_income))
}

pub fn yearly_expense_total(rates: &ExpenseRates, gross_monthly_income: f64) -> f64 {
    monthly_expense_total(rates, gross_monthly_income) * MONTHS_PER_YEAR as f64
}

pub fn expense_to_income_ratio(yearly_expenses: f64, yearly_income: f64) -> Option<f64> {
    if yearly_income > 0.0 {
        Some((yearly_expenses / yearly_income) * 100.0)
    } else {
        None
    }
}

pub fn expense_breakdown(rates: &ExpenseRates, gross_monthly_income: f64) -> Vec<ExpenseLine> {
    ExpenseCategory::ALL
        .iter()
        .map(|&category| {
            let rate = rates.rate(category);
            ExpenseLine {
                category,
                label: category.label(),
                rate,
                monthly_amount: category_amount(rate, gross_monthly_income),
            }
        })
        .collect()
}
