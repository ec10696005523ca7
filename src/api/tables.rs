//! Report tables built on top of the engine's sequences.
//!
//! Each table keeps its own year mapping between the 0-based equity projection
//! and the 1-based amortization years, and the year-1 value override lives here
//! rather than in the projector.

use serde::Serialize;

use crate::core::{
    AmortizationSchedule, EquityProjectionRow, InvestmentMetrics, MONTHS_PER_YEAR,
    capital_appreciation,
};

use super::format::{format_currency, format_percent};

pub const MILESTONE_YEARS: [u32; 7] = [1, 5, 10, 15, 20, 25, 30];
const CHART_ROUNDING: f64 = 50_000.0;
const CHART_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityTableRow {
    pub label: String,
    pub property_value: f64,
    pub loan_balance: Option<f64>,
    pub equity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppreciationPoint {
    pub year: u32,
    pub gain: f64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardGroup {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub group: CardGroup,
    pub label: &'static str,
    pub value: String,
}

/// Milestone years. Year `n` reads projection row `n - 1` and amortization
/// year `n`; year 1 shows the purchase price instead of the compounded value.
pub fn equity_milestones(
    projection: &[EquityProjectionRow],
    schedule: &AmortizationSchedule,
    property_price: f64,
) -> Vec<EquityTableRow> {
    MILESTONE_YEARS
        .iter()
        .filter_map(|&year| {
            let projected = projection.iter().find(|row| row.year + 1 == year)?;
            let amortized = schedule.yearly_row(year);
            let value = if year == 1 {
                property_price
            } else {
                projected.property_value
            };
            Some(EquityTableRow {
                label: format!("Year {year}"),
                property_value: value,
                loan_balance: amortized.map(|row| row.balance),
                equity: amortized.map(|row| value - row.balance),
            })
        })
        .collect()
}

/// Full table. A purchase-date row first, then projection row `y` labelled
/// `Year y+1` against amortization year `y + 1`. The purchase-price override
/// applies to projection row 1, which is labelled `Year 2`.
pub fn equity_table(
    projection: &[EquityProjectionRow],
    schedule: &AmortizationSchedule,
    property_price: f64,
    loan_principal: f64,
) -> Vec<EquityTableRow> {
    let purchase = EquityTableRow {
        label: "Purchase Date".to_string(),
        property_value: property_price,
        loan_balance: Some(loan_principal),
        equity: Some(0.0),
    };

    std::iter::once(purchase)
        .chain(projection.iter().map(|projected| {
            let amortized = schedule.yearly_row(projected.year + 1);
            let value = if projected.year == 1 {
                property_price
            } else {
                projected.property_value
            };
            EquityTableRow {
                label: format!("Year {}", projected.year + 1),
                property_value: value,
                loan_balance: amortized.map(|row| row.balance),
                equity: amortized.map(|row| value - row.balance),
            }
        }))
        .collect()
}

pub fn capital_appreciation_summary(
    property_price: f64,
    appreciation_rate: f64,
) -> Vec<AppreciationPoint> {
    MILESTONE_YEARS
        .iter()
        .map(|&year| AppreciationPoint {
            year,
            gain: capital_appreciation(property_price, appreciation_rate, year),
        })
        .collect()
}

/// Upper bound for the income vs. expenses chart: 10% headroom, rounded up to
/// the next 50k.
pub fn chart_max(metrics: &InvestmentMetrics) -> f64 {
    let raw = metrics
        .yearly_income
        .max(metrics.category_cash_flow.yearly_outgoings);
    (raw * CHART_HEADROOM / CHART_ROUNDING).ceil() * CHART_ROUNDING
}

fn yes_no(passed: bool) -> String {
    if passed { "Yes" } else { "No" }.to_string()
}

pub fn summary_cards(metrics: &InvestmentMetrics) -> Vec<SummaryCard> {
    let category = &metrics.category_cash_flow;
    let simple = &metrics.simple_cash_flow;
    let cash_on_cash = metrics
        .cash_on_cash_override
        .clone()
        .unwrap_or_default();

    vec![
        SummaryCard {
            group: CardGroup::Primary,
            label: "Meet the 50% Rule?",
            value: yes_no(metrics.fifty_percent_rule),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Meet the 1% Rule?",
            value: yes_no(metrics.one_percent_rule),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Monthly Mortgage Payment",
            value: format_currency(metrics.monthly_mortgage_payment),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Loan to Value Ratio",
            value: format_percent(metrics.loan_to_value),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Monthly Net Operating Income",
            value: format_currency(category.monthly_operating_income),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Cap Rate / Gross Rental Yield",
            value: format_percent(metrics.cap_rate),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Cash on Cash Return (Yr 1)",
            value: cash_on_cash,
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Total Cash Flow per Month",
            value: format_currency(category.monthly_cash_flow),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Total Cash Flow per Year",
            value: format_currency(category.yearly_cash_flow),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Monthly Expenses Excluding Mortgage",
            value: format_currency(category.monthly_expenses),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Yearly Expenses Excluding Mortgage",
            value: format_currency(category.monthly_expenses * MONTHS_PER_YEAR as f64),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Monthly Expenses Including Mortgage",
            value: format_currency(category.monthly_expenses + metrics.monthly_mortgage_payment),
        },
        SummaryCard {
            group: CardGroup::Primary,
            label: "Yearly Expenses Including Mortgage",
            value: format_currency(category.yearly_outgoings),
        },
        SummaryCard {
            group: CardGroup::Secondary,
            label: "Monthly Cash Flow",
            value: format_currency(simple.monthly_cash_flow),
        },
        SummaryCard {
            group: CardGroup::Secondary,
            label: "Net Operating Income (NOI)",
            value: format_currency(metrics.net_operating_income),
        },
        SummaryCard {
            group: CardGroup::Secondary,
            label: "Capitalization Rate",
            value: format_percent(metrics.operating_cap_rate),
        },
        SummaryCard {
            group: CardGroup::Secondary,
            label: "Cash on Cash Return",
            value: format_percent(metrics.cash_on_cash_return),
        },
    ]
}
