//! Point-in-time investment metrics.
//!
//! Two expense bases live side by side here. The simple basis charges
//! maintenance and management as a percent of rent plus flat annual tax and
//! insurance; the category basis is the eight-rate model in `expenses`. They
//! answer different cards and are never merged.

use super::types::{CashFlowSummary, MONTHS_PER_YEAR};

const ONE_PERCENT: f64 = 0.01;
const FIFTY_PERCENT: f64 = 0.5;

pub fn annual_operating_expenses(
    annual_rent: f64,
    maintenance_percent: f64,
    management_percent: f64,
    property_tax: f64,
    insurance: f64,
) -> f64 {
    let maintenance = (annual_rent * maintenance_percent) / 100.0;
    let management = (annual_rent * management_percent) / 100.0;
    maintenance + management + property_tax + insurance
}

/// Annual NOI as the calculator defines it: debt service is subtracted too.
pub fn net_operating_income(
    annual_rent: f64,
    annual_operating_expenses: f64,
    annual_mortgage_payments: f64,
) -> f64 {
    annual_rent - annual_operating_expenses - annual_mortgage_payments
}

/// Reported "cap rate": gross yearly income over price, i.e. gross yield.
pub fn cap_rate(yearly_income: f64, property_price: f64) -> f64 {
    (yearly_income / property_price) * 100.0
}

/// Rent net of simple-basis operating expenses over price.
pub fn operating_cap_rate(
    annual_rent: f64,
    annual_operating_expenses: f64,
    property_price: f64,
) -> f64 {
    ((annual_rent - annual_operating_expenses) / property_price) * 100.0
}

pub fn cash_on_cash_return(
    net_operating_income: f64,
    annual_mortgage_payments: f64,
    down_payment: f64,
    closing_costs: f64,
) -> f64 {
    let invested = down_payment + closing_costs;
    ((net_operating_income - annual_mortgage_payments) / invested) * 100.0
}

pub fn one_percent_rule(monthly_rent: f64, property_price: f64) -> bool {
    monthly_rent >= property_price * ONE_PERCENT
}

/// Monthly outgoings under the simple basis, charged against the single
/// `monthly_rent` field rather than the unit rents.
pub fn simple_monthly_expenses(
    monthly_rent: f64,
    maintenance_percent: f64,
    management_percent: f64,
    property_tax: f64,
    insurance: f64,
) -> f64 {
    let months = MONTHS_PER_YEAR as f64;
    property_tax / months
        + insurance / months
        + (monthly_rent * maintenance_percent) / 100.0
        + (monthly_rent * management_percent) / 100.0
}

pub fn fifty_percent_rule(monthly_expenses: f64, gross_monthly_income: f64) -> bool {
    monthly_expenses <= gross_monthly_income * FIFTY_PERCENT
}

pub fn cash_flow(income: f64, mortgage_payment: f64, expenses: f64) -> f64 {
    income - (mortgage_payment + expenses)
}

/// Cash-flow cards for the eight-category basis. The monthly expense total
/// arrives already rounded to whole dollars and the yearly figure charges the
/// mortgage payment rounded to cents, matching the summary cards.
pub fn category_cash_flow(
    gross_monthly_income: f64,
    rounded_monthly_expenses: f64,
    monthly_mortgage_payment: f64,
    cents_monthly_mortgage_payment: f64,
) -> CashFlowSummary {
    let months = MONTHS_PER_YEAR as f64;
    let yearly_mortgage = cents_monthly_mortgage_payment * months;
    let yearly_expenses = rounded_monthly_expenses * months;
    CashFlowSummary {
        monthly_expenses: rounded_monthly_expenses,
        monthly_operating_income: gross_monthly_income - rounded_monthly_expenses,
        monthly_cash_flow: cash_flow(
            gross_monthly_income,
            monthly_mortgage_payment,
            rounded_monthly_expenses,
        ),
        yearly_outgoings: yearly_mortgage + yearly_expenses,
        yearly_cash_flow: cash_flow(
            gross_monthly_income * months,
            yearly_mortgage,
            yearly_expenses,
        ),
    }
}

pub fn simple_cash_flow(
    gross_monthly_income: f64,
    annual_operating_expenses: f64,
    monthly_mortgage_payment: f64,
) -> CashFlowSummary {
    let months = MONTHS_PER_YEAR as f64;
    let monthly_expenses = annual_operating_expenses / months;
    CashFlowSummary {
        monthly_expenses,
        monthly_operating_income: gross_monthly_income - monthly_expenses,
        monthly_cash_flow: cash_flow(
            gross_monthly_income,
            monthly_mortgage_payment,
            monthly_expenses,
        ),
        yearly_outgoings: monthly_mortgage_payment * months + annual_operating_expenses,
        yearly_cash_flow: cash_flow(
            gross_monthly_income * months,
            monthly_mortgage_payment * months,
            annual_operating_expenses,
        ),
    }
}
