mod amortization;
mod engine;
mod expenses;
mod income;
mod metrics;
mod mortgage;
mod numeric;
mod projection;
mod purchase;
mod types;

pub use amortization::amortization_schedule;
pub use engine::{COMPARISON_TERMS, analyze, investment_metrics, loan_comparison};
pub use expenses::{
    category_amount, expense_breakdown, expense_to_income_ratio, monthly_expense_total,
    rate_from_amount, rounded_monthly_expense_total, yearly_expense_total,
};
pub use income::{gross_monthly_income, total_monthly_rent, yearly_income};
pub use metrics::{
    annual_operating_expenses, cap_rate, cash_flow, cash_on_cash_return, fifty_percent_rule,
    net_operating_income, one_percent_rule, operating_cap_rate, simple_monthly_expenses,
};
pub use mortgage::{annual_payment, loan_principal, loan_to_value, monthly_payment, monthly_rate};
pub use numeric::{parse_amount, parse_strict};
pub use projection::{
    DEFAULT_APPRECIATION_RATE, ProjectionInputs, capital_appreciation,
    effective_appreciation_rate, equity_projection, property_value, remaining_loan_balance,
};
pub use purchase::{LastEdited, PriceShare, ResolvedShare, total_capital_required};
pub use types::{
    AmortizationSchedule, Analysis, CashFlowSummary, EquityProjectionRow, ExpenseCategory,
    ExpenseLine, ExpenseRates, InputSnapshot, InvestmentMetrics, LoanComparison, MAX_TERM_YEARS,
    MAX_UNITS, MONTHS_PER_YEAR, MonthlyAmortizationRow, PROJECTION_YEARS, YearlyAmortizationRow,
};
