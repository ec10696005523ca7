use super::amortization::amortization_schedule;
use super::expenses::{
    expense_breakdown, expense_to_income_ratio, monthly_expense_total,
    rounded_monthly_expense_total, yearly_expense_total,
};
use super::income::{gross_monthly_income, total_monthly_rent, yearly_income};
use super::metrics::{
    annual_operating_expenses, cap_rate, cash_on_cash_return, category_cash_flow,
    fifty_percent_rule, net_operating_income, one_percent_rule, operating_cap_rate,
    simple_cash_flow, simple_monthly_expenses,
};
use super::mortgage::{annual_payment, loan_principal, loan_to_value, monthly_payment};
use super::numeric::round_to_cents;
use super::projection::{ProjectionInputs, equity_projection};
use super::purchase::total_capital_required;
use super::types::{Analysis, InputSnapshot, InvestmentMetrics, LoanComparison};

/// Loan terms the comparison view always shows, whatever term was entered.
pub const COMPARISON_TERMS: [u32; 2] = [25, 30];

impl InputSnapshot {
    pub fn gross_monthly_income(&self) -> f64 {
        gross_monthly_income(&self.unit_rents, &self.other_income)
    }

    pub fn loan_principal(&self) -> f64 {
        loan_principal(self.mortgage_amount, self.down_payment_amount)
    }

    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(
            self.loan_principal(),
            self.interest_rate,
            self.loan_term_years,
        )
    }

    pub fn projection_inputs(&self) -> ProjectionInputs {
        ProjectionInputs {
            property_price: self.property_price,
            down_payment: self.down_payment_amount,
            loan_principal: self.loan_principal(),
            interest_rate: self.interest_rate,
            loan_term_years: self.loan_term_years,
            appreciation_rate: self.appreciation_rate,
        }
    }
}

pub fn investment_metrics(snapshot: &InputSnapshot) -> InvestmentMetrics {
    let gross = snapshot.gross_monthly_income();
    let yearly = yearly_income(gross);
    let principal = snapshot.loan_principal();
    let payment = snapshot.monthly_payment();
    let annual_mortgage = annual_payment(payment);

    let opex = annual_operating_expenses(
        yearly,
        snapshot.maintenance_percent,
        snapshot.management_percent,
        snapshot.property_tax,
        snapshot.insurance,
    );
    let noi = net_operating_income(yearly, opex, annual_mortgage);

    let rates = &snapshot.expense_rates;
    let yearly_expenses = yearly_expense_total(rates, gross);
    let simple_monthly = simple_monthly_expenses(
        snapshot.monthly_rent,
        snapshot.maintenance_percent,
        snapshot.management_percent,
        snapshot.property_tax,
        snapshot.insurance,
    );
    let override_text = snapshot.cash_on_cash_override.trim();

    InvestmentMetrics {
        total_monthly_rent: total_monthly_rent(&snapshot.unit_rents),
        gross_monthly_income: gross,
        yearly_income: yearly,
        loan_principal: principal,
        monthly_mortgage_payment: payment,
        annual_mortgage_payment: annual_mortgage,
        loan_to_value: loan_to_value(snapshot.mortgage_amount, snapshot.property_price),
        total_capital_required: total_capital_required(
            snapshot.down_payment_amount,
            snapshot.closing_cost_amount,
            snapshot.repair_cost,
        ),
        monthly_expense_total: monthly_expense_total(rates, gross),
        yearly_expense_total: yearly_expenses,
        expense_to_income_ratio: expense_to_income_ratio(yearly_expenses, yearly),
        annual_operating_expenses: opex,
        net_operating_income: noi,
        cap_rate: cap_rate(yearly, snapshot.property_price),
        operating_cap_rate: operating_cap_rate(yearly, opex, snapshot.property_price),
        cash_on_cash_return: cash_on_cash_return(
            noi,
            annual_mortgage,
            snapshot.down_payment_amount,
            snapshot.closing_cost_amount,
        ),
        cash_on_cash_override: (!override_text.is_empty()).then(|| override_text.to_string()),
        one_percent_rule: one_percent_rule(snapshot.monthly_rent, snapshot.property_price),
        fifty_percent_rule: fifty_percent_rule(simple_monthly, gross),
        category_cash_flow: category_cash_flow(
            gross,
            rounded_monthly_expense_total(rates, gross),
            payment,
            round_to_cents(payment),
        ),
        simple_cash_flow: simple_cash_flow(gross, opex, payment),
    }
}

pub fn loan_comparison(snapshot: &InputSnapshot, term_years: u32) -> LoanComparison {
    let principal = snapshot.loan_principal();
    let schedule = amortization_schedule(principal, snapshot.interest_rate, term_years as f64);
    LoanComparison {
        term_years,
        monthly_payment: monthly_payment(principal, snapshot.interest_rate, term_years as f64),
        total_paid: schedule.total_paid(),
        total_interest: schedule.total_interest(),
        schedule,
    }
}

/// Everything the calculator shows, recomputed from scratch for one snapshot.
pub fn analyze(snapshot: &InputSnapshot) -> Analysis {
    let gross = snapshot.gross_monthly_income();
    Analysis {
        metrics: investment_metrics(snapshot),
        expenses: expense_breakdown(&snapshot.expense_rates, gross),
        amortization: amortization_schedule(
            snapshot.loan_principal(),
            snapshot.interest_rate,
            snapshot.loan_term_years,
        ),
        loan_comparisons: COMPARISON_TERMS
            .iter()
            .map(|&term| loan_comparison(snapshot, term))
            .collect(),
        equity_projection: equity_projection(snapshot.projection_inputs()),
    }
}
