use super::mortgage::{monthly_payment, monthly_rate};
use super::types::{
    AmortizationSchedule, MAX_TERM_YEARS, MONTHS_PER_YEAR, MonthlyAmortizationRow,
    YearlyAmortizationRow,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct MonthStep {
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// One month of the amortization recurrence. The balance never goes negative.
pub(crate) fn amortize_month(balance: f64, monthly_rate: f64, payment: f64) -> MonthStep {
    let interest = balance * monthly_rate;
    let principal = payment - interest;
    MonthStep {
        interest,
        principal,
        balance: (balance - principal).max(0.0),
    }
}

/// Whole years of rows to emit for a term; fractional years only affect the
/// payment. Rows stop after `MAX_TERM_YEARS`.
fn schedule_years(term_years: f64) -> u32 {
    if term_years.is_finite() && term_years >= 1.0 {
        term_years.floor().min(MAX_TERM_YEARS as f64) as u32
    } else {
        0
    }
}

fn schedule_months(years: u32) -> u32 {
    years.saturating_mul(MONTHS_PER_YEAR)
}

/// Month-by-month schedule for `term_years`, plus yearly aggregates.
///
/// A non-positive principal or rate yields flat rows: nothing is paid and the
/// balance stays where it started (floored at 0).
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> AmortizationSchedule {
    let years = schedule_years(term_years);
    let rate = monthly_rate(annual_rate_percent);

    if !(principal > 0.0 && rate > 0.0) {
        return flat_schedule(years, principal.max(0.0));
    }

    let payment = monthly_payment(principal, annual_rate_percent, term_years);
    let mut monthly = Vec::with_capacity(schedule_months(years) as usize);
    let mut yearly = Vec::with_capacity(years as usize);
    let mut balance = principal;

    for year in 1..=years {
        let mut year_principal = 0.0;
        let mut year_interest = 0.0;

        for month in 1..=MONTHS_PER_YEAR {
            let step = amortize_month(balance, rate, payment);
            monthly.push(MonthlyAmortizationRow {
                period: (year - 1) * MONTHS_PER_YEAR + month,
                payment,
                principal: step.principal,
                interest: step.interest,
                balance: step.balance,
            });
            year_principal += step.principal;
            year_interest += step.interest;
            balance = step.balance;
        }

        yearly.push(YearlyAmortizationRow {
            year,
            payment: payment * MONTHS_PER_YEAR as f64,
            principal: year_principal,
            interest: year_interest,
            balance: balance.max(0.0),
        });
    }

    AmortizationSchedule { monthly, yearly }
}

fn flat_schedule(years: u32, balance: f64) -> AmortizationSchedule {
    let monthly = (1..=schedule_months(years))
        .map(|period| MonthlyAmortizationRow {
            period,
            payment: 0.0,
            principal: 0.0,
            interest: 0.0,
            balance,
        })
        .collect();
    let yearly = (1..=years)
        .map(|year| YearlyAmortizationRow {
            year,
            payment: 0.0,
            principal: 0.0,
            interest: 0.0,
            balance,
        })
        .collect();
    AmortizationSchedule { monthly, yearly }
}
