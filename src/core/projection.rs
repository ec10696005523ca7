use super::amortization::amortize_month;
use super::mortgage::{monthly_payment, monthly_rate};
use super::types::{EquityProjectionRow, MONTHS_PER_YEAR, PROJECTION_YEARS};

/// Used when the appreciation field is zero, blank or unparseable.
pub const DEFAULT_APPRECIATION_RATE: f64 = 4.0;

pub fn effective_appreciation_rate(appreciation_rate_percent: f64) -> f64 {
    if appreciation_rate_percent == 0.0 || appreciation_rate_percent.is_nan() {
        DEFAULT_APPRECIATION_RATE
    } else {
        appreciation_rate_percent
    }
}

pub fn property_value(property_price: f64, appreciation_rate_percent: f64, year: u32) -> f64 {
    property_price * (1.0 + appreciation_rate_percent / 100.0).powf(year as f64)
}

/// Balance left after replaying `months` payments from the original principal.
pub fn remaining_loan_balance(
    principal: f64,
    annual_rate_percent: f64,
    payment: f64,
    months: u32,
) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    (0..months).fold(principal, |balance, _| {
        amortize_month(balance, rate, payment).balance
    })
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionInputs {
    pub property_price: f64,
    pub down_payment: f64,
    pub loan_principal: f64,
    pub interest_rate: f64,
    pub loan_term_years: f64,
    pub appreciation_rate: f64,
}

/// Thirty yearly points, year 0 being the purchase.
///
/// The balance is carried forward one year at a time, which performs exactly
/// the same floating-point steps as replaying `year * 12` months from scratch.
pub fn equity_projection(inputs: ProjectionInputs) -> Vec<EquityProjectionRow> {
    let appreciation = effective_appreciation_rate(inputs.appreciation_rate);
    let payment = monthly_payment(
        inputs.loan_principal,
        inputs.interest_rate,
        inputs.loan_term_years,
    );
    let price = inputs.property_price;
    let mut balance = inputs.loan_principal;

    let mut rows = Vec::with_capacity(PROJECTION_YEARS as usize);
    for year in 0..PROJECTION_YEARS {
        if year > 0 {
            balance = remaining_loan_balance(
                balance,
                inputs.interest_rate,
                payment,
                MONTHS_PER_YEAR,
            );
        }
        let value = property_value(price, appreciation, year);
        rows.push(EquityProjectionRow {
            year,
            property_value: value,
            remaining_loan_balance: balance,
            total_equity: value - balance,
            equity_from_appreciation: value - price,
            equity_from_paydown: inputs.down_payment + (price - balance),
        });
    }
    rows
}

/// Gain over purchase price after `year` years at the raw (not defaulted) rate.
pub fn capital_appreciation(property_price: f64, appreciation_rate_percent: f64, year: u32) -> f64 {
    property_value(property_price, appreciation_rate_percent, year) - property_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn reference_inputs() -> ProjectionInputs {
        ProjectionInputs {
            property_price: 730_000.0,
            down_payment: 0.0,
            loan_principal: 730_000.0,
            interest_rate: 6.39,
            loan_term_years: 30.0,
            appreciation_rate: 4.0,
        }
    }

    #[test]
    fn projection_has_thirty_points_from_purchase() {
        let rows = equity_projection(reference_inputs());
        assert_eq!(rows.len(), 30);
        assert_eq!(rows[0].year, 0);
        assert_eq!(rows[29].year, 29);

        let purchase = rows[0];
        assert_eq!(purchase.property_value, 730_000.0);
        assert_eq!(purchase.remaining_loan_balance, 730_000.0);
        assert_eq!(purchase.total_equity, 0.0);
        assert_eq!(purchase.equity_from_appreciation, 0.0);
        assert_eq!(purchase.equity_from_paydown, 0.0);
    }

    #[test]
    fn value_compounds_yearly() {
        let rows = equity_projection(reference_inputs());
        assert_approx_tol(rows[1].property_value, 759_200.0, 1e-6);
        assert_approx_tol(rows[2].property_value, 730_000.0 * 1.04 * 1.04, 1e-6);
        assert_approx_tol(rows[1].equity_from_appreciation, 29_200.0, 1e-6);
    }

    #[test]
    fn balances_match_full_replay_exactly() {
        let inputs = reference_inputs();
        let payment = monthly_payment(inputs.loan_principal, inputs.interest_rate, 30.0);
        for row in equity_projection(inputs) {
            let replayed = remaining_loan_balance(
                inputs.loan_principal,
                inputs.interest_rate,
                payment,
                row.year * 12,
            );
            assert_eq!(row.remaining_loan_balance, replayed, "year {}", row.year);
        }
    }

    #[test]
    fn paydown_equity_counts_down_payment_and_principal_repaid() {
        let mut inputs = reference_inputs();
        inputs.down_payment = 146_000.0;
        inputs.loan_principal = 584_000.0;
        let rows = equity_projection(inputs);
        assert_eq!(rows[0].equity_from_paydown, 146_000.0 + 146_000.0);
        assert!(rows[10].equity_from_paydown > rows[1].equity_from_paydown);
    }

    #[test]
    fn zero_or_blank_appreciation_defaults_to_four_percent() {
        assert_eq!(effective_appreciation_rate(0.0), DEFAULT_APPRECIATION_RATE);
        assert_eq!(effective_appreciation_rate(f64::NAN), DEFAULT_APPRECIATION_RATE);
        assert_eq!(effective_appreciation_rate(-1.5), -1.5);

        let mut inputs = reference_inputs();
        inputs.appreciation_rate = 0.0;
        let rows = equity_projection(inputs);
        assert_approx_tol(rows[1].property_value, 759_200.0, 1e-6);
    }

    #[test]
    fn zero_interest_keeps_balance_flat() {
        let mut inputs = reference_inputs();
        inputs.interest_rate = 0.0;
        let rows = equity_projection(inputs);
        assert!(rows.iter().all(|row| row.remaining_loan_balance == 730_000.0));
    }

    #[test]
    fn capital_appreciation_uses_raw_rate() {
        assert_approx_tol(capital_appreciation(730_000.0, 4.0, 1), 29_200.0, 1e-6);
        assert_eq!(capital_appreciation(730_000.0, 0.0, 25), 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_total_equity_is_value_minus_balance(
            price in 50_000u32..3_000_000,
            down_pct in 0u32..60,
            rate_bp in 0u32..1500,
            term in 5u32..41,
            appreciation_bp in -300i32..900
        ) {
            let price = price as f64;
            let down_payment = price * down_pct as f64 / 100.0;
            let rows = equity_projection(ProjectionInputs {
                property_price: price,
                down_payment,
                loan_principal: price - down_payment,
                interest_rate: rate_bp as f64 / 100.0,
                loan_term_years: term as f64,
                appreciation_rate: appreciation_bp as f64 / 100.0,
            });
            prop_assert_eq!(rows.len(), 30);
            for row in rows {
                prop_assert_eq!(row.total_equity, row.property_value - row.remaining_loan_balance);
            }
        }
    }
}
