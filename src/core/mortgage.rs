use tracing::debug;

use super::types::MONTHS_PER_YEAR;

/// Amount being financed. The mortgage field is independent of price, so the
/// down payment is subtracted from it as entered.
pub fn loan_principal(mortgage_amount: f64, down_payment_amount: f64) -> f64 {
    mortgage_amount - down_payment_amount
}

pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// Level payment of a fixed-rate amortizing loan. Falls back to 0 whenever the
/// closed form is not finite (zero rate, zero term, garbage inputs).
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    let periods = term_years * MONTHS_PER_YEAR as f64;
    let growth = (1.0 + rate).powf(periods);
    let payment = (principal * rate * growth) / (growth - 1.0);
    if payment.is_finite() {
        payment
    } else {
        debug!(
            principal,
            annual_rate_percent, term_years, "payment formula not finite, using 0"
        );
        0.0
    }
}

pub fn annual_payment(monthly_payment: f64) -> f64 {
    monthly_payment * MONTHS_PER_YEAR as f64
}

pub fn loan_to_value(mortgage_amount: f64, property_price: f64) -> f64 {
    (mortgage_amount / property_price) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn thirty_year_payment_on_full_price() {
        let principal = loan_principal(730_000.0, 0.0);
        assert_eq!(principal, 730_000.0);
        let payment = monthly_payment(principal, 6.39, 30.0);
        assert_approx_tol(payment, 4561.414, 1e-3);
        assert_approx_tol(annual_payment(payment), payment * 12.0, 1e-9);
    }

    #[test]
    fn twenty_five_year_payment_is_higher() {
        let thirty = monthly_payment(730_000.0, 6.39, 30.0);
        let twenty_five = monthly_payment(730_000.0, 6.39, 25.0);
        assert_approx_tol(twenty_five, 4878.954, 1e-3);
        assert!(twenty_five > thirty);
    }

    #[test]
    fn down_payment_is_subtracted_from_mortgage_field_as_entered() {
        // mortgage field left at full price while a down payment was entered
        assert_eq!(loan_principal(730_000.0, 146_000.0), 584_000.0);
        // mortgage field already net of the down payment: subtracted again
        assert_eq!(loan_principal(584_000.0, 146_000.0), 438_000.0);
    }

    #[test]
    fn unstable_formula_falls_back_to_zero() {
        assert_eq!(monthly_payment(730_000.0, 0.0, 30.0), 0.0);
        assert_eq!(monthly_payment(730_000.0, 6.39, 0.0), 0.0);
        assert_eq!(monthly_payment(f64::NAN, 6.39, 30.0), 0.0);
    }

    #[test]
    fn zero_principal_has_zero_payment() {
        assert_eq!(monthly_payment(0.0, 6.39, 30.0), 0.0);
    }

    #[test]
    fn loan_to_value_of_full_price_mortgage() {
        assert_approx_tol(loan_to_value(730_000.0, 730_000.0), 100.0, 1e-12);
        assert_approx_tol(loan_to_value(584_000.0, 730_000.0), 80.0, 1e-12);
    }

    #[test]
    fn loan_to_value_without_price_is_not_finite() {
        assert!(loan_to_value(730_000.0, 0.0).is_infinite());
        assert!(loan_to_value(0.0, 0.0).is_nan());
    }
}
