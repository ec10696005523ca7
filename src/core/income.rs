use super::numeric::parse_amount;
use super::types::MONTHS_PER_YEAR;

/// Sums the unit rents the user typed. Blank or unparseable units add nothing.
pub fn total_monthly_rent<S: AsRef<str>>(units: &[S]) -> f64 {
    units.iter().map(|unit| parse_amount(unit.as_ref())).sum()
}

pub fn gross_monthly_income<S: AsRef<str>>(units: &[S], other_income: &str) -> f64 {
    total_monthly_rent(units) + parse_amount(other_income)
}

pub fn yearly_income(gross_monthly_income: f64) -> f64 {
    gross_monthly_income * MONTHS_PER_YEAR as f64
}
