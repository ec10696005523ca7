//! Purchase-side derivations: amounts that can be entered either in dollars
//! or as a percent of the price.

use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LastEdited {
    Amount,
    Percent,
}

/// One quantity with two views. Whichever view was edited last is kept and the
/// other is derived from the price.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PriceShare {
    Amount(f64),
    Percent(f64),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShare {
    pub amount: f64,
    pub percent: f64,
    pub authority: LastEdited,
}

pub fn amount_from_percent(property_price: f64, percent: f64) -> f64 {
    (property_price * percent) / 100.0
}

pub fn percent_from_amount(property_price: f64, amount: f64) -> f64 {
    (amount / property_price) * 100.0
}

impl PriceShare {
    /// Picks the authoritative view. `edited` names the view the user touched
    /// last; without it a lone value wins, and the amount wins a tie.
    pub fn select(amount: Option<f64>, percent: Option<f64>, edited: Option<LastEdited>) -> Self {
        match (edited, amount, percent) {
            (Some(LastEdited::Percent), _, Some(percent)) => PriceShare::Percent(percent),
            (Some(LastEdited::Amount), Some(amount), _) => PriceShare::Amount(amount),
            (_, Some(amount), _) => PriceShare::Amount(amount),
            (_, None, Some(percent)) => PriceShare::Percent(percent),
            (_, None, None) => PriceShare::Amount(0.0),
        }
    }

    pub fn resolve(self, property_price: f64) -> ResolvedShare {
        match self {
            PriceShare::Amount(amount) => ResolvedShare {
                amount,
                percent: percent_from_amount(property_price, amount),
                authority: LastEdited::Amount,
            },
            PriceShare::Percent(percent) => ResolvedShare {
                amount: amount_from_percent(property_price, percent),
                percent,
                authority: LastEdited::Percent,
            },
        }
    }
}

pub fn total_capital_required(down_payment: f64, closing_costs: f64, repair_cost: f64) -> f64 {
    down_payment + closing_costs + repair_cost
}
