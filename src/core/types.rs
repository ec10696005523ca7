use serde::Serialize;

pub const MAX_UNITS: usize = 10;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const PROJECTION_YEARS: u32 = 30;
/// Longest loan term the schedules emit rows for.
pub const MAX_TERM_YEARS: u32 = 100;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseCategory {
    Maintenance,
    Tax,
    Utilities,
    Water,
    Insurance,
    Cleaning,
    Other,
    Management,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Maintenance,
        ExpenseCategory::Tax,
        ExpenseCategory::Utilities,
        ExpenseCategory::Water,
        ExpenseCategory::Insurance,
        ExpenseCategory::Cleaning,
        ExpenseCategory::Other,
        ExpenseCategory::Management,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::Tax => "Property Tax",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Water => "Water",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Cleaning => "Cleaning",
            ExpenseCategory::Other => "Other",
            ExpenseCategory::Management => "Property Management",
        }
    }
}

/// Per-category expense rates, each a percent of gross monthly income.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRates {
    pub maintenance: f64,
    pub tax: f64,
    pub utilities: f64,
    pub water: f64,
    pub insurance: f64,
    pub cleaning: f64,
    pub other: f64,
    pub management: f64,
}

impl ExpenseRates {
    pub fn rate(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Maintenance => self.maintenance,
            ExpenseCategory::Tax => self.tax,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::Water => self.water,
            ExpenseCategory::Insurance => self.insurance,
            ExpenseCategory::Cleaning => self.cleaning,
            ExpenseCategory::Other => self.other,
            ExpenseCategory::Management => self.management,
        }
    }

    pub fn with_rate(mut self, category: ExpenseCategory, rate: f64) -> Self {
        let slot = match category {
            ExpenseCategory::Maintenance => &mut self.maintenance,
            ExpenseCategory::Tax => &mut self.tax,
            ExpenseCategory::Utilities => &mut self.utilities,
            ExpenseCategory::Water => &mut self.water,
            ExpenseCategory::Insurance => &mut self.insurance,
            ExpenseCategory::Cleaning => &mut self.cleaning,
            ExpenseCategory::Other => &mut self.other,
            ExpenseCategory::Management => &mut self.management,
        };
        *slot = rate;
        self
    }

    pub fn total_rate(&self) -> f64 {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| self.rate(category))
            .sum()
    }
}

/// Every user-editable field at the moment of calculation.
///
/// Rents stay as the raw text the user typed; the income aggregator owns their
/// parsing. Everything else has already gone through the lenient field parse.
#[derive(Debug, Clone)]
pub struct InputSnapshot {
    pub property_price: f64,
    pub down_payment_amount: f64,
    pub closing_cost_amount: f64,
    pub repair_cost: f64,
    pub mortgage_amount: f64,
    /// Annual percent, e.g. `6.39`.
    pub interest_rate: f64,
    pub loan_term_years: f64,
    pub unit_rents: Vec<String>,
    pub other_income: String,
    pub expense_rates: ExpenseRates,
    pub monthly_rent: f64,
    pub maintenance_percent: f64,
    pub management_percent: f64,
    /// Annual dollars.
    pub property_tax: f64,
    /// Annual dollars.
    pub insurance: f64,
    pub appreciation_rate: f64,
    pub cash_on_cash_override: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAmortizationRow {
    pub period: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAmortizationRow {
    pub year: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub monthly: Vec<MonthlyAmortizationRow>,
    pub yearly: Vec<YearlyAmortizationRow>,
}

impl AmortizationSchedule {
    pub fn total_interest(&self) -> f64 {
        self.monthly.iter().map(|row| row.interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.monthly.iter().map(|row| row.payment).sum()
    }

    pub fn final_balance(&self) -> Option<f64> {
        self.monthly.last().map(|row| row.balance)
    }

    pub fn yearly_row(&self, year: u32) -> Option<&YearlyAmortizationRow> {
        self.yearly.iter().find(|row| row.year == year)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityProjectionRow {
    pub year: u32,
    pub property_value: f64,
    pub remaining_loan_balance: f64,
    pub total_equity: f64,
    pub equity_from_appreciation: f64,
    pub equity_from_paydown: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    pub category: ExpenseCategory,
    pub label: &'static str,
    pub rate: f64,
    pub monthly_amount: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub monthly_expenses: f64,
    pub monthly_operating_income: f64,
    pub monthly_cash_flow: f64,
    /// Yearly expenses plus yearly mortgage payments.
    pub yearly_outgoings: f64,
    pub yearly_cash_flow: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentMetrics {
    pub total_monthly_rent: f64,
    pub gross_monthly_income: f64,
    pub yearly_income: f64,
    pub loan_principal: f64,
    pub monthly_mortgage_payment: f64,
    pub annual_mortgage_payment: f64,
    pub loan_to_value: f64,
    pub total_capital_required: f64,
    pub monthly_expense_total: f64,
    pub yearly_expense_total: f64,
    pub expense_to_income_ratio: Option<f64>,
    pub annual_operating_expenses: f64,
    pub net_operating_income: f64,
    pub cap_rate: f64,
    pub operating_cap_rate: f64,
    pub cash_on_cash_return: f64,
    pub cash_on_cash_override: Option<String>,
    pub one_percent_rule: bool,
    pub fifty_percent_rule: bool,
    pub category_cash_flow: CashFlowSummary,
    pub simple_cash_flow: CashFlowSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanComparison {
    pub term_years: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub schedule: AmortizationSchedule,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub metrics: InvestmentMetrics,
    pub expenses: Vec<ExpenseLine>,
    pub amortization: AmortizationSchedule,
    pub loan_comparisons: Vec<LoanComparison>,
    pub equity_projection: Vec<EquityProjectionRow>,
}
