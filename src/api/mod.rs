mod error;
mod format;
mod tables;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    Analysis, ExpenseCategory, ExpenseRates, InputSnapshot, LastEdited, MAX_TERM_YEARS, MAX_UNITS,
    PriceShare, ResolvedShare, analyze, gross_monthly_income, parse_amount, parse_strict,
};

pub use error::RequestError;
pub use format::{format_currency, format_percent};
pub use tables::{
    AppreciationPoint, CardGroup, EquityTableRow, MILESTONE_YEARS, SummaryCard,
    capital_appreciation_summary, chart_max, equity_milestones, equity_table, summary_cards,
};

const DEFAULT_CLOSING_COST_PERCENT: f64 = 4.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLastEdited {
    Amount,
    Percent,
}

impl From<CliLastEdited> for LastEdited {
    fn from(value: CliLastEdited) -> Self {
        match value {
            CliLastEdited::Amount => LastEdited::Amount,
            CliLastEdited::Percent => LastEdited::Percent,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiLastEdited {
    Amount,
    Percent,
}

impl From<ApiLastEdited> for CliLastEdited {
    fn from(value: ApiLastEdited) -> Self {
        match value {
            ApiLastEdited::Amount => CliLastEdited::Amount,
            ApiLastEdited::Percent => CliLastEdited::Percent,
        }
    }
}

/// A form field as the browser sends it: a JSON number or whatever text the
/// user typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn amount(&self) -> f64 {
        match self {
            FieldValue::Number(value) if value.is_finite() => *value,
            FieldValue::Number(_) => 0.0,
            FieldValue::Text(text) => parse_amount(text),
        }
    }

    fn text(&self) -> String {
        match self {
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

/// Unit rents as a JSON array, or comma separated in a query string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum UnitsField {
    List(Vec<FieldValue>),
    Csv(String),
}

impl UnitsField {
    fn into_texts(self) -> Vec<String> {
        match self {
            UnitsField::List(values) => values.iter().map(FieldValue::text).collect(),
            UnitsField::Csv(csv) => csv.split(',').map(|unit| unit.trim().to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AnalyzePayload {
    property_price: Option<FieldValue>,
    down_payment_amount: Option<FieldValue>,
    down_payment_percent: Option<FieldValue>,
    down_payment_edited: Option<ApiLastEdited>,
    closing_cost_amount: Option<FieldValue>,
    closing_cost_percent: Option<FieldValue>,
    closing_cost_edited: Option<ApiLastEdited>,
    repair_cost: Option<FieldValue>,

    mortgage_amount: Option<FieldValue>,
    interest_rate: Option<FieldValue>,
    loan_term: Option<FieldValue>,

    units: Option<UnitsField>,
    other_income: Option<FieldValue>,

    maintenance_rate: Option<FieldValue>,
    tax_rate: Option<FieldValue>,
    utilities_rate: Option<FieldValue>,
    water_rate: Option<FieldValue>,
    insurance_rate: Option<FieldValue>,
    cleaning_rate: Option<FieldValue>,
    other_rate: Option<FieldValue>,
    management_rate: Option<FieldValue>,
    maintenance_amount: Option<FieldValue>,
    tax_amount: Option<FieldValue>,
    utilities_amount: Option<FieldValue>,
    water_amount: Option<FieldValue>,
    insurance_amount: Option<FieldValue>,
    cleaning_amount: Option<FieldValue>,
    other_amount: Option<FieldValue>,
    management_amount: Option<FieldValue>,

    monthly_rent: Option<FieldValue>,
    maintenance: Option<FieldValue>,
    property_management: Option<FieldValue>,
    property_tax: Option<FieldValue>,
    insurance: Option<FieldValue>,

    appreciation_rate: Option<FieldValue>,
    cash_on_cash_return: Option<FieldValue>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "yieldcalc",
    about = "Rental property investment calculator (cash flow, amortization, equity projection)"
)]
struct Cli {
    #[arg(long, default_value_t = 730_000.0)]
    property_price: f64,
    #[arg(long, allow_hyphen_values = true)]
    down_payment_amount: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    down_payment_percent: Option<f64>,
    #[arg(long, value_enum, help = "Which down payment view was edited last")]
    down_payment_edited: Option<CliLastEdited>,
    #[arg(long, allow_hyphen_values = true)]
    closing_cost_amount: Option<f64>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Closing costs as a percent of price; 4 when neither view is given"
    )]
    closing_cost_percent: Option<f64>,
    #[arg(long, value_enum)]
    closing_cost_edited: Option<CliLastEdited>,
    #[arg(long, default_value_t = 3_000.0)]
    repair_cost: f64,

    #[arg(long, help = "Mortgage amount; defaults to price minus down payment")]
    mortgage_amount: Option<f64>,
    #[arg(long, default_value_t = 6.39, help = "Annual interest rate in percent")]
    interest_rate: f64,
    #[arg(long, default_value_t = 30.0, help = "Loan term in years")]
    loan_term: f64,

    #[arg(
        long = "unit-rent",
        value_name = "RENT",
        default_values = ["1480", "1480"],
        help = "Monthly rent of one unit; repeat for up to 10 units"
    )]
    unit_rents: Vec<String>,
    #[arg(long, default_value = "")]
    other_income: String,

    #[arg(long, default_value_t = 0.0, help = "Maintenance, percent of gross monthly income")]
    maintenance_rate: f64,
    #[arg(long, default_value_t = 2.2)]
    tax_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    utilities_rate: f64,
    #[arg(long, default_value_t = 1.4)]
    water_rate: f64,
    #[arg(long, default_value_t = 3.4)]
    insurance_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    cleaning_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    other_rate: f64,
    #[arg(long, default_value_t = 2.2)]
    management_rate: f64,
    #[arg(long, help = "Monthly maintenance in dollars; overrides --maintenance-rate")]
    maintenance_amount: Option<String>,
    #[arg(long)]
    tax_amount: Option<String>,
    #[arg(long)]
    utilities_amount: Option<String>,
    #[arg(long)]
    water_amount: Option<String>,
    #[arg(long)]
    insurance_amount: Option<String>,
    #[arg(long)]
    cleaning_amount: Option<String>,
    #[arg(long)]
    other_amount: Option<String>,
    #[arg(long)]
    management_amount: Option<String>,

    #[arg(
        long,
        default_value_t = 2_500.0,
        help = "Single-rent figure used by the 1% and 50% rules"
    )]
    monthly_rent: f64,
    #[arg(long, default_value_t = 10.0, help = "Maintenance, percent of rent (simple basis)")]
    maintenance: f64,
    #[arg(long, default_value_t = 8.0, help = "Management, percent of rent (simple basis)")]
    property_management: f64,
    #[arg(long, default_value_t = 6_000.0, help = "Annual property tax in dollars")]
    property_tax: f64,
    #[arg(long, default_value_t = 2_400.0, help = "Annual insurance in dollars")]
    insurance: f64,

    #[arg(long, default_value_t = 4.0, help = "Annual appreciation in percent")]
    appreciation_rate: f64,
    #[arg(
        long,
        default_value = "",
        help = "Cash-on-cash figure to show instead of the computed one"
    )]
    cash_on_cash_return: String,

    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseView {
    down_payment: ResolvedShare,
    closing_cost: ResolvedShare,
}

#[derive(Debug)]
struct ApiRequest {
    snapshot: InputSnapshot,
    purchase: PurchaseView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    purchase: PurchaseView,
    #[serde(flatten)]
    analysis: Analysis,
    equity_milestones: Vec<EquityTableRow>,
    equity_table: Vec<EquityTableRow>,
    capital_appreciation: Vec<AppreciationPoint>,
    chart_max: f64,
    summary_cards: Vec<SummaryCard>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

fn expense_amounts(cli: &Cli) -> [(ExpenseCategory, Option<&str>); 8] {
    [
        (ExpenseCategory::Maintenance, cli.maintenance_amount.as_deref()),
        (ExpenseCategory::Tax, cli.tax_amount.as_deref()),
        (ExpenseCategory::Utilities, cli.utilities_amount.as_deref()),
        (ExpenseCategory::Water, cli.water_amount.as_deref()),
        (ExpenseCategory::Insurance, cli.insurance_amount.as_deref()),
        (ExpenseCategory::Cleaning, cli.cleaning_amount.as_deref()),
        (ExpenseCategory::Other, cli.other_amount.as_deref()),
        (ExpenseCategory::Management, cli.management_amount.as_deref()),
    ]
}

fn build_request(cli: Cli) -> Result<ApiRequest, RequestError> {
    if cli.loan_term > MAX_TERM_YEARS as f64 {
        return Err(RequestError::LoanTermTooLong {
            got: cli.loan_term,
            max: MAX_TERM_YEARS,
        });
    }
    if cli.unit_rents.len() > MAX_UNITS {
        return Err(RequestError::TooManyUnits {
            got: cli.unit_rents.len(),
            max: MAX_UNITS,
        });
    }

    let price = cli.property_price;
    let down_payment = PriceShare::select(
        cli.down_payment_amount,
        cli.down_payment_percent,
        cli.down_payment_edited.map(Into::into),
    )
    .resolve(price);
    let closing_cost = match (cli.closing_cost_amount, cli.closing_cost_percent) {
        (None, None) => PriceShare::Percent(DEFAULT_CLOSING_COST_PERCENT),
        (amount, percent) => {
            PriceShare::select(amount, percent, cli.closing_cost_edited.map(Into::into))
        }
    }
    .resolve(price);
    let mortgage_amount = cli
        .mortgage_amount
        .unwrap_or(price - down_payment.amount);

    let gross = gross_monthly_income(&cli.unit_rents, &cli.other_income);
    let rates = expense_amounts(&cli).into_iter().fold(
        ExpenseRates {
            maintenance: cli.maintenance_rate,
            tax: cli.tax_rate,
            utilities: cli.utilities_rate,
            water: cli.water_rate,
            insurance: cli.insurance_rate,
            cleaning: cli.cleaning_rate,
            other: cli.other_rate,
            management: cli.management_rate,
        },
        |rates, (category, amount)| match amount {
            Some(raw) => rates.with_amount(category, parse_strict(raw), gross),
            None => rates,
        },
    );

    let snapshot = InputSnapshot {
        property_price: price,
        down_payment_amount: down_payment.amount,
        closing_cost_amount: closing_cost.amount,
        repair_cost: cli.repair_cost,
        mortgage_amount,
        interest_rate: cli.interest_rate,
        loan_term_years: cli.loan_term,
        unit_rents: cli.unit_rents,
        other_income: cli.other_income,
        expense_rates: rates,
        monthly_rent: cli.monthly_rent,
        maintenance_percent: cli.maintenance,
        management_percent: cli.property_management,
        property_tax: cli.property_tax,
        insurance: cli.insurance,
        appreciation_rate: cli.appreciation_rate,
        cash_on_cash_override: cli.cash_on_cash_return,
    };

    Ok(ApiRequest {
        snapshot,
        purchase: PurchaseView {
            down_payment,
            closing_cost,
        },
    })
}

/// Runs one analysis from command-line style arguments and returns the JSON report.
pub fn analyze_cli<I, T>(args: I) -> Result<String, RequestError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let pretty = cli.pretty;
    let request = build_request(cli)?;
    let response = build_analyze_response(&request);
    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(json)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/analyze",
            get(analyze_get_handler).post(analyze_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "yieldcalc HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/analyze");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn analyze_get_handler(payload: Result<Query<AnalyzePayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => analyze_handler_impl(payload).await,
        Err(rejection) => reject(RequestError::Body(rejection.body_text())),
    }
}

async fn analyze_post_handler(payload: Result<Json<AnalyzePayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => analyze_handler_impl(payload).await,
        Err(rejection) => reject(RequestError::Body(rejection.body_text())),
    }
}

async fn analyze_handler_impl(payload: AnalyzePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return reject(err),
    };

    let response = build_analyze_response(&request);
    let metrics = &response.analysis.metrics;
    debug!(
        gross_monthly_income = metrics.gross_monthly_income,
        monthly_payment = metrics.monthly_mortgage_payment,
        cap_rate = metrics.cap_rate,
        "analyzed snapshot"
    );
    json_response(StatusCode::OK, response)
}

fn reject(err: RequestError) -> Response {
    warn!(%err, "rejected analyze request");
    error_response(err.status(), &err.to_string())
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, RequestError> {
    let payload = serde_json::from_str::<AnalyzePayload>(json)
        .map_err(|e| RequestError::Body(format!("invalid JSON payload: {e}")))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: AnalyzePayload) -> Result<ApiRequest, RequestError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.property_price {
        cli.property_price = v.amount();
    }
    if let Some(v) = payload.down_payment_amount {
        cli.down_payment_amount = Some(v.amount());
    }
    if let Some(v) = payload.down_payment_percent {
        cli.down_payment_percent = Some(v.amount());
    }
    if let Some(v) = payload.down_payment_edited {
        cli.down_payment_edited = Some(v.into());
    }
    if let Some(v) = payload.closing_cost_amount {
        cli.closing_cost_amount = Some(v.amount());
    }
    if let Some(v) = payload.closing_cost_percent {
        cli.closing_cost_percent = Some(v.amount());
    }
    if let Some(v) = payload.closing_cost_edited {
        cli.closing_cost_edited = Some(v.into());
    }
    if let Some(v) = payload.repair_cost {
        cli.repair_cost = v.amount();
    }

    if let Some(v) = payload.mortgage_amount {
        cli.mortgage_amount = Some(v.amount());
    }
    if let Some(v) = payload.interest_rate {
        cli.interest_rate = v.amount();
    }
    if let Some(v) = payload.loan_term {
        cli.loan_term = v.amount();
    }

    if let Some(v) = payload.units {
        cli.unit_rents = v.into_texts();
    }
    if let Some(v) = payload.other_income {
        cli.other_income = v.text();
    }

    if let Some(v) = payload.maintenance_rate {
        cli.maintenance_rate = v.amount();
    }
    if let Some(v) = payload.tax_rate {
        cli.tax_rate = v.amount();
    }
    if let Some(v) = payload.utilities_rate {
        cli.utilities_rate = v.amount();
    }
    if let Some(v) = payload.water_rate {
        cli.water_rate = v.amount();
    }
    if let Some(v) = payload.insurance_rate {
        cli.insurance_rate = v.amount();
    }
    if let Some(v) = payload.cleaning_rate {
        cli.cleaning_rate = v.amount();
    }
    if let Some(v) = payload.other_rate {
        cli.other_rate = v.amount();
    }
    if let Some(v) = payload.management_rate {
        cli.management_rate = v.amount();
    }
    if let Some(v) = payload.maintenance_amount {
        cli.maintenance_amount = Some(v.text());
    }
    if let Some(v) = payload.tax_amount {
        cli.tax_amount = Some(v.text());
    }
    if let Some(v) = payload.utilities_amount {
        cli.utilities_amount = Some(v.text());
    }
    if let Some(v) = payload.water_amount {
        cli.water_amount = Some(v.text());
    }
    if let Some(v) = payload.insurance_amount {
        cli.insurance_amount = Some(v.text());
    }
    if let Some(v) = payload.cleaning_amount {
        cli.cleaning_amount = Some(v.text());
    }
    if let Some(v) = payload.other_amount {
        cli.other_amount = Some(v.text());
    }
    if let Some(v) = payload.management_amount {
        cli.management_amount = Some(v.text());
    }

    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v.amount();
    }
    if let Some(v) = payload.maintenance {
        cli.maintenance = v.amount();
    }
    if let Some(v) = payload.property_management {
        cli.property_management = v.amount();
    }
    if let Some(v) = payload.property_tax {
        cli.property_tax = v.amount();
    }
    if let Some(v) = payload.insurance {
        cli.insurance = v.amount();
    }

    if let Some(v) = payload.appreciation_rate {
        cli.appreciation_rate = v.amount();
    }
    if let Some(v) = payload.cash_on_cash_return {
        cli.cash_on_cash_return = v.text();
    }

    build_request(cli)
}

/// The calculator's initial form state.
fn default_cli_for_api() -> Cli {
    Cli {
        property_price: 730_000.0,
        down_payment_amount: None,
        down_payment_percent: None,
        down_payment_edited: None,
        closing_cost_amount: None,
        closing_cost_percent: None,
        closing_cost_edited: None,
        repair_cost: 3_000.0,
        mortgage_amount: None,
        interest_rate: 6.39,
        loan_term: 30.0,
        unit_rents: vec!["1480".to_string(), "1480".to_string()],
        other_income: String::new(),
        maintenance_rate: 0.0,
        tax_rate: 2.2,
        utilities_rate: 0.0,
        water_rate: 1.4,
        insurance_rate: 3.4,
        cleaning_rate: 0.0,
        other_rate: 0.0,
        management_rate: 2.2,
        maintenance_amount: None,
        tax_amount: None,
        utilities_amount: None,
        water_amount: None,
        insurance_amount: None,
        cleaning_amount: None,
        other_amount: None,
        management_amount: None,
        monthly_rent: 2_500.0,
        maintenance: 10.0,
        property_management: 8.0,
        property_tax: 6_000.0,
        insurance: 2_400.0,
        appreciation_rate: 4.0,
        cash_on_cash_return: String::new(),
        pretty: false,
    }
}

fn build_analyze_response(request: &ApiRequest) -> AnalyzeResponse {
    let snapshot = &request.snapshot;
    let analysis = analyze(snapshot);
    let price = snapshot.property_price;

    AnalyzeResponse {
        purchase: request.purchase,
        equity_milestones: equity_milestones(
            &analysis.equity_projection,
            &analysis.amortization,
            price,
        ),
        equity_table: equity_table(
            &analysis.equity_projection,
            &analysis.amortization,
            price,
            snapshot.loan_principal(),
        ),
        capital_appreciation: capital_appreciation_summary(price, snapshot.appreciation_rate),
        chart_max: chart_max(&analysis.metrics),
        summary_cards: summary_cards(&analysis.metrics),
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn defaults_match_the_initial_form() {
        let request = build_request(sample_cli()).expect("valid inputs");
        let snapshot = &request.snapshot;
        assert_approx(snapshot.property_price, 730_000.0);
        assert_approx(snapshot.down_payment_amount, 0.0);
        assert_approx(snapshot.closing_cost_amount, 29_200.0);
        assert_approx(snapshot.mortgage_amount, 730_000.0);
        assert_eq!(snapshot.unit_rents, vec!["1480", "1480"]);
        assert_approx(snapshot.expense_rates.total_rate(), 9.2);
        assert_eq!(request.purchase.closing_cost.authority, LastEdited::Percent);
    }

    #[test]
    fn cli_defaults_agree_with_api_defaults() {
        let parsed = Cli::try_parse_from(["yieldcalc"]).expect("defaults parse");
        let parsed = build_request(parsed).expect("valid inputs").snapshot;
        let api = build_request(sample_cli()).expect("valid inputs").snapshot;
        assert_eq!(parsed.unit_rents, api.unit_rents);
        assert_approx(parsed.property_price, api.property_price);
        assert_approx(parsed.closing_cost_amount, api.closing_cost_amount);
        assert_approx(parsed.monthly_rent, api.monthly_rent);
        assert_eq!(parsed.expense_rates, api.expense_rates);
    }

    #[test]
    fn mortgage_defaults_to_price_minus_down_payment() {
        let mut cli = sample_cli();
        cli.down_payment_percent = Some(20.0);
        let request = build_request(cli).expect("valid inputs");
        assert_approx(request.snapshot.down_payment_amount, 146_000.0);
        assert_approx(request.snapshot.mortgage_amount, 584_000.0);
        // principal subtracts the down payment from the mortgage field again
        assert_approx(request.snapshot.loan_principal(), 438_000.0);
    }

    #[test]
    fn build_request_rejects_overlong_terms() {
        let mut cli = sample_cli();
        cli.loan_term = 250.0;
        let err = build_request(cli).expect_err("must reject long terms");
        assert!(matches!(err, RequestError::LoanTermTooLong { max: 100, .. }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn build_request_rejects_more_than_ten_units() {
        let mut cli = sample_cli();
        cli.unit_rents = vec!["900".to_string(); 11];
        let err = build_request(cli).expect_err("must reject 11 units");
        assert!(err.to_string().contains("at most 10"));
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let json = r#"{
          "propertyPrice": "500000",
          "downPaymentAmount": 50000,
          "downPaymentPercent": "25",
          "downPaymentEdited": "percent",
          "closingCostAmount": 12000,
          "repairCost": "",
          "interestRate": 5.5,
          "loanTerm": "25",
          "units": [1800, "1700", "", "n/a"],
          "otherIncome": "100",
          "taxRate": 3,
          "waterAmount": "35",
          "monthlyRent": 3500,
          "appreciationRate": "3",
          "cashOnCashReturn": "8%"
        }"#;
        let request = api_request_from_json(json).expect("json should parse");
        let snapshot = request.snapshot;

        assert_approx(snapshot.property_price, 500_000.0);
        assert_eq!(request.purchase.down_payment.authority, LastEdited::Percent);
        assert_approx(snapshot.down_payment_amount, 125_000.0);
        assert_approx(snapshot.closing_cost_amount, 12_000.0);
        assert_approx(request.purchase.closing_cost.percent, 2.4);
        assert_approx(snapshot.repair_cost, 0.0);
        assert_approx(snapshot.mortgage_amount, 375_000.0);
        assert_approx(snapshot.interest_rate, 5.5);
        assert_approx(snapshot.loan_term_years, 25.0);
        assert_eq!(snapshot.unit_rents, vec!["1800", "1700", "", "n/a"]);
        assert_approx(snapshot.gross_monthly_income(), 3_600.0);
        assert_approx(snapshot.expense_rates.tax, 3.0);
        assert_approx(snapshot.expense_rates.water, 35.0 / 3_600.0 * 100.0);
        assert_approx(snapshot.monthly_rent, 3_500.0);
        assert_approx(snapshot.appreciation_rate, 3.0);
        assert_eq!(snapshot.cash_on_cash_override, "8%");
    }

    #[test]
    fn blank_expense_amount_surfaces_as_nan_rate() {
        let request = api_request_from_json(r#"{"cleaningAmount": ""}"#).expect("json parses");
        assert!(request.snapshot.expense_rates.cleaning.is_nan());

        let request = api_request_from_json(r#"{"units": [], "taxAmount": 100}"#)
            .expect("json parses");
        assert!(request.snapshot.expense_rates.tax.is_infinite());
    }

    #[test]
    fn query_string_accepts_comma_separated_units() {
        let uri: Uri = "/api/analyze?propertyPrice=400000&units=1200,%201300,&loanTerm=15&downPaymentEdited=amount&downPaymentAmount=80000"
            .parse()
            .expect("valid uri");
        let Query(payload) = Query::<AnalyzePayload>::try_from_uri(&uri).expect("query parses");
        let request = api_request_from_payload(payload).expect("valid request");
        assert_eq!(request.snapshot.unit_rents, vec!["1200", "1300", ""]);
        assert_approx(request.snapshot.gross_monthly_income(), 2_500.0);
        assert_approx(request.snapshot.loan_term_years, 15.0);
        assert_approx(request.purchase.down_payment.percent, 20.0);
    }

    #[test]
    fn invalid_json_is_a_bad_request() {
        let err = api_request_from_json("{not json").expect_err("must fail");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("invalid JSON payload"));
    }

    #[test]
    fn analyze_response_serialization_contains_expected_fields() {
        let request = build_request(sample_cli()).expect("valid inputs");
        let response = build_analyze_response(&request);
        assert_eq!(response.equity_milestones.len(), 7);
        assert_eq!(response.equity_table.len(), 31);
        assert_eq!(response.chart_max, 100_000.0);

        let json = serde_json::to_string(&response).expect("response should serialize");
        for key in [
            "\"purchase\"",
            "\"metrics\"",
            "\"capRate\"",
            "\"operatingCapRate\"",
            "\"categoryCashFlow\"",
            "\"simpleCashFlow\"",
            "\"expenses\"",
            "\"amortization\"",
            "\"loanComparisons\"",
            "\"equityProjection\"",
            "\"equityMilestones\"",
            "\"equityTable\"",
            "\"capitalAppreciation\"",
            "\"chartMax\"",
            "\"summaryCards\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn non_finite_metrics_serialize_as_null() {
        let mut cli = sample_cli();
        cli.property_price = 0.0;
        let request = build_request(cli).expect("valid inputs");
        let response = build_analyze_response(&request);
        let json = serde_json::to_value(&response).expect("response should serialize");
        assert!(json["metrics"]["capRate"].is_null());
        assert!(json["metrics"]["loanToValue"].is_null());
    }

    #[test]
    fn analyze_cli_reads_flags() {
        let json = analyze_cli([
            "yieldcalc",
            "--property-price",
            "300000",
            "--down-payment-percent",
            "20",
            "--unit-rent",
            "2000",
            "--unit-rent",
            "vacant",
            "--interest-rate",
            "0",
        ])
        .expect("cli should run");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["metrics"]["grossMonthlyIncome"], 2000.0);
        assert_eq!(value["metrics"]["monthlyMortgagePayment"], 0.0);
        assert_eq!(value["purchase"]["downPayment"]["amount"], 60000.0);
        assert_eq!(value["amortization"]["monthly"].as_array().map(Vec::len), Some(360));
    }

    #[test]
    fn analyze_cli_surfaces_parse_errors() {
        let err = analyze_cli(["yieldcalc", "--loan-term", "thirty"]).expect_err("must fail");
        assert!(matches!(err, RequestError::Cli(_)));
    }
}
