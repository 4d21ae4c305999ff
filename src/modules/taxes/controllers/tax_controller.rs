//! HTTP endpoints for the tax estimator.
//!
//! Request bodies are coerced leniently: missing, `null` or non-numeric
//! figures become zero instead of failing the request.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::coerce::{deserialize_amount, deserialize_flag};
use crate::modules::taxes::models::{CompanySize, TaxInput, TaxRates};
use crate::modules::taxes::services::TaxCalculator;

/// Body of `POST /tax/calculate`
#[derive(Debug, Default, Deserialize)]
pub struct CalculateTaxRequest {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub revenue: Decimal,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub expenses: Decimal,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub salaries: Decimal,
    #[serde(default, rename = "companySize")]
    pub company_size: CompanySize,
    #[serde(default, rename = "isVATRegistered", deserialize_with = "deserialize_flag")]
    pub is_vat_registered: Option<bool>,
    #[serde(default, rename = "calculatePAYE", deserialize_with = "deserialize_flag")]
    pub calculate_paye: Option<bool>,
}

impl From<CalculateTaxRequest> for TaxInput {
    fn from(req: CalculateTaxRequest) -> Self {
        TaxInput::new(req.revenue, req.expenses, req.salaries)
            .with_company_size(req.company_size)
            .with_vat_registration(req.is_vat_registered.unwrap_or(true))
            .with_paye(req.calculate_paye.unwrap_or(false))
    }
}

/// Body of `POST /tax/pit`
#[derive(Debug, Default, Deserialize)]
pub struct PitRequest {
    #[serde(default, rename = "annualIncome", deserialize_with = "deserialize_amount")]
    pub annual_income: Decimal,
}

/// POST /tax/calculate
pub async fn calculate_tax(body: web::Json<CalculateTaxRequest>) -> HttpResponse {
    let input = TaxInput::from(body.into_inner());

    tracing::debug!(
        revenue = %input.revenue,
        expenses = %input.expenses,
        salaries = %input.salaries,
        company_size = %input.company_size,
        vat_registered = input.is_vat_registered,
        include_paye = input.include_paye,
        "Calculating tax summary"
    );

    let result = TaxCalculator::new().compute_tax_summary(&input);
    HttpResponse::Ok().json(result)
}

/// POST /tax/pit
pub async fn calculate_pit(body: web::Json<PitRequest>) -> HttpResponse {
    let annual_income = body.into_inner().annual_income;
    let summary = TaxCalculator::new().personal_income_tax(annual_income);

    tracing::debug!(
        annual_income = %annual_income,
        total_tax = %summary.total_tax,
        effective_rate = %summary.effective_rate,
        "Personal income tax calculated"
    );

    HttpResponse::Ok().json(summary)
}

/// GET /tax/rates
pub async fn get_rates() -> HttpResponse {
    HttpResponse::Ok().json(TaxRates::current())
}

/// Configure tax routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tax")
            .route("/calculate", web::post().to(calculate_tax))
            .route("/pit", web::post().to(calculate_pit))
            .route("/rates", web::get().to(get_rates)),
    );
}
