use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::core::{
    AllocationBreakdown, BudgetRequest, BudgetStatus, LineItem, RawBudgetInput, validate_input,
};
use crate::error::ValidationError;
use crate::report::{PDF_MIME_TYPE, ReportContext, format_idr, render_report};

pub const DEFAULT_AGE: u32 = 25;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllocatePayload {
    name: Option<String>,
    age: Option<u32>,
    fixed_income: Option<f64>,
    variable_income: Option<f64>,
    gold_price_per_gram: Option<f64>,
}

impl From<AllocatePayload> for RawBudgetInput {
    fn from(payload: AllocatePayload) -> Self {
        RawBudgetInput {
            name: payload.name.unwrap_or_default(),
            age: payload.age.unwrap_or(DEFAULT_AGE),
            fixed_income: payload.fixed_income.unwrap_or(0.0),
            variable_income: payload.variable_income.unwrap_or(0.0),
            gold_price_per_gram: payload.gold_price_per_gram.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LineItemResponse {
    #[serde(flatten)]
    item: LineItem,
    monthly: f64,
    formatted_annual: String,
    formatted_monthly: String,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            monthly: item.monthly(),
            formatted_annual: format_idr(item.annual),
            formatted_monthly: format_idr(item.monthly()),
            item,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllocateResponse {
    name: String,
    age: u32,
    total_income: f64,
    gold_price_per_gram: f64,
    breakdown: AllocationBreakdown,
    status: BudgetStatus,
    status_label: &'static str,
    recommendation: &'static str,
    line_items: Vec<LineItemResponse>,
    monthly_total: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/allocate",
            get(allocate_get_handler).post(allocate_post_handler),
        )
        .route("/api/report", post(report_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "AKTA HTTP API listening");
    info!("Local access: http://127.0.0.1:{}/health", addr.port());

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn allocate_get_handler(Query(payload): Query<AllocatePayload>) -> Response {
    allocate_handler_impl(payload)
}

async fn allocate_post_handler(Json(payload): Json<AllocatePayload>) -> Response {
    allocate_handler_impl(payload)
}

fn allocate_handler_impl(payload: AllocatePayload) -> Response {
    let request = match budget_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return validation_error_response(&err),
    };

    let breakdown = request.allocate();
    json_response(StatusCode::OK, build_allocate_response(&request, breakdown))
}

async fn report_handler(Json(payload): Json<AllocatePayload>) -> Response {
    let request = match budget_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return validation_error_response(&err),
    };

    let context = ReportContext::for_request(&request);
    let file_name = context.file_name();
    match render_report(&context) {
        Ok(bytes) => {
            info!(file = %file_name, bytes = bytes.len(), "report generated");
            with_cache_control((
                [
                    (header::CONTENT_TYPE, PDF_MIME_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        content_disposition(&file_name),
                    ),
                ],
                bytes,
            ))
        }
        Err(err) => {
            error!(error = %err, "report rendering failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn content_disposition(file_name: &str) -> String {
    let escaped: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{escaped}\"")
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn validation_error_response(err: &ValidationError) -> Response {
    warn!(error = %err, "rejected budget request");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

#[cfg(test)]
fn budget_request_from_json(json: &str) -> Result<BudgetRequest, String> {
    let payload = serde_json::from_str::<AllocatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    budget_request_from_payload(payload).map_err(|e| e.to_string())
}

fn budget_request_from_payload(payload: AllocatePayload) -> Result<BudgetRequest, ValidationError> {
    validate_input(payload.into())
}

fn build_allocate_response(
    request: &BudgetRequest,
    breakdown: AllocationBreakdown,
) -> AllocateResponse {
    let status = breakdown.status();
    AllocateResponse {
        name: request.person.name.clone(),
        age: request.person.age,
        total_income: request.income.total_income(),
        gold_price_per_gram: request.income.gold_price_per_gram,
        breakdown,
        status,
        status_label: status.label(),
        recommendation: status.recommendation(),
        line_items: breakdown
            .line_items()
            .into_iter()
            .map(LineItemResponse::from)
            .collect(),
        monthly_total: breakdown.monthly_total(),
    }
}
