//! HTTP request handlers for the employee directory API.
//!
//! Thin plumbing over [`crate::client::UpstreamEmployeeClient`]: each
//! handler invokes one
//! core operation and maps its outcome to a status code and body. The
//! handlers never inspect message strings; all mapping switches on outcome
//! variants.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::{DeleteOutcome, FetchOutcome};
use crate::models::{Employee, EmployeeRow};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Body returned on a successful delete, independent of upstream wording.
const DELETED_BODY: &str = "Successfully deleted record";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/search/:query", get(search_handler))
        .route("/employees/highestSalary", get(highest_salary_handler))
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(top_earners_handler),
        )
        .route(
            "/employee/:id",
            get(employee_by_id_handler).delete(delete_employee_handler),
        )
        .route("/employee", post(create_employee_handler))
        .with_state(state)
}

fn rows(employees: &[Employee]) -> Vec<EmployeeRow> {
    employees.iter().map(EmployeeRow::from).collect()
}

/// Handler for GET /employees.
///
/// Any failure degrades to an empty array; the list endpoint always
/// answers 200.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    let employees = state
        .client()
        .list_employees()
        .await
        .into_ok()
        .unwrap_or_default();
    Json(rows(&employees))
}

/// Handler for GET /employees/search/{query}.
async fn search_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, query = %query, "Searching employees by name");

    let matches = state.client().search_by_name(&query).await;
    Json(rows(&matches))
}

/// Handler for GET /employees/highestSalary.
async fn highest_salary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Computing highest salary");

    Json(state.client().highest_salary().await)
}

/// Handler for GET /employees/topTenHighestEarningEmployeeNames.
async fn top_earners_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Computing top ten earners");

    Json(state.client().top_ten_earning_names().await)
}

/// Handler for GET /employee/{id}.
async fn employee_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Fetching employee");

    match state.client().employee_by_id(&id).await {
        FetchOutcome::Ok(employee) => {
            (StatusCode::OK, Json(EmployeeRow::from(&employee))).into_response()
        }
        FetchOutcome::Absent => ApiErrorResponse::employee_not_found(&id).into_response(),
        FetchOutcome::RateLimited { retry_after } => {
            ApiErrorResponse::rate_limited(retry_after).into_response()
        }
        FetchOutcome::Transient(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Employee lookup failed");
            ApiErrorResponse::upstream_failure().into_response()
        }
    }
}

/// Handler for POST /employee.
///
/// The body is forwarded to the upstream verbatim; the only local check is
/// that it is a JSON object at all.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Unreadable create body");
            let error = match rejection {
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                other => ApiError::malformed_json(other.body_text()),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    match state.client().create_employee(input).await {
        FetchOutcome::Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = %employee.id, "Employee created");
            (StatusCode::OK, Json(EmployeeRow::from(&employee))).into_response()
        }
        FetchOutcome::RateLimited { retry_after } => {
            ApiErrorResponse::rate_limited(retry_after).into_response()
        }
        FetchOutcome::Absent | FetchOutcome::Transient(_) => {
            ApiErrorResponse::upstream_failure().into_response()
        }
    }
}

/// Handler for DELETE /employee/{id}.
///
/// Switches exhaustively on [`DeleteOutcome`]; there is no string
/// comparison anywhere in this mapping.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Deleting employee");

    match state.client().delete_employee_by_id(&id).await {
        DeleteOutcome::Succeeded(message) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                upstream_message = %message,
                "Employee deleted"
            );
            (StatusCode::OK, DELETED_BODY).into_response()
        }
        DeleteOutcome::NotFound => ApiErrorResponse::employee_not_found(&id).into_response(),
        DeleteOutcome::RateLimited { retry_after } => {
            ApiErrorResponse::rate_limited(retry_after).into_response()
        }
        DeleteOutcome::Failed => ApiErrorResponse::upstream_failure().into_response(),
    }
}
