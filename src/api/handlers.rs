//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_full_salary, explain_full_salary};
use crate::error::EngineResult;
use crate::models::{NewSalaryRecord, SalaryFilter, SalaryInput};

use super::request::{SalaryForm, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salaries/preview", post(preview_handler))
        .route("/salaries", post(create_handler).get(list_handler))
        .route(
            "/salaries/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

/// Query parameters for `GET /salaries`.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    employee_ref: Option<String>,
    month: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> EngineResult<SalaryFilter> {
        Ok(SalaryFilter {
            employee_ref: self.employee_ref.filter(|r| !r.is_empty()),
            month: self
                .month
                .filter(|m| !m.is_empty())
                .map(|m| m.parse())
                .transpose()?,
        })
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 response.
///
/// Missing fields are validation errors; everything else is malformed JSON.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Invalid salary id"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(format!(
        "Invalid salary id: {}",
        rejection.body_text()
    )))
}

fn engine_failure(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Validates an input, computes its salary and checks the result can be stored.
fn prepare_record(input: SalaryInput, state: &AppState) -> EngineResult<NewSalaryRecord> {
    input.validate()?;
    let result = compute_full_salary(&input, state.policy());
    result.validate()?;
    Ok(NewSalaryRecord { input, result })
}

/// Handler for `POST /salaries/preview`.
///
/// Coerces the form leniently and returns the breakdown without storing it.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary preview");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let input = match form.into_input() {
        Ok(input) => input,
        Err(err) => return engine_failure(correlation_id, err),
    };

    let start_time = Instant::now();
    let breakdown = explain_full_salary(&input, state.policy());
    info!(
        correlation_id = %correlation_id,
        month = %input.month,
        net_salary = %breakdown.result.net_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Salary preview computed"
    );
    json_response(StatusCode::OK, breakdown)
}

/// Handler for `POST /salaries`.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary submission");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let stored = prepare_record(request.into(), &state)
        .and_then(|record| state.repository().create(record));
    match stored {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                id = %record.id,
                month = %record.input.month,
                net_salary = %record.result.net_salary,
                "Salary stored"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for `GET /salaries`.
async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let records = query
        .into_filter()
        .and_then(|filter| state.repository().list(&filter));
    match records {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                count = records.len(),
                "Listed salaries"
            );
            json_response(StatusCode::OK, records)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for `GET /salaries/:id`.
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection).into_response(),
    };

    match state.repository().get(id) {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for `PUT /salaries/:id`.
///
/// Recomputes the salary from the new input before replacing the record.
async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary update");

    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection).into_response(),
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let updated = prepare_record(request.into(), &state)
        .and_then(|record| state.repository().update(id, record));
    match updated {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                id = %record.id,
                net_salary = %record.result.net_salary,
                "Salary updated"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for `DELETE /salaries/:id`.
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection).into_response(),
    };

    match state.repository().delete(id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, id = %id, "Salary deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{SalaryBreakdown, SalaryRecord};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::in_memory(ConfigLoader::standard())
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<String>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.oneshot(request).await.unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn scenario_three() -> Value {
        json!({
            "base_salary": "140000",
            "bonus": "10000",
            "overtime_type": "weekend_holiday",
            "overtime_hours": 5,
            "leave_type": "no_pay",
            "no_pay_leave_days": 3,
            "month": "2024-05",
            "employee_ref": "emp_001"
        })
    }

    #[tokio::test]
    async fn test_preview_returns_breakdown() {
        let router = create_router(create_test_state());

        let response = send(
            router,
            "POST",
            "/salaries/preview",
            Some(scenario_three().to_string()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let breakdown: SalaryBreakdown = body_json(response).await;
        assert_eq!(
            breakdown.result.net_salary,
            Decimal::from_str("119109.37").unwrap()
        );
        assert_eq!(breakdown.steps.len(), 6);
    }

    #[tokio::test]
    async fn test_preview_garbage_numbers_return_zeros() {
        let router = create_router(create_test_state());
        let body = json!({
            "base_salary": "abc",
            "bonus": "",
            "overtime_hours": "lots",
            "month": "2024-05"
        });

        let response = send(router, "POST", "/salaries/preview", Some(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let breakdown: SalaryBreakdown = body_json(response).await;
        assert_eq!(breakdown.result.net_salary, Decimal::ZERO);
        assert_eq!(breakdown.result.gross_salary, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_preview_invalid_month_returns_400() {
        let router = create_router(create_test_state());
        let body = json!({ "base_salary": 80000, "month": "2024-13" });

        let response = send(router, "POST", "/salaries/preview", Some(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/salaries", Some("{invalid json".to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = json!({ "month": "2024-05" });

        let response = send(router, "POST", "/salaries", Some(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("base_salary"));
    }

    #[tokio::test]
    async fn test_create_returns_201_with_record() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/salaries", Some(scenario_three().to_string())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let record: SalaryRecord = body_json(response).await;
        assert_eq!(record.input.employee_ref.as_deref(), Some("emp_001"));
        assert_eq!(record.result.tax, Decimal::from_str("3562.50").unwrap());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_net() {
        let router = create_router(create_test_state());
        let body = json!({
            "base_salary": 28000,
            "leave_type": "no_pay",
            "no_pay_leave_days": 28,
            "month": "2024-02"
        });

        let response = send(router, "POST", "/salaries", Some(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_SALARY");
        assert!(error.message.contains("net_salary"));
    }

    #[tokio::test]
    async fn test_create_rejects_excess_overtime() {
        let router = create_router(create_test_state());
        let body = json!({
            "base_salary": 80000,
            "overtime_hours": 101,
            "month": "2024-05"
        });

        let response = send(router, "POST", "/salaries", Some(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert!(error.message.contains("overtime_hours"));
    }

    #[tokio::test]
    async fn test_unknown_id_returns_404() {
        let state = create_test_state();
        let id = Uuid::new_v4();

        let response = send(
            create_router(state.clone()),
            "GET",
            &format!("/salaries/{}", id),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "RECORD_NOT_FOUND");

        let response = send(
            create_router(state),
            "DELETE",
            &format!("/salaries/{}", id),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_id_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/salaries/not-a-uuid", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_month_filter() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/salaries?month=May", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_MONTH");
    }
}
