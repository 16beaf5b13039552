//! API handlers
//!
//! Handlers own request validation, status mapping and logging. The store is
//! only called with ids that passed validation.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::{customer_location, AppState};
use crate::types::{Customer, CustomerId, CustomerInput};
use crate::{Error, Result};

/// Health check with store status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        customers: state.repository.count().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub customers: usize,
}

/// List every customer
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.repository.get_all().await)
}

/// Fetch a single customer
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>> {
    validate_id(id)?;

    match state.repository.get_by_id(id).await {
        Some(customer) => Ok(Json(customer)),
        None => {
            let message = format!("Customer with id {} does not exist.", id);
            tracing::warn!(customer_id = id, "{}", message);
            Err(Error::not_found(message))
        }
    }
}

/// Create a customer; responds with 201 and the location of the new record
pub async fn create_customer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Option<CustomerInput>>, JsonRejection>,
) -> Result<Response> {
    let input = require_body(payload)?;

    let created = state.repository.create(input).await;
    tracing::info!(customer_id = created.id, "Customer with id {} created.", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, customer_location(created.id))],
        Json(created),
    )
        .into_response())
}

/// Replace the names of an existing customer
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    payload: std::result::Result<Json<Option<CustomerInput>>, JsonRejection>,
) -> Result<Json<Customer>> {
    validate_id(id)?;
    let input = require_body(payload)?;

    match state.repository.update(id, input).await {
        Some(updated) => {
            tracing::info!(customer_id = id, "Customer with id {} updated.", id);
            Ok(Json(updated))
        }
        None => {
            let message = format!("Customer with id {} not found. Cannot be updated.", id);
            tracing::warn!(customer_id = id, "{}", message);
            Err(Error::not_found(message))
        }
    }
}

/// Remove a customer; responds with 204 and no body
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode> {
    validate_id(id)?;

    if state.repository.delete(id).await {
        tracing::info!(customer_id = id, "Customer with id {} deleted.", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        let message = format!("Customer with id {} not found. Cannot be deleted.", id);
        tracing::warn!(customer_id = id, "{}", message);
        Err(Error::not_found(message))
    }
}

fn validate_id(id: CustomerId) -> Result<()> {
    if id <= 0 {
        return Err(Error::invalid_argument(format!(
            "Customer id must be a positive integer, got {}.",
            id
        )));
    }
    Ok(())
}

/// Unwrap a create/update body, treating a missing, `null` or malformed body
/// as an invalid argument
fn require_body(
    payload: std::result::Result<Json<Option<CustomerInput>>, JsonRejection>,
) -> Result<CustomerInput> {
    match payload {
        Ok(Json(Some(input))) => Ok(input),
        Ok(Json(None)) => Err(Error::invalid_argument("Customer body is required.")),
        Err(rejection) => Err(Error::invalid_argument(format!(
            "Customer body is missing or invalid: {}",
            rejection.body_text()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_rejects_non_positive() {
        assert!(validate_id(1).is_ok());
        assert!(matches!(validate_id(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_id(-5), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_require_body_rejects_null() {
        let err = require_body(Ok(Json(None))).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let input = require_body(Ok(Json(Some(CustomerInput::new("A", "B"))))).unwrap();
        assert_eq!(input.first_name, "A");
    }
}
