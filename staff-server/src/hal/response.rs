//! `application/hal+json` responses

use crate::utils::AppError;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;
use shared::models::HAL_JSON;

/// `200 OK` with a HAL body
#[derive(Debug)]
pub struct Hal<T>(pub T);

/// `201 Created` with a HAL body and a `Location` header
#[derive(Debug)]
pub struct Created<T> {
    pub location: String,
    pub body: T,
}

fn hal_body<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body)
        .map_err(|e| AppError::internal(format!("Failed to serialize response: {e}")))?;
    Ok((status, [(header::CONTENT_TYPE, HAL_JSON)], bytes).into_response())
}

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        hal_body(StatusCode::OK, &self.0).unwrap_or_else(IntoResponse::into_response)
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let location = match HeaderValue::from_str(&self.location) {
            Ok(value) => value,
            Err(e) => {
                return AppError::internal(format!("Invalid Location header: {e}")).into_response();
            }
        };
        match hal_body(StatusCode::CREATED, &self.body) {
            Ok(mut response) => {
                response.headers_mut().insert(header::LOCATION, location);
                response
            }
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hal_content_type() {
        let response = Hal(json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HAL_JSON);
    }

    #[test]
    fn test_created_sets_location() {
        let response = Created {
            location: "http://localhost:8080/employees/3".to_string(),
            body: json!({"id": 3}),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://localhost:8080/employees/3"
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], HAL_JSON);
    }
}
