use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// One entry of the per-field error list carried by a validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Validation Error: {}", join_messages(.0))]
    ValidationError(Vec<FieldError>),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// The validator reports errors under the Rust field idents; the API reports
// them under the wire names (image_url -> imageUrl).
fn wire_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<ValidationErrors> for CustomError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = wire_field(&field);
                errs.iter().map(move |err| FieldError {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        // Hash-map iteration order is arbitrary; keep the list stable.
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));

        CustomError::ValidationError(fields)
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let mut body = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": status_code.as_u16(),
            "error": match *self {
                CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
                CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
                CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
                CustomError::ValidationError(..) => "VALIDATION_ERROR",
            },
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        if let CustomError::ValidationError(errors) = self {
            body["errors"] = json!(errors);
        }

        HttpResponse::build(status_code).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_categories() {
        assert_eq!(
            CustomError::BadRequestError("bad id".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::ValidationError(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::NotFoundError("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CustomError::InternalServerError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn wire_field_converts_snake_case_names() {
        assert_eq!(wire_field("image_url"), "imageUrl");
        assert_eq!(wire_field("created_at"), "createdAt");
        assert_eq!(wire_field("author"), "author");
    }

    #[test]
    fn validation_error_display_joins_field_messages() {
        let err = CustomError::ValidationError(vec![
            FieldError {
                field: "author".into(),
                message: "author is required".into(),
            },
            FieldError {
                field: "title".into(),
                message: "title is required".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation Error: author is required, title is required"
        );
    }
}
