use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("session store error: {0}")]
    Session(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Outcomes of a turn that are reported to the user instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("hospital data not available")]
    DataUnavailable,

    #[error("no hospitals in {location} for {specialty}")]
    NoMatch { location: String, specialty: String },

    #[error("could not classify query")]
    UnknownIntent,
}

impl DialogueError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DialogueError::DataUnavailable => {
                "Hospital data not available. Please ensure 'hospitals.csv' exists."
            }
            DialogueError::NoMatch { .. } => "No hospitals found matching your criteria.",
            DialogueError::UnknownIntent => "I'm not sure how to help with that.",
        }
    }
}
