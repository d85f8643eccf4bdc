//! Decoding of backend responses and the error block shown when a request
//! fails.
//!
//! Nothing here performs I/O. The caller runs the request and hands over the
//! status code and body; failures are terminal for that user action and are
//! never retried.

use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{prediction::PredictionResult, render::escape::push_escaped};

pub const NETWORK_MESSAGE: &str =
    "Network or server error. Please check your connection and try again.";
pub const PREDICTION_FAILED: &str = "Prediction failed";
pub const RECOMMENDATION_FAILED: &str = "Failed to get fertilizer recommendations";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response contained no result: {message}")]
    EmptyResult { message: String },

    #[error("unsupported input type '{content_type}', expected an image")]
    UnsupportedInput { content_type: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) | ApiError::MalformedResponse(_) => NETWORK_MESSAGE.to_string(),
            ApiError::Http { message, .. }
            | ApiError::EmptyResult { message }
            | ApiError::InvalidRequest(message) => message.clone(),
            ApiError::UnsupportedInput { .. } => "Please select an image file".to_string(),
        }
    }
}

/// Body shape shared by the prediction and recommendation endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: Option<T>,
    recommendation: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    /// `message`, else `error`, else `default`. Empty strings are skipped.
    fn failure_message(&self, default: &str) -> String {
        [&self.message, &self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        log::warn!("undecodable response body: {e}");
        ApiError::MalformedResponse(e.to_string())
    })
}

/// Decodes a `POST /api/predict` response.
///
/// # Errors
/// - [`ApiError::MalformedResponse`] when the body is not the expected JSON
/// - [`ApiError::EmptyResult`] for a success status without `result`
/// - [`ApiError::Http`] for any other status
///
/// Both carry the server's `message`, else `error`, else a fixed default.
pub fn decode_prediction(status: u16, body: &[u8]) -> Result<PredictionResult, ApiError> {
    let env: Envelope<PredictionResult> = parse_envelope(body)?;
    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            message: env.failure_message(PREDICTION_FAILED),
        });
    }
    let message = env.failure_message(PREDICTION_FAILED);
    env.result.ok_or(ApiError::EmptyResult { message })
}

/// Decodes a `POST /api/fertilizer-recommendation` response.
///
/// # Errors
/// Same mapping as [`decode_prediction`]; an empty `recommendation` string
/// counts as no result.
pub fn decode_recommendation(status: u16, body: &[u8]) -> Result<String, ApiError> {
    let env: Envelope<serde_json::Value> = parse_envelope(body)?;
    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            message: env.failure_message(RECOMMENDATION_FAILED),
        });
    }
    let message = env.failure_message(RECOMMENDATION_FAILED);
    env.recommendation
        .filter(|r| !r.trim().is_empty())
        .ok_or(ApiError::EmptyResult { message })
}

/// Checks an upload's MIME type before it is sent for prediction.
///
/// # Errors
/// [`ApiError::UnsupportedInput`] for anything that is not `image/*`.
pub fn check_upload(content_type: &str) -> Result<(), ApiError> {
    if content_type.trim().to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        Err(ApiError::UnsupportedInput {
            content_type: content_type.to_string(),
        })
    }
}

/// Renders the inline error block for a failed request.
///
/// Connectivity failures show the fixed message alone; everything else is
/// prefixed with `Error: `.
pub fn render_error(err: &ApiError) -> String {
    let mut out = String::from("<div class=\"error\">");
    if !matches!(err, ApiError::Network(_) | ApiError::MalformedResponse(_)) {
        out.push_str("Error: ");
    }
    push_escaped(&mut out, &err.user_message(), true);
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::Confidence;
    use pretty_assertions::assert_eq;

    #[test]
    fn prediction_success() {
        let body = br#"{"result":{"class":"Corn_(maize)___healthy","confidence":97.1}}"#;
        let r = decode_prediction(200, body).unwrap();
        assert_eq!(r.class_name.as_deref(), Some("Corn_(maize)___healthy"));
        assert_eq!(r.confidence, Some(Confidence::Number(97.1)));
    }

    #[test]
    fn prediction_without_result_is_empty() {
        let empty = || ApiError::EmptyResult {
            message: PREDICTION_FAILED.into(),
        };
        assert_eq!(decode_prediction(200, b"{}"), Err(empty()));
        assert_eq!(decode_prediction(200, br#"{"result":null}"#), Err(empty()));
    }

    #[test]
    fn success_without_result_keeps_server_message() {
        let err = decode_prediction(200, br#"{"message":"No leaf detected in image"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "No leaf detected in image");
        assert_eq!(
            render_error(&err),
            "<div class=\"error\">Error: No leaf detected in image</div>"
        );
        assert_eq!(
            decode_recommendation(200, br#"{"error":"soil type not recognised"}"#),
            Err(ApiError::EmptyResult {
                message: "soil type not recognised".into()
            })
        );
    }

    #[test]
    fn http_error_prefers_message_then_error() {
        assert_eq!(
            decode_prediction(400, br#"{"message":"bad image","error":"x"}"#),
            Err(ApiError::Http {
                status: 400,
                message: "bad image".into()
            })
        );
        assert_eq!(
            decode_prediction(500, br#"{"message":"","error":"model offline"}"#),
            Err(ApiError::Http {
                status: 500,
                message: "model offline".into()
            })
        );
        assert_eq!(
            decode_prediction(502, b"{}"),
            Err(ApiError::Http {
                status: 502,
                message: PREDICTION_FAILED.into()
            })
        );
    }

    #[test]
    fn malformed_body() {
        assert!(matches!(
            decode_prediction(200, b"<html>oops</html>"),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn recommendation_paths() {
        assert_eq!(
            decode_recommendation(200, br#"{"recommendation":"Use **urea**"}"#),
            Ok("Use **urea**".to_string())
        );
        assert_eq!(
            decode_recommendation(200, br#"{"recommendation":"  "}"#),
            Err(ApiError::EmptyResult {
                message: RECOMMENDATION_FAILED.into()
            })
        );
        assert_eq!(
            decode_recommendation(422, br#"{"error":"missing soil type"}"#),
            Err(ApiError::Http {
                status: 422,
                message: "missing soil type".into()
            })
        );
        assert_eq!(
            decode_recommendation(503, b"{}").unwrap_err().user_message(),
            RECOMMENDATION_FAILED
        );
    }

    #[test]
    fn upload_types() {
        assert_eq!(check_upload("image/png"), Ok(()));
        assert_eq!(check_upload("IMAGE/JPEG"), Ok(()));
        assert_eq!(
            check_upload("application/pdf"),
            Err(ApiError::UnsupportedInput {
                content_type: "application/pdf".into()
            })
        );
        assert!(check_upload("").is_err());
    }

    #[test]
    fn error_blocks() {
        assert_eq!(
            render_error(&ApiError::Http {
                status: 400,
                message: "<script>".into()
            }),
            "<div class=\"error\">Error: &lt;script&gt;</div>"
        );
        assert_eq!(
            render_error(&ApiError::Network("connection reset".into())),
            format!("<div class=\"error\">{NETWORK_MESSAGE}</div>")
        );
    }
}
