use axum::{
    body::Body,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Largest request body accepted, in bytes
pub const BODY_LIMIT: usize = 100 * 1024;

/// Request body extractor accepting JSON or URL-encoded forms.
///
/// The format is picked from `Content-Type`. An empty body, a JSON array, or a
/// body with any other content type yields `T::default()` so that handlers
/// always see an object with every field absent rather than a rejection. A
/// JSON top level that is neither an object nor an array is malformed.
pub struct Payload<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
    Ignored,
}

fn body_format(content_type: Option<&str>) -> BodyFormat {
    let Some(content_type) = content_type else {
        return BodyFormat::Ignored;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyFormat::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyFormat::Form
    } else {
        BodyFormat::Ignored
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = body_format(
            req.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|err| ApiError::MalformedBody(err.to_string()))?;

        if bytes.is_empty() {
            return Ok(Payload(T::default()));
        }

        match format {
            BodyFormat::Json => {
                let Json(value) = Json::<serde_json::Value>::from_bytes(&bytes)
                    .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
                match value {
                    serde_json::Value::Object(_) => serde_json::from_value(value)
                        .map(Payload)
                        .map_err(|err| ApiError::MalformedBody(err.to_string())),
                    // Arrays carry no named fields
                    serde_json::Value::Array(_) => Ok(Payload(T::default())),
                    other => Err(ApiError::MalformedBody(format!(
                        "expected a JSON object or array, got {}",
                        other
                    ))),
                }
            }
            BodyFormat::Form => {
                let req = Request::from_parts(parts, Body::from(bytes));
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
                Ok(Payload(value))
            }
            BodyFormat::Ignored => Ok(Payload(T::default())),
        }
    }
}
