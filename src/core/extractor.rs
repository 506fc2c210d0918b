use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(AppJsonRejection::Json)
    }
}

pub enum AppJsonRejection {
    Body(BytesRejection),
    Json(serde_json::Error),
}

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        let message = match rejection {
            AppJsonRejection::Body(err) => format!("Failed to read request body: {}", err.body_text()),
            AppJsonRejection::Json(err) => match err.classify() {
                Category::Data => format!("Invalid JSON data: {}", err),
                Category::Syntax | Category::Eof => format!("Invalid JSON syntax: {}", err),
                Category::Io => format!("Failed to parse JSON body: {}", err),
            },
        };

        AppError::BadRequest(message)
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// JSON extractor that replaces every parse failure with one fixed message.
///
/// Used where the caller only needs to know which field is required, not
/// what the parser choked on.
pub struct RequiredJson<T>(pub T);

pub trait RequiredFieldMessage {
    const MESSAGE: &'static str;
}

impl<T, S> FromRequest<S> for RequiredJson<T>
where
    T: DeserializeOwned + RequiredFieldMessage,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        AppJson::<T>::from_request(req, state)
            .await
            .map(|AppJson(value)| Self(value))
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", AppError::from(rejection));
                AppError::BadRequest(T::MESSAGE.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct CodeBody {
        #[serde(rename = "Code")]
        code: String,
    }

    impl RequiredFieldMessage for CodeBody {
        const MESSAGE: &'static str = "Code is required";
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_decodes_json_regardless_of_content_type() {
        for content_type in [
            None,
            Some("application/json"),
            Some("application/x-www-form-urlencoded"),
            Some("text/plain"),
        ] {
            let AppJson(value) =
                AppJson::<CodeBody>::from_request(request(content_type, r#"{"Code":"3171"}"#), &())
                    .await
                    .ok()
                    .unwrap();
            assert_eq!(value.code, "3171");
        }
    }

    #[tokio::test]
    async fn test_classifies_data_and_syntax_errors() {
        let data = AppJson::<CodeBody>::from_request(request(None, r#"{"Other":1}"#), &())
            .await
            .err()
            .unwrap();
        assert!(AppError::from(data)
            .to_string()
            .starts_with("Invalid JSON data: missing field `Code`"));

        let syntax = AppJson::<CodeBody>::from_request(request(None, "Code=3171"), &())
            .await
            .err()
            .unwrap();
        assert!(AppError::from(syntax)
            .to_string()
            .starts_with("Invalid JSON syntax:"));
    }

    #[tokio::test]
    async fn test_required_json_uses_fixed_message() {
        let err = RequiredJson::<CodeBody>::from_request(request(None, "{}"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Code is required");

        let RequiredJson(value) =
            RequiredJson::<CodeBody>::from_request(request(None, r#"{"Code":"A"}"#), &())
                .await
                .unwrap();
        assert_eq!(value.code, "A");
    }
}
