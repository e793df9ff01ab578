use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Form fields of a request sent either as `multipart/form-data` or as
/// `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormPayload {
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or_else(|| default.to_string())
    }

    pub fn required_text(&self, name: &str) -> Result<String, ApiError> {
        self.text(name)
            .ok_or_else(|| ApiError::BadRequest(format!("Missing {name} field")))
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut payload = FormPayload::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            let is_plain_text = field
                .content_type()
                .is_none_or(|content_type| content_type.starts_with("text/plain"));

            if field.file_name().is_none() && is_plain_text {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read {name}: {}", e))
                })?;
                payload.fields.insert(name, value);
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {name}: {}", e)))?;

            if data.len() > MAX_UPLOAD_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "File too large. Max size is {} bytes",
                    MAX_UPLOAD_SIZE
                )));
            }

            payload.files.insert(
                name,
                UploadedFile {
                    file_name,
                    content_type,
                    data,
                },
            );
        }

        Ok(payload)
    }
}

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;

            return FormPayload::from_multipart(multipart).await;
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(FormPayload {
            fields,
            files: HashMap::new(),
        })
    }
}
