// Multipart form reader shared by the upload routes. Forms carry at most
// one file part plus a handful of text fields; everything is buffered
// before the handler touches it.

use actix_multipart::Multipart;
use futures::TryStreamExt;
use std::collections::HashMap;

use application::{AppError, AppResult};

pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct UploadForm {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

pub async fn parse(mut payload: Multipart) -> AppResult<UploadForm> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {}", e)))?
    {
        let (name, file_name) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().unwrap_or_default().to_string(),
                disposition.get_filename().map(|f| f.to_string()),
            )
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {}", e)))?
        {
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) => file = Some(UploadedFile { file_name, bytes }),
            None => {
                fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok(UploadForm { fields, file })
}
