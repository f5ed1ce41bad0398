use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque document identifier as handed out by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileType {
    Pdf,
    Xlsx,
    Json,
    Other(String),
}

impl Default for FileType {
    fn default() -> Self {
        FileType::Other(String::new())
    }
}

impl From<String> for FileType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pdf" => FileType::Pdf,
            "xlsx" => FileType::Xlsx,
            "json" => FileType::Json,
            _ => FileType::Other(raw),
        }
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Pdf => "pdf".to_string(),
            FileType::Xlsx => "xlsx".to_string(),
            FileType::Json => "json".to_string(),
            FileType::Other(raw) => raw,
        }
    }
}

/// Payload of `GET /view/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewResponse {
    #[serde(default)]
    pub file_type: FileType,
    /// Base64 for pdf, HTML for xlsx, raw text otherwise.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub document_id: DocumentId,
}

impl AskRequest {
    /// Binds a question to the selected document. No selection, no request.
    pub fn for_document(
        current: Option<&DocumentId>,
        question: &str,
    ) -> Result<Self, crate::error::ValidationError> {
        let document_id = current
            .cloned()
            .ok_or(crate::error::ValidationError::NoDocumentSelected)?;
        Ok(Self {
            question: question.to_string(),
            document_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskResponse {
    pub fn into_answer(self) -> Result<String, ApiError> {
        match self.error {
            Some(error) => Err(ApiError::Application(error)),
            None => Ok(self.answer),
        }
    }
}

/// Shared shape of the upload, delete and rename responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Only set by a successful upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<serde_json::Value>,
}

pub type UploadResponse = ActionResponse;
pub type DeleteResponse = ActionResponse;
pub type RenameResponse = ActionResponse;

impl ActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            document_id: None,
        }
    }

    /// `error` present, or `success` false, is a failure.
    pub fn into_result(self) -> Result<Option<serde_json::Value>, ApiError> {
        match (self.success, self.error) {
            (_, Some(error)) => Err(ApiError::Application(error)),
            (false, None) => Err(ApiError::Application("unknown error".to_string())),
            (true, None) => Ok(self.document_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub new_name: String,
}

/// File contents ready to be sent as the `file` part of the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }
}
