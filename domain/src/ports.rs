//! Seams between the page controller and the outside world.

use crate::error::ApiError;
use crate::models::{
    AskRequest, AskResponse, DeleteResponse, DocumentId, RenameRequest, RenameResponse,
    UploadFile, UploadResponse, ViewResponse,
};
use crate::render::DocumentContent;
use crate::session::TranscriptEntry;
use std::future::Future;

/// The five backend endpoints.
pub trait DocumentApi {
    fn view(&self, id: &DocumentId)
        -> impl Future<Output = Result<ViewResponse, ApiError>> + Send;

    fn ask(&self, request: &AskRequest)
        -> impl Future<Output = Result<AskResponse, ApiError>> + Send;

    fn upload(&self, file: UploadFile)
        -> impl Future<Output = Result<UploadResponse, ApiError>> + Send;

    fn delete(&self, id: &DocumentId)
        -> impl Future<Output = Result<DeleteResponse, ApiError>> + Send;

    fn rename(
        &self,
        id: &DocumentId,
        request: &RenameRequest,
    ) -> impl Future<Output = Result<RenameResponse, ApiError>> + Send;
}

/// Display regions of the page.
pub trait PageSurface {
    fn set_content(&mut self, content: DocumentContent);
    fn set_summary(&mut self, summary: &str);
    fn show_pending(&mut self, text: &str);
    fn remove_pending(&mut self);
    fn append_entry(&mut self, entry: &TranscriptEntry);
    fn clear_question(&mut self);
    fn reload(&mut self);
}

/// Blocking dialogs.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> bool;
    /// `None` when cancelled or left empty.
    fn prompt(&mut self, message: &str) -> Option<String>;
    fn alert(&mut self, message: &str);
}
