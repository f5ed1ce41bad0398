use domain::access::PageKind;
use domain::error::ApiError;
use domain::models::{AskRequest, DocumentId, RenameRequest, UploadFile};
use domain::ports::{DocumentApi, PageSurface, Prompter};
use domain::render::{render_view, DocumentContent, LOADING_SUMMARY, SUMMARY_ERROR};
use domain::session::{PageState, TranscriptEntry};
use std::path::Path;
use tracing::{error, info};

pub const PROCESSING_QUESTION: &str = "Processing your question...";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this document?";
pub const RENAME_PROMPT: &str = "Enter new name:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    Failed,
    /// Declined or cancelled by the user; no request was sent.
    Skipped,
    /// Refused on the client with an alert; no request was sent.
    Rejected,
}

impl ActionOutcome {
    pub fn is_failure(self) -> bool {
        matches!(self, ActionOutcome::Failed | ActionOutcome::Rejected)
    }
}

/// Reacts to user actions: one request per action, then region updates.
pub struct PageController<A, S, P> {
    api: A,
    surface: S,
    prompter: P,
    page: PageKind,
    state: PageState,
}

impl<A, S, P> PageController<A, S, P>
where
    A: DocumentApi,
    S: PageSurface,
    P: Prompter,
{
    pub fn new(api: A, surface: S, prompter: P, page: PageKind) -> Self {
        Self {
            api,
            surface,
            prompter,
            page,
            state: PageState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    pub async fn open_document(&mut self, id: DocumentId) -> ActionOutcome {
        info!(document = %id, "opening document");
        self.state.select_document(id.clone());
        self.surface.set_content(DocumentContent::Loading);
        self.surface.set_summary(LOADING_SUMMARY);

        let rendered = match self.api.view(&id).await {
            Ok(view) => render_view(view),
            Err(e) => Err(e),
        };
        match rendered {
            Ok(view) => {
                self.surface.set_summary(&view.summary);
                self.surface.set_content(view.content);
                ActionOutcome::Done
            }
            Err(e) => {
                error!(document = %id, error = %e, "document view error");
                self.surface.set_content(DocumentContent::failure(&e));
                self.surface.set_summary(SUMMARY_ERROR);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn submit_question(&mut self, question: &str) -> ActionOutcome {
        let request = match AskRequest::for_document(self.state.current_document(), question) {
            Ok(request) => request,
            Err(e) => {
                self.prompter.alert(&e.to_string());
                return ActionOutcome::Rejected;
            }
        };
        info!(document = %request.document_id, "asking question");

        self.surface.show_pending(PROCESSING_QUESTION);
        let answer = match self.api.ask(&request).await {
            Ok(response) => response.into_answer(),
            Err(e) => Err(e),
        };
        self.surface.remove_pending();

        let (entry, outcome) = match answer {
            Ok(answer) => (
                TranscriptEntry::exchange(&request.question, &answer),
                ActionOutcome::Done,
            ),
            Err(e) => {
                error!(error = %e, "chat error");
                (
                    TranscriptEntry::Failure(format!("Failed to get answer: {e}")),
                    ActionOutcome::Failed,
                )
            }
        };
        self.surface.append_entry(&entry);
        self.state.record(entry);
        if outcome == ActionOutcome::Done {
            self.surface.clear_question();
        }
        outcome
    }

    pub async fn upload(&mut self, path: &Path) -> ActionOutcome {
        if let Err(e) = self.page.validate_upload() {
            self.prompter.alert(&e.to_string());
            return ActionOutcome::Rejected;
        }
        let file = match read_upload(path) {
            Ok(file) => file,
            Err(e) => {
                self.prompter.alert(&format!("Upload failed: {e}"));
                return ActionOutcome::Rejected;
            }
        };

        info!(file = %file.file_name, bytes = file.bytes.len(), "uploading document");
        let result = match self.api.upload(file).await {
            Ok(response) => response.into_result(),
            Err(e) => Err(e),
        };
        match result {
            Ok(document_id) => {
                if let Some(id) = document_id {
                    info!(document = %id, "upload stored");
                }
                self.reload();
                ActionOutcome::Done
            }
            Err(e) => {
                error!(error = %e, "upload error");
                self.fail("Upload", "Please try again", &e);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, id: &DocumentId) -> ActionOutcome {
        if !self.prompter.confirm(DELETE_CONFIRMATION) {
            return ActionOutcome::Skipped;
        }
        info!(document = %id, "deleting document");
        let result = match self.api.delete(id).await {
            Ok(response) => response.into_result(),
            Err(e) => Err(e),
        };
        self.finish_management("Delete", result.map(|_| ()))
    }

    pub async fn rename(&mut self, id: &DocumentId) -> ActionOutcome {
        let Some(new_name) = self.prompter.prompt(RENAME_PROMPT) else {
            return ActionOutcome::Skipped;
        };
        if new_name.is_empty() {
            return ActionOutcome::Skipped;
        }
        info!(document = %id, new_name = %new_name, "renaming document");
        let request = RenameRequest { new_name };
        let result = match self.api.rename(id, &request).await {
            Ok(response) => response.into_result(),
            Err(e) => Err(e),
        };
        self.finish_management("Rename", result.map(|_| ()))
    }

    fn finish_management(&mut self, action: &str, result: Result<(), ApiError>) -> ActionOutcome {
        match result {
            Ok(()) => {
                self.reload();
                ActionOutcome::Done
            }
            Err(e) => {
                error!(action, error = %e, "document management error");
                self.fail(action, "", &e);
                ActionOutcome::Failed
            }
        }
    }

    /// Alerts `"<action> failed: <reason>"`. Transport failures use
    /// `transport_hint`, or just `"<action> failed"` when it is empty.
    fn fail(&mut self, action: &str, transport_hint: &str, error: &ApiError) {
        let message = if !error.is_transport() {
            format!("{action} failed: {error}")
        } else if transport_hint.is_empty() {
            format!("{action} failed")
        } else {
            format!("{action} failed: {transport_hint}")
        };
        self.prompter.alert(&message);
    }

    fn reload(&mut self) {
        self.state.reset();
        self.surface.reload();
    }
}

fn read_upload(path: &Path) -> shared::types::Result<UploadFile> {
    shared::utils::check_upload(path)?;
    Ok(UploadFile::from_path(path)?)
}
