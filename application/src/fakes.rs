//! In-memory stand-ins for the controller's collaborators.

use domain::error::ApiError;
use domain::models::{
    ActionResponse, AskRequest, AskResponse, DocumentId, RenameRequest, UploadFile, ViewResponse,
};
use domain::ports::{DocumentApi, PageSurface, Prompter};
use domain::render::DocumentContent;
use domain::session::TranscriptEntry;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    View(DocumentId),
    Ask(AskRequest),
    /// File name and size.
    Upload(String, usize),
    Delete(DocumentId),
    Rename(DocumentId, RenameRequest),
}

pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    view: Result<ViewResponse, ApiError>,
    ask: Result<AskResponse, ApiError>,
    action: Result<ActionResponse, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        let unset = || ApiError::Transport("no canned response".to_string());
        Self {
            calls: Mutex::new(Vec::new()),
            view: Err(unset()),
            ask: Err(unset()),
            action: Err(unset()),
        }
    }
}

impl FakeApi {
    pub fn with_view(mut self, view: Result<ViewResponse, ApiError>) -> Self {
        self.view = view;
        self
    }

    pub fn with_ask(mut self, ask: Result<AskResponse, ApiError>) -> Self {
        self.ask = ask;
        self
    }

    pub fn with_action(mut self, action: Result<ActionResponse, ApiError>) -> Self {
        self.action = action;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DocumentApi for FakeApi {
    async fn view(&self, id: &DocumentId) -> Result<ViewResponse, ApiError> {
        self.record(Call::View(id.clone()));
        self.view.clone()
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        self.record(Call::Ask(request.clone()));
        self.ask.clone()
    }

    async fn upload(&self, file: UploadFile) -> Result<ActionResponse, ApiError> {
        self.record(Call::Upload(file.file_name, file.bytes.len()));
        self.action.clone()
    }

    async fn delete(&self, id: &DocumentId) -> Result<ActionResponse, ApiError> {
        self.record(Call::Delete(id.clone()));
        self.action.clone()
    }

    async fn rename(
        &self,
        id: &DocumentId,
        request: &RenameRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.record(Call::Rename(id.clone(), request.clone()));
        self.action.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Content(DocumentContent),
    Summary(String),
    Pending(String),
    PendingRemoved,
    Entry(TranscriptEntry),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub content: Option<DocumentContent>,
    pub summary: String,
    pub transcript: Vec<TranscriptEntry>,
    pub cleared_question: usize,
    pub reloads: usize,
}

impl PageSurface for RecordingSurface {
    fn set_content(&mut self, content: DocumentContent) {
        self.events.push(SurfaceEvent::Content(content.clone()));
        self.content = Some(content);
    }

    fn set_summary(&mut self, summary: &str) {
        self.events.push(SurfaceEvent::Summary(summary.to_string()));
        self.summary = summary.to_string();
    }

    fn show_pending(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Pending(text.to_string()));
    }

    fn remove_pending(&mut self) {
        self.events.push(SurfaceEvent::PendingRemoved);
    }

    fn append_entry(&mut self, entry: &TranscriptEntry) {
        self.events.push(SurfaceEvent::Entry(entry.clone()));
        self.transcript.push(entry.clone());
    }

    fn clear_question(&mut self) {
        self.cleared_question += 1;
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

#[derive(Default)]
pub struct ScriptedPrompter {
    confirm_answer: bool,
    prompt_answer: Option<String>,
    pub confirmations: Vec<String>,
    pub prompts: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn answering(mut self, answer: Option<String>) -> Self {
        self.prompt_answer = answer;
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answer
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.prompt_answer.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
