//! Shared fixtures for the cross-crate tests.

use application::page_controller::PageController;
use domain::access::PageKind;
use domain::ports::{PageSurface, Prompter};
use domain::render::DocumentContent;
use domain::session::TranscriptEntry;
use infrastructure::config::Config;
use infrastructure::http_api::HttpDocumentApi;

#[derive(Default)]
pub struct Recorder {
    pub content: Option<DocumentContent>,
    pub summary: String,
    pub entries: Vec<TranscriptEntry>,
    pub pending_shown: usize,
    pub pending_removed: usize,
    pub reloads: usize,
}

impl PageSurface for Recorder {
    fn set_content(&mut self, content: DocumentContent) {
        self.content = Some(content);
    }

    fn set_summary(&mut self, summary: &str) {
        self.summary = summary.to_string();
    }

    fn show_pending(&mut self, _text: &str) {
        self.pending_shown += 1;
    }

    fn remove_pending(&mut self) {
        self.pending_removed += 1;
    }

    fn append_entry(&mut self, entry: &TranscriptEntry) {
        self.entries.push(entry.clone());
    }

    fn clear_question(&mut self) {}

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

/// Answers every dialog the same way and keeps the alerts.
#[derive(Default)]
pub struct Script {
    pub confirm: bool,
    pub answer: Option<String>,
    pub alerts: Vec<String>,
}

impl Prompter for Script {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm
    }

    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.answer.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub type TestPage = PageController<HttpDocumentApi, Recorder, Script>;

pub fn page(base_url: &str, page: PageKind, script: Script) -> TestPage {
    page_with_cookie(base_url, page, script, None)
}

pub fn page_with_cookie(
    base_url: &str,
    page: PageKind,
    script: Script,
    session_cookie: Option<&str>,
) -> TestPage {
    let config = Config {
        base_url: base_url.to_string(),
        session_cookie: session_cookie.map(str::to_string),
        page,
    };
    let api = HttpDocumentApi::new(&config).expect("http client");
    PageController::new(api, Recorder::default(), script, page)
}
