//! Terminal rendition of the page regions and dialogs.

use colored::Colorize;
use domain::ports::{PageSurface, Prompter};
use domain::render::{DocumentContent, LOADING_DOCUMENT};
use domain::session::TranscriptEntry;
use shared::confirmation::{ask_confirmation, ask_text};
use std::io::{self, Write};
use tracing::warn;

pub struct TerminalSurface {
    out: Box<dyn Write + Send>,
    pending: bool,
}

impl TerminalSurface {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out, pending: false }
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        // a closed stdout is not worth failing the action over
        let _ = writeln!(self.out, "{text}");
    }

    fn render_pdf(&mut self, bytes: &[u8], page: u32, scale: f32) {
        self.line(format!("── PDF page {page} (scale {scale}) ──").blue());
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => match nth_page(&text, page) {
                Some(text) => self.line(text.trim_end()),
                None => self.line("(document has no pages)".dimmed()),
            },
            Err(e) => {
                warn!(error = %e, "pdf render error");
                self.line(format!("Failed to render PDF: {e}").red());
            }
        }
    }
}

/// Extracted pages are separated by form feeds; `page` is 1-based.
/// A page without text counts as missing.
fn nth_page(text: &str, page: u32) -> Option<&str> {
    let index = page.checked_sub(1)? as usize;
    text.split('\u{c}')
        .nth(index)
        .filter(|page| !page.trim().is_empty())
}

impl PageSurface for TerminalSurface {
    fn set_content(&mut self, content: DocumentContent) {
        match content {
            DocumentContent::Loading => self.line(LOADING_DOCUMENT.dimmed()),
            DocumentContent::Pdf { bytes, page, scale } => self.render_pdf(&bytes, page, scale),
            DocumentContent::Markup(markup) => self.line(markup),
            DocumentContent::Preformatted { text, class } => {
                if let Some(class) = class {
                    self.line(format!("── {class} ──").blue());
                }
                self.line(text);
            }
            DocumentContent::Failure(message) => self.line(message.red().bold()),
        }
    }

    fn set_summary(&mut self, summary: &str) {
        self.line(format!("{} {}", "Summary:".green().bold(), summary));
    }

    fn show_pending(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text.dimmed());
        let _ = self.out.flush();
        self.pending = true;
    }

    fn remove_pending(&mut self) {
        if self.pending {
            let _ = write!(self.out, "\r\x1b[2K");
            self.pending = false;
        }
    }

    fn append_entry(&mut self, entry: &TranscriptEntry) {
        match entry {
            TranscriptEntry::Exchange { question, answer } => {
                self.line(format!("{} {}", "Q:".yellow().bold(), question));
                self.line(format!("{} {}", "A:".green().bold(), answer));
            }
            TranscriptEntry::Failure(message) => self.line(message.red()),
        }
    }

    fn clear_question(&mut self) {}

    fn reload(&mut self) {
        self.line("Document library updated.".green());
    }
}

/// Dialogs backed by dialoguer. Flags can pre-answer them.
#[derive(Default)]
pub struct TerminalPrompter {
    assume_yes: bool,
    preset_answer: Option<String>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn with_answer(mut self, answer: Option<String>) -> Self {
        self.preset_answer = answer;
        self
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        ask_confirmation(message, false).unwrap_or_else(|e| {
            warn!(error = %e, "confirmation unavailable");
            false
        })
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Some(answer) = self.preset_answer.take() {
            return Some(answer).filter(|a| !a.is_empty());
        }
        ask_text(message).unwrap_or_else(|e| {
            warn!(error = %e, "prompt unavailable");
            None
        })
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}
