use crate::models::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Exchange { question: String, answer: String },
    Failure(String),
}

impl TranscriptEntry {
    pub fn exchange(question: &str, answer: &str) -> Self {
        TranscriptEntry::Exchange {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Append-only chat history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the page remembers between actions.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    current_document: Option<DocumentId>,
    transcript: Transcript,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub fn select_document(&mut self, id: DocumentId) {
        self.current_document = Some(id);
    }

    pub fn current_document(&self) -> Option<&DocumentId> {
        self.current_document.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn record(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    /// Fresh page after a reload.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
