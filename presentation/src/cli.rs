use crate::terminal::{TerminalPrompter, TerminalSurface};
use application::page_controller::{ActionOutcome, PageController};
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain::models::DocumentId;
use infrastructure::config::Config;
use infrastructure::http_api::HttpDocumentApi;
use shared::types::Result;
use std::path::PathBuf;
use tracing::debug;

type TerminalController = PageController<HttpDocumentApi, TerminalSurface, TerminalPrompter>;

#[derive(Parser)]
#[command(name = "docchat")]
#[command(about = "View documents and ask questions about them")]
pub struct Cli {
    /// Backend address (overrides DOCCHAT_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Act from the admin page (enables upload)
    #[arg(long, global = true)]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a document and its summary
    View { id: String },

    /// Ask one question about a document
    Ask {
        id: String,
        #[arg(trailing_var_arg = true, required = true)]
        question: Vec<String>,
    },

    /// Interactive Q&A; `:open <id>` switches document, `exit` quits
    Chat { id: Option<String> },

    /// Upload a pdf, xlsx, json or txt file
    Upload { file: PathBuf },

    /// Delete a document
    Delete {
        id: String,
        /// Skip the confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Rename a document
    Rename {
        id: String,
        /// New name; prompted for when missing
        #[arg(long)]
        name: Option<String>,
    },
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<ActionOutcome> {
        let config = self
            .config
            .clone()
            .with_base_url(cli.base_url)
            .with_admin(cli.admin);
        debug!(base_url = %config.base_url, page = ?config.page, "starting");

        let prompter = match &cli.command {
            Command::Delete { yes, .. } => TerminalPrompter::new().assume_yes(*yes),
            Command::Rename { name, .. } => TerminalPrompter::new().with_answer(name.clone()),
            _ => TerminalPrompter::new(),
        };
        let api = HttpDocumentApi::new(&config)?;
        let mut controller =
            PageController::new(api, TerminalSurface::stdout(), prompter, config.page);

        let outcome = match cli.command {
            Command::View { id } => controller.open_document(DocumentId::new(id)).await,
            Command::Ask { id, question } => {
                controller.open_document(DocumentId::new(id)).await;
                controller.submit_question(&question.join(" ")).await
            }
            Command::Chat { id } => return self.handle_chat(&mut controller, id).await,
            Command::Upload { file } => controller.upload(&file).await,
            Command::Delete { id, .. } => controller.delete(&DocumentId::new(id)).await,
            Command::Rename { id, .. } => controller.rename(&DocumentId::new(id)).await,
        };
        Ok(outcome)
    }

    async fn handle_chat(
        &self,
        controller: &mut TerminalController,
        id: Option<String>,
    ) -> Result<ActionOutcome> {
        use dialoguer::{theme::ColorfulTheme, Input};

        if let Some(id) = id {
            controller.open_document(DocumentId::new(id)).await;
        }
        println!("Chat mode. `:open <id>` switches document, `exit` quits.");
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Question")
                .allow_empty(true)
                .interact_text()?;
            match ChatInput::parse(&input) {
                ChatInput::Exit => break,
                ChatInput::Blank => continue,
                ChatInput::Open(id) => {
                    controller.open_document(DocumentId::new(id)).await;
                }
                ChatInput::Question(question) => {
                    controller.submit_question(question).await;
                }
            }
        }
        let asked = controller.state().transcript().len();
        println!("{}", format!("{asked} message(s) this session.").dimmed());
        Ok(ActionOutcome::Done)
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Exit,
    Blank,
    Open(&'a str),
    Question(&'a str),
}

impl<'a> ChatInput<'a> {
    fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ChatInput::Blank;
        }
        if trimmed.eq_ignore_ascii_case("exit") {
            return ChatInput::Exit;
        }
        match trimmed.strip_prefix(":open") {
            Some(rest) if !rest.trim().is_empty() => ChatInput::Open(rest.trim()),
            _ => ChatInput::Question(input),
        }
    }
}
