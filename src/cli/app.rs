use crate::cli::action::Action;
use crate::cli::console::Console;
use crate::error::{PromptError, PromptResult};
use crate::repositories::ContactRepository;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

/// An interactive contact book session.
///
/// Owns the store for the whole session and hands it to one action handler
/// at a time.
pub struct App<S, R, W> {
    pub(super) store: S,
    pub(super) console: Console<R, W>,
    pub(super) contacts_path: PathBuf,
    last_action: Action,
}

impl<S, R, W> App<S, R, W>
where
    S: ContactRepository,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: S, console: Console<R, W>, contacts_path: PathBuf) -> Self {
        Self {
            store,
            console,
            contacts_path,
            last_action: Action::List,
        }
    }

    /// Tear the session down into its store and console.
    pub fn into_parts(self) -> (S, Console<R, W>) {
        (self.store, self.console)
    }

    /// Main menu loop.
    ///
    /// Runs until Exit is chosen or the menu prompt is interrupted. An
    /// interruption inside an action only cancels that action.
    pub async fn run(&mut self) -> PromptResult<()> {
        info!(path = %self.contacts_path.display(), "Contact book session started");

        let choices: Vec<(String, Action)> = Action::ALL
            .iter()
            .map(|action| (action.label().to_string(), *action))
            .collect();

        loop {
            let picked = self
                .console
                .select("Main menu", &choices, Some(self.last_action.index()))
                .await;

            let action = match picked {
                Ok(Action::Exit) | Err(PromptError::Interrupted) => break,
                Ok(action) => action,
                Err(e) => return Err(e),
            };

            let mut outcome = self.perform(action).await;
            // Ctrl-C pressed while the action ran without prompting
            if outcome.is_ok() && self.console.take_interrupt().await {
                outcome = Err(PromptError::Interrupted);
            }

            match outcome {
                Ok(()) => {}
                Err(PromptError::Interrupted) => {
                    debug!(%action, "Action interrupted");
                    self.console.blank().await?;
                    self.console.say("Interrupted the current action 🤷.").await?;
                    self.console.blank().await?;
                }
                Err(e) => return Err(e),
            }

            self.last_action = action;
        }

        self.console.say("👋 Bye").await?;
        info!(contacts = self.store.len(), "Contact book session ended");
        Ok(())
    }

    /// Run a single action.
    pub async fn perform(&mut self, action: Action) -> PromptResult<()> {
        debug!(%action, "Running action");
        match action {
            Action::List => self.list().await,
            Action::Search => self.search().await,
            Action::Create => self.create().await,
            Action::Delete => self.delete().await,
            Action::ExportCsv => self.export().await,
            Action::ImportCsv => self.import().await,
            Action::Exit => Ok(()),
        }
    }
}
