//! Action handlers for the main menu.
//!
//! Each handler prompts for what it needs, calls into the store, query
//! engine or CSV transfer, and reports the outcome on the console.

use crate::cli::app::App;
use crate::domain::ContactId;
use crate::error::{PromptResult, TransferError};
use crate::models::ContactDraft;
use crate::repositories::ContactRepository;
use crate::search::{self, ContactQuery};
use crate::transfer;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info};

const EMPTY_QUERY: &str = "Empty query 🤷! Please provide a non-empty query text.";
const NO_MATCHES: &str = "Found no matches 🤦! Try a different query.";

impl<S, R, W> App<S, R, W>
where
    S: ContactRepository,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn list(&mut self) -> PromptResult<()> {
        if self.store.is_empty() {
            self.console
                .say("Empty 🤷! Try creating a new contact.")
                .await?;
        } else {
            let ids: Vec<ContactId> = self.store.list_all().into_iter().map(|(id, _)| id).collect();
            self.show(&ids).await?;
        }
        self.console.blank().await
    }

    pub(super) async fn search(&mut self) -> PromptResult<()> {
        let Some(ids) = self.ask_query().await? else {
            return self.console.blank().await;
        };

        if ids.is_empty() {
            self.console.say(NO_MATCHES).await?;
        } else {
            self.show(&ids).await?;
        }
        self.console.blank().await
    }

    pub(super) async fn create(&mut self) -> PromptResult<()> {
        let name = self.console.ask_raw("Name").await?;
        let phone = self.console.ask_raw("Phone").await?;
        let email = self.console.ask_raw("Email").await?;
        self.console.blank().await?;

        let draft = ContactDraft {
            name,
            phone,
            email: Some(email),
        };

        match self.store.create(draft) {
            Ok(id) => {
                info!(%id, "Contact created from prompt");
                self.console.say("✔ Created!").await?;
            }
            Err(e) => {
                self.console.say(&format!("❌ Error: {} 🤔.", e)).await?;
            }
        }
        self.console.blank().await
    }

    /// Search, narrow down to one contact, confirm, delete.
    pub(super) async fn delete(&mut self) -> PromptResult<()> {
        let Some(ids) = self.ask_query().await? else {
            return self.console.blank().await;
        };

        let target = match ids.as_slice() {
            [] => None,
            [only] => {
                self.show(&[*only]).await?;
                self.console.blank().await?;
                Some(*only)
            }
            _ => {
                let choices: Vec<(String, ContactId)> = ids
                    .iter()
                    .filter_map(|id| self.store.get(*id).ok().map(|c| (c.to_string(), *id)))
                    .collect();
                Some(
                    self.console
                        .select("Select one to delete", &choices, None)
                        .await?,
                )
            }
        };

        let Some(id) = target else {
            self.console.say(NO_MATCHES).await?;
            return self.console.blank().await;
        };

        if self.console.confirm("Are you sure").await? {
            match self.store.delete(id) {
                Ok(_) => {
                    info!(%id, "Contact deleted from prompt");
                    self.console.say("✔ Deleted!").await?;
                }
                Err(e) => self.console.say(&format!("❌ Error: {}.", e)).await?,
            }
        } else {
            self.console.say("❌ Deletion cancelled.").await?;
        }
        self.console.blank().await
    }

    pub(super) async fn export(&mut self) -> PromptResult<()> {
        match transfer::export_to_path(&self.store, &self.contacts_path) {
            Ok(0) => self.console.say("✔ Exported (although empty 🤷)!").await?,
            Ok(_) => self.console.say("✔ Exported!").await?,
            Err(e) => {
                error!(error = %e, "Export failed");
                self.console.say(&format!("❌ Export failed: {}", e)).await?;
            }
        }
        self.console.blank().await
    }

    pub(super) async fn import(&mut self) -> PromptResult<()> {
        let report = match transfer::import_from_path(&mut self.store, &self.contacts_path) {
            Ok(report) => report,
            Err(TransferError::FileNotFound(path)) => {
                self.console
                    .say(&format!("❌ {} file not found!", path.display()))
                    .await?;
                self.console
                    .say("📄 Put your CSV file in the current working directory as contacts.csv to be able to import it.")
                    .await?;
                return self.console.blank().await;
            }
            Err(e) => {
                error!(error = %e, "Import failed");
                self.console.say(&format!("❌ Import failed: {}", e)).await?;
                return self.console.blank().await;
            }
        };

        for skipped in &report.skipped {
            self.console
                .say(&format!(
                    "❌ Error in row {} (skipping): {} 🤔.",
                    skipped.row, skipped.error
                ))
                .await?;
        }
        if report.any_row_error() {
            self.console.blank().await?;
        }

        if report.imported > 0 {
            self.console
                .say(&format!("✔ Imported {}!", report.imported))
                .await?;
        } else {
            self.console.say("✔ Imported nothing 🤷!").await?;
        }
        self.console.blank().await
    }

    /// Prompt for a query and run it. `None` means the query was empty and
    /// the user has been told so.
    async fn ask_query(&mut self) -> PromptResult<Option<Vec<ContactId>>> {
        let text = self.console.ask_text("Query").await?;
        self.console.blank().await?;

        match ContactQuery::new(&text) {
            Ok(query) => Ok(Some(search::search(&self.store, &query))),
            Err(_) => {
                self.console.say(EMPTY_QUERY).await?;
                Ok(None)
            }
        }
    }

    async fn show(&mut self, ids: &[ContactId]) -> PromptResult<()> {
        let lines: Vec<String> = ids
            .iter()
            .filter_map(|id| self.store.get(*id).ok())
            .map(ToString::to_string)
            .collect();

        for line in &lines {
            self.console.say(line).await?;
        }
        Ok(())
    }
}
