//! Reconciles server data with the local [`ReviewSession`].
//!
//! Every method performs at most one request. On failure the session is left
//! exactly as it was, the error is logged, and it is returned to the caller so
//! the front-end can show it.

use thiserror::Error;
use tracing::{error, info};

use crate::client::{ClientError, FlashcardClient};
use crate::form::{FlashcardForm, FormError, Submission};
use crate::model::{Flashcard, FlashcardId};
use crate::session::ReviewSession;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("{0}")]
    Client(#[from] ClientError),
}

pub struct FlashcardController {
    client: FlashcardClient,
    session: ReviewSession,
}

impl FlashcardController {
    pub fn new(client: FlashcardClient) -> Self {
        Self {
            client,
            session: ReviewSession::new(),
        }
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ReviewSession {
        &mut self.session
    }

    pub fn client(&self) -> &FlashcardClient {
        &self.client
    }

    /// Fetches every card and replaces the session list. Returns the card count.
    pub async fn load(&mut self) -> Result<usize, ClientError> {
        let cards = self.client.list().await.inspect_err(|e| {
            error!(error = %e, "Error loading flashcards");
        })?;
        let count = cards.len();
        self.session.load(cards);
        info!(count, "Loaded flashcards");
        Ok(count)
    }

    /// Validates the form, sends it, and folds the server's answer into the session.
    pub async fn submit(&mut self, form: &mut FlashcardForm) -> Result<Flashcard, SubmitError> {
        let submission = form.begin_submit()?;
        let is_create = matches!(submission, Submission::Create(_));

        let outcome = match submission {
            Submission::Create(draft) => self.client.create(&draft).await,
            Submission::Update(id, patch) => self.client.update(&id, &patch).await,
        };

        match outcome {
            Ok(card) => {
                form.finish_submit(Ok(()));
                if is_create {
                    self.session.add_card(card.clone());
                } else {
                    self.session.update_card(card.clone());
                }
                Ok(card)
            }
            Err(e) => {
                error!(error = %e, title = form.title(), "Error submitting flashcard");
                form.finish_submit(Err(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Deletes on the server, then drops the card locally.
    pub async fn delete(&mut self, id: &FlashcardId) -> Result<String, ClientError> {
        let message = self.client.delete(id).await.inspect_err(|e| {
            error!(error = %e, %id, "Error deleting card");
        })?;
        self.session.remove_card(id);
        Ok(message)
    }
}
