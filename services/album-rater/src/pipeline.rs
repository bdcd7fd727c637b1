//!
//! src/pipeline.rs
//!
//! Runs one rating transaction end to end: uri, token + lookup,
//! confirmation, rating, submission. Stops at the first failure.
//!

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::backend::RatingBackend;
use crate::credential::TokenHandoff;
use crate::errors::RaterError;
use crate::gate::{self, Confirmation};
use crate::identifier::Identifier;
use crate::prompt::Prompter;
use crate::rating::Rating;
use crate::submit::SubmissionPayload;
use crate::types::AlbumRecord;

pub const URI_LABEL: &str = "Enter spotify URI";
pub const RATING_LABEL: &str = "Enter a rating 1-10";

/// Ordered, a transaction only ever moves to a later stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    AwaitingIdentifier,
    ResolvingCatalog,
    AwaitingConfirmation,
    AwaitingRating,
    Submitting
}

#[derive(Debug)]
pub enum Outcome {
    Done(AlbumRecord),
    Aborted,
    Failed { stage: Stage, error: RaterError }
}

impl Outcome {
    /// Without a token or metadata the process has nothing left to do
    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::Failed { stage: Stage::ResolvingCatalog, .. })
    }

    /// Line shown to the user once the transaction is over
    pub fn report(&self) -> String {
        match self {
            Outcome::Done(record) => format!("{} added!", record.album_name),
            Outcome::Aborted => "Aborted.".to_string(),
            Outcome::Failed { stage: Stage::Submitting, error } => format!("Error! {error}"),
            Outcome::Failed { stage: Stage::ResolvingCatalog, error } => format!("Fatal: {error}"),
            Outcome::Failed { error, .. } => format!("Prompt failed {error}")
        }
    }
}

pub struct Pipeline<P> {
    backend: Arc<dyn RatingBackend>,
    prompter: P,
    stage: Stage
}

impl<P: Prompter> Pipeline<P> {
    pub fn new(backend: Arc<dyn RatingBackend>, prompter: P) -> Self {
        Self { backend, prompter, stage: Stage::AwaitingIdentifier }
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[cfg(test)]
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    pub async fn run(&mut self) -> Outcome {
        let span = info_span!("transaction", id = %Uuid::new_v4());
        self.execute().instrument(span).await
    }

    async fn execute(&mut self) -> Outcome {
        let outcome = match self.steps().await {
            Ok(Some(record)) => Outcome::Done(record),
            Ok(None) => Outcome::Aborted,
            Err(error) => Outcome::Failed { stage: self.stage, error }
        };

        match &outcome {
            Outcome::Done(record) => info!(album = %record.album_name, "pipeline.done"),
            Outcome::Aborted => info!(stage = ?self.stage, "pipeline.aborted"),
            Outcome::Failed { stage, error } =>
                warn!(stage = ?stage, error = %error, fatal = outcome.is_fatal(), "pipeline.failed")
        }
        outcome
    }

    fn enter(&mut self, next: Stage) {
        debug_assert!(next >= self.stage, "stage moved back from {:?} to {:?}", self.stage, next);
        debug!(from = ?self.stage, to = ?next, "pipeline.stage");
        self.stage = next;
    }

    /// `Ok(None)` is the user declining the album
    async fn steps(&mut self) -> Result<Option<AlbumRecord>, RaterError> {
        let raw = self.prompter.input(URI_LABEL)?;
        let id = Identifier::parse(&raw)?;

        // token is fetched in the background, waited on right before the lookup
        let handoff = TokenHandoff::dispatch(self.backend.clone());

        self.enter(Stage::ResolvingCatalog);
        let token = handoff.wait().await?;
        let record = self.backend.resolve_album(&id, token).await?;

        self.enter(Stage::AwaitingConfirmation);
        let record = match gate::confirm_album(&mut self.prompter, record)? {
            Confirmation::Confirmed(record) => record,
            Confirmation::Rejected => return Ok(None)
        };

        self.enter(Stage::AwaitingRating);
        let raw = self.prompter.input(RATING_LABEL)?;
        let rating = Rating::parse(&raw)?;

        self.enter(Stage::Submitting);
        let payload = SubmissionPayload::new(&record, rating, &id);
        self.backend.submit(&payload).await?;

        Ok(Some(record))
    }
}
