//! The add-book form and its submission flow.
//!
//! ```text
//! Editing -> Validating -> Invalid -> Editing
//!                       -> Submitting -> Submitted
//! ```
//!
//! The book is added to the store as soon as the form enters `Submitting`; the
//! simulated latency comes after. Abandoning the flow mid-delay (dropping the
//! `submit` future) therefore leaves the book in the catalog.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::book::{Book, NewBook};
use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::cover;
use crate::error::CatalogError;
use crate::route::Route;
use crate::validation::{self, Field, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Validating,
    Invalid,
    Submitting,
    Submitted,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("form is {0:?}; edits and submissions are disabled")]
    Busy(SubmissionState),
    #[error("unsupported cover image type {0:?}")]
    UnsupportedCover(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was added; the form is back to editing with these errors shown.
    Invalid(ValidationErrors),
    /// The book was added; the caller should navigate to `redirect`.
    Submitted { book: Book, redirect: Route },
}

/// Raw form values, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub rating: String,
    pub cover_image: String,
}

impl Default for BookForm {
    fn default() -> Self {
        BookForm {
            title: String::new(),
            author: String::new(),
            category: String::new(),
            description: String::new(),
            rating: "0".to_string(),
            cover_image: String::new(),
        }
    }
}

impl BookForm {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
            Field::Rating => &mut self.rating,
            Field::CoverImage => &mut self.cover_image,
        }
    }

    /// The candidate these values describe. A blank rating reads as 0 and an
    /// unparseable one as NaN, which validation rejects.
    pub fn candidate(&self) -> NewBook {
        let rating = self.rating.trim();
        let rating = if rating.is_empty() {
            0.0
        } else {
            rating.parse().unwrap_or(f64::NAN)
        };

        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            rating,
            cover_image: self.cover_image.clone(),
        }
    }
}

pub struct AddBookForm {
    values: BookForm,
    errors: ValidationErrors,
    state: SubmissionState,
    default_cover: String,
    delay: Duration,
}

impl AddBookForm {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_settings(config.default_cover_image.clone(), config.submit_delay())
    }

    pub fn with_settings(default_cover: impl Into<String>, delay: Duration) -> Self {
        AddBookForm {
            values: BookForm::default(),
            errors: ValidationErrors::new(),
            state: SubmissionState::Editing,
            default_cover: default_cover.into(),
            delay,
        }
    }

    pub fn values(&self) -> &BookForm {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True while the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Replace a field's value and clear any error shown for it.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), SubmissionError> {
        self.ensure_editable()?;
        *self.values.slot(field) = value.into();
        self.errors.clear(field);
        Ok(())
    }

    /// Use an uploaded image as the cover.
    pub fn attach_cover(&mut self, mime: &str, bytes: &[u8]) -> Result<(), SubmissionError> {
        self.ensure_editable()?;
        if !cover::is_image_mime(mime) {
            return Err(SubmissionError::UnsupportedCover(mime.to_string()));
        }
        self.values.cover_image = cover::data_uri(mime, bytes);
        self.errors.clear(Field::CoverImage);
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), SubmissionError> {
        self.ensure_editable()?;
        self.values = BookForm::default();
        self.errors = ValidationErrors::new();
        Ok(())
    }

    /// Validate and, when valid, add the book and wait out the simulated latency.
    pub async fn submit<S>(&mut self, store: &S) -> Result<SubmitOutcome, SubmissionError>
    where
        S: CatalogStore + ?Sized,
    {
        self.ensure_editable()?;
        self.transition(SubmissionState::Validating);

        let candidate = self.values.candidate();
        let errors = validation::validate(&candidate);
        if !errors.is_empty() {
            let fields: Vec<Field> = errors.fields().collect();
            debug!(?fields, "book form rejected");
            self.errors = errors.clone();
            self.transition(SubmissionState::Invalid);
            self.transition(SubmissionState::Editing);
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.errors = ValidationErrors::new();
        self.transition(SubmissionState::Submitting);

        let candidate = NewBook {
            cover_image: cover::cover_or_default(&candidate.cover_image, &self.default_cover),
            ..candidate
        };
        let book = match store.add_book(candidate) {
            Ok(book) => book,
            Err(err) => {
                warn!(error = %err, "adding book failed");
                self.transition(SubmissionState::Editing);
                return Err(err.into());
            }
        };
        info!(book_id = %book.id, "book submitted");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.transition(SubmissionState::Submitted);
        Ok(SubmitOutcome::Submitted {
            book,
            redirect: Route::browse(),
        })
    }

    fn ensure_editable(&self) -> Result<(), SubmissionError> {
        match self.state {
            SubmissionState::Submitting | SubmissionState::Submitted => {
                Err(SubmissionError::Busy(self.state))
            }
            _ => Ok(()),
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(from = ?self.state, to = ?next, "book form state");
        self.state = next;
    }
}
