//! Form controllers: per-field input state, required-field gating and a
//! re-entrancy guard around submission.

use std::future::Future;
use std::marker::PhantomData;

use hub_core::forms::{parse_list, FieldKind, FieldValue, FormValues, ValidationErrors};
use hub_core::requests::{
    FormInput, HackathonPostInput, JobInput, MentorApplicationInput, ProfileInput, PromotionInput,
};
use thiserror::Error;
use tracing::debug;

use crate::error::ClientError;
use crate::mutation::Mutation;
use crate::session::SessionStore;

/// What the form does once the server accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Back to the initial, empty state.
    Reset,
    /// Keep values and switch to a read-only summary.
    Summary,
    /// Keep values and stay editable.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormView {
    #[default]
    Editing,
    Summary,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InFlight,
    #[error("Please fill in {0} required field(s)")]
    Invalid(usize),
    #[error("Please login to continue")]
    NotSignedIn,
    #[error(transparent)]
    Client(#[from] ClientError),
}

pub struct FormController<I: FormInput> {
    values: FormValues,
    errors: ValidationErrors,
    submission: Mutation<()>,
    after_submit: AfterSubmit,
    view: FormView,
    _input: PhantomData<I>,
}

pub type HackathonPostForm = FormController<HackathonPostInput>;
pub type JobPostingForm = FormController<JobInput>;
pub type MentorApplicationForm = FormController<MentorApplicationInput>;
pub type ProfileForm = FormController<ProfileInput>;
pub type PromotionForm = FormController<PromotionInput>;

impl<I: FormInput> FormController<I> {
    pub fn new(after_submit: AfterSubmit) -> Self {
        Self {
            values: I::schema().initial_values(),
            errors: ValidationErrors::default(),
            submission: Mutation::Idle,
            after_submit,
            view: FormView::Editing,
            _input: PhantomData,
        }
    }

    /// Opens the form pre-filled, e.g. to edit an existing post.
    pub fn prefilled(input: &I, after_submit: AfterSubmit) -> Self {
        let mut form = Self::new(after_submit);
        form.values.extend(input.form_values());
        form
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn view(&self) -> FormView {
        self.view
    }

    /// Error of the last failed submission.
    pub fn submit_error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_pending()
    }

    /// Raw text input for `field`. List fields take comma-separated text,
    /// number fields are cleared by blank or non-numeric input.
    pub fn on_change(&mut self, field: &str, raw: &str) {
        let Some(spec) = I::schema().field(field) else {
            debug!(form = I::schema().name, field, "ignoring unknown field");
            return;
        };
        let value = match spec.kind {
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::List => FieldValue::List(parse_list(raw)),
            FieldKind::Number => FieldValue::Number(raw.trim().parse::<f64>().ok()),
        };
        self.values.insert(field.to_string(), value);
    }

    pub fn set_value(&mut self, field: &str, value: FieldValue) {
        if I::schema().field(field).is_some() {
            self.values.insert(field.to_string(), value);
        }
    }

    /// Recomputes the per-field errors.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = I::from_form_values(&self.values).validate();
        &self.errors
    }

    /// Switches a summary back to editing.
    pub fn edit(&mut self) {
        self.view = FormView::Editing;
    }

    pub fn reset(&mut self) {
        self.values = I::schema().initial_values();
        self.errors = ValidationErrors::default();
        self.submission = Mutation::Idle;
        self.view = FormView::Editing;
    }

    /// First phase of a submission. On success the form is marked in flight
    /// and the caller gets the token and body to send.
    pub fn begin_submit(&mut self, session: &SessionStore) -> Result<(String, I), SubmitError> {
        if self.submission.is_pending() {
            return Err(SubmitError::InFlight);
        }
        if !self.validate().is_empty() {
            return Err(SubmitError::Invalid(self.errors.len()));
        }
        let Some(token) = session.token() else {
            return Err(SubmitError::NotSignedIn);
        };

        self.submission.begin();
        Ok((token.to_string(), I::from_form_values(&self.values)))
    }

    /// Second phase. Always releases the guard.
    pub fn finish_submit<T>(&mut self, outcome: &Result<T, ClientError>) {
        match outcome {
            Ok(_) => {
                self.submission.settle(Ok(()));
                match self.after_submit {
                    AfterSubmit::Reset => {
                        self.values = I::schema().initial_values();
                        self.errors = ValidationErrors::default();
                    }
                    AfterSubmit::Summary => self.view = FormView::Summary,
                    AfterSubmit::Keep => {}
                }
            }
            Err(err) => self.submission.settle(Err(err)),
        }
    }

    pub async fn submit<T, F, Fut>(&mut self, session: &SessionStore, send: F) -> Result<T, SubmitError>
    where
        F: FnOnce(String, I) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let (token, input) = self.begin_submit(session)?;
        let outcome = send(token, input).await;
        self.finish_submit(&outcome);
        outcome.map_err(SubmitError::from)
    }
}
