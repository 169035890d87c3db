//! The form engine: per-field state, validation and payload emission.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{FormError, Result};
use crate::model::{FieldModel, FormModel};
use crate::validation::{validate_format, validate_match};

/// Submitted form values keyed by field key.
pub type Payload = HashMap<String, String>;

/// Mutable state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current raw value.
    pub value: String,
    /// Current error message; empty when valid or not yet validated.
    pub error: String,
}

/// A record whose fields can pre-fill a form.
pub trait Record {
    /// Returns the value stored under `key`, if any.
    fn field_value(&self, key: &str) -> Option<String>;

    /// Returns the record's identifier for display.
    fn record_id(&self) -> Option<String> {
        self.field_value("id")
    }
}

impl Record for HashMap<String, String> {
    fn field_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Record for BTreeMap<String, String> {
    fn field_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// An input event delivered to a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a field changed.
    Change { key: String, value: String },
    /// A field lost focus.
    Blur { key: String },
    /// The form was submitted.
    Submit,
    /// The close affordance was activated.
    Close,
}

/// What a handled [`FormEvent`] produced for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The form validated; here is its payload.
    Submitted(Payload),
    /// The caller should dismiss the form.
    Closed,
}

/// A live form bound to a [`FormModel`].
///
/// Changing a value does not clear that field's error: a stale message
/// stays visible until the next blur or submit revalidates the field.
#[derive(Debug, Clone)]
pub struct Form {
    model: FormModel,
    states: HashMap<String, FieldState>,
    record_id: Option<String>,
    closable: bool,
}

impl Form {
    /// Creates a blank form.
    pub fn new(model: FormModel) -> Self {
        let states = model
            .keys()
            .map(|key| (key.to_string(), FieldState::default()))
            .collect();

        Self {
            model,
            states,
            record_id: None,
            closable: false,
        }
    }

    /// Creates a form pre-filled from an existing record.
    ///
    /// Each field takes the record's value under its own key. A field with
    /// `prefill_from_match` falls back to its match target's record value.
    pub fn with_record<R: Record + ?Sized>(model: FormModel, record: &R) -> Self {
        let states = model
            .fields
            .iter()
            .map(|field| {
                let value = record
                    .field_value(&field.key)
                    .or_else(|| {
                        field
                            .match_field
                            .as_deref()
                            .filter(|_| field.prefill_from_match)
                            .and_then(|target| record.field_value(target))
                    })
                    .unwrap_or_default();
                (
                    field.key.clone(),
                    FieldState {
                        value,
                        error: String::new(),
                    },
                )
            })
            .collect();

        Self {
            model,
            states,
            record_id: record.record_id(),
            closable: false,
        }
    }

    /// Shows a close affordance when rendered.
    #[must_use]
    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    /// Returns whether a close affordance is shown.
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    /// Returns the underlying model.
    pub fn model(&self) -> &FormModel {
        &self.model
    }

    /// Returns the id of the record being edited, if any.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Returns the state of a field.
    pub fn state(&self, key: &str) -> Option<&FieldState> {
        self.states.get(key)
    }

    /// Returns the current value of a field.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.states.get(key).map(|s| s.value.as_str())
    }

    /// Returns the current error of a field.
    pub fn error(&self, key: &str) -> Option<&str> {
        self.states.get(key).map(|s| s.error.as_str())
    }

    /// Returns every non-empty error in display order.
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.model
            .keys()
            .filter_map(|key| {
                let error = self.states.get(key)?.error.as_str();
                (!error.is_empty()).then_some((key, error))
            })
            .collect()
    }

    /// Sets a field's value.
    pub fn on_change(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let state = self
            .states
            .get_mut(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;
        state.value = value.into();
        Ok(())
    }

    /// Revalidates a single field against its current value.
    pub fn on_blur(&mut self, key: &str) -> Result<()> {
        let field = self
            .model
            .field(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;
        let error = self.field_error(field);
        if let Some(state) = self.states.get_mut(key) {
            state.error = error;
        }
        Ok(())
    }

    /// Revalidates every field and writes the errors back.
    ///
    /// Returns `true` when no field has an error.
    pub fn check_validity(&mut self) -> bool {
        let errors: Vec<(String, String)> = self
            .model
            .fields
            .iter()
            .map(|field| (field.key.clone(), self.field_error(field)))
            .collect();

        let mut valid = true;
        for (key, error) in errors {
            valid &= error.is_empty();
            if let Some(state) = self.states.get_mut(&key) {
                state.error = error;
            }
        }
        valid
    }

    /// Returns the current values stripped of their error state.
    pub fn payload(&self) -> Payload {
        self.states
            .iter()
            .map(|(key, state)| (key.clone(), state.value.clone()))
            .collect()
    }

    /// Validates the whole form and returns its payload when valid.
    ///
    /// On failure the errors stay on the field states and `None` is
    /// returned.
    pub fn submit(&mut self) -> Option<Payload> {
        if self.check_validity() {
            debug!(form = %self.model.name, "form submitted");
            Some(self.payload())
        } else {
            debug!(
                form = %self.model.name,
                errors = self.errors().len(),
                "form submission blocked"
            );
            None
        }
    }

    /// Validates the form and hands the payload to `on_submit` when valid.
    ///
    /// `on_submit` runs at most once per call.
    pub fn submit_with<T>(&mut self, on_submit: impl FnOnce(Payload) -> T) -> Option<T> {
        self.submit().map(on_submit)
    }

    /// Invokes the caller's close handler; field state is left untouched.
    pub fn close<T>(&self, on_close: impl FnOnce() -> T) -> T {
        on_close()
    }

    /// Dispatches an input event.
    pub fn handle(&mut self, event: FormEvent) -> Result<Option<FormOutcome>> {
        match event {
            FormEvent::Change { key, value } => {
                self.on_change(&key, value)?;
                Ok(None)
            }
            FormEvent::Blur { key } => {
                self.on_blur(&key)?;
                Ok(None)
            }
            FormEvent::Submit => Ok(self.submit().map(FormOutcome::Submitted)),
            FormEvent::Close => Ok(Some(self.close(|| FormOutcome::Closed))),
        }
    }

    fn field_error(&self, field: &FieldModel) -> String {
        let value = self.value(&field.key).unwrap_or_default();
        let error = validate_format(field.format, value, field.required);
        if !error.is_empty() {
            return error;
        }

        match &field.match_field {
            Some(target) => validate_match(
                value,
                self.value(target).unwrap_or_default(),
                field.error_message.as_deref(),
            ),
            None => String::new(),
        }
    }
}
