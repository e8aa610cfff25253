use super::validation::{FieldError, FieldValues, Schema, ValidationResult};
use leptos::*;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Reactive state for one form instance. Owns the current field values,
/// tracks which fields have lost focus, and re-runs the schema on blur and
/// on submit. Created on page mount with empty defaults and dropped with
/// the page.
#[derive(Clone)]
pub struct FormController {
    schema: Rc<Schema>,
    values: RwSignal<FieldValues>,
    touched: RwSignal<BTreeSet<&'static str>>,
    errors: RwSignal<ValidationResult>,
}

impl FormController {
    pub fn new(schema: Schema) -> Self {
        let values: FieldValues = schema
            .field_names()
            .map(|field| (field, String::new()))
            .collect();
        Self {
            schema: Rc::new(schema),
            values: create_rw_signal(values),
            touched: create_rw_signal(BTreeSet::new()),
            errors: create_rw_signal(ValidationResult::default()),
        }
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.values.update(|values| {
            values.insert(field, value);
        });
        // A field already blurred once keeps its error text live while the
        // user types a correction.
        if self.touched.get_untracked().contains(field) {
            self.revalidate();
        }
    }

    /// Blur trigger: the field becomes visible for error display and the
    /// schema is re-run.
    pub fn mark_touched(&self, field: &'static str) {
        self.touched.update(|touched| {
            touched.insert(field);
        });
        self.revalidate();
    }

    /// Submit trigger: every field becomes visible and the whole form is
    /// validated. Callers must not dispatch a submission when the returned
    /// result carries any error.
    pub fn validate(&self) -> ValidationResult {
        let fields: Vec<_> = self.schema.field_names().collect();
        self.touched.update(|touched| {
            touched.extend(fields);
        });
        self.revalidate();
        self.errors.get_untracked()
    }

    pub fn values(&self) -> FieldValues {
        self.values.get_untracked()
    }

    pub fn value(&self, field: &'static str) -> String {
        self.values
            .with(|values| values.get(field).cloned())
            .unwrap_or_default()
    }

    /// Error for a field, reactive, suppressed until the field was blurred
    /// or the form submitted.
    pub fn error(&self, field: &'static str) -> Option<FieldError> {
        if !self.touched.with(|touched| touched.contains(field)) {
            return None;
        }
        self.errors.with(|errors| errors.error(field))
    }

    pub fn error_message(&self, field: &'static str) -> Option<&'static str> {
        self.error(field).map(|e| e.message())
    }

    fn revalidate(&self) {
        let result = self
            .values
            .with_untracked(|values| self.schema.validate(values));
        self.errors.set(result);
    }
}
