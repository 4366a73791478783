use std::sync::LazyLock;

use regex::Regex;
use shared::{
    domain::{Address, AddressField, UnknownField},
    error::FieldErrors,
};
use tracing::{debug, info};

use crate::store::AddressStore;

pub const STREET_REQUIRED: &str = "Street is required";
pub const CITY_REQUIRED: &str = "City is required";
pub const STATE_REQUIRED: &str = "State is required";
pub const ZIP_FORMAT: &str = "Zip Code must be 5 digits";

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("zip pattern is a valid regex"));

/// In-progress form input. Nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: Address,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: AddressField) -> &str {
        self.fields.field(field)
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        *self.fields.field_mut(field) = value.into();
    }

    pub fn is_blank(&self) -> bool {
        AddressField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

impl From<Address> for Draft {
    fn from(fields: Address) -> Self {
        Self { fields }
    }
}

/// Checks every field of `draft` (no short-circuit across fields) and returns
/// the messages for the fields that failed.
pub fn validate(draft: &Draft) -> Result<(), FieldErrors> {
    let errors: FieldErrors = AddressField::ALL
        .into_iter()
        .filter_map(|field| {
            check_field(field, draft.get(field)).map(|message| (field, message.to_string()))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field: AddressField, value: &str) -> Option<&'static str> {
    match field {
        AddressField::Street if value.is_empty() => Some(STREET_REQUIRED),
        AddressField::City if value.is_empty() => Some(CITY_REQUIRED),
        AddressField::State if value.is_empty() => Some(STATE_REQUIRED),
        AddressField::Zip if !ZIP_PATTERN.is_match(value) => Some(ZIP_FORMAT),
        _ => None,
    }
}

/// Owns the draft and the error messages shown next to each input.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: Draft,
    errors: FieldErrors,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Empty string when the field currently has no error.
    pub fn error_message(&self, field: AddressField) -> &str {
        self.errors.get(field).unwrap_or_default()
    }

    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<AddressField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validates the draft and replaces the published errors wholesale: fields
    /// that pass lose any stale message.
    pub fn validate(&mut self) -> Result<(), FieldErrors> {
        self.errors.clear();
        validate(&self.draft).inspect_err(|errors| {
            self.errors = errors.clone();
        })
    }

    pub fn submit(&mut self, store: &mut AddressStore) -> bool {
        self.submit_address(store).is_ok()
    }

    /// Like [`FormController::submit`], but hands back the stored address (for
    /// forwarding) or the field errors.
    pub fn submit_address(&mut self, store: &mut AddressStore) -> Result<Address, FieldErrors> {
        if let Err(errors) = self.validate() {
            debug!(failed = errors.len(), "submit rejected");
            return Err(errors);
        }

        let address = std::mem::take(&mut self.draft).fields;
        store.append(address.clone());
        info!(rows = store.len(), "address submitted");
        Ok(address)
    }

    /// Drops the draft and any errors without touching the store.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
    }
}
