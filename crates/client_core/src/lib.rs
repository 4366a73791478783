//! Client-side address book: the in-memory store, the validating form
//! controller, and best-effort forwarding to the intake endpoint.

pub mod form;
pub mod intake;
pub mod store;
pub mod view;

pub use form::{validate, Draft, FormController};
pub use intake::{
    forward_best_effort, intake_from_url, AddressIntake, DisabledIntake, HttpIntake, IntakeError,
};
pub use store::AddressStore;

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod form_tests;

#[cfg(test)]
#[path = "tests/intake_tests.rs"]
mod intake_tests;

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod view_tests;
