use super::*;
use crate::form::{CITY_REQUIRED, STATE_REQUIRED, STREET_REQUIRED, ZIP_FORMAT};
use shared::{
    domain::{Address, AddressField, UnknownField},
    error::FieldErrors,
};

fn fill(form: &mut FormController, street: &str, city: &str, state: &str, zip: &str) {
    form.set_field(AddressField::Street, street);
    form.set_field(AddressField::City, city);
    form.set_field(AddressField::State, state);
    form.set_field(AddressField::Zip, zip);
}

fn draft(street: &str, city: &str, state: &str, zip: &str) -> Draft {
    Draft::from(Address::new(street, city, state, zip))
}

#[test]
fn valid_submit_appends_once_and_resets_draft() {
    let mut store = AddressStore::new();
    let mut form = FormController::new();
    fill(&mut form, "1 Main St", "Springfield", "IL", "62701");

    assert!(form.submit(&mut store));

    assert_eq!(
        store.list(),
        [Address::new("1 Main St", "Springfield", "IL", "62701")]
    );
    assert!(form.draft().is_blank());
    assert!(form.errors().is_empty());
    for field in AddressField::ALL {
        assert_eq!(form.draft().get(field), "");
        assert_eq!(form.error_message(field), "");
    }
}

#[test]
fn invalid_submit_reports_only_failing_fields_and_leaves_store_alone() {
    let mut store = AddressStore::new();
    let mut form = FormController::new();
    fill(&mut form, "", "X", "Y", "123");

    assert!(!form.submit(&mut store));

    let expected: FieldErrors = [
        (AddressField::Street, STREET_REQUIRED.to_string()),
        (AddressField::Zip, ZIP_FORMAT.to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(form.errors(), &expected);
    assert_eq!(form.error_message(AddressField::Street), "Street is required");
    assert_eq!(form.error_message(AddressField::Zip), "Zip Code must be 5 digits");
    assert_eq!(form.error_message(AddressField::City), "");
    assert!(store.is_empty());
    assert_eq!(form.draft(), &draft("", "X", "Y", "123"));
}

#[test]
fn all_empty_draft_fails_every_rule() {
    let errors = validate(&Draft::new()).expect_err("blank draft must fail");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(AddressField::Street), Some(STREET_REQUIRED));
    assert_eq!(errors.get(AddressField::City), Some(CITY_REQUIRED));
    assert_eq!(errors.get(AddressField::State), Some(STATE_REQUIRED));
    assert_eq!(errors.get(AddressField::Zip), Some(ZIP_FORMAT));
}

#[test]
fn zip_must_be_exactly_five_ascii_digits() {
    for zip in ["62701", "00000", "99999"] {
        assert!(validate(&draft("a", "b", "c", zip)).is_ok(), "{zip} should pass");
    }
    for zip in ["", "1234", "123456", "6270a", " 62701", "62701 ", "62-01", "٦٢٧٠١", "62701\n"] {
        let errors = validate(&draft("a", "b", "c", zip)).expect_err(zip);
        assert_eq!(errors.get(AddressField::Zip), Some(ZIP_FORMAT), "{zip:?}");
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn whitespace_only_values_count_as_present() {
    assert!(validate(&draft(" ", " ", " ", "12345")).is_ok());
}

#[test]
fn later_validation_clears_stale_errors_for_fixed_fields() {
    let mut form = FormController::new();
    fill(&mut form, "", "", "IL", "1");
    assert!(form.validate().is_err());
    assert!(form.errors().contains(AddressField::City));

    form.set_field(AddressField::City, "Springfield");
    form.set_field(AddressField::Street, "1 Main St");
    let errors = form.validate().expect_err("zip still bad");

    assert_eq!(errors.len(), 1);
    assert_eq!(form.error_message(AddressField::City), "");
    assert_eq!(form.error_message(AddressField::Street), "");
    assert_eq!(form.error_message(AddressField::Zip), ZIP_FORMAT);

    form.set_field(AddressField::Zip, "62701");
    assert!(form.validate().is_ok());
    assert!(form.errors().is_empty());
}

#[test]
fn set_field_does_not_validate_eagerly() {
    let mut form = FormController::new();
    form.set_field(AddressField::Zip, "nope");
    assert!(form.errors().is_empty());
}

#[test]
fn set_field_by_name_resolves_wire_names() {
    let mut form = FormController::new();
    form.set_field_by_name("city", "Springfield").expect("known field");
    assert_eq!(form.draft().get(AddressField::City), "Springfield");

    let err = form
        .set_field_by_name("country", "US")
        .expect_err("unknown field");
    assert_eq!(err, UnknownField("country".to_string()));
}

#[test]
fn controller_is_reusable_after_success_and_failure() {
    let mut store = AddressStore::new();
    let mut form = FormController::new();

    fill(&mut form, "1 Main St", "Springfield", "IL", "62701");
    let first = form.submit_address(&mut store).expect("first submit");
    assert_eq!(first.street, "1 Main St");

    assert!(!form.submit(&mut store));
    assert_eq!(form.errors().len(), 4);

    fill(&mut form, "2 Elm St", "Shelbyville", "IL", "62565");
    assert!(form.submit(&mut store));
    assert!(form.errors().is_empty());
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[1].city, "Shelbyville");
}

#[test]
fn reset_discards_draft_and_errors_but_not_store() {
    let mut store: AddressStore = [Address::new("1 Main St", "Springfield", "IL", "62701")]
        .into_iter()
        .collect();
    let mut form = FormController::new();
    fill(&mut form, "", "x", "y", "z");
    assert!(!form.submit(&mut store));

    form.reset();

    assert!(form.draft().is_blank());
    assert!(form.errors().is_empty());
    assert_eq!(store.len(), 1);
}
