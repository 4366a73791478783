//! Plain-text rendering of the form and the address table.

use std::fmt::Write as _;

use shared::domain::{Address, AddressField};

use crate::form::FormController;

const INDEX_HEADER: &str = "#";

/// Renders the address list as an aligned table, one row per address keyed by
/// its current index.
pub fn render_table(addresses: &[Address]) -> String {
    if addresses.is_empty() {
        return "(no addresses)\n".to_string();
    }

    let mut widths = [0usize; 4];
    for (slot, field) in widths.iter_mut().zip(AddressField::ALL) {
        *slot = addresses
            .iter()
            .map(|address| address.field(field).chars().count())
            .chain(std::iter::once(field.label().chars().count()))
            .max()
            .unwrap_or_default();
    }
    let index_width = (addresses.len() - 1)
        .to_string()
        .len()
        .max(INDEX_HEADER.len());

    let mut out = String::new();
    let header: Vec<&str> = AddressField::ALL.iter().map(|field| field.label()).collect();
    push_row(&mut out, INDEX_HEADER, index_width, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_row(&mut out, &"-".repeat(index_width), index_width, &rule, &widths);

    for (index, address) in addresses.iter().enumerate() {
        let cells: Vec<&str> = AddressField::ALL
            .iter()
            .map(|field| address.field(*field))
            .collect();
        push_row(&mut out, &index.to_string(), index_width, &cells, &widths);
    }
    out
}

fn push_row(
    out: &mut String,
    index: &str,
    index_width: usize,
    cells: &[&str],
    widths: &[usize; 4],
) {
    let _ = write!(out, "{index:>index_width$}");
    let last = cells.len().saturating_sub(1);
    for (position, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        // The last column is never padded, so its value is printed verbatim.
        if position == last {
            let _ = write!(out, " | {cell}");
        } else {
            let _ = write!(out, " | {cell:<width$}");
        }
    }
    out.push('\n');
}

/// Renders each input with its current value and any inline error.
pub fn render_form(form: &FormController) -> String {
    let mut out = String::new();
    for field in AddressField::ALL {
        let _ = write!(out, "{}: {}", field.label(), form.draft().get(field));
        let error = form.error_message(field);
        if !error.is_empty() {
            let _ = write!(out, "  <- {error}");
        }
        out.push('\n');
    }
    out
}
