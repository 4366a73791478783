//! UI layer for desktop GUI: the address form and table.

pub mod app;

pub use app::AddressBookApp;
