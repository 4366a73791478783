use std::sync::Arc;

use client_core::{forward_best_effort, view, AddressIntake, AddressStore, FormController};
use tracing::debug;

use crate::command::{Command, USAGE};

/// What the terminal loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// One terminal session: the store and form live here, not in globals.
pub struct Session {
    store: AddressStore,
    form: FormController,
    intake: Arc<dyn AddressIntake>,
}

impl Session {
    pub fn new(intake: Arc<dyn AddressIntake>) -> Self {
        Self {
            store: AddressStore::new(),
            form: FormController::new(),
            intake,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &AddressStore {
        &self.store
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Applies one command. Must run inside a tokio runtime: successful
    /// submits spawn the forward without waiting on it.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Set { field, value } => {
                self.form.set_field(field, value);
                Outcome::Print(String::new())
            }
            Command::Submit => match self.form.submit_address(&mut self.store) {
                Ok(address) => {
                    let intake = Arc::clone(&self.intake);
                    tokio::spawn(async move {
                        forward_best_effort(intake.as_ref(), &address).await;
                    });
                    Outcome::Print(format!(
                        "added row {}\n{}",
                        self.store.len() - 1,
                        view::render_table(self.store.list())
                    ))
                }
                Err(_) => Outcome::Print(view::render_form(&self.form)),
            },
            Command::Delete { index } => match self.store.remove_at(index) {
                Some(removed) => {
                    debug!(index, street = %removed.street, "row deleted");
                    Outcome::Print(view::render_table(self.store.list()))
                }
                None => Outcome::Print(format!("no row at index {index}\n")),
            },
            Command::List => Outcome::Print(view::render_table(self.store.list())),
            Command::Show => Outcome::Print(view::render_form(&self.form)),
            Command::Clear => {
                self.form.reset();
                Outcome::Print(view::render_form(&self.form))
            }
            Command::Help => Outcome::Print(format!("{USAGE}\n")),
            Command::Quit => Outcome::Quit,
        }
    }
}
