use client_core::{AddressStore, FormController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::AddressField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{describe, UiEvent},
    orchestration::dispatch_backend_command,
};

const TABLE_HEADERS: [&str; 5] = ["Street", "City", "State", "Zip Code", "Actions"];

/// The address form and the table beneath it.
pub struct AddressBookApp {
    store: AddressStore,
    form: FormController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl AddressBookApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            store: AddressStore::new(),
            form: FormController::new(),
            cmd_tx,
            ui_rx,
            status: String::new(),
        }
    }

    fn submit(&mut self) {
        match self.form.submit_address(&mut self.store) {
            Ok(address) => {
                self.status = format!("Added {}", address.street);
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::ForwardAddress { address },
                    &mut self.status,
                );
            }
            Err(errors) => {
                self.status = format!("Fix {} field(s) and submit again", errors.len());
            }
        }
    }

    fn delete_row(&mut self, index: usize) {
        if let Some(removed) = self.store.remove_at(index) {
            self.status = format!("Deleted {}", removed.street);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.status = describe(&event);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let error_color = ui.visuals().error_fg_color;
        egui::Grid::new("address_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for field in AddressField::ALL {
                    ui.label(format!("{}:", field.label()));
                    ui.vertical(|ui| {
                        let mut value = self.form.draft().get(field).to_string();
                        let edit = egui::TextEdit::singleline(&mut value)
                            .id_salt(field.as_str())
                            .desired_width(280.0);
                        if ui.add(edit).changed() {
                            self.form.set_field(field, value);
                        }
                        let error = self.form.error_message(field);
                        if !error.is_empty() {
                            ui.colored_label(error_color, error);
                        }
                    });
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        if ui.button("Submit").clicked() {
            self.submit();
        }
    }

    fn show_table(&mut self, ui: &mut egui::Ui) {
        let mut delete = None;
        egui::Grid::new("address_table")
            .num_columns(TABLE_HEADERS.len())
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in TABLE_HEADERS {
                    ui.strong(header);
                }
                ui.end_row();

                // Rows are keyed by position; a delete shifts everything after it.
                for (index, address) in self.store.list().iter().enumerate() {
                    for field in AddressField::ALL {
                        ui.label(address.field(field));
                    }
                    if ui.button("Delete").clicked() {
                        delete = Some(index);
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = delete {
            self.delete_row(index);
        }
    }
}

impl eframe::App for AddressBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Address Book");
            ui.add_space(8.0);
            self.show_form(ui);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_table(ui);
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
