use egui::Context;
use roas_core::{BreakevenConfig, BreakevenMetrics, BreakevenWorksheet, Currency};
use tracing::{info, warn};

use crate::form::BreakevenForm;
use crate::screens::CalculatorScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state.
///
/// `metrics` is the whole result set of the last successful submission: it
/// is replaced as a unit and never updated field by field, so a failed
/// submission can never leave a half-stale display behind.
pub struct BreakevenApp {
    pub form: BreakevenForm,
    pub worksheet: BreakevenWorksheet,
    pub metrics: Option<BreakevenMetrics>,
    pub status_message: Option<(String, MessageType)>,
}

impl BreakevenApp {
    pub fn new(currency: Currency) -> Self {
        Self {
            form: BreakevenForm::new(currency),
            worksheet: BreakevenWorksheet::new(BreakevenConfig::default()),
            metrics: None,
            status_message: None,
        }
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Validates the form and, on success, recomputes all four metrics.
    ///
    /// A rejected submission leaves the previously displayed metrics
    /// untouched; only the field errors and the status message change.
    pub fn calculate(&mut self) {
        let Some(input) = self.form.validate(self.worksheet.config()) else {
            warn!(
                errors = self.form.errors.len(),
                "submission rejected by validation"
            );
            self.show_message("Please fix validation errors", MessageType::Error);
            return;
        };

        match self.worksheet.calculate(&input) {
            Ok(metrics) => {
                info!(
                    margin = %input.gross_margin_percent,
                    ad_spend = %input.expected_ad_spend,
                    fee = %input.service_fee,
                    "break-even metrics computed"
                );
                self.metrics = Some(metrics);
                self.show_message("Calculation complete", MessageType::Success);
            }
            Err(error) => {
                // Unreachable through the form, but hand-built worksheet
                // bounds can be invalid.
                warn!(%error, "worksheet rejected validated input");
                self.show_message(error.to_string(), MessageType::Error);
            }
        }
    }

    /// Resets the form and the displayed metrics, keeping the currency.
    pub fn clear(&mut self) {
        self.form = BreakevenForm::new(self.form.currency);
        self.metrics = None;
    }
}

impl eframe::App for BreakevenApp {
    fn update(
        &mut self,
        ctx: &Context,
        _frame: &mut eframe::Frame,
    ) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Calculation").clicked() {
                        self.clear();
                        self.clear_message();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // Single calculator screen
        egui::CentralPanel::default().show(ctx, |ui| CalculatorScreen::show(self, ui));
    }
}
