use egui::Ui;
use roas_core::{Currency, FormField};

use crate::app::BreakevenApp;
use crate::form::BreakevenForm;
use crate::widgets;

pub struct CalculatorScreen;

impl CalculatorScreen {
    /// Consistent group width for the form and results sections
    const GROUP_WIDTH: f32 = 480.0;
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 180.0;
    /// Numeric input field width
    const INPUT_WIDTH: f32 = 120.0;

    pub fn show(
        app: &mut BreakevenApp,
        ui: &mut Ui,
    ) {
        ui.heading("Break-even ROAS Calculator");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);
            let symbol = app.form.currency.symbol();

            // Campaign Plan Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Campaign Plan");
                    ui.add_space(5.0);

                    egui::Grid::new("campaign_grid")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            // Currency dropdown (display glyph only, never
                            // part of the computation)
                            Self::grid_label(ui, "Currency:");
                            egui::ComboBox::from_id_salt("currency")
                                .width(180.0)
                                .selected_text(app.form.currency.label())
                                .show_ui(ui, |ui| {
                                    for currency in Currency::all() {
                                        ui.selectable_value(
                                            &mut app.form.currency,
                                            *currency,
                                            currency.label(),
                                        );
                                    }
                                });
                            ui.end_row();

                            Self::grid_label(ui, "Gross margin:");
                            widgets::unit_field(
                                ui,
                                "%",
                                &mut app.form.gross_margin_percent,
                                Self::INPUT_WIDTH,
                            );
                            ui.end_row();
                            Self::grid_error_rows(ui, &app.form, FormField::GrossMarginPercent);

                            Self::grid_label(ui, "Expected ad spend:");
                            widgets::unit_field(
                                ui,
                                symbol,
                                &mut app.form.expected_ad_spend,
                                Self::INPUT_WIDTH,
                            );
                            ui.end_row();
                            Self::grid_error_rows(ui, &app.form, FormField::ExpectedAdSpend);

                            Self::grid_label(ui, "Service fee:");
                            widgets::unit_field(
                                ui,
                                symbol,
                                &mut app.form.service_fee,
                                Self::INPUT_WIDTH,
                            );
                            ui.end_row();
                            Self::grid_error_rows(ui, &app.form, FormField::ServiceFee);
                        });
                });
            });

            ui.add_space(20.0);

            // Action Buttons
            ui.horizontal(|ui| {
                if ui.button("Calculate").clicked() {
                    app.calculate();
                }

                if ui.button("Clear Form").clicked() {
                    app.clear();
                    app.clear_message();
                }
            });

            // Results Section
            if let Some(metrics) = &app.metrics {
                ui.add_space(20.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.heading("Break-even Results");
                        ui.add_space(5.0);

                        egui::Grid::new("results_grid")
                            .num_columns(2)
                            .spacing([40.0, 8.0])
                            .show(ui, |ui| {
                                ui.label("Revenue (ad spend + fee):");
                                ui.strong(format!(
                                    "{symbol}{}",
                                    metrics.breakeven_revenue_with_fee
                                ));
                                ui.end_row();

                                ui.label("Revenue (ad spend only):");
                                ui.strong(format!(
                                    "{symbol}{}",
                                    metrics.breakeven_revenue_no_fee
                                ));
                                ui.end_row();

                                ui.label("ROAS (ad spend + fee):");
                                ui.strong(metrics.breakeven_roas_with_fee.to_string());
                                ui.end_row();

                                ui.label("ROAS (ad spend only):");
                                ui.strong(metrics.breakeven_roas_no_fee.to_string());
                                ui.end_row();
                            });
                    });
                });
            }

            ui.add_space(20.0);
        });
    }

    /// Right-aligned label cell with a fixed width for alignment
    fn grid_label(
        ui: &mut Ui,
        label: &str,
    ) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.set_min_width(Self::LABEL_WIDTH);
            ui.label(egui::RichText::new(label).strong());
        });
    }

    /// Inline error lines directly under the offending field's row
    fn grid_error_rows(
        ui: &mut Ui,
        form: &BreakevenForm,
        field: FormField,
    ) {
        for error in form.errors_for(field) {
            ui.label("");
            ui.colored_label(egui::Color32::RED, error.message.as_str());
            ui.end_row();
        }
    }
}
