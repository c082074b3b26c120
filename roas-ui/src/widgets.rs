use egui::{Response, Ui};

/// A text input preceded by a unit glyph (currency symbol or `%`).
pub fn unit_field(
    ui: &mut Ui,
    unit: &str,
    value: &mut String,
    width: f32,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(unit);
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(width)
                .hint_text("0"),
        )
    })
    .inner
}
