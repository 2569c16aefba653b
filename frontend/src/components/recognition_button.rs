//! Recognition Button Component

use super::Button;

/// Renders "Run Recognition" (or "Processing..." while a job runs).
/// Returns true when clicked.
pub fn render_recognition_button(ui: &mut egui::Ui, is_processing: bool, disabled: bool) -> bool {
    let label = if is_processing {
        "⏳ Processing..."
    } else {
        "▶ Run Recognition"
    };

    Button::primary(label)
        .large()
        .width(220.0)
        .enabled(!is_processing && !disabled)
        .disabled_hint(if is_processing {
            "Recognition is running"
        } else {
            "Upload an image first"
        })
        .show(ui)
        .clicked()
}
