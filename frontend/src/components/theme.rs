//! Color palette

use egui::Color32;

/// Window and panel background
pub const BACKGROUND: Color32 = Color32::from_rgb(10, 22, 21);
/// Card background
pub const SURFACE: Color32 = Color32::from_rgb(17, 34, 33);
/// Toggle track, list rows
pub const SURFACE_ALT: Color32 = Color32::from_rgb(5, 73, 56);
pub const BORDER: Color32 = Color32::from_rgb(9, 69, 52);
/// Headings
pub const ACCENT: Color32 = Color32::from_rgb(0, 232, 207);
/// Overlay boxes, percentages
pub const HIGHLIGHT: Color32 = Color32::from_rgb(63, 235, 208);
pub const TEXT: Color32 = Color32::from_rgb(240, 242, 240);
/// Primary action
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
