// FirmLens - ui/theme.rs
//
// Industry colour mapping and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for a given industry sector.
///
/// Unrecognised sectors (anything outside the fixed vocabulary) fall back
/// to a neutral gray rather than failing.
pub fn industry_colour(industry: &str) -> Color32 {
    match industry {
        "Software" => Color32::from_rgb(59, 130, 246),         // Blue 500
        "IT Services" => Color32::from_rgb(14, 165, 233),      // Sky 500
        "AI & ML" => Color32::from_rgb(168, 85, 247),          // Purple 500
        "Fintech" => Color32::from_rgb(34, 197, 94),           // Green 500
        "Healthcare" => Color32::from_rgb(239, 68, 68),        // Red 500
        "EdTech" => Color32::from_rgb(245, 158, 11),           // Amber 500
        "Renewable Energy" => Color32::from_rgb(16, 185, 129), // Emerald 500
        "Transportation" => Color32::from_rgb(249, 115, 22),   // Orange 500
        "Agritech" => Color32::from_rgb(132, 204, 22),         // Lime 500
        "Cybersecurity" => Color32::from_rgb(20, 184, 166),    // Teal 500
        _ => Color32::from_rgb(107, 114, 128),                 // Gray 500
    }
}

/// Layout constants.
pub const SEARCH_FIELD_WIDTH: f32 = 260.0;
pub const COMBO_WIDTH: f32 = 170.0;
pub const TABLE_ROW_HEIGHT: f32 = 24.0;
pub const INDUSTRY_DOT_RADIUS: f32 = 4.0;
