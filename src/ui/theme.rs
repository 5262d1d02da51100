//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 80, 180);
pub const BOARD_SHADOW: Color32 = Color32::from_rgb(20, 55, 130);
pub const HOLE: Color32 = Color32::from_rgb(40, 42, 46);

// Disc colors
pub const RED_DISC: Color32 = Color32::from_rgb(220, 45, 45);
pub const RED_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(250, 110, 100);
pub const YELLOW_DISC: Color32 = Color32::from_rgb(245, 200, 40);
pub const YELLOW_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(255, 235, 130);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn ghost(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const DISC_RADIUS_RATIO: f32 = 0.4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
