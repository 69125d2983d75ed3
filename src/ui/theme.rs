//! Theme constants for the Hex GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const CELL_FILL: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const CELL_OUTLINE: Color32 = Color32::from_rgb(60, 40, 20);

// Stone colors
pub const BLUE_STONE: Color32 = Color32::from_rgb(45, 105, 210);
pub const BLUE_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(110, 160, 240);
pub const RED_STONE: Color32 = Color32::from_rgb(205, 50, 50);
pub const RED_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(240, 120, 120);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn stone_preview(stone: crate::Stone) -> Color32 {
    match stone {
        crate::Stone::Blue => Color32::from_rgba_unmultiplied(45, 105, 210, 110),
        crate::Stone::Red => Color32::from_rgba_unmultiplied(205, 50, 50, 110),
        crate::Stone::Empty => Color32::TRANSPARENT,
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.62;
pub const CELL_OUTLINE_WIDTH: f32 = 1.0;
pub const GOAL_EDGE_WIDTH: f32 = 5.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
