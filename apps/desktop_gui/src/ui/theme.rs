//! Pokédex palette and type sizes.

use eframe::egui::Color32;

pub const WINDOW_BACKGROUND: Color32 = Color32::BLACK;
pub const PANEL_BACKGROUND: Color32 = Color32::BLACK;
pub const ACCENT_RED: Color32 = Color32::from_rgb(0xCC, 0x00, 0x00);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(0xFF, 0xCB, 0x05);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x3B, 0x4C, 0xCA);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0xB3, 0xA1, 0x25);

pub const HEADING_SIZE: f32 = 18.0;
pub const ENTRY_SIZE: f32 = 16.0;
pub const BUTTON_SIZE: f32 = 15.0;
pub const RESULT_SIZE: f32 = 16.0;

pub const PANEL_BORDER: f32 = 3.0;
pub const ENTRY_BORDER: f32 = 2.0;
pub const PANEL_MARGIN: i8 = 40;

pub fn search_button_fill(hovered: bool) -> Color32 {
    if hovered {
        BUTTON_HOVER
    } else {
        ACCENT_BLUE
    }
}
