use ratatui::style::Color;

use crate::tasks::Priority;

pub const ACCENT_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const ACCENT_PURPLE: Color = Color::Rgb(0x93, 0x33, 0xea);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const PRIORITY_HIGH: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PRIORITY_MEDIUM: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const PRIORITY_LOW: Color = Color::Rgb(0x22, 0xc5, 0x5e);

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
    }
}
