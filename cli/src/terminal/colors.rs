use colored::Color;

pub const PRIMARY: Color = Color::BrightBlue;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::BrightCyan;

pub const SAFE: Color = Color::BrightGreen;
pub const CAUTION: Color = Color::BrightYellow;
pub const DANGER: Color = Color::BrightRed;
