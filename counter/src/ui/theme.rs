use ratatui::style::Color;

pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADING: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const COUNT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const LOADING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HINT: Color = Color::Rgb(0x6b, 0x72, 0x80);
