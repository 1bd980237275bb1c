//! Colours for the shell chrome, degraded to what the terminal can show.

use ratatui::style::Color;

use crate::models::Rgb;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub support: TerminalColorSupport,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub row_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub input_bg: Color,
    pub input_fg: Color,
    pub input_selection_bg: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub splitter: Color,
    pub splitter_active: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Some(support) = std::env::var("IDE_SHELL_COLOR_SUPPORT")
        .ok()
        .as_deref()
        .and_then(parse_color_support)
    {
        return support;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            support: TerminalColorSupport::TrueColor,
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            header_fg: Color::Indexed(6),
            muted_fg: Color::Indexed(8),
            row_fg: Color::Indexed(15),
            selected_bg: Color::Rgb(0x04, 0x39, 0x5e),
            selected_fg: Color::Indexed(15),
            input_bg: Color::Rgb(0x3c, 0x3c, 0x3c),
            input_fg: Color::Indexed(15),
            input_selection_bg: Color::Rgb(0x26, 0x4f, 0x78),
            menu_bg: Color::Rgb(0x25, 0x25, 0x26),
            menu_fg: Color::Indexed(15),
            menu_selected_bg: Color::Rgb(0x04, 0x39, 0x5e),
            menu_selected_fg: Color::Indexed(15),
            splitter: Color::Indexed(8),
            splitter_active: Color::Indexed(6),
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        self.support = support;
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.header_fg,
            &mut self.muted_fg,
            &mut self.row_fg,
            &mut self.selected_bg,
            &mut self.selected_fg,
            &mut self.input_bg,
            &mut self.input_fg,
            &mut self.input_selection_bg,
            &mut self.menu_bg,
            &mut self.menu_fg,
            &mut self.menu_selected_bg,
            &mut self.menu_selected_fg,
            &mut self.splitter,
            &mut self.splitter_active,
        ] {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Icon colour for the current terminal.
    pub fn icon_color(&self, rgb: Rgb) -> Color {
        let Rgb(r, g, b) = rgb;
        map_color_for_support(Color::Rgb(r, g, b), self.support)
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(0..=255, (r, g, b)))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(0..=15, (r, g, b)))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            Color::Indexed(nearest_index(0..=15, ansi256_index_to_rgb(i)))
        }
        (_, value) => value,
    }
}

fn nearest_index(candidates: std::ops::RangeInclusive<u8>, rgb: (u8, u8, u8)) -> u8 {
    candidates
        .min_by_key(|&index| color_distance_sq(rgb, ansi256_index_to_rgb(index)))
        .unwrap_or(0)
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
