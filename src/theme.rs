use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

const USER_THEME_APP_DIR: &str = "gridsnake";

/// A color set applied to every visual element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub grid_dot: Color,
    pub field_bg: Color,
    pub border: Color,
    pub hud_score: Color,
    pub overlay_title: Color,
    pub overlay_text: Color,
    pub overlay_footer: Color,
}

/// The classic palette: dark-green snake, orange food, black field.
#[must_use]
pub fn classic_theme() -> Theme {
    Theme {
        snake_head: Color::Rgb(0x01, 0x3f, 0x28),
        snake_body: Color::Rgb(0x01, 0x33, 0x30),
        food: Color::Rgb(0xff, 0x8c, 0x00),
        grid_dot: Color::DarkGray,
        field_bg: Color::Black,
        border: Color::Gray,
        hud_score: Color::White,
        overlay_title: Color::White,
        overlay_text: Color::Gray,
        overlay_footer: Color::DarkGray,
    }
}

fn ocean_theme() -> Theme {
    Theme {
        snake_head: Color::White,
        snake_body: Color::Cyan,
        food: Color::Yellow,
        grid_dot: Color::DarkGray,
        field_bg: Color::Black,
        border: Color::Cyan,
        hud_score: Color::Cyan,
        overlay_title: Color::Cyan,
        overlay_text: Color::Gray,
        overlay_footer: Color::DarkGray,
    }
}

fn neon_theme() -> Theme {
    Theme {
        snake_head: Color::White,
        snake_body: Color::Magenta,
        food: Color::Yellow,
        grid_dot: Color::DarkGray,
        field_bg: Color::Black,
        border: Color::Magenta,
        hud_score: Color::Magenta,
        overlay_title: Color::Magenta,
        overlay_text: Color::Gray,
        overlay_footer: Color::DarkGray,
    }
}

/// One selectable theme.
#[derive(Debug, Clone)]
pub struct ThemeItem {
    pub id: String,
    pub theme: Theme,
}

/// Built-in themes plus user themes overlaid from the config directory.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    items: Vec<ThemeItem>,
}

impl ThemeCatalog {
    /// Loads built-in themes, then overlays `*.json` files from
    /// `<config dir>/gridsnake/themes/`. A user theme with a built-in id
    /// replaces it; invalid files are warned about and skipped.
    #[must_use]
    pub fn load() -> Self {
        let mut catalog = Self::builtin();

        if let Some(dir) = user_theme_dir() {
            catalog.merge_dir(&dir);
        }

        catalog
    }

    /// Returns only the built-in themes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: vec![
                ThemeItem {
                    id: "classic".to_owned(),
                    theme: classic_theme(),
                },
                ThemeItem {
                    id: "ocean".to_owned(),
                    theme: ocean_theme(),
                },
                ThemeItem {
                    id: "neon".to_owned(),
                    theme: neon_theme(),
                },
            ],
        }
    }

    /// Returns the theme with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| &item.theme)
    }

    /// Returns the default theme.
    #[must_use]
    pub fn default_theme(&self) -> Theme {
        self.get("classic").copied().unwrap_or_else(classic_theme)
    }

    /// Iterates over the available theme ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    fn insert(&mut self, id: String, theme: Theme) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.theme = theme;
        } else {
            self.items.push(ThemeItem { id, theme });
        }
    }

    fn merge_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| is_json_file(path))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in paths {
            let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_owned)
            else {
                continue;
            };

            match load_theme_file(&path) {
                Ok(theme) => self.insert(id, theme),
                Err(error) => {
                    eprintln!("Warning: skipping theme file {}: {error}", path.display());
                }
            }
        }
    }
}

/// Failed to read or parse a user theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color value {value:?} for {key:?}")]
    UnknownColor { key: String, value: String },
}

/// On-disk user theme: a flat map of element name to color string.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    theme: HashMap<String, String>,
}

fn load_theme_file(path: &Path) -> Result<Theme, ThemeError> {
    parse_theme(&fs::read_to_string(path)?)
}

/// Parses a user theme. Colors are `#rrggbb` hex or named ANSI colors;
/// elements not named in the file keep their classic-theme value.
pub fn parse_theme(raw: &str) -> Result<Theme, ThemeError> {
    let file = serde_json::from_str::<ThemeFile>(raw)?;
    let mut theme = classic_theme();

    for (key, value) in &file.theme {
        let Some(color) = parse_color(value) else {
            return Err(ThemeError::UnknownColor {
                key: key.clone(),
                value: value.clone(),
            });
        };

        match key.as_str() {
            "snake_head" => theme.snake_head = color,
            "snake_body" => theme.snake_body = color,
            "food" => theme.food = color,
            "grid_dot" => theme.grid_dot = color,
            "field_bg" => theme.field_bg = color,
            "border" => theme.border = color,
            "hud_score" => theme.hud_score = color,
            "overlay_title" => theme.overlay_title = color,
            "overlay_text" => theme.overlay_text = color,
            "overlay_footer" => theme.overlay_footer = color,
            // Unknown keys are tolerated so themes stay forward-compatible.
            _ => {}
        }
    }

    Ok(theme)
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "none" | "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_THEME_APP_DIR).join("themes"))
}
