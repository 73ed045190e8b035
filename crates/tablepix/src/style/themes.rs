//! The built-in theme table.
//!
//! Five named themes: `light` (the default), `dark`, `minimal` (borderless),
//! and the `blue` / `green` accent themes. The set is fixed; lookups outside
//! it fail with [`Error::UnknownTheme`](crate::Error::UnknownTheme).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::TableStyle;

fn pair(a: &str, b: &str) -> [String; 2] {
    [a.to_string(), b.to_string()]
}

static THEMES: Lazy<HashMap<&'static str, TableStyle>> = Lazy::new(|| {
    let light = TableStyle::default();

    let dark = TableStyle {
        header_bg_color: "#343a40".to_string(),
        header_text_color: "#f8f9fa".to_string(),
        row_bg_colors: pair("#212529", "#2c3034"),
        row_text_color: "#e9ecef".to_string(),
        border_color: "#495057".to_string(),
        ..light.clone()
    };

    let minimal = TableStyle {
        header_bg_color: "#ffffff".to_string(),
        row_bg_colors: pair("#ffffff", "#ffffff"),
        border_color: "transparent".to_string(),
        border_radius: "0".to_string(),
        shadow: "none".to_string(),
        ..light.clone()
    };

    let blue = TableStyle {
        header_bg_color: "#0d6efd".to_string(),
        header_text_color: "#ffffff".to_string(),
        row_bg_colors: pair("#ffffff", "#e7f1ff"),
        border_color: "#b6d4fe".to_string(),
        ..light.clone()
    };

    let green = TableStyle {
        header_bg_color: "#198754".to_string(),
        header_text_color: "#ffffff".to_string(),
        row_bg_colors: pair("#ffffff", "#e8f5e9"),
        border_color: "#a3cfbb".to_string(),
        ..light.clone()
    };

    let mut themes = HashMap::new();
    themes.insert("light", light);
    themes.insert("dark", dark);
    themes.insert("minimal", minimal);
    themes.insert("blue", blue);
    themes.insert("green", green);
    themes
});

/// Looks up a built-in theme by name.
pub fn theme(name: &str) -> Option<TableStyle> {
    THEMES.get(name).cloned()
}

/// The names of all built-in themes, sorted.
pub fn theme_names() -> Vec<&'static str> {
    let mut names: Vec<_> = THEMES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_set_is_closed() {
        assert_eq!(theme_names(), ["blue", "dark", "green", "light", "minimal"]);
        assert!(theme("neon").is_none());
    }

    #[test]
    fn test_light_is_the_default_style() {
        assert_eq!(theme("light").unwrap(), TableStyle::default());
    }

    #[test]
    fn test_dark_theme_colors() {
        let dark = theme("dark").unwrap();
        assert_eq!(dark.header_bg_color, "#343a40");
        assert_ne!(dark.row_bg_colors[0], dark.row_bg_colors[1]);
    }

    #[test]
    fn test_minimal_theme_is_borderless() {
        let minimal = theme("minimal").unwrap();
        assert_eq!(minimal.border_color, "transparent");
        assert_eq!(minimal.shadow, "none");
        assert_eq!(minimal.border_radius, "0");
    }

    #[test]
    fn test_accent_themes_share_striping_base() {
        for name in ["blue", "green"] {
            let accent = theme(name).unwrap();
            assert_eq!(accent.row_bg_colors[0], "#ffffff");
            assert_eq!(accent.header_text_color, "#ffffff");
        }
    }

    #[test]
    fn test_no_theme_defaults_grouping_on() {
        for name in theme_names() {
            assert!(!theme(name).unwrap().thousand_separator);
        }
    }
}
