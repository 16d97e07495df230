//! The site's own style declaration
//!
//! Hugo content and layouts are scanned, dark mode follows a `dark` class on
//! the root element, and prose gets separate light (`DEFAULT`) and dark
//! (`invert`) rules.

use crate::error::StyleResult;
use crate::provider::StyleDeclaration;
use crate::theme::{ThemeLookup, ThemeValue};
use serde_json::json;

const CODE_FONT: &str = "Monaco, 'Courier New', monospace";

pub const CONTENT_PATTERNS: &[&str] = &[
    "content/**/*.md",
    "layouts/**/*.html",
    "./themes/**/layouts/**/*.html",
    "./content/**/layouts/**/*.html",
    "./layouts/**/*.html",
    "./content/**/*.html",
];

/// Pagination markup is rendered by Hugo's internal template and never
/// appears in scanned files.
pub const SAFELIST: &[&str] = &["pagination", "page-item"];

pub const TYPOGRAPHY_PLUGIN: &str = "@tailwindcss/typography";

/// Build the site declaration
pub fn declaration() -> StyleDeclaration {
    StyleDeclaration::new()
        .important(true)
        .content(CONTENT_PATTERNS.iter().copied())
        .safelist(SAFELIST.iter().copied())
        .dark_mode("class")
        .extend(
            "colors",
            ThemeValue::map([("skillLight", "#272343"), ("skillDark", "#739EC9")]),
        )
        .extend_with("backgroundColor", background_colors)
        .extend_with("typography", typography)
        .variants("typography", ["invert"])
        .plugin(TYPOGRAPHY_PLUGIN)
}

fn background_colors(theme: &ThemeLookup<'_>) -> StyleResult<ThemeValue> {
    Ok(ThemeValue::map([
        ("darkest", theme.get("colors.stone.900")?),
        ("darker", theme.get("colors.stone.800")?),
        ("dark", theme.get("colors.stone.700")?),
    ]))
}

fn typography(theme: &ThemeLookup<'_>) -> StyleResult<ThemeValue> {
    ThemeValue::try_from(json!({
        "DEFAULT": { "css": light_prose() },
        "invert": { "css": dark_prose(theme)? },
    }))
}

/// Link styling shared by both modes, differing only in color
fn link(color: &str) -> serde_json::Value {
    json!({
        "color": color,
        "textDecoration": "underline",
        "textDecorationThickness": "1px",
        "textUnderlineOffset": "0.2em",
        "fontWeight": "600",
        "letterSpacing": ".025em",
    })
}

fn pre_block(background: &str, color: &str, border: &str) -> serde_json::Value {
    json!({
        "backgroundColor": background,
        "color": color,
        "border": format!("1px solid {}", border),
        "borderRadius": "0.5rem",
        "padding": "1.25rem",
        "overflowX": "auto",
        "fontFamily": CODE_FONT,
        "fontSize": "0.875rem",
        "lineHeight": "1.5",
    })
}

fn inline_code(color: &str, background: &str) -> serde_json::Value {
    json!({
        "color": color,
        "backgroundColor": background,
        "padding": "0.125rem 0.25rem",
        "borderRadius": "0.25rem",
        "fontFamily": CODE_FONT,
    })
}

fn light_prose() -> serde_json::Value {
    let mut a = link("#123458");
    a["&:hover"] = json!({ "color": "#1A3B5E", "textDecoration": "underline" });

    json!({
        "code::before": false,
        "code::after": false,
        "a": a,
        "pre": pre_block("#f8f8f8", "#000000", "#d4d4d4"),
        "code": inline_code("#000000", "#f1f1f1"),
    })
}

fn dark_prose(theme: &ThemeLookup<'_>) -> StyleResult<serde_json::Value> {
    let body = theme.get("colors.gray.200")?;
    let mut a = link("#739EC9");
    a["&:hover"] = json!({ "color": "#5A94C9" });

    let mut css = json!({
        "color": body,
        "a": a,
        "pre": pre_block("#1e1e1e", "#d4d4d4", "#454545"),
        "code": inline_code("#d4d4d4", "#2d2d30"),
    });
    for element in ["h1", "h2", "h3", "h4", "h5", "h6", "strong", "td", "blockquote"] {
        css[element] = json!({ "color": body });
    }
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DarkModeStrategy;
    use crate::provider::StyleConfigProvider;

    #[test]
    fn test_site_declaration_resolves() {
        let config = declaration().resolve().unwrap();
        assert!(config.important);
        assert_eq!(config.dark_mode, DarkModeStrategy::Class);
        assert_eq!(config.content_paths.len(), CONTENT_PATTERNS.len());
        assert_eq!(config.plugins.len(), 1);
    }

    #[test]
    fn test_background_colors_from_stone() {
        let config = declaration().resolve().unwrap();
        assert_eq!(
            config.token("backgroundColor.darkest").unwrap(),
            ThemeValue::from("#1c1917")
        );
        assert_eq!(
            config.token("backgroundColor.darker").unwrap(),
            ThemeValue::from("#292524")
        );
        assert_eq!(
            config.token("backgroundColor.dark").unwrap(),
            ThemeValue::from("#44403c")
        );
    }

    #[test]
    fn test_invert_headings_use_gray_200() {
        let config = declaration().resolve().unwrap();
        for element in ["h1", "h6", "strong", "td", "blockquote"] {
            let path = format!("typography.invert.css.{}.color", element);
            assert_eq!(config.token(&path).unwrap(), ThemeValue::from("#e5e7eb"));
        }
        assert_eq!(
            config.token("typography.invert.css.color").unwrap(),
            ThemeValue::from("#e5e7eb")
        );
    }

    #[test]
    fn test_code_blocks_per_mode() {
        let config = declaration().resolve().unwrap();
        assert_eq!(
            config.token("typography.DEFAULT.css.code.color").unwrap(),
            ThemeValue::from("#000000")
        );
        assert_eq!(
            config.token("typography.invert.css.code.color").unwrap(),
            ThemeValue::from("#d4d4d4")
        );
        assert_eq!(
            config.token("typography.DEFAULT.css.code::before").unwrap(),
            ThemeValue::Bool(false)
        );
        assert_eq!(
            config.token("typography.DEFAULT.css.pre.border").unwrap(),
            ThemeValue::from("1px solid #d4d4d4")
        );
    }

    #[test]
    fn test_hover_rules() {
        let config = declaration().resolve().unwrap();
        assert_eq!(
            config.token("typography.DEFAULT.css.a.&:hover.color").unwrap(),
            ThemeValue::from("#1A3B5E")
        );
        let dark_hover = config.token("typography.invert.css.a.&:hover").unwrap();
        assert_eq!(dark_hover.as_map().map(|m| m.len()), Some(1));
    }
}
