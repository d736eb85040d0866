//! Font selection with a guaranteed fallback.
//!
//! Which Japanese font exists depends on the machine. Probing the file
//! system is the caller's job; this module only decides, given a probe,
//! which candidate wins.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

/// Name a found font file is registered under with the backend.
pub const EMBEDDED_FONT_NAME: &str = "Japanese";

/// Built-in font used when no candidate exists. Latin glyphs only.
pub const FALLBACK_FONT_NAME: &str = "Helvetica";

/// Japanese font files tried in order on a shop PC.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/msgothic.ttc",
    "C:/Windows/Fonts/msmincho.ttc",
    "C:/Windows/Fonts/meiryo.ttc",
    "C:/Windows/Fonts/YuGothM.ttc",
];

/// The font a layout should be rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FontChoice {
    /// Identifier the rendering backend knows the font by.
    pub name: String,
    /// File to embed, `None` for a backend built-in font.
    #[ts(as = "Option<String>")]
    pub path: Option<PathBuf>,
}

impl FontChoice {
    pub fn embedded(path: impl Into<PathBuf>) -> Self {
        FontChoice {
            name: EMBEDDED_FONT_NAME.to_string(),
            path: Some(path.into()),
        }
    }

    pub fn fallback() -> Self {
        FontChoice {
            name: FALLBACK_FONT_NAME.to_string(),
            path: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.path.is_none()
    }
}

impl Default for FontChoice {
    fn default() -> Self {
        FontChoice::fallback()
    }
}

/// Returns the first candidate for which `exists` is true, or the fallback.
///
/// Never fails: missing fonts only change glyph shapes, not the layout.
///
/// ## Example
/// ```rust
/// use genka_core::label::font::{resolve_font, FALLBACK_FONT_NAME};
///
/// let candidates = ["/fonts/a.ttc", "/fonts/b.ttc"];
/// let chosen = resolve_font(&candidates[..], |p| p.ends_with("b.ttc"));
/// assert_eq!(chosen.path.as_deref(), Some(std::path::Path::new("/fonts/b.ttc")));
///
/// let none = resolve_font(&candidates[..], |_| false);
/// assert_eq!(none.name, FALLBACK_FONT_NAME);
/// ```
pub fn resolve_font<P, F>(candidates: &[P], exists: F) -> FontChoice
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    for candidate in candidates {
        let path = candidate.as_ref();
        if exists(path) {
            debug!(font = %path.display(), "using embedded font");
            return FontChoice::embedded(path);
        }
    }

    warn!(
        tried = candidates.len(),
        fallback = FALLBACK_FONT_NAME,
        "no Japanese font found, falling back"
    );
    FontChoice::fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_existing_candidate_wins() {
        let chosen = resolve_font(DEFAULT_FONT_CANDIDATES, |p| {
            p.ends_with("meiryo.ttc") || p.ends_with("YuGothM.ttc")
        });
        assert_eq!(chosen.name, EMBEDDED_FONT_NAME);
        assert_eq!(
            chosen.path,
            Some(PathBuf::from("C:/Windows/Fonts/meiryo.ttc"))
        );
        assert!(!chosen.is_fallback());
    }

    #[test]
    fn test_fallback_when_nothing_exists() {
        let chosen = resolve_font(DEFAULT_FONT_CANDIDATES, |_| false);
        assert_eq!(chosen, FontChoice::fallback());
        assert!(chosen.is_fallback());
    }

    #[test]
    fn test_empty_candidate_list_falls_back() {
        let none: [&str; 0] = [];
        assert_eq!(resolve_font(&none[..], |_| true), FontChoice::default());
    }
}
