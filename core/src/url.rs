//! Request URL construction.

use crate::types::FontIdentity;

/// The two request kinds the backend issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// POST for a bundle of glyphs.
    Glyphs,
    /// GET for the base font ("framework").
    Framework,
}

impl ActionKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ActionKind::Glyphs => "g",
            ActionKind::Framework => "t",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ActionKind::Glyphs => "glyphs",
            ActionKind::Framework => "framework",
        }
    }
}

/// `{base_url}/{prefix}/{path_segment}/{version}/{font_kit}.{suffix}`
pub fn build_url(base_url: &str, font: &FontIdentity, action: ActionKind) -> String {
    format!(
        "{base_url}/{}/{}/{}/{}.{}",
        action.prefix(),
        font.path_segment(),
        font.version,
        font.font_kit,
        action.suffix()
    )
}
