//! Font identity supplied by the caller for every request.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Identifies which font file, version and kit a request targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontIdentity {
    /// Directory of the font on the server, e.g. `notosansjapanese`.
    /// Preferred over `family_name` when present and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_path: Option<String>,
    pub family_name: String,
    pub version: String,
    pub font_kit: String,
}

impl FontIdentity {
    /// The URL segment naming the font family.
    ///
    /// `family_path` is used verbatim; otherwise `family_name` with spaces
    /// removed and lower-cased.
    pub fn path_segment(&self) -> Cow<'_, str> {
        match self.family_path.as_deref() {
            Some(path) if !path.is_empty() => Cow::Borrowed(path),
            _ => Cow::Owned(self.family_name.replace(' ', "").to_lowercase()),
        }
    }
}
