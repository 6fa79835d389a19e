//! Link classification
//!
//! Anchors are sorted into a small fixed set of [`Category`] buckets by
//! case-insensitive keyword matching against the anchor text and URL.

mod keywords;

pub use keywords::KeywordTable;

use serde::Serialize;

/// Topical bucket a link can be classified into
///
/// The declaration order is the report and JSON order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    News,
    PressRelease,
    AnnualReport,
}

impl Category {
    /// All categories in definition order
    pub const ALL: [Category; 3] = [
        Category::News,
        Category::PressRelease,
        Category::AnnualReport,
    ];

    /// Returns the snake_case key used in the JSON record
    pub fn key(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::PressRelease => "press_release",
            Self::AnnualReport => "annual_report",
        }
    }

    /// Returns the human-readable section title, e.g. "Press Release"
    pub fn title(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
