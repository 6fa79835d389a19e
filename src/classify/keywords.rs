use crate::classify::Category;

/// Built-in trigger keywords per category, in report order
///
/// The Devanagari entries are Hindi for "news", "notice" and "annual".
const BUILTIN_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::News,
        &["news", "media", "announcement", "notice", "समाचार", "सूचना"],
    ),
    (Category::PressRelease, &["press", "press-release"]),
    (Category::AnnualReport, &["annual", "annual-report", "वार्षिक"]),
];

/// Read-only mapping from category to its trigger keywords
///
/// Built once at startup and shared by reference with the crawl pass.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Returns the built-in keyword table
    pub fn builtin() -> Self {
        let entries = BUILTIN_KEYWORDS
            .iter()
            .map(|(category, words)| {
                (
                    *category,
                    words.iter().map(|word| word.to_lowercase()).collect(),
                )
            })
            .collect();

        Self { entries }
    }

    /// Categories in table order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    /// Keywords registered for a category
    pub fn keywords(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Classifies an anchor by its visible text and URL
    ///
    /// Both inputs are lowercased; a category matches when any of its
    /// keywords is a substring of either. Matching is non-exclusive, so the
    /// result may hold several categories, in table order.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_sieve::{Category, KeywordTable};
    ///
    /// let table = KeywordTable::builtin();
    /// let matched = table.categorize("Media & Press", "https://acme.org/about");
    /// assert_eq!(matched, vec![Category::News, Category::PressRelease]);
    /// ```
    pub fn categorize(&self, text: &str, url: &str) -> Vec<Category> {
        let text = text.to_lowercase();
        let url = url.to_lowercase();

        self.entries
            .iter()
            .filter(|(_, words)| {
                words
                    .iter()
                    .any(|word| text.contains(word.as_str()) || url.contains(word.as_str()))
            })
            .map(|(category, _)| *category)
            .collect()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}
