//! Language tag value objects

use std::fmt;

/// A BCP-47-style language tag such as `uz-UZ` or `en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangTag(String);

impl LangTag {
    /// Create a language tag from a string
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Full tag as passed to recognition engines (e.g. `uz-UZ`)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary subtag as passed to translation/synthesis engines (e.g. `uz`)
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Short uppercase label used in captions and status texts (e.g. `UZ`)
    pub fn label(&self) -> String {
        self.primary().to_uppercase()
    }
}

impl fmt::Display for LangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source/target language pair for one relay deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: LangTag,
    pub target: LangTag,
}

impl LanguagePair {
    pub fn new(source: LangTag, target: LangTag) -> Self {
        Self { source, target }
    }

    /// Bilingual caption sent with the final audio reply.
    pub fn caption(&self, transcript: &str, translation: &str) -> String {
        format!(
            "{}: {}\n{}: {}",
            self.source.label(),
            transcript,
            self.target.label(),
            translation
        )
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: LangTag::new("uz-UZ"),
            target: LangTag::new("en"),
        }
    }
}
