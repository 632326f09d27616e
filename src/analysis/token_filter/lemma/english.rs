//! Rule-based English lemmatizer.
//!
//! Reduces English words to a base form with an irregular-form table and a
//! small set of ordered suffix rules covering plurals, -ing/-ed inflections,
//! and -est superlatives. The rules are applied without part-of-speech
//! information and without a dictionary, so the result is a deterministic
//! heuristic lemma rather than a guaranteed dictionary entry. Words that
//! match no rule are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use verdict::analysis::token_filter::lemma::Lemmatizer;
//! use verdict::analysis::token_filter::lemma::english::EnglishLemmatizer;
//!
//! let lemmatizer = EnglishLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemma("running"), "run");
//! assert_eq!(lemmatizer.lemma("movies"), "movie");
//! assert_eq!(lemmatizer.lemma("children"), "child");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::token_filter::lemma::Lemmatizer;

/// Irregular forms that no suffix rule can recover.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("ladies", "lady"),
    ("babies", "baby"),
    ("stories", "story"),
    ("studies", "study"),
    ("bodies", "body"),
    ("families", "family"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gotten", "get"),
    ("came", "come"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("said", "say"),
    ("told", "tell"),
    ("wrote", "write"),
    ("written", "write"),
    ("felt", "feel"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

static IRREGULAR_FORMS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

/// Rule-based English lemmatizer.
#[derive(Debug, Clone, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Undo consonant doubling after stripping -ing/-ed ("stopp" -> "stop").
    /// Doubled l, s, and z stay ("fall", "kiss", "buzz").
    fn undouble(stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 4
            && chars[n - 1] == chars[n - 2]
            && !Self::is_vowel(chars[n - 1])
            && !matches!(chars[n - 1], 'l' | 's' | 'z')
        {
            return chars[..n - 1].iter().collect();
        }
        stem.to_string()
    }

    fn strip_plural(word: &str) -> Option<String> {
        if let Some(stem) = word.strip_suffix("sses") {
            return Some(format!("{stem}ss"));
        }
        if word.len() > 3
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
            && let Some(stem) = word.strip_suffix('s')
        {
            return Some(stem.to_string());
        }
        None
    }

    /// Restore a dropped final 'e' after -ing/-ed stripping when the stem
    /// ends consonant-vowel-consonant ("rat" -> "rate", "amaz" -> "amaze").
    /// Final w, x, and y never take the 'e' ("snow", "box").
    fn restore_e(stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 3
            && !Self::is_vowel(chars[n - 3])
            && Self::is_vowel(chars[n - 2])
            && !Self::is_vowel(chars[n - 1])
            && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        {
            return format!("{stem}e");
        }
        stem.to_string()
    }

    fn strip_verb_suffix(stem: &str) -> String {
        let undoubled = Self::undouble(stem);
        if undoubled.len() < stem.len() {
            undoubled
        } else {
            Self::restore_e(stem)
        }
    }

    fn strip_inflection(word: &str) -> Option<String> {
        if word.len() >= 6 && let Some(stem) = word.strip_suffix("ing") {
            return Some(Self::strip_verb_suffix(stem));
        }
        if word.len() >= 5 && let Some(stem) = word.strip_suffix("ed") {
            return Some(Self::strip_verb_suffix(stem));
        }
        if word.len() >= 6 && let Some(stem) = word.strip_suffix("est") {
            return Some(stem.to_string());
        }
        None
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemma(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_FORMS_MAP.get(word) {
            return (*lemma).to_string();
        }

        let stem = Self::strip_plural(word).or_else(|| Self::strip_inflection(word));
        match stem {
            // A rule must leave a usable stem behind, otherwise keep the word.
            Some(s) if s.chars().count() >= 3 => s,
            _ => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_rules() {
        let lemmatizer = EnglishLemmatizer::new();
        assert_eq!(lemmatizer.lemma("films"), "film");
        assert_eq!(lemmatizer.lemma("movies"), "movie");
        assert_eq!(lemmatizer.lemma("actors"), "actor");
        assert_eq!(lemmatizer.lemma("classes"), "class");
        // -ss and -us endings are not plurals
        assert_eq!(lemmatizer.lemma("boss"), "boss");
        assert_eq!(lemmatizer.lemma("bonus"), "bonus");
    }

    #[test]
    fn test_inflection_rules() {
        let lemmatizer = EnglishLemmatizer::new();
        assert_eq!(lemmatizer.lemma("running"), "run");
        assert_eq!(lemmatizer.lemma("stopped"), "stop");
        assert_eq!(lemmatizer.lemma("falling"), "fall");
        assert_eq!(lemmatizer.lemma("kissing"), "kiss");
        assert_eq!(lemmatizer.lemma("greatest"), "great");
        assert_eq!(lemmatizer.lemma("acting"), "act");
    }

    #[test]
    fn test_final_e_restoration() {
        let lemmatizer = EnglishLemmatizer::new();
        assert_eq!(lemmatizer.lemma("rated"), "rate");
        assert_eq!(lemmatizer.lemma("loved"), "love");
        assert_eq!(lemmatizer.lemma("making"), "make");
        assert_eq!(lemmatizer.lemma("amazing"), "amaze");
        // Final w never takes the restored 'e'
        assert_eq!(lemmatizer.lemma("snowed"), "snow");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = EnglishLemmatizer::new();
        assert_eq!(lemmatizer.lemma("children"), "child");
        assert_eq!(lemmatizer.lemma("went"), "go");
        assert_eq!(lemmatizer.lemma("best"), "good");
        assert_eq!(lemmatizer.lemma("worst"), "bad");
    }

    #[test]
    fn test_unmatched_words_unchanged() {
        let lemmatizer = EnglishLemmatizer::new();
        assert_eq!(lemmatizer.lemma("fantastic"), "fantastic");
        assert_eq!(lemmatizer.lemma("terrible"), "terrible");
        // Too short for any rule to fire
        assert_eq!(lemmatizer.lemma("sing"), "sing");
        assert_eq!(lemmatizer.lemma("red"), "red");
    }

    #[test]
    fn test_lemma_idempotent_on_own_output() {
        let lemmatizer = EnglishLemmatizer::new();
        for word in ["running", "movies", "stopped", "children", "greatest"] {
            let once = lemmatizer.lemma(word);
            assert_eq!(lemmatizer.lemma(&once), once, "lemma({word}) not a fixed point");
        }
    }

    #[test]
    fn test_lemmatizer_name() {
        assert_eq!(EnglishLemmatizer::new().name(), "english");
    }
}
