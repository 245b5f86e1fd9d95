// Text normalizer — turns raw resume or job description text into a
// lowercase sequence of lemmas.
//
// The same normalized form feeds both the TF-IDF vectorizer and the keyword
// sets used for missing-keyword diagnostics, so both views of a document
// always agree on what counts as a word.

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::lemma::lemmatize;

/// Contraction suffixes split off a token. The remainder is kept; the suffix
/// itself is always a stopword and is dropped.
const CONTRACTION_SUFFIXES: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// Number words that count as numeric tokens alongside digit strings.
const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "first", "second", "third",
    "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth", "eleventh", "twelfth",
    "twentieth", "hundredth", "thousandth", "millionth",
];

/// Lowercases, tokenizes, drops stopwords / punctuation / numbers, and
/// lemmatizes. Build once and reuse; construction loads the stopword list.
pub struct Normalizer {
    stop_words: HashSet<String>,
    number: Regex,
    fraction: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        // NLTK English list (function words only), selected by crate feature
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::with_stop_words(stop_words)
    }

    /// Build a normalizer with a caller-supplied stopword list.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            number: Regex::new(r"^[+-]?\d+(?:[.,]\d+)*%?$")?,
            fraction: Regex::new(r"^\d+/\d+$")?,
        })
    }

    /// Normalize `text` into a whitespace-joined string of lemmas, in the
    /// original token order. Returns an empty string when nothing survives.
    pub fn normalize(&self, text: &str) -> String {
        self.lemmas(text).join(" ")
    }

    /// The unique lemmas of `text`, in lexicographic order.
    pub fn keywords(&self, text: &str) -> BTreeSet<String> {
        self.lemmas(text).into_iter().collect()
    }

    fn lemmas(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        tokenize(&lower)
            .into_iter()
            .filter(|token| !is_punct(token))
            .filter(|token| !self.is_stop(token))
            .filter(|token| !self.like_num(token))
            .map(|token| lemmatize(token))
            .collect()
    }

    pub fn is_stop(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// True for digit strings (with `,`/`.` grouping), simple fractions, and
    /// English number words.
    pub fn like_num(&self, token: &str) -> bool {
        self.number.is_match(token)
            || self.fraction.is_match(token)
            || NUMBER_WORDS.contains(&token)
    }
}

/// Split lowercased text into word-like tokens.
///
/// Separator punctuation splits tokens; `.`, `'`, `@` and `_` survive inside a
/// token so `node.js`, `o'brien` and email addresses stay whole. A trailing
/// `++` or `#` directly after a letter is kept (`c++`, `c#`).
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();

    for piece in text.split(|c: char| !is_token_char(c)) {
        let piece = piece.trim_start_matches(|c: char| !c.is_alphanumeric());
        let piece = trim_token_end(piece);
        if piece.is_empty() {
            continue;
        }

        match split_contraction(piece) {
            Some(stem) if !stem.is_empty() => tokens.push(stem),
            Some(_) => {}
            None => tokens.push(piece),
        }
    }

    tokens
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '\'' | '’' | '@' | '_' | '+' | '#')
}

fn trim_token_end(piece: &str) -> &str {
    let mut end = piece.trim_end_matches(|c: char| matches!(c, '.' | '\'' | '’' | '@' | '_'));

    for keep in ["++", "#"] {
        if let Some(stem) = end.strip_suffix(keep) {
            if stem.chars().last().is_some_and(|c| c.is_alphabetic()) {
                return end;
            }
        }
    }

    end = end.trim_end_matches(['+', '#']);
    // Stripping `+`/`#` can expose another trailing dot ("v2.+")
    end.trim_end_matches(|c: char| matches!(c, '.' | '\'' | '’' | '@' | '_'))
}

fn split_contraction(token: &str) -> Option<&str> {
    CONTRACTION_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
}

fn is_punct(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::with_stop_words(["with", "and", "the", "a", "in", "of", "is", "do"]).unwrap()
    }

    #[test]
    fn test_tokenize_keeps_tech_terms_whole() {
        let tokens = tokenize("experience in c++, c#, node.js and rust.");
        assert_eq!(
            tokens,
            vec!["experience", "in", "c++", "c#", "node.js", "and", "rust"]
        );
    }

    #[test]
    fn test_tokenize_splits_separators() {
        let tokens = tokenize("full-stack (frontend/backend); ci|cd");
        assert_eq!(
            tokens,
            vec!["full", "stack", "frontend", "backend", "ci", "cd"]
        );
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        let tokens = tokenize("team's goals don't slip");
        assert_eq!(tokens, vec!["team", "goals", "do", "slip"]);
    }

    #[test]
    fn test_normalize_drops_stopwords_numbers_punctuation() {
        let n = normalizer();
        let out = n.normalize("Python developer with 5 years of Django experience!!!");
        assert_eq!(out, "python developer year django experience");
    }

    #[test]
    fn test_normalize_only_noise_is_empty() {
        let n = normalizer();
        assert_eq!(n.normalize("the and 2024 -- 3/4 ... twelve"), "");
    }

    #[test]
    fn test_like_num() {
        let n = normalizer();
        assert!(n.like_num("2024"));
        assert!(n.like_num("1,000"));
        assert!(n.like_num("3.5"));
        assert!(n.like_num("1/2"));
        assert!(n.like_num("third"));
        assert!(!n.like_num("python3"));
        assert!(!n.like_num("s3"));
    }

    #[test]
    fn test_keywords_are_unique_and_sorted() {
        let n = normalizer();
        let keywords: Vec<String> = n
            .keywords("rust rust python go python")
            .into_iter()
            .collect();
        assert_eq!(keywords, vec!["go", "python", "rust"]);
    }
}
