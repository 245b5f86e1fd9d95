// Rule-based English lemmatizer.
//
// Maps inflected forms back to a dictionary form: plural nouns to the
// singular, past tense and progressive verbs to the infinitive. Words outside
// plain ASCII lowercase letters, and terms listed in PROTECTED, pass through
// untouched.
//
// The lemmatizer only needs to be consistent: job descriptions and resumes go
// through the same rules, so "managed" and "managing" land on the same term as
// "manage" even where the rules miss the textbook lemma.

/// Forms the suffix rules cannot recover.
const IRREGULAR: &[(&str, &str)] = &[
    // Plurals
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("lives", "life"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("apis", "api"),
    ("kpis", "kpi"),
    // Strong verbs
    ("led", "lead"),
    ("built", "build"),
    ("rebuilt", "rebuild"),
    ("ran", "run"),
    ("wrote", "write"),
    ("written", "write"),
    ("rewrote", "rewrite"),
    ("rewritten", "rewrite"),
    ("taught", "teach"),
    ("made", "make"),
    ("began", "begin"),
    ("begun", "begin"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("held", "hold"),
    ("won", "win"),
    ("brought", "bring"),
    ("thought", "think"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("told", "tell"),
    ("kept", "keep"),
    ("met", "meet"),
    ("sent", "send"),
    ("spent", "spend"),
    ("understood", "understand"),
    ("took", "take"),
    ("taken", "take"),
    ("undertook", "undertake"),
    ("gave", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("saw", "see"),
    ("seen", "see"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("found", "find"),
    ("lost", "lose"),
    ("paid", "pay"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("going", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("came", "come"),
    ("became", "become"),
    ("overcame", "overcome"),
    ("felt", "feel"),
    ("meant", "mean"),
    ("heard", "hear"),
    ("fought", "fight"),
    ("caught", "catch"),
    ("sought", "seek"),
    ("thrown", "throw"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("flew", "fly"),
    ("broke", "break"),
    ("broken", "break"),
    ("stood", "stand"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("spun", "spin"),
    ("dealt", "deal"),
    // Weak verbs the silent-e rules get wrong
    ("used", "use"),
    ("using", "use"),
    ("based", "base"),
    ("basing", "base"),
    ("caused", "cause"),
    ("causing", "cause"),
    ("purchased", "purchase"),
    ("purchasing", "purchase"),
    ("routed", "route"),
    ("tuned", "tune"),
    ("tuning", "tune"),
    ("stored", "store"),
    ("storing", "store"),
    ("explored", "explore"),
    ("exploring", "explore"),
    ("restored", "restore"),
    ("ignored", "ignore"),
    ("scored", "score"),
    ("scoring", "score"),
    ("shaped", "shape"),
    ("shaping", "shape"),
    ("typed", "type"),
    ("prototyped", "prototype"),
    ("prototyping", "prototype"),
    ("scoped", "scope"),
    ("scoping", "scope"),
    ("scraped", "scrape"),
    ("scraping", "scrape"),
    ("invited", "invite"),
    ("promoted", "promote"),
    ("promoting", "promote"),
    ("noted", "note"),
    ("cloned", "clone"),
    ("cloning", "clone"),
    ("scaled", "scale"),
    ("scaling", "scale"),
    ("controlled", "control"),
    ("controlling", "control"),
    ("travelled", "travel"),
    ("travelling", "travel"),
    ("modelled", "model"),
    ("labelled", "label"),
    ("cancelled", "cancel"),
];

/// Terms that look inflected but are already in dictionary form: nouns in
/// -ing, -ics and -s, and product names.
const PROTECTED: &[&str] = &[
    "engineering", "programming", "learning", "testing", "marketing", "accounting", "training",
    "networking", "computing", "processing", "modeling", "modelling", "scripting", "debugging",
    "consulting", "planning", "logging", "monitoring", "pricing", "banking", "manufacturing",
    "building", "meeting", "setting", "morning", "evening", "ceiling", "clothing", "wedding",
    "offering", "understanding", "onboarding", "reasoning", "housing", "funding", "nursing",
    "teaching", "writing", "reporting", "tooling", "hiring", "recruiting", "staffing",
    "sourcing", "branding", "advertising", "publishing", "caching", "routing", "scheduling",
    "budgeting", "forecasting", "auditing", "billing", "shipping", "trading", "gaming",
    "streaming", "hosting", "clustering", "something", "nothing", "anything", "everything",
    "analytics", "physics", "mathematics", "economics", "statistics", "ethics", "logistics",
    "robotics", "graphics", "electronics", "dynamics", "optics", "news", "series", "species",
    "kubernetes", "postgres", "jenkins", "pandas", "rails", "windows", "ios", "macos", "chaos",
    "canvas", "atlas", "alias", "bias", "embed", "speed",
];

/// Stems ending in "-at" that are whole words; other "-at" stems take a silent e.
const AT_WORDS: &[&str] = &[
    "eat", "treat", "peat", "feat", "heat", "seat", "beat", "cheat", "threat", "float", "boat",
    "coat", "combat",
];

/// Reduce `word` (already lowercase) to its lemma.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_string();
    }

    if PROTECTED.contains(&word) || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    strip_plural(word)
        .or_else(|| strip_past(word))
        .or_else(|| strip_progressive(word))
        .unwrap_or_else(|| word.to_string())
}

fn strip_plural(word: &str) -> Option<String> {
    if word.len() <= 3 || !word.ends_with('s') {
        return None;
    }
    if ["ss", "us", "is", "ops", "js"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return (word.len() > 4).then(|| format!("{stem}y"));
    }

    let sibilant = ["sses", "xes", "ches", "shes", "zzes"]
        .iter()
        .any(|suffix| word.ends_with(suffix));
    if sibilant || (word.len() > 5 && word.ends_with("oes")) {
        return Some(word[..word.len() - 2].to_string());
    }

    Some(word[..word.len() - 1].to_string())
}

fn strip_past(word: &str) -> Option<String> {
    if word.len() <= 4 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return Some(format!("{stem}y"));
    }

    let stem = word.strip_suffix("ed")?;
    // "-eed" words (speed, agreed) are left alone
    if stem.ends_with('e') || !has_vowel(stem) {
        return None;
    }
    Some(restore(stem))
}

fn strip_progressive(word: &str) -> Option<String> {
    if word.len() <= 5 {
        return None;
    }
    let stem = word.strip_suffix("ing")?;
    if !has_vowel(stem) {
        return None;
    }
    Some(restore(stem))
}

/// Undo consonant doubling (planned -> plan) or put back a dropped silent e
/// (managed -> manage).
fn restore(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    let last = b[n - 1];

    if n >= 2 && b[n - 2] == last && !is_vowel(last) && !b"lsfz".contains(&last) {
        return stem[..n - 1].to_string();
    }

    if needs_silent_e(stem) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn needs_silent_e(stem: &str) -> bool {
    let b = stem.as_bytes();
    let n = b.len();
    if n < 3 {
        return false;
    }
    let last = b[n - 1];
    let prev = b[n - 2];
    let before = b[n - 3];

    match last {
        b'c' | b'v' => true,
        b'z' => prev != b'z',
        b'g' => matches!(prev, b'a' | b'r' | b'd') || stem.ends_with("ang"),
        b'l' => {
            b"bcdfgkptyz".contains(&prev) || (prev == b'i' && !is_vowel(before))
        }
        b'r' => match prev {
            b'u' => true,
            b'i' => !is_vowel(before) || before == b'u',
            b'a' => !is_vowel(before),
            _ => false,
        },
        b't' => match prev {
            b'a' => !AT_WORDS
                .iter()
                .any(|w| stem == *w || (w.len() > 3 && stem.ends_with(w))),
            b'u' => !is_vowel(before),
            b'e' => before == b'l',
            _ => false,
        },
        b'd' => {
            ["vid", "cid", "uid", "sid", "ud"]
                .iter()
                .any(|suffix| stem.ends_with(suffix))
                || (prev == b'o' && before != b'o')
        }
        b's' => {
            if stem.ends_with("eas") {
                true
            } else {
                !matches!(prev, b'a' | b'u' | b's')
            }
        }
        b'n' => prev == b'i' && !is_vowel(before),
        b'm' | b'k' => is_vowel(prev) && !is_vowel(before),
        _ => false,
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.bytes().any(|b| is_vowel(b) || b == b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cases: &[(&str, &str)]) {
        for (word, expected) in cases {
            assert_eq!(lemmatize(word), *expected, "lemma of {word}");
        }
    }

    #[test]
    fn test_plural_nouns() {
        check(&[
            ("skills", "skill"),
            ("technologies", "technology"),
            ("processes", "process"),
            ("approaches", "approach"),
            ("databases", "database"),
            ("apis", "api"),
            ("keys", "key"),
            ("heroes", "hero"),
            ("status", "status"),
            ("analysis", "analysis"),
            ("devops", "devops"),
        ]);
    }

    #[test]
    fn test_past_tense() {
        check(&[
            ("developed", "develop"),
            ("managed", "manage"),
            ("experienced", "experience"),
            ("created", "create"),
            ("optimized", "optimize"),
            ("configured", "configure"),
            ("required", "require"),
            ("completed", "complete"),
            ("provided", "provide"),
            ("combined", "combine"),
            ("maintained", "maintain"),
            ("planned", "plan"),
            ("skilled", "skill"),
            ("processed", "process"),
            ("focused", "focus"),
            ("released", "release"),
            ("handled", "handle"),
            ("applied", "apply"),
            ("speed", "speed"),
        ]);
    }

    #[test]
    fn test_progressive() {
        check(&[
            ("developing", "develop"),
            ("managing", "manage"),
            ("running", "run"),
            ("deploying", "deploy"),
            ("making", "make"),
            ("changing", "change"),
            ("bringing", "bring"),
            ("string", "string"),
            ("engineering", "engineering"),
        ]);
    }

    #[test]
    fn test_irregular_and_passthrough() {
        check(&[
            ("led", "lead"),
            ("people", "person"),
            ("used", "use"),
            ("node.js", "node.js"),
            ("c++", "c++"),
            ("café", "café"),
        ]);
    }
}
