use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]+").expect("valid normalizer regex"));

static SHARED_FOLDS: Lazy<FoldTable> = Lazy::new(FoldTable::default);

/// Maps Latin-extended characters onto their base Latin letter before
/// lowercasing. Seeded with the Turkish set; other locales can register
/// additional pairs on their own table.
#[derive(Debug, Clone)]
pub struct FoldTable {
    map: HashMap<char, char>,
}

impl Default for FoldTable {
    fn default() -> Self {
        let mut table = Self {
            map: HashMap::new(),
        };
        for (from, to) in [
            ('ğ', 'g'),
            ('Ğ', 'g'),
            ('ü', 'u'),
            ('Ü', 'u'),
            ('ş', 's'),
            ('Ş', 's'),
            ('ı', 'i'),
            ('İ', 'i'),
            ('ö', 'o'),
            ('Ö', 'o'),
            ('ç', 'c'),
            ('Ç', 'c'),
        ] {
            table.register(from, to);
        }
        table
    }
}

impl FoldTable {
    pub fn shared() -> &'static Self {
        &SHARED_FOLDS
    }

    pub fn register(&mut self, from: char, to: char) {
        self.map.insert(from, to);
    }

    pub fn fold(&self, ch: char) -> char {
        self.map.get(&ch).copied().unwrap_or(ch)
    }
}

/// Lowercases, folds diacritics to ASCII, strips everything that is neither
/// a word character nor whitespace, and trims. Idempotent.
pub fn normalize(input: &str) -> String {
    normalize_with(input, FoldTable::shared())
}

pub fn normalize_with(input: &str, folds: &FoldTable) -> String {
    // Folding runs before lowercasing so dotted uppercase forms never reach
    // the Unicode lowercase path, which would split them into combining marks.
    let folded = input.chars().map(|ch| folds.fold(ch)).collect::<String>();
    let lowered = folded.to_lowercase();
    NON_WORD.replace_all(&lowered, "").trim().to_string()
}

/// Splits a normalized query on whitespace, discarding tokens of two
/// characters or fewer.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
