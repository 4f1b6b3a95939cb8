//! Static word tables for the supported languages.
//!
//! Each language keeps a map from the values it treats as atomic to their
//! word form. Absence of an entry signals "must be composed", not an error;
//! the converters in [`crate::numerals`] consult these tables with a
//! lookup-first strategy and only compose when the lookup misses.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Language;

/// Largest value the scale-word table can express: all five base-1000
/// groups full, up to 999 trillion.
pub const MAX_SPELLABLE: u64 = 999_999_999_999_999;

/// Scale words per base-1000 group, indexed by group position
/// (0 = units, 1 = thousand, 2 = million, 3 = billion, 4 = trillion).
pub(crate) const ARABIC_SCALES: [&str; 5] = ["", "ألف", "مليون", "مليار", "تريليون"];
pub(crate) const ENGLISH_SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// Suffix turning an Arabic scale word into its dual ("ألف" → "ألفان").
pub(crate) const ARABIC_DUAL_SUFFIX: &str = "ان";

/// Suffix composing the Arabic teens (13–19) from the unit word.
pub(crate) const ARABIC_TEEN_SUFFIX: &str = "عشر";

/// Arabic atoms: singles (with the irregular 11 and 12), tens, the
/// hundred multiples (each a distinct word, not "digit + hundred"), and
/// the literal singular/dual magnitude words.
static ARABIC_ATOMS: LazyLock<HashMap<u64, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, ""),
        (1, "واحد"),
        (2, "اثنان"),
        (3, "ثلاثة"),
        (4, "أربعة"),
        (5, "خمسة"),
        (6, "ستة"),
        (7, "سبعة"),
        (8, "ثمانية"),
        (9, "تسعة"),
        (10, "عشرة"),
        (11, "أحد عشر"),
        (12, "اثنا عشر"),
        (20, "عشرون"),
        (30, "ثلاثون"),
        (40, "أربعون"),
        (50, "خمسون"),
        (60, "ستون"),
        (70, "سبعون"),
        (80, "ثمانون"),
        (90, "تسعون"),
        (100, "مائة"),
        (200, "مائتان"),
        (300, "ثلاثمائة"),
        (400, "أربعمائة"),
        (500, "خمسمائة"),
        (600, "ستمائة"),
        (700, "سبعمائة"),
        (800, "ثمانمائة"),
        (900, "تسعمائة"),
        (1_000, "ألف"),
        (2_000, "ألفان"),
        (1_000_000, "مليون"),
        (2_000_000, "مليونان"),
        (1_000_000_000, "مليار"),
        (2_000_000_000, "ملياران"),
    ])
});

/// English atoms: everything below twenty plus the tens.
static ENGLISH_ATOMS: LazyLock<HashMap<u64, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (6, "six"),
        (7, "seven"),
        (8, "eight"),
        (9, "nine"),
        (10, "ten"),
        (11, "eleven"),
        (12, "twelve"),
        (13, "thirteen"),
        (14, "fourteen"),
        (15, "fifteen"),
        (16, "sixteen"),
        (17, "seventeen"),
        (18, "eighteen"),
        (19, "nineteen"),
        (20, "twenty"),
        (30, "thirty"),
        (40, "forty"),
        (50, "fifty"),
        (60, "sixty"),
        (70, "seventy"),
        (80, "eighty"),
        (90, "ninety"),
    ])
});

/// Broken plurals of the Arabic scale words, used when a group counts
/// three through ten of a scale ("ثلاثة آلاف").
static ARABIC_SCALE_PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("ألف", "آلاف"),
        ("مليون", "ملايين"),
        ("مليار", "مليارات"),
        ("تريليون", "تريليونات"),
    ])
});

/// Pure lookup for values a language treats as atomic.
///
/// Defined for 0–12 (0–19 in English), the tens, the hundred multiples and
/// the literal magnitude words for one and two thousand/million/billion in
/// Arabic. `None` means the value must be composed.
pub fn word_for(value: u64, language: Language) -> Option<&'static str> {
    match language {
        Language::Arabic => ARABIC_ATOMS.get(&value).copied(),
        Language::English => ENGLISH_ATOMS.get(&value).copied(),
    }
}

/// Plural form of an Arabic scale word, falling back to the singular for
/// scales without a recorded broken plural.
pub(crate) fn scale_plural(scale: &str) -> &str {
    ARABIC_SCALE_PLURALS.get(scale).copied().unwrap_or(scale)
}

/// The word for zero at the top level of a phrase.
pub(crate) fn zero_word(language: Language) -> &'static str {
    match language {
        Language::Arabic => "صفر",
        Language::English => "zero",
    }
}

/// The word prefixed to negative amounts.
pub(crate) fn negation_word(language: Language) -> &'static str {
    match language {
        Language::Arabic => "سالب",
        Language::English => "minus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singles_are_atomic() {
        // 0 through 12 resolve directly, no composition path
        for n in 0..=12 {
            assert!(word_for(n, Language::Arabic).is_some(), "missing Arabic atom {}", n);
            assert!(word_for(n, Language::English).is_some(), "missing English atom {}", n);
        }
        assert_eq!(word_for(11, Language::Arabic), Some("أحد عشر"));
        assert_eq!(word_for(12, Language::English), Some("twelve"));
    }

    #[test]
    fn test_composed_values_are_absent() {
        assert_eq!(word_for(13, Language::Arabic), None);
        assert_eq!(word_for(25, Language::Arabic), None);
        assert_eq!(word_for(21, Language::English), None);
        assert_eq!(word_for(101, Language::English), None);
    }

    #[test]
    fn test_hundreds_have_distinct_forms() {
        assert_eq!(word_for(100, Language::Arabic), Some("مائة"));
        assert_eq!(word_for(200, Language::Arabic), Some("مائتان"));
        assert_eq!(word_for(900, Language::Arabic), Some("تسعمائة"));
        // English composes its hundreds
        assert_eq!(word_for(100, Language::English), None);
    }

    #[test]
    fn test_dual_magnitude_words() {
        assert_eq!(word_for(2_000, Language::Arabic), Some("ألفان"));
        assert_eq!(word_for(2_000_000, Language::Arabic), Some("مليونان"));
        assert_eq!(word_for(2_000_000_000, Language::Arabic), Some("ملياران"));
    }

    #[test]
    fn test_scale_plurals_cover_every_scale() {
        for scale in &ARABIC_SCALES[1..] {
            assert_ne!(scale_plural(scale), *scale, "no broken plural for {}", scale);
        }
    }
}
