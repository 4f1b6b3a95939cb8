//! Number to words conversion for Arabic and English.
//!
//! The converters are layered: a sub-thousand converter per language, a
//! whole-number converter that decomposes into base-1000 groups and applies
//! scale words with grammatical-number agreement, and a signed entry point
//! that handles zero and negative values.

use crate::Language;
use crate::error::{TafqitError, TafqitResult};
use crate::lexicon::{self, MAX_SPELLABLE};

/// Convert a signed number to words.
///
/// Zero renders as the language's zero word; negative numbers are prefixed
/// with the negation word and spelled from the absolute value.
///
/// # Errors
/// Returns [`TafqitError::AmountOutOfRange`] when the magnitude exceeds the
/// scale-word table (beyond 999 trillion).
pub fn number_to_words(num: i64, language: Language) -> TafqitResult<String> {
    spell_signed(num.unsigned_abs(), num < 0, language)
}

/// Signed conversion over an already-split magnitude and sign.
pub(crate) fn spell_signed(
    magnitude: u64,
    negative: bool,
    language: Language,
) -> TafqitResult<String> {
    if magnitude > MAX_SPELLABLE {
        return Err(TafqitError::AmountOutOfRange(format!(
            "{} exceeds the largest spellable value {}",
            magnitude, MAX_SPELLABLE
        )));
    }
    if magnitude == 0 {
        return Ok(lexicon::zero_word(language).to_string());
    }

    let words = integer_to_words(magnitude, language);
    if negative {
        Ok(format!("{} {}", lexicon::negation_word(language), words))
    } else {
        Ok(words)
    }
}

/// Convert a whole number to words. Returns the empty string for zero;
/// top-level zero handling belongs to [`number_to_words`].
pub(crate) fn integer_to_words(num: u64, language: Language) -> String {
    match language {
        Language::Arabic => integer_to_words_ar(num),
        Language::English => integer_to_words_en(num),
    }
}

/// Split a number into nonzero base-1000 groups, least significant first,
/// each paired with its scale index.
fn base_thousand_groups(mut num: u64) -> Vec<(u64, usize)> {
    let mut groups = Vec::new();
    let mut scale_index = 0;
    while num > 0 {
        let group = num % 1_000;
        if group > 0 {
            groups.push((group, scale_index));
        }
        num /= 1_000;
        scale_index += 1;
    }
    groups
}

fn integer_to_words_ar(num: u64) -> String {
    if num == 0 {
        return String::new();
    }

    // Exact atoms first, including the dual magnitude words
    if let Some(word) = lexicon::word_for(num, Language::Arabic) {
        return word.to_string();
    }

    // 1000–9999 places the conjunction differently from the general
    // grouping algorithm, so it gets its own path
    if (1_000..10_000).contains(&num) {
        let thousands = num / 1_000;
        let remainder = num % 1_000;
        let thousand = lexicon::ARABIC_SCALES[1];

        let mut result = match thousands {
            1 => thousand.to_string(),
            2 => format!("{}{}", thousand, lexicon::ARABIC_DUAL_SUFFIX),
            3..=10 => format!(
                "{} {}",
                below_thousand_ar(thousands),
                lexicon::scale_plural(thousand)
            ),
            _ => format!("{} {}", below_thousand_ar(thousands), thousand),
        };

        if remainder > 0 {
            result.push_str(" و ");
            result.push_str(&below_thousand_ar(remainder));
        }
        return result;
    }

    let mut result = String::new();
    for &(value, scale_index) in base_thousand_groups(num).iter().rev() {
        if !result.is_empty() {
            result.push_str(" و ");
        }

        if scale_index == 0 {
            result.push_str(&below_thousand_ar(value));
            continue;
        }

        let scale = lexicon::ARABIC_SCALES[scale_index];
        match value {
            1 => result.push_str(scale),
            2 => {
                result.push_str(scale);
                result.push_str(lexicon::ARABIC_DUAL_SUFFIX);
            }
            3..=10 => {
                result.push_str(&below_thousand_ar(value));
                result.push(' ');
                result.push_str(lexicon::scale_plural(scale));
            }
            _ => {
                result.push_str(&below_thousand_ar(value));
                result.push(' ');
                result.push_str(scale);
            }
        }
    }

    // The word for one never prefixes a bare thousand
    result.replace("واحد ألف", "ألف")
}

/// Convert an integer in [0, 999] to Arabic words.
fn below_thousand_ar(num: u64) -> String {
    if num == 0 {
        return String::new();
    }
    if let Some(word) = lexicon::word_for(num, Language::Arabic) {
        return word.to_string();
    }

    let mut result = String::new();
    let hundreds = num / 100 * 100;
    let mut rest = num;

    if hundreds > 0 {
        // Hundred multiples are atoms, so rest is nonzero past this point
        result.push_str(lexicon::word_for(hundreds, Language::Arabic).unwrap_or_default());
        rest %= 100;
        if rest > 0 {
            result.push_str(" و ");
        }
    }

    if rest > 0 {
        if let Some(word) = lexicon::word_for(rest, Language::Arabic) {
            result.push_str(word);
        } else if rest < 20 {
            // 13–19: unit word plus the teen suffix
            result.push_str(lexicon::word_for(rest % 10, Language::Arabic).unwrap_or_default());
            result.push(' ');
            result.push_str(lexicon::ARABIC_TEEN_SUFFIX);
        } else {
            // 21–99: unit before tens, joined with the conjunction
            let units = rest % 10;
            let tens = rest / 10 * 10;
            if units > 0 {
                result.push_str(lexicon::word_for(units, Language::Arabic).unwrap_or_default());
                result.push_str(" و ");
            }
            result.push_str(lexicon::word_for(tens, Language::Arabic).unwrap_or_default());
        }
    }

    result
}

fn integer_to_words_en(num: u64) -> String {
    if num == 0 {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();
    for &(value, scale_index) in base_thousand_groups(num).iter().rev() {
        let text = below_thousand_en(value);
        if scale_index == 0 {
            parts.push(text);
        } else {
            parts.push(format!("{} {}", text, lexicon::ENGLISH_SCALES[scale_index]));
        }
    }
    parts.join(" ")
}

/// Convert an integer in [0, 999] to English words. "and" appears when and
/// only when a nonzero remainder directly follows a hundreds word.
fn below_thousand_en(num: u64) -> String {
    if num == 0 {
        return String::new();
    }
    if num < 100 {
        return below_hundred_en(num);
    }

    let hundreds = num / 100;
    let remainder = num % 100;
    let mut result = format!(
        "{} hundred",
        lexicon::word_for(hundreds, Language::English).unwrap_or_default()
    );
    if remainder > 0 {
        result.push_str(" and ");
        result.push_str(&below_hundred_en(remainder));
    }
    result
}

fn below_hundred_en(num: u64) -> String {
    // Covers everything below twenty and the exact tens
    if let Some(word) = lexicon::word_for(num, Language::English) {
        return word.to_string();
    }
    let tens = num / 10 * 10;
    let units = num % 10;
    format!(
        "{}-{}",
        lexicon::word_for(tens, Language::English).unwrap_or_default(),
        lexicon::word_for(units, Language::English).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ar(num: i64) -> String {
        number_to_words(num, Language::Arabic).expect("within range")
    }

    fn en(num: i64) -> String {
        number_to_words(num, Language::English).expect("within range")
    }

    #[test]
    fn test_arabic_atoms_and_zero() {
        assert_eq!(ar(0), "صفر");
        assert_eq!(ar(1), "واحد");
        assert_eq!(ar(11), "أحد عشر");
        assert_eq!(ar(12), "اثنا عشر");
        assert_eq!(ar(20), "عشرون");
        assert_eq!(ar(200), "مائتان");
    }

    #[test]
    fn test_arabic_teens_and_tens() {
        assert_eq!(ar(13), "ثلاثة عشر");
        assert_eq!(ar(19), "تسعة عشر");
        assert_eq!(ar(25), "خمسة و عشرون");
        assert_eq!(ar(90), "تسعون");
        assert_eq!(ar(99), "تسعة و تسعون");
    }

    #[test]
    fn test_arabic_hundreds_composition() {
        assert_eq!(ar(113), "مائة و ثلاثة عشر");
        assert_eq!(ar(250), "مائتان و خمسون");
        assert_eq!(ar(305), "ثلاثمائة و خمسة");
        assert_eq!(ar(999), "تسعمائة و تسعة و تسعون");
    }

    #[test]
    fn test_arabic_thousands_below_ten_thousand() {
        assert_eq!(ar(1_000), "ألف");
        assert_eq!(ar(2_000), "ألفان");
        assert_eq!(ar(3_000), "ثلاثة آلاف");
        assert_eq!(ar(10_000), "عشرة آلاف");
        assert_eq!(ar(1_500), "ألف و خمسمائة");
        assert_eq!(ar(2_500), "ألفان و خمسمائة");
        assert_eq!(ar(9_999), "تسعة آلاف و تسعمائة و تسعة و تسعون");
    }

    #[test]
    fn test_arabic_thousands_general_range() {
        assert_eq!(ar(11_000), "أحد عشر ألف");
        assert_eq!(ar(22_000), "اثنان و عشرون ألف");
        assert_eq!(ar(100_000), "مائة ألف");
    }

    #[test]
    fn test_arabic_millions_agreement() {
        assert_eq!(ar(1_000_000), "مليون");
        assert_eq!(ar(2_000_000), "مليونان");
        assert_eq!(ar(5_000_000), "خمسة ملايين");
        assert_eq!(ar(11_000_000), "أحد عشر مليون");
    }

    #[test]
    fn test_arabic_group_conjunctions() {
        // nonzero groups joined with the conjunction, zero groups skipped
        assert_eq!(ar(1_000_005), "مليون و خمسة");
        assert_eq!(ar(2_000_005), "مليونان و خمسة");
        assert_eq!(
            ar(1_234_567),
            "مليون و مائتان و أربعة و ثلاثون ألف و خمسمائة و سبعة و ستون"
        );
    }

    #[test]
    fn test_arabic_trillions() {
        assert_eq!(ar(1_000_000_000_000), "تريليون");
        assert_eq!(ar(3_000_000_000_000), "ثلاثة تريليونات");
    }

    #[test]
    fn test_arabic_one_never_prefixes_thousand() {
        assert!(!ar(101_000).contains("واحد ألف"));
        assert!(!ar(1_001_000).contains("واحد ألف"));
    }

    #[test]
    fn test_arabic_negative() {
        assert_eq!(ar(-5), "سالب خمسة");
        assert_eq!(ar(-1_000), "سالب ألف");
    }

    #[test]
    fn test_english_basics() {
        assert_eq!(en(0), "zero");
        assert_eq!(en(1), "one");
        assert_eq!(en(15), "fifteen");
        assert_eq!(en(21), "twenty-one");
        assert_eq!(en(100), "one hundred");
        assert_eq!(en(101), "one hundred and one");
        assert_eq!(en(150), "one hundred and fifty");
    }

    #[test]
    fn test_english_groups() {
        assert_eq!(en(1_000), "one thousand");
        assert_eq!(en(1_050), "one thousand fifty");
        assert_eq!(en(2_345), "two thousand three hundred and forty-five");
        assert_eq!(en(1_000_050), "one million fifty");
        assert_eq!(en(2_500_000), "two million five hundred thousand");
    }

    #[test]
    fn test_english_negative() {
        assert_eq!(en(-42), "minus forty-two");
    }

    #[test]
    fn test_sub_component_zero_is_empty() {
        assert_eq!(integer_to_words(0, Language::Arabic), "");
        assert_eq!(integer_to_words(0, Language::English), "");
    }

    #[test]
    fn test_magnitude_beyond_scale_table() {
        let result = number_to_words(1_000_000_000_000_000, Language::Arabic);
        assert!(matches!(result, Err(TafqitError::AmountOutOfRange(_))));
        assert!(number_to_words(999_999_999_999_999, Language::English).is_ok());
    }
}
