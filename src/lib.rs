//! Amount-to-words conversion for cheque writing.
//!
//! `tafqit` turns an integer amount, a subunit amount and a currency code
//! into the grammatically correct phrase a cheque carries on its
//! amount-in-words line, in Arabic or English. Arabic phrases follow the
//! counted-noun agreement rules (dual number words, broken plurals for
//! three through ten) and close with the fixed idiom "فقط لا غير"; English
//! phrases render the subunit as a fraction over 100 and close with
//! "only".
//!
//! ```
//! use tafqit::{Language, amount_to_words};
//!
//! let phrase = amount_to_words(250, 500, "JOD", Language::Arabic)?;
//! assert_eq!(phrase, "مائتان و خمسون دينار أردني و 500 فلس فقط لا غير");
//!
//! let phrase = amount_to_words(100, 50, "USD", Language::English)?;
//! assert_eq!(phrase, "one hundred US dollars and 50/100 only");
//! # Ok::<(), tafqit::TafqitError>(())
//! ```
//!
//! Every operation is a pure synchronous function over immutable static
//! tables; the engine holds no state and is safe to call concurrently.

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod currency;
pub mod error;
pub mod format;
pub mod lexicon;
pub mod numerals;
pub mod plural;

// Re-export the types the entry point is built from
pub use catalog::LabelCatalog;
pub use currency::{CurrencyDefinition, NounForms};
pub use error::{TafqitError, TafqitResult};
pub use format::Amount;
pub use lexicon::word_for;
pub use numerals::number_to_words;
pub use plural::PluralClass;

/// Target language of a phrase. Selects the lexicon and the grammar
/// pipeline; always passed explicitly, never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Parse a language tag ("ar", "en"), case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.to_lowercase().as_str() {
            "ar" | "arabic" => Some(Language::Arabic),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }

    /// The short tag used in label files and serialized forms.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Convert an amount to its spoken-word phrase.
///
/// `subunit_part` must already be clamped to the currency's subunit digit
/// width (two or three digits, see
/// [`CurrencyDefinition::subunit_digits`]); unknown currency codes fall
/// back to the default definition rather than failing.
///
/// # Errors
/// Returns [`TafqitError::AmountOutOfRange`] when `integer_part` exceeds
/// the scale-word table (beyond 999 trillion).
pub fn amount_to_words(
    integer_part: i64,
    subunit_part: u32,
    currency_code: &str,
    language: Language,
) -> TafqitResult<String> {
    let amount = Amount::new(integer_part, subunit_part);
    format::amount_to_words(&amount, currency::lookup(currency_code), language)
}
