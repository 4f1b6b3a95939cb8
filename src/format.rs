//! Assembly of the final localized currency phrase.

use crate::Language;
use crate::currency::CurrencyDefinition;
use crate::error::TafqitResult;
use crate::numerals;
use crate::plural::PluralClass;

/// A monetary amount the way cheque forms capture it: integer units and an
/// integer subunit count.
///
/// `subunit_part` must already be clamped to the currency's digit width
/// (see [`CurrencyDefinition::subunit_digits`]); the engine trusts the
/// caller and does not re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    pub integer_part: u64,
    pub subunit_part: u32,
    pub is_negative: bool,
}

impl Amount {
    /// Build an amount from a signed integer part.
    pub fn new(integer_part: i64, subunit_part: u32) -> Self {
        Amount {
            integer_part: integer_part.unsigned_abs(),
            subunit_part,
            is_negative: integer_part < 0,
        }
    }
}

/// Assemble the full phrase for an amount in a currency.
///
/// The Arabic clause spells the integer amount, the agreeing main-unit
/// noun, the subunit count as bare digits with its agreeing noun, and the
/// fixed closing idiom. The English clause spells the integer amount and
/// renders the subunit as a fraction over 100 followed by "only".
///
/// # Errors
/// Returns [`crate::TafqitError::AmountOutOfRange`] when the integer part
/// exceeds the scale-word table.
pub fn amount_to_words(
    amount: &Amount,
    currency: &CurrencyDefinition,
    language: Language,
) -> TafqitResult<String> {
    let words = numerals::spell_signed(amount.integer_part, amount.is_negative, language)?;
    let main = currency.main_unit(language);

    let phrase = match language {
        Language::Arabic => {
            let unit = PluralClass::of(amount.integer_part).counted_noun(main.singular, main.plural);
            if amount.subunit_part > 0 {
                let sub = currency.subunit();
                let sub_noun = PluralClass::of(amount.subunit_part as u64)
                    .counted_noun(sub.singular, sub.plural);
                format!(
                    "{} {} و {} {} فقط لا غير",
                    words, unit, amount.subunit_part, sub_noun
                )
            } else {
                format!("{} {} فقط لا غير", words, unit)
            }
        }
        Language::English => {
            let unit = if amount.integer_part == 1 {
                main.singular
            } else {
                main.plural
            };
            if amount.subunit_part > 0 {
                format!(
                    "{} {} and {:02}/100 only",
                    words,
                    unit,
                    hundredths(amount.subunit_part, currency)
                )
            } else {
                format!("{} {} only", words, unit)
            }
        }
    };

    Ok(phrase)
}

/// Subunit count over 100 for the English fraction clause. Three-digit
/// subunits are truncated to their leading two digits.
fn hundredths(subunit: u32, currency: &CurrencyDefinition) -> u32 {
    if currency.subunit_digits() == 3 {
        subunit / 10
    } else {
        subunit
    }
}
