//! Grammatical-number agreement.
//!
//! Arabic counted nouns agree with the counted quantity: one and two are
//! carried by the number word itself (two through its dual form), three
//! through ten take the plural noun, and eleven upward — as well as zero —
//! revert to the singular. The same rule selects the noun for the main
//! currency unit and, independently, for the subunit count.

/// Agreement class of a counted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralClass {
    One,
    Two,
    FewToTen,
    ManyOrZero,
}

impl PluralClass {
    /// Classify a quantity.
    pub fn of(n: u64) -> Self {
        match n {
            1 => PluralClass::One,
            2 => PluralClass::Two,
            3..=10 => PluralClass::FewToTen,
            _ => PluralClass::ManyOrZero,
        }
    }

    /// Select the noun form agreeing with this class.
    ///
    /// Only [`PluralClass::FewToTen`] takes the plural; every other class
    /// pairs with the singular form.
    pub fn counted_noun<'a>(self, singular: &'a str, plural: &'a str) -> &'a str {
        match self {
            PluralClass::FewToTen => plural,
            _ => singular,
        }
    }
}
