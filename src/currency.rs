//! Currency definitions and the code → definition registry.
//!
//! The registry is a static, read-only table constructed once at first use.
//! Unknown codes never fail a lookup; they fall back to the Jordanian dinar
//! definition, which keeps the phrase formatter total over arbitrary input.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Language;

/// Singular and plural written forms of a currency noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// A currency as the phrase formatter sees it: noun forms per target
/// language and the digit width of its subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDefinition {
    code: &'static str,
    main_arabic: NounForms,
    subunit_arabic: NounForms,
    main_english: NounForms,
    subunit_digits: u8,
}

impl CurrencyDefinition {
    const fn new(
        code: &'static str,
        main_arabic: (&'static str, &'static str),
        subunit_arabic: (&'static str, &'static str),
        main_english: (&'static str, &'static str),
        subunit_digits: u8,
    ) -> Self {
        Self {
            code,
            main_arabic: NounForms {
                singular: main_arabic.0,
                plural: main_arabic.1,
            },
            subunit_arabic: NounForms {
                singular: subunit_arabic.0,
                plural: subunit_arabic.1,
            },
            main_english: NounForms {
                singular: main_english.0,
                plural: main_english.1,
            },
            subunit_digits,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Main-unit noun forms for the requested language.
    pub fn main_unit(&self, language: Language) -> NounForms {
        match language {
            Language::Arabic => self.main_arabic,
            Language::English => self.main_english,
        }
    }

    /// Subunit noun forms. Only the Arabic clause spells the subunit noun;
    /// the English clause renders the subunit as a fraction literal.
    pub fn subunit(&self) -> NounForms {
        self.subunit_arabic
    }

    /// Digit width callers must clamp subunit values to (2 or 3).
    pub fn subunit_digits(&self) -> u8 {
        self.subunit_digits
    }

    /// Exclusive upper bound for subunit values of this currency.
    pub fn subunit_limit(&self) -> u32 {
        10u32.pow(self.subunit_digits as u32)
    }
}

const DEFAULT_CODE: &str = "JOD";

static REGISTRY: LazyLock<HashMap<&'static str, CurrencyDefinition>> = LazyLock::new(|| {
    let definitions = [
        // Dinars
        CurrencyDefinition::new(
            "JOD",
            ("دينار أردني", "دنانير أردنية"),
            ("فلس", "فلسات"),
            ("Jordanian dinar", "Jordanian dinars"),
            3,
        ),
        CurrencyDefinition::new(
            "DZD",
            ("دينار جزائري", "دنانير جزائرية"),
            ("سنتيم", "سنتيمات"),
            ("Algerian dinar", "Algerian dinars"),
            2,
        ),
        CurrencyDefinition::new(
            "BHD",
            ("دينار بحريني", "دنانير بحرينية"),
            ("فلس", "فلسات"),
            ("Bahraini dinar", "Bahraini dinars"),
            3,
        ),
        CurrencyDefinition::new(
            "IQD",
            ("دينار عراقي", "دنانير عراقية"),
            ("فلس", "فلسات"),
            ("Iraqi dinar", "Iraqi dinars"),
            3,
        ),
        CurrencyDefinition::new(
            "KWD",
            ("دينار كويتي", "دنانير كويتية"),
            ("فلس", "فلسات"),
            ("Kuwaiti dinar", "Kuwaiti dinars"),
            3,
        ),
        CurrencyDefinition::new(
            "LYD",
            ("دينار ليبي", "دنانير ليبية"),
            ("درهم", "دراهم"),
            ("Libyan dinar", "Libyan dinars"),
            3,
        ),
        CurrencyDefinition::new(
            "TND",
            ("دينار تونسي", "دنانير تونسية"),
            ("مليم", "مليمات"),
            ("Tunisian dinar", "Tunisian dinars"),
            3,
        ),
        // Pounds
        CurrencyDefinition::new(
            "EGP",
            ("جنيه مصري", "جنيهات مصرية"),
            ("قرش", "قروش"),
            ("Egyptian pound", "Egyptian pounds"),
            2,
        ),
        CurrencyDefinition::new(
            "LBP",
            ("ليرة لبنانية", "ليرات لبنانية"),
            ("قرش", "قروش"),
            ("Lebanese pound", "Lebanese pounds"),
            2,
        ),
        CurrencyDefinition::new(
            "SYP",
            ("ليرة سورية", "ليرات سورية"),
            ("قرش", "قروش"),
            ("Syrian pound", "Syrian pounds"),
            2,
        ),
        // Rials
        CurrencyDefinition::new(
            "OMR",
            ("ريال عماني", "ريالات عمانية"),
            ("بيسة", "بيسات"),
            ("Omani rial", "Omani rials"),
            3,
        ),
        CurrencyDefinition::new(
            "QAR",
            ("ريال قطري", "ريالات قطرية"),
            ("درهم", "دراهم"),
            ("Qatari riyal", "Qatari riyals"),
            2,
        ),
        CurrencyDefinition::new(
            "SAR",
            ("ريال سعودي", "ريالات سعودية"),
            ("هللة", "هللات"),
            ("Saudi riyal", "Saudi riyals"),
            2,
        ),
        CurrencyDefinition::new(
            "YER",
            ("ريال يمني", "ريالات يمنية"),
            ("فلس", "فلسات"),
            ("Yemeni rial", "Yemeni rials"),
            2,
        ),
        // Dirhams
        CurrencyDefinition::new(
            "MAD",
            ("درهم مغربي", "دراهم مغربية"),
            ("سنتيم", "سنتيمات"),
            ("Moroccan dirham", "Moroccan dirhams"),
            2,
        ),
        CurrencyDefinition::new(
            "AED",
            ("درهم إماراتي", "دراهم إماراتية"),
            ("فلس", "فلسات"),
            ("UAE dirham", "UAE dirhams"),
            2,
        ),
        // Others
        CurrencyDefinition::new(
            "MRU",
            ("أوقية موريتانية", "أوقيات موريتانية"),
            ("خمس", "أخماس"),
            ("Mauritanian ouguiya", "Mauritanian ouguiyas"),
            2,
        ),
        CurrencyDefinition::new(
            "USD",
            ("دولار أمريكي", "دولارات أمريكية"),
            ("سنت", "سنتات"),
            ("US dollar", "US dollars"),
            2,
        ),
    ];

    definitions.into_iter().map(|d| (d.code, d)).collect()
});

/// Look up a currency by code. Unknown codes silently fall back to the
/// default definition.
pub fn lookup(code: &str) -> &'static CurrencyDefinition {
    REGISTRY.get(code).unwrap_or_else(|| default_currency())
}

/// The definition unknown currency codes resolve to.
pub fn default_currency() -> &'static CurrencyDefinition {
    &REGISTRY[DEFAULT_CODE]
}

/// All registered currency codes, sorted.
pub fn codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let jod = lookup("JOD");
        assert_eq!(jod.code(), "JOD");
        assert_eq!(jod.main_unit(Language::Arabic).singular, "دينار أردني");
        assert_eq!(jod.main_unit(Language::English).plural, "Jordanian dinars");
        assert_eq!(jod.subunit().singular, "فلس");
        assert_eq!(jod.subunit_digits(), 3);
        assert_eq!(jod.subunit_limit(), 1_000);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let def = lookup("ZZZ");
        assert_eq!(def, default_currency());
        assert_eq!(def.code(), "JOD");
    }

    #[test]
    fn test_subunit_digit_widths() {
        // fils and baisa currencies carry three digits, the rest two
        for code in ["JOD", "BHD", "IQD", "KWD", "LYD", "TND", "OMR"] {
            assert_eq!(lookup(code).subunit_digits(), 3, "{}", code);
        }
        for code in ["DZD", "EGP", "SAR", "USD", "AED"] {
            assert_eq!(lookup(code).subunit_digits(), 2, "{}", code);
        }
    }

    #[test]
    fn test_codes_enumerates_registry() {
        let codes = codes();
        assert_eq!(codes.len(), 18);
        assert!(codes.contains(&"JOD"));
        assert!(codes.contains(&"USD"));
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
