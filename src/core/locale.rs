//! Locale conventions for numbers and dates.
//!
//! A small built-in table covering the markets the booking service sells
//! into. Tags are matched case-insensitively and accept `_` or `-`.

/// Number and date conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Canonical tag, e.g. "en_US".
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    /// chrono `strftime` pattern for calendar dates.
    pub date_pattern: &'static str,
}

/// Locale used when nothing else is configured.
pub const FALLBACK_LOCALE: &str = "en_US";

impl Locale {
    /// Look up a locale tag. A bare language ("de") resolves to the first
    /// entry for that language.
    pub fn find(tag: &str) -> Option<&'static Locale> {
        let normalized = tag.trim().replace('-', "_");
        if let Some(locale) = LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
        {
            return Some(locale);
        }
        if normalized.len() == 2 {
            return LOCALES
                .iter()
                .find(|l| l.language().eq_ignore_ascii_case(&normalized));
        }
        None
    }

    /// Look up `tag`, falling back to `default`, then to [`FALLBACK_LOCALE`].
    pub fn resolve(tag: Option<&str>, default: &str) -> &'static Locale {
        tag.and_then(Self::find)
            .or_else(|| Self::find(default))
            .unwrap_or(&LOCALES[0])
    }

    /// Two-letter language part of the tag.
    pub fn language(&self) -> &'static str {
        &self.tag[..2]
    }
}

// First entry must be FALLBACK_LOCALE.
static LOCALES: &[Locale] = &[
    locale("en_US", '.', ',', "%m/%d/%Y"),
    locale("en_GB", '.', ',', "%d/%m/%Y"),
    locale("en_AU", '.', ',', "%d/%m/%Y"),
    locale("en_SG", '.', ',', "%d/%m/%Y"),
    locale("id_ID", ',', '.', "%d/%m/%Y"),
    locale("de_DE", ',', '.', "%d.%m.%Y"),
    locale("de_AT", ',', '.', "%d.%m.%Y"),
    locale("de_CH", '.', '\'', "%d.%m.%Y"),
    locale("fr_FR", ',', ' ', "%d/%m/%Y"),
    locale("es_ES", ',', '.', "%d/%m/%Y"),
    locale("it_IT", ',', '.', "%d/%m/%Y"),
    locale("nl_NL", ',', '.', "%d-%m-%Y"),
    locale("pt_BR", ',', '.', "%d/%m/%Y"),
    locale("sv_SE", ',', ' ', "%Y-%m-%d"),
    locale("pl_PL", ',', ' ', "%d.%m.%Y"),
    locale("ja_JP", '.', ',', "%Y/%m/%d"),
    locale("zh_CN", '.', ',', "%Y-%m-%d"),
    locale("ko_KR", '.', ',', "%Y. %m. %d."),
    locale("th_TH", '.', ',', "%d/%m/%Y"),
    locale("ms_MY", '.', ',', "%d/%m/%Y"),
];

const fn locale(
    tag: &'static str,
    decimal_separator: char,
    group_separator: char,
    date_pattern: &'static str,
) -> Locale {
    Locale {
        tag,
        decimal_separator,
        group_separator,
        date_pattern,
    }
}
