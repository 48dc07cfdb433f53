/// Closed set of tokenization strategies, one selected per language before
/// any rows are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStrategy {
    /// Alternating word/non-word spans on a `\w+` boundary.
    Default,
    /// Dictionary-based maximal matching for unsegmented Han script.
    ChineseSegmented,
    /// Wordlist-based boundary detection; Thai has no inter-word spaces.
    ThaiSegmented,
    /// Like Default, but apostrophe suffixes stay attached to their word.
    TurkishApostrophe,
}

// Locale prefix -> strategy, first match wins. Note "zh-" with the dash:
// regional Chinese locales (zh-CN, zh-TW, ...) are segmented, a bare "zh"
// is not a locale the corpus produces.
const STRATEGY_PREFIXES: &[(&str, SegmentStrategy)] = &[
    ("zh-", SegmentStrategy::ChineseSegmented),
    ("th", SegmentStrategy::ThaiSegmented),
    ("tr", SegmentStrategy::TurkishApostrophe),
];

impl SegmentStrategy {
    pub fn for_locale(locale: &str) -> Self {
        STRATEGY_PREFIXES
            .iter()
            .find(|(prefix, _)| locale.starts_with(prefix))
            .map(|(_, strategy)| *strategy)
            .unwrap_or(SegmentStrategy::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentStrategy;

    #[test]
    fn locale_prefixes_select_strategies() {
        assert_eq!(
            SegmentStrategy::for_locale("zh-CN"),
            SegmentStrategy::ChineseSegmented
        );
        assert_eq!(
            SegmentStrategy::for_locale("zh-TW"),
            SegmentStrategy::ChineseSegmented
        );
        assert_eq!(SegmentStrategy::for_locale("th"), SegmentStrategy::ThaiSegmented);
        assert_eq!(
            SegmentStrategy::for_locale("tr"),
            SegmentStrategy::TurkishApostrophe
        );
        assert_eq!(SegmentStrategy::for_locale("en"), SegmentStrategy::Default);
        assert_eq!(SegmentStrategy::for_locale("fi"), SegmentStrategy::Default);
    }

    #[test]
    fn bare_zh_is_not_segmented() {
        assert_eq!(SegmentStrategy::for_locale("zh"), SegmentStrategy::Default);
    }
}
