use std::fmt;

/// Target language codes accepted by DeepL's `target_lang` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    EnglishAmerican,
    EnglishBritish,
    Chinese,
    Czech,
    Danish,
    Dutch,
    Estonian,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Latvian,
    Lithuanian,
    Norwegian,
    Polish,
    PortugueseBrazilian,
    PortugueseEuropean,
    Romanian,
    Russian,
    Slovak,
    Slovenian,
    Spanish,
    Swedish,
    Turkish,
    Ukrainian,
}

impl TargetLanguage {
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::EnglishAmerican => "EN-US",
            TargetLanguage::EnglishBritish => "EN-GB",
            TargetLanguage::Chinese => "ZH",
            TargetLanguage::Czech => "CS",
            TargetLanguage::Danish => "DA",
            TargetLanguage::Dutch => "NL",
            TargetLanguage::Estonian => "ET",
            TargetLanguage::Finnish => "FI",
            TargetLanguage::French => "FR",
            TargetLanguage::German => "DE",
            TargetLanguage::Greek => "EL",
            TargetLanguage::Hungarian => "HU",
            TargetLanguage::Indonesian => "ID",
            TargetLanguage::Italian => "IT",
            TargetLanguage::Japanese => "JA",
            TargetLanguage::Korean => "KO",
            TargetLanguage::Latvian => "LV",
            TargetLanguage::Lithuanian => "LT",
            TargetLanguage::Norwegian => "NB",
            TargetLanguage::Polish => "PL",
            TargetLanguage::PortugueseBrazilian => "PT-BR",
            TargetLanguage::PortugueseEuropean => "PT-PT",
            TargetLanguage::Romanian => "RO",
            TargetLanguage::Russian => "RU",
            TargetLanguage::Slovak => "SK",
            TargetLanguage::Slovenian => "SL",
            TargetLanguage::Spanish => "ES",
            TargetLanguage::Swedish => "SV",
            TargetLanguage::Turkish => "TR",
            TargetLanguage::Ukrainian => "UK",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// App Store locale code to DeepL target language, keyed by exact locale string.
pub type LocaleTable = [(&'static str, TargetLanguage)];

/// Locales the changelog ("What's New") pipeline translates into.
pub const CHANGELOG_LOCALES: &LocaleTable = &[
    ("en-US", TargetLanguage::EnglishAmerican),
    ("zh-Hans", TargetLanguage::Chinese),
    ("cs", TargetLanguage::Czech),
    ("da", TargetLanguage::Danish),
    ("nl-NL", TargetLanguage::Dutch),
    ("fi", TargetLanguage::Finnish),
    ("fr-FR", TargetLanguage::French),
    ("de-DE", TargetLanguage::German),
    ("el", TargetLanguage::Greek),
    ("hu", TargetLanguage::Hungarian),
    ("id", TargetLanguage::Indonesian),
    ("it", TargetLanguage::Italian),
    ("ja", TargetLanguage::Japanese),
    ("pl", TargetLanguage::Polish),
    ("pt-PT", TargetLanguage::PortugueseEuropean),
    ("ro", TargetLanguage::Romanian),
    ("ru", TargetLanguage::Russian),
    ("sk", TargetLanguage::Slovak),
    ("es-ES", TargetLanguage::Spanish),
    ("sv", TargetLanguage::Swedish),
    ("tr", TargetLanguage::Turkish),
    ("uk", TargetLanguage::Ukrainian),
];

/// Locales the description pipeline translates into.
///
/// Kept apart from [`CHANGELOG_LOCALES`]: it covers eight more locales
/// (`en-GB`, `et`, `ko`, `lt`, `lv`, `nb`, `pt-BR`, `sl`) and the two lists
/// have never been confirmed to be meant identical.
pub const DESCRIPTION_LOCALES: &LocaleTable = &[
    ("en-US", TargetLanguage::EnglishAmerican),
    ("zh-Hans", TargetLanguage::Chinese),
    ("cs", TargetLanguage::Czech),
    ("da", TargetLanguage::Danish),
    ("nl-NL", TargetLanguage::Dutch),
    ("fi", TargetLanguage::Finnish),
    ("fr-FR", TargetLanguage::French),
    ("de-DE", TargetLanguage::German),
    ("el", TargetLanguage::Greek),
    ("hu", TargetLanguage::Hungarian),
    ("id", TargetLanguage::Indonesian),
    ("it", TargetLanguage::Italian),
    ("ja", TargetLanguage::Japanese),
    ("pl", TargetLanguage::Polish),
    ("pt-PT", TargetLanguage::PortugueseEuropean),
    ("ro", TargetLanguage::Romanian),
    ("ru", TargetLanguage::Russian),
    ("sk", TargetLanguage::Slovak),
    ("es-ES", TargetLanguage::Spanish),
    ("sv", TargetLanguage::Swedish),
    ("tr", TargetLanguage::Turkish),
    ("uk", TargetLanguage::Ukrainian),
    ("en-GB", TargetLanguage::EnglishBritish),
    ("et", TargetLanguage::Estonian),
    ("ko", TargetLanguage::Korean),
    ("lt", TargetLanguage::Lithuanian),
    ("lv", TargetLanguage::Latvian),
    ("nb", TargetLanguage::Norwegian),
    ("pt-BR", TargetLanguage::PortugueseBrazilian),
    ("sl", TargetLanguage::Slovenian),
];

/// Exact, case-sensitive lookup. `None` means DeepL has no target for this locale.
pub fn lookup(table: &LocaleTable, locale: &str) -> Option<TargetLanguage> {
    table
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, lang)| *lang)
}
