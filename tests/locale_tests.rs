use std::collections::HashSet;

use asc_translate::{
    CHANGELOG_LOCALES, DESCRIPTION_LOCALES, PipelineKind, TargetLanguage, lookup,
};

#[test]
fn every_table_entry_maps_to_a_target() {
    for table in [CHANGELOG_LOCALES, DESCRIPTION_LOCALES] {
        for (locale, lang) in table {
            assert_eq!(lookup(table, locale), Some(*lang), "{}", locale);
        }
    }
}

#[test]
fn tables_have_no_duplicate_locales() {
    for table in [CHANGELOG_LOCALES, DESCRIPTION_LOCALES] {
        let unique: HashSet<&str> = table.iter().map(|(l, _)| *l).collect();
        assert_eq!(unique.len(), table.len());
    }
}

#[test]
fn description_table_is_a_strict_superset_of_changelog_table() {
    assert_eq!(CHANGELOG_LOCALES.len(), 22);
    assert_eq!(DESCRIPTION_LOCALES.len(), 30);
    for (locale, lang) in CHANGELOG_LOCALES {
        assert_eq!(lookup(DESCRIPTION_LOCALES, locale), Some(*lang));
    }
    for extra in ["en-GB", "et", "ko", "lt", "lv", "nb", "pt-BR", "sl"] {
        assert!(lookup(CHANGELOG_LOCALES, extra).is_none(), "{}", extra);
        assert!(lookup(DESCRIPTION_LOCALES, extra).is_some(), "{}", extra);
    }
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert_eq!(
        lookup(CHANGELOG_LOCALES, "de-DE"),
        Some(TargetLanguage::German)
    );
    assert_eq!(lookup(CHANGELOG_LOCALES, "de-de"), None);
    assert_eq!(lookup(CHANGELOG_LOCALES, "DE-DE"), None);
    assert_eq!(lookup(CHANGELOG_LOCALES, "de"), None);
    assert_eq!(lookup(CHANGELOG_LOCALES, " de-DE"), None);
    assert_eq!(lookup(CHANGELOG_LOCALES, "xx-YY"), None);
    assert_eq!(lookup(CHANGELOG_LOCALES, ""), None);
}

#[test]
fn regional_variants_pick_the_right_deepl_code() {
    assert_eq!(
        lookup(DESCRIPTION_LOCALES, "pt-BR").map(TargetLanguage::code),
        Some("PT-BR")
    );
    assert_eq!(
        lookup(DESCRIPTION_LOCALES, "pt-PT").map(TargetLanguage::code),
        Some("PT-PT")
    );
    assert_eq!(
        lookup(DESCRIPTION_LOCALES, "en-GB").map(TargetLanguage::code),
        Some("EN-GB")
    );
    assert_eq!(
        lookup(CHANGELOG_LOCALES, "zh-Hans").map(TargetLanguage::code),
        Some("ZH")
    );
    assert_eq!(TargetLanguage::Norwegian.to_string(), "NB");
}

#[test]
fn pipeline_kinds_use_their_own_tables() {
    assert_eq!(PipelineKind::Changelog.locale_table().len(), 22);
    assert_eq!(PipelineKind::Description.locale_table().len(), 30);
    assert_eq!(PipelineKind::Changelog.field(), "whatsNew");
    assert_eq!(PipelineKind::Description.field(), "description");
}
