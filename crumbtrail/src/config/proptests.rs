//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{2}"),
        prop::option::of("[a-z]{2}"),
        prop::option::of("[A-Za-z ]{1,12}"),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(locale, fallback_locale, root_label, key_prefix)| Config {
            locale,
            fallback_locale,
            root_label,
            key_prefix,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn merging_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merging_into_empty_copies(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merging_is_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn higher_precedence_wins(base in config_strategy(), layer in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &layer);
        prop_assert_eq!(merged.locale, layer.locale.or(base.locale));
        prop_assert_eq!(merged.root_label, layer.root_label.or(base.root_label));
    }
}
