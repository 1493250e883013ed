//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, FlattenConfig, JsonConfig, MAX_JSON_INDENT};
use super::validator::ConfigValidator;
use crate::tree::CollisionPolicy;
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = CollisionPolicy> {
    prop_oneof![
        Just(CollisionPolicy::KeepFirst),
        Just(CollisionPolicy::KeepLast),
        Just(CollisionPolicy::Error),
    ]
}

fn json_strategy() -> impl Strategy<Value = JsonConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(0usize..=MAX_JSON_INDENT),
    )
        .prop_map(|(pretty, indent)| JsonConfig { pretty, indent })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::option::of(policy_strategy())),
        prop::option::of(json_strategy()),
        prop::option::of(prop_oneof![
            Just("quiet".to_string()),
            Just("normal".to_string()),
            Just("verbose".to_string()),
        ]),
    )
        .prop_map(|(flatten, json, log_mode)| Config {
            flatten: flatten.map(|on_collision| FlattenConfig { on_collision }),
            json,
            log_mode,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher layer win, unset ones fall through
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let expected_policy = high
            .flatten
            .and_then(|f| f.on_collision)
            .or_else(|| low.flatten.and_then(|f| f.on_collision))
            .unwrap_or_default();
        prop_assert_eq!(merged.collision_policy(), expected_policy);

        let expected_indent = high
            .json
            .and_then(|j| j.indent)
            .or_else(|| low.json.and_then(|j| j.indent));
        prop_assert_eq!(merged.json.and_then(|j| j.indent), expected_indent);

        let expected_mode = high.log_mode.clone().or(low.log_mode.clone());
        prop_assert_eq!(merged.log_mode, expected_mode);
    }

    // Empty config is the identity for merge
    #[test]
    fn merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merge is associative
    #[test]
    fn merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut b_then_c = b;
        ConfigMerger::merge_into(&mut b_then_c, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &b_then_c);

        prop_assert_eq!(left.collision_policy(), right.collision_policy());
        prop_assert_eq!(left.pretty(), right.pretty());
        prop_assert_eq!(left.indent(), right.indent());
        prop_assert_eq!(left.log_mode, right.log_mode);
    }

    // Merging valid configs yields a valid config
    #[test]
    fn merge_preserves_validity(a in config_strategy(), b in config_strategy()) {
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML round trip
    #[test]
    fn yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
