//! End-to-end tests for priority-layered merging.

use rstest::rstest;
use serde_json::{Value, json};
use strata_config::{ConfigValue, Mapping, StrataError, merge, merge_with_priority};

fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object literal, got {other:?}"),
    }
}

fn layer(priority: i64, value: Value) -> ConfigValue {
    ConfigValue::from_map(priority, mapping(value))
}

#[test]
fn from_map_round_trips_without_transformation() {
    let data = mapping(json!({"var1": "val1", "nested": {"var2": "val2"}}));
    let value = ConfigValue::from_map(7, data.clone());
    assert_eq!(value.priority(), 7);
    assert_eq!(value.data(), &data);
    assert_eq!(value.into_data(), data);
}

#[test]
fn single_value_merge_is_identity() {
    let value = layer(42, json!({"var1": "val1"}));
    let merged = merge(vec![value.clone()]).expect("single-value merge");
    // same data and same priority, untouched by the default result priority
    assert_eq!(merged, value);
    assert_eq!(merged.priority(), 42);
}

#[test]
fn empty_merge_fails_fast() {
    let err = merge(Vec::new()).expect_err("empty input");
    assert!(
        matches!(err, StrataError::InvalidArgument { .. }),
        "expected InvalidArgument, got {err:?}"
    );
}

#[test]
fn higher_priority_overrides_and_equal_priorities_keep_input_order() {
    let v1 = layer(1, json!({"var1": "val1", "var2": "val2"}));
    let v2 = layer(2, json!({"var2": "val3", "var3": {"var4": "val4"}}));
    let v3 = layer(2, json!({"var3": {"var4": "val5"}}));

    let merged = merge(vec![v1, v2, v3]).expect("three-way merge");
    assert_eq!(
        merged.data(),
        &mapping(json!({
            "var1": "val1",
            "var2": "val3",
            "var3": {"var4": "val5"},
        }))
    );
}

#[test]
fn nested_mappings_are_replaced_wholesale() {
    let low = layer(0, json!({"section": {"a": "1", "b": "2"}}));
    let high = layer(5, json!({"section": {"c": "3"}}));

    let merged = merge(vec![low, high]).expect("two-way merge");
    // no recursive union: the lower-priority keys under "section" are gone
    assert_eq!(
        merged.data(),
        &mapping(json!({"section": {"c": "3"}}))
    );
}

#[test]
fn input_order_does_not_matter_when_priorities_differ() {
    let low = layer(1, json!({"k": "low"}));
    let high = layer(9, json!({"k": "high"}));

    let forward = merge(vec![low.clone(), high.clone()]).expect("forward merge");
    let reverse = merge(vec![high, low]).expect("reverse merge");
    assert_eq!(forward.data(), reverse.data());
    assert_eq!(forward.data().get("k"), Some(&json!("high")));
}

#[rstest]
#[case(0)]
#[case(10)]
#[case(-3)]
fn result_priority_is_the_supplied_parameter(#[case] priority: i64) {
    let v1 = layer(1, json!({"a": "1"}));
    let v2 = layer(2, json!({"b": "2"}));
    let merged = merge_with_priority(vec![v1, v2], priority).expect("merge");
    assert_eq!(merged.priority(), priority);
}

#[test]
fn merge_is_associative_in_effect() {
    let v1 = layer(1, json!({"a": "1", "b": "1"}));
    let v2 = layer(2, json!({"b": "2", "c": "2"}));
    let v3 = layer(3, json!({"c": "3"}));

    let direct = merge(vec![v1.clone(), v2.clone(), v3.clone()]).expect("direct merge");
    let first_pair = merge(vec![v1, v2]).expect("inner merge");
    // re-wrap so the intermediate keeps a priority below v3's
    let staged = merge(vec![
        ConfigValue::from_map(2, first_pair.into_data()),
        v3,
    ])
    .expect("staged merge");
    assert_eq!(direct.data(), staged.data());
}
