//! Merging configuration values by ascending priority.

use tracing::debug;

use crate::decode::Mapping;
use crate::error::{StrataError, StrataResult};
use crate::value::ConfigValue;

/// Merge configuration values, giving the result priority 0.
///
/// See [`merge_with_priority`] for the layering rules.
///
/// # Errors
///
/// Returns [`StrataError::InvalidArgument`] when `values` is empty.
pub fn merge(values: Vec<ConfigValue>) -> StrataResult<ConfigValue> {
    merge_with_priority(values, 0)
}

/// Merge configuration values into one, layered by ascending priority.
///
/// Values are stably sorted by priority, then their mappings are unioned
/// shallowly: each higher-priority mapping's top-level keys overwrite keys of
/// the same name set by lower-priority mappings. Nested mappings are not
/// merged recursively; a colliding key is replaced wholesale, whatever shape
/// either side gives it. Equal priorities resolve by input order, later
/// values overwriting earlier ones.
///
/// A single value is returned unchanged, keeping its own data and priority.
/// Otherwise the result carries the caller-supplied `priority`, not one
/// derived from the inputs.
///
/// # Errors
///
/// Returns [`StrataError::InvalidArgument`] when `values` is empty.
pub fn merge_with_priority(
    mut values: Vec<ConfigValue>,
    priority: i64,
) -> StrataResult<ConfigValue> {
    if values.is_empty() {
        return Err(StrataError::invalid_argument(
            "cannot merge an empty value list",
        ));
    }
    if values.len() == 1 {
        // the length check above guarantees the pop succeeds
        return values
            .pop()
            .ok_or_else(|| StrataError::invalid_argument("cannot merge an empty value list"));
    }
    debug!(layers = values.len(), priority, "merging configuration");

    values.sort_by_key(ConfigValue::priority);
    let mut merged = Mapping::new();
    for value in values {
        merged.extend(value.into_data());
    }
    Ok(ConfigValue::from_map(priority, merged))
}
