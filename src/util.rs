use crate::source::{Scalar, SourceTagSet};
use serde_json::{Map, Value};

/// First item of any collection, or `None` when empty.
pub fn first<I: IntoIterator>(values: I) -> Option<I::Item> {
    values.into_iter().next()
}

/// Text of the first value: the single accessor for "a scalar is required".
pub fn first_text(values: &[Scalar]) -> Option<String> {
    values.first().map(Scalar::to_text)
}

/// Remove every present key, returning their values in `keys` order.
pub fn pop_keys(tags: &mut SourceTagSet, keys: &[&str]) -> Vec<Vec<Scalar>> {
    keys.iter().filter_map(|k| tags.remove(k)).collect()
}

/// Claim all alternative spellings of a key and keep the first one present.
pub fn claim_first_of(tags: &mut SourceTagSet, keys: &[&str]) -> Option<Vec<Scalar>> {
    first(pop_keys(tags, keys))
}

/// Collapse entries that are single-element arrays of a string or integer.
pub fn fold_text_keys(map: &mut Map<String, Value>) {
    for value in map.values_mut() {
        let folded = match value {
            Value::Array(items) if items.len() == 1 => match &items[0] {
                Value::String(_) => Some(items[0].clone()),
                Value::Number(n) if n.is_i64() || n.is_u64() => Some(items[0].clone()),
                _ => None,
            },
            _ => None,
        };
        if let Some(folded) = folded {
            *value = folded;
        }
    }
}
