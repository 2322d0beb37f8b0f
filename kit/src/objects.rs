// Object helpers over JSON values.
//
// Each function returns a new value. Arguments that are not JSON objects are
// treated as empty objects.
use serde_json::{Map, Value};

/// Merges `source` into a copy of `target`.
///
/// Arrays under the same key are concatenated, nested objects are merged
/// recursively and any other source value, `null` included, replaces the
/// target's. Keys missing from `source` keep the target value. When either
/// argument is not an object the other one is returned.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return match target {
            Value::Object(_) => target.clone(),
            _ => source.clone(),
        };
    };

    let mut output = target_map.clone();
    for (key, source_value) in source_map {
        let merged = match (target_map.get(key), source_value) {
            (Some(Value::Array(left)), Value::Array(right)) => {
                Value::Array(left.iter().chain(right).cloned().collect())
            }
            (Some(left @ Value::Object(_)), Value::Object(_)) => deep_merge(left, source_value),
            _ => source_value.clone(),
        };
        output.insert(key.clone(), merged);
    }
    Value::Object(output)
}

/// New object holding only the listed keys that `obj` has.
pub fn pick(obj: &Value, keys: &[&str]) -> Value {
    let Value::Object(map) = obj else {
        return Value::Object(Map::new());
    };
    let picked = keys
        .iter()
        .filter_map(|key| map.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect();
    Value::Object(picked)
}

/// New object without the listed keys.
pub fn omit(obj: &Value, keys: &[&str]) -> Value {
    let Value::Object(map) = obj else {
        return Value::Object(Map::new());
    };
    let kept = map
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(kept)
}
