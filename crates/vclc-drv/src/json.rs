//! Bridge from the core's dependency-free [`vclc_par::json::JsonValue`]
//! tree to real `serde_json::Value` text. This conversion - and the
//! `serde_json` dependency it needs - lives here rather than in
//! `vclc-par`, which has no JSON-text dependency of its own.

use vclc_par::json::JsonValue;

pub fn to_serde_json(value: &JsonValue) -> serde_json::Value {
    match value {
        JsonValue::Null => serde_json::Value::Null,
        JsonValue::Bool(b) => serde_json::Value::Bool(*b),
        JsonValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        JsonValue::String(s) => serde_json::Value::String(s.clone()),
        JsonValue::Array(items) => serde_json::Value::Array(items.iter().map(to_serde_json).collect()),
        JsonValue::Object(fields) => {
            let map = fields.iter().map(|(k, v)| (k.clone(), to_serde_json(v))).collect();
            serde_json::Value::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_nested_tree_to_serde_json() {
        let tree = JsonValue::Object(vec![
            ("type".to_string(), JsonValue::String("Program".to_string())),
            (
                "declarations".to_string(),
                JsonValue::Array(vec![JsonValue::Number(1.0)]),
            ),
        ]);
        let json = to_serde_json(&tree);
        assert_eq!(json["type"], "Program");
        assert_eq!(json["declarations"][0], 1.0);
    }
}
