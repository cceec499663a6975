// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Rename keys written by early builds, which kept the backend URL at the
/// top level as `api_url`.
pub(super) fn migrate_on_load(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(url) = map.remove("api_url") {
                let backend = map
                    .entry("backend")
                    .or_insert_with(|| Value::Object(Default::default()));
                if let Value::Object(backend) = backend {
                    backend.entry("base_url").or_insert(url);
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migrate_moves_api_url() {
        let migrated = migrate_on_load(json!({"api_url": "http://old:8000"}));
        assert_eq!(migrated, json!({"backend": {"base_url": "http://old:8000"}}));
    }

    #[test]
    fn test_migrate_keeps_explicit_base_url() {
        let migrated = migrate_on_load(json!({
            "api_url": "http://old:8000",
            "backend": {"base_url": "http://new:8000"}
        }));
        assert_eq!(migrated["backend"]["base_url"], "http://new:8000");
        assert!(migrated.get("api_url").is_none());
    }

    #[test]
    fn test_deep_merge_overlay_wins() {
        let merged = deep_merge(json!({"a": 1, "b": {"c": 2}}), json!({"b": {"c": 3}}));
        assert_eq!(merged, json!({"a": 1, "b": {"c": 3}}));
    }
}
