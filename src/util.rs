use serde_json::Value;

pub fn resource_id(resource: &Value) -> String {
    resource
        .get("id")
        .and_then(|i| i.as_str())
        .unwrap_or("")
        .to_string()
}

pub fn is_resource_type(resource: &Value, expected: &str) -> bool {
    resource
        .get("type")
        .and_then(|t| t.as_str())
        .map(|t| t == expected)
        .unwrap_or(false)
}

pub fn attribute<'a>(resource: &'a Value, key: &str) -> Option<&'a str> {
    resource
        .get("attributes")
        .and_then(|a| a.get(key))
        .and_then(|s| s.as_str())
}

/// Display name for an app resource: its `name`, else its `bundleId`, else its id.
pub fn resource_name(resource: &Value) -> String {
    if let Some(s) = attribute(resource, "name") {
        return s.to_string();
    }
    if let Some(s) = attribute(resource, "bundleId") {
        return s.to_string();
    }
    resource
        .get("id")
        .and_then(|i| i.as_str())
        .unwrap_or("<unknown>")
        .to_string()
}
