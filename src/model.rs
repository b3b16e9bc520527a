//! Store resources the pipelines work with, lifted out of JSON:API documents.

use serde_json::Value;

use crate::util::{attribute, is_resource_type, resource_id, resource_name};

pub const APP_TYPE: &str = "apps";
pub const VERSION_TYPE: &str = "appStoreVersions";
pub const LOCALIZATION_TYPE: &str = "appStoreVersionLocalizations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: String,
    pub name: String,
}

impl App {
    pub fn from_resource(resource: &Value) -> Option<Self> {
        if !is_resource_type(resource, APP_TYPE) {
            return None;
        }
        Some(Self {
            id: resource_id(resource),
            name: resource_name(resource),
        })
    }
}

/// Stands in for a version resource that carries no `platform` attribute.
pub const UNKNOWN_PLATFORM: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub id: String,
    pub version_string: String,
    pub platform: String,
}

impl Version {
    pub fn from_resource(resource: &Value) -> Option<Self> {
        if !is_resource_type(resource, VERSION_TYPE) {
            return None;
        }
        Some(Self {
            id: resource_id(resource),
            version_string: attribute(resource, "versionString")?.to_string(),
            platform: attribute(resource, "platform").unwrap_or(UNKNOWN_PLATFORM).to_string(),
        })
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.version_string, self.platform)
    }
}

/// One locale configured on a version. `id` is what the update call targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    pub id: String,
    pub locale: String,
}

impl Localization {
    pub fn from_resource(resource: &Value) -> Option<Self> {
        if !is_resource_type(resource, LOCALIZATION_TYPE) {
            return None;
        }
        Some(Self {
            id: resource_id(resource),
            locale: attribute(resource, "locale")?.to_string(),
        })
    }
}

/// Collects every item of `items` that parses as `T`, silently dropping the rest.
pub fn collect<T>(items: &[Value], parse: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    items.iter().filter_map(parse).collect()
}
