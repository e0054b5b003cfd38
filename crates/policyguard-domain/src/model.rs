use crate::error::PolicyError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Serialized resource arguments, keyed by property name.
pub type Properties = BTreeMap<String, Value>;

/// One infrastructure resource under evaluation.
///
/// The resource type is guaranteed non-empty: both `new` and deserialization
/// reject an empty type. Fields are read-only once constructed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawResource")]
pub struct ResourceDescriptor {
    resource_type: String,
    name: Option<String>,
    properties: Properties,
}

#[derive(Deserialize)]
struct RawResource {
    #[serde(rename = "type")]
    resource_type: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: Properties,
}

impl TryFrom<RawResource> for ResourceDescriptor {
    type Error = PolicyError;

    fn try_from(raw: RawResource) -> Result<Self, Self::Error> {
        let resource = ResourceDescriptor::new(raw.resource_type, raw.properties)?;
        Ok(match raw.name {
            Some(name) => resource.with_name(name),
            None => resource,
        })
    }
}

impl ResourceDescriptor {
    pub fn new(
        resource_type: impl Into<String>,
        properties: Properties,
    ) -> Result<Self, PolicyError> {
        let resource_type = resource_type.into();
        if resource_type.is_empty() {
            return Err(PolicyError::EmptyResourceType);
        }
        Ok(Self {
            resource_type,
            name: None,
            properties,
        })
    }

    /// Attach the logical resource name used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// Short lowercase name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
