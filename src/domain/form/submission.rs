use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata of an uploaded file. The bytes themselves never reach the form
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Text after the last dot of the file name, if any.
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    pub fn has_extension(&self, expected: &str) -> bool {
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
    }
}

/// Raw values posted for one form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    values: BTreeMap<String, Value>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_file(self, name: impl Into<String>, file: &UploadedFile) -> Self {
        let value = serde_json::json!({ "name": file.name, "size": file.size });
        self.with(name, value)
    }

    /// Scalar value rendered as text. Numbers and booleans are accepted so
    /// that JSON clients can post `"pk": 3`.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// Checkbox semantics: absent, `false`, `"false"`, `"0"`, `"off"` and the
    /// empty string are unchecked.
    pub fn flag(&self, name: &str) -> bool {
        match self.values.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(value)) => *value,
            Some(Value::Number(value)) => value.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(value)) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "" | "false" | "0" | "off"
            ),
            Some(_) => true,
        }
    }

    /// Multi-valued field. A single scalar counts as a one-item list.
    pub fn list(&self, name: &str) -> Vec<String> {
        match self.values.get(name) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(value) => scalar_text(value)
                .filter(|text| !text.is_empty())
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn file(&self, name: &str) -> Option<UploadedFile> {
        match self.values.get(name)? {
            value @ Value::Object(_) => serde_json::from_value(value.clone()).ok(),
            Value::String(file_name) if !file_name.is_empty() => {
                Some(UploadedFile::new(file_name.clone(), 0))
            }
            _ => None,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
