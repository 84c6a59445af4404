//! Form and form element types.
//!
//! A [`Form`] is a declarative description of fields and layout. Rendering
//! is left to the front-end helper that receives it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete form definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Form identifier (e.g., "ask-validation").
    pub form_id: String,

    /// Unique build ID for this form instance.
    pub form_build_id: String,

    /// Form action URL. Empty means "post back to the current page".
    pub action: String,

    /// HTTP method ("post" or "get").
    pub method: String,

    /// CSS class of the `<form>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,

    /// Form elements keyed by name.
    pub elements: BTreeMap<String, FormElement>,
}

impl Form {
    /// Create a new form with the given ID.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            form_build_id: uuid::Uuid::new_v4().to_string(),
            action: String::new(),
            method: "post".to_string(),
            css_class: None,
            elements: BTreeMap::new(),
        }
    }

    /// Set the form action URL.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the form method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the CSS class of the form.
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Append an element. Elements are laid out in insertion order.
    pub fn element(mut self, name: impl Into<String>, mut element: FormElement) -> Self {
        element.weight = i32::try_from(self.elements.len()).unwrap_or(i32::MAX) * 10;
        self.elements.insert(name.into(), element);
        self
    }

    /// Get an element by name.
    pub fn get_element(&self, name: &str) -> Option<&FormElement> {
        self.elements.get(name)
    }

    /// Get elements sorted by weight.
    pub fn sorted_elements(&self) -> Vec<(&String, &FormElement)> {
        let mut elements: Vec<_> = self.elements.iter().collect();
        elements.sort_by_key(|(_, el)| el.weight);
        elements
    }

    /// Names of the elements in layout order.
    pub fn layout(&self) -> Vec<&str> {
        self.sorted_elements()
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// A form element definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormElement {
    /// Element type with type-specific configuration.
    #[serde(flatten)]
    pub element_type: ElementType,

    /// Element label. Modal forms leave it empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Whether this field is required.
    #[serde(default)]
    pub required: bool,

    /// Sort weight (lower = appears first).
    #[serde(default)]
    pub weight: i32,

    /// Whether this element is disabled.
    #[serde(default)]
    pub disabled: bool,

    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Extra CSS class (e.g. "md-editor").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl FormElement {
    /// Create a textfield element.
    pub fn textfield() -> Self {
        Self::new(ElementType::Textfield { max_length: None })
    }

    /// Create a textarea element.
    pub fn textarea() -> Self {
        Self::new(ElementType::Textarea { rows: None })
    }

    /// Create a select element.
    pub fn select(options: Vec<(String, String)>) -> Self {
        Self::new(ElementType::Select {
            options,
            multiple: false,
        })
    }

    /// Create a multi-select element.
    pub fn multi_select(options: Vec<(String, String)>) -> Self {
        Self::new(ElementType::Select {
            options,
            multiple: true,
        })
    }

    /// Create a checkbox element.
    pub fn checkbox() -> Self {
        Self::new(ElementType::Checkbox)
    }

    /// Create a hidden field.
    pub fn hidden() -> Self {
        Self::new(ElementType::Hidden)
    }

    /// Create a file upload field.
    pub fn file() -> Self {
        Self::new(ElementType::File)
    }

    /// Create a submit button.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(ElementType::Button {
            label: label.into(),
        })
    }

    /// Create a markup element (display-only HTML).
    pub fn markup(value: impl Into<String>) -> Self {
        Self::new(ElementType::Markup {
            value: value.into(),
        })
    }

    fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            label: None,
            default_value: None,
            required: false,
            weight: 0,
            disabled: false,
            placeholder: None,
            css_class: None,
        }
    }

    /// Set the element label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set max length for textfield.
    pub fn max_length(mut self, max: usize) -> Self {
        if let ElementType::Textfield { ref mut max_length } = self.element_type {
            *max_length = Some(max);
        }
        self
    }

    /// Set the visible row count of a textarea.
    pub fn rows(mut self, count: u32) -> Self {
        if let ElementType::Textarea { ref mut rows } = self.element_type {
            *rows = Some(count);
        }
        self
    }

    /// Mark as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the extra CSS class.
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }
}

/// Element type variants with type-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementType {
    /// Single-line text input.
    Textfield {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },

    /// Multi-line text input.
    Textarea {
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<u32>,
    },

    /// Dropdown select. Options are `(value, label)` pairs.
    Select {
        options: Vec<(String, String)>,
        #[serde(default)]
        multiple: bool,
    },

    /// Single checkbox.
    Checkbox,

    /// Hidden field.
    Hidden,

    /// File upload.
    File,

    /// Submit button.
    Button { label: String },

    /// Display-only markup.
    Markup { value: String },
}
