use serde::{self, Deserialize, Serialize};

/// A scalar form field. Front-ends send dropdown values either as strings
/// or as bare JSON numbers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(serde_json::Number),
}

impl FormValue {
    pub fn as_text(&self) -> String {
        match self {
            FormValue::Text(text) => text.clone(),
            FormValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EnhanceForm {
    /// Article or paragraph to expand.
    #[serde(default)]
    pub textarea1: Option<FormValue>,
    /// Extra details appended after the article.
    #[serde(default)]
    pub textarea2: Option<FormValue>,
    /// Creativity level, tenths of a temperature point.
    #[serde(default)]
    pub dropdown1: Option<FormValue>,
    /// Target article length in characters.
    #[serde(default)]
    pub dropdown2: Option<FormValue>,
    /// Model override.
    #[serde(default)]
    pub dropdown3: Option<FormValue>,
}

fn field_text(value: &Option<FormValue>) -> String {
    value.as_ref().map(FormValue::as_text).unwrap_or_default()
}

impl EnhanceForm {
    pub fn article(&self) -> String {
        field_text(&self.textarea1)
    }

    pub fn details(&self) -> String {
        field_text(&self.textarea2)
    }

    pub fn creativity(&self) -> String {
        field_text(&self.dropdown1)
    }

    pub fn char_count(&self) -> String {
        field_text(&self.dropdown2)
    }

    pub fn model(&self) -> String {
        field_text(&self.dropdown3)
    }
}
