use serde::{Deserialize, Serialize};

use super::product_code::ProductCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// One input of a product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

impl FormField {
    /// Label of the select option matching `value`, if any.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        if self.field_type != FieldType::Select {
            return None;
        }
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    pub id: String,
    pub title: String,
    pub fields: Vec<FormField>,
}

/// Ordered field sections of a product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormConfig {
    pub product: ProductCode,
    pub product_name: String,
    pub sections: Vec<FormSection>,
}

impl ProductFormConfig {
    pub fn find_field(&self, name: &str) -> Option<&FormField> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|field| field.name == name)
    }

    /// Field names in catalog order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .map(|field| field.name.as_str())
    }
}
