use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use trade_desk_api::{FieldCatalog, ProductCode, ProductFormConfig};

/// Shown in place of an empty metadata value.
pub const EMPTY_DISPLAY_VALUE: &str = "-";

/// Field catalog registry; form definitions are registered by the caller.
#[derive(Default)]
pub struct InMemoryFieldCatalog {
    configs: RwLock<HashMap<ProductCode, ProductFormConfig>>,
}

impl InMemoryFieldCatalog {
    pub fn new(configs: impl IntoIterator<Item = ProductFormConfig>) -> Self {
        let catalog = Self::default();
        for config in configs {
            catalog.register(config);
        }
        catalog
    }

    /// Registers the form for `config.product`, replacing any earlier one.
    pub fn register(&self, config: ProductFormConfig) {
        self.configs.write().insert(config.product, config);
    }
}

impl FieldCatalog for InMemoryFieldCatalog {
    fn form_config(&self, product: ProductCode) -> Option<ProductFormConfig> {
        self.configs.read().get(&product).cloned()
    }
}

/// Every catalog field of `product` mapped to an empty value.
pub fn blank_form_fields(catalog: &dyn FieldCatalog, product: ProductCode) -> BTreeMap<String, String> {
    catalog
        .form_config(product)
        .map(|config| {
            config
                .field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect()
        })
        .unwrap_or_default()
}

/// Label for a metadata key: the catalog label when known, otherwise the
/// camelCase key spelled out ("invoiceAmount" becomes "Invoice Amount").
pub fn field_label(catalog: &dyn FieldCatalog, product: ProductCode, name: &str) -> String {
    catalog
        .form_config(product)
        .and_then(|config| config.find_field(name).map(|field| field.label.clone()))
        .unwrap_or_else(|| humanize(name))
}

/// Display text for a metadata value.
pub fn display_value(catalog: &dyn FieldCatalog, product: ProductCode, name: &str, value: &str) -> String {
    if value.trim().is_empty() {
        return EMPTY_DISPLAY_VALUE.to_string();
    }
    catalog
        .form_config(product)
        .and_then(|config| {
            config
                .find_field(name)
                .and_then(|field| field.option_label(value))
                .map(str::to_string)
        })
        .unwrap_or_else(|| value.to_string())
}

fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}
