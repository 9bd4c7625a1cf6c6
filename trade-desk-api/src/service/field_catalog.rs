use crate::domain::catalog::ProductFormConfig;
use crate::domain::product_code::ProductCode;

/// Per-product form definitions used for display and validation.
///
/// The workflow never depends on catalog content; it only uses it to label
/// metadata and to seed blank forms.
pub trait FieldCatalog: Send + Sync {
    /// Returns the form definition for `product`, if the catalog has one.
    fn form_config(&self, product: ProductCode) -> Option<ProductFormConfig>;
}
