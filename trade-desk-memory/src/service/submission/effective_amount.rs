use trade_desk_api::{ProductCode, SubmissionForm};

/// Amount recorded when a form carries no amount at all.
pub const ZERO_AMOUNT: &str = "0";

/// Product fields probed, in order, when the generic amount is blank.
pub fn amount_fields(product: ProductCode) -> &'static [&'static str] {
    match product {
        ProductCode::FormM => &["invoiceAmount"],
        ProductCode::FormNxp => &["totalExportValue", "exportValue"],
        ProductCode::Paar => &["valueOfGoods", "assessmentValue"],
        ProductCode::ImportLc => &["lcAmount"],
        ProductCode::Bfc => &["totalAmount"],
        ProductCode::ShippingDoc => &["freightAmount", "insuredValue"],
        _ => &[],
    }
}

/// First non-blank amount: the generic amount, then the product fields.
pub fn effective_amount(form: &SubmissionForm, product: ProductCode) -> String {
    let generic = form.amount.trim();
    if !generic.is_empty() {
        return generic.to_string();
    }
    amount_fields(product)
        .iter()
        .find_map(|name| form.field(name))
        .unwrap_or(ZERO_AMOUNT)
        .to_string()
}

pub fn effective_currency(form: &SubmissionForm, default_currency: &str) -> String {
    let generic = form.currency.trim();
    if !generic.is_empty() {
        return generic.to_string();
    }
    form.field("currency").unwrap_or(default_currency).to_string()
}
