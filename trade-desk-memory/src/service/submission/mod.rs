pub mod effective_amount;
pub mod flow;
pub mod reference;

pub use effective_amount::{amount_fields, effective_amount, effective_currency, ZERO_AMOUNT};
pub use flow::{SubmissionFlow, SubmissionReceipt};
pub use reference::{generate_reference, ReferenceNumber, REFERENCE_SUFFIX_LEN};
