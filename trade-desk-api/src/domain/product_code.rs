use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trade product a transaction (and its checker-queue entry) belongs to.
///
/// Serialized with the upper-case product codes used throughout the back office
/// (`FORMM`, `FORMNXP`, `IMPORTLC`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCode {
    FormM,
    FormA,
    FormNxp,
    Paar,
    ImportLc,
    Bfc,
    ShippingDoc,
    FxSales,
    Loan,
    Inwcp,
    DomOutAc,
    Customer,
}

impl ProductCode {
    pub const ALL: [ProductCode; 12] = [
        ProductCode::FormM,
        ProductCode::FormA,
        ProductCode::FormNxp,
        ProductCode::Paar,
        ProductCode::ImportLc,
        ProductCode::Bfc,
        ProductCode::ShippingDoc,
        ProductCode::FxSales,
        ProductCode::Loan,
        ProductCode::Inwcp,
        ProductCode::DomOutAc,
        ProductCode::Customer,
    ];

    /// Wire code, e.g. `FORMNXP`.
    pub fn code(&self) -> &'static str {
        match self {
            ProductCode::FormM => "FORMM",
            ProductCode::FormA => "FORMA",
            ProductCode::FormNxp => "FORMNXP",
            ProductCode::Paar => "PAAR",
            ProductCode::ImportLc => "IMPORTLC",
            ProductCode::Bfc => "BFC",
            ProductCode::ShippingDoc => "SHIPPINGDOC",
            ProductCode::FxSales => "FXSALES",
            ProductCode::Loan => "LOAN",
            ProductCode::Inwcp => "INWCP",
            ProductCode::DomOutAc => "DOMOUTAC",
            ProductCode::Customer => "CUSTOMER",
        }
    }

    /// Human-readable label shown in queue listings.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCode::FormM => "Form M",
            ProductCode::FormA => "Form A",
            ProductCode::FormNxp => "Form NXP",
            ProductCode::Paar => "PAAR",
            ProductCode::ImportLc => "Import LC",
            ProductCode::Bfc => "Bills for Collection",
            ProductCode::ShippingDoc => "Shipping Docs",
            ProductCode::FxSales => "FX Sales",
            ProductCode::Loan => "Trade Loan",
            ProductCode::Inwcp => "Inward Payment",
            ProductCode::DomOutAc => "Outward Payment",
            ProductCode::Customer => "Customer",
        }
    }

    /// Inward and outward payments share the "Payments" tab.
    pub fn is_payment(&self) -> bool {
        matches!(self, ProductCode::Inwcp | ProductCode::DomOutAc)
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCode::ALL
            .iter()
            .copied()
            .find(|product| product.code() == s)
            .ok_or_else(|| format!("Unknown product code: {s}"))
    }
}
