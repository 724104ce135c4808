use serde::{Deserialize, Serialize};

/// One order as exported by the commerce feed. Exports are loosely
/// structured: every field may be absent, empty, or carry extra keys we
/// do not care about, so everything defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub date_created: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub options: ItemOptions,
}

/// Free-form key/value options attached to a line item. Only the four
/// donor fields are extracted; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOptions {
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub date_naissance: String,
    #[serde(default)]
    pub donation_amount: String,
}

/// The denormalized output row, one per retained order. Field names
/// double as the CSV header via serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub reference: String,
    pub email: String,
    pub prenom: String,
    pub nom: String,
    pub date_naissance: String,
    pub donation_amount: String,
    pub transaction_date: String,
}

/// Outcome of a full pipeline run. An empty extraction is a valid,
/// successful outcome, not an error; no output file is written for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { path: String, rows: usize },
    Empty,
}
