use crate::domain::model::OrderRecord;
use crate::utils::error::{ExtractError, Result};

/// Decodes raw export text into order records, repairing the two
/// malformations real feeds produce: a single order exported without its
/// enclosing array, and an array body missing its outer brackets.
///
/// Attempts, in order, first success wins:
/// 1. the text as a JSON array of orders
/// 2. the text as a single order object, wrapped in a one-element vec
/// 3. the text wrapped in `[` `]`, retried as an array
///
/// Anything else is `MalformedInput`; no partial result is returned.
pub fn parse_orders(text: &str) -> Result<Vec<OrderRecord>> {
    if let Ok(orders) = serde_json::from_str::<Vec<OrderRecord>>(text) {
        return Ok(orders);
    }

    if let Ok(order) = serde_json::from_str::<OrderRecord>(text) {
        tracing::debug!("Input was a bare order object, wrapping in an array");
        return Ok(vec![order]);
    }

    let wrapped = format!("[{}]", text);
    if let Ok(orders) = serde_json::from_str::<Vec<OrderRecord>>(&wrapped) {
        tracing::debug!("Input was missing its outer array brackets, repaired");
        return Ok(orders);
    }

    Err(ExtractError::MalformedInput)
}
