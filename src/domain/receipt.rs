use crate::error::{ReceiptError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out for every processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A receipt whose required fields are all present.
///
/// Numeric, date and time fields are kept as submitted; interpreting them is
/// left to the scoring rules, which treat unparseable values as contributing
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// Wire form of a receipt as received from a client.
///
/// Every field is optional so that a missing field surfaces as a
/// [`ReceiptError::Validation`] naming the field instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemSubmission>>,
    pub total: Option<String>,
}

impl ReceiptSubmission {
    /// Checks that every required field is present and non-empty.
    ///
    /// Fails on the first missing field, in declaration order.
    pub fn validate(self) -> Result<Receipt> {
        let retailer = required(self.retailer, "retailer")?;
        let purchase_date = required(self.purchase_date, "purchaseDate")?;
        let purchase_time = required(self.purchase_time, "purchaseTime")?;
        let items = self
            .items
            .ok_or_else(|| missing("items"))?
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.validate(i))
            .collect::<Result<Vec<_>>>()?;
        let total = required(self.total, "total")?;

        Ok(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

impl ItemSubmission {
    fn validate(self, index: usize) -> Result<Item> {
        Ok(Item {
            short_description: required(
                self.short_description,
                &format!("items[{index}].shortDescription"),
            )?,
            price: required(self.price, &format!("items[{index}].price"))?,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> ReceiptError {
    ReceiptError::Validation(format!("missing required field '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ReceiptSubmission {
        serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
                "total": "6.49"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_validate_complete_submission() {
        let receipt = submission().validate().unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].price, "6.49");
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let mut sub = submission();
        sub.purchase_time = None;

        let err = sub.validate().unwrap_err();
        assert!(matches!(err, ReceiptError::Validation(msg) if msg.contains("purchaseTime")));
    }

    #[test]
    fn test_validate_treats_empty_string_as_missing() {
        let mut sub = submission();
        sub.retailer = Some(String::new());

        let err = sub.validate().unwrap_err();
        assert!(matches!(err, ReceiptError::Validation(msg) if msg.contains("retailer")));
    }

    #[test]
    fn test_validate_reports_item_index() {
        let mut sub = submission();
        sub.items.as_mut().unwrap().push(ItemSubmission {
            short_description: Some("Gum".to_string()),
            price: None,
        });

        let err = sub.validate().unwrap_err();
        assert!(matches!(err, ReceiptError::Validation(msg) if msg.contains("items[1].price")));
    }

    #[test]
    fn test_validate_allows_empty_items() {
        let mut sub = submission();
        sub.items = Some(Vec::new());

        assert!(sub.validate().unwrap().items.is_empty());
    }
}
