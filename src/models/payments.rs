//! Payment charge models
//!
//! Amounts are integers in the currency's minor unit (cents for USD).

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

string_enum! {
    /// Settlement state of a charge
    pub enum ChargeStatus {
        Pending => "pending",
        Succeeded => "succeeded",
        Failed => "failed",
        Refunded => "refunded",
        PartiallyRefunded => "partially_refunded",
    }
}

/// Parameters for `POST payments/v1/charges`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeCreateParams {
    /// Amount in minor units
    pub amount: u64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Customer to charge
    #[serde(rename = "customerId")]
    pub customer_id: String,
    /// Statement description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ChargeCreateParams {
    /// Create parameters from the required fields
    pub fn new(amount: u64, currency: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer_id: customer_id.into(),
            description: None,
            metadata: None,
        }
    }

    /// Replace the amount
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    /// Replace the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Replace the customer
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

model_schema!(ChargeCreateParams, "ChargeCreateParams", [
    FieldSpec::required("amount", FieldKind::Integer),
    FieldSpec::required("currency", FieldKind::String),
    FieldSpec::required("customerID", FieldKind::String).wire("customerId"),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("metadata", FieldKind::Mixed),
]);

/// Parameters for `GET payments/v1/charges`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeListParams {
    /// Only charges of this customer (optional)
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Only charges in this status (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChargeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ChargeListParams {
    /// Create an unfiltered listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by customer
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Filter by status
    pub fn with_status(mut self, status: impl Into<ChargeStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

model_schema!(ChargeListParams, "ChargeListParams", [
    FieldSpec::optional("customerID", FieldKind::String).wire("customerId"),
    FieldSpec::optional("status", FieldKind::Enum(ChargeStatus::VALUES)),
    FieldSpec::optional("limit", FieldKind::Integer),
    FieldSpec::optional("offset", FieldKind::Integer),
]);

/// Parameters for `POST payments/v1/charges/{id}/refund`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefundParams {
    /// Amount to refund; the full remaining amount when unset (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Refund reason (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RefundParams {
    /// Create a full refund
    pub fn new() -> Self {
        Self::default()
    }

    /// Refund a partial amount
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

model_schema!(RefundParams, "RefundParams", [
    FieldSpec::optional("amount", FieldKind::Integer),
    FieldSpec::optional("reason", FieldKind::String),
]);

/// A payment charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub status: ChargeStatus,
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Total refunded so far, in minor units (optional)
    #[serde(rename = "amountRefunded", skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

model_schema!(Charge, "Charge", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("amount", FieldKind::Integer),
    FieldSpec::required("currency", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(ChargeStatus::VALUES)),
    FieldSpec::optional("customerID", FieldKind::String).wire("customerId"),
    FieldSpec::optional("amountRefunded", FieldKind::Integer),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("metadata", FieldKind::Mixed),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
]);

/// Response of `GET payments/v1/charges`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeListResponse {
    pub charges: Vec<Charge>,
    /// Whether more pages exist (optional)
    #[serde(rename = "hasMore", skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

model_schema!(ChargeListResponse, "ChargeListResponse", [
    FieldSpec::required("charges", FieldKind::Model(Charge::schema)).list(),
    FieldSpec::optional("hasMore", FieldKind::Boolean),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{normalize_item, Item};
    use crate::utils::error::ClientError;
    use serde_json::json;

    #[test]
    fn test_customer_id_remap() {
        let wire = normalize_item(&Item::from(ChargeCreateParams::new(2500, "usd", "cus_1"))).unwrap();
        assert_eq!(wire["customerId"], json!("cus_1"));
        assert_eq!(wire["amount"], json!(2500));
    }

    #[test]
    fn test_fractional_amount_rejected() {
        let raw: Item<ChargeCreateParams> = Item::raw(json!({
            "amount": 12.5,
            "currency": "usd",
            "customerID": "cus_1",
        }));
        let err = normalize_item(&raw).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_empty_refund_is_empty_body() {
        let wire = normalize_item(&Item::from(RefundParams::new())).unwrap();
        assert!(wire.is_empty());
    }
}
