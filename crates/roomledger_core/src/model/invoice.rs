//! Invoice domain model.
//!
//! # Responsibility
//! - Define the billing document shape and its line items.
//! - Validate billing periods and line-item amounts before store mutations.
//!
//! # Invariants
//! - `total_amount` equals the sum of line-item amounts at all times; the
//!   store derives it, callers never supply it.
//! - `balance_due` is zero exactly when `status == Paid`, otherwise equal
//!   to `total_amount`.
//! - `period` matches `YYYY-MM` with a month in `01..=12`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{require_non_empty, EntityId, ValidationError};

static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("valid period regex"));

/// Billing document lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Editable, not yet issued to the tenant.
    Draft,
    /// Issued and awaiting payment.
    Sent,
    /// Settled in full.
    Paid,
    /// Past due date with an outstanding balance.
    Overdue,
    /// Withdrawn; kept for record only.
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One labelled charge on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub id: EntityId,
    pub label: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Periodic billing document tied to a tenant.
///
/// `building_id` / `block_id` / `room_id` are denormalized from the tenant's
/// position in the hierarchy for query convenience; the store derives them
/// and keeps them consistent when the invoice is re-linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,
    pub building_id: EntityId,
    pub block_id: EntityId,
    pub room_id: EntityId,
    pub tenant_id: EntityId,
    /// Billing period as `YYYY-MM`.
    pub period: String,
    pub issue_date: i64,
    pub due_date: i64,
    pub status: InvoiceStatus,
    pub line_items: Vec<InvoiceLineItem>,
    /// Derived: sum of line-item amounts.
    pub total_amount: i64,
    /// Derived: zero when paid, otherwise `total_amount`.
    pub balance_due: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields required to create an invoice for an existing tenant.
///
/// Totals, balance and denormalized hierarchy ids are derived by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub tenant_id: EntityId,
    pub period: String,
    pub issue_date: i64,
    pub due_date: i64,
    pub status: InvoiceStatus,
    pub line_items: Vec<InvoiceLineItem>,
    pub notes: Option<String>,
}

impl NewInvoice {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_period(&self.period)?;
        validate_line_items(&self.line_items)
    }
}

/// Partial update for an invoice. `None` fields are left untouched.
///
/// Providing `status` applies the status-transition timestamp rules;
/// providing `tenant_id` re-links the invoice and re-derives the
/// denormalized hierarchy ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    pub tenant_id: Option<EntityId>,
    pub period: Option<String>,
    pub issue_date: Option<i64>,
    pub due_date: Option<i64>,
    pub status: Option<InvoiceStatus>,
    pub line_items: Option<Vec<InvoiceLineItem>>,
    pub notes: Option<String>,
}

impl InvoicePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(period) = &self.period {
            validate_period(period)?;
        }
        if let Some(items) = &self.line_items {
            validate_line_items(items)?;
        }
        Ok(())
    }
}

fn validate_period(period: &str) -> Result<(), ValidationError> {
    if !PERIOD_RE.is_match(period) {
        return Err(ValidationError::InvalidPeriod(period.to_string()));
    }
    Ok(())
}

fn validate_line_items(items: &[InvoiceLineItem]) -> Result<(), ValidationError> {
    for item in items {
        require_non_empty(&item.label, "invoice_line_item", "label")?;
        if item.amount < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "invoice_line_item.amount",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(label: &str, amount: i64) -> InvoiceLineItem {
        InvoiceLineItem {
            id: Uuid::new_v4(),
            label: label.to_string(),
            amount,
            description: None,
            quantity: None,
            unit: None,
        }
    }

    #[test]
    fn period_accepts_calendar_months_only() {
        for period in ["2025-01", "2025-09", "2025-12"] {
            assert!(validate_period(period).is_ok(), "{period} should be valid");
        }
        for period in ["2025-00", "2025-13", "2025-1", "202501", "25-01", "2025-01-01"] {
            assert!(
                matches!(
                    validate_period(period),
                    Err(ValidationError::InvalidPeriod(_))
                ),
                "{period} should be rejected"
            );
        }
    }

    #[test]
    fn line_items_reject_blank_label_and_negative_amount() {
        let blank = validate_line_items(&[item("  ", 1000)]).unwrap_err();
        assert!(matches!(blank, ValidationError::EmptyField { .. }));

        let negative = validate_line_items(&[item("rent", -1)]).unwrap_err();
        assert!(matches!(negative, ValidationError::NegativeAmount { .. }));

        assert!(validate_line_items(&[item("rent", 0)]).is_ok());
    }
}
