//! # Validation Module
//!
//! Turns raw form strings into typed records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Form Submission                                    │
//! │                                                                         │
//! │  TransactionInput / CustomerInput  (raw strings from the form)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_transaction / validate_customer  ◄── THIS MODULE             │
//! │           │                                                             │
//! │           ├── Err(FormRejection) ─► message shown, field maybe cleared  │
//! │           │                         store untouched                     │
//! │           │                                                             │
//! │           └── Ok(NewTransaction / NewCustomer) ─► RecordStore::append   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence is checked first, field by field in form order, and the first
//! failure wins. Blank fields are reported as missing and left alone. A number
//! field that is present but unusable gets cleared so the user can retype it.
//!
//! ## Usage
//! ```rust
//! use chrono::Utc;
//! use station_core::validation::{validate_transaction, TransactionInput};
//!
//! let input = TransactionInput::new("Jane Doe", "3");
//! let record = validate_transaction(&input, Utc::now()).unwrap();
//! assert_eq!(record.gallons_ordered, 3);
//!
//! let bad = TransactionInput::new("Jane Doe", "zero");
//! let rejection = validate_transaction(&bad, Utc::now()).unwrap_err();
//! assert!(rejection.clear_field);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{NewCustomer, NewTransaction};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Fields
// =============================================================================

/// Every input field on the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CustomerName,
    GallonsOrdered,
    Name,
    Address,
    OrdersThisMonth,
    Remarks,
}

impl FormField {
    /// Human-readable label used in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            FormField::CustomerName => "Customer name",
            FormField::GallonsOrdered => "Gallons ordered",
            FormField::Name => "Name",
            FormField::Address => "Address",
            FormField::OrdersThisMonth => "Orders this month",
            FormField::Remarks => "Remarks",
        }
    }
}

// =============================================================================
// Raw Inputs
// =============================================================================

/// Raw transaction form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionInput {
    pub customer_name: String,
    pub gallons_ordered: String,
}

impl TransactionInput {
    pub fn new(customer_name: impl Into<String>, gallons_ordered: impl Into<String>) -> Self {
        TransactionInput {
            customer_name: customer_name.into(),
            gallons_ordered: gallons_ordered.into(),
        }
    }
}

/// Raw customer form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub address: String,
    pub orders_this_month: String,
    pub remarks: String,
}

impl CustomerInput {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        orders_this_month: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        CustomerInput {
            name: name.into(),
            address: address.into(),
            orders_this_month: orders_this_month.into(),
            remarks: remarks.into(),
        }
    }
}

// =============================================================================
// Rejection
// =============================================================================

/// Why a form submission was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRejection {
    /// The field that failed.
    pub field: FormField,

    /// What was wrong with it.
    pub error: ValidationError,

    /// Whether the form should blank this field.
    pub clear_field: bool,
}

impl FormRejection {
    fn keep(field: FormField, error: ValidationError) -> Self {
        FormRejection {
            field,
            error,
            clear_field: false,
        }
    }

    fn clear(field: FormField, error: ValidationError) -> Self {
        FormRejection {
            field,
            error,
            clear_field: true,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for FormRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for FormRejection {}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use station_core::validation::validate_required;
///
/// assert_eq!(validate_required("Name", "  Jane Doe ").unwrap(), "Jane Doe");
/// assert!(validate_required("Name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, raw: &str) -> ValidationResult<String> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Parses a whole number.
///
/// Any decimal number without a fractional part is accepted, so `"3"`,
/// `"+3"` and `"3.0"` all give 3. Blank input is `Required`, text that is
/// not a number is `NotANumber` and `"2.5"` is `NotAWholeNumber`. Whole
/// values past the `i64` bounds saturate and are left to the range checks.
///
/// ## Example
/// ```rust
/// use station_core::validation::parse_whole_number;
/// use station_core::ValidationError;
///
/// assert_eq!(parse_whole_number("Gallons", "3.0"), Ok(3));
/// assert!(matches!(
///     parse_whole_number("Gallons", "2.5"),
///     Err(ValidationError::NotAWholeNumber { .. })
/// ));
/// ```
pub fn parse_whole_number(field: &str, raw: &str) -> ValidationResult<i64> {
    let value = validate_required(field, raw)?;

    if let Ok(whole) = value.parse::<i64>() {
        return Ok(whole);
    }

    let number = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: field.to_string(),
        })?;

    if number.fract() != 0.0 {
        return Err(ValidationError::NotAWholeNumber {
            field: field.to_string(),
        });
    }

    // `as` saturates at the i64 bounds.
    Ok(number as i64)
}

/// Validates a gallon quantity.
///
/// ## Rules
/// - Must be a whole number
/// - Must be strictly greater than zero
///
/// ## Example
/// ```rust
/// use station_core::validation::validate_gallons;
///
/// assert_eq!(validate_gallons(5).unwrap(), 5);
/// assert!(validate_gallons(0).is_err());
/// assert!(validate_gallons(-1).is_err());
/// ```
pub fn validate_gallons(qty: i64) -> ValidationResult<u32> {
    let field = FormField::GallonsOrdered.label();

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::TooLarge {
        field: field.to_string(),
        max: u32::MAX,
    })
}

/// Validates a monthly order count.
///
/// ## Rules
/// - Must be a whole number
/// - Zero is allowed (new customer), negatives are not
pub fn validate_order_count(count: i64) -> ValidationResult<u32> {
    let field = FormField::OrdersThisMonth.label();

    if count < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    u32::try_from(count).map_err(|_| ValidationError::TooLarge {
        field: field.to_string(),
        max: u32::MAX,
    })
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates a transaction form.
///
/// On success the record is stamped with `now` as its time-in.
pub fn validate_transaction(
    input: &TransactionInput,
    now: DateTime<Utc>,
) -> Result<NewTransaction, FormRejection> {
    let customer_name = required(FormField::CustomerName, &input.customer_name)?;
    let gallons = required(FormField::GallonsOrdered, &input.gallons_ordered)?;

    let gallons_ordered = number(FormField::GallonsOrdered, &gallons, validate_gallons)?;

    Ok(NewTransaction {
        customer_name,
        gallons_ordered,
        time_in: now,
    })
}

/// Validates a customer form.
///
/// Presence of all four fields is checked before the order count is parsed,
/// so a half-filled form always reports the first blank field.
pub fn validate_customer(input: &CustomerInput) -> Result<NewCustomer, FormRejection> {
    let name = required(FormField::Name, &input.name)?;
    let address = required(FormField::Address, &input.address)?;
    let orders = required(FormField::OrdersThisMonth, &input.orders_this_month)?;
    let remarks = required(FormField::Remarks, &input.remarks)?;

    let orders_this_month = number(FormField::OrdersThisMonth, &orders, validate_order_count)?;

    Ok(NewCustomer {
        name,
        address,
        orders_this_month,
        remarks,
    })
}

fn required(field: FormField, raw: &str) -> Result<String, FormRejection> {
    validate_required(field.label(), raw).map_err(|e| FormRejection::keep(field, e))
}

/// Parses and range-checks a present value. Any failure clears the field.
fn number(
    field: FormField,
    value: &str,
    check: fn(i64) -> ValidationResult<u32>,
) -> Result<u32, FormRejection> {
    parse_whole_number(field.label(), value)
        .and_then(check)
        .map_err(|e| FormRejection::clear(field, e))
}

// =============================================================================
// Unit Tests
// =============================================================================
