//! # Form Drafts
//!
//! Holds the uncommitted values of the two entry forms.
//!
//! ```text
//! typing ──► draft fields ──► submit()
//!                               │
//!                ┌──────────────┴──────────────┐
//!                ▼                             ▼
//!          Ok(record)                    Err(rejection)
//!          all fields reset              only the flagged field
//!                                        is cleared (if asked)
//! ```
//!
//! A draft never touches the record store. The caller appends the returned
//! record. The dashboard keeps one draft of each form in its station state
//! and fills it from every add request, so the draft always mirrors what
//! the form on screen should show.

use crate::clock::Clock;
use crate::types::{NewCustomer, NewTransaction};
use crate::validation::{
    validate_customer, validate_transaction, CustomerInput, FormField, FormRejection,
    TransactionInput,
};

/// Draft for the "Add New Transaction" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    input: TransactionInput,
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every draft value at once.
    pub fn fill(&mut self, input: TransactionInput) {
        self.input = input;
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.input.customer_name = value.into();
    }

    pub fn set_gallons_ordered(&mut self, value: impl Into<String>) {
        self.input.gallons_ordered = value.into();
    }

    /// Current draft values.
    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    /// Validates the draft.
    ///
    /// Resets the form on success; on rejection clears the offending field
    /// when the rejection asks for it.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<NewTransaction, FormRejection> {
        match validate_transaction(&self.input, clock.now()) {
            Ok(record) => {
                self.input = TransactionInput::default();
                Ok(record)
            }
            Err(rejection) => {
                if rejection.clear_field {
                    self.clear(rejection.field);
                }
                Err(rejection)
            }
        }
    }

    fn clear(&mut self, field: FormField) {
        match field {
            FormField::CustomerName => self.input.customer_name.clear(),
            FormField::GallonsOrdered => self.input.gallons_ordered.clear(),
            _ => {}
        }
    }
}

/// Draft for the "Add New Customer" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    input: CustomerInput,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every draft value at once.
    pub fn fill(&mut self, input: CustomerInput) {
        self.input = input;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.input.name = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.input.address = value.into();
    }

    pub fn set_orders_this_month(&mut self, value: impl Into<String>) {
        self.input.orders_this_month = value.into();
    }

    pub fn set_remarks(&mut self, value: impl Into<String>) {
        self.input.remarks = value.into();
    }

    pub fn input(&self) -> &CustomerInput {
        &self.input
    }

    /// Validates the draft. Same reset/clear rules as [`TransactionForm::submit`].
    pub fn submit(&mut self) -> Result<NewCustomer, FormRejection> {
        match validate_customer(&self.input) {
            Ok(record) => {
                self.input = CustomerInput::default();
                Ok(record)
            }
            Err(rejection) => {
                if rejection.clear_field {
                    self.clear(rejection.field);
                }
                Err(rejection)
            }
        }
    }

    fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.input.name.clear(),
            FormField::Address => self.input.address.clear(),
            FormField::OrdersThisMonth => self.input.orders_this_month.clear(),
            FormField::Remarks => self.input.remarks.clear(),
            _ => {}
        }
    }
}
