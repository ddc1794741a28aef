use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::Record;
use super::item::FinancialItem;
use crate::errors::{Result, WalletError};

/// Installment debt. `interest_rate` is stored for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(flatten)]
    pub item: FinancialItem,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,
    pub total_months: u32,
    pub remaining_months: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<NaiveDate>,
}

/// Terms captured when a debt is first entered.
#[derive(Debug, Clone)]
pub struct DebtTerms {
    pub title: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub monthly_payment: Option<f64>,
    pub total_months: u32,
    pub start_date: NaiveDate,
    pub interest_rate: Option<f64>,
}

impl Debt {
    /// Opens a debt entered on `today` with nothing paid yet.
    pub fn open(terms: DebtTerms, today: NaiveDate) -> Self {
        Self {
            item: FinancialItem::new(terms.title, terms.amount, today),
            due_date: terms.due_date,
            interest_rate: terms.interest_rate,
            monthly_payment: terms.monthly_payment,
            total_months: terms.total_months,
            remaining_months: terms.total_months,
            start_date: terms.start_date,
            paid_amount: 0.0,
            last_payment_date: None,
        }
    }

    /// Principal not yet covered by payments. Negative when overpaid.
    pub fn remaining_amount(&self) -> f64 {
        self.item.amount - self.paid_amount
    }

    fn installment(&self) -> Option<f64> {
        self.monthly_payment.filter(|payment| *payment > 0.0)
    }

    /// Whether a monthly installment can be applied.
    pub fn can_pay(&self) -> bool {
        self.remaining_months > 0 && self.installment().is_some()
    }

    /// Applies one installment stamped with `today` and returns the amount paid.
    /// Settled debts and debts without an installment are left untouched.
    pub fn apply_payment(&mut self, today: NaiveDate) -> Result<f64> {
        let payment = match self.installment() {
            Some(payment) if self.remaining_months > 0 => payment,
            Some(_) => {
                return Err(WalletError::NotAllowed(format!(
                    "debt `{}` has no remaining installments",
                    self.item.title
                )))
            }
            None => {
                return Err(WalletError::NotAllowed(format!(
                    "debt `{}` has no monthly payment set",
                    self.item.title
                )))
            }
        };
        self.paid_amount += payment;
        self.remaining_months = self.remaining_months.saturating_sub(1);
        self.last_payment_date = Some(today);
        Ok(payment)
    }
}

impl Record for Debt {
    fn id(&self) -> &str {
        &self.item.id
    }

    fn title(&self) -> &str {
        &self.item.title
    }

    fn amount(&self) -> f64 {
        self.item.amount
    }
}
