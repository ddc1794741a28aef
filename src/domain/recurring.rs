use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::Record;
use super::item::FinancialItem;
use crate::errors::{Result, WalletError};
use crate::schedule::{next_payment_date, Frequency};

/// Income that repeats on a fixed frequency and tracks what has been received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringIncome {
    #[serde(flatten)]
    pub item: FinancialItem,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub next_payment_date: NaiveDate,
    #[serde(default)]
    pub total_received: f64,
    #[serde(default)]
    pub received_count: u32,
}

impl RecurringIncome {
    /// Creates an active income whose first due date is projected from
    /// `start_date`.
    pub fn start(
        title: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self> {
        let next_payment_date = next_payment_date(start_date, frequency, today)?;
        Ok(Self {
            item: FinancialItem::new(title, amount, today),
            frequency,
            start_date,
            end_date: None,
            is_active: true,
            next_payment_date,
            total_received: 0.0,
            received_count: 0,
        })
    }

    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn normalized_monthly(&self) -> f64 {
        self.frequency.monthly_equivalent(self.item.amount)
    }

    /// Records one payment and projects the next due date from the previous one.
    pub fn receive_payment(&mut self, today: NaiveDate) -> Result<NaiveDate> {
        if !self.is_active {
            return Err(WalletError::NotAllowed(format!(
                "recurring income `{}` is inactive",
                self.item.title
            )));
        }
        let next = next_payment_date(self.next_payment_date, self.frequency, today)?;
        self.total_received += self.item.amount;
        self.received_count += 1;
        self.next_payment_date = next;
        Ok(next)
    }

    /// Flips the active flag; history stays on the record either way.
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }
}

impl Record for RecurringIncome {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent_income() -> RecurringIncome {
        RecurringIncome::start("Rent", 1000.0, Frequency::Monthly, date(2024, 1, 1), date(2024, 3, 15))
            .unwrap()
    }

    #[test]
    fn creation_projects_from_start_date() {
        let income = rent_income();
        assert_eq!(income.next_payment_date, date(2024, 4, 1));
        assert!(income.is_active);
        assert_eq!(income.received_count, 0);
    }

    #[test]
    fn receiving_advances_counters_and_due_date() {
        let mut income = rent_income();
        let before = income.next_payment_date;
        let next = income.receive_payment(date(2024, 4, 2)).unwrap();
        assert!(next > before);
        assert_eq!(next, date(2024, 5, 1));
        assert_eq!(income.total_received, 1000.0);
        assert_eq!(income.received_count, 1);
    }

    #[test]
    fn receiving_early_still_moves_one_period() {
        let mut income = rent_income();
        let next = income.receive_payment(date(2024, 3, 16)).unwrap();
        assert_eq!(next, date(2024, 5, 1));
    }

    #[test]
    fn inactive_income_rejects_payment_but_keeps_history() {
        let mut income = rent_income();
        income.receive_payment(date(2024, 4, 2)).unwrap();
        assert!(!income.toggle_active());
        assert!(income.receive_payment(date(2024, 5, 2)).is_err());
        assert_eq!(income.received_count, 1);
        assert_eq!(income.total_received, 1000.0);
    }

    #[test]
    fn frequency_serializes_lowercase() {
        let value = serde_json::to_value(rent_income()).unwrap();
        assert_eq!(value["frequency"], "monthly");
        assert_eq!(value["nextPaymentDate"], "2024-04-01");
        assert_eq!(value["isActive"], true);
    }
}
