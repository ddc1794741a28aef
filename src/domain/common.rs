use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::errors::{Result, WalletError};

/// Anything stored in one of the tracker collections.
pub trait Record {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn amount(&self) -> f64;
}

/// Fresh identifier for a record created in this process.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Removes the record with `id`, returning it when present.
pub fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let index = records.iter().position(|record| record.id() == id)?;
    Some(records.remove(index))
}

pub fn sum_amounts<T: Record>(records: &[T]) -> f64 {
    records.iter().map(Record::amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Incomes,
    Expenses,
    Debts,
    FixedExpenses,
    RecurringIncomes,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Incomes,
        Collection::Expenses,
        Collection::Debts,
        Collection::FixedExpenses,
        Collection::RecurringIncomes,
    ];

    /// Key the collection is persisted under.
    pub fn store_key(&self) -> &'static str {
        match self {
            Collection::Incomes => "financial_incomes",
            Collection::Expenses => "financial_expenses",
            Collection::Debts => "financial_debts",
            Collection::FixedExpenses => "financial_fixedExpenses",
            Collection::RecurringIncomes => "financial_recurringIncomes",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Incomes => "incomes",
            Collection::Expenses => "expenses",
            Collection::Debts => "debts",
            Collection::FixedExpenses => "fixed",
            Collection::RecurringIncomes => "recurring",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "incomes" => Ok(Collection::Incomes),
            "expense" | "expenses" => Ok(Collection::Expenses),
            "debt" | "debts" => Ok(Collection::Debts),
            "fixed" | "fixed-expense" | "fixed-expenses" => Ok(Collection::FixedExpenses),
            "recurring" | "recurring-income" | "recurring-incomes" => {
                Ok(Collection::RecurringIncomes)
            }
            other => Err(WalletError::InvalidInput(format!(
                "unknown collection `{other}` (expected incomes, expenses, debts, fixed, recurring)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keys_match_persisted_layout() {
        assert_eq!(Collection::FixedExpenses.store_key(), "financial_fixedExpenses");
        assert_eq!(Collection::Incomes.store_key(), "financial_incomes");
    }

    #[test]
    fn collection_names_parse_back() {
        for collection in Collection::ALL {
            assert_eq!(collection.name().parse::<Collection>().unwrap(), collection);
        }
        assert!("savings".parse::<Collection>().is_err());
    }
}
