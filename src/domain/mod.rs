pub mod common;
pub mod debt;
pub mod item;
pub mod recurring;

pub use common::{Collection, Record};
pub use debt::Debt;
pub use item::FinancialItem;
pub use recurring::RecurringIncome;

use serde::{Deserialize, Serialize};

/// Every collection the tracker keeps, held independently of one another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletData {
    pub incomes: Vec<FinancialItem>,
    pub expenses: Vec<FinancialItem>,
    pub debts: Vec<Debt>,
    pub fixed_expenses: Vec<FinancialItem>,
    pub recurring_incomes: Vec<RecurringIncome>,
}

impl WalletData {
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Incomes => self.incomes.len(),
            Collection::Expenses => self.expenses.len(),
            Collection::Debts => self.debts.len(),
            Collection::FixedExpenses => self.fixed_expenses.len(),
            Collection::RecurringIncomes => self.recurring_incomes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Collection::ALL.iter().all(|c| self.len(*c) == 0)
    }
}
