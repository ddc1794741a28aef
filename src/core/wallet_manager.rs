use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::common::{remove_by_id, Record};
use crate::domain::debt::DebtTerms;
use crate::domain::{Collection, Debt, FinancialItem, RecurringIncome, WalletData};
use crate::errors::{Result, WalletError};
use crate::schedule::{Clock, Frequency};
use crate::storage::{load_collection, save_collection, KeyValueStore};
use crate::summary::FinancialSummary;

/// Input for a new recurring income.
#[derive(Debug, Clone)]
pub struct NewRecurringIncome {
    pub title: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Owns the in-memory collections and writes each one back to the store
/// after every mutation.
pub struct WalletManager {
    data: WalletData,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl WalletManager {
    /// Loads every collection; absent, empty, or unreadable keys leave that
    /// collection empty.
    pub fn open(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let mut data = WalletData::default();
        let backend = store.as_ref();
        if let Some(items) = load_collection(backend, Collection::Incomes.store_key()) {
            data.incomes = items;
        }
        if let Some(items) = load_collection(backend, Collection::Expenses.store_key()) {
            data.expenses = items;
        }
        if let Some(items) = load_collection(backend, Collection::Debts.store_key()) {
            data.debts = items;
        }
        if let Some(items) = load_collection(backend, Collection::FixedExpenses.store_key()) {
            data.fixed_expenses = items;
        }
        if let Some(items) = load_collection(backend, Collection::RecurringIncomes.store_key()) {
            data.recurring_incomes = items;
        }
        tracing::info!(
            incomes = data.incomes.len(),
            expenses = data.expenses.len(),
            debts = data.debts.len(),
            fixed = data.fixed_expenses.len(),
            recurring = data.recurring_incomes.len(),
            "wallet opened"
        );
        Self { data, store, clock }
    }

    pub fn data(&self) -> &WalletData {
        &self.data
    }

    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::compute(&self.data)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_income(
        &mut self,
        title: &str,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<String> {
        validate_entry(title, amount)?;
        let item = FinancialItem::new(title.trim(), amount, date).with_description(description);
        let id = item.id.clone();
        commit(self.store.as_ref(), Collection::Incomes, &mut self.data.incomes, |items| {
            items.push(item);
            Ok(())
        })?;
        tracing::info!(%id, amount, "income added");
        Ok(id)
    }

    pub fn add_expense(
        &mut self,
        title: &str,
        amount: f64,
        date: NaiveDate,
        category: Option<String>,
    ) -> Result<String> {
        validate_entry(title, amount)?;
        let item = FinancialItem::new(title.trim(), amount, date).with_category(category);
        let id = item.id.clone();
        commit(self.store.as_ref(), Collection::Expenses, &mut self.data.expenses, |items| {
            items.push(item);
            Ok(())
        })?;
        tracing::info!(%id, amount, "expense added");
        Ok(id)
    }

    /// Fixed expenses are dated on entry.
    pub fn add_fixed_expense(
        &mut self,
        title: &str,
        amount: f64,
        category: Option<String>,
    ) -> Result<String> {
        validate_entry(title, amount)?;
        let item = FinancialItem::new(title.trim(), amount, self.today()).with_category(category);
        let id = item.id.clone();
        commit(
            self.store.as_ref(),
            Collection::FixedExpenses,
            &mut self.data.fixed_expenses,
            |items| {
                items.push(item);
                Ok(())
            },
        )?;
        tracing::info!(%id, amount, "fixed expense added");
        Ok(id)
    }

    pub fn add_debt(&mut self, mut terms: DebtTerms) -> Result<String> {
        validate_entry(&terms.title, terms.amount)?;
        if let Some(payment) = terms.monthly_payment {
            ensure_finite("monthly payment", payment)?;
        }
        if let Some(rate) = terms.interest_rate {
            ensure_finite("interest rate", rate)?;
        }
        terms.title = terms.title.trim().to_string();
        let debt = Debt::open(terms, self.today());
        let id = debt.item.id.clone();
        commit(self.store.as_ref(), Collection::Debts, &mut self.data.debts, |debts| {
            debts.push(debt);
            Ok(())
        })?;
        tracing::info!(%id, "debt added");
        Ok(id)
    }

    pub fn add_recurring_income(&mut self, input: NewRecurringIncome) -> Result<String> {
        validate_entry(&input.title, input.amount)?;
        if let Some(end) = input.end_date {
            if end < input.start_date {
                return Err(WalletError::InvalidInput(format!(
                    "end date {end} precedes start date {}",
                    input.start_date
                )));
            }
        }
        let mut income = RecurringIncome::start(
            input.title.trim(),
            input.amount,
            input.frequency,
            input.start_date,
            self.today(),
        )?
        .with_end_date(input.end_date);
        income.item = income.item.with_description(input.description);
        let id = income.item.id.clone();
        let next = income.next_payment_date;
        commit(
            self.store.as_ref(),
            Collection::RecurringIncomes,
            &mut self.data.recurring_incomes,
            |incomes| {
                incomes.push(income);
                Ok(())
            },
        )?;
        tracing::info!(%id, %next, "recurring income added");
        Ok(id)
    }

    /// Deletes one record; other collections are never touched.
    pub fn delete(&mut self, collection: Collection, id: &str) -> Result<()> {
        let store = self.store.as_ref();
        let data = &mut self.data;
        match collection {
            Collection::Incomes => {
                commit(store, collection, &mut data.incomes, |items| remove(items, collection, id))
            }
            Collection::Expenses => {
                commit(store, collection, &mut data.expenses, |items| remove(items, collection, id))
            }
            Collection::Debts => {
                commit(store, collection, &mut data.debts, |items| remove(items, collection, id))
            }
            Collection::FixedExpenses => commit(store, collection, &mut data.fixed_expenses, |items| {
                remove(items, collection, id)
            }),
            Collection::RecurringIncomes => {
                commit(store, collection, &mut data.recurring_incomes, |items| {
                    remove(items, collection, id)
                })
            }
        }?;
        tracing::info!(%collection, id, "record deleted");
        Ok(())
    }

    /// Applies one monthly installment to the debt and returns the amount paid.
    pub fn pay_debt(&mut self, id: &str) -> Result<f64> {
        let today = self.today();
        let (paid, remaining) =
            commit(self.store.as_ref(), Collection::Debts, &mut self.data.debts, |debts| {
                let debt = find_mut(debts, Collection::Debts, id)?;
                let paid = debt.apply_payment(today)?;
                Ok((paid, debt.remaining_months))
            })?;
        tracing::info!(id, paid, remaining, "debt payment applied");
        Ok(paid)
    }

    /// Records a recurring payment and returns the new due date.
    pub fn receive_payment(&mut self, id: &str) -> Result<NaiveDate> {
        let today = self.today();
        let (next, count) = commit(
            self.store.as_ref(),
            Collection::RecurringIncomes,
            &mut self.data.recurring_incomes,
            |incomes| {
                let income = find_mut(incomes, Collection::RecurringIncomes, id)?;
                let next = income.receive_payment(today)?;
                Ok((next, income.received_count))
            },
        )?;
        tracing::info!(id, %next, count, "recurring payment received");
        Ok(next)
    }

    /// Flips a recurring income between active and inactive.
    pub fn toggle_recurring(&mut self, id: &str) -> Result<bool> {
        let active = commit(
            self.store.as_ref(),
            Collection::RecurringIncomes,
            &mut self.data.recurring_incomes,
            |incomes| Ok(find_mut(incomes, Collection::RecurringIncomes, id)?.toggle_active()),
        )?;
        tracing::info!(id, active, "recurring income toggled");
        Ok(active)
    }
}

/// Applies `change` to a copy of `records`, writes the copy, and only then
/// replaces the in-memory collection. A failed change or write leaves
/// `records` untouched.
fn commit<T, R>(
    store: &dyn KeyValueStore,
    collection: Collection,
    records: &mut Vec<T>,
    change: impl FnOnce(&mut Vec<T>) -> Result<R>,
) -> Result<R>
where
    T: Clone + Serialize,
{
    let mut staged = records.clone();
    let outcome = change(&mut staged)?;
    save_collection(store, collection.store_key(), &staged)?;
    *records = staged;
    Ok(outcome)
}

fn find_mut<'a, T: Record>(records: &'a mut [T], collection: Collection, id: &str) -> Result<&'a mut T> {
    records
        .iter_mut()
        .find(|record| record.id() == id)
        .ok_or_else(|| not_found(collection, id))
}

fn remove<T: Record>(records: &mut Vec<T>, collection: Collection, id: &str) -> Result<()> {
    remove_by_id(records, id)
        .map(|_| ())
        .ok_or_else(|| not_found(collection, id))
}

fn not_found(collection: Collection, id: &str) -> WalletError {
    WalletError::RecordNotFound {
        collection: collection.name(),
        id: id.to_string(),
    }
}

fn validate_entry(title: &str, amount: f64) -> Result<()> {
    if title.trim().is_empty() {
        return Err(WalletError::InvalidInput("title must not be empty".into()));
    }
    ensure_finite("amount", amount)
}

fn ensure_finite(label: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WalletError::InvalidInput(format!("{label} must be a number")))
    }
}
