//! Derived totals shown on the dashboard and in the report.

use serde::Serialize;

use crate::domain::common::sum_amounts;
use crate::domain::{Debt, FinancialItem, RecurringIncome, WalletData};

pub fn total_income(incomes: &[FinancialItem]) -> f64 {
    sum_amounts(incomes)
}

pub fn total_expenses(expenses: &[FinancialItem]) -> f64 {
    sum_amounts(expenses)
}

pub fn total_fixed_expenses(fixed_expenses: &[FinancialItem]) -> f64 {
    sum_amounts(fixed_expenses)
}

pub fn total_remaining_debt(debts: &[Debt]) -> f64 {
    debts.iter().map(Debt::remaining_amount).sum()
}

pub fn monthly_debt_payments(debts: &[Debt]) -> f64 {
    debts.iter().map(|debt| debt.monthly_payment.unwrap_or(0.0)).sum()
}

/// Received totals of active incomes only; inactive history is ignored.
pub fn total_recurring_income(recurring: &[RecurringIncome]) -> f64 {
    recurring
        .iter()
        .filter(|income| income.is_active)
        .map(|income| income.total_received)
        .sum()
}

pub fn monthly_recurring_income(recurring: &[RecurringIncome]) -> f64 {
    recurring
        .iter()
        .filter(|income| income.is_active)
        .map(RecurringIncome::normalized_monthly)
        .sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_remaining_debt: f64,
    pub total_fixed_expenses: f64,
    pub monthly_debt_payments: f64,
    pub total_recurring_income: f64,
    pub monthly_recurring_income: f64,
    pub total_balance: f64,
    pub net_worth: f64,
    pub savings_rate: f64,
}

impl FinancialSummary {
    pub fn compute(data: &WalletData) -> Self {
        let total_income = total_income(&data.incomes);
        let total_expenses = total_expenses(&data.expenses);
        let total_remaining_debt = total_remaining_debt(&data.debts);
        let total_fixed_expenses = total_fixed_expenses(&data.fixed_expenses);
        let total_recurring_income = total_recurring_income(&data.recurring_incomes);

        let total_balance =
            total_income + total_recurring_income - total_expenses - total_fixed_expenses;
        let net_worth =
            total_income + total_recurring_income - total_expenses - total_remaining_debt;
        let savings_rate = if total_income > 0.0 {
            (total_income - total_expenses - total_fixed_expenses) / total_income * 100.0
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            total_remaining_debt,
            total_fixed_expenses,
            monthly_debt_payments: monthly_debt_payments(&data.debts),
            total_recurring_income,
            monthly_recurring_income: monthly_recurring_income(&data.recurring_incomes),
            total_balance,
            net_worth,
            savings_rate,
        }
    }
}
