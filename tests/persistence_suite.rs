mod common;

use common::{date, open_wallet, setup_store};
use serde_json::Value;
use wallet_core::core::NewRecurringIncome;
use wallet_core::domain::debt::DebtTerms;
use wallet_core::domain::Collection;
use wallet_core::schedule::Frequency;
use wallet_core::storage::KeyValueStore;

#[test]
fn records_survive_reopening_the_store() {
    let store = setup_store();
    let today = date(2024, 3, 15);
    {
        let mut wallet = open_wallet(&store, today);
        wallet
            .add_income("Maaş", 25000.0, date(2024, 3, 1), Some("Mart".into()))
            .unwrap();
        wallet
            .add_expense("Market", 1200.0, date(2024, 3, 2), Some("Gıda".into()))
            .unwrap();
        wallet.add_fixed_expense("Kira", 9500.0, None).unwrap();
        let debt_id = wallet
            .add_debt(DebtTerms {
                title: "Kredi".into(),
                amount: 12000.0,
                due_date: date(2025, 3, 15),
                monthly_payment: Some(1000.0),
                total_months: 12,
                start_date: date(2024, 3, 15),
                interest_rate: Some(2.5),
            })
            .unwrap();
        wallet.pay_debt(&debt_id).unwrap();
    }

    let wallet = open_wallet(&store, today);
    let data = wallet.data();
    assert_eq!(data.incomes.len(), 1);
    assert_eq!(data.expenses[0].category.as_deref(), Some("Gıda"));
    assert_eq!(data.fixed_expenses[0].date, today);
    assert_eq!(data.debts[0].paid_amount, 1000.0);
    assert_eq!(data.debts[0].remaining_months, 11);
    assert_eq!(data.debts[0].last_payment_date, Some(today));
}

#[test]
fn stored_layout_uses_camel_case_keys() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    wallet
        .add_recurring_income(NewRecurringIncome {
            title: "Danışmanlık".into(),
            amount: 5000.0,
            frequency: Frequency::Monthly,
            start_date: date(2024, 1, 1),
            end_date: None,
            description: None,
        })
        .unwrap();

    let raw = store
        .get(Collection::RecurringIncomes.store_key())
        .unwrap()
        .expect("recurring incomes stored");
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let entry = &parsed[0];
    assert_eq!(entry["frequency"], "monthly");
    assert_eq!(entry["nextPaymentDate"], "2024-04-01");
    assert_eq!(entry["isActive"], true);
    assert_eq!(entry["receivedCount"], 0);
}

#[test]
fn legacy_records_with_numeric_style_ids_load() {
    let store = setup_store();
    store
        .set(
            "financial_debts",
            r#"[{"id":"1710500000000","title":"Telefon","amount":2000,"date":"2024-03-15",
                "dueDate":"2024-05-15","monthlyPayment":1000,"totalMonths":2,
                "remainingMonths":2,"startDate":"2024-03-15","paidAmount":0}]"#,
        )
        .unwrap();

    let mut wallet = open_wallet(&store, date(2024, 3, 20));
    assert_eq!(wallet.data().debts.len(), 1);
    assert_eq!(wallet.pay_debt("1710500000000").unwrap(), 1000.0);
}

#[test]
fn empty_and_corrupt_values_leave_defaults_in_place() {
    let store = setup_store();
    store.set("financial_incomes", "[]").unwrap();
    store.set("financial_expenses", "{ not json").unwrap();
    store
        .set(
            "financial_fixedExpenses",
            r#"[{"id":"f1","title":"Kira","amount":9500,"date":"2024-03-01"}]"#,
        )
        .unwrap();

    let wallet = open_wallet(&store, date(2024, 3, 15));
    let data = wallet.data();
    assert!(data.incomes.is_empty());
    assert!(data.expenses.is_empty());
    assert_eq!(data.fixed_expenses.len(), 1);
    assert_eq!(wallet.summary().total_fixed_expenses, 9500.0);
}

#[test]
fn deleting_the_last_record_stores_an_empty_list() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    let id = wallet
        .add_income("Prim", 3000.0, date(2024, 3, 10), None)
        .unwrap();
    wallet.delete(Collection::Incomes, &id).unwrap();

    assert_eq!(store.get("financial_incomes").unwrap().as_deref(), Some("[]"));
    assert!(open_wallet(&store, date(2024, 3, 15)).data().incomes.is_empty());
}
