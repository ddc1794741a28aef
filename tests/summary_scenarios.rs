mod common;

use common::{date, open_wallet, setup_store};
use wallet_core::core::NewRecurringIncome;
use wallet_core::domain::debt::DebtTerms;
use wallet_core::schedule::Frequency;

#[test]
fn household_month_adds_up() {
    let store = setup_store();
    let today = date(2024, 3, 15);
    let mut wallet = open_wallet(&store, today);

    wallet.add_income("Maaş", 30000.0, date(2024, 3, 1), None).unwrap();
    wallet.add_expense("Market", 4000.0, date(2024, 3, 3), None).unwrap();
    wallet.add_expense("Fatura", 1000.0, date(2024, 3, 5), None).unwrap();
    wallet.add_fixed_expense("Kira", 10000.0, None).unwrap();
    let debt = wallet
        .add_debt(DebtTerms {
            title: "Kredi kartı".into(),
            amount: 6000.0,
            due_date: date(2024, 9, 15),
            monthly_payment: Some(1000.0),
            total_months: 6,
            start_date: today,
            interest_rate: None,
        })
        .unwrap();
    wallet
        .add_debt(DebtTerms {
            title: "Aile".into(),
            amount: 2000.0,
            due_date: date(2024, 12, 31),
            monthly_payment: None,
            total_months: 0,
            start_date: today,
            interest_rate: None,
        })
        .unwrap();
    let weekly = wallet
        .add_recurring_income(NewRecurringIncome {
            title: "Ders".into(),
            amount: 1000.0,
            frequency: Frequency::Weekly,
            start_date: date(2024, 3, 4),
            end_date: None,
            description: None,
        })
        .unwrap();

    wallet.pay_debt(&debt).unwrap();
    wallet.receive_payment(&weekly).unwrap();

    let summary = wallet.summary();
    assert_eq!(summary.total_income, 30000.0);
    assert_eq!(summary.total_expenses, 5000.0);
    assert_eq!(summary.total_fixed_expenses, 10000.0);
    assert_eq!(summary.total_remaining_debt, 7000.0);
    assert_eq!(summary.monthly_debt_payments, 1000.0);
    assert_eq!(summary.total_recurring_income, 1000.0);
    assert!((summary.monthly_recurring_income - 4330.0).abs() < 1e-9);
    assert_eq!(summary.total_balance, 30000.0 + 1000.0 - 5000.0 - 10000.0);
    assert_eq!(summary.net_worth, 30000.0 + 1000.0 - 5000.0 - 7000.0);
    assert!((summary.savings_rate - 50.0).abs() < 1e-9);
}

#[test]
fn debt_without_installment_cannot_be_paid() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    let id = wallet
        .add_debt(DebtTerms {
            title: "Arkadaş".into(),
            amount: 500.0,
            due_date: date(2024, 4, 1),
            monthly_payment: Some(0.0),
            total_months: 3,
            start_date: date(2024, 3, 15),
            interest_rate: None,
        })
        .unwrap();
    assert!(wallet.pay_debt(&id).is_err());
    assert_eq!(wallet.data().debts[0].paid_amount, 0.0);
    assert_eq!(wallet.data().debts[0].remaining_months, 3);
}

#[test]
fn empty_wallet_reports_zero_savings_rate() {
    let store = setup_store();
    let wallet = open_wallet(&store, date(2024, 3, 15));
    let summary = wallet.summary();
    assert_eq!(summary.total_balance, 0.0);
    assert_eq!(summary.savings_rate, 0.0);
}
