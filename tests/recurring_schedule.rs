mod common;

use common::{date, open_wallet, setup_store};
use wallet_core::core::NewRecurringIncome;
use wallet_core::schedule::{next_payment_date, Frequency};

fn income(frequency: Frequency, start: chrono::NaiveDate) -> NewRecurringIncome {
    NewRecurringIncome {
        title: "Kira geliri".into(),
        amount: 4000.0,
        frequency,
        start_date: start,
        end_date: None,
        description: None,
    }
}

#[test]
fn projection_is_strictly_after_today() {
    let today = date(2024, 3, 15);
    for frequency in Frequency::ALL {
        for start in [date(2023, 2, 28), date(2024, 3, 15), date(2024, 6, 1)] {
            let next = next_payment_date(start, frequency, today).unwrap();
            assert!(next > today, "{frequency} from {start} gave {next}");
            assert!(next > start);
        }
    }
}

#[test]
fn weekly_and_biweekly_step_by_days() {
    let today = date(2024, 3, 15);
    assert_eq!(
        next_payment_date(date(2024, 3, 1), Frequency::Weekly, today).unwrap(),
        date(2024, 3, 22)
    );
    assert_eq!(
        next_payment_date(date(2024, 3, 1), Frequency::Biweekly, today).unwrap(),
        date(2024, 3, 29)
    );
    assert_eq!(
        next_payment_date(date(2023, 5, 20), Frequency::Yearly, today).unwrap(),
        date(2024, 5, 20)
    );
}

#[test]
fn month_end_start_stays_clamped_after_february() {
    let next = next_payment_date(date(2024, 1, 31), Frequency::Monthly, date(2024, 3, 5)).unwrap();
    assert_eq!(next, date(2024, 3, 29));
}

#[test]
fn received_and_freshly_created_incomes_agree_on_due_date() {
    let store = setup_store();
    let mut early = open_wallet(&store, date(2024, 2, 1));
    let id = early
        .add_recurring_income(income(Frequency::Monthly, date(2024, 1, 31)))
        .unwrap();
    assert_eq!(early.data().recurring_incomes[0].next_payment_date, date(2024, 2, 29));

    let mut later = open_wallet(&store, date(2024, 3, 1));
    let received = later.receive_payment(&id).unwrap();

    let fresh = setup_store();
    let mut other = open_wallet(&fresh, date(2024, 3, 1));
    other
        .add_recurring_income(income(Frequency::Monthly, date(2024, 1, 31)))
        .unwrap();
    assert_eq!(received, date(2024, 3, 29));
    assert_eq!(other.data().recurring_incomes[0].next_payment_date, received);
}

#[test]
fn receiving_advances_from_previous_due_date() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    let id = wallet
        .add_recurring_income(income(Frequency::Weekly, date(2024, 3, 1)))
        .unwrap();
    assert_eq!(wallet.data().recurring_incomes[0].next_payment_date, date(2024, 3, 22));

    let next = wallet.receive_payment(&id).unwrap();
    assert_eq!(next, date(2024, 3, 29));
    let next = wallet.receive_payment(&id).unwrap();
    assert_eq!(next, date(2024, 4, 5));

    let stored = &wallet.data().recurring_incomes[0];
    assert_eq!(stored.received_count, 2);
    assert_eq!(stored.total_received, 8000.0);
}

#[test]
fn inactive_income_drops_out_of_totals_but_keeps_history() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    let id = wallet
        .add_recurring_income(income(Frequency::Monthly, date(2024, 1, 1)))
        .unwrap();
    wallet.receive_payment(&id).unwrap();
    assert_eq!(wallet.summary().total_recurring_income, 4000.0);
    assert_eq!(wallet.summary().monthly_recurring_income, 4000.0);

    assert!(!wallet.toggle_recurring(&id).unwrap());
    assert_eq!(wallet.summary().total_recurring_income, 0.0);
    assert_eq!(wallet.summary().monthly_recurring_income, 0.0);
    assert!(wallet.receive_payment(&id).is_err());
    assert_eq!(wallet.data().recurring_incomes[0].total_received, 4000.0);

    assert!(wallet.toggle_recurring(&id).unwrap());
    assert_eq!(wallet.summary().total_recurring_income, 4000.0);
}

#[test]
fn end_date_before_start_is_rejected() {
    let store = setup_store();
    let mut wallet = open_wallet(&store, date(2024, 3, 15));
    let mut input = income(Frequency::Monthly, date(2024, 1, 1));
    input.end_date = Some(date(2023, 12, 31));
    assert!(wallet.add_recurring_income(input).is_err());
    assert!(wallet.data().recurring_incomes.is_empty());
}
