use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::Collection;
use crate::i18n::TranslationKey as K;

use super::resolve_id;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("pay-debt", "Apply one monthly installment", "pay-debt <id>", cmd_pay_debt)
            .gated(),
        CommandEntry::new(
            "receive",
            "Record a payment of a recurring income",
            "receive <id>",
            cmd_receive,
        )
        .gated(),
        CommandEntry::new(
            "toggle",
            "Activate or deactivate a recurring income",
            "toggle <id>",
            cmd_toggle,
        )
        .gated(),
    ]
}

fn target_id(context: &ShellContext, collection: Collection, args: &[&str]) -> Result<String, CommandError> {
    let needle = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("missing <id>".into()))?;
    resolve_id(context.wallet.data(), collection, needle)
}

fn cmd_pay_debt(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = target_id(context, Collection::Debts, args)?;
    let paid = context.wallet.pay_debt(&id)?;
    output::success(format!("{}: {}", context.t(K::DebtPaid), context.money(paid)));
    Ok(())
}

fn cmd_receive(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = target_id(context, Collection::RecurringIncomes, args)?;
    let next = context.wallet.receive_payment(&id)?;
    output::success(format!("{}: {}", context.t(K::PaymentReceived), context.date(next)));
    Ok(())
}

fn cmd_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = target_id(context, Collection::RecurringIncomes, args)?;
    let key = if context.wallet.toggle_recurring(&id)? {
        K::IncomeActivated
    } else {
        K::IncomeDeactivated
    };
    output::success(context.t(key));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::core::test_support::unlocked;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn installments_stop_when_term_is_used_up() {
        let (_temp, mut context) = unlocked(date(2024, 3, 15));
        context
            .process_line("add-debt Telefon 2000 2024-05-15 1000 2")
            .unwrap();
        let id = context.wallet.data().debts[0].item.id.clone();
        context.process_line(&format!("pay-debt {id}")).unwrap();
        context.process_line(&format!("pay-debt {id}")).unwrap();
        assert!(context.process_line(&format!("pay-debt {id}")).is_err());

        let debt = &context.wallet.data().debts[0];
        assert_eq!(debt.paid_amount, 2000.0);
        assert_eq!(debt.remaining_months, 0);
        assert_eq!(context.wallet.summary().total_remaining_debt, 0.0);
    }

    #[test]
    fn receive_and_toggle_recurring_income() {
        let (_temp, mut context) = unlocked(date(2024, 3, 15));
        context
            .process_line("add-recurring Kira 4000 monthly 2024-01-10")
            .unwrap();
        let id = context.wallet.data().recurring_incomes[0].item.id.clone();

        context.process_line(&format!("receive {id}")).unwrap();
        let income = &context.wallet.data().recurring_incomes[0];
        assert_eq!(income.received_count, 1);
        assert_eq!(income.next_payment_date, date(2024, 5, 10));

        context.process_line(&format!("toggle {id}")).unwrap();
        assert!(!context.wallet.data().recurring_incomes[0].is_active);
        assert!(context.process_line(&format!("receive {id}")).is_err());
        assert_eq!(context.wallet.summary().total_recurring_income, 0.0);
    }
}
