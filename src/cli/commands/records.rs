use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::NewRecurringIncome;
use crate::currency::format_percent;
use crate::domain::debt::DebtTerms;
use crate::domain::Collection;
use crate::i18n::{frequency_label, TranslationKey as K};
use crate::schedule::{parse_date, Frequency};

use super::{parse_amount, parse_count, resolve_id, short_id, ParsedArgs};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "List records, optionally for one collection",
            "list [incomes|expenses|debts|fixed|recurring]",
            cmd_list,
        )
        .gated(),
        CommandEntry::new(
            "add-income",
            "Record a one-off income",
            "add-income <title> <amount> [--date YYYY-MM-DD] [--description TEXT]",
            cmd_add_income,
        )
        .gated(),
        CommandEntry::new(
            "add-expense",
            "Record a one-off expense",
            "add-expense <title> <amount> [--date YYYY-MM-DD] [--category TEXT]",
            cmd_add_expense,
        )
        .gated(),
        CommandEntry::new(
            "add-fixed",
            "Record a monthly fixed expense",
            "add-fixed <title> <amount> [--category TEXT]",
            cmd_add_fixed,
        )
        .gated(),
        CommandEntry::new(
            "add-debt",
            "Record an installment debt",
            "add-debt <title> <amount> <due-date> <monthly-payment> <months> [--start YYYY-MM-DD] [--rate PERCENT]",
            cmd_add_debt,
        )
        .gated(),
        CommandEntry::new(
            "add-recurring",
            "Record a recurring income",
            "add-recurring <title> <amount> <monthly|weekly|biweekly|yearly> <start-date> [--end YYYY-MM-DD] [--description TEXT]",
            cmd_add_recurring,
        )
        .gated(),
        CommandEntry::new(
            "delete",
            "Delete a record by id or id prefix",
            "delete <incomes|expenses|debts|fixed|recurring> <id>",
            cmd_delete,
        )
        .gated(),
    ]
}

fn added(context: &ShellContext, id: &str) {
    output::success(format!("{} ({})", context.t(K::RecordAdded), short_id(id)));
}

fn cmd_add_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["date", "description"])?;
    let title = parsed.required(0, "title")?;
    let amount = parse_amount("amount", parsed.required(1, "amount")?)?;
    let date = parsed.date_option("date")?.unwrap_or_else(|| context.wallet.today());
    let id = context
        .wallet
        .add_income(title, amount, date, parsed.text_option("description"))?;
    added(context, &id);
    Ok(())
}

fn cmd_add_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["date", "category"])?;
    let title = parsed.required(0, "title")?;
    let amount = parse_amount("amount", parsed.required(1, "amount")?)?;
    let date = parsed.date_option("date")?.unwrap_or_else(|| context.wallet.today());
    let id = context
        .wallet
        .add_expense(title, amount, date, parsed.text_option("category"))?;
    added(context, &id);
    Ok(())
}

fn cmd_add_fixed(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["category"])?;
    let title = parsed.required(0, "title")?;
    let amount = parse_amount("amount", parsed.required(1, "amount")?)?;
    let id = context
        .wallet
        .add_fixed_expense(title, amount, parsed.text_option("category"))?;
    added(context, &id);
    Ok(())
}

fn cmd_add_debt(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["start", "rate"])?;
    let title = parsed.required(0, "title")?;
    let amount = parse_amount("amount", parsed.required(1, "amount")?)?;
    let due_date = parse_date(parsed.required(2, "due-date")?)?;
    let monthly_payment = parse_amount("monthly payment", parsed.required(3, "monthly-payment")?)?;
    if monthly_payment <= 0.0 {
        return Err(CommandError::InvalidArguments(
            "monthly payment must be greater than zero".into(),
        ));
    }
    let total_months = parse_count("month count", parsed.required(4, "months")?)?;
    if total_months == 0 {
        return Err(CommandError::InvalidArguments(
            "month count must be at least 1".into(),
        ));
    }
    let interest_rate = parsed
        .option("rate")
        .map(|value| parse_amount("interest rate", value))
        .transpose()?;
    let start_date = parsed.date_option("start")?.unwrap_or_else(|| context.wallet.today());

    let id = context.wallet.add_debt(DebtTerms {
        title: title.to_string(),
        amount,
        due_date,
        monthly_payment: Some(monthly_payment),
        total_months,
        start_date,
        interest_rate,
    })?;
    added(context, &id);
    Ok(())
}

fn cmd_add_recurring(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["end", "description"])?;
    let input = NewRecurringIncome {
        title: parsed.required(0, "title")?.to_string(),
        amount: parse_amount("amount", parsed.required(1, "amount")?)?,
        frequency: parsed.required(2, "frequency")?.parse::<Frequency>()?,
        start_date: parse_date(parsed.required(3, "start-date")?)?,
        end_date: parsed.date_option("end")?,
        description: parsed.text_option("description"),
    };
    let id = context.wallet.add_recurring_income(input)?;
    added(context, &id);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let collection = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("missing <collection>".into()))?
        .parse::<Collection>()?;
    let needle = args
        .get(1)
        .ok_or_else(|| CommandError::InvalidArguments("missing <id>".into()))?;
    let id = resolve_id(context.wallet.data(), collection, needle)?;

    if !context.confirm(context.t(K::DeleteConfirm))? {
        output::info("Cancelled.");
        return Ok(());
    }
    context.wallet.delete(collection, &id)?;
    output::success(context.t(K::RecordDeleted));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let collections = match args.first() {
        Some(name) => vec![name.parse::<Collection>()?],
        None => Collection::ALL.to_vec(),
    };
    for collection in collections {
        let (heading, table) = collection_table(context, collection);
        output::section(heading);
        if table.rows.is_empty() {
            output::info(context.t(K::NoRecords));
        } else {
            println!("{}", table.render());
        }
    }
    Ok(())
}

pub(crate) fn collection_table(context: &ShellContext, collection: Collection) -> (&'static str, Table) {
    let t = |key| context.t(key);
    let data = context.wallet.data();
    let lang = context.language.language();
    let dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".into());

    match collection {
        Collection::Incomes | Collection::Expenses => {
            let (heading, items, last_header) = if collection == Collection::Incomes {
                (K::Incomes, &data.incomes, K::ColumnDescription)
            } else {
                (K::Expenses, &data.expenses, K::ColumnCategory)
            };
            let mut table = Table::new(vec![
                TableColumn::left(t(K::ColumnId)),
                TableColumn::left(t(K::ColumnTitle)).max_width(28),
                TableColumn::right(t(K::ColumnAmount)),
                TableColumn::left(t(K::ColumnDate)),
                TableColumn::left(t(last_header)).max_width(28),
            ]);
            for item in items {
                let last = if collection == Collection::Incomes {
                    dash(&item.description)
                } else {
                    dash(&item.category)
                };
                table.push_row(vec![
                    short_id(&item.id),
                    item.title.clone(),
                    context.money(item.amount),
                    context.date(item.date),
                    last,
                ]);
            }
            (t(heading), table)
        }
        Collection::Debts => {
            let mut table = Table::new(vec![
                TableColumn::left(t(K::ColumnId)),
                TableColumn::left(t(K::ColumnTitle)).max_width(28),
                TableColumn::right(t(K::ColumnAmount)),
                TableColumn::right(t(K::ColumnRemainingAmount)),
                TableColumn::right(t(K::ColumnMonthlyPayment)),
                TableColumn::left(t(K::ColumnRemainingTerm)),
                TableColumn::left(t(K::ColumnDueDate)),
                TableColumn::right(t(K::ColumnInterestRate)),
            ]);
            for debt in &data.debts {
                table.push_row(vec![
                    short_id(&debt.item.id),
                    debt.item.title.clone(),
                    context.money(debt.item.amount),
                    context.money(debt.remaining_amount()),
                    debt.monthly_payment
                        .map(|payment| context.money(payment))
                        .unwrap_or_else(|| "-".into()),
                    format!(
                        "{}/{} {}",
                        debt.remaining_months,
                        debt.total_months,
                        t(K::MonthsUnit)
                    ),
                    context.date(debt.due_date),
                    debt.interest_rate
                        .map(|rate| format_percent(lang, rate))
                        .unwrap_or_else(|| "-".into()),
                ]);
            }
            (t(K::Debts), table)
        }
        Collection::FixedExpenses => {
            let mut table = Table::new(vec![
                TableColumn::left(t(K::ColumnId)),
                TableColumn::left(t(K::ColumnTitle)).max_width(28),
                TableColumn::right(t(K::ReportMonthlyAmount)),
                TableColumn::left(t(K::ColumnCategory)).max_width(28),
            ]);
            for item in &data.fixed_expenses {
                table.push_row(vec![
                    short_id(&item.id),
                    item.title.clone(),
                    context.money(item.amount),
                    dash(&item.category),
                ]);
            }
            (t(K::FixedExpenses), table)
        }
        Collection::RecurringIncomes => {
            let mut table = Table::new(vec![
                TableColumn::left(t(K::ColumnId)),
                TableColumn::left(t(K::ColumnTitle)).max_width(28),
                TableColumn::right(t(K::ColumnAmount)),
                TableColumn::left(t(K::ColumnFrequency)),
                TableColumn::left(t(K::ColumnNextPayment)),
                TableColumn::right(t(K::ColumnReceived)),
                TableColumn::left(t(K::ColumnStatus)),
            ]);
            for income in &data.recurring_incomes {
                let status = if income.is_active {
                    K::StatusActive
                } else {
                    K::StatusInactive
                };
                table.push_row(vec![
                    short_id(&income.item.id),
                    income.item.title.clone(),
                    context.money(income.item.amount),
                    frequency_label(lang, income.frequency).to_string(),
                    context.date(income.next_payment_date),
                    format!(
                        "{} (x{})",
                        context.money(income.total_received),
                        income.received_count
                    ),
                    t(status).to_string(),
                ]);
            }
            (t(K::RecurringIncomes), table)
        }
    }
}
