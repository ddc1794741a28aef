use std::path::PathBuf;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_percent;
use crate::i18n::TranslationKey as K;
use crate::report::{pdf, FinancialReport};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("summary", "Show aggregate figures", "summary", cmd_summary).gated(),
        CommandEntry::new(
            "export-pdf",
            "Write the financial report as a PDF",
            "export-pdf [directory|file.pdf]",
            cmd_export_pdf,
        )
        .gated(),
    ]
}

pub(crate) fn summary_lines(context: &ShellContext) -> Vec<(&'static str, String)> {
    let summary = context.wallet.summary();
    let money = |value| context.money(value);
    vec![
        (context.t(K::TotalIncome), money(summary.total_income)),
        (context.t(K::TotalExpenses), money(summary.total_expenses)),
        (context.t(K::FixedExpenses), money(summary.total_fixed_expenses)),
        (context.t(K::RemainingDebt), money(summary.total_remaining_debt)),
        (context.t(K::MonthlyDebtPayments), money(summary.monthly_debt_payments)),
        (context.t(K::RecurringReceived), money(summary.total_recurring_income)),
        (
            context.t(K::MonthlyRecurringIncome),
            money(summary.monthly_recurring_income),
        ),
        (context.t(K::NetBalance), money(summary.total_balance)),
        (context.t(K::NetWorth), money(summary.net_worth)),
        (
            context.t(K::SavingsRate),
            format_percent(context.language.language(), summary.savings_rate),
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(context.t(K::DashboardTitle));
    for (label, value) in summary_lines(context) {
        output::info(format!("  {label:<30} {value}"));
    }
    Ok(())
}

fn cmd_export_pdf(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args.first().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let report = FinancialReport::build(
        context.wallet.data(),
        &context.wallet.summary(),
        context.language.language(),
        &context.config.currency_label,
        context.wallet.today(),
    );
    let is_file = target
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let path = if is_file {
        pdf::save(&report, &target)?;
        target
    } else {
        pdf::write_report(&report, &target)?
    };
    output::success(format!("{}: {}", context.t(K::ReportSaved), path.display()));
    Ok(())
}
