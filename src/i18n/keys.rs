use std::fmt;
use std::str::FromStr;

use crate::errors::WalletError;

macro_rules! translation_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// Closed set of symbolic text keys.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $($variant,)+
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $key,)+
                }
            }
        }

        impl FromStr for TranslationKey {
            type Err = WalletError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($key => Ok(TranslationKey::$variant),)+
                    other => Err(WalletError::InvalidInput(format!("unknown translation key `{other}`"))),
                }
            }
        }
    };
}

translation_keys! {
    NavHome => "nav.home",
    NavAbout => "nav.about",
    NavPortfolio => "nav.portfolio",
    NavContact => "nav.contact",
    HomeTitle => "home.title",
    HomeSubtitle => "home.subtitle",
    HomeDescription => "home.description",
    HomeWelcome => "home.welcome",
    HomeExplore => "home.explore",
    AboutTitle => "about.title",
    AboutSkills => "about.skills",
    PortfolioTitle => "portfolio.title",
    PortfolioDescription => "portfolio.description",
    ContactTitle => "contact.title",
    ContactDescription => "contact.description",
    ContactFormName => "contact.form.name",
    ContactFormEmail => "contact.form.email",
    ContactFormMessage => "contact.form.message",
    ContactFormSubmit => "contact.form.submit",
    ContactInfoEmail => "contact.info.email",
    ContactInfoAddress => "contact.info.address",
    ContactName => "contact.name",
    ContactSubject => "contact.subject",
    ContactSending => "contact.sending",
    ContactSuccess => "contact.success",
    ContactError => "contact.error",
    ContactLocation => "contact.location",
    ContactInvalidEmail => "contact.invalidEmail",
    LoginTitle => "login.title",
    LoginSuccess => "login.success",
    LoginError => "login.error",
    LoginRequired => "login.required",
    LogoutDone => "login.logout",
    LanguageChanged => "language.changed",
    DashboardTitle => "dashboard.title",
    TotalIncome => "dashboard.totalIncome",
    TotalExpenses => "dashboard.totalExpenses",
    RemainingDebt => "dashboard.remainingDebt",
    FixedExpenses => "dashboard.fixedExpenses",
    NetBalance => "dashboard.netBalance",
    NetWorth => "dashboard.netWorth",
    MonthlyDebtPayments => "dashboard.monthlyDebtPayments",
    RecurringReceived => "dashboard.recurringReceived",
    MonthlyRecurringIncome => "dashboard.monthlyRecurringIncome",
    SavingsRate => "dashboard.savingsRate",
    Incomes => "dashboard.incomes",
    Expenses => "dashboard.expenses",
    Debts => "dashboard.debts",
    RecurringIncomes => "dashboard.recurringIncomes",
    NoRecords => "dashboard.noRecords",
    RecordAdded => "dashboard.recordAdded",
    RecordDeleted => "dashboard.recordDeleted",
    DeleteConfirm => "dashboard.deleteConfirm",
    DebtPaid => "dashboard.debtPaid",
    PaymentReceived => "dashboard.paymentReceived",
    IncomeActivated => "dashboard.incomeActivated",
    IncomeDeactivated => "dashboard.incomeDeactivated",
    ColumnId => "column.id",
    ColumnTitle => "column.title",
    ColumnAmount => "column.amount",
    ColumnDate => "column.date",
    ColumnDescription => "column.description",
    ColumnCategory => "column.category",
    ColumnRemainingAmount => "column.remainingAmount",
    ColumnMonthlyPayment => "column.monthlyPayment",
    ColumnRemainingTerm => "column.remainingTerm",
    ColumnDueDate => "column.dueDate",
    ColumnInterestRate => "column.interestRate",
    ColumnFrequency => "column.frequency",
    ColumnNextPayment => "column.nextPayment",
    ColumnReceived => "column.received",
    ColumnStatus => "column.status",
    StatusActive => "status.active",
    StatusInactive => "status.inactive",
    FrequencyMonthly => "frequency.monthly",
    FrequencyWeekly => "frequency.weekly",
    FrequencyBiweekly => "frequency.biweekly",
    FrequencyYearly => "frequency.yearly",
    MonthsUnit => "unit.months",
    ReportTitle => "report.title",
    ReportDate => "report.date",
    ReportSummary => "report.summary",
    ReportCategory => "report.category",
    ReportDebtName => "report.debtName",
    ReportTotalAmount => "report.totalAmount",
    ReportFixedName => "report.fixedName",
    ReportMonthlyAmount => "report.monthlyAmount",
    ReportSaved => "report.saved",
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
