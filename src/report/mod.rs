//! Printable financial report: content assembly and page layout.
//!
//! Layout works in millimetres measured from the top edge of an A4 page.
//! Rendering to PDF lives in [`pdf`].

pub mod pdf;

use chrono::NaiveDate;

use crate::currency::{format_amount, format_date};
use crate::domain::WalletData;
use crate::i18n::{translate, Language, TranslationKey as K};
use crate::summary::FinancialSummary;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_X_MM: f32 = 20.0;
const TOP_MM: f32 = 20.0;
const DATE_LINE_MM: f32 = 30.0;
const FIRST_SECTION_MM: f32 = 50.0;
/// A section starting below this line moves to a fresh page.
pub const SECTION_BREAK_MM: f32 = 250.0;
/// No row may extend past this line.
pub const PAGE_LIMIT_MM: f32 = 280.0;
const HEADING_ADVANCE_MM: f32 = 7.0;
const ROW_ADVANCE_MM: f32 = 7.0;
const SECTION_GAP_MM: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReport {
    pub title: String,
    pub date_line: String,
    pub file_name: String,
    pub sections: Vec<ReportSection>,
}

impl FinancialReport {
    /// Summary first, then incomes, expenses, debts, and fixed expenses.
    /// Empty collections are left out.
    pub fn build(
        data: &WalletData,
        summary: &FinancialSummary,
        language: Language,
        currency_label: &str,
        today: NaiveDate,
    ) -> Self {
        let t = |key| translate(language, key).to_string();
        let money = |value: f64| format_amount(language, value, currency_label);
        let text_or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

        let mut sections = vec![ReportSection {
            heading: t(K::ReportSummary),
            columns: vec![t(K::ReportCategory), t(K::ColumnAmount)],
            rows: [
                (K::TotalIncome, summary.total_income),
                (K::TotalExpenses, summary.total_expenses),
                (K::RemainingDebt, summary.total_remaining_debt),
                (K::FixedExpenses, summary.total_fixed_expenses),
                (K::RecurringReceived, summary.total_recurring_income),
                (K::NetBalance, summary.total_balance),
                (K::NetWorth, summary.net_worth),
            ]
            .into_iter()
            .map(|(key, value)| vec![t(key), money(value)])
            .collect(),
        }];

        if !data.incomes.is_empty() {
            sections.push(ReportSection {
                heading: t(K::Incomes),
                columns: vec![
                    t(K::ColumnTitle),
                    t(K::ColumnAmount),
                    t(K::ColumnDate),
                    t(K::ColumnDescription),
                ],
                rows: data
                    .incomes
                    .iter()
                    .map(|item| {
                        vec![
                            item.title.clone(),
                            money(item.amount),
                            format_date(language, item.date),
                            text_or_dash(&item.description),
                        ]
                    })
                    .collect(),
            });
        }

        if !data.expenses.is_empty() {
            sections.push(ReportSection {
                heading: t(K::Expenses),
                columns: vec![
                    t(K::ColumnTitle),
                    t(K::ColumnAmount),
                    t(K::ColumnDate),
                    t(K::ColumnCategory),
                ],
                rows: data
                    .expenses
                    .iter()
                    .map(|item| {
                        vec![
                            item.title.clone(),
                            money(item.amount),
                            format_date(language, item.date),
                            text_or_dash(&item.category),
                        ]
                    })
                    .collect(),
            });
        }

        if !data.debts.is_empty() {
            let months = t(K::MonthsUnit);
            sections.push(ReportSection {
                heading: t(K::Debts),
                columns: vec![
                    t(K::ReportDebtName),
                    t(K::ReportTotalAmount),
                    t(K::ColumnRemainingAmount),
                    t(K::ColumnMonthlyPayment),
                    t(K::ColumnRemainingTerm),
                    t(K::ColumnDueDate),
                ],
                rows: data
                    .debts
                    .iter()
                    .map(|debt| {
                        vec![
                            debt.item.title.clone(),
                            money(debt.item.amount),
                            money(debt.remaining_amount()),
                            money(debt.monthly_payment.unwrap_or(0.0)),
                            format!("{} {months}", debt.remaining_months),
                            format_date(language, debt.due_date),
                        ]
                    })
                    .collect(),
            });
        }

        if !data.fixed_expenses.is_empty() {
            sections.push(ReportSection {
                heading: t(K::FixedExpenses),
                columns: vec![
                    t(K::ReportFixedName),
                    t(K::ReportMonthlyAmount),
                    t(K::ReportCategory),
                ],
                rows: data
                    .fixed_expenses
                    .iter()
                    .map(|item| {
                        vec![item.title.clone(), money(item.amount), text_or_dash(&item.category)]
                    })
                    .collect(),
            });
        }

        let file_name = match language {
            Language::Tr => format!("finansal-rapor-{}.pdf", today.format("%d-%m-%Y")),
            Language::En => format!("financial-report-{}.pdf", today.format("%d-%m-%Y")),
        };

        Self {
            title: t(K::ReportTitle),
            date_line: format!("{}: {}", t(K::ReportDate), format_date(language, today)),
            file_name,
            sections,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    DateLine,
    Heading,
    TableHeader,
    Row,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub kind: LineKind,
    /// Baseline, in millimetres from the top edge.
    pub y: f32,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn place(&mut self, kind: LineKind, cells: Vec<String>, advance: f32) {
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine { kind, y, cells });
        }
        self.y += advance;
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.y = TOP_MM;
    }
}

/// Assigns every line of the report to a page and a vertical position.
pub fn plan_pages(report: &FinancialReport) -> Vec<PageLayout> {
    let mut cursor = Cursor {
        pages: vec![PageLayout::default()],
        y: TOP_MM,
    };
    cursor.place(LineKind::Title, vec![report.title.clone()], 0.0);
    cursor.y = DATE_LINE_MM;
    cursor.place(LineKind::DateLine, vec![report.date_line.clone()], 0.0);
    cursor.y = FIRST_SECTION_MM;

    for section in &report.sections {
        if cursor.y > SECTION_BREAK_MM {
            cursor.new_page();
        }
        cursor.place(LineKind::Heading, vec![section.heading.clone()], HEADING_ADVANCE_MM);
        cursor.place(LineKind::TableHeader, section.columns.clone(), ROW_ADVANCE_MM);
        for row in &section.rows {
            if cursor.y + ROW_ADVANCE_MM > PAGE_LIMIT_MM {
                cursor.new_page();
                cursor.place(LineKind::TableHeader, section.columns.clone(), ROW_ADVANCE_MM);
            }
            cursor.place(LineKind::Row, row.clone(), ROW_ADVANCE_MM);
        }
        cursor.y += SECTION_GAP_MM;
    }

    cursor.pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FinancialItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wallet_with(incomes: usize, fixed: usize) -> WalletData {
        let entry = |n: usize| FinancialItem::new(format!("entry {n}"), 100.0, date(2024, 1, 1));
        WalletData {
            incomes: (0..incomes).map(entry).collect(),
            fixed_expenses: (0..fixed).map(entry).collect(),
            ..WalletData::default()
        }
    }

    fn report_for(data: &WalletData, language: Language) -> FinancialReport {
        let summary = FinancialSummary::compute(data);
        FinancialReport::build(data, &summary, language, "TL", date(2024, 3, 15))
    }

    #[test]
    fn sections_follow_fixed_order_and_skip_empty() {
        let report = report_for(&wallet_with(1, 1), Language::En);
        let headings: Vec<&str> = report.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Summary", "Incomes", "Fixed Expenses"]);
        assert_eq!(report.file_name, "financial-report-15-03-2024.pdf");
    }

    #[test]
    fn summary_is_present_for_empty_wallet() {
        let report = report_for(&WalletData::default(), Language::Tr);
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].rows[0], vec!["Toplam Gelir".to_string(), "0 TL".to_string()]);
        assert_eq!(report.file_name, "finansal-rapor-15-03-2024.pdf");
        assert_eq!(report.date_line, "Rapor Tarihi: 15.03.2024");
    }

    #[test]
    fn short_report_fits_one_page() {
        let pages = plan_pages(&report_for(&wallet_with(3, 2), Language::En));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines[0].kind, LineKind::Title);
    }

    #[test]
    fn long_tables_spill_onto_new_pages_with_repeated_header() {
        let pages = plan_pages(&report_for(&wallet_with(60, 0), Language::En));
        assert!(pages.len() >= 2);
        for line in pages.iter().flat_map(|page| &page.lines) {
            assert!(line.y + ROW_ADVANCE_MM <= PAGE_LIMIT_MM);
        }
        assert_eq!(pages[1].lines[0].kind, LineKind::TableHeader);
        let rows: usize = pages
            .iter()
            .flat_map(|page| &page.lines)
            .filter(|line| line.kind == LineKind::Row)
            .count();
        assert_eq!(rows, 7 + 60);
    }

    #[test]
    fn section_starting_low_moves_to_next_page() {
        // Summary plus 16 incomes ends just past the section threshold.
        let pages = plan_pages(&report_for(&wallet_with(16, 1), Language::En));
        assert_eq!(pages.len(), 2);
        let last = pages.last().unwrap();
        let heading = last
            .lines
            .iter()
            .find(|line| line.kind == LineKind::Heading)
            .unwrap();
        assert_eq!(heading.cells[0], "Fixed Expenses");
        assert_eq!(heading.y, TOP_MM);
    }
}
