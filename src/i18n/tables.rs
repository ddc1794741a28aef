//! Text tables, one per language. Both tables must cover every key.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::keys::TranslationKey as K;

pub(super) static TR: Lazy<HashMap<K, &'static str>> = Lazy::new(|| TR_ENTRIES.iter().copied().collect());
pub(super) static EN: Lazy<HashMap<K, &'static str>> = Lazy::new(|| EN_ENTRIES.iter().copied().collect());

const TR_ENTRIES: &[(K, &str)] = &[
    (K::NavHome, "Ana Sayfa"),
    (K::NavAbout, "Hakkımda"),
    (K::NavPortfolio, "Hizmetler"),
    (K::NavContact, "İletişim"),
    (K::HomeTitle, "Batuhan Erdener Ekşi"),
    (K::HomeSubtitle, "BT Çözümleri"),
    (K::HomeDescription, "İşinize özel, esnek ve ölçeklenebilir çözümler."),
    (K::HomeWelcome, "Hoş Geldiniz!"),
    (K::HomeExplore, "Keşfet"),
    (K::AboutTitle, "Hakkımda"),
    (K::AboutSkills, "Yetenekler"),
    (K::PortfolioTitle, "Hizmetler"),
    (K::PortfolioDescription, "Sunduğum hizmetler ve tamamlanan projeler."),
    (K::ContactTitle, "İletişim"),
    (K::ContactDescription, "Benimle iletişime geçin."),
    (K::ContactFormName, "İsim"),
    (K::ContactFormEmail, "E-posta"),
    (K::ContactFormMessage, "Mesaj"),
    (K::ContactFormSubmit, "Gönder"),
    (K::ContactInfoEmail, "E-posta: erdener.eksi@gmail.com"),
    (K::ContactInfoAddress, "Adres: Ankara, Türkiye"),
    (K::ContactName, "Adınız"),
    (K::ContactSubject, "Konu"),
    (K::ContactSending, "Gönderiliyor..."),
    (K::ContactSuccess, "Mesajınız başarıyla gönderildi!"),
    (K::ContactError, "Bir hata oluştu. Lütfen tekrar deneyin."),
    (K::ContactLocation, "Konum"),
    (K::ContactInvalidEmail, "Geçersiz veya kullanılmayan bir e-posta adresi girdiniz."),
    (K::LoginTitle, "Gizli Giriş"),
    (K::LoginSuccess, "Giriş başarılı."),
    (K::LoginError, "Kullanıcı adı veya şifre hatalı!"),
    (K::LoginRequired, "Bu işlem için giriş yapmalısınız."),
    (K::LogoutDone, "Çıkış yapıldı."),
    (K::LanguageChanged, "Dil: Türkçe"),
    (K::DashboardTitle, "Cüzdan Takip"),
    (K::TotalIncome, "Toplam Gelir"),
    (K::TotalExpenses, "Toplam Gider"),
    (K::RemainingDebt, "Kalan Borç"),
    (K::FixedExpenses, "Sabit Giderler"),
    (K::NetBalance, "Net Bakiye"),
    (K::NetWorth, "Net Değer"),
    (K::MonthlyDebtPayments, "Aylık Borç Ödemesi"),
    (K::RecurringReceived, "Alınan Düzenli Gelir"),
    (K::MonthlyRecurringIncome, "Aylık Düzenli Gelir"),
    (K::SavingsRate, "Tasarruf Oranı"),
    (K::Incomes, "Gelirler"),
    (K::Expenses, "Giderler"),
    (K::Debts, "Borçlar"),
    (K::RecurringIncomes, "Düzenli Gelirler"),
    (K::NoRecords, "Kayıt yok."),
    (K::RecordAdded, "Kayıt eklendi"),
    (K::RecordDeleted, "Kayıt silindi"),
    (K::DeleteConfirm, "Bu kayıt silinsin mi?"),
    (K::DebtPaid, "Ödeme kaydedildi"),
    (K::PaymentReceived, "Ödeme alındı, sonraki ödeme"),
    (K::IncomeActivated, "Düzenli gelir aktif"),
    (K::IncomeDeactivated, "Düzenli gelir pasif"),
    (K::ColumnId, "No"),
    (K::ColumnTitle, "Başlık"),
    (K::ColumnAmount, "Tutar"),
    (K::ColumnDate, "Tarih"),
    (K::ColumnDescription, "Açıklama"),
    (K::ColumnCategory, "Kategori"),
    (K::ColumnRemainingAmount, "Kalan Tutar"),
    (K::ColumnMonthlyPayment, "Aylık Ödeme"),
    (K::ColumnRemainingTerm, "Kalan Vade"),
    (K::ColumnDueDate, "Vade Tarihi"),
    (K::ColumnInterestRate, "Faiz Oranı"),
    (K::ColumnFrequency, "Sıklık"),
    (K::ColumnNextPayment, "Sonraki Ödeme"),
    (K::ColumnReceived, "Alınan"),
    (K::ColumnStatus, "Durum"),
    (K::StatusActive, "Aktif"),
    (K::StatusInactive, "Pasif"),
    (K::FrequencyMonthly, "Aylık"),
    (K::FrequencyWeekly, "Haftalık"),
    (K::FrequencyBiweekly, "İki Haftalık"),
    (K::FrequencyYearly, "Yıllık"),
    (K::MonthsUnit, "ay"),
    (K::ReportTitle, "Finansal Rapor"),
    (K::ReportDate, "Rapor Tarihi"),
    (K::ReportSummary, "Özet Bilgiler"),
    (K::ReportCategory, "Kategori"),
    (K::ReportDebtName, "Borç Adı"),
    (K::ReportTotalAmount, "Toplam Tutar"),
    (K::ReportFixedName, "Gider Adı"),
    (K::ReportMonthlyAmount, "Aylık Tutar"),
    (K::ReportSaved, "Rapor kaydedildi"),
];

const EN_ENTRIES: &[(K, &str)] = &[
    (K::NavHome, "Home"),
    (K::NavAbout, "About"),
    (K::NavPortfolio, "Services"),
    (K::NavContact, "Contact"),
    (K::HomeTitle, "Batuhan Erdener Ekşi"),
    (K::HomeSubtitle, "IT Solutions"),
    (K::HomeDescription, "Flexible and scalable solutions tailored to your business."),
    (K::HomeWelcome, "Welcome!"),
    (K::HomeExplore, "Explore"),
    (K::AboutTitle, "About Me"),
    (K::AboutSkills, "Skills"),
    (K::PortfolioTitle, "Services"),
    (K::PortfolioDescription, "Services I offer and completed projects."),
    (K::ContactTitle, "Contact"),
    (K::ContactDescription, "Get in touch with me."),
    (K::ContactFormName, "Name"),
    (K::ContactFormEmail, "Email"),
    (K::ContactFormMessage, "Message"),
    (K::ContactFormSubmit, "Send"),
    (K::ContactInfoEmail, "Email: erdener.eksi@gmail.com"),
    (K::ContactInfoAddress, "Address: Ankara, Turkey"),
    (K::ContactName, "Your Name"),
    (K::ContactSubject, "Subject"),
    (K::ContactSending, "Sending..."),
    (K::ContactSuccess, "Your message has been sent successfully!"),
    (K::ContactError, "An error occurred. Please try again."),
    (K::ContactLocation, "Location"),
    (K::ContactInvalidEmail, "You have entered an invalid or unused email address."),
    (K::LoginTitle, "Secret Login"),
    (K::LoginSuccess, "Logged in."),
    (K::LoginError, "Username or password is incorrect!"),
    (K::LoginRequired, "You must log in to do that."),
    (K::LogoutDone, "Logged out."),
    (K::LanguageChanged, "Language: English"),
    (K::DashboardTitle, "Wallet Tracker"),
    (K::TotalIncome, "Total Income"),
    (K::TotalExpenses, "Total Expenses"),
    (K::RemainingDebt, "Remaining Debt"),
    (K::FixedExpenses, "Fixed Expenses"),
    (K::NetBalance, "Net Balance"),
    (K::NetWorth, "Net Worth"),
    (K::MonthlyDebtPayments, "Monthly Debt Payments"),
    (K::RecurringReceived, "Recurring Income Received"),
    (K::MonthlyRecurringIncome, "Monthly Recurring Income"),
    (K::SavingsRate, "Savings Rate"),
    (K::Incomes, "Incomes"),
    (K::Expenses, "Expenses"),
    (K::Debts, "Debts"),
    (K::RecurringIncomes, "Recurring Incomes"),
    (K::NoRecords, "No records."),
    (K::RecordAdded, "Record added"),
    (K::RecordDeleted, "Record deleted"),
    (K::DeleteConfirm, "Delete this record?"),
    (K::DebtPaid, "Payment recorded"),
    (K::PaymentReceived, "Payment received, next payment"),
    (K::IncomeActivated, "Recurring income active"),
    (K::IncomeDeactivated, "Recurring income inactive"),
    (K::ColumnId, "ID"),
    (K::ColumnTitle, "Title"),
    (K::ColumnAmount, "Amount"),
    (K::ColumnDate, "Date"),
    (K::ColumnDescription, "Description"),
    (K::ColumnCategory, "Category"),
    (K::ColumnRemainingAmount, "Remaining"),
    (K::ColumnMonthlyPayment, "Monthly Payment"),
    (K::ColumnRemainingTerm, "Remaining Term"),
    (K::ColumnDueDate, "Due Date"),
    (K::ColumnInterestRate, "Interest Rate"),
    (K::ColumnFrequency, "Frequency"),
    (K::ColumnNextPayment, "Next Payment"),
    (K::ColumnReceived, "Received"),
    (K::ColumnStatus, "Status"),
    (K::StatusActive, "Active"),
    (K::StatusInactive, "Inactive"),
    (K::FrequencyMonthly, "Monthly"),
    (K::FrequencyWeekly, "Weekly"),
    (K::FrequencyBiweekly, "Biweekly"),
    (K::FrequencyYearly, "Yearly"),
    (K::MonthsUnit, "months"),
    (K::ReportTitle, "Financial Report"),
    (K::ReportDate, "Report Date"),
    (K::ReportSummary, "Summary"),
    (K::ReportCategory, "Category"),
    (K::ReportDebtName, "Debt"),
    (K::ReportTotalAmount, "Total Amount"),
    (K::ReportFixedName, "Expense"),
    (K::ReportMonthlyAmount, "Monthly Amount"),
    (K::ReportSaved, "Report saved"),
];
