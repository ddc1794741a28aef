//! Contact form submission through third-party validation and mail services.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletError};
use crate::i18n::{translate, Language, TranslationKey};

pub use http::{AbstractEmailValidator, EmailJsTransport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn ensure_complete(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WalletError::InvalidInput(format!(
                "contact form is missing: {}",
                missing.join(", ")
            )))
        }
    }
}

/// A validation flag reported either as a bare boolean or as `{ "value": bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckFlag {
    Bare(bool),
    Detailed { value: bool },
}

impl CheckFlag {
    pub fn is_true(&self) -> bool {
        match self {
            CheckFlag::Bare(value) | CheckFlag::Detailed { value } => *value,
        }
    }
}

impl Default for CheckFlag {
    fn default() -> Self {
        CheckFlag::Bare(false)
    }
}

/// Response body of the email validation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailCheck {
    #[serde(default)]
    pub is_valid_format: CheckFlag,
    #[serde(default)]
    pub is_mx_found: CheckFlag,
    #[serde(default)]
    pub is_smtp_valid: CheckFlag,
}

impl EmailCheck {
    pub fn is_deliverable(&self) -> bool {
        self.is_valid_format.is_true() && self.is_mx_found.is_true() && self.is_smtp_valid.is_true()
    }
}

pub trait EmailValidator {
    fn check(&self, email: &str) -> Result<EmailCheck>;
}

pub trait MailTransport {
    fn send(&self, form: &ContactForm) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    InvalidEmail,
    Failed,
}

impl ContactOutcome {
    pub fn message(&self, language: Language) -> &'static str {
        let key = match self {
            ContactOutcome::Sent => TranslationKey::ContactSuccess,
            ContactOutcome::InvalidEmail => TranslationKey::ContactInvalidEmail,
            ContactOutcome::Failed => TranslationKey::ContactError,
        };
        translate(language, key)
    }
}

pub struct ContactService<'a> {
    validator: &'a dyn EmailValidator,
    transport: &'a dyn MailTransport,
}

impl<'a> ContactService<'a> {
    pub fn new(validator: &'a dyn EmailValidator, transport: &'a dyn MailTransport) -> Self {
        Self {
            validator,
            transport,
        }
    }

    /// Validates the sender address, then sends. Transport and validation
    /// failures collapse into `Failed`; no retry is attempted.
    pub fn submit(&self, form: &ContactForm) -> Result<ContactOutcome> {
        form.ensure_complete()?;
        let check = match self.validator.check(form.email.trim()) {
            Ok(check) => check,
            Err(err) => {
                tracing::error!(error = %err, "email validation error");
                return Ok(ContactOutcome::Failed);
            }
        };
        if !check.is_deliverable() {
            tracing::info!(email = %form.email, "sender address rejected by validator");
            return Ok(ContactOutcome::InvalidEmail);
        }
        match self.transport.send(form) {
            Ok(()) => {
                tracing::info!("contact message sent");
                Ok(ContactOutcome::Sent)
            }
            Err(err) => {
                tracing::error!(error = %err, "error sending email");
                Ok(ContactOutcome::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubValidator(Result<EmailCheck>);

    impl EmailValidator for StubValidator {
        fn check(&self, _email: &str) -> Result<EmailCheck> {
            match &self.0 {
                Ok(check) => Ok(check.clone()),
                Err(err) => Err(WalletError::Network(err.to_string())),
            }
        }
    }

    #[derive(Default)]
    struct CountingTransport {
        sent: Cell<u32>,
        fail: bool,
    }

    impl MailTransport for CountingTransport {
        fn send(&self, _form: &ContactForm) -> Result<()> {
            if self.fail {
                return Err(WalletError::Network("503".into()));
            }
            self.sent.set(self.sent.get() + 1);
            Ok(())
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Project".into(),
            message: "Hello".into(),
        }
    }

    fn passing() -> EmailCheck {
        serde_json::from_str(r#"{"is_valid_format":true,"is_mx_found":true,"is_smtp_valid":true}"#)
            .unwrap()
    }

    #[test]
    fn deliverable_address_is_sent() {
        let validator = StubValidator(Ok(passing()));
        let transport = CountingTransport::default();
        let outcome = ContactService::new(&validator, &transport).submit(&form()).unwrap();
        assert_eq!(outcome, ContactOutcome::Sent);
        assert_eq!(transport.sent.get(), 1);
    }

    #[test]
    fn any_false_flag_marks_address_invalid() {
        let check: EmailCheck = serde_json::from_str(
            r#"{"is_valid_format":{"value":true,"text":"TRUE"},"is_mx_found":{"value":true},"is_smtp_valid":{"value":false}}"#,
        )
        .unwrap();
        let validator = StubValidator(Ok(check));
        let transport = CountingTransport::default();
        let outcome = ContactService::new(&validator, &transport).submit(&form()).unwrap();
        assert_eq!(outcome, ContactOutcome::InvalidEmail);
        assert_eq!(transport.sent.get(), 0);
        assert_ne!(outcome.message(Language::En), ContactOutcome::Failed.message(Language::En));
    }

    #[test]
    fn validation_network_error_is_generic_failure() {
        let validator = StubValidator(Err(WalletError::Network("timeout".into())));
        let transport = CountingTransport::default();
        let outcome = ContactService::new(&validator, &transport).submit(&form()).unwrap();
        assert_eq!(outcome, ContactOutcome::Failed);
    }

    #[test]
    fn send_failure_is_generic_failure() {
        let validator = StubValidator(Ok(passing()));
        let transport = CountingTransport {
            fail: true,
            ..CountingTransport::default()
        };
        let outcome = ContactService::new(&validator, &transport).submit(&form()).unwrap();
        assert_eq!(outcome, ContactOutcome::Failed);
        assert_eq!(outcome.message(Language::Tr), "Bir hata oluştu. Lütfen tekrar deneyin.");
    }

    #[test]
    fn incomplete_form_is_rejected_before_network() {
        let validator = StubValidator(Ok(passing()));
        let transport = CountingTransport::default();
        let mut incomplete = form();
        incomplete.message = " ".into();
        let err = ContactService::new(&validator, &transport)
            .submit(&incomplete)
            .unwrap_err();
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn blank_subject_is_rejected_before_network() {
        let validator = StubValidator(Ok(passing()));
        let transport = CountingTransport::default();
        let mut incomplete = form();
        incomplete.subject.clear();
        let err = ContactService::new(&validator, &transport)
            .submit(&incomplete)
            .unwrap_err();
        assert!(err.to_string().contains("subject"));
        assert_eq!(transport.sent.get(), 0);
    }
}
