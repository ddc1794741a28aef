use reqwest::blocking::Client;
use serde::Serialize;

use super::{ContactForm, EmailCheck, EmailValidator, MailTransport};
use crate::config::ContactConfig;
use crate::errors::{Result, WalletError};

/// Blocking client for the email validation API.
pub struct AbstractEmailValidator {
    http: Client,
    url: String,
    api_key: String,
}

impl AbstractEmailValidator {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        Ok(Self {
            http: build_client()?,
            url: config.validation_url.clone(),
            api_key: config.validation_api_key.clone(),
        })
    }
}

impl EmailValidator for AbstractEmailValidator {
    fn check(&self, email: &str) -> Result<EmailCheck> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("api_key", self.api_key.as_str()), ("email", email)])
            .send()?
            .error_for_status()?;
        Ok(response.json::<EmailCheck>()?)
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_name: &'a str,
    to_email: &'a str,
    reply_to: &'a str,
}

/// Blocking client for the transactional email service.
pub struct EmailJsTransport {
    http: Client,
    config: ContactConfig,
}

impl EmailJsTransport {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        Ok(Self {
            http: build_client()?,
            config: config.clone(),
        })
    }
}

impl MailTransport for EmailJsTransport {
    fn send(&self, form: &ContactForm) -> Result<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                subject: &form.subject,
                message: &form.message,
                to_name: &self.config.recipient_name,
                to_email: &self.config.recipient_email,
                reply_to: &form.email,
            },
        };
        self.http
            .post(&self.config.send_url)
            .json(&request)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

fn build_client() -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|err| WalletError::Network(format!("failed to build HTTP client: {err}")))
}
