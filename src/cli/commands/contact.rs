use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::contact::{
    AbstractEmailValidator, ContactForm, ContactOutcome, ContactService, EmailJsTransport,
};
use crate::i18n::TranslationKey as K;

use super::ParsedArgs;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "contact",
        "Send a message through the contact form",
        "contact <name> <email> <subject> <message>",
        cmd_contact,
    )]
}

fn cmd_contact(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &[])?;
    let form = ContactForm {
        name: parsed.required(0, "name")?.to_string(),
        email: parsed.required(1, "email")?.to_string(),
        subject: parsed.required(2, "subject")?.to_string(),
        message: parsed.required(3, "message")?.to_string(),
    };

    let settings = &context.config.contact;
    settings.ensure_credentials()?;
    let validator = AbstractEmailValidator::new(settings)?;
    let transport = EmailJsTransport::new(settings)?;

    output::info(context.t(K::ContactSending));
    let outcome = ContactService::new(&validator, &transport).submit(&form)?;
    let message = outcome.message(context.language.language());
    match outcome {
        ContactOutcome::Sent => output::success(message),
        ContactOutcome::InvalidEmail | ContactOutcome::Failed => output::error(message),
    }
    Ok(())
}
