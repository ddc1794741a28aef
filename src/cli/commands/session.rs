use dialoguer::{Input, Password};

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::i18n::{Language, TranslationKey};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "lang",
            "Switch the display language (toggles when no code is given)",
            "lang [tr|en]",
            cmd_lang,
        ),
        CommandEntry::new("t", "Print the text for a translation key", "t <key>", cmd_translate),
        CommandEntry::new("login", "Unlock the finance commands", "login [username] [password]", cmd_login),
        CommandEntry::new("logout", "Lock the finance commands", "logout", cmd_logout),
    ]
}

fn cmd_lang(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let language = match args.first() {
        Some(code) => code.parse::<Language>()?,
        None => context.language.language().other(),
    };
    context.language.set_language(language)?;
    output::success(context.t(TranslationKey::LanguageChanged));
    Ok(())
}

fn cmd_translate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let key = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("missing <key>".into()))?
        .parse::<TranslationKey>()?;
    output::info(context.t(key));
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = match args.first() {
        Some(value) => value.to_string(),
        None => prompt_username(context)?,
    };
    let password = match args.get(1) {
        Some(value) => value.to_string(),
        None => prompt_password(context)?,
    };

    if context.gate.login(username.trim(), &password)? {
        output::success(context.t(TranslationKey::LoginSuccess));
    } else {
        output::error(context.t(TranslationKey::LoginError));
    }
    Ok(())
}

fn prompt_username(context: &ShellContext) -> Result<String, CommandError> {
    if context.mode == CliMode::Script {
        return Err(CommandError::InvalidArguments("missing <username>".into()));
    }
    Ok(Input::<String>::with_theme(&context.theme)
        .with_prompt(context.t(TranslationKey::LoginTitle))
        .interact_text()?)
}

fn prompt_password(context: &ShellContext) -> Result<String, CommandError> {
    if context.mode == CliMode::Script {
        return Err(CommandError::InvalidArguments("missing <password>".into()));
    }
    Ok(Password::with_theme(&context.theme)
        .with_prompt("Password")
        .interact()?)
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.gate.logout()?;
    output::success(context.t(TranslationKey::LogoutDone));
    Ok(())
}
