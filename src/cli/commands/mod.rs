use std::collections::HashMap;

pub mod actions;
pub mod contact;
pub mod records;
pub mod reports;
pub mod session;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::domain::{Collection, Record, WalletData};
use crate::schedule::parse_date;

use chrono::NaiveDate;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(session::definitions());
    commands.extend(reports::definitions());
    commands.extend(records::definitions());
    commands.extend(actions::definitions());
    commands.extend(contact::definitions());
    commands
}

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

/// Shown in tables; `resolve_id` accepts any unique prefix.
pub(crate) const SHORT_ID_LEN: usize = 8;

/// Positional arguments plus `--name value` options.
#[derive(Debug)]
pub(crate) struct ParsedArgs<'a> {
    positional: Vec<&'a str>,
    options: HashMap<&'a str, &'a str>,
}

impl<'a> ParsedArgs<'a> {
    pub(crate) fn parse(args: &[&'a str], known: &[&str]) -> Result<Self, CommandError> {
        let mut positional = Vec::new();
        let mut options = HashMap::new();
        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            let Some(name) = arg.strip_prefix("--") else {
                positional.push(arg);
                continue;
            };
            if !known.contains(&name) {
                return Err(CommandError::InvalidArguments(format!("unknown option `--{name}`")));
            }
            let value = iter.next().ok_or_else(|| {
                CommandError::InvalidArguments(format!("option `--{name}` needs a value"))
            })?;
            options.insert(name, value);
        }
        Ok(Self { positional, options })
    }

    pub(crate) fn required(&self, index: usize, name: &str) -> Result<&'a str, CommandError> {
        self.positional
            .get(index)
            .copied()
            .ok_or_else(|| CommandError::InvalidArguments(format!("missing <{name}>")))
    }

    pub(crate) fn positional(&self, index: usize) -> Option<&'a str> {
        self.positional.get(index).copied()
    }

    pub(crate) fn option(&self, name: &str) -> Option<&'a str> {
        self.options.get(name).copied()
    }

    pub(crate) fn text_option(&self, name: &str) -> Option<String> {
        self.option(name).map(str::to_string)
    }

    pub(crate) fn date_option(&self, name: &str) -> Result<Option<NaiveDate>, CommandError> {
        self.option(name).map(parse_date).transpose().map_err(CommandError::from)
    }
}

/// Accepts `1500`, `1500.75`, and `1500,75`.
pub(crate) fn parse_amount(name: &str, value: &str) -> Result<f64, CommandError> {
    let normalized = if value.contains(',') && !value.contains('.') {
        value.replace(',', ".")
    } else {
        value.to_string()
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid {name} `{value}`")))
}

pub(crate) fn parse_count(name: &str, value: &str) -> Result<u32, CommandError> {
    value
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {name} `{value}`")))
}

pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

fn ids(data: &WalletData, collection: Collection) -> Vec<&str> {
    match collection {
        Collection::Incomes => data.incomes.iter().map(Record::id).collect(),
        Collection::Expenses => data.expenses.iter().map(Record::id).collect(),
        Collection::Debts => data.debts.iter().map(Record::id).collect(),
        Collection::FixedExpenses => data.fixed_expenses.iter().map(Record::id).collect(),
        Collection::RecurringIncomes => data.recurring_incomes.iter().map(Record::id).collect(),
    }
}

/// Expands a full id or unique id prefix to the stored id.
pub(crate) fn resolve_id(
    data: &WalletData,
    collection: Collection,
    needle: &str,
) -> Result<String, CommandError> {
    let ids = ids(data, collection);
    if let Some(exact) = ids.iter().find(|id| **id == needle) {
        return Ok(exact.to_string());
    }
    let matches: Vec<&&str> = ids.iter().filter(|id| id.starts_with(needle)).collect();
    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(CommandError::InvalidArguments(format!(
            "no {collection} record matches `{needle}`"
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{needle}` matches {} {collection} records; use more characters",
            matches.len()
        ))),
    }
}
