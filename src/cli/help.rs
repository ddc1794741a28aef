use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        let marker = if entry.gated { "*" } else { " " };
        output::info(format!("  {:<14}{} {}", entry.name, marker, entry.description));
    }
    output::info("Commands marked * require `login`.");
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
    if entry.gated {
        output::info("  Requires login.");
    }
}
