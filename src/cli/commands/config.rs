use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "config [show|set <currency|chart-width> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change display preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }
    if !args[0].eq_ignore_ascii_case("set") || args.len() < 3 {
        return Err(CommandError::InvalidArguments(format!("Usage: {}", USAGE)));
    }

    let value = args[2..].join(" ");
    let value = value.trim();
    let mut config = context.config.clone();
    match args[1].to_lowercase().as_str() {
        "currency" => {
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "currency symbol must not be empty".into(),
                ));
            }
            config.currency_symbol = value.to_string();
        }
        "chart-width" | "chart_width" => {
            config.chart_width = value
                .parse::<usize>()
                .ok()
                .filter(|width| *width > 0)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "`{}` is not a positive chart width",
                        value
                    ))
                })?;
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{}`; expected currency or chart-width",
                other
            )));
        }
    }

    if context.update_config(config)? {
        io::print_success("Preferences saved.");
    } else {
        io::print_info("Preferences updated for this session.");
    }
    Ok(())
}

fn show_config(context: &ShellContext) {
    section("Preferences");
    io::print_info(format!("  Currency    : {}", context.config.currency_symbol));
    io::print_info(format!("  Chart width : {}", context.config.chart_width));
}
