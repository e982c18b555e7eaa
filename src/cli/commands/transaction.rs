use crate::cli::commands::require_args;
use crate::cli::core::{parse_position, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{render_table, section};
use crate::cli::registry::CommandEntry;
use crate::core::TransactionForm;
use crate::currency::format_date;

const ADD_USAGE: &str = "add <description> <amount> <income|expense|savings|investment>";
const DELETE_USAGE: &str = "delete <position>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a transaction", ADD_USAGE, cmd_add),
        CommandEntry::new("delete", "Delete a transaction by position", DELETE_USAGE, cmd_delete),
        CommandEntry::new("list", "Show all transactions", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 3, ADD_USAGE)?;
    let form = TransactionForm::new(args[0], args[1], args[2]);
    let transaction = context.tracker.submit_transaction(&form)?;
    io::print_success(format!(
        "Added {} `{}` for {}.",
        transaction.kind,
        transaction.description,
        context.money(transaction.amount)
    ));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, DELETE_USAGE)?;
    let index = parse_position(args[0])?;
    let Some(description) = context
        .tracker
        .ledger()
        .transaction(index)
        .map(|txn| txn.description.clone())
    else {
        io::print_warning(format!("No transaction at position {}.", args[0]));
        return Ok(());
    };
    if !context.confirm(&format!("Delete transaction `{}`?", description))? {
        io::print_info("Nothing deleted.");
        return Ok(());
    }
    if let Some(removed) = context.tracker.delete_transaction(index)? {
        io::print_success(format!("Deleted transaction `{}`.", removed.description));
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Transactions");
    let transactions = context.tracker.transactions();
    if transactions.is_empty() {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .enumerate()
        .map(|(idx, txn)| {
            let sign = if txn.is_credit() { "+" } else { "-" };
            vec![
                (idx + 1).to_string(),
                txn.description.clone(),
                format!("{}{}", sign, context.money(txn.amount)),
                txn.kind.to_string(),
                format_date(&txn.date),
            ]
        })
        .collect();
    render_table(&["#", "Description", "Amount", "Type", "Date"], &rows);
    Ok(())
}
