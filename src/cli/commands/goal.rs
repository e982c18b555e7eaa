use crate::cli::commands::require_args;
use crate::cli::core::{parse_position, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::core::GoalForm;
use crate::domain::Goal;

const ADD_USAGE: &str = "goal-add <name> <target amount>";
const DELETE_USAGE: &str = "goal-delete <position>";
const SHOW_USAGE: &str = "goal <position>";
const BAR_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("goal-add", "Create a savings goal", ADD_USAGE, cmd_goal_add),
        CommandEntry::new(
            "goal-delete",
            "Delete a goal by position",
            DELETE_USAGE,
            cmd_goal_delete,
        ),
        CommandEntry::new("goals", "Show goals and their progress", "goals", cmd_goals),
        CommandEntry::new(
            "goal",
            "Show the transactions feeding a goal",
            SHOW_USAGE,
            cmd_goal_show,
        ),
    ]
}

fn cmd_goal_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, ADD_USAGE)?;
    let goal = context
        .tracker
        .submit_goal(&GoalForm::new(args[0], args[1]))?;
    io::print_success(format!(
        "Goal `{}` created with target {} ({:.0}% reached).",
        goal.name,
        context.money(goal.amount),
        goal.progress_percent()
    ));
    Ok(())
}

fn cmd_goal_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, DELETE_USAGE)?;
    let index = parse_position(args[0])?;
    let Some(name) = context
        .tracker
        .goal_tracker()
        .goal(index)
        .map(|goal| goal.name.clone())
    else {
        io::print_warning(format!("No goal at position {}.", args[0]));
        return Ok(());
    };
    if !context.confirm(&format!("Delete goal `{}`?", name))? {
        io::print_info("Nothing deleted.");
        return Ok(());
    }
    if let Some(removed) = context.tracker.delete_goal(index)? {
        io::print_success(format!("Deleted goal `{}`.", removed.name));
    }
    Ok(())
}

fn cmd_goals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Goals");
    let goals = context.tracker.goals();
    if goals.is_empty() {
        io::print_info("No goals set yet.");
        return Ok(());
    }
    for (idx, goal) in goals.iter().enumerate() {
        let status = if goal.is_complete() { " (reached)" } else { "" };
        io::print_info(format!("{}. {}{}", idx + 1, goal.name, status));
        io::print_info(format!(
            "   Target: {}  Progress: {}",
            context.money(goal.amount),
            context.money(goal.progress)
        ));
        io::print_info(format!("   {}", progress_bar(goal, BAR_WIDTH)));
    }
    Ok(())
}

fn cmd_goal_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, SHOW_USAGE)?;
    let index = parse_position(args[0])?;
    let Some(goal) = context.tracker.goal_tracker().goal(index) else {
        io::print_warning(format!("No goal at position {}.", args[0]));
        return Ok(());
    };
    section(format!("Goal: {}", goal.name));
    io::print_info(format!(
        "  Remaining: {}",
        context.money(goal.remaining())
    ));
    let positions = context.tracker.contributors(index);
    if positions.is_empty() {
        io::print_info("  No matching transactions yet.");
        return Ok(());
    }
    for position in positions {
        if let Some(txn) = context.tracker.ledger().transaction(position) {
            io::print_info(format!(
                "  #{} {} {}",
                position + 1,
                txn.description,
                context.money(txn.amount)
            ));
        }
    }
    Ok(())
}

fn progress_bar(goal: &Goal, width: usize) -> String {
    let filled = (goal.progress_fraction() * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        ".".repeat(width.saturating_sub(filled)),
        goal.progress_percent()
    )
}
