mod config;
mod goal;
mod summary;
mod system;
mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in transaction::definitions()
        .into_iter()
        .chain(goal::definitions())
        .chain(summary::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

pub(crate) fn require_args(args: &[&str], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("Usage: {}", usage)))
    }
}
