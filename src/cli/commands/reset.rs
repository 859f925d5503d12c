//! Reset command (clears the mapping store)

use clap::Args;

/// Arguments for the reset command
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation check
    #[arg(long)]
    pub yes: bool,
}

impl ResetArgs {
    /// Execute the reset command
    ///
    /// Clearing the store makes every previously issued token permanently
    /// unresolvable, so the flag is required.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        if !self.yes {
            eprintln!("reset discards all token mappings; re-run with --yes to confirm");
            return Ok(2);
        }

        let (_config, engine) = super::build_engine(config_path)?;
        let stats = engine.stats().await?;
        engine.reset().await?;

        println!("Cleared {} mappings", stats.total);
        Ok(0)
    }
}
