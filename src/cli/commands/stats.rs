//! Stats command

use clap::Args;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Emit the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsArgs {
    /// Execute the stats command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, engine) = super::build_engine(config_path)?;
        let stats = engine.stats().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("Total mappings: {}", stats.total);
            println!("  email: {}", stats.by_category.email);
            println!("  phone: {}", stats.by_category.phone);
            println!("  name:  {}", stats.by_category.name);
        }

        Ok(0)
    }
}
