//! Deanonymize command

use clap::Args;

/// Arguments for the deanonymize command
#[derive(Args, Debug)]
pub struct DeanonymizeArgs {
    /// Text containing tokens to restore (reads stdin when omitted)
    pub text: Option<String>,
}

impl DeanonymizeArgs {
    /// Execute the deanonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, engine) = super::build_engine(config_path)?;
        let text = super::read_text(self.text.as_deref())?;

        let restored = engine.deanonymize(&text).await?;
        println!("{restored}");

        Ok(0)
    }
}
