//! Anonymize command

use clap::Args;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Text to anonymize (reads stdin when omitted)
    pub text: Option<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, engine) = super::build_engine(config_path)?;
        let text = super::read_text(self.text.as_deref())?;

        let anonymized = engine.anonymize(&text).await?;
        println!("{anonymized}");

        Ok(0)
    }
}
