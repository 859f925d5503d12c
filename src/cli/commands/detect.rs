//! Detect command (read-only scan)

use clap::Args;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Text to scan (reads stdin when omitted)
    pub text: Option<String>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_config, engine) = super::build_engine(config_path)?;
        let text = super::read_text(self.text.as_deref())?;

        let report = engine.detect(&text)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if report.is_empty() {
            println!("No PII detected");
        } else {
            print_category("Emails", &report.emails);
            print_category("Phones", &report.phones);
            print_category("Names", &report.names);
        }

        Ok(0)
    }
}

fn print_category(title: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    println!("{title}:");
    for value in values {
        println!("  {value}");
    }
}
