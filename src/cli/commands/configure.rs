use anyhow::Result;

use crate::config::{ConfigManager, DEFAULT_ENDPOINT};
use crate::ui::Style;

pub struct ConfigureOptions {
    pub endpoint: Option<String>,
    pub show: bool,
}

pub fn run_configure(options: ConfigureOptions) -> Result<()> {
    let manager = ConfigManager::new()?;

    let set_something = options.endpoint.is_some();
    if let Some(endpoint) = options.endpoint {
        let mut config = manager.load_or_default();
        config.endpoint = Some(endpoint.clone());
        manager.save(&config)?;
        println!(
            "{} Endpoint set to {}",
            Style::success("✓"),
            Style::value(endpoint)
        );
    }

    if options.show || !set_something {
        let config = manager.load_or_default();
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        println!("{}", Style::header("Configuration"));
        println!(
            "  {}   {}",
            Style::label("endpoint"),
            Style::value(endpoint)
        );
        println!(
            "  {}       {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
    }

    Ok(())
}
