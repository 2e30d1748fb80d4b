use anyhow::Result;

use crate::cli::ConfigCommands;
use crate::config::CliConfig;

pub fn execute(command: ConfigCommands, config: &CliConfig) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let rendered = if json {
                config.display_as_json()?
            } else {
                config.display_as_toml()?
            };
            println!("{}", rendered.trim_end());
        }
        ConfigCommands::Init { path, force } => {
            let path = match path {
                Some(path) => path,
                None => CliConfig::default_config_path()?,
            };
            CliConfig::create_example(&path, force)?;
            println!("Wrote example configuration to {}", path.display());
        }
    }
    Ok(())
}
