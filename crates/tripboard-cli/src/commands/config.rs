use crate::app::AppContext;
use crate::config::{write_config, TripboardConfig};
use crate::errors::CliError;

pub fn handle_config_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    write_config(&path, &TripboardConfig::default())?;
    if !ctx.quiet() {
        println!("Wrote config to {}", path.display());
    }
    Ok(())
}

pub fn handle_config_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let config = ctx.config()?;
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        let text =
            toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
        print!("{}", text);
    }
    Ok(())
}
