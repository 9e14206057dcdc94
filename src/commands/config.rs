use anyhow::Result;
use geonote_core::config::GeoNoteConfig;
use owo_colors::OwoColorize;

pub fn init(force: bool) -> Result<()> {
    let config_path = GeoNoteConfig::config_path()?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\
            Use --force to overwrite it",
            config_path.display()
        );
    }

    GeoNoteConfig::create_default_config(&config_path)?;
    println!(
        "{}",
        format!("  Wrote default config to {}", config_path.display()).green()
    );

    Ok(())
}

pub fn path() -> Result<()> {
    let config_path = GeoNoteConfig::config_path()?;
    let state = if config_path.exists() {
        "exists".green().to_string()
    } else {
        "not created, using defaults".dimmed().to_string()
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {} ({})", config_path.display(), state);

    Ok(())
}
