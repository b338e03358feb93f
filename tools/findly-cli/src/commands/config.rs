//! Configuration management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("currency", ctx.config.api.currency.code());

    ctx.output.info("[user]");
    let budget = if ctx.config.user.has_budget() {
        ctx.config.user.budget.to_string()
    } else {
        "none".to_string()
    };
    ctx.output.kv("budget", &budget);
    ctx.output.kv("user_id", ctx.config.user.user_id());
    let language = ctx.config.user.language;
    if language.is_rtl() {
        ctx.output
            .kv("language", &format!("{} (right-to-left)", language.code()));
    } else {
        ctx.output.kv("language", language.code());
    }

    ctx.output.info("[badges]");
    let badges = &ctx.config.badges;
    ctx.output
        .kv("excellent_price_score", &badges.excellent_price_score.to_string());
    ctx.output
        .kv("good_price_score", &badges.good_price_score.to_string());
    ctx.output
        .kv("risk_score_threshold", &badges.risk_score_threshold.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("findly.toml");

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.info("Keeping existing config");
            return Ok(());
        }
    }

    tokio::fs::write(&config_path, generate_default_config()).await?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.problems();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    if ctx.config.user.user_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        warnings.push("user.user_id is blank; requests will be sent as guest".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
