use crate::{
    commands::AppContext,
    constants::{LOG_LEVELS, PARAM_LOGGER_NAME, PREFIX_LOGGING},
    models::{LogLevel, LogLevelUpdate, MessageResponse},
    output::print_detail,
};
use anyhow::{bail, Result};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum LogLevelCommands {
    /// Show the component and level of a logger
    Show { logger: String },
    /// Set the level of a logger (OFF, TRACE, DEBUG, INFO, WARN, ERROR, FATAL)
    Update { logger: String, level: String },
}

pub async fn run(cmd: LogLevelCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        LogLevelCommands::Show { logger } => {
            let level: LogLevel = ctx
                .client()?
                .fetch(PREFIX_LOGGING, &[(PARAM_LOGGER_NAME, logger.as_str())])
                .await?;
            print_detail(ctx.opts.output, &level)
        }
        LogLevelCommands::Update { logger, level } => {
            let level = normalize_level(&level)?;
            let body = LogLevelUpdate {
                logger_name: logger,
                logging_level: level,
            };
            let reply: MessageResponse = ctx.client()?.patch_json(PREFIX_LOGGING, &body).await?;
            println!("{}", reply.message);
            Ok(())
        }
    }
}

/// Upper-case `level` and reject anything the server would not accept
fn normalize_level(level: &str) -> Result<String> {
    let upper = level.trim().to_ascii_uppercase();
    if !LOG_LEVELS.contains(&upper.as_str()) {
        bail!(
            "Invalid log level '{level}', expected one of: {}",
            LOG_LEVELS.join(", ")
        );
    }
    Ok(upper)
}
