use poise::serenity_prelude as serenity;
use crate::commands;

use crate::util::types::{Error, FrameworkError};
use crate::structures::{Config, GlobalData as Data};
use crate::events;
use crate::vanity::PresenceTracker;

pub const CONFIG_PATH_ENV: &str = "VANITYD_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yml";

pub fn config_path() -> String {
  std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub async fn init() -> Result<poise::FrameworkBuilder<Data, Error>, Error> {
  /* Loading config file */
  let config = Config::load(config_path())?;
  log::info!("Watching {} vanities for role {}", config.vanities.len(), config.role_id);

  // Presence updates need the privileged presence and member intents.
  let intents = serenity::GatewayIntents::non_privileged()
    | serenity::GatewayIntents::GUILD_PRESENCES
    | serenity::GatewayIntents::GUILD_MEMBERS
    | serenity::GatewayIntents::MESSAGE_CONTENT;

  /* Creating Poise framework */
  let framework = poise::Framework::builder()
    .options(poise::FrameworkOptions {
      commands: commands::prepare(),
      prefix_options: poise::PrefixFrameworkOptions {
        prefix: Some(config.prefix.clone()),
        ..Default::default()
      },
      event_handler: |ctx, event, _framework, data| Box::pin(events::handle(ctx, event, data)),
      on_error: |error| Box::pin(on_error(error)),
      ..Default::default()
    })
    .token(config.authentication.discord.clone())
    .intents(intents)
    .setup(|_ctx, _ready, _framework| {
      Box::pin(async move {
        Ok(Data {
          config,
          presences: PresenceTracker::new(),
        })
      })
    });

    Ok(framework)
}

async fn on_error(error: FrameworkError<'_>) {
  match error {
    poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
      if let Err(why) = ctx.say("You do not have the required permissions to use this command.").await {
        log::error!("Could not report missing permissions: {}", why);
      }
    }
    poise::FrameworkError::Command { error, ctx, .. } => {
      log::error!("Command `{}` failed: {}", ctx.command().name, error);
    }
    error => {
      if let Err(why) = poise::builtins::on_error(error).await {
        log::error!("Error while handling error: {}", why);
      }
    }
  }
}
