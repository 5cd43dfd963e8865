use crate::util::types::{Context, Error};

/// Repeats the message as the bot and removes the invoking message.
#[poise::command(
  prefix_command,
  guild_only,
  required_permissions = "ADMINISTRATOR",
  rename = "say"
)]
pub async fn execute(
  ctx: Context<'_>,
  #[rest] message: String,
) -> Result<(), Error> {
  if let poise::Context::Prefix(prefix) = ctx {
    if let Err(why) = prefix.msg.delete(ctx).await {
      log::warn!("Could not delete `say` invocation: {}", why);
    }
  }

  ctx.channel_id()
    .say(&ctx.serenity_context().http, message)
    .await?;

  Ok(())
}
