use poise::serenity_prelude as serenity;

use crate::util::types::{Context, Error};

/// Who made this bot and what it is for.
#[poise::command(
  prefix_command,
  rename = "info"
)]
pub async fn execute(ctx: Context<'_>) -> Result<(), Error> {
  let avatar = ctx.serenity_context().cache.current_user().face();

  ctx.send(|m|
    m.embed(|e|
      e.title("Bot Information")
        .description("Here is some information about this bot.")
        .thumbnail(avatar)
        .field("Developer", "Sukhoi Su-57 (<@1055478146981429396>)", false)
        .field("Chill Hive Oxnz", "!! Dev.. ?🥀 (<@1086299728318308382>)", false)
        .field("Made For", "discord.gg/chillhive", false)
        .colour(serenity::utils::Colour::BLUE))
  ).await?;

  Ok(())
}
