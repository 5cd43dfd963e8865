use chrono::{TimeZone, Utc};
use poise::serenity_prelude as serenity;

use crate::util::types::{Context, Error};

/// Name, age, size and locale of the current server.
#[poise::command(
  prefix_command,
  guild_only,
  rename = "serverinfo"
)]
pub async fn execute(ctx: Context<'_>) -> Result<(), Error> {
  let Some(guild) = ctx.guild() else {
    ctx.say("Server details are not available yet, try again in a moment.").await?;
    return Ok(());
  };

  let created_at = created_on(guild.id.created_at().unix_timestamp());
  let icon = guild.icon_url();

  ctx.send(|m|
    m.embed(|e| {
      e.title(format!("Server Info: {}", guild.name))
        .colour(serenity::utils::Colour::from_rgb(46, 204, 113))
        .field("Server ID", guild.id, false)
        .field("Created At", created_at, false)
        .field("Total Members", guild.member_count, false)
        .field("Locale", &guild.preferred_locale, false);

      if let Some(icon) = icon {
        e.thumbnail(icon);
      }
      e
    })
  ).await?;

  Ok(())
}

/// Renders a unix timestamp like "March 04, 2021".
pub fn created_on(unix: i64) -> String {
  match Utc.timestamp_opt(unix, 0).single() {
    Some(date) => date.format("%B %d, %Y").to_string(),
    None => "Unknown".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::created_on;

  #[test]
  fn formats_creation_date() {
    assert_eq!(created_on(1_614_859_200), "March 04, 2021");
    assert_eq!(created_on(0), "January 01, 1970");
  }
}
