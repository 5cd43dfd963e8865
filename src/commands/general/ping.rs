use poise::serenity_prelude as serenity;

use crate::util::types::{Context, Error};

use serenity::{utils::Colour, ShardId};

/// Gateway latency of the shard serving this guild.
#[poise::command(
  prefix_command,
  rename = "ping"
)]
pub async fn execute(ctx: Context<'_>) ->  Result<(), Error> {
    let latency = {
        let shard_manager = ctx.framework().shard_manager();
        let manager = shard_manager.lock().await;
        let runners = manager.runners.lock().await;

        runners
            .get(&ShardId(ctx.serenity_context().shard_id))
            .and_then(|runner| runner.latency)
            .map(|latency| format!("{}ms", latency.as_millis()))
            .unwrap_or_else(|| "?ms".to_string())
    };

    ctx.send(|m| {
        m.embed(|e| {
            e.title("Pong!")
                .description(format!("Latency: `{}`", latency))
                .colour(Colour::BLUE)
        })
    })
    .await?;

  Ok(())
}
