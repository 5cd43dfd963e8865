use rand::Rng;

use crate::util::types::{Context, Error};

pub fn flip_coin(rng: &mut impl Rng) -> &'static str {
  if rng.random_bool(0.5) { "Heads" } else { "Tails" }
}

#[poise::command(
  prefix_command,
  rename = "flip"
)]
pub async fn execute(ctx: Context<'_>) -> Result<(), Error> {
  let result = flip_coin(&mut rand::rng());
  ctx.say(format!("The coin landed on: **{result}**")).await?;

  Ok(())
}
