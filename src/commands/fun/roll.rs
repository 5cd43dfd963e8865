use rand::Rng;

use crate::util::types::{Context, Error};

pub fn roll_die(rng: &mut impl Rng) -> u8 {
  rng.random_range(1..=6)
}

#[poise::command(
  prefix_command,
  rename = "roll"
)]
pub async fn execute(ctx: Context<'_>) -> Result<(), Error> {
  let roll = roll_die(&mut rand::rng());
  ctx.say(format!("You rolled a **{roll}**!")).await?;

  Ok(())
}
