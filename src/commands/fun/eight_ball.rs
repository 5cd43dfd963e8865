use rand::seq::IndexedRandom;
use rand::Rng;

use crate::util::types::{Context, Error};

pub const RESPONSES: [&str; 6] = ["Yes", "No", "Maybe", "Ask again later", "Definitely not", "Absolutely!"];

pub fn shake(rng: &mut impl Rng) -> &'static str {
  RESPONSES.choose(rng).copied().unwrap_or(RESPONSES[0])
}

/// Ask the magic 8-ball a question.
#[poise::command(
  prefix_command,
  rename = "8ball"
)]
pub async fn execute(
  ctx: Context<'_>,
  #[rest] question: String,
) -> Result<(), Error> {
  let answer = shake(&mut rand::rng());
  ctx.say(format!("Question: {question}\nAnswer: {answer}")).await?;

  Ok(())
}
