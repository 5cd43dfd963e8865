use crate::structures;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Command = poise::Command<structures::GlobalData, Error>;
pub type Context<'a> = poise::Context<'a, structures::GlobalData, Error>;
pub type FrameworkError<'a> = poise::FrameworkError<'a, structures::GlobalData, Error>;
