use poise::serenity_prelude::Guild;
use crate::structures::GlobalData as Data;
use crate::util::types::{Error};

pub(crate) fn handle(guild: &Guild, data: &Data) -> Result<(), Error> {
    let seeded = data.presences.seed(guild.id, guild.presences.values());
    log::info!("Tracking {} presences in {}", seeded, guild.name);

    Ok(())
}
