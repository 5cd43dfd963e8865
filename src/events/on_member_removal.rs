use poise::serenity_prelude::{GuildId, User};
use crate::structures::GlobalData as Data;
use crate::util::types::{Error};

pub(crate) fn handle(guild_id: GuildId, user: &User, data: &Data) -> Result<(), Error> {
    if data.presences.forget(guild_id, user.id) {
        log::debug!("Forgot presence of {} after leaving {}", user.id, guild_id);
    }

    Ok(())
}
