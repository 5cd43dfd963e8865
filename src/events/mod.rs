use crate::util::types::{Error};
use crate::structures::GlobalData as Data;
use poise::{serenity_prelude::Context, Event};

mod on_guild_create;
mod on_member_removal;
mod on_presence_update;
mod on_ready;

pub async fn handle<'a>(ctx: &Context, event: &Event<'a>, data: &Data) -> Result<(), Error> {
    match event {
        Event::Ready { data_about_bot } => on_ready::handle(ctx, data_about_bot, data).await,
        Event::GuildCreate { guild, .. } => on_guild_create::handle(guild, data),
        Event::GuildMemberRemoval { guild_id, user, .. } => on_member_removal::handle(*guild_id, user, data),
        Event::PresenceUpdate { new_data } => on_presence_update::handle(ctx, new_data, data).await,
        _ => Ok(()),
    }
}
