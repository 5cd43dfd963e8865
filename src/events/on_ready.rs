use poise::serenity_prelude as serenity;
use serenity::{
    model::{gateway::Activity, user::OnlineStatus},
    Context, Mentionable, Ready,
};
use crate::structures::GlobalData as Data;
use crate::util::types::{Error};
use crate::vanity::{
    gateway::{DiscordGateway, MemberRef, RoleGateway},
    notify::LogEntry,
};

pub(crate) async fn handle(ctx: &Context, ready: &Ready, data: &Data) -> Result<(), Error> {
    log::info!("Bot connected as {}", ready.user.name);
    ctx.set_presence(Some(Activity::watching(&data.config.status)), OnlineStatus::Online).await;

    let bot = MemberRef {
        display_name: ready.user.name.clone(),
        mention: ready.user.id.mention().to_string(),
        avatar_url: ready.user.face(),
    };

    let gateway = DiscordGateway::new(ctx);
    if let Err(why) = gateway.send_log(data.config.log_channel_id(), &LogEntry::online(&bot)).await {
        log::warn!("Log channel not reachable, check `log_channel_id`: {}", why);
    }

    Ok(())
}
