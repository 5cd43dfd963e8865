use poise::serenity_prelude::{Context, Presence};
use crate::structures::GlobalData as Data;
use crate::util::types::{Error};
use crate::vanity::{self, gateway::DiscordGateway, tracker::snapshot_of};

/// Never fails: a decision that cannot be carried out is logged and dropped
/// so the presence stream keeps flowing.
pub(crate) async fn handle(ctx: &Context, presence: &Presence, data: &Data) -> Result<(), Error> {
    let Some(guild_id) = presence.guild_id else {
        return Ok(());
    };
    let user_id = presence.user.id;

    let current = snapshot_of(presence);
    let previous = data.presences.observe(guild_id, user_id, current.clone());
    log::debug!(
        "{}: before {:?}, after {:?}",
        user_id, previous.activity, current.activity
    );

    let decision = vanity::reconcile_presence(&previous, &current, &data.config.vanities);
    vanity::apply(
        &DiscordGateway::new(ctx),
        &decision,
        guild_id,
        user_id,
        data.config.role_id(),
        data.config.log_channel_id(),
    )
    .await;

    Ok(())
}
