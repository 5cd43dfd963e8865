use log::{info, warn};
use poise::serenity_prelude as serenity;
use serenity::{ChannelId, GuildId, RoleId, UserId};

use super::gateway::RoleGateway;
use super::notify::LogEntry;
use super::Decision;

/// Carries out a decision. Failures are logged and the decision is dropped;
/// nothing is retried and nothing is returned to the caller.
pub async fn apply<G: RoleGateway + ?Sized>(
  gateway: &G,
  decision: &Decision,
  guild_id: GuildId,
  user_id: UserId,
  role_id: RoleId,
  log_channel_id: ChannelId,
) {
  let (granting, vanity) = match decision {
    Decision::Grant { vanity, .. } => (true, vanity),
    Decision::Revoke { vanity, .. } => (false, vanity),
    Decision::NoOp => return,
  };

  let role = match gateway.fetch_role(guild_id, role_id).await {
    Ok(role) => role,
    Err(why) => {
      warn!("Could not resolve vanity role for {}: {}", user_id, why);
      return;
    }
  };

  let member = match gateway.fetch_member(guild_id, user_id).await {
    Ok(member) => member,
    Err(why) => {
      warn!("Could not resolve member {}: {}", user_id, why);
      return;
    }
  };

  let reason = format!("Vanity `{vanity}` in activity");
  let outcome = if granting {
    gateway.add_role(guild_id, user_id, &role, &reason).await
  } else {
    gateway.remove_role(guild_id, user_id, &role, &reason).await
  };

  if let Err(why) = outcome {
    warn!(
      "Could not {} role {} for {}: {}",
      if granting { "assign" } else { "remove" },
      role.name,
      member.display_name,
      why
    );
    return;
  }

  info!(
    "{} role {} {} {} ({})",
    if granting { "Assigned" } else { "Removed" },
    role.name,
    if granting { "to" } else { "from" },
    member.display_name,
    vanity
  );

  if let Some(entry) = LogEntry::for_decision(decision, &member, &role) {
    if let Err(why) = gateway.send_log(log_channel_id, &entry).await {
      warn!("Could not send log entry to channel {}: {}", log_channel_id, why);
    }
  }
}
