use poise::serenity_prelude as serenity;
use async_trait::async_trait;
use serenity::{ChannelId, GuildId, Mentionable, RoleId, UserId};

use super::notify::LogEntry;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
  #[error("role {0} does not exist in guild {1}")]
  RoleNotFound(RoleId, GuildId),
  #[error(transparent)]
  Discord(#[from] serenity::Error),
}

/// A role as resolved for one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRef {
  pub id: RoleId,
  pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRef {
  pub display_name: String,
  pub mention: String,
  pub avatar_url: String,
}

/// Everything reconciliation needs from Discord.
#[async_trait]
pub trait RoleGateway: Send + Sync {
  async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<RoleRef, GatewayError>;
  async fn fetch_member(&self, guild_id: GuildId, user_id: UserId) -> Result<MemberRef, GatewayError>;
  async fn add_role(&self, guild_id: GuildId, user_id: UserId, role: &RoleRef, reason: &str) -> Result<(), GatewayError>;
  async fn remove_role(&self, guild_id: GuildId, user_id: UserId, role: &RoleRef, reason: &str) -> Result<(), GatewayError>;
  async fn send_log(&self, channel_id: ChannelId, entry: &LogEntry) -> Result<(), GatewayError>;
}

pub struct DiscordGateway<'a> {
  ctx: &'a serenity::Context,
}

impl<'a> DiscordGateway<'a> {
  pub fn new(ctx: &'a serenity::Context) -> Self {
    DiscordGateway { ctx }
  }
}

#[async_trait]
impl RoleGateway for DiscordGateway<'_> {
  async fn fetch_role(&self, guild_id: GuildId, role_id: RoleId) -> Result<RoleRef, GatewayError> {
    // Always over HTTP: the role may have been renamed or deleted since startup.
    let roles = guild_id.roles(&self.ctx.http).await?;

    roles
      .get(&role_id)
      .map(|role| RoleRef { id: role.id, name: role.name.clone() })
      .ok_or(GatewayError::RoleNotFound(role_id, guild_id))
  }

  async fn fetch_member(&self, guild_id: GuildId, user_id: UserId) -> Result<MemberRef, GatewayError> {
    let member = guild_id.member(self.ctx, user_id).await?;

    Ok(MemberRef {
      display_name: member.display_name().into_owned(),
      mention: member.mention().to_string(),
      avatar_url: member.user.face(),
    })
  }

  async fn add_role(&self, guild_id: GuildId, user_id: UserId, role: &RoleRef, reason: &str) -> Result<(), GatewayError> {
    self.ctx
      .http
      .add_member_role(guild_id.0, user_id.0, role.id.0, Some(reason))
      .await?;

    Ok(())
  }

  async fn remove_role(&self, guild_id: GuildId, user_id: UserId, role: &RoleRef, reason: &str) -> Result<(), GatewayError> {
    self.ctx
      .http
      .remove_member_role(guild_id.0, user_id.0, role.id.0, Some(reason))
      .await?;

    Ok(())
  }

  async fn send_log(&self, channel_id: ChannelId, entry: &LogEntry) -> Result<(), GatewayError> {
    channel_id
      .send_message(&self.ctx.http, |m| m.embed(|e| entry.render(e)))
      .await?;

    Ok(())
  }
}
