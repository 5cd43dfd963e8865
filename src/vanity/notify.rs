use poise::serenity_prelude as serenity;
use serenity::{utils::Colour, CreateEmbed, Timestamp};

use super::gateway::{MemberRef, RoleRef};
use super::Decision;
use crate::util::string::ellipsis;

// Discord caps embed field values at 1024 characters and descriptions at 4096.
const FIELD_LIMIT: usize = 1024;
const DESCRIPTION_LIMIT: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
  Assigned,
  Removed,
  Online,
}

impl LogKind {
  pub fn title(self) -> &'static str {
    match self {
      LogKind::Assigned => "Role Assigned",
      LogKind::Removed => "Role Removed",
      LogKind::Online => "Role Bot online",
    }
  }

  pub fn colour(self) -> Colour {
    match self {
      LogKind::Assigned => Colour::from_rgb(46, 204, 113),
      LogKind::Removed | LogKind::Online => Colour::from_rgb(231, 76, 60),
    }
  }
}

/// A line in the log channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
  pub kind: LogKind,
  pub author_name: String,
  pub author_icon: String,
  pub description: String,
  pub role_name: Option<String>,
  pub user_mention: String,
}

impl LogEntry {
  /// Nothing to log for [`Decision::NoOp`].
  pub fn for_decision(decision: &Decision, member: &MemberRef, role: &RoleRef) -> Option<LogEntry> {
    let (kind, description) = match decision {
      Decision::Grant { label, .. } => (
        LogKind::Assigned,
        format!(
          "{} has been assigned the role **{}** for activity: {}",
          member.mention, role.name, label
        ),
      ),
      Decision::Revoke { label, .. } => (
        LogKind::Removed,
        format!(
          "{} has been removed from the role **{}** for activity: {}",
          member.mention, role.name, label
        ),
      ),
      Decision::NoOp => return None,
    };

    Some(LogEntry {
      kind,
      author_name: member.display_name.clone(),
      author_icon: member.avatar_url.clone(),
      description,
      role_name: Some(role.name.clone()),
      user_mention: member.mention.clone(),
    })
  }

  pub fn online(bot: &MemberRef) -> LogEntry {
    LogEntry {
      kind: LogKind::Online,
      author_name: bot.display_name.clone(),
      author_icon: bot.avatar_url.clone(),
      description: "Initial bot presence".into(),
      role_name: None,
      user_mention: bot.mention.clone(),
    }
  }

  pub fn bounded_description(&self) -> String {
    ellipsis(self.description.clone(), DESCRIPTION_LIMIT)
  }

  pub fn render<'e>(&self, e: &'e mut CreateEmbed) -> &'e mut CreateEmbed {
    let role = self.role_name.as_deref().unwrap_or("None");

    e.title(self.kind.title())
      .description(self.bounded_description())
      .colour(self.kind.colour())
      .author(|a| a.name(&self.author_name).icon_url(&self.author_icon))
      .field("Role", ellipsis(role.to_string(), FIELD_LIMIT), false)
      .field("User", &self.user_mention, false)
      .footer(|f| f.text("Action performed at"))
      .timestamp(Timestamp::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serenity::RoleId;

  fn member() -> MemberRef {
    MemberRef {
      display_name: "Sukhoi".into(),
      mention: "<@42>".into(),
      avatar_url: "https://cdn.example/avatar.png".into(),
    }
  }

  fn role() -> RoleRef {
    RoleRef { id: RoleId(7), name: "Supporter".into() }
  }

  #[test]
  fn grant_logs_the_current_activity() {
    let decision = Decision::Grant { vanity: "/chillhive".into(), label: "discord.gg/chillhive".into() };
    let entry = LogEntry::for_decision(&decision, &member(), &role()).unwrap();

    assert_eq!(entry.kind, LogKind::Assigned);
    assert_eq!(entry.kind.title(), "Role Assigned");
    assert_eq!(
      entry.description,
      "<@42> has been assigned the role **Supporter** for activity: discord.gg/chillhive"
    );
    assert_eq!(entry.role_name.as_deref(), Some("Supporter"));
    assert_eq!(entry.author_name, "Sukhoi");
  }

  #[test]
  fn revoke_logs_the_previous_activity() {
    let decision = Decision::Revoke { vanity: "/chillhive".into(), label: "discord.gg/chillhive".into() };
    let entry = LogEntry::for_decision(&decision, &member(), &role()).unwrap();

    assert_eq!(entry.kind, LogKind::Removed);
    assert_eq!(
      entry.description,
      "<@42> has been removed from the role **Supporter** for activity: discord.gg/chillhive"
    );
  }

  #[test]
  fn long_activity_is_cut_to_the_description_limit() {
    let label = "vanity123 ".repeat(600);
    let decision = Decision::Grant { vanity: "vanity123".into(), label };
    let entry = LogEntry::for_decision(&decision, &member(), &role()).unwrap();

    let description = entry.bounded_description();
    assert_eq!(description.chars().count(), DESCRIPTION_LIMIT);
    assert!(description.ends_with("..."));
    assert!(description.starts_with("<@42> has been assigned the role **Supporter**"));
  }

  #[test]
  fn noop_logs_nothing() {
    assert_eq!(LogEntry::for_decision(&Decision::NoOp, &member(), &role()), None);
  }

  #[test]
  fn only_assignments_are_green() {
    assert_ne!(LogKind::Assigned.colour(), LogKind::Removed.colour());
    assert_eq!(LogKind::Removed.colour(), LogKind::Online.colour());
    assert_eq!(LogEntry::online(&member()).role_name, None);
  }
}
