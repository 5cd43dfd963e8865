use std::collections::HashMap;
use std::sync::Mutex;

use poise::serenity_prelude as serenity;
use serenity::{ActivityType, GuildId, OnlineStatus, Presence, UserId};

use super::{ActivityState, PresenceSnapshot};

/// Remembers the last presence seen for every member, since the gateway only
/// delivers the new one.
#[derive(Default)]
pub struct PresenceTracker {
  seen: Mutex<HashMap<(GuildId, UserId), PresenceSnapshot>>,
}

impl PresenceTracker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores `current` and returns what was stored before it. Members never seen
  /// before count as offline.
  pub fn observe(&self, guild_id: GuildId, user_id: UserId, current: PresenceSnapshot) -> PresenceSnapshot {
    let mut seen = match self.seen.lock() {
      Ok(seen) => seen,
      Err(poisoned) => poisoned.into_inner(),
    };

    seen
      .insert((guild_id, user_id), current)
      .unwrap_or_else(PresenceSnapshot::offline)
  }

  /// Drops a member who left, so a rejoin starts from offline again.
  pub fn forget(&self, guild_id: GuildId, user_id: UserId) -> bool {
    let mut seen = match self.seen.lock() {
      Ok(seen) => seen,
      Err(poisoned) => poisoned.into_inner(),
    };

    seen.remove(&(guild_id, user_id)).is_some()
  }

  /// Seeds the tracker from the presences a guild arrives with.
  pub fn seed<'a>(&self, guild_id: GuildId, presences: impl IntoIterator<Item = &'a Presence>) -> usize {
    let mut seeded = 0;
    for presence in presences {
      self.observe(guild_id, presence.user.id, snapshot_of(presence));
      seeded += 1;
    }
    seeded
  }
}

pub fn snapshot_of(presence: &Presence) -> PresenceSnapshot {
  PresenceSnapshot {
    offline: presence.status == OnlineStatus::Offline,
    activity: activity_of(presence),
  }
}

/// The member's primary activity. Custom statuses carry their text in `state`.
pub fn activity_of(presence: &Presence) -> ActivityState {
  let Some(activity) = presence.activities.first() else {
    return ActivityState::Absent;
  };

  let label = match (activity.kind, &activity.state) {
    (ActivityType::Custom, Some(state)) => state.clone(),
    _ => activity.name.clone(),
  };

  ActivityState::Present(label)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_member_starts_offline() {
    let tracker = PresenceTracker::new();
    let previous = tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(Some("game")));

    assert_eq!(previous, PresenceSnapshot::offline());
  }

  #[test]
  fn observe_returns_the_previous_snapshot() {
    let tracker = PresenceTracker::new();
    tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(Some("first")));

    let previous = tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(None::<String>));
    assert_eq!(previous, PresenceSnapshot::online(Some("first")));

    let previous = tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::offline());
    assert_eq!(previous, PresenceSnapshot::online(None::<String>));
  }

  #[test]
  fn forgotten_member_starts_offline_again() {
    let tracker = PresenceTracker::new();
    tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(Some("vanity123")));

    assert!(tracker.forget(GuildId(1), UserId(2)));
    assert!(!tracker.forget(GuildId(1), UserId(2)));

    let previous = tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(Some("plain game")));
    assert_eq!(previous, PresenceSnapshot::offline());

    let vanities = vec!["vanity123".to_string()];
    let decision = crate::vanity::reconcile_presence(
      &previous,
      &PresenceSnapshot::online(Some("plain game")),
      &vanities,
    );
    assert_eq!(decision, crate::vanity::Decision::NoOp);
  }

  #[test]
  fn members_are_tracked_per_guild() {
    let tracker = PresenceTracker::new();
    tracker.observe(GuildId(1), UserId(2), PresenceSnapshot::online(Some("here")));

    let previous = tracker.observe(GuildId(9), UserId(2), PresenceSnapshot::online(Some("there")));
    assert_eq!(previous, PresenceSnapshot::offline());
  }
}
