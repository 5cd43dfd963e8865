//! Presence-to-role reconciliation.
//!
//! A member holds the vanity role while their current activity label contains
//! any of the configured vanity substrings. Decisions are derived purely from the
//! before/after snapshots of a single presence update; the member's actual role
//! list is never consulted.

pub mod gateway;
pub mod handler;
pub mod notify;
pub mod tracker;

pub use handler::apply;
pub use tracker::PresenceTracker;

/// What a member is doing, as far as vanity matching is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ActivityState {
  Present(String),
  #[default]
  Absent,
}

impl ActivityState {
  pub fn label(&self) -> Option<&str> {
    match self {
      ActivityState::Present(label) => Some(label.as_str()),
      ActivityState::Absent => None,
    }
  }
}

impl From<Option<String>> for ActivityState {
  fn from(label: Option<String>) -> Self {
    match label {
      Some(label) => ActivityState::Present(label),
      None => ActivityState::Absent,
    }
  }
}

impl From<Option<&str>> for ActivityState {
  fn from(label: Option<&str>) -> Self {
    label.map(str::to_owned).into()
  }
}

/// One side of a presence transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenceSnapshot {
  pub offline: bool,
  pub activity: ActivityState,
}

impl PresenceSnapshot {
  pub fn offline() -> Self {
    PresenceSnapshot { offline: true, activity: ActivityState::Absent }
  }

  pub fn online(activity: impl Into<ActivityState>) -> Self {
    PresenceSnapshot { offline: false, activity: activity.into() }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
  /// `label` is the current activity that matched.
  Grant { vanity: String, label: String },
  /// `label` is the previous activity that used to match.
  Revoke { vanity: String, label: String },
  NoOp,
}

/// First vanity (in configured order) contained in `label`. Matching is case-sensitive.
pub fn matching_vanity<'v>(label: &str, vanities: &'v [String]) -> Option<&'v str> {
  vanities
    .iter()
    .map(String::as_str)
    .find(|vanity| label.contains(vanity))
}

pub fn matches(label: &str, vanities: &[String]) -> bool {
  matching_vanity(label, vanities).is_some()
}

/// Decides the role transition for a change of activity.
pub fn reconcile(previous: &ActivityState, current: &ActivityState, vanities: &[String]) -> Decision {
  let before = previous
    .label()
    .and_then(|label| matching_vanity(label, vanities).map(|vanity| (vanity, label)));
  let after = current
    .label()
    .and_then(|label| matching_vanity(label, vanities).map(|vanity| (vanity, label)));

  match (before, after) {
    (None, Some((vanity, label))) => Decision::Grant {
      vanity: vanity.to_owned(),
      label: label.to_owned(),
    },
    (Some((vanity, label)), None) => Decision::Revoke {
      vanity: vanity.to_owned(),
      label: label.to_owned(),
    },
    // Already granted, or never eligible.
    (Some(_), Some(_)) | (None, None) => Decision::NoOp,
  }
}

/// Like [`reconcile`], but coming online or going offline is never an activity change.
pub fn reconcile_presence(
  previous: &PresenceSnapshot,
  current: &PresenceSnapshot,
  vanities: &[String],
) -> Decision {
  if previous.offline || current.offline {
    return Decision::NoOp;
  }

  reconcile(&previous.activity, &current.activity, vanities)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn vanities(list: &[&str]) -> Vec<String> {
    list.iter().map(|v| v.to_string()).collect()
  }

  fn state(label: Option<&str>) -> ActivityState {
    label.into()
  }

  #[test]
  fn matching_is_case_sensitive_containment() {
    let set = vanities(&["vanity123"]);

    assert!(matches("vanity123", &set));
    assert!(matches("playing CoolGame vanity123", &set));
    assert!(matches("xxvanity123yy", &set));
    assert!(!matches("Vanity123", &set));
    assert!(!matches("vanity 123", &set));
    assert!(!matches("", &set));
  }

  #[test]
  fn first_configured_vanity_wins() {
    let set = vanities(&["/chill", "/chillhive"]);
    assert_eq!(matching_vanity("discord.gg/chillhive", &set), Some("/chill"));

    let set = vanities(&["/chillhive", "/chill"]);
    assert_eq!(matching_vanity("discord.gg/chillhive", &set), Some("/chillhive"));
  }

  #[test]
  fn empty_vanity_set_never_matches() {
    assert!(!matches("anything", &[]));
    assert_eq!(reconcile(&state(None), &state(Some("anything")), &[]), Decision::NoOp);
  }

  #[test]
  fn decision_table() {
    let set = vanities(&["vanity123"]);
    let grant = |label: &str| Decision::Grant { vanity: "vanity123".into(), label: label.into() };
    let revoke = |label: &str| Decision::Revoke { vanity: "vanity123".into(), label: label.into() };

    let cases = [
      (None, None, Decision::NoOp),
      (None, Some("playing CoolGame vanity123"), grant("playing CoolGame vanity123")),
      (None, Some("plain game"), Decision::NoOp),
      (Some("vanity123 stream"), None, revoke("vanity123 stream")),
      (Some("plain"), None, Decision::NoOp),
      (Some("plain"), Some("other plain"), Decision::NoOp),
      (Some("plain"), Some("now vanity123"), grant("now vanity123")),
      (Some("vanity123 stream"), Some("plain game"), revoke("vanity123 stream")),
      (Some("vanity123"), Some("vanity123 still here"), Decision::NoOp),
    ];

    for (before, after, expected) in cases {
      assert_eq!(
        reconcile(&state(before), &state(after), &set),
        expected,
        "{before:?} -> {after:?}"
      );
    }
  }

  #[test]
  fn switching_between_vanities_keeps_the_role() {
    let set = vanities(&["one", "two"]);
    assert_eq!(reconcile(&state(Some("one")), &state(Some("two")), &set), Decision::NoOp);
  }

  #[test]
  fn offline_on_either_side_is_skipped() {
    let set = vanities(&["vanity123"]);
    let matching = PresenceSnapshot::online(Some("vanity123"));
    let plain = PresenceSnapshot::online(Some("plain"));
    let gone = PresenceSnapshot { offline: true, activity: ActivityState::Present("vanity123".into()) };

    assert_eq!(reconcile_presence(&PresenceSnapshot::offline(), &matching, &set), Decision::NoOp);
    assert_eq!(reconcile_presence(&matching, &PresenceSnapshot::offline(), &set), Decision::NoOp);
    assert_eq!(reconcile_presence(&plain, &gone, &set), Decision::NoOp);
    assert_eq!(reconcile_presence(&gone, &plain, &set), Decision::NoOp);
    assert!(matches!(reconcile_presence(&plain, &matching, &set), Decision::Grant { .. }));
  }
}
