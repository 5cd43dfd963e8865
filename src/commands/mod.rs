use crate::util::types::Command;

pub mod fun;
pub mod general;

pub fn prepare() -> Vec<Command> {
    vec![
      general::ping(),
      general::info(),
      general::serverinfo(),
      general::say(),
      fun::flip(),
      fun::roll(),
      fun::eight_ball(),
    ]
}
