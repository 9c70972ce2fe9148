//! Screenplay layer
//!
//! Actors hold abilities, perform interactions, and answer questions. The
//! REST capability consumes this surface through `Actor::ability` lookups;
//! nothing here knows about HTTP.

mod ability;
mod actor;
mod interaction;
mod question;

pub use ability::{Abilities, Ability, MissingAbility};
pub use actor::Actor;
pub use interaction::Interaction;
pub use question::Question;
