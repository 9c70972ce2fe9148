//! Interaction trait

use async_trait::async_trait;

use crate::error::InteractionError;

use super::actor::Actor;

/// Something an actor can do that changes state, typically by exercising an
/// ability.
#[async_trait]
pub trait Interaction: Send {
    /// Performs this interaction as the given actor.
    ///
    /// # Errors
    ///
    /// Returns an `InteractionError` if the actor lacks a required ability
    /// or the underlying operation fails.
    async fn perform_as(&self, actor: &mut Actor) -> Result<(), InteractionError>;
}
