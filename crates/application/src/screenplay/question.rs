//! Question trait

use crate::error::QuestionError;

use super::actor::Actor;

/// A read-only query evaluated against an actor's state.
///
/// Questions never mutate the actor; they look up whatever ability holds
/// the state they report on and fail with a typed error when that state is
/// absent.
pub trait Question {
    /// The value this question resolves to.
    type Answer;

    /// Evaluates the question against the actor.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` when the answer cannot be produced.
    fn answered_by(&self, actor: &Actor) -> Result<Self::Answer, QuestionError>;
}
