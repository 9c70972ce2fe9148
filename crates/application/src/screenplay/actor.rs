//! Actor type

use crate::error::{InteractionError, QuestionError};

use super::ability::{Abilities, Ability, MissingAbility};
use super::interaction::Interaction;
use super::question::Question;

/// The test-scenario subject: holds abilities, performs interactions, and
/// answers questions.
///
/// Actors are built once per scenario with `named` and `who_can`, used, and
/// discarded. Each actor owns its own ability instances; two actors never
/// share capability state.
pub struct Actor {
    name: String,
    abilities: Abilities,
}

impl Actor {
    /// Creates an actor with the given name and no abilities.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: Abilities::new(),
        }
    }

    /// Registers an ability, consuming and returning the actor.
    #[must_use]
    pub fn who_can<A: Ability>(mut self, ability: A) -> Self {
        self.abilities.register(ability);
        self
    }

    /// Returns the actor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the actor's instance of ability type `A`.
    ///
    /// The lookup is fresh per call; the actor keeps ownership.
    ///
    /// # Errors
    ///
    /// Returns `MissingAbility` if the actor cannot do `A`.
    pub fn ability<A: Ability>(&self) -> Result<&A, MissingAbility> {
        self.abilities.get::<A>()
    }

    /// Looks up the actor's instance of ability type `A`, mutably.
    ///
    /// # Errors
    ///
    /// Returns `MissingAbility` if the actor cannot do `A`.
    pub fn ability_mut<A: Ability>(&mut self) -> Result<&mut A, MissingAbility> {
        self.abilities.get_mut::<A>()
    }

    /// Performs an interaction as this actor.
    ///
    /// # Errors
    ///
    /// Propagates whatever the interaction raises.
    pub async fn attempts_to<I: Interaction>(&mut self, interaction: I) -> Result<(), InteractionError> {
        interaction.perform_as(self).await
    }

    /// Answers a question against this actor's current state.
    ///
    /// # Errors
    ///
    /// Propagates whatever the question raises.
    pub fn asks<Q: Question>(&self, question: &Q) -> Result<Q::Answer, QuestionError> {
        question.answered_by(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sing;
    impl Ability for Sing {}

    #[test]
    fn test_named_actor() {
        let actor = Actor::named("Tara");
        assert_eq!(actor.name(), "Tara");
    }

    #[test]
    fn test_who_can_registers_ability() {
        let actor = Actor::named("Tara").who_can(Sing);
        assert!(actor.ability::<Sing>().is_ok());
    }

    #[test]
    fn test_ability_lookup_without_registration_fails() {
        let actor = Actor::named("Tara");
        assert!(actor.ability::<Sing>().is_err());
    }
}
