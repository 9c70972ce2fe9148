//! Ability registry

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use thiserror::Error;

/// Marker trait for actor capabilities.
///
/// An ability is a value an actor carries and looks up by type. Abilities
/// are registered explicitly at actor-setup time with `Actor::who_can`.
pub trait Ability: Any + Send {}

/// Error raised when an actor is asked to use an ability it does not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("actor does not have the {ability} ability")]
pub struct MissingAbility {
    /// Type name of the ability that was looked up.
    pub ability: &'static str,
}

/// Typed registry of an actor's abilities.
///
/// One instance per ability type; registering the same type twice replaces
/// the earlier instance. Lookups return a fresh reference each time, the
/// registry hands out no copies.
#[derive(Default)]
pub struct Abilities {
    items: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl Abilities {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ability instance, keyed by its type.
    pub fn register<A: Ability>(&mut self, ability: A) {
        self.items.insert(TypeId::of::<A>(), Box::new(ability));
    }

    /// Looks up the registered instance of ability type `A`.
    ///
    /// # Errors
    ///
    /// Returns `MissingAbility` if no instance of `A` was registered.
    pub fn get<A: Ability>(&self) -> Result<&A, MissingAbility> {
        self.items
            .get(&TypeId::of::<A>())
            .and_then(|boxed| boxed.downcast_ref::<A>())
            .ok_or(MissingAbility {
                ability: type_name::<A>(),
            })
    }

    /// Looks up the registered instance of ability type `A`, mutably.
    ///
    /// # Errors
    ///
    /// Returns `MissingAbility` if no instance of `A` was registered.
    pub fn get_mut<A: Ability>(&mut self) -> Result<&mut A, MissingAbility> {
        self.items
            .get_mut(&TypeId::of::<A>())
            .and_then(|boxed| boxed.downcast_mut::<A>())
            .ok_or(MissingAbility {
                ability: type_name::<A>(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Whistle {
        pitch: u32,
    }
    impl Ability for Whistle {}

    #[derive(Debug)]
    struct Juggle;
    impl Ability for Juggle {}

    #[test]
    fn test_register_and_get() {
        let mut abilities = Abilities::new();
        abilities.register(Whistle { pitch: 440 });

        let whistle = abilities.get::<Whistle>().expect("registered");
        assert_eq!(whistle.pitch, 440);
    }

    #[test]
    fn test_missing_ability() {
        let abilities = Abilities::new();
        let err = abilities.get::<Juggle>().unwrap_err();
        assert!(err.ability.contains("Juggle"));
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut abilities = Abilities::new();
        abilities.register(Whistle { pitch: 440 });
        abilities.register(Whistle { pitch: 880 });

        assert_eq!(abilities.get::<Whistle>().expect("registered").pitch, 880);
    }

    #[test]
    fn test_get_mut() {
        let mut abilities = Abilities::new();
        abilities.register(Whistle { pitch: 440 });

        abilities.get_mut::<Whistle>().expect("registered").pitch = 220;
        assert_eq!(abilities.get::<Whistle>().expect("registered").pitch, 220);
    }
}
