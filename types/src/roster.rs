use serde::{Deserialize, Serialize};

use crate::ActorId;

/// An actor present in the pull.
///
/// `player_controlled` describes the actor itself. Pet eligibility checks
/// look at the flag on the pet's *owner*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    #[serde(default)]
    pub owner: Option<ActorId>,
    #[serde(default)]
    pub player_controlled: bool,
}

impl Actor {
    pub fn player(id: ActorId) -> Self {
        Self {
            id,
            owner: None,
            player_controlled: true,
        }
    }

    pub fn pet(id: ActorId, owner: ActorId) -> Self {
        Self {
            id,
            owner: Some(owner),
            player_controlled: false,
        }
    }

    pub fn npc(id: ActorId) -> Self {
        Self {
            id,
            owner: None,
            player_controlled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_defaults_when_fields_missing() {
        let actor: Actor = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(actor, Actor::npc(7));
    }

    #[test]
    fn test_pet_has_owner() {
        let pet = Actor::pet(20, 1);
        assert_eq!(pet.owner, Some(1));
        assert!(!pet.player_controlled);
    }
}
