//! Actor roster for a single pull.
//!
//! Answers the two questions the status tracker asks of every event:
//! is the source one of ours, and is the target an eligible pet.

use buffline_types::{Actor, ActorId};
use hashbrown::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    actors: HashMap<ActorId, Actor>,
}

impl Roster {
    pub fn new(actors: impl IntoIterator<Item = Actor>) -> Self {
        Self {
            actors: actors.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actors owned by `owner` (summoned pets and the like)
    pub fn owned_by(&self, owner: ActorId) -> impl Iterator<Item = &Actor> {
        self.actors
            .values()
            .filter(move |a| a.owner == Some(owner))
    }

    /// The analysed player plus every actor the player owns.
    pub fn tracked_ids(&self, player_id: ActorId) -> HashSet<ActorId> {
        let mut ids: HashSet<ActorId> = self.owned_by(player_id).map(|a| a.id).collect();
        ids.insert(player_id);
        ids
    }

    /// A target is eligible when it is in the roster and its owner is
    /// player-controlled. Actors without an owner are never eligible.
    ///
    /// This admits pets of *any* player, not only the analysed one.
    pub fn is_eligible_target(&self, target_id: ActorId) -> bool {
        self.get(target_id)
            .and_then(|target| target.owner)
            .and_then(|owner| self.get(owner))
            .is_some_and(|owner| owner.player_controlled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new([
            Actor::player(1),
            Actor::pet(10, 1),
            Actor::player(2),
            Actor::pet(20, 2),
            Actor::npc(100),
            Actor::pet(101, 100),
        ])
    }

    #[test]
    fn test_tracked_ids_include_player_and_own_pets() {
        let ids = roster().tracked_ids(1);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1));
        assert!(ids.contains(&10));
        assert!(!ids.contains(&20), "other player's pet is not tracked");
    }

    #[test]
    fn test_tracked_ids_for_player_missing_from_roster() {
        let ids = roster().tracked_ids(999);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&999));
    }

    #[test]
    fn test_eligible_targets_are_player_owned_pets() {
        let roster = roster();
        assert!(roster.is_eligible_target(10));
        assert!(roster.is_eligible_target(20), "another player's pet is eligible too");
    }

    #[test]
    fn test_ineligible_targets() {
        let roster = roster();
        assert!(!roster.is_eligible_target(1), "players have no owner");
        assert!(!roster.is_eligible_target(100), "npc has no owner");
        assert!(!roster.is_eligible_target(101), "npc-owned add");
        assert!(!roster.is_eligible_target(555), "not in roster");
    }

    #[test]
    fn test_owner_missing_from_roster_is_ineligible() {
        let roster = Roster::new([Actor::pet(10, 1)]);
        assert!(!roster.is_eligible_target(10));
    }
}
