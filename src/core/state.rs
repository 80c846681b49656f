//! Game state: boards, cards, and the stack.
//!
//! ## Board
//!
//! One player's life total and battlefield.
//!
//! ## GameState
//!
//! Everything one resolution run owns:
//! - Card definitions (read-only after load)
//! - Active and priority player
//! - Per-player boards, in document order
//! - The stack
//!
//! Boards and the stack use `im` persistent vectors, so cloning a
//! `GameState` for a before/after comparison is cheap.

use im::Vector;

use super::config::DEFAULT_STARTING_LIFE;
use super::entity::ObjectId;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{CardRegistry, Keyword, Permanent};
use crate::stack::{Stack, StackItem};

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub life: i64,
    pub permanents: Vector<Permanent>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_LIFE)
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(life: i64) -> Self {
        Self {
            life,
            permanents: Vector::new(),
        }
    }

    /// Add a permanent (builder pattern).
    #[must_use]
    pub fn with_permanent(mut self, permanent: Permanent) -> Self {
        self.permanents.push_back(permanent);
        self
    }

    /// Find a permanent on this board.
    #[must_use]
    pub fn find(&self, id: &ObjectId) -> Option<&Permanent> {
        self.permanents.iter().find(|p| p.id == *id)
    }

    /// Remove a permanent from this board.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Permanent> {
        let idx = self.permanents.iter().position(|p| p.id == *id)?;
        Some(self.permanents.remove(idx))
    }
}

/// Complete state for one resolution run.
#[derive(Clone, Debug)]
pub struct GameState {
    // === Definitions ===
    pub cards: CardRegistry,

    // === Turn ===
    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Who may act right now.
    pub priority_player: PlayerId,

    /// Informational only.
    pub phase: Option<String>,

    // === Zones ===
    pub boards: PlayerMap<Board>,

    pub stack: Stack,
}

impl GameState {
    /// Create a state with no boards and an empty stack. Priority starts
    /// with the active player.
    #[must_use]
    pub fn new(cards: CardRegistry, active_player: PlayerId) -> Self {
        Self {
            cards,
            priority_player: active_player.clone(),
            active_player,
            phase: None,
            boards: PlayerMap::new(),
            stack: Stack::new(),
        }
    }

    /// Add a board (builder pattern). Boards keep insertion order.
    #[must_use]
    pub fn with_board(mut self, player: PlayerId, board: Board) -> Self {
        self.boards.insert(player, board);
        self
    }

    /// Set the priority player.
    #[must_use]
    pub fn with_priority(mut self, player: PlayerId) -> Self {
        self.priority_player = player;
        self
    }

    /// Set the phase label.
    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Push an item on top of the stack (builder pattern).
    #[must_use]
    pub fn with_stack_item(mut self, item: StackItem) -> Self {
        self.stack.push(item);
        self
    }

    // === Queries ===

    /// All players, in board order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.boards.player_ids()
    }

    /// Is `player` the active player?
    #[must_use]
    pub fn is_active(&self, player: &PlayerId) -> bool {
        self.active_player == *player
    }

    /// A player's life total, if they have a board.
    #[must_use]
    pub fn life(&self, player: &PlayerId) -> Option<i64> {
        self.boards.get(player).map(|b| b.life)
    }

    /// Every permanent on every board, in board order.
    pub fn permanents(&self) -> impl Iterator<Item = &Permanent> {
        self.boards.values().flat_map(|b| b.permanents.iter())
    }

    /// Find a permanent on any board.
    #[must_use]
    pub fn find_permanent(&self, id: &ObjectId) -> Option<&Permanent> {
        self.boards.values().find_map(|b| b.find(id))
    }

    /// Find a permanent on any board for mutation.
    pub fn find_permanent_mut(&mut self, id: &ObjectId) -> Option<&mut Permanent> {
        self.boards
            .iter_mut()
            .find_map(|(_, b)| b.permanents.iter_mut().find(|p| p.id == *id))
    }

    /// Remove a permanent from whichever board holds it.
    pub fn remove_permanent(&mut self, id: &ObjectId) -> Option<Permanent> {
        self.boards.iter_mut().find_map(|(_, b)| b.remove(id))
    }

    /// Blueprint toughness plus modifier. A permanent whose card is
    /// unknown counts as a 0-toughness blueprint.
    #[must_use]
    pub fn effective_toughness(&self, permanent: &Permanent) -> i64 {
        let base = self
            .cards
            .get(&permanent.card_name)
            .map_or(0, |card| card.toughness);
        base.saturating_add(permanent.toughness_mod)
    }

    /// Does the permanent's blueprint carry `keyword`?
    #[must_use]
    pub fn has_keyword(&self, permanent: &Permanent, keyword: &Keyword) -> bool {
        self.cards.has_keyword(&permanent.card_name, keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDef;

    fn sample() -> GameState {
        let cards: CardRegistry = [
            CardDef::new("Grizzly Bears").with_stats(2, 2),
            CardDef::new("Darksteel Myr")
                .with_stats(0, 1)
                .with_keyword(Keyword::Indestructible),
        ]
        .into_iter()
        .collect();

        GameState::new(cards, PlayerId::new("Alice"))
            .with_board(
                PlayerId::new("Alice"),
                Board::default().with_permanent(Permanent::new(
                    "a1",
                    "Grizzly Bears",
                    PlayerId::new("Alice"),
                )),
            )
            .with_board(
                PlayerId::new("Bob"),
                Board::new(15).with_permanent(Permanent::new(
                    "b1",
                    "Darksteel Myr",
                    PlayerId::new("Bob"),
                )),
            )
    }

    #[test]
    fn test_new_state_defaults() {
        let state = sample();
        assert_eq!(state.priority_player, PlayerId::new("Alice"));
        assert!(state.is_active(&PlayerId::new("Alice")));
        assert!(state.stack.is_empty());
        assert_eq!(state.life(&PlayerId::new("Alice")), Some(20));
        assert_eq!(state.life(&PlayerId::new("Bob")), Some(15));
        assert_eq!(state.life(&PlayerId::new("Eve")), None);
    }

    #[test]
    fn test_find_and_remove_across_boards() {
        let mut state = sample();
        assert!(state.find_permanent(&ObjectId::new("b1")).is_some());

        let removed = state.remove_permanent(&ObjectId::new("b1")).unwrap();
        assert_eq!(removed.card_name, "Darksteel Myr");
        assert!(state.find_permanent(&ObjectId::new("b1")).is_none());
        assert!(state.remove_permanent(&ObjectId::new("b1")).is_none());
        assert_eq!(state.permanents().count(), 1);
    }

    #[test]
    fn test_effective_toughness_and_keywords() {
        let mut state = sample();
        if let Some(bear) = state.find_permanent_mut(&ObjectId::new("a1")) {
            bear.toughness_mod = 3;
        }

        let bear = state.find_permanent(&ObjectId::new("a1")).unwrap();
        assert_eq!(state.effective_toughness(bear), 5);

        let myr = state.find_permanent(&ObjectId::new("b1")).unwrap();
        assert!(state.has_keyword(myr, &Keyword::Indestructible));
        assert!(!state.has_keyword(bear, &Keyword::Indestructible));
    }

    #[test]
    fn test_clone_is_independent() {
        let state = sample();
        let mut copy = state.clone();
        copy.remove_permanent(&ObjectId::new("a1"));

        assert!(state.find_permanent(&ObjectId::new("a1")).is_some());
        assert!(copy.find_permanent(&ObjectId::new("a1")).is_none());
    }
}
