//! Stack items and the LIFO stack that holds them.
//!
//! Items are pushed and popped from the top. The one exception is a
//! counterspell, which pulls a specific item out by id wherever it sits.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, PlayerId};

/// Unique identifier for a stack item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackItemId(pub String);

impl StackItemId {
    /// Create a stack item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// ID for the `n`th trigger put on the stack during a run.
    #[must_use]
    pub fn trigger(n: u32) -> Self {
        Self(format!("trig_{}", n))
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StackItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StackItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StackItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of object is on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackItemKind {
    Spell,
    TriggeredAbility,
}

/// A pending spell or triggered ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackItem {
    pub id: StackItemId,
    pub kind: StackItemKind,

    /// Card the spell or ability comes from.
    pub source_name: String,

    /// Permanent the ability comes from. Spells have none.
    pub source_id: Option<ObjectId>,

    /// Which of the card's triggered abilities this is.
    pub ability_index: usize,

    pub controller: PlayerId,

    // === Targets ===
    pub target_id: Option<ObjectId>,
    pub target_player: Option<PlayerId>,
    pub target_stack_id: Option<StackItemId>,
}

impl StackItem {
    /// A spell with no targets.
    #[must_use]
    pub fn spell(
        id: impl Into<StackItemId>,
        source_name: impl Into<String>,
        controller: PlayerId,
    ) -> Self {
        Self {
            id: id.into(),
            kind: StackItemKind::Spell,
            source_name: source_name.into(),
            source_id: None,
            ability_index: 0,
            controller,
            target_id: None,
            target_player: None,
            target_stack_id: None,
        }
    }

    /// A triggered ability of a permanent.
    #[must_use]
    pub fn triggered(
        id: impl Into<StackItemId>,
        source_name: impl Into<String>,
        source_id: ObjectId,
        ability_index: usize,
        controller: PlayerId,
    ) -> Self {
        Self {
            kind: StackItemKind::TriggeredAbility,
            source_id: Some(source_id),
            ability_index,
            ..Self::spell(id, source_name, controller)
        }
    }

    /// Target a permanent (builder pattern).
    #[must_use]
    pub fn targeting(mut self, target: impl Into<ObjectId>) -> Self {
        self.target_id = Some(target.into());
        self
    }

    /// Target a player.
    #[must_use]
    pub fn targeting_player(mut self, player: PlayerId) -> Self {
        self.target_player = Some(player);
        self
    }

    /// Target another stack item.
    #[must_use]
    pub fn targeting_stack_item(mut self, id: impl Into<StackItemId>) -> Self {
        self.target_stack_id = Some(id.into());
        self
    }
}

/// Last-in-first-out stack of pending items.
///
/// ```
/// use ccg_stack::core::PlayerId;
/// use ccg_stack::stack::{Stack, StackItem};
///
/// let mut stack = Stack::new();
/// stack.push(StackItem::spell("s1", "Shock", PlayerId::new("Alice")));
/// stack.push(StackItem::spell("s2", "Giant Growth", PlayerId::new("Bob")));
///
/// assert_eq!(stack.pop().map(|i| i.source_name), Some("Giant Growth".to_string()));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    /// Index 0 = bottom, last = top.
    items: Vector<StackItem>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item on top.
    pub fn push(&mut self, item: StackItem) {
        self.items.push_back(item);
    }

    /// Take the top item.
    pub fn pop(&mut self) -> Option<StackItem> {
        self.items.pop_back()
    }

    /// Peek at the top item without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&StackItem> {
        self.items.last()
    }

    /// Is an item with this id still on the stack?
    #[must_use]
    pub fn contains(&self, id: &StackItemId) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    /// Remove an item by id (countering it).
    pub fn remove(&mut self, id: &StackItemId) -> Option<StackItem> {
        let idx = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(idx))
    }

    /// Number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &StackItem> {
        self.items.iter()
    }
}

impl FromIterator<StackItem> for Stack {
    /// Items are pushed in iteration order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = StackItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
