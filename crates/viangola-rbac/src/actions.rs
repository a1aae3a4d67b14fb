//! # Actions
//!
//! Defines the operations a role may be granted on a resource, and a
//! compact set type for holding several of them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Actions that can be performed on resources.
///
/// Actions are independent grants: holding `Update` does not imply
/// `Read`, and there is no umbrella "manage" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Create new records.
    Create,

    /// View records.
    Read,

    /// Modify existing records.
    Update,

    /// Permanently remove records.
    Delete,
}

impl Action {
    /// All actions, in canonical CRUD order.
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// Parse action from its exact lowercase tag.
    ///
    /// Unlike role tags, action tags are matched exactly, since they come
    /// from code rather than from stored user records.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse("READ"), None);
    /// assert_eq!(Action::parse("manage"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }

    /// Check if this action modifies data.
    pub fn is_write(&self) -> bool {
        !matches!(self, Action::Read)
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of actions, stored as a bitmask so it can live in `static` tables.
///
/// # Example
///
/// ```
/// use viangola_rbac::actions::{Action, ActionSet};
///
/// let set = ActionSet::of(&[Action::Create, Action::Read]);
/// assert!(set.contains(Action::Read));
/// assert!(!set.contains(Action::Delete));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActionSet(u8);

impl ActionSet {
    /// The empty set.
    pub const EMPTY: ActionSet = ActionSet(0);

    /// Read only.
    pub const READ: ActionSet = ActionSet::of(&[Action::Read]);

    /// Create, read, and update, without delete.
    pub const CRU: ActionSet = ActionSet::of(&[Action::Create, Action::Read, Action::Update]);

    /// Full create/read/update/delete.
    pub const CRUD: ActionSet = ActionSet::of(&Action::ALL);

    /// Build a set from a slice of actions. Duplicates collapse.
    pub const fn of(actions: &[Action]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i].bit();
            i += 1;
        }
        ActionSet(bits)
    }

    /// Check if the set contains an action.
    pub const fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// Return a copy of this set with `action` added.
    pub const fn with(self, action: Action) -> Self {
        ActionSet(self.0 | action.bit())
    }

    /// Number of actions in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained actions in CRUD order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter().fold(ActionSet::EMPTY, ActionSet::with)
    }
}

#[cfg(feature = "serde")]
impl Serialize for ActionSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ActionSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let actions = Vec::<Action>::deserialize(deserializer)?;
        Ok(actions.into_iter().collect())
    }
}
