//! Disc owners and per-owner data storage.
//!
//! ## Owner
//!
//! The two sides of a game. `PlayerA` plays the dark discs and moves
//! first unless the configuration says otherwise.
//!
//! ## OwnerMap
//!
//! Fixed two-slot storage indexed by `Owner`, used for names and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Which side a disc belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    PlayerA,
    PlayerB,
}

impl Owner {
    /// Both owners in seat order.
    pub const ALL: [Owner; 2] = [Owner::PlayerA, Owner::PlayerB];

    /// The other side.
    ///
    /// ```
    /// use rust_othello::core::Owner;
    ///
    /// assert_eq!(Owner::PlayerA.opponent(), Owner::PlayerB);
    /// assert_eq!(Owner::PlayerB.opponent(), Owner::PlayerA);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Owner::PlayerA => Owner::PlayerB,
            Owner::PlayerB => Owner::PlayerA,
        }
    }

    /// Seat index (0 for `PlayerA`, 1 for `PlayerB`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Owner::PlayerA => 0,
            Owner::PlayerB => 1,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::PlayerA => write!(f, "Player A"),
            Owner::PlayerB => write!(f, "Player B"),
        }
    }
}

/// A seated player: display name plus the side they play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub owner: Owner,
}

impl Player {
    /// Create a new player record.
    pub fn new(name: impl Into<String>, owner: Owner) -> Self {
        Self {
            name: name.into(),
            owner,
        }
    }
}

/// Per-owner data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_othello::core::{Owner, OwnerMap};
///
/// let mut discs: OwnerMap<usize> = OwnerMap::with_value(0);
/// discs[Owner::PlayerB] += 2;
///
/// assert_eq!(discs[Owner::PlayerA], 0);
/// assert_eq!(discs[Owner::PlayerB], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerMap<T> {
    data: [T; 2],
}

impl<T> OwnerMap<T> {
    /// Create from a factory called once per owner.
    pub fn new(factory: impl Fn(Owner) -> T) -> Self {
        Self {
            data: [factory(Owner::PlayerA), factory(Owner::PlayerB)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to an owner's data.
    #[must_use]
    pub fn get(&self, owner: Owner) -> &T {
        &self.data[owner.index()]
    }

    /// Get a mutable reference to an owner's data.
    pub fn get_mut(&mut self, owner: Owner) -> &mut T {
        &mut self.data[owner.index()]
    }

    /// Iterate over (Owner, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Owner, &T)> {
        Owner::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Owner> for OwnerMap<T> {
    type Output = T;

    fn index(&self, owner: Owner) -> &Self::Output {
        self.get(owner)
    }
}

impl<T> IndexMut<Owner> for OwnerMap<T> {
    fn index_mut(&mut self, owner: Owner) -> &mut Self::Output {
        self.get_mut(owner)
    }
}
