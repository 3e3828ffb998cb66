//! Entity data model
//!
//! An entity is a passive record: identity fixed at construction, position
//! mutated only through the clamping `move_to`.

use glam::Vec2;

use crate::{arena_center, clamp_to_arena};

/// Category tag for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Jammer,
    Pivot,
    Blocker,
}

impl Role {
    /// Single-letter tag
    pub fn as_char(self) -> char {
        match self {
            Role::Jammer => 'j',
            Role::Pivot => 'p',
            Role::Blocker => 'b',
        }
    }
}

/// Binary team affiliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// `false` side
    Home,
    /// `true` side
    Away,
}

impl Team {
    pub fn flag(self) -> bool {
        matches!(self, Team::Away)
    }
}

impl From<bool> for Team {
    fn from(flag: bool) -> Self {
        if flag { Team::Away } else { Team::Home }
    }
}

/// One simulated agent
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    role: Role,
    team: Team,
    position: Vec2,
}

impl Entity {
    /// Create an entity at the arena midpoint
    pub fn new(role: Role, team: Team) -> Self {
        Self {
            role,
            team,
            position: arena_center(),
        }
    }

    /// Create an entity at an explicit position (clamped into the arena)
    pub fn at(role: Role, team: Team, position: Vec2) -> Self {
        Self {
            role,
            team,
            position: clamp_to_arena(position),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move to `target`, clamping each axis to the arena bounds.
    ///
    /// Never fails; an out-of-range target sticks to the wall it crossed.
    pub fn move_to(&mut self, target: Vec2) {
        self.position = clamp_to_arena(target);
    }
}
