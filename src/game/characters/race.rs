// Races and roles

use std::fmt;
use std::str::FromStr;

use glam::IVec2;

use super::animation::AnimationClip;
use crate::core::grid::HALF_TILE;
use crate::engine::render::DrawContext;

/// Profession of the hero, shown in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Warrior,
    Wizard,
    Rogue,
    Priest,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Warrior, Self::Wizard, Self::Rogue, Self::Priest];

    /// Following role in a fixed cycle (used by the transform potion)
    pub fn next(self) -> Self {
        match self {
            Self::Warrior => Self::Wizard,
            Self::Wizard => Self::Rogue,
            Self::Rogue => Self::Priest,
            Self::Priest => Self::Warrior,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Wizard => "Wizard",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
        }
    }

    /// Multiplier on outgoing weapon damage while playing this role
    pub fn damage_multiplier(self) -> f32 {
        match self {
            Self::Warrior => 1.25,
            Self::Rogue => 1.1,
            Self::Wizard => 1.0,
            Self::Priest => 0.9,
        }
    }
}

/// A race or role name that matches nothing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown {kind} {name:?}")]
pub struct UnknownChoice {
    kind: &'static str,
    name: String,
}

fn parse_choice<T: Copy>(
    kind: &'static str,
    name: &str,
    choices: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, UnknownChoice> {
    let wanted = name.trim();
    choices
        .iter()
        .copied()
        .find(|choice| label(*choice).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| UnknownChoice {
            kind,
            name: wanted.to_string(),
        })
}

impl FromStr for Role {
    type Err = UnknownChoice;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        parse_choice("role", name, &Self::ALL, Self::name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of race, which fixes the look of the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceKind {
    Human,
    Elf,
    Dwarf,
}

impl RaceKind {
    pub const ALL: [RaceKind; 3] = [Self::Human, Self::Elf, Self::Dwarf];

    /// Sprite sheet holding this race's frames
    pub fn sprite_sheet(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Elf => "elf",
            Self::Dwarf => "dwarf",
        }
    }

    fn idle_clip(self) -> AnimationClip {
        match self {
            Self::Dwarf => AnimationClip::new("idle", 2, 3.0),
            Self::Human | Self::Elf => AnimationClip::new("idle", 4, 4.0),
        }
    }

    fn walk_clip(self) -> AnimationClip {
        match self {
            Self::Elf => AnimationClip::new("walk", 4, 12.0),
            Self::Human | Self::Dwarf => AnimationClip::new("walk", 4, 8.0),
        }
    }
}

impl FromStr for RaceKind {
    type Err = UnknownChoice;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        parse_choice("race", name, &Self::ALL, Self::sprite_sheet)
    }
}

/// A race together with the role it currently plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    kind: RaceKind,
    role: Role,
}

impl Race {
    pub fn new(kind: RaceKind, role: Role) -> Self {
        Self { kind, role }
    }

    #[allow(dead_code)]
    pub fn kind(&self) -> RaceKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Animation to play for the given movement state
    pub fn clip(&self, moving: bool) -> AnimationClip {
        if moving {
            self.kind.walk_clip()
        } else {
            self.kind.idle_clip()
        }
    }

    /// Draw the race sprite for an actor centred on `position`
    pub fn render(&self, ctx: &mut dyn DrawContext, moving: bool, frame: usize, position: IVec2) {
        let clip = self.clip(moving);
        ctx.draw_sprite(
            self.kind.sprite_sheet(),
            clip.name,
            frame,
            position - IVec2::splat(HALF_TILE),
        );
    }
}
