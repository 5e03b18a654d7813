// Player controller - the hero walking the dungeon

use glam::IVec2;
use log::{debug, info};

use super::animation::AnimationPlayer;
use super::combat_state::CombatState;
use super::inventory::Inventory;
use super::movement::{leading_edge, Direction, MovementIntent};
use super::race::{Race, Role};
use super::PlayerError;
use crate::core::grid::{is_tile_centered, HALF_TILE, TILE_SIZE};
use crate::engine::render::{DrawContext, SHADOW_COLOR};
use crate::game::items::{Item, Potion, Weapon};
use crate::game::world::{DungeonMap, Enemy};

/// Where the inventory listing starts on screen
const INVENTORY_ORIGIN: IVec2 = IVec2::new(1000, 50);
/// Vertical gap between two inventory lines
const INVENTORY_LINE_HEIGHT: i32 = 20;
/// Where the status line is drawn
const STATUS_ORIGIN: IVec2 = IVec2::new(0, 660);

/// Result of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// A wall stood within reach before any enemy
    Blocked { distance: i32 },
    /// The first enemy within reach was struck
    Hit { distance: i32, damage: i32 },
    /// Nothing within reach
    Missed,
}

/// The playable character
///
/// The hero never holds on to a level: movement, attacks and respawns borrow
/// the current `DungeonMap` for the duration of the call.
#[derive(Debug)]
pub struct Player {
    name: String,
    /// Pixel position; a tile centre whenever the hero is at rest
    position: IVec2,
    state: CombatState,
    intent: MovementIntent,
    inventory: Inventory,
    /// `None` means bare hands
    weapon: Option<Weapon>,
    race: Race,
    animation: AnimationPlayer,
}

impl Player {
    /// Create the hero on a random free tile of `map`, with the starting kit
    pub fn new<M: DungeonMap>(name: &str, race: Race, map: &mut M) -> Self {
        let position = map.random_free_tile();
        info!("{} enters the dungeon at {}", name, position);

        let mut state = CombatState::default();
        state.set_damage_multiplier(race.role().damage_multiplier());

        Self {
            name: name.to_string(),
            position,
            state,
            intent: MovementIntent::default(),
            inventory: [Item::from(Potion::Transform), Item::from(Potion::Mana)]
                .into_iter()
                .collect(),
            weapon: None,
            animation: AnimationPlayer::new(race.clip(false)),
            race,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)]
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn is_moving(&self) -> bool {
        self.intent.moving
    }

    /// Direction of the last movement request
    #[allow(dead_code)]
    pub fn direction(&self) -> Direction {
        self.intent.direction
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &CombatState {
        &self.state
    }

    #[allow(dead_code)]
    pub fn race(&self) -> &Race {
        &self.race
    }

    pub fn role(&self) -> Role {
        self.race.role()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Weapon in hand (bare hands when nothing is equipped)
    pub fn weapon(&self) -> Weapon {
        self.weapon.unwrap_or(Weapon::BareHanded)
    }

    /// Start walking one tile toward `direction`
    pub fn set_movement_intent(&mut self, direction: Direction) {
        self.intent.set(direction);
    }

    /// Stop walking at the current pixel
    #[allow(dead_code)]
    pub fn clear_movement_intent(&mut self) {
        self.intent.clear();
    }

    /// Advance one frame: at most one pixel of movement, plus animation timing
    pub fn tick<M: DungeonMap>(&mut self, map: &M, dt: f32) {
        self.step(map);
        self.animation.play(self.race.clip(self.intent.moving));
        self.animation.tick(dt);
    }

    fn step<M: DungeonMap>(&mut self, map: &M) {
        if !self.intent.moving {
            return;
        }

        let direction = self.intent.direction;
        let candidate = self.position + direction.offset();
        let probe = leading_edge(candidate, direction);

        if map.is_blocked(probe.x, probe.y) {
            debug!("{} bumps into {} moving {:?}", self.name, probe, direction);
            self.intent.clear();
            return;
        }

        self.position = candidate;

        if is_tile_centered(self.position) {
            self.intent.clear();
        }
    }

    /// Swing the equipped weapon toward `direction`.
    ///
    /// Tiles are scanned outward up to the weapon's range. A wall ends the scan
    /// with no effect; the first enemy standing exactly on a scanned tile takes
    /// the damage and ends the scan.
    pub fn attack<M: DungeonMap>(&mut self, map: &mut M, direction: Direction) -> AttackOutcome {
        let weapon = self.weapon();

        for distance in 1..=weapon.range() {
            let target = self.position + direction.offset() * (TILE_SIZE * distance);

            if map.is_blocked(target.x, target.y) {
                debug!("{}'s attack is stopped by a wall at {}", self.name, target);
                return AttackOutcome::Blocked { distance };
            }

            let Some(enemy) = map
                .enemies_mut()
                .iter_mut()
                .find(|enemy| enemy.position() == target)
            else {
                continue;
            };

            let damage = weapon.compute_damage(&mut self.state);
            enemy.receive_damage(damage);
            info!(
                "{} hits an enemy at {} with {} for {} damage",
                self.name,
                target,
                weapon.name(),
                damage
            );
            return AttackOutcome::Hit { distance, damage };
        }

        debug!("{} swings {} at nothing", self.name, weapon.name());
        AttackOutcome::Missed
    }

    /// One-line summary: "<name> the <role> HP: h/H MP: m/M"
    pub fn status(&self) -> String {
        format!("{} the {} {}", self.name, self.race.role(), self.state)
    }

    /// Move to a new level and respawn on one of its free tiles
    pub fn change_map<M: DungeonMap>(&mut self, map: &mut M) {
        self.intent.clear();
        self.position = map.random_free_tile();
        info!("{} arrives on a new level at {}", self.name, self.position);
    }

    pub fn restore_mana(&mut self) {
        self.state.restore_mana();
    }

    pub fn restore_health(&mut self) {
        self.state.restore_health();
    }

    /// Switch role; the damage multiplier follows the new role
    pub fn change_role(&mut self, role: Role) {
        info!("{} becomes a {}", self.name, role);
        self.race.set_role(role);
        self.state.set_damage_multiplier(role.damage_multiplier());
    }

    /// Put an item in the last inventory slot
    pub fn give_item(&mut self, item: Item) {
        debug!("{} picks up {}", self.name, item);
        self.inventory.push(item);
    }

    /// Throw away the item in slot `index`
    pub fn delete_item(&mut self, index: usize) -> Result<Item, PlayerError> {
        let item = self.inventory.remove(index)?;
        debug!("{} drops {}", self.name, item);
        Ok(item)
    }

    /// Drink the potion in slot `index`; the slot is emptied afterwards
    pub fn drink(&mut self, index: usize) -> Result<Potion, PlayerError> {
        let item = self.inventory.get(index)?;
        let potion = item.as_potion().ok_or_else(|| PlayerError::NotAPotion {
            index,
            item: item.to_string(),
        })?;

        potion.apply(self);
        self.inventory.remove(index)?;
        info!("{} drinks a {}", self.name, potion.name());
        Ok(potion)
    }

    /// Wield the weapon in slot `index`.
    ///
    /// The weapon previously in hand goes to the last inventory slot, unless
    /// it was bare hands.
    pub fn equip(&mut self, index: usize) -> Result<Weapon, PlayerError> {
        let item = self.inventory.get(index)?;
        let weapon = item.as_weapon().ok_or_else(|| PlayerError::NotAWeapon {
            index,
            item: item.to_string(),
        })?;

        self.inventory.remove(index)?;
        let wielded = Some(weapon).filter(|weapon| *weapon != Weapon::BareHanded);
        if let Some(previous) = std::mem::replace(&mut self.weapon, wielded) {
            self.inventory.push(previous.into());
        }

        info!("{} equips {}", self.name, weapon.name());
        Ok(weapon)
    }

    /// Draw the shadow then the race sprite
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_ellipse(
            self.position - IVec2::new(HALF_TILE, 0),
            IVec2::new(TILE_SIZE, HALF_TILE),
            SHADOW_COLOR,
        );
        self.race.render(
            ctx,
            self.intent.moving,
            self.animation.current_frame(),
            self.position,
        );
    }

    /// Draw the numbered inventory listing and the status line
    pub fn render_text(&self, ctx: &mut dyn DrawContext) {
        for (index, item) in self.inventory.iter().enumerate() {
            let line = IVec2::new(0, INVENTORY_LINE_HEIGHT * index as i32);
            ctx.draw_text(INVENTORY_ORIGIN + line, &format!("{} - {}", index, item));
        }

        ctx.draw_text(STATUS_ORIGIN, &self.status());
    }
}
