// Game session: the hero, the level stack and the glue between them
//
// The session routes actions to the hero, runs ticks against the current
// level and moves the hero down when it comes to rest on stairs. Items are
// picked up from the tile the hero stops on, and every monster slain leaves a
// trophy in the hero's pack.

use log::{info, warn};

use super::characters::{AttackOutcome, Player, Race};
use super::items::{Item, Weapon};
use super::world::{Tile, TileMap};
use crate::engine::input::{Action, InputState};
use crate::engine::render::DrawContext;

/// Trinket picked up from each slain monster
const MONSTER_TROPHY: &str = "Monster fang";

#[derive(Debug)]
pub struct Session {
    levels: Vec<TileMap>,
    depth: usize,
    player: Player,
    selected_slot: usize,
}

impl Session {
    /// Start on `entrance`; `deeper` levels are reached through stairs
    pub fn new(name: &str, race: Race, mut entrance: TileMap, deeper: Vec<TileMap>) -> Self {
        let player = Player::new(name, race, &mut entrance);
        let mut levels = Vec::with_capacity(deeper.len() + 1);
        levels.push(entrance);
        levels.extend(deeper);

        Self {
            levels,
            depth: 0,
            player,
            selected_slot: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn level(&self) -> &TileMap {
        &self.levels[self.depth]
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Hand the hero a weapon and wield it straight away
    pub fn equip_starting_weapon(&mut self, weapon: Weapon) {
        self.player.give_item(weapon.into());
        let slot = self.player.inventory().len() - 1;
        if let Err(err) = self.player.equip(slot) {
            warn!("Cannot equip starting weapon: {}", err);
        }
    }

    /// React to this frame's input, in the order the keys went down
    pub fn handle_input(&mut self, input: &InputState) {
        let actions: Vec<Action> = input.pressed_this_frame().collect();
        for action in actions {
            self.apply(action);
        }

        // Holding a direction keeps walking tile after tile
        if !self.player.is_moving() {
            if let Some(direction) = input.held_movement() {
                self.player.set_movement_intent(direction);
            }
        }
    }

    /// Perform a single action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.player.set_movement_intent(direction),
            Action::Attack(direction) => {
                let level = &mut self.levels[self.depth];
                if let AttackOutcome::Hit { .. } = self.player.attack(level, direction) {
                    let slain = level.remove_dead_monsters();
                    if slain > 0 {
                        info!("{} monster(s) slain", slain);
                    }
                    for _ in 0..slain {
                        self.player.give_item(Item::trinket(MONSTER_TROPHY));
                    }
                }
            }
            Action::SelectSlot(slot) => self.selected_slot = slot as usize,
            Action::Drink => {
                if let Err(err) = self.player.drink(self.selected_slot) {
                    warn!("Cannot drink: {}", err);
                }
            }
            Action::Equip => {
                if let Err(err) = self.player.equip(self.selected_slot) {
                    warn!("Cannot equip: {}", err);
                }
            }
            Action::Drop => {
                if let Err(err) = self.player.delete_item(self.selected_slot) {
                    warn!("Cannot drop: {}", err);
                }
            }
            // Frame-level concerns, handled by the window loop
            Action::Pause | Action::Quit => {}
        }
    }

    /// Advance one fixed tick
    pub fn tick(&mut self, dt: f32) {
        self.player.tick(&self.levels[self.depth], dt);
        if self.player.is_moving() {
            return;
        }

        let position = self.player.position();
        for item in self.levels[self.depth].take_loot(position) {
            info!("{} finds a {}", self.player.name(), item);
            self.player.give_item(item);
        }

        if self.on_stairs() {
            self.descend();
        }
    }

    fn on_stairs(&self) -> bool {
        self.level().tile_at_pixel(self.player.position()) == Some(Tile::Stairs)
    }

    fn descend(&mut self) {
        if self.depth + 1 >= self.levels.len() {
            return;
        }
        self.depth += 1;
        let level = &mut self.levels[self.depth];
        info!(
            "Descending to level {} ({}x{} tiles)",
            self.depth + 1,
            level.width(),
            level.height()
        );
        self.player.change_map(level);
    }

    pub fn render(&self, ctx: &mut dyn DrawContext) {
        self.player.render(ctx);
        self.player.render_text(ctx);
    }
}
