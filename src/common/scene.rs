//! The active-entity registry and the per-frame update pass

use generational_arena::Arena;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::constants::{SHELL_SPEED, TANK_SPEED};
use super::controls::InputState;
use super::direction::Direction;
use super::entity::{DomainMask, Entity, EntityId, EntityKind, Sprite, SpriteSizes};
use super::obstacle::ObstacleKind;
use super::shell::{muzzle_transform, ShellData};
use super::tank::{facing_frame, TankData};
use crate::assets::Level;
use crate::grid::Grid;
use crate::utils::Vector2;

/// What a shell collision does to the pair being tested
enum ShellImpact {
    DestroyBoth,
    DestroySelf,
    Pass,
}

/// All live entities plus the spatial services they move against.
///
/// The scene is single-threaded and frame-driven: one [`Scene::update`] per
/// rendered frame, with the frame's elapsed seconds scaling every
/// displacement so motion stays frame-rate independent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Scene {
    entities: Arena<Entity>,
    grid: Grid,
    sprite_sizes: SpriteSizes,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Grid::default(), SpriteSizes::default())
    }
}

impl Scene {
    pub fn new(grid: Grid, sprite_sizes: SpriteSizes) -> Self {
        Self {
            entities: Arena::new(),
            grid,
            sprite_sizes,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    /// Remove an entity. Removing an id that is already gone is a no-op.
    pub fn kill(&mut self, id: EntityId) {
        if self.entities.remove(id).is_some() {
            debug!("killed entity {:?}", id);
        }
    }
}

/// Spawning
impl Scene {
    /// Place an obstacle at a grid cell; the cell is converted to screen
    /// coordinates once, here, and the obstacle never moves again
    pub fn spawn_obstacle(
        &mut self,
        kind: ObstacleKind,
        col: u32,
        row: u32,
        domains: DomainMask,
    ) -> EntityId {
        let position = self.grid.cell_to_screen(col, row);
        let id = self.entities.insert(Entity {
            position,
            sprite: Sprite::new(self.sprite_sizes.obstacle),
            domains,
            kind: EntityKind::Obstacle(kind),
        });
        debug!("spawned {:?} at cell ({}, {})", kind, col, row);
        id
    }

    pub fn spawn_tank(
        &mut self,
        position: Vector2,
        default_scheme: bool,
        domains: DomainMask,
    ) -> EntityId {
        let data = TankData::new(default_scheme);
        let mut sprite = Sprite::new(self.sprite_sizes.tank);
        sprite.frame = data.frame_base;
        let id = self.entities.insert(Entity {
            position,
            sprite,
            domains,
            kind: EntityKind::Tank(data),
        });
        debug!("spawned tank at ({}, {})", position.x, position.y);
        id
    }

    /// Spawn a shell leaving a muzzle at `position`, flying `direction`.
    ///
    /// The sprite is shifted and rotated per facing so the shell visually
    /// emerges from the barrel; velocity is `direction` at [`SHELL_SPEED`],
    /// fixed for the shell's whole flight.
    pub fn fire_shell(
        &mut self,
        position: Vector2,
        direction: Direction,
        domains: DomainMask,
    ) -> EntityId {
        let size = self.sprite_sizes.shell;
        let (offset, rotation_deg) = muzzle_transform(direction, size);
        let id = self.entities.insert(Entity {
            position: position.plus(&offset),
            sprite: Sprite {
                size,
                frame: 0,
                rotation_deg,
            },
            domains,
            kind: EntityKind::Shell(ShellData {
                velocity: direction.to_vector(SHELL_SPEED),
            }),
        });
        debug!("fired shell {:?} heading {:?}", id, direction);
        id
    }

    /// Spawn every obstacle a parsed level describes
    pub fn load_level(&mut self, level: &Level, domains: DomainMask) {
        for &(col, row, kind) in &level.tiles {
            self.spawn_obstacle(kind, col, row, domains);
        }
        tracing::info!("loaded level with {} tiles", level.tiles.len());
    }
}

/// The frame update pass
impl Scene {
    /// Advance the simulation by one frame of `dt` elapsed seconds.
    ///
    /// Membership is snapshotted before the scan; entities removed while
    /// the scan runs are skipped when their turn comes and test as
    /// non-overlapping in every later pairwise check.
    pub fn update(&mut self, input: &InputState, dt: f64) {
        let ids: Vec<EntityId> = self.entities.iter().map(|(id, _)| id).collect();

        for &id in &ids {
            let Some(entity) = self.entities.get(id) else {
                // removed earlier this frame
                continue;
            };
            match entity.kind {
                EntityKind::Obstacle(_) => {}
                EntityKind::Shell(_) => self.step_shell(id, &ids, dt),
                EntityKind::Tank(_) => self.step_tank(id, &ids, input, dt),
            }
        }
    }

    fn step_shell(&mut self, id: EntityId, ids: &[EntityId], dt: f64) {
        let Some(entity) = self.entities.get_mut(id) else {
            return;
        };
        let EntityKind::Shell(shell) = &entity.kind else {
            return;
        };

        let velocity = shell.velocity;
        let domains = entity.domains;
        entity.position = entity.position.plus(&velocity.scale(dt));
        let position = entity.position;
        let rect = entity.rect();

        if !self.grid.rect().contains_point(&position) {
            self.kill(id);
            return;
        }

        for &other_id in ids {
            if other_id == id {
                continue;
            }
            let Some(other) = self.entities.get(other_id) else {
                continue;
            };
            if !domains.shares_any(other.domains) || !rect.overlaps(&other.rect()) {
                continue;
            }

            let impact = match &other.kind {
                EntityKind::Obstacle(kind) => {
                    let flags = kind.flags();
                    if flags.destroyable {
                        ShellImpact::DestroyBoth
                    } else if flags.shell_obstacle {
                        ShellImpact::DestroySelf
                    } else {
                        ShellImpact::Pass
                    }
                }
                EntityKind::Shell(_) => ShellImpact::DestroyBoth,
                // tank damage is the embedding game's concern
                EntityKind::Tank(_) => ShellImpact::Pass,
            };

            match impact {
                ShellImpact::DestroyBoth => {
                    self.kill(other_id);
                    self.kill(id);
                    return;
                }
                ShellImpact::DestroySelf => {
                    self.kill(id);
                    return;
                }
                ShellImpact::Pass => {}
            }
        }
    }

    fn step_tank(&mut self, id: EntityId, ids: &[EntityId], input: &InputState, dt: f64) {
        let Some(entity) = self.entities.get(id) else {
            return;
        };
        let EntityKind::Tank(tank) = &entity.kind else {
            return;
        };

        let domains = entity.domains;
        let rect = entity.rect();
        let scheme = tank.scheme.clone();
        let frame_base = tank.frame_base;

        // any overlap at all gates movement for the whole frame
        let blocked = ids.iter().any(|&other_id| {
            other_id != id
                && self
                    .entities
                    .get(other_id)
                    .map(|other| domains.shares_any(other.domains) && rect.overlaps(&other.rect()))
                    .unwrap_or(false)
        });

        let steer = if blocked { None } else { scheme.steer(input) };

        let Some(entity) = self.entities.get_mut(id) else {
            return;
        };
        let velocity = match steer {
            Some(direction) => {
                entity.sprite.frame = frame_base + facing_frame(direction);
                direction.to_vector(TANK_SPEED)
            }
            None => Vector2::zero(),
        };
        entity.position = entity.position.plus(&velocity.scale(dt));
        if let EntityKind::Tank(tank) = &mut entity.kind {
            tank.velocity = velocity;
        }
    }
}
