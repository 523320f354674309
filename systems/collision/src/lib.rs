#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that resolves entity overlaps into outcome commands.
//!
//! The resolver walks a fixed sequence of pair checks once per frame and
//! answers with commands; it never mutates state itself. The ordering is
//! load-bearing: shield absorption runs before hull hits, boss body damage
//! before shield damage, and a resolved ship hit ends the frame so the same
//! collision cannot resolve twice against already-cleared pools.

use alien_invasion_core::{
    AlienSnapshot, BossSnapshot, Command, ConsumableSnapshot, HazardSnapshot, ProjectileId,
    ProjectileSnapshot, ShipSnapshot, StageKind,
};

/// Everything the resolver reads in one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Category of the stage being simulated.
    pub stage: StageKind,
    /// The ship with its hull and optional shield bounds.
    pub ship: &'a ShipSnapshot,
    /// Live fleet aliens.
    pub aliens: &'a [AlienSnapshot],
    /// Live ship bullets.
    pub ship_bullets: &'a [ProjectileSnapshot],
    /// Live alien bullets.
    pub alien_bullets: &'a [ProjectileSnapshot],
    /// Live boss bullets.
    pub boss_bullets: &'a [ProjectileSnapshot],
    /// The boss, if an encounter is running.
    pub boss: Option<&'a BossSnapshot>,
    /// Live consumable pickups.
    pub consumables: &'a [ConsumableSnapshot],
    /// The black-hole hazard, if live.
    pub hazard: Option<&'a HazardSnapshot>,
}

/// Collision resolver system that queues outcome commands.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    consumed: Vec<ProjectileId>,
}

impl CollisionResolver {
    /// Creates a new resolver with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn consume(&mut self, projectile: ProjectileId) {
        self.consumed.push(projectile);
    }

    fn is_consumed(&self, projectile: ProjectileId) -> bool {
        self.consumed.contains(&projectile)
    }

    /// Walks the frame's pair checks and queues the resulting commands.
    ///
    /// Returns after the first resolved ship hit; the hit outcome clears the
    /// pools every later check would have read.
    pub fn handle(&mut self, frame: &Frame<'_>, out: &mut Vec<Command>) {
        self.consumed.clear();

        let mut destroyed_aliens: Vec<_> = Vec::new();
        for bullet in frame.ship_bullets {
            for alien in frame.aliens {
                if destroyed_aliens.contains(&alien.id) || self.is_consumed(bullet.id) {
                    continue;
                }
                if bullet.bounds.intersects(&alien.bounds) {
                    self.consume(bullet.id);
                    destroyed_aliens.push(alien.id);
                    out.push(Command::DestroyProjectile {
                        projectile: bullet.id,
                    });
                    out.push(Command::DestroyAlien { alien: alien.id });
                }
            }
        }

        for alien in frame.aliens {
            if destroyed_aliens.contains(&alien.id) {
                continue;
            }
            if frame.ship.bounds.intersects(&alien.bounds) {
                out.push(Command::ShipHit);
                return;
            }
        }

        if let Some(shield) = frame.ship.shield_bounds {
            for bullet in frame.alien_bullets {
                if !self.is_consumed(bullet.id) && shield.intersects(&bullet.bounds) {
                    self.consume(bullet.id);
                    out.push(Command::DestroyProjectile {
                        projectile: bullet.id,
                    });
                }
            }
        }

        for bullet in frame.alien_bullets {
            if !self.is_consumed(bullet.id) && frame.ship.bounds.intersects(&bullet.bounds) {
                out.push(Command::ShipHit);
                return;
            }
        }

        for pickup in frame.consumables {
            if frame.ship.bounds.intersects(&pickup.bounds) {
                out.push(Command::CollectConsumable { kind: pickup.kind });
            }
        }

        if !matches!(frame.stage, StageKind::Boss(_)) {
            return;
        }

        if let Some(shield) = frame.ship.shield_bounds {
            for bullet in frame.boss_bullets {
                if !self.is_consumed(bullet.id) && shield.intersects(&bullet.bounds) {
                    self.consume(bullet.id);
                    out.push(Command::DestroyProjectile {
                        projectile: bullet.id,
                    });
                }
            }
        }

        for bullet in frame.boss_bullets {
            if !self.is_consumed(bullet.id) && frame.ship.bounds.intersects(&bullet.bounds) {
                out.push(Command::ShipHitOnBossStage);
                return;
            }
        }

        if let Some(boss) = frame.boss {
            if frame.ship.bounds.intersects(&boss.bounds) {
                out.push(Command::ShipHitOnBossStage);
                return;
            }

            for bullet in frame.ship_bullets {
                if !self.is_consumed(bullet.id) && bullet.bounds.intersects(&boss.bounds) {
                    self.consume(bullet.id);
                    out.push(Command::DamageBoss {
                        projectile: bullet.id,
                    });
                }
            }

            if let Some(shield) = boss.shield {
                for bullet in frame.ship_bullets {
                    if !self.is_consumed(bullet.id) && bullet.bounds.intersects(&shield.bounds) {
                        self.consume(bullet.id);
                        out.push(Command::DamageBossShield {
                            projectile: bullet.id,
                        });
                    }
                }
            }
        }

        if let Some(hazard) = frame.hazard {
            if frame.ship.bounds.intersects(&hazard.bounds) {
                out.push(Command::ShipHitOnBossStage);
            }
        }
    }
}
