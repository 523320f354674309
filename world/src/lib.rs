#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Alien Invasion.
//!
//! The world owns every entity pool, the ship and its session stats, the
//! difficulty-ramp scalars, and the simulation clock with its non-blocking
//! pause. State changes happen exclusively through [`apply`], which executes
//! one [`Command`] and appends the resulting [`Event`] values; read access
//! goes through the [`query`] module.

use std::time::Duration;

use alien_invasion_core::{
    AlienId, BossArchetype, Command, Config, ConsumableKind, Event, Facing, Point, ProjectileId,
    Rect, SoundCue, Stage, StageId, StageKind, BOUNCE_LIMIT, STAGE_ROSTER,
};
use alien_invasion_system_trajectory as trajectory;

const FLEET_TOP_MARGIN: f32 = 60.0;
const FLEET_SHIP_EXCLUSION: f32 = 200.0;
const HAZARD_BORDER_MARGIN: f32 = 100.0;
const HAZARD_SHIP_EXCLUSION: f32 = 100.0;
const HAZARD_CENTER_EXCLUSION: f32 = 150.0;
const BOSS_APPROACH_OFFSET: f32 = 100.0;

#[derive(Debug)]
struct Ship {
    position: Point,
    facing: Facing,
    shield_timer: Option<Duration>,
}

#[derive(Debug)]
struct Alien {
    id: AlienId,
    position: Point,
}

#[derive(Debug)]
struct Projectile {
    id: ProjectileId,
    position: Point,
    heading: f32,
    speed: f32,
    bouncing: bool,
    bounces: u32,
}

#[derive(Debug)]
struct Boss {
    archetype: BossArchetype,
    position: Point,
    health: u32,
    shield_points: Option<u32>,
}

#[derive(Debug)]
struct Consumable {
    kind: ConsumableKind,
    position: Point,
}

/// Represents the authoritative Alien Invasion world state.
#[derive(Debug)]
pub struct World {
    config: Config,
    current_stage: StageId,
    ship: Ship,
    lives: u32,
    ammo: u32,
    shields: u32,
    aliens: Vec<Alien>,
    ship_bullets: Vec<Projectile>,
    alien_bullets: Vec<Projectile>,
    boss_bullets: Vec<Projectile>,
    consumables: Vec<Consumable>,
    boss: Option<Boss>,
    hazard: Option<Point>,
    alien_speed: f32,
    alien_bullet_speed: f32,
    alien_fire_accumulator: Duration,
    hazard_accumulator: Duration,
    pause_remaining: Duration,
    boss_clear_pending: bool,
    next_alien_id: u32,
    next_projectile_id: u32,
    placement_state: u64,
    tick_index: u64,
}

impl World {
    /// Creates a new world ready for simulation under the provided tuning.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let ship = Ship {
            position: Point::new(
                config.screen_width / 2.0,
                config.screen_height - config.ship_extent.height() / 2.0,
            ),
            facing: Facing::Up,
            shield_timer: None,
        };
        let lives = config.starting_lives;
        let ammo = config.starting_ammo;
        let shields = config.starting_shields;
        let alien_speed = config.alien_speed;
        let alien_bullet_speed = config.alien_bullet_speed;
        let placement_state = config.placement_seed;
        Self {
            config,
            current_stage: StageId::new(0),
            ship,
            lives,
            ammo,
            shields,
            aliens: Vec::new(),
            ship_bullets: Vec::new(),
            alien_bullets: Vec::new(),
            boss_bullets: Vec::new(),
            consumables: Vec::new(),
            boss: None,
            hazard: None,
            alien_speed,
            alien_bullet_speed,
            alien_fire_accumulator: Duration::ZERO,
            hazard_accumulator: Duration::ZERO,
            pause_remaining: Duration::ZERO,
            boss_clear_pending: false,
            next_alien_id: 0,
            next_projectile_id: 0,
            placement_state,
            tick_index: 0,
        }
    }

    fn current_stage(&self) -> &'static Stage {
        &STAGE_ROSTER[self.current_stage.get()]
    }

    fn playfield(&self) -> Rect {
        self.config.playfield()
    }

    fn ship_bounds(&self) -> Rect {
        Rect::from_center(self.ship.position, self.config.ship_extent)
    }

    fn boss_bounds(&self, boss: &Boss) -> Rect {
        Rect::from_center(boss.position, self.config.boss_extent)
    }

    fn screen_center(&self) -> Point {
        Point::new(self.config.screen_width / 2.0, self.config.screen_height / 2.0)
    }

    fn next_projectile_id(&mut self) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile_id);
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);
        id
    }

    /// Draws an integer pixel coordinate from `[min, max)`.
    fn roll_pixels(&mut self, min: f32, max: f32) -> f32 {
        let span = ((max - min).max(1.0)) as u64;
        self.placement_state = next_random(self.placement_state);
        min + (self.placement_state % span) as f32
    }

    /// Draws a pixel coordinate from `[min, max)` avoiding the provided
    /// closed exclusion bands. Falls back to `min` if the bands swallow every
    /// draw.
    fn roll_pixels_excluding(&mut self, min: f32, max: f32, bands: &[(f32, f32)]) -> f32 {
        for _ in 0..64 {
            let candidate = self.roll_pixels(min, max);
            if bands
                .iter()
                .all(|(low, high)| candidate < *low || candidate > *high)
            {
                return candidate;
            }
        }
        min
    }

    fn spawn_ship_bullet(&mut self, out_events: &mut Vec<Event>) {
        if self.ship_bullets.len() >= self.ammo as usize {
            return;
        }
        let id = self.next_projectile_id();
        let heading = self.ship.facing.heading();
        self.ship_bullets.push(Projectile {
            id,
            position: self.ship.position,
            heading,
            speed: self.config.ship_bullet_speed,
            bouncing: false,
            bounces: 0,
        });
        out_events.push(Event::ShipBulletFired { projectile: id });
    }

    fn spawn_fleet(&mut self, out_events: &mut Vec<Event>) {
        let alien_width = self.config.alien_extent.width();
        let alien_height = self.config.alien_extent.height();
        let count = ((self.config.screen_width - 2.0 * alien_width) / (2.0 * alien_width)) as u32;
        let ship_band = (
            self.ship.position.y() - FLEET_SHIP_EXCLUSION,
            self.ship.position.y() + FLEET_SHIP_EXCLUSION,
        );
        for index in 0..count {
            let x = alien_width + 2.0 * alien_width * index as f32;
            let y = self.roll_pixels_excluding(
                FLEET_TOP_MARGIN,
                self.config.screen_height - alien_height,
                &[ship_band],
            );
            let id = AlienId::new(self.next_alien_id);
            self.next_alien_id = self.next_alien_id.wrapping_add(1);
            self.aliens.push(Alien {
                id,
                position: Point::new(x, y),
            });
        }
        self.alien_fire_accumulator = Duration::ZERO;
        out_events.push(Event::FleetSpawned { count });
    }

    fn spawn_hazard(&mut self, out_events: &mut Vec<Event>) {
        let center = self.screen_center();
        let x = self.roll_pixels_excluding(
            HAZARD_BORDER_MARGIN,
            self.config.screen_width - HAZARD_BORDER_MARGIN,
            &[
                (
                    self.ship.position.x() - HAZARD_SHIP_EXCLUSION,
                    self.ship.position.x() + HAZARD_SHIP_EXCLUSION,
                ),
                (
                    center.x() - HAZARD_CENTER_EXCLUSION,
                    center.x() + HAZARD_CENTER_EXCLUSION,
                ),
            ],
        );
        let y = self.roll_pixels_excluding(
            HAZARD_BORDER_MARGIN,
            self.config.screen_height - HAZARD_BORDER_MARGIN,
            &[
                (
                    self.ship.position.y() - HAZARD_SHIP_EXCLUSION,
                    self.ship.position.y() + HAZARD_SHIP_EXCLUSION,
                ),
                (
                    center.y() - HAZARD_CENTER_EXCLUSION,
                    center.y() + HAZARD_CENTER_EXCLUSION,
                ),
            ],
        );
        let position = Point::new(x, y);
        self.hazard = Some(position);
        out_events.push(Event::HazardSpawned { position });
    }

    fn remove_projectile(&mut self, id: ProjectileId) -> bool {
        for pool in [
            &mut self.ship_bullets,
            &mut self.alien_bullets,
            &mut self.boss_bullets,
        ] {
            if let Some(index) = pool.iter().position(|bullet| bullet.id == id) {
                let _ = pool.remove(index);
                return true;
            }
        }
        false
    }

    fn lower_shield(&mut self) {
        self.ship.shield_timer = None;
    }

    fn begin_pause(&mut self, duration: Duration, out_events: &mut Vec<Event>) {
        self.pause_remaining = duration;
        out_events.push(Event::SimulationPaused { duration });
    }

    fn register_ship_hit(&mut self, out_events: &mut Vec<Event>) {
        self.lives = self.lives.saturating_sub(1);
        out_events.push(Event::ShipHit { lives: self.lives });
        if self.lives == 0 {
            out_events.push(Event::ShipDestroyed);
        }
    }

    fn advance_projectiles(&mut self, out_events: &mut Vec<Event>) {
        let field = self.playfield();
        let bullet_extent = self.config.bullet_extent;
        for pool in [&mut self.ship_bullets, &mut self.alien_bullets] {
            let mut index = 0;
            while index < pool.len() {
                let bullet = &mut pool[index];
                bullet.position = trajectory::step(bullet.position, bullet.heading, bullet.speed);
                let bounds = Rect::from_center(bullet.position, bullet_extent);
                if trajectory::left_playfield(&bounds, &field) {
                    let expired = pool.remove(index);
                    out_events.push(Event::ProjectileExpired {
                        projectile: expired.id,
                    });
                } else {
                    index += 1;
                }
            }
        }

        let mut index = 0;
        while index < self.boss_bullets.len() {
            let bullet = &mut self.boss_bullets[index];
            bullet.position = trajectory::step(bullet.position, bullet.heading, bullet.speed);
            let bounds = Rect::from_center(bullet.position, bullet_extent);
            if bullet.bouncing {
                if bullet.bounces > BOUNCE_LIMIT {
                    let expired = self.boss_bullets.remove(index);
                    out_events.push(Event::ProjectileExpired {
                        projectile: expired.id,
                    });
                    continue;
                }
                if let Some(contact) = trajectory::edge_contact(&bounds, &field) {
                    bullet.heading = trajectory::reflect(contact, bullet.heading);
                    bullet.bounces += 1;
                }
                index += 1;
            } else if trajectory::left_playfield(&bounds, &field) {
                let expired = self.boss_bullets.remove(index);
                out_events.push(Event::ProjectileExpired {
                    projectile: expired.id,
                });
            } else {
                index += 1;
            }
        }
    }

    fn advance_aliens(&mut self) {
        let target = self.ship.position;
        let speed = self.alien_speed;
        for alien in &mut self.aliens {
            let mut x = alien.position.x();
            let mut y = alien.position.y();
            if x > target.x() {
                x -= speed;
            }
            if x < target.x() {
                x += speed;
            }
            if y > target.y() {
                y -= speed;
            }
            if y < target.y() {
                y += speed;
            }
            alien.position = Point::new(x, y);
        }
    }

    fn fire_alien_volley(&mut self, out_events: &mut Vec<Event>) {
        let target = self.ship.position;
        let speed = self.alien_bullet_speed;
        let count = self.aliens.len() as u32;
        let origins: Vec<Point> = self.aliens.iter().map(|alien| alien.position).collect();
        for origin in origins {
            let heading = trajectory::aim_heading(origin, target);
            let id = self.next_projectile_id();
            self.alien_bullets.push(Projectile {
                id,
                position: origin,
                heading,
                speed,
                bouncing: false,
                bounces: 0,
            });
        }
        out_events.push(Event::AlienVolleyFired { count });
    }

    fn advance_clock(&mut self, dt: Duration) -> Duration {
        self.tick_index = self.tick_index.saturating_add(1);
        if self.pause_remaining >= dt {
            self.pause_remaining -= dt;
            Duration::ZERO
        } else {
            let effective = dt - self.pause_remaining;
            self.pause_remaining = Duration::ZERO;
            effective
        }
    }

    fn clear_defeated_boss(&mut self, out_events: &mut Vec<Event>) {
        if !self.boss_clear_pending || !self.pause_remaining.is_zero() {
            return;
        }
        self.boss = None;
        self.boss_bullets.clear();
        self.boss_clear_pending = false;
        out_events.push(Event::BossCleared);
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let effective = self.advance_clock(dt);
        self.clear_defeated_boss(out_events);
        out_events.push(Event::TimeAdvanced { dt: effective });
        if effective.is_zero() {
            return;
        }

        self.advance_projectiles(out_events);
        self.advance_aliens();

        self.alien_fire_accumulator += effective;
        if self.alien_fire_accumulator > self.config.alien_fire_interval && !self.aliens.is_empty()
        {
            self.fire_alien_volley(out_events);
            self.alien_fire_accumulator = Duration::ZERO;
        }

        if let Some(timer) = self.ship.shield_timer.as_mut() {
            *timer += effective;
            if *timer > self.config.ship_shield_duration {
                self.ship.shield_timer = None;
                out_events.push(Event::ShipShieldExpired);
            }
        }

        if self.current_stage().kind() == StageKind::Boss(BossArchetype::Blue)
            && self.boss.is_some()
        {
            self.hazard_accumulator += effective;
            if self.hazard_accumulator > self.config.hazard_cycle {
                if self.hazard.take().is_some() {
                    out_events.push(Event::HazardDespawned);
                }
                self.hazard_accumulator = Duration::ZERO;
            } else if self.hazard_accumulator > self.config.hazard_spawn_delay
                && self.hazard.is_none()
            {
                self.spawn_hazard(out_events);
            }
        }
    }

    fn enter_stage(&mut self, stage: StageId, out_events: &mut Vec<Event>) {
        let previous = self.current_stage().kind();
        self.ship_bullets.clear();
        self.consumables.clear();
        match previous {
            StageKind::Regular => {
                self.aliens.clear();
                self.alien_bullets.clear();
            }
            StageKind::Boss(_) => {
                self.boss = None;
                self.boss_bullets.clear();
                self.hazard = None;
                self.boss_clear_pending = false;
            }
            StageKind::End => {}
        }
        self.alien_fire_accumulator = Duration::ZERO;
        self.hazard_accumulator = Duration::ZERO;
        self.current_stage = stage;
        out_events.push(Event::StageEntered { stage });
    }

    fn restart_boss_encounter(&mut self, out_events: &mut Vec<Event>) {
        self.register_ship_hit(out_events);
        self.ship_bullets.clear();
        self.boss_bullets.clear();
        self.hazard = None;
        self.hazard_accumulator = Duration::ZERO;
        self.lower_shield();
        if let Some(boss) = self.boss.as_mut() {
            boss.health = boss.archetype.starting_health();
            boss.shield_points = Some(boss.archetype.starting_shield());
            boss.position = Point::new(
                self.config.screen_width / 2.0,
                self.config.screen_height / 2.0,
            );
        }
    }

    fn damage_boss(&mut self, projectile: ProjectileId, out_events: &mut Vec<Event>) {
        if self.remove_projectile(projectile) {
            out_events.push(Event::ProjectileExpired { projectile });
        }
        if self.boss_clear_pending {
            return;
        }
        let pause = self.config.pause_duration;
        let Some(boss) = self.boss.as_mut() else {
            return;
        };
        match boss.shield_points.as_mut() {
            Some(points) if *points > 0 => {
                *points -= 1;
                let remaining = *points;
                if remaining == 0 {
                    boss.shield_points = None;
                }
                out_events.push(Event::BossShieldDamaged { points: remaining });
            }
            _ => {
                boss.health = boss.health.saturating_sub(1);
                out_events.push(Event::BossDamaged {
                    health: boss.health,
                });
                if boss.health == 0 {
                    let archetype = boss.archetype;
                    self.boss_clear_pending = true;
                    out_events.push(Event::BossDefeated { archetype });
                    self.begin_pause(pause, out_events);
                }
            }
        }
    }

    fn damage_boss_shield(&mut self, projectile: ProjectileId, out_events: &mut Vec<Event>) {
        if self.remove_projectile(projectile) {
            out_events.push(Event::ProjectileExpired { projectile });
        }
        let Some(boss) = self.boss.as_mut() else {
            return;
        };
        if let Some(points) = boss.shield_points.as_mut() {
            *points = points.saturating_sub(1);
            let remaining = *points;
            if remaining == 0 {
                boss.shield_points = None;
            }
            out_events.push(Event::BossShieldDamaged { points: remaining });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::PauseSimulation { duration } => world.begin_pause(duration, out_events),
        Command::EnterStage { stage } => world.enter_stage(stage, out_events),
        Command::IncreaseAlienSpeed => {
            world.alien_speed += world.config.alien_speed_ramp;
            world.alien_bullet_speed += world.config.alien_bullet_speed_ramp;
        }
        Command::CenterShip => {
            world.ship.position = Point::new(
                world.config.screen_width / 2.0,
                world.config.screen_height - world.config.ship_extent.height() / 2.0,
            );
            world.ship.facing = Facing::Up;
        }
        Command::PrepareShipForBoss => {
            world.ship.position = Point::new(
                world.config.screen_width / 2.0,
                world.config.screen_height - BOSS_APPROACH_OFFSET,
            );
            world.ship.facing = Facing::Up;
        }
        Command::SetShipPosition { position } => world.ship.position = position,
        Command::SetShipFacing { facing } => world.ship.facing = facing,
        Command::FireShipBullet => world.spawn_ship_bullet(out_events),
        Command::UseShipShield => {
            if world.shields > 0 && world.ship.shield_timer.is_none() {
                world.shields -= 1;
                world.ship.shield_timer = Some(Duration::ZERO);
                out_events.push(Event::ShipShieldRaised);
                out_events.push(Event::SoundCue {
                    cue: SoundCue::ShieldRaised,
                });
            }
        }
        Command::SpawnFleet => world.spawn_fleet(out_events),
        Command::SpawnConsumable { kind, position } => {
            if world.consumables.iter().all(|pickup| pickup.kind != kind) {
                world.consumables.push(Consumable { kind, position });
                out_events.push(Event::ConsumableSpawned { kind, position });
            }
        }
        Command::SpawnBoss { archetype } => {
            debug_assert!(world.boss.is_none(), "boss pool holds at most one boss");
            world.boss = Some(Boss {
                archetype,
                position: world.screen_center(),
                health: archetype.starting_health(),
                shield_points: Some(archetype.starting_shield()),
            });
            world.hazard_accumulator = Duration::ZERO;
            out_events.push(Event::BossSpawned { archetype });
        }
        Command::MoveBoss { position } => {
            if !world.boss_clear_pending {
                if let Some(boss) = world.boss.as_mut() {
                    boss.position = position;
                }
            }
        }
        Command::FireBossVolley { volley } => {
            if world.boss_clear_pending {
                return;
            }
            let Some(boss) = world.boss.as_ref() else {
                return;
            };
            let origin = boss.position;
            let speed = match boss.archetype {
                BossArchetype::Green => world.config.green_boss_bullet_speed,
                BossArchetype::Red => world.config.red_boss_bullet_speed,
                BossArchetype::Blue => world.config.blue_boss_bullet_speed,
            };
            let count = volley.len() as u32;
            for spawn in volley {
                let id = world.next_projectile_id();
                world.boss_bullets.push(Projectile {
                    id,
                    position: origin,
                    heading: spawn.heading,
                    speed,
                    bouncing: spawn.bouncing,
                    bounces: 0,
                });
            }
            out_events.push(Event::BossVolleyFired { count });
        }
        Command::DestroyAlien { alien } => {
            if let Some(index) = world.aliens.iter().position(|entry| entry.id == alien) {
                let _ = world.aliens.remove(index);
                out_events.push(Event::AlienDestroyed { alien });
            }
        }
        Command::DestroyProjectile { projectile } => {
            if world.remove_projectile(projectile) {
                out_events.push(Event::ProjectileExpired { projectile });
            }
        }
        Command::CollectConsumable { kind } => {
            if let Some(index) = world
                .consumables
                .iter()
                .position(|pickup| pickup.kind == kind)
            {
                let _ = world.consumables.remove(index);
                match kind {
                    ConsumableKind::Health => world.lives += 1,
                    ConsumableKind::Ammo => world.ammo += 1,
                }
                out_events.push(Event::ConsumableCollected { kind });
                out_events.push(Event::SoundCue {
                    cue: SoundCue::Pickup,
                });
            }
        }
        Command::ShipHit => {
            world.register_ship_hit(out_events);
            world.aliens.clear();
            world.alien_bullets.clear();
            world.ship_bullets.clear();
            world.consumables.clear();
            world.alien_fire_accumulator = Duration::ZERO;
            world.lower_shield();
        }
        Command::ShipHitOnBossStage => world.restart_boss_encounter(out_events),
        Command::DamageBoss { projectile } => world.damage_boss(projectile, out_events),
        Command::DamageBossShield { projectile } => {
            world.damage_boss_shield(projectile, out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use alien_invasion_core::{
        AlienSnapshot, BossShieldSnapshot, BossSnapshot, Config, ConsumableSnapshot, Faction,
        HazardSnapshot, ProjectileSnapshot, Rect, ShipSnapshot, Stage, STAGE_ROSTER,
    };

    /// Provides read-only access to the tuning the world was created with.
    #[must_use]
    pub fn config(world: &World) -> &Config {
        &world.config
    }

    /// Retrieves the stage the world currently simulates.
    #[must_use]
    pub fn current_stage(world: &World) -> &'static Stage {
        &STAGE_ROSTER[world.current_stage.get()]
    }

    /// Reports whether the non-blocking pause is still draining.
    #[must_use]
    pub fn is_paused(world: &World) -> bool {
        !world.pause_remaining.is_zero()
    }

    /// Number of ticks the world has processed.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Captures a read-only snapshot of the ship and its session stats.
    #[must_use]
    pub fn ship(world: &World) -> ShipSnapshot {
        let bounds = world.ship_bounds();
        let shield_bounds = world
            .ship
            .shield_timer
            .map(|_| Rect::from_center(world.ship.position, world.config.ship_shield_extent));
        ShipSnapshot {
            position: world.ship.position,
            bounds,
            shield_bounds,
            facing: world.ship.facing,
            lives: world.lives,
            ammo: world.ammo,
            shields: world.shields,
        }
    }

    /// Captures the live fleet in ascending identifier order.
    #[must_use]
    pub fn aliens(world: &World) -> Vec<AlienSnapshot> {
        let mut snapshots: Vec<AlienSnapshot> = world
            .aliens
            .iter()
            .map(|alien| AlienSnapshot {
                id: alien.id,
                position: alien.position,
                bounds: Rect::from_center(alien.position, world.config.alien_extent),
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        snapshots
    }

    fn projectile_snapshots(
        world: &World,
        pool: &[super::Projectile],
        faction: Faction,
    ) -> Vec<ProjectileSnapshot> {
        let mut snapshots: Vec<ProjectileSnapshot> = pool
            .iter()
            .map(|bullet| ProjectileSnapshot {
                id: bullet.id,
                position: bullet.position,
                bounds: Rect::from_center(bullet.position, world.config.bullet_extent),
                heading: bullet.heading,
                speed: bullet.speed,
                faction,
                bounces: bullet.bounces,
                bouncing: bullet.bouncing,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        snapshots
    }

    /// Captures the live ship bullets in ascending identifier order.
    #[must_use]
    pub fn ship_bullets(world: &World) -> Vec<ProjectileSnapshot> {
        projectile_snapshots(world, &world.ship_bullets, Faction::Ship)
    }

    /// Captures the live alien bullets in ascending identifier order.
    #[must_use]
    pub fn alien_bullets(world: &World) -> Vec<ProjectileSnapshot> {
        projectile_snapshots(world, &world.alien_bullets, Faction::Alien)
    }

    /// Captures the live boss bullets in ascending identifier order.
    #[must_use]
    pub fn boss_bullets(world: &World) -> Vec<ProjectileSnapshot> {
        projectile_snapshots(world, &world.boss_bullets, Faction::Boss)
    }

    /// Captures the boss and its shield, if an encounter is running.
    #[must_use]
    pub fn boss(world: &World) -> Option<BossSnapshot> {
        world.boss.as_ref().map(|boss| BossSnapshot {
            archetype: boss.archetype,
            position: boss.position,
            bounds: world.boss_bounds(boss),
            health: boss.health,
            max_health: boss.archetype.starting_health(),
            shield: boss.shield_points.map(|points| BossShieldSnapshot {
                points,
                bounds: Rect::from_center(boss.position, world.config.boss_shield_extent),
            }),
        })
    }

    /// Captures the live consumable pickups.
    #[must_use]
    pub fn consumables(world: &World) -> Vec<ConsumableSnapshot> {
        world
            .consumables
            .iter()
            .map(|pickup| ConsumableSnapshot {
                kind: pickup.kind,
                position: pickup.position,
                bounds: Rect::from_center(pickup.position, world.config.consumable_extent),
            })
            .collect()
    }

    /// Captures the black-hole hazard, if one is live.
    #[must_use]
    pub fn hazard(world: &World) -> Option<HazardSnapshot> {
        world.hazard.map(|position| HazardSnapshot {
            position,
            bounds: Rect::from_center(position, world.config.hazard_extent),
        })
    }
}

fn next_random(state: u64) -> u64 {
    state.wrapping_mul(636_413_622_384_679_3005).wrapping_add(1)
}
