#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Alien Invasion engine.
//!
//! This crate defines the message surface that connects the driver adapter,
//! the authoritative world, and the pure gameplay systems. The adapter and
//! systems submit [`Command`] values describing desired mutations, the world
//! executes those commands via its `apply` entry point, and then broadcasts
//! [`Event`] values for systems to react to deterministically. Systems consume
//! event streams, query immutable snapshots, and respond exclusively with new
//! command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of reflections after which a bouncing bullet is retired.
pub const BOUNCE_LIMIT: u32 = 3;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Freezes entity updates for the provided duration without blocking.
    PauseSimulation {
        /// Span of wall time during which entity timers observe zero delta.
        duration: Duration,
    },
    /// Makes the referenced stage current, tearing down the previous one.
    EnterStage {
        /// Index of the stage to activate.
        stage: StageId,
    },
    /// Raises the per-stage alien and alien-bullet speed scalars.
    IncreaseAlienSpeed,
    /// Repositions the ship at the center of the playfield.
    CenterShip,
    /// Repositions the ship below the boss spawn point, facing up.
    PrepareShipForBoss,
    /// Updates the ship's position from the input layer.
    SetShipPosition {
        /// New center of the ship.
        position: Point,
    },
    /// Updates the ship's eight-way facing from the input layer.
    SetShipFacing {
        /// Direction the ship now points toward.
        facing: Facing,
    },
    /// Requests that the ship fire one bullet along its current facing.
    FireShipBullet,
    /// Requests that the ship raise its timed shield.
    UseShipShield,
    /// Spawns a fresh alien fleet sized to the playfield width.
    SpawnFleet,
    /// Spawns a consumable pickup at the provided position.
    SpawnConsumable {
        /// Kind of pickup to place.
        kind: ConsumableKind,
        /// Center of the pickup.
        position: Point,
    },
    /// Constructs the boss for the provided archetype, with its shield.
    SpawnBoss {
        /// Behavior and stat variant of the boss.
        archetype: BossArchetype,
    },
    /// Moves the boss to a new center position.
    MoveBoss {
        /// Position computed by the boss controller.
        position: Point,
    },
    /// Spawns one batch of boss bullets at the boss's current position.
    FireBossVolley {
        /// Headings and motion models for every bullet in the batch.
        volley: Vec<BossBulletSpawn>,
    },
    /// Removes the referenced alien from the fleet.
    DestroyAlien {
        /// Identifier of the alien to remove.
        alien: AlienId,
    },
    /// Removes the referenced projectile from whichever pool holds it.
    DestroyProjectile {
        /// Identifier of the projectile to remove.
        projectile: ProjectileId,
    },
    /// Resolves a pickup collision, consuming the pickup.
    CollectConsumable {
        /// Kind of pickup the ship touched.
        kind: ConsumableKind,
    },
    /// Applies the regular-stage ship-hit outcome.
    ShipHit,
    /// Applies the boss-stage ship-hit outcome, restarting the encounter.
    ShipHitOnBossStage,
    /// Applies one point of boss damage, consuming the hitting bullet.
    DamageBoss {
        /// Ship bullet consumed by the hit.
        projectile: ProjectileId,
    },
    /// Applies one point of boss-shield damage, consuming the hitting bullet.
    DamageBossShield {
        /// Ship bullet consumed by the hit.
        projectile: ProjectileId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    ///
    /// The carried delta is the effective duration after pause gating, so a
    /// frame spent entirely inside a pause reports [`Duration::ZERO`].
    TimeAdvanced {
        /// Effective simulated time observed by entity timers.
        dt: Duration,
    },
    /// Announces that a non-blocking pause began.
    SimulationPaused {
        /// Span during which entity timers observe zero delta.
        duration: Duration,
    },
    /// Confirms that a stage became current.
    StageEntered {
        /// Index of the newly active stage.
        stage: StageId,
    },
    /// Confirms that an alien fleet was spawned.
    FleetSpawned {
        /// Number of aliens placed in the row.
        count: u32,
    },
    /// Confirms that a consumable pickup appeared.
    ConsumableSpawned {
        /// Kind of pickup placed.
        kind: ConsumableKind,
        /// Center of the pickup.
        position: Point,
    },
    /// Confirms that the ship collected a pickup.
    ConsumableCollected {
        /// Kind of pickup consumed.
        kind: ConsumableKind,
    },
    /// Fire-and-forget notification for the external audio layer.
    SoundCue {
        /// Sound the audio layer should play.
        cue: SoundCue,
    },
    /// Confirms that the ship fired a bullet.
    ShipBulletFired {
        /// Identifier assigned to the new bullet.
        projectile: ProjectileId,
    },
    /// Confirms that the ship raised its timed shield.
    ShipShieldRaised,
    /// Reports that the ship shield's duration elapsed.
    ShipShieldExpired,
    /// Confirms that every live alien fired one direct-aim bullet.
    AlienVolleyFired {
        /// Number of bullets spawned.
        count: u32,
    },
    /// Confirms that an alien was destroyed.
    AlienDestroyed {
        /// Identifier of the removed alien.
        alien: AlienId,
    },
    /// Reports that a projectile left play.
    ProjectileExpired {
        /// Identifier of the removed projectile.
        projectile: ProjectileId,
    },
    /// Confirms that a boss entered the arena.
    BossSpawned {
        /// Behavior and stat variant of the boss.
        archetype: BossArchetype,
    },
    /// Confirms that a boss volley was spawned.
    BossVolleyFired {
        /// Number of bullets in the batch.
        count: u32,
    },
    /// Reports a successful hit on the boss's health.
    BossDamaged {
        /// Health remaining after the hit.
        health: u32,
    },
    /// Reports a successful hit absorbed by the boss shield.
    BossShieldDamaged {
        /// Shield points remaining after the hit.
        points: u32,
    },
    /// Reports that the boss's health reached zero.
    ///
    /// The boss and its bullets remain visible through the death pause; the
    /// matching [`Event::BossCleared`] fires once the pause drains.
    BossDefeated {
        /// Variant of the defeated boss.
        archetype: BossArchetype,
    },
    /// Confirms that the defeated boss and its bullets left the pools.
    BossCleared,
    /// Confirms that the black-hole hazard appeared.
    HazardSpawned {
        /// Center of the hazard.
        position: Point,
    },
    /// Confirms that the black-hole hazard despawned.
    HazardDespawned,
    /// Reports that the ship took a hit.
    ShipHit {
        /// Lives remaining after the hit.
        lives: u32,
    },
    /// Reports that the ship's last life was spent.
    ShipDestroyed,
}

/// Audio notifications emitted toward the external playback layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// A health or ammo pickup was collected.
    Pickup,
    /// The ship shield was raised.
    ShieldRaised,
}

/// One bullet within a boss volley, described at spawn time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BossBulletSpawn {
    /// Heading assigned at spawn, in degrees.
    pub heading: f32,
    /// Whether the bullet reflects off playfield edges instead of expiring.
    pub bouncing: bool,
}

/// Position expressed in playfield pixels; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point from pixel coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in pixels.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in pixels, growing downward.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Width and height of an entity's collision box in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    width: f32,
    height: f32,
}

impl Extent {
    /// Creates a new extent from pixel dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of the box in pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the box in pixels.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

/// Axis-aligned collision rectangle centered on an entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    center: Point,
    extent: Extent,
}

impl Rect {
    /// Constructs a rectangle from its center and dimensions.
    #[must_use]
    pub const fn from_center(center: Point, extent: Extent) -> Self {
        Self { center, extent }
    }

    /// Center of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Horizontal coordinate of the left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.center.x() - self.extent.width() / 2.0
    }

    /// Horizontal coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.center.x() + self.extent.width() / 2.0
    }

    /// Vertical coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.center.y() - self.extent.height() / 2.0
    }

    /// Vertical coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.center.y() + self.extent.height() / 2.0
    }

    /// Reports whether two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Unique identifier assigned to an alien.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlienId(u32);

impl AlienId {
    /// Creates a new alien identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile, shared across all pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Party that owns a projectile, used when resolving collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The player's ship.
    Ship,
    /// A fleet alien.
    Alien,
    /// The active boss.
    Boss,
}

/// Eight-way facing tracked for the ship; bullets inherit it at fire time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward the top of the screen.
    Up,
    /// Toward the bottom of the screen.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
    /// Diagonal between up and left.
    UpLeft,
    /// Diagonal between up and right.
    UpRight,
    /// Diagonal between down and left.
    DownLeft,
    /// Diagonal between down and right.
    DownRight,
}

impl Facing {
    /// Heading in degrees matching the facing; 0° points right, 90° up.
    #[must_use]
    pub const fn heading(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::UpRight => 45.0,
            Self::Up => 90.0,
            Self::UpLeft => 135.0,
            Self::Left => 180.0,
            Self::DownLeft => 225.0,
            Self::Down => 270.0,
            Self::DownRight => 315.0,
        }
    }
}

/// Health or ammo pickup variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumableKind {
    /// Grants one extra life on pickup.
    Health,
    /// Raises the concurrent ship-bullet cap by one.
    Ammo,
}

/// Behavior and stat variant of a boss encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossArchetype {
    /// Stationary; fires randomized four-way bursts of bouncing bullets.
    Green,
    /// Walks a nine-region grid; fires five-bullet direct-aim volleys.
    Red,
    /// Stationary; fires four-bullet volleys along an oscillating sweep.
    Blue,
}

impl BossArchetype {
    /// Health points the boss starts the encounter with.
    #[must_use]
    pub const fn starting_health(self) -> u32 {
        match self {
            Self::Green | Self::Red | Self::Blue => 10,
        }
    }

    /// Shield points the boss's companion shield starts with.
    #[must_use]
    pub const fn starting_shield(self) -> u32 {
        match self {
            Self::Green | Self::Blue => 10,
            Self::Red => 5,
        }
    }
}

/// Index of a stage within the fixed roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StageId(usize);

impl StageId {
    /// Creates a new stage index wrapper.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Retrieves the underlying roster index.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

/// Category of a stage within the campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageKind {
    /// A wave of fleet aliens.
    Regular,
    /// A boss encounter of the carried archetype.
    Boss(BossArchetype),
    /// Terminal marker; reaching it wins the campaign.
    End,
}

/// One discrete phase of the campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stage {
    index: StageId,
    kind: StageKind,
    name: &'static str,
}

impl Stage {
    const fn new(index: usize, kind: StageKind, name: &'static str) -> Self {
        Self {
            index: StageId::new(index),
            kind,
            name,
        }
    }

    /// Position of the stage within the roster.
    #[must_use]
    pub const fn index(&self) -> StageId {
        self.index
    }

    /// Category of the stage.
    #[must_use]
    pub const fn kind(&self) -> StageKind {
        self.kind
    }

    /// Human-readable stage name, unique within the roster.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// The fixed campaign: three waves before each boss, ended by a terminal
/// marker.
pub static STAGE_ROSTER: [Stage; 13] = [
    Stage::new(0, StageKind::Regular, "1_1"),
    Stage::new(1, StageKind::Regular, "1_2"),
    Stage::new(2, StageKind::Regular, "1_3"),
    Stage::new(3, StageKind::Boss(BossArchetype::Green), "green_boss"),
    Stage::new(4, StageKind::Regular, "2_1"),
    Stage::new(5, StageKind::Regular, "2_2"),
    Stage::new(6, StageKind::Regular, "2_3"),
    Stage::new(7, StageKind::Boss(BossArchetype::Red), "red_boss"),
    Stage::new(8, StageKind::Regular, "2_5"),
    Stage::new(9, StageKind::Regular, "2_6"),
    Stage::new(10, StageKind::Regular, "2_7"),
    Stage::new(11, StageKind::Boss(BossArchetype::Blue), "blue_boss"),
    Stage::new(12, StageKind::End, "end"),
];

/// Error returned when a stage name does not match the roster.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown stage name: {name}")]
pub struct UnknownStage {
    /// Name that failed to match any roster entry.
    pub name: String,
}

/// Looks up a roster stage by its unique name.
pub fn stage_by_name(name: &str) -> Result<&'static Stage, UnknownStage> {
    STAGE_ROSTER
        .iter()
        .find(|stage| stage.name() == name)
        .ok_or_else(|| UnknownStage {
            name: name.to_owned(),
        })
}

/// Immutable representation of the ship used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipSnapshot {
    /// Center of the ship.
    pub position: Point,
    /// Collision box of the hull.
    pub bounds: Rect,
    /// Collision box of the raised shield, if one is active.
    pub shield_bounds: Option<Rect>,
    /// Direction the ship points toward.
    pub facing: Facing,
    /// Lives remaining.
    pub lives: u32,
    /// Concurrent ship-bullet cap.
    pub ammo: u32,
    /// Unused shield charges.
    pub shields: u32,
}

/// Immutable representation of a single fleet alien used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlienSnapshot {
    /// Unique identifier assigned to the alien.
    pub id: AlienId,
    /// Center of the alien.
    pub position: Point,
    /// Collision box of the alien.
    pub bounds: Rect,
}

/// Immutable representation of a single projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: ProjectileId,
    /// Center of the projectile.
    pub position: Point,
    /// Collision box of the projectile.
    pub bounds: Rect,
    /// Heading in degrees, as assigned at spawn.
    pub heading: f32,
    /// Displacement applied per update pass, in pixels.
    pub speed: f32,
    /// Party that fired the projectile.
    pub faction: Faction,
    /// Edge reflections performed so far; zero for non-bouncing bullets.
    pub bounces: u32,
    /// Whether the bullet reflects off edges instead of expiring.
    pub bouncing: bool,
}

/// Immutable representation of the boss used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BossSnapshot {
    /// Behavior and stat variant of the boss.
    pub archetype: BossArchetype,
    /// Center of the boss.
    pub position: Point,
    /// Collision box of the boss body.
    pub bounds: Rect,
    /// Health remaining.
    pub health: u32,
    /// Health the encounter started with.
    pub max_health: u32,
    /// Shield points remaining, and the shield's collision box.
    pub shield: Option<BossShieldSnapshot>,
}

/// Immutable representation of the boss's companion shield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BossShieldSnapshot {
    /// Shield points remaining.
    pub points: u32,
    /// Collision box of the shield; tracks the boss.
    pub bounds: Rect,
}

/// Immutable representation of a live consumable pickup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsumableSnapshot {
    /// Kind of pickup.
    pub kind: ConsumableKind,
    /// Center of the pickup.
    pub position: Point,
    /// Collision box of the pickup.
    pub bounds: Rect,
}

/// Immutable representation of the black-hole hazard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardSnapshot {
    /// Center of the hazard.
    pub position: Point,
    /// Collision box of the hazard.
    pub bounds: Rect,
}

/// Tuning surface shared by the world and the gameplay systems.
///
/// Speeds are displacements in pixels applied per update pass; cadences are
/// accumulated-time thresholds matching the original settings table.
#[derive(Clone, Debug)]
pub struct Config {
    /// Playfield width in pixels.
    pub screen_width: f32,
    /// Playfield height in pixels.
    pub screen_height: f32,
    /// Displacement of ship bullets per update pass.
    pub ship_bullet_speed: f32,
    /// Base displacement of alien bullets per update pass; ramps per stage.
    pub alien_bullet_speed: f32,
    /// Ramp added to the alien-bullet speed scalar on each regular transit.
    pub alien_bullet_speed_ramp: f32,
    /// Base displacement of fleet aliens per update pass; ramps per stage.
    pub alien_speed: f32,
    /// Ramp added to the alien speed scalar on each regular transit.
    pub alien_speed_ramp: f32,
    /// Interval between fleet-wide alien volleys.
    pub alien_fire_interval: Duration,
    /// Displacement of the red boss per update pass.
    pub red_boss_speed: f32,
    /// Displacement of green boss bullets per update pass.
    pub green_boss_bullet_speed: f32,
    /// Displacement of red boss bullets per update pass.
    pub red_boss_bullet_speed: f32,
    /// Displacement of blue boss bullets per update pass.
    pub blue_boss_bullet_speed: f32,
    /// Green boss cadence before the first burst.
    pub green_boss_initial_interval: Duration,
    /// Green boss cadence after the first burst.
    pub green_boss_steady_interval: Duration,
    /// Red boss volley cadence.
    pub red_boss_volley_interval: Duration,
    /// Blue boss volley cadence.
    pub blue_boss_volley_interval: Duration,
    /// Minimum distance the red boss keeps from playfield edges.
    pub boss_margin: f32,
    /// Duration a raised ship shield stays active.
    pub ship_shield_duration: Duration,
    /// Stage time after which the black-hole hazard appears.
    pub hazard_spawn_delay: Duration,
    /// Stage time after which a live hazard despawns and the cycle restarts.
    pub hazard_cycle: Duration,
    /// Length of the non-blocking pause after ship hits and boss defeats.
    pub pause_duration: Duration,
    /// Lives the ship starts the campaign with.
    pub starting_lives: u32,
    /// Concurrent ship-bullet cap at campaign start.
    pub starting_ammo: u32,
    /// Shield charges at campaign start.
    pub starting_shields: u32,
    /// Seed for the world's fleet and hazard placement generator.
    pub placement_seed: u64,
    /// Collision box of the ship hull.
    pub ship_extent: Extent,
    /// Collision box of the raised ship shield.
    pub ship_shield_extent: Extent,
    /// Collision box of a fleet alien.
    pub alien_extent: Extent,
    /// Collision box of every bullet.
    pub bullet_extent: Extent,
    /// Collision box of a boss body.
    pub boss_extent: Extent,
    /// Collision box of a boss shield.
    pub boss_shield_extent: Extent,
    /// Collision box of a consumable pickup.
    pub consumable_extent: Extent,
    /// Collision box of the black-hole hazard.
    pub hazard_extent: Extent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            ship_bullet_speed: 1.5,
            alien_bullet_speed: 0.07,
            alien_bullet_speed_ramp: 0.02,
            alien_speed: 0.1,
            alien_speed_ramp: 0.01,
            alien_fire_interval: Duration::from_millis(2500),
            red_boss_speed: 0.004,
            green_boss_bullet_speed: 0.09,
            red_boss_bullet_speed: 0.08,
            blue_boss_bullet_speed: 1.0,
            green_boss_initial_interval: Duration::from_millis(300),
            green_boss_steady_interval: Duration::from_millis(1650),
            red_boss_volley_interval: Duration::from_millis(1350),
            blue_boss_volley_interval: Duration::from_millis(300),
            boss_margin: 150.0,
            ship_shield_duration: Duration::from_millis(3000),
            hazard_spawn_delay: Duration::from_millis(2000),
            hazard_cycle: Duration::from_millis(6000),
            pause_duration: Duration::from_millis(300),
            starting_lives: 3,
            starting_ammo: 1,
            starting_shields: 1,
            placement_seed: 0x42f0_e1eb_d4a5_3c21,
            ship_extent: Extent::new(48.0, 56.0),
            ship_shield_extent: Extent::new(64.0, 72.0),
            alien_extent: Extent::new(60.0, 48.0),
            bullet_extent: Extent::new(8.0, 16.0),
            boss_extent: Extent::new(96.0, 80.0),
            boss_shield_extent: Extent::new(128.0, 112.0),
            consumable_extent: Extent::new(28.0, 28.0),
            hazard_extent: Extent::new(80.0, 80.0),
        }
    }
}

impl Config {
    /// Collision rectangle of the whole playfield, anchored at the origin.
    #[must_use]
    pub fn playfield(&self) -> Rect {
        Rect::from_center(
            Point::new(self.screen_width / 2.0, self.screen_height / 2.0),
            Extent::new(self.screen_width, self.screen_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        stage_by_name, AlienId, BossArchetype, ConsumableKind, Extent, Facing, Point, ProjectileId,
        Rect, StageId, StageKind, STAGE_ROSTER,
    };
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn roster_indices_are_monotonic() {
        for (position, stage) in STAGE_ROSTER.iter().enumerate() {
            assert_eq!(stage.index(), StageId::new(position));
        }
    }

    #[test]
    fn roster_ends_with_terminal_marker() {
        let last = STAGE_ROSTER[STAGE_ROSTER.len() - 1];
        assert_eq!(last.kind(), StageKind::End);
        assert_eq!(
            STAGE_ROSTER
                .iter()
                .filter(|stage| matches!(stage.kind(), StageKind::Boss(_)))
                .count(),
            3
        );
    }

    #[test]
    fn stage_lookup_matches_names() {
        let stage = stage_by_name("red_boss").expect("stage exists");
        assert_eq!(stage.kind(), StageKind::Boss(BossArchetype::Red));
        assert!(stage_by_name("9_9").is_err());
    }

    #[test]
    fn archetype_defaults_match_encounter_table() {
        assert_eq!(BossArchetype::Green.starting_health(), 10);
        assert_eq!(BossArchetype::Green.starting_shield(), 10);
        assert_eq!(BossArchetype::Red.starting_shield(), 5);
        assert_eq!(BossArchetype::Blue.starting_shield(), 10);
    }

    #[test]
    fn facing_headings_cover_the_octants() {
        assert_eq!(Facing::Right.heading(), 0.0);
        assert_eq!(Facing::Up.heading(), 90.0);
        assert_eq!(Facing::DownRight.heading(), 315.0);
    }

    #[test]
    fn rects_overlap_only_when_edges_cross() {
        let a = Rect::from_center(Point::new(0.0, 0.0), Extent::new(10.0, 10.0));
        let b = Rect::from_center(Point::new(8.0, 0.0), Extent::new(10.0, 10.0));
        let c = Rect::from_center(Point::new(20.0, 0.0), Extent::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn identifiers_round_trip_through_bincode() {
        assert_round_trip(&AlienId::new(7));
        assert_round_trip(&ProjectileId::new(42));
        assert_round_trip(&StageId::new(11));
    }

    #[test]
    fn value_types_round_trip_through_bincode() {
        assert_round_trip(&BossArchetype::Blue);
        assert_round_trip(&ConsumableKind::Ammo);
        assert_round_trip(&Point::new(3.0, 4.0));
    }
}
