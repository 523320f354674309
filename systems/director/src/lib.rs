#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that owns campaign progression.
//!
//! The director tracks the current roster index, reacts to ship hits and
//! cleared waves, and answers with setup, teardown, and transit command
//! batches. Consumable spawn rolls use an injected seed so campaigns replay
//! identically. The per-frame [`StepReport`] carries the progression flags an
//! outer shell needs for menu and reset decisions.

use alien_invasion_core::{
    AlienSnapshot, BossSnapshot, Command, Config, ConsumableKind, Event, Point, ShipSnapshot,
    Stage, StageKind, STAGE_ROSTER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// One-in-five chance that entering a regular stage places a pickup.
const CONSUMABLE_ROLL_SIDES: u32 = 5;

/// Lives cap beyond which health pickups stop spawning.
const HEALTH_PICKUP_CAP: u32 = 4;

/// Ammo cap beyond which ammo pickups stop spawning.
const AMMO_PICKUP_CAP: u32 = 3;

/// Border kept free of pickups, in pixels.
const PICKUP_BORDER_MARGIN: f32 = 100.0;

/// Half-width of the exclusion band around the ship, in pixels.
const PICKUP_SHIP_EXCLUSION: f32 = 100.0;

/// Progression flags reported after each director step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The active stage's clear condition held and the campaign advanced.
    pub wave_cleared: bool,
    /// The ship's last life was spent; the campaign is over.
    pub ship_destroyed: bool,
    /// The terminal roster entry was reached; the campaign is won.
    pub game_won: bool,
}

/// Stage director system that queues progression commands.
#[derive(Debug)]
pub struct StageDirector {
    config: Config,
    rng: ChaCha8Rng,
    current: usize,
    terminal: bool,
}

impl StageDirector {
    /// Creates a new director starting at the provided roster stage.
    #[must_use]
    pub fn new(config: Config, seed: u64, start: &Stage) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            current: start.index().get(),
            terminal: false,
        }
    }

    /// Stage the director currently runs.
    #[must_use]
    pub fn current_stage(&self) -> &'static Stage {
        &STAGE_ROSTER[self.current]
    }

    /// Queues the commands that enter and set up the starting stage.
    pub fn start(&mut self, ship: &ShipSnapshot, out: &mut Vec<Command>) {
        self.enter_current(ship, out);
    }

    /// Reacts to the frame's events and queues progression commands.
    pub fn handle(
        &mut self,
        events: &[Event],
        ship: &ShipSnapshot,
        aliens: &[AlienSnapshot],
        boss: Option<&BossSnapshot>,
        out: &mut Vec<Command>,
    ) -> StepReport {
        let mut report = StepReport::default();
        if self.terminal {
            return report;
        }

        let mut ship_was_hit = false;
        for event in events {
            match event {
                Event::ShipDestroyed => {
                    self.terminal = true;
                    report.ship_destroyed = true;
                    info!(
                        stage = self.current_stage().name(),
                        "ship destroyed, campaign over"
                    );
                    return report;
                }
                Event::ShipHit { lives } => {
                    ship_was_hit = true;
                    if *lives > 0 {
                        self.respawn_after_hit(out);
                    }
                }
                Event::BossDefeated { archetype } => {
                    info!(archetype = ?archetype, "boss defeated");
                }
                _ => {}
            }
        }

        if ship_was_hit {
            return report;
        }

        let stage = self.current_stage();
        if stage.kind() == StageKind::End {
            return report;
        }
        if !aliens.is_empty() || boss.is_some() {
            return report;
        }

        report.wave_cleared = true;
        let next = &STAGE_ROSTER[self.current + 1];
        if stage.kind() == StageKind::Regular && next.kind() == StageKind::Regular {
            out.push(Command::IncreaseAlienSpeed);
        }
        self.current = next.index().get();
        if next.kind() == StageKind::End {
            self.terminal = true;
            report.game_won = true;
            info!("terminal stage reached, campaign won");
        } else {
            self.enter_current(ship, out);
        }
        report
    }

    fn respawn_after_hit(&mut self, out: &mut Vec<Command>) {
        match self.current_stage().kind() {
            StageKind::Regular => {
                out.push(Command::CenterShip);
                out.push(Command::SpawnFleet);
            }
            StageKind::Boss(_) => out.push(Command::PrepareShipForBoss),
            StageKind::End => {}
        }
        out.push(Command::PauseSimulation {
            duration: self.config.pause_duration,
        });
    }

    fn enter_current(&mut self, ship: &ShipSnapshot, out: &mut Vec<Command>) {
        let stage = self.current_stage();
        info!(stage = stage.name(), "entering stage");
        out.push(Command::EnterStage {
            stage: stage.index(),
        });
        match stage.kind() {
            StageKind::Regular => {
                out.push(Command::CenterShip);
                self.roll_consumable(ship, out);
                out.push(Command::SpawnFleet);
            }
            StageKind::Boss(archetype) => {
                out.push(Command::PrepareShipForBoss);
                out.push(Command::SpawnBoss { archetype });
            }
            StageKind::End => {}
        }
    }

    /// Rolls the one-in-five pickup chance for a freshly entered wave.
    ///
    /// The pickup position avoids the playfield border and a band around the
    /// recentered ship's column.
    fn roll_consumable(&mut self, ship: &ShipSnapshot, out: &mut Vec<Command>) {
        if self.rng.gen_range(0..CONSUMABLE_ROLL_SIDES) != 0 {
            return;
        }
        let kind = if ship.lives < HEALTH_PICKUP_CAP {
            ConsumableKind::Health
        } else if ship.ammo < AMMO_PICKUP_CAP {
            ConsumableKind::Ammo
        } else {
            return;
        };
        // The ship has just been recentered at the bottom of the playfield.
        let centered = Point::new(
            self.config.screen_width / 2.0,
            self.config.screen_height - self.config.ship_extent.height() / 2.0,
        );
        let x = self.roll_coordinate(self.config.screen_width, centered.x());
        let y = self.roll_coordinate(self.config.screen_height, centered.y());
        out.push(Command::SpawnConsumable {
            kind,
            position: Point::new(x, y),
        });
    }

    fn roll_coordinate(&mut self, span: f32, excluded: f32) -> f32 {
        for _ in 0..16 {
            let candidate = self
                .rng
                .gen_range(PICKUP_BORDER_MARGIN..span - PICKUP_BORDER_MARGIN);
            if (candidate - excluded).abs() > PICKUP_SHIP_EXCLUSION {
                return candidate;
            }
        }
        PICKUP_BORDER_MARGIN
    }
}
