#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that drives boss movement and firing.
//!
//! The controller consumes world events plus the boss and ship snapshots and
//! answers with `MoveBoss` and `FireBossVolley` commands. All archetype state
//! lives here: the green cadence step, the red region walk, and the blue
//! sweep angle. Randomness comes from an injected seed, so encounters replay
//! identically.

use std::time::Duration;

use alien_invasion_core::{
    BossArchetype, BossBulletSpawn, BossSnapshot, Command, Config, Event, Point, ShipSnapshot,
};
use alien_invasion_system_trajectory as trajectory;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Aim offsets in degrees applied to the red boss's raw aim angle, before
/// quadrant folding.
const RED_AIM_OFFSETS: [f32; 5] = [0.0, 15.0, 30.0, -15.0, -30.0];

/// Heading offsets in degrees fanned around the blue boss's sweep angle.
const BLUE_FAN_OFFSETS: [f32; 4] = [0.0, 90.0, 180.0, 270.0];

/// Degrees the blue sweep advances per volley.
const BLUE_SWEEP_STEP: f32 = 15.0;

/// Sweep bound beyond which the blue boss reverses to counter-clockwise.
const BLUE_SWEEP_UPPER: f32 = 400.0;

/// Nine-region grid the red boss walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Region {
    Center,
    MidTop,
    MidLeft,
    MidBottom,
    MidRight,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug)]
enum Encounter {
    Green { interval: Duration },
    Red { region: Region, slot: u8 },
    Blue { sweep: f32, clockwise: bool },
}

/// Boss controller system that queues movement and volley commands.
#[derive(Debug)]
pub struct BossControl {
    config: Config,
    rng: ChaCha8Rng,
    fire_accumulator: Duration,
    encounter: Option<Encounter>,
}

impl BossControl {
    /// Creates a new controller with the provided tuning and RNG seed.
    #[must_use]
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            fire_accumulator: Duration::ZERO,
            encounter: None,
        }
    }

    /// Reacts to the frame's events and queues boss commands.
    pub fn handle(
        &mut self,
        events: &[Event],
        boss: Option<&BossSnapshot>,
        ship: &ShipSnapshot,
        out: &mut Vec<Command>,
    ) {
        let mut advanced = Duration::ZERO;
        for event in events {
            match event {
                Event::BossSpawned { archetype } => self.begin_encounter(*archetype),
                Event::BossDefeated { .. } | Event::BossCleared => self.encounter = None,
                Event::TimeAdvanced { dt } => advanced += *dt,
                _ => {}
            }
        }
        if advanced.is_zero() {
            return;
        }
        let Some(boss) = boss else {
            return;
        };
        if self.encounter.is_none() {
            return;
        }

        if matches!(self.encounter, Some(Encounter::Red { .. })) {
            self.walk_red(boss, out);
        }

        self.fire_accumulator += advanced;
        self.fire_volley(boss, ship, out);
    }

    fn begin_encounter(&mut self, archetype: BossArchetype) {
        self.fire_accumulator = Duration::ZERO;
        self.encounter = Some(match archetype {
            BossArchetype::Green => Encounter::Green {
                interval: self.config.green_boss_initial_interval,
            },
            BossArchetype::Red => Encounter::Red {
                region: Region::Center,
                slot: self.roll_center_slot(),
            },
            BossArchetype::Blue => Encounter::Blue {
                sweep: 0.0,
                clockwise: true,
            },
        });
    }

    /// Direction draw leaving the center: up, left, down, or right.
    fn roll_center_slot(&mut self) -> u8 {
        self.rng.gen_range(1..=4)
    }

    /// Direction draw leaving a mid-edge region.
    fn roll_edge_slot(&mut self) -> u8 {
        self.rng.gen_range(1..=3)
    }

    /// Direction draw leaving a corner region.
    fn roll_corner_slot(&mut self) -> u8 {
        self.rng.gen_range(1..=2)
    }

    fn fire_volley(&mut self, boss: &BossSnapshot, ship: &ShipSnapshot, out: &mut Vec<Command>) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        match encounter {
            Encounter::Green { interval } => {
                if self.fire_accumulator <= *interval {
                    return;
                }
                let mut volley = Vec::with_capacity(4);
                for low in [0, 90, 180, 270] {
                    let heading = self.rng.gen_range(low..low + 180) as f32;
                    volley.push(BossBulletSpawn {
                        heading,
                        bouncing: true,
                    });
                }
                *interval = self.config.green_boss_steady_interval;
                self.fire_accumulator = Duration::ZERO;
                out.push(Command::FireBossVolley { volley });
            }
            Encounter::Red { .. } => {
                if self.fire_accumulator <= self.config.red_boss_volley_interval {
                    return;
                }
                let quadrant = trajectory::classify(boss.position, ship.position);
                let raw = trajectory::raw_angle(boss.position, ship.position);
                let volley = RED_AIM_OFFSETS
                    .iter()
                    .map(|offset| BossBulletSpawn {
                        heading: trajectory::fold(quadrant, raw + offset),
                        bouncing: false,
                    })
                    .collect();
                self.fire_accumulator = Duration::ZERO;
                out.push(Command::FireBossVolley { volley });
            }
            Encounter::Blue { sweep, clockwise } => {
                if self.fire_accumulator <= self.config.blue_boss_volley_interval {
                    return;
                }
                let volley = BLUE_FAN_OFFSETS
                    .iter()
                    .map(|offset| BossBulletSpawn {
                        heading: *sweep + offset,
                        bouncing: false,
                    })
                    .collect();
                if *clockwise {
                    *sweep += BLUE_SWEEP_STEP;
                    if *sweep > BLUE_SWEEP_UPPER {
                        *clockwise = false;
                    }
                } else {
                    *sweep -= BLUE_SWEEP_STEP;
                    if *sweep < 0.0 {
                        *clockwise = true;
                    }
                }
                self.fire_accumulator = Duration::ZERO;
                out.push(Command::FireBossVolley { volley });
            }
        }
    }

    /// One step of the red boss's region walk.
    ///
    /// The transition table is preserved verbatim from the original
    /// encounter, including the draws that can hold the boss trading places
    /// between the center and one mid-edge region for several legs.
    fn walk_red(&mut self, boss: &BossSnapshot, out: &mut Vec<Command>) {
        let field = self.config.playfield();
        let margin = self.config.boss_margin;
        let speed = self.config.red_boss_speed;
        let bounds = boss.bounds;
        let center = field.center();
        let mut x = boss.position.x();
        let mut y = boss.position.y();
        let mut moved = false;

        let (region, slot) = match &self.encounter {
            Some(Encounter::Red { region, slot }) => (*region, *slot),
            _ => return,
        };

        let mut next_region = region;
        let mut next_slot = NextSlot::Keep;

        match region {
            Region::Center => match slot {
                1 => {
                    if bounds.top() > field.top() + margin {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidTop;
                        next_slot = NextSlot::Edge;
                    }
                }
                2 => {
                    if bounds.left() > field.left() + margin {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidLeft;
                        next_slot = NextSlot::Edge;
                    }
                }
                3 => {
                    if bounds.bottom() < field.bottom() - margin {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidBottom;
                        next_slot = NextSlot::Edge;
                    }
                }
                _ => {
                    if bounds.right() < field.right() - margin {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidRight;
                        next_slot = NextSlot::Edge;
                    }
                }
            },
            Region::MidTop => match slot {
                1 => {
                    if bounds.top() < center.y() {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::Center;
                        next_slot = NextSlot::Center;
                    }
                }
                2 => {
                    if bounds.left() > field.left() + margin {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::TopLeft;
                        next_slot = NextSlot::Corner;
                    }
                }
                _ => {
                    if bounds.right() < field.right() - margin {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::TopRight;
                        next_slot = NextSlot::Corner;
                    }
                }
            },
            Region::MidLeft => match slot {
                1 => {
                    if bounds.left() < center.x() {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::Center;
                        next_slot = NextSlot::Center;
                    }
                }
                2 => {
                    if bounds.top() > field.top() + margin {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::TopLeft;
                        next_slot = NextSlot::Corner;
                    }
                }
                _ => {
                    if bounds.bottom() < field.bottom() - margin {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::BottomLeft;
                        next_slot = NextSlot::Corner;
                    }
                }
            },
            Region::MidBottom => match slot {
                1 => {
                    if bounds.bottom() > center.y() {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::Center;
                        next_slot = NextSlot::Center;
                    }
                }
                2 => {
                    if bounds.left() > field.left() + margin {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::BottomLeft;
                        next_slot = NextSlot::Corner;
                    }
                }
                _ => {
                    if bounds.right() < field.right() - margin {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::BottomRight;
                        next_slot = NextSlot::Corner;
                    }
                }
            },
            Region::MidRight => match slot {
                1 => {
                    if bounds.right() > center.x() {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::Center;
                        next_slot = NextSlot::Center;
                    }
                }
                2 => {
                    if bounds.top() > field.top() + margin {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::TopRight;
                        next_slot = NextSlot::Corner;
                    }
                }
                _ => {
                    if bounds.bottom() < field.bottom() - margin {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::BottomRight;
                        next_slot = NextSlot::Corner;
                    }
                }
            },
            Region::TopLeft => match slot {
                1 => {
                    if x < center.x() {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidTop;
                        next_slot = NextSlot::Edge;
                    }
                }
                _ => {
                    if y < center.y() {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidLeft;
                        next_slot = NextSlot::Edge;
                    }
                }
            },
            Region::BottomLeft => match slot {
                1 => {
                    if x < center.x() {
                        x += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidBottom;
                        next_slot = NextSlot::Edge;
                    }
                }
                _ => {
                    if y > center.y() {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidLeft;
                        next_slot = NextSlot::Edge;
                    }
                }
            },
            Region::BottomRight => match slot {
                1 => {
                    if x > center.x() {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidBottom;
                        next_slot = NextSlot::Edge;
                    }
                }
                _ => {
                    if y > center.y() {
                        y -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidRight;
                        next_slot = NextSlot::Edge;
                    }
                }
            },
            Region::TopRight => match slot {
                1 => {
                    if x > center.x() {
                        x -= speed;
                        moved = true;
                    } else {
                        next_region = Region::MidTop;
                        next_slot = NextSlot::Edge;
                    }
                }
                _ => {
                    if y < center.y() {
                        y += speed;
                        moved = true;
                    } else {
                        next_region = Region::MidRight;
                        next_slot = NextSlot::Edge;
                    }
                }
            },
        }

        let resolved_slot = match next_slot {
            NextSlot::Keep => slot,
            NextSlot::Center => self.roll_center_slot(),
            NextSlot::Edge => self.roll_edge_slot(),
            NextSlot::Corner => self.roll_corner_slot(),
        };
        self.encounter = Some(Encounter::Red {
            region: next_region,
            slot: resolved_slot,
        });

        if moved {
            out.push(Command::MoveBoss {
                position: Point::new(x, y),
            });
        }
    }
}

enum NextSlot {
    Keep,
    Center,
    Edge,
    Corner,
}

#[cfg(test)]
mod tests {
    use super::BossControl;
    use alien_invasion_core::{
        BossArchetype, BossSnapshot, Command, Config, Event, Facing, Point, Rect,
        ShipSnapshot,
    };
    use alien_invasion_system_trajectory as trajectory;
    use std::time::Duration;

    fn ship_at(position: Point) -> ShipSnapshot {
        let config = Config::default();
        ShipSnapshot {
            position,
            bounds: Rect::from_center(position, config.ship_extent),
            shield_bounds: None,
            facing: Facing::Up,
            lives: 3,
            ammo: 1,
            shields: 1,
        }
    }

    fn boss_at(archetype: BossArchetype, position: Point) -> BossSnapshot {
        let config = Config::default();
        BossSnapshot {
            archetype,
            position,
            bounds: Rect::from_center(position, config.boss_extent),
            health: archetype.starting_health(),
            max_health: archetype.starting_health(),
            shield: None,
        }
    }

    fn spawn_events(archetype: BossArchetype, millis: u64) -> Vec<Event> {
        vec![
            Event::BossSpawned { archetype },
            Event::TimeAdvanced {
                dt: Duration::from_millis(millis),
            },
        ]
    }

    fn advance(millis: u64) -> Vec<Event> {
        vec![Event::TimeAdvanced {
            dt: Duration::from_millis(millis),
        }]
    }

    fn volleys(out: &[Command]) -> Vec<&Command> {
        out.iter()
            .filter(|command| matches!(command, Command::FireBossVolley { .. }))
            .collect()
    }

    #[test]
    fn green_cadence_steps_up_after_the_first_burst() {
        let mut system = BossControl::new(Config::default(), 9);
        let boss = boss_at(BossArchetype::Green, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(600.0, 772.0));
        let mut out = Vec::new();

        system.handle(&spawn_events(BossArchetype::Green, 320), Some(&boss), &ship, &mut out);
        assert_eq!(volleys(&out).len(), 1);

        // The cadence is now 1650 ms; another 320 ms stays quiet.
        system.handle(&advance(320), Some(&boss), &ship, &mut out);
        assert_eq!(volleys(&out).len(), 1);

        system.handle(&advance(1400), Some(&boss), &ship, &mut out);
        assert_eq!(volleys(&out).len(), 2);
    }

    #[test]
    fn green_bursts_cover_four_overlapping_ranges() {
        let mut system = BossControl::new(Config::default(), 11);
        let boss = boss_at(BossArchetype::Green, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(600.0, 772.0));
        let mut out = Vec::new();

        system.handle(&spawn_events(BossArchetype::Green, 320), Some(&boss), &ship, &mut out);
        let Some(Command::FireBossVolley { volley }) = out.first() else {
            panic!("expected a volley");
        };
        assert_eq!(volley.len(), 4);
        for (spawn, low) in volley.iter().zip([0.0_f32, 90.0, 180.0, 270.0]) {
            assert!(spawn.bouncing);
            assert!(spawn.heading >= low && spawn.heading < low + 180.0);
            assert_eq!(spawn.heading.fract(), 0.0);
        }
    }

    #[test]
    fn red_volleys_fan_around_the_raw_aim_angle() {
        let mut system = BossControl::new(Config::default(), 3);
        let boss = boss_at(BossArchetype::Red, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(300.0, 700.0));
        let mut out = Vec::new();

        system.handle(&spawn_events(BossArchetype::Red, 1400), Some(&boss), &ship, &mut out);
        let Some(Command::FireBossVolley { volley }) = volleys(&out).first() else {
            panic!("expected a volley");
        };
        assert_eq!(volley.len(), 5);

        let quadrant = trajectory::classify(boss.position, ship.position);
        let raw = trajectory::raw_angle(boss.position, ship.position);
        for (spawn, offset) in volley.iter().zip([0.0_f32, 15.0, 30.0, -15.0, -30.0]) {
            assert!(!spawn.bouncing);
            assert!((spawn.heading - trajectory::fold(quadrant, raw + offset)).abs() < 1e-4);
        }
    }

    #[test]
    fn blue_sweep_oscillates_between_its_bounds() {
        let mut system = BossControl::new(Config::default(), 5);
        let boss = boss_at(BossArchetype::Blue, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(600.0, 772.0));
        let mut out = Vec::new();

        system.handle(&spawn_events(BossArchetype::Blue, 320), Some(&boss), &ship, &mut out);
        let mut base_headings = Vec::new();
        for _ in 0..60 {
            system.handle(&advance(320), Some(&boss), &ship, &mut out);
        }
        for command in volleys(&out) {
            let Command::FireBossVolley { volley } = command else {
                unreachable!();
            };
            assert_eq!(volley.len(), 4);
            assert!((volley[1].heading - volley[0].heading - 90.0).abs() < 1e-4);
            base_headings.push(volley[0].heading);
        }

        // 15 degree steps up to the 400 degree bound, then back down.
        assert_eq!(base_headings[0], 0.0);
        assert_eq!(base_headings[1], 15.0);
        let peak_index = base_headings
            .iter()
            .position(|heading| *heading == 405.0)
            .expect("sweep reaches its upper bound");
        assert_eq!(base_headings[peak_index + 1], 390.0);
        assert_eq!(base_headings[peak_index + 2], 375.0);
    }

    #[test]
    fn red_walk_respects_the_edge_margins() {
        let mut config = Config::default();
        config.red_boss_speed = 6.0;
        let margin = config.boss_margin;
        let field = config.playfield();
        let speed = config.red_boss_speed;
        let mut system = BossControl::new(config.clone(), 21);
        let ship = ship_at(Point::new(600.0, 772.0));

        let mut boss = boss_at(BossArchetype::Red, Point::new(600.0, 400.0));
        let mut out = Vec::new();
        system.handle(&spawn_events(BossArchetype::Red, 16), Some(&boss), &ship, &mut out);
        for _ in 0..4000 {
            out.clear();
            system.handle(&advance(16), Some(&boss), &ship, &mut out);
            for command in &out {
                if let Command::MoveBoss { position } = command {
                    boss = boss_at(BossArchetype::Red, *position);
                }
            }
            assert!(boss.bounds.top() >= field.top() + margin - speed);
            assert!(boss.bounds.bottom() <= field.bottom() - margin + speed);
            assert!(boss.bounds.left() >= field.left() + margin - speed);
            assert!(boss.bounds.right() <= field.right() - margin + speed);
        }
    }

    #[test]
    fn red_walk_replays_identically_per_seed() {
        let run = |seed: u64| {
            let mut config = Config::default();
            config.red_boss_speed = 6.0;
            let mut system = BossControl::new(config, seed);
            let ship = ship_at(Point::new(600.0, 772.0));
            let mut boss = boss_at(BossArchetype::Red, Point::new(600.0, 400.0));
            let mut trail = Vec::new();
            let mut out = Vec::new();
            system.handle(&spawn_events(BossArchetype::Red, 16), Some(&boss), &ship, &mut out);
            for _ in 0..600 {
                out.clear();
                system.handle(&advance(16), Some(&boss), &ship, &mut out);
                for command in &out {
                    if let Command::MoveBoss { position } = command {
                        boss = boss_at(BossArchetype::Red, *position);
                        trail.push((position.x(), position.y()));
                    }
                }
            }
            trail
        };
        assert_eq!(run(77), run(77));
        assert_ne!(run(77), run(78));
    }

    #[test]
    fn paused_frames_freeze_the_cadence() {
        let mut system = BossControl::new(Config::default(), 13);
        let boss = boss_at(BossArchetype::Blue, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(600.0, 772.0));
        let mut out = Vec::new();

        system.handle(
            &vec![
                Event::BossSpawned {
                    archetype: BossArchetype::Blue,
                },
                Event::TimeAdvanced { dt: Duration::ZERO },
            ],
            Some(&boss),
            &ship,
            &mut out,
        );
        for _ in 0..100 {
            system.handle(&advance(0), Some(&boss), &ship, &mut out);
        }
        assert!(out.is_empty());
    }

    #[test]
    fn the_controller_stops_after_a_defeat() {
        let mut system = BossControl::new(Config::default(), 17);
        let boss = boss_at(BossArchetype::Green, Point::new(600.0, 400.0));
        let ship = ship_at(Point::new(600.0, 772.0));
        let mut out = Vec::new();

        system.handle(&spawn_events(BossArchetype::Green, 320), Some(&boss), &ship, &mut out);
        assert_eq!(volleys(&out).len(), 1);
        out.clear();
        system.handle(
            &vec![
                Event::BossDefeated {
                    archetype: BossArchetype::Green,
                },
                Event::TimeAdvanced {
                    dt: Duration::from_millis(2000),
                },
            ],
            Some(&boss),
            &ship,
            &mut out,
        );
        assert!(out.is_empty());
    }
}
