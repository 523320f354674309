//! Deterministic replays driving the full simulation stack for many frames.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    time::Duration,
};

use alien_invasion_core::{stage_by_name, Command, Config, Event};
use alien_invasion_system_boss::BossControl;
use alien_invasion_system_collision::{CollisionResolver, Frame};
use alien_invasion_system_director::StageDirector;
use alien_invasion_world::{self as world, query, World};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn opening_wave_replay_is_deterministic() {
    let first = replay("1_1", 0xd1ce, 2_000);
    let second = replay("1_1", 0xd1ce, 2_000);

    assert_eq!(
        first.fingerprint(),
        second.fingerprint(),
        "replay diverged between runs"
    );
    assert_eq!(first.events, second.events);

    assert!(first
        .events
        .iter()
        .any(|event| matches!(event, Event::FleetSpawned { count: 9 })));
    assert!(first
        .events
        .iter()
        .any(|event| matches!(event, Event::ShipBulletFired { .. })));
    assert!(
        first
            .events
            .iter()
            .any(|event| matches!(event, Event::AlienVolleyFired { .. })),
        "the fleet never returned fire over 2000 frames"
    );
}

#[test]
fn different_seeds_produce_different_campaigns() {
    let first = replay("green_boss", 1, 1_500);
    let second = replay("green_boss", 2, 1_500);

    assert_ne!(
        first.boss_bullets, second.boss_bullets,
        "seeds 1 and 2 drew identical volley headings"
    );
    assert_ne!(
        first.fingerprint(),
        second.fingerprint(),
        "seeds 1 and 2 produced identical campaigns"
    );
}

#[test]
fn boss_stage_replay_spawns_and_fires() {
    let outcome = replay("green_boss", 0xb055, 3_000);
    let rerun = replay("green_boss", 0xb055, 3_000);

    assert_eq!(outcome.events, rerun.events);
    assert_eq!(outcome.fingerprint(), rerun.fingerprint());
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::BossSpawned { .. })));
    assert!(
        outcome
            .events
            .iter()
            .any(|event| matches!(event, Event::BossVolleyFired { count: 4 })),
        "the green boss never fired a burst over 3000 frames"
    );
}

struct ReplayOutcome {
    events: Vec<Event>,
    /// Heading and position of every live boss bullet when the replay ended.
    /// Random volley headings never appear in the event log, so the surviving
    /// pool is what ties the fingerprint to the seed.
    boss_bullets: Vec<(f32, f32, f32)>,
    final_stage: &'static str,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        format!("{:?} {:?} {}", self.events, self.boss_bullets, self.final_stage)
            .hash(&mut hasher);
        hasher.finish()
    }
}

fn replay(start: &str, seed: u64, frames: u64) -> ReplayOutcome {
    let stage = stage_by_name(start).expect("stage exists");
    let config = Config::default();
    let mut sim = World::new(config.clone());
    let mut boss_control = BossControl::new(config.clone(), seed);
    let mut collision = CollisionResolver::new();
    let mut director = StageDirector::new(config, seed, stage);

    let mut log = Vec::new();
    let mut carryover = Vec::new();
    let mut commands = Vec::new();

    let ship = query::ship(&sim);
    director.start(&ship, &mut commands);
    drain(&mut sim, &mut commands, &mut carryover);

    for _ in 0..frames {
        let mut events = std::mem::take(&mut carryover);

        world::apply(&mut sim, Command::FireShipBullet, &mut events);
        world::apply(&mut sim, Command::Tick { dt: FRAME }, &mut events);

        let ship = query::ship(&sim);
        let boss = query::boss(&sim);
        boss_control.handle(&events, boss.as_ref(), &ship, &mut commands);
        drain(&mut sim, &mut commands, &mut events);

        let ship = query::ship(&sim);
        let aliens = query::aliens(&sim);
        let ship_bullets = query::ship_bullets(&sim);
        let alien_bullets = query::alien_bullets(&sim);
        let boss_bullets = query::boss_bullets(&sim);
        let boss = query::boss(&sim);
        let consumables = query::consumables(&sim);
        let hazard = query::hazard(&sim);
        let frame = Frame {
            stage: query::current_stage(&sim).kind(),
            ship: &ship,
            aliens: &aliens,
            ship_bullets: &ship_bullets,
            alien_bullets: &alien_bullets,
            boss_bullets: &boss_bullets,
            boss: boss.as_ref(),
            consumables: &consumables,
            hazard: hazard.as_ref(),
        };
        collision.handle(&frame, &mut commands);
        drain(&mut sim, &mut commands, &mut events);

        let ship = query::ship(&sim);
        let aliens = query::aliens(&sim);
        let boss = query::boss(&sim);
        let report = director.handle(&events, &ship, &aliens, boss.as_ref(), &mut commands);
        drain(&mut sim, &mut commands, &mut carryover);

        log.extend(events);
        if report.ship_destroyed || report.game_won {
            break;
        }
    }

    log.extend(carryover);
    let boss_bullets = query::boss_bullets(&sim)
        .iter()
        .map(|bullet| (bullet.heading, bullet.position.x(), bullet.position.y()))
        .collect();
    ReplayOutcome {
        events: log,
        boss_bullets,
        final_stage: query::current_stage(&sim).name(),
    }
}

fn drain(sim: &mut World, commands: &mut Vec<Command>, events: &mut Vec<Event>) {
    for command in commands.drain(..) {
        world::apply(sim, command, events);
    }
}
