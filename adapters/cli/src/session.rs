use alien_invasion_core::{Command, Config, Event, Stage};
use alien_invasion_system_boss::BossControl;
use alien_invasion_system_collision::{CollisionResolver, Frame};
use alien_invasion_system_director::{StageDirector, StepReport};
use alien_invasion_world::{apply, query, World};
use std::time::Duration;

/// How a finished campaign ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The terminal roster entry was reached.
    Won,
    /// The ship's last life was spent.
    Destroyed,
}

/// Headless driver that wires the world and the gameplay systems together.
///
/// Each step runs one fixed-delta frame in the canonical order: tick the
/// world, let the boss controller react, resolve collisions, then let the
/// director progress the campaign. Events produced by the director's own
/// commands carry over into the next frame so every system observes them.
pub(crate) struct Session {
    world: World,
    boss_control: BossControl,
    collision: CollisionResolver,
    director: StageDirector,
    carryover: Vec<Event>,
    commands: Vec<Command>,
}

impl Session {
    pub(crate) fn new(config: Config, seed: u64, start: &'static Stage) -> Self {
        let mut world = World::new(config.clone());
        let boss_control = BossControl::new(config.clone(), seed);
        let mut director = StageDirector::new(config, seed, start);
        let mut carryover = Vec::new();
        let mut commands = Vec::new();
        let ship = query::ship(&world);
        director.start(&ship, &mut commands);
        for command in commands.drain(..) {
            apply(&mut world, command, &mut carryover);
        }
        Self {
            world,
            boss_control,
            collision: CollisionResolver::new(),
            director,
            carryover,
            commands,
        }
    }

    pub(crate) fn step(&mut self, dt: Duration, autofire: bool) -> Option<Outcome> {
        let mut events = std::mem::take(&mut self.carryover);

        if autofire {
            apply(&mut self.world, Command::FireShipBullet, &mut events);
        }
        apply(&mut self.world, Command::Tick { dt }, &mut events);

        let ship = query::ship(&self.world);
        let boss = query::boss(&self.world);
        self.boss_control
            .handle(&events, boss.as_ref(), &ship, &mut self.commands);
        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut events);
        }

        let ship = query::ship(&self.world);
        let aliens = query::aliens(&self.world);
        let ship_bullets = query::ship_bullets(&self.world);
        let alien_bullets = query::alien_bullets(&self.world);
        let boss_bullets = query::boss_bullets(&self.world);
        let boss = query::boss(&self.world);
        let consumables = query::consumables(&self.world);
        let hazard = query::hazard(&self.world);
        self.collision.handle(
            &Frame {
                stage: query::current_stage(&self.world).kind(),
                ship: &ship,
                aliens: &aliens,
                ship_bullets: &ship_bullets,
                alien_bullets: &alien_bullets,
                boss_bullets: &boss_bullets,
                boss: boss.as_ref(),
                consumables: &consumables,
                hazard: hazard.as_ref(),
            },
            &mut self.commands,
        );
        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut events);
        }

        let ship = query::ship(&self.world);
        let aliens = query::aliens(&self.world);
        let boss = query::boss(&self.world);
        let report = self.director.handle(
            &events,
            &ship,
            &aliens,
            boss.as_ref(),
            &mut self.commands,
        );
        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut self.carryover);
        }

        outcome_of(report)
    }

    pub(crate) fn stage_name(&self) -> &'static str {
        query::current_stage(&self.world).name()
    }

    pub(crate) fn lives(&self) -> u32 {
        query::ship(&self.world).lives
    }
}

fn outcome_of(report: StepReport) -> Option<Outcome> {
    if report.game_won {
        Some(Outcome::Won)
    } else if report.ship_destroyed {
        Some(Outcome::Destroyed)
    } else {
        None
    }
}
