use crate::components::{Ball, Side};
use crate::config::{spawn_position, MatchConfig, SetupError};
use crate::input::InputFrame;
use crate::map::Arena;
use crate::params::Params;
use crate::player::{build_players, MatchSetup, Player};
use glam::Vec2;
use hecs::{Entity, World};

/// The match state machine.
///
/// Owns turn order, kickoff state, the stall clock, and the single active
/// ball slot. Only this type ever spawns or despawns ball entities; every
/// other component observes the ball through the spawn broadcast.
pub struct MatchController {
    config: MatchConfig,
    spawn_center: Vec2,
    home: Player,
    away: Player,
    active_ball: Option<Entity>,
    stall_timer: f32,
    turn: Side,
    kicked_off: bool,
}

impl MatchController {
    /// Assemble both rosters and reset match state. Runs exactly once;
    /// the opening ball is spawned by `start`.
    pub fn new(config: MatchConfig, arena: &Arena, setup: MatchSetup) -> Result<Self, SetupError> {
        let (home, away) = build_players(&config, setup)?;

        Ok(Self {
            config,
            spawn_center: arena.center(),
            home,
            away,
            active_ball: None,
            stall_timer: 0.0,
            turn: Side::Home,
            kicked_off: false,
        })
    }

    pub fn active_ball(&self) -> Option<Entity> {
        self.active_ball
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn kicked_off(&self) -> bool {
        self.kicked_off
    }

    pub fn stall_timer(&self) -> f32 {
        self.stall_timer
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Put the opening ball on the table; the first serve belongs to the
    /// home side.
    pub fn start(&mut self, world: &mut World) {
        log::info!("match start, opening ball for {:?}", self.turn);
        self.spawn_ball(world, self.turn);
    }

    /// Run every input handler on both sides for this frame.
    pub fn drive_input(&mut self, world: &mut World, frame: &InputFrame) {
        self.home.drive(world, frame);
        self.away.drive(world, frame);
    }

    /// Replace the active ball with a fresh one for `side`.
    ///
    /// The old ball is despawned before the new one exists, so at most one
    /// ball is ever live and a touch report from the old instance has
    /// nothing left to land on. Every input handler then receives the new
    /// entity before control returns to the caller.
    pub fn spawn_ball(&mut self, world: &mut World, side: Side) {
        if let Some(old) = self.active_ball.take() {
            let _ = world.despawn(old);
        }

        let pos = spawn_position(self.spawn_center, self.config.ball_spawn_offset, side);
        let ball = world.spawn((Ball::at_rest(pos),));

        self.active_ball = Some(ball);
        self.kicked_off = false;
        self.stall_timer = 0.0;

        log::debug!("spawned ball {:?} at {} for {:?}", ball, pos, side);

        self.home.broadcast_ball(ball);
        self.away.broadcast_ball(ball);
    }

    /// Stall watchdog, called once per frame.
    ///
    /// Armed only between kickoff and the next spawn. A ball that stays
    /// below the stall speed past the timeout goes back to the side whose
    /// turn it is; no score changes.
    pub fn tick(&mut self, world: &mut World, dt: f32) {
        let ball = match self.active_ball {
            Some(ball) => ball,
            None => return,
        };

        if !self.kicked_off {
            return;
        }

        let speed = match world.get::<&Ball>(ball) {
            Ok(ball) => ball.speed(),
            Err(_) => return,
        };

        if speed > Params::STALL_SPEED {
            self.stall_timer = 0.0;
            return;
        }

        self.stall_timer += dt;

        if self.stall_timer > Params::STALL_TIMEOUT {
            log::info!("ball stalled, handing it back to {:?}", self.turn);
            self.spawn_ball(world, self.turn);
        }
    }

    /// A ball entered the goal mouth on `entered`'s side: the opposite
    /// player scores, and the conceding side restarts the point.
    pub fn on_goal(&mut self, world: &mut World, entered: Side) {
        match entered {
            Side::Home => self.away.add_score(),
            Side::Away => self.home.add_score(),
        }

        self.turn = entered;

        log::info!(
            "goal against {:?}, score {}-{}",
            entered,
            self.home.score(),
            self.away.score()
        );

        self.spawn_ball(world, self.turn);
    }

    /// The active ball was touched. The first touch kicks the point off
    /// and arms stall detection; every touch restarts the stall clock.
    /// Touch reports come from the host's collision layer.
    pub fn on_ball_touched(&mut self) {
        if !self.kicked_off {
            self.kicked_off = true;
        }

        self.stall_timer = 0.0;
    }
}
