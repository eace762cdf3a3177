use crate::components::Side;
use crate::config::{Color, MatchConfig, SetupError};
use crate::input::{CpuInputHandler, InputFrame, InputHandler};
use hecs::{Entity, World};

/// Sink for score changes; presentation decides what to do with them
pub trait ScoreDisplay {
    fn on_score(&mut self, total: u32);
}

/// Pre-resolved collaborator handles handed over at match assembly.
///
/// Home handlers arrive ready-made (one per control area); away handlers
/// are synthesized here, one CPU handler per away paddle.
pub struct MatchSetup {
    pub home_paddles: Vec<Entity>,
    pub away_paddles: Vec<Entity>,
    pub home_handlers: Vec<Box<dyn InputHandler>>,
    pub home_display: Box<dyn ScoreDisplay>,
    pub away_display: Box<dyn ScoreDisplay>,
}

/// One competitor: score counter, paddle roster, input handlers, display
pub struct Player {
    side: Side,
    color: Color,
    score: u32,
    paddles: Vec<Entity>,
    handlers: Vec<Box<dyn InputHandler>>,
    display: Box<dyn ScoreDisplay>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("side", &self.side)
            .field("color", &self.color)
            .field("score", &self.score)
            .field("paddles", &self.paddles)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Player {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paddles(&self) -> &[Entity] {
        &self.paddles
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Award one conceded goal and forward the new total to the display.
    pub fn add_score(&mut self) {
        self.score += 1;
        self.display.on_score(self.score);
    }

    /// Run every handler for this frame.
    pub fn drive(&mut self, world: &mut World, frame: &InputFrame) {
        for handler in &mut self.handlers {
            handler.drive(world, frame);
        }
    }

    pub(crate) fn broadcast_ball(&mut self, ball: Entity) {
        for handler in &mut self.handlers {
            handler.update_ball(ball);
        }
    }
}

/// Build both rosters. One settings profile, resolved from the configured
/// mode, goes to every CPU handler; an unresolvable mode or an empty
/// roster fails loudly before the first ball exists.
pub fn build_players(
    config: &MatchConfig,
    setup: MatchSetup,
) -> Result<(Player, Player), SetupError> {
    if setup.home_paddles.is_empty() {
        return Err(SetupError::EmptyRoster(Side::Home));
    }
    if setup.away_paddles.is_empty() {
        return Err(SetupError::EmptyRoster(Side::Away));
    }
    if setup.home_handlers.is_empty() {
        return Err(SetupError::NoHomeHandlers);
    }

    let settings = config
        .cpu_profiles
        .settings_for(config.cpu_mode)
        .ok_or(SetupError::UnknownCpuMode(config.cpu_mode))?;

    let cpu_handlers: Vec<Box<dyn InputHandler>> = setup
        .away_paddles
        .iter()
        .map(|&paddle| Box::new(CpuInputHandler::new(paddle, settings)) as Box<dyn InputHandler>)
        .collect();

    log::debug!(
        "assembled rosters: {} home handlers, {} cpu handlers in {:?} mode",
        setup.home_handlers.len(),
        cpu_handlers.len(),
        config.cpu_mode
    );

    let home = Player {
        side: Side::Home,
        color: config.home_color,
        score: 0,
        paddles: setup.home_paddles,
        handlers: setup.home_handlers,
        display: setup.home_display,
    };

    let away = Player {
        side: Side::Away,
        color: config.away_color,
        score: 0,
        paddles: setup.away_paddles,
        handlers: cpu_handlers,
        display: setup.away_display,
    };

    Ok((home, away))
}
