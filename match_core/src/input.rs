use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::CpuSettings;
use crate::map::Aabb;
use glam::Vec2;
use hecs::{Entity, World};

// Pointer distance under which a human-controlled paddle stops chasing
const POINTER_DEADZONE: f32 = 0.1;

/// One frame of pointer samples from the host, in table coordinates
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub pointers: Vec<Vec2>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A source of paddle control signals.
///
/// Handlers hold a reference to the active ball; the match controller
/// re-broadcasts it on every spawn, so a handler never steers toward a
/// ball that no longer exists.
pub trait InputHandler {
    /// Called once per spawn with the freshly created ball entity.
    fn update_ball(&mut self, ball: Entity);

    /// Write this frame's slide intent for the paddle the handler drives.
    fn drive(&mut self, world: &mut World, frame: &InputFrame);
}

/// Human control: a screen region mapped onto one home paddle
pub struct HumanInputHandler {
    area: Aabb,
    paddle: Entity,
}

impl HumanInputHandler {
    pub fn new(area: Aabb, paddle: Entity) -> Self {
        Self { area, paddle }
    }
}

impl InputHandler for HumanInputHandler {
    fn update_ball(&mut self, _ball: Entity) {
        // Humans watch the table; nothing to rebind.
    }

    fn drive(&mut self, world: &mut World, frame: &InputFrame) {
        let paddle_y = match world.get::<&Paddle>(self.paddle) {
            Ok(paddle) => paddle.y,
            Err(_) => return,
        };

        let target = frame
            .pointers
            .iter()
            .find(|p| self.area.contains(**p))
            .copied();

        let dir = match target {
            Some(pointer) => {
                let dy = pointer.y - paddle_y;
                if dy.abs() < POINTER_DEADZONE {
                    0.0
                } else {
                    dy.signum()
                }
            }
            None => 0.0,
        };

        if let Ok(mut intent) = world.get::<&mut PaddleIntent>(self.paddle) {
            intent.dir = dir;
        }
    }
}

/// CPU control: slides one away paddle toward the active ball
pub struct CpuInputHandler {
    paddle: Entity,
    ball: Option<Entity>,
    settings: CpuSettings,
}

impl CpuInputHandler {
    /// The handler starts blind; the first ball reference arrives through
    /// the spawn broadcast.
    pub fn new(paddle: Entity, settings: CpuSettings) -> Self {
        Self {
            paddle,
            ball: None,
            settings,
        }
    }

    pub fn settings(&self) -> CpuSettings {
        self.settings
    }
}

impl InputHandler for CpuInputHandler {
    fn update_ball(&mut self, ball: Entity) {
        self.ball = Some(ball);
    }

    fn drive(&mut self, world: &mut World, _frame: &InputFrame) {
        let paddle_y = match world.get::<&Paddle>(self.paddle) {
            Ok(paddle) => paddle.y,
            Err(_) => return,
        };

        let target_y = self
            .ball
            .and_then(|ball| world.get::<&Ball>(ball).ok().map(|b| b.pos.y));

        let dir = match target_y {
            Some(y) if (y - paddle_y).abs() > self.settings.deadzone => {
                (y - paddle_y).signum() * self.settings.track_rate
            }
            _ => 0.0,
        };

        if let Ok(mut intent) = world.get::<&mut PaddleIntent>(self.paddle) {
            intent.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use float_cmp::approx_eq;

    fn spawn_paddle(world: &mut World, side: Side, y: f32) -> Entity {
        world.spawn((Paddle::new(side, 8.0, y), PaddleIntent::new()))
    }

    fn intent_of(world: &World, paddle: Entity) -> f32 {
        world.get::<&PaddleIntent>(paddle).unwrap().dir
    }

    #[test]
    fn test_human_handler_chases_pointer_in_area() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world, Side::Home, 10.0);
        let area = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(16.0, 24.0));
        let mut handler = HumanInputHandler::new(area, paddle);

        let frame = InputFrame {
            pointers: vec![Vec2::new(4.0, 18.0)],
        };
        handler.drive(&mut world, &frame);
        assert_eq!(intent_of(&world, paddle), 1.0, "pointer above, slide up");

        let frame = InputFrame {
            pointers: vec![Vec2::new(4.0, 2.0)],
        };
        handler.drive(&mut world, &frame);
        assert_eq!(intent_of(&world, paddle), -1.0, "pointer below, slide down");
    }

    #[test]
    fn test_human_handler_ignores_pointer_outside_area() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world, Side::Home, 10.0);
        let area = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(16.0, 24.0));
        let mut handler = HumanInputHandler::new(area, paddle);

        let frame = InputFrame {
            pointers: vec![Vec2::new(20.0, 18.0)], // other half of the table
        };
        handler.drive(&mut world, &frame);
        assert_eq!(intent_of(&world, paddle), 0.0);
    }

    #[test]
    fn test_cpu_handler_idles_without_a_ball() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world, Side::Away, 10.0);
        let settings = CpuSettings {
            track_rate: 1.0,
            deadzone: 0.2,
        };
        let mut handler = CpuInputHandler::new(paddle, settings);

        handler.drive(&mut world, &InputFrame::new());
        assert_eq!(intent_of(&world, paddle), 0.0);
    }

    #[test]
    fn test_cpu_handler_tracks_ball_at_its_rate() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world, Side::Away, 10.0);
        let ball = world.spawn((Ball::at_rest(Vec2::new(16.0, 15.0)),));
        let settings = CpuSettings {
            track_rate: 0.4,
            deadzone: 0.2,
        };
        let mut handler = CpuInputHandler::new(paddle, settings);
        assert_eq!(handler.settings(), settings, "settings applied at build");

        handler.update_ball(ball);
        handler.drive(&mut world, &InputFrame::new());

        let dir = intent_of(&world, paddle);
        assert!(approx_eq!(f32, dir, 0.4, ulps = 2), "got {dir}");
    }

    #[test]
    fn test_cpu_handler_rests_inside_deadzone() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world, Side::Away, 10.0);
        let ball = world.spawn((Ball::at_rest(Vec2::new(16.0, 10.5)),));
        let settings = CpuSettings {
            track_rate: 1.0,
            deadzone: 1.0,
        };
        let mut handler = CpuInputHandler::new(paddle, settings);

        handler.update_ball(ball);
        handler.drive(&mut world, &InputFrame::new());
        assert_eq!(intent_of(&world, paddle), 0.0);
    }
}
