//! Collaborator shims at the physics boundary.
//!
//! Real ball simulation and trigger detection live with the host engine;
//! these minimal stand-ins let a headless driver (and the test suite)
//! exercise the match controller end to end.

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::map::Arena;
use crate::params::Params;
use hecs::World;

/// Apply paddle slide intents, clamped to the table
pub fn move_paddles(world: &mut World, arena: &Arena, dt: f32) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0.0 {
            paddle.y += intent.dir * Params::PADDLE_SPEED * dt;
            paddle.y = arena.clamp_y(paddle.y, Params::PADDLE_HALF_HEIGHT);
        }
    }
}

/// Move the ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}

/// Trigger sweep: report which goal mouth the ball sits inside, if any.
/// The caller routes a hit into `MatchController::on_goal`.
pub fn detect_goal(world: &World, arena: &Arena) -> Option<Side> {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        for goal in &arena.goals {
            if goal.region.contains(ball.pos) {
                return Some(goal.side);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_paddles_applies_intent_and_clamps() {
        let mut world = World::new();
        let arena = Arena::standard();
        let paddle = world.spawn((
            Paddle::new(Side::Home, 8.0, 12.0),
            PaddleIntent { dir: 1.0 },
        ));

        move_paddles(&mut world, &arena, 0.1);
        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert!(y > 12.0, "paddle should slide up, got {y}");

        // A long slide pins the paddle at the band edge
        for _ in 0..100 {
            move_paddles(&mut world, &arena, 0.1);
        }
        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert_eq!(y, arena.height - Params::PADDLE_HALF_HEIGHT);
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut world = World::new();
        let mut ball = Ball::at_rest(Vec2::new(16.0, 12.0));
        ball.vel = Vec2::new(10.0, -5.0);
        let entity = world.spawn((ball,));

        move_ball(&mut world, 0.2);
        let pos = world.get::<&Ball>(entity).unwrap().pos;
        assert_eq!(pos, Vec2::new(18.0, 11.0));
    }

    #[test]
    fn test_detect_goal_reports_entered_side() {
        let mut world = World::new();
        let arena = Arena::standard();

        let entity = world.spawn((Ball::at_rest(arena.center()),));
        assert_eq!(detect_goal(&world, &arena), None);

        world.get::<&mut Ball>(entity).unwrap().pos = Vec2::new(0.2, 12.0);
        assert_eq!(detect_goal(&world, &arena), Some(Side::Home));

        world.get::<&mut Ball>(entity).unwrap().pos = Vec2::new(arena.width - 0.2, 12.0);
        assert_eq!(detect_goal(&world, &arena), Some(Side::Away));
    }
}
