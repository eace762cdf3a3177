pub mod components;
pub mod config;
pub mod controller;
pub mod input;
pub mod map;
pub mod params;
pub mod player;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use player::*;

use hecs::World;
use systems::*;

/// Advance the headless match by one frame.
///
/// Input handlers run first, then the movement shims, then the goal sweep,
/// and last the stall watchdog. A goal found this frame reaches the
/// controller before the stall check runs, so at most one respawn happens
/// per frame. Ball-touch reports stay with the host's collision layer and
/// go straight to `MatchController::on_ball_touched`.
pub fn step(
    world: &mut World,
    controller: &mut MatchController,
    arena: &Arena,
    frame: &InputFrame,
    dt: f32,
) {
    controller.drive_input(world, frame);

    move_paddles(world, arena, dt);
    move_ball(world, dt);

    if let Some(side) = detect_goal(world, arena) {
        controller.on_goal(world, side);
    }

    controller.tick(world, dt);
}
