use crate::components::Side;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Goal mouth trigger region, tagged with the side that defends it
#[derive(Debug, Clone, Copy)]
pub struct Goal {
    pub side: Side,
    pub region: Aabb,
}

/// Table bounds and both goal mouths; lives for the whole match
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub goals: [Goal; 2],
}

impl Arena {
    /// Standard table: home goal on the left edge, away goal on the right.
    pub fn standard() -> Self {
        let width = 32.0;
        let height = 24.0;
        let mouth = Vec2::new(1.0, 8.0);

        let goals = [
            Goal {
                side: Side::Home,
                region: Aabb::from_center_size(Vec2::new(mouth.x * 0.5, height * 0.5), mouth),
            },
            Goal {
                side: Side::Away,
                region: Aabb::from_center_size(Vec2::new(width - mouth.x * 0.5, height * 0.5), mouth),
            },
        ];

        Self {
            width,
            height,
            goals,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a paddle Y to the playable band
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(half_height, self.height - half_height)
    }
}
