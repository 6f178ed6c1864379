//! Arena boundary
//!
//! The arena is a disc bounded by a wall ring of fixed thickness. Every
//! moving thing (player walk and dash, chaser, camera eye) is kept inside it
//! by the same clamp.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_RADIUS, WALL_THICKNESS};
use crate::{planar, planar_to_polar, polar_to_planar};

/// Circular play area centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Outer play boundary (inner face of the wall is `radius - wall_thickness`)
    pub radius: f32,
    pub wall_thickness: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            radius: ARENA_RADIUS,
            wall_thickness: WALL_THICKNESS,
        }
    }
}

impl Arena {
    /// Farthest planar distance an entity center may reach
    #[inline]
    pub fn max_distance(&self, entity_radius: f32) -> f32 {
        (self.radius - self.wall_thickness - entity_radius).max(0.0)
    }

    /// Whether an entity at `pos` overlaps the wall
    #[inline]
    pub fn penetrates_wall(&self, pos: Vec2, entity_radius: f32) -> bool {
        pos.length() + entity_radius > self.radius - self.wall_thickness
    }

    /// Clamp a planar (x, z) position so the entity stays inside the wall
    pub fn clamp_planar(&self, pos: Vec2, entity_radius: f32) -> Vec2 {
        if !self.penetrates_wall(pos, entity_radius) {
            return pos;
        }
        let (_, theta) = planar_to_polar(pos);
        polar_to_planar(self.max_distance(entity_radius), theta)
    }

    /// Clamp a world position on the ground plane, height untouched
    pub fn clamp_position(&self, pos: Vec3, entity_radius: f32) -> Vec3 {
        let p = self.clamp_planar(planar(pos), entity_radius);
        Vec3::new(p.x, pos.y, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ENTITY_RADIUS;

    #[test]
    fn test_inside_unchanged() {
        let arena = Arena::default();
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(arena.clamp_planar(p, ENTITY_RADIUS), p);
    }

    #[test]
    fn test_outside_clamped_to_max_distance() {
        let arena = Arena::default();
        let clamped = arena.clamp_planar(Vec2::new(30.0, 0.0), ENTITY_RADIUS);
        assert!((clamped - Vec2::new(9.0, 0.0)).length() < 1e-5);

        // Direction is preserved
        let clamped = arena.clamp_planar(Vec2::new(-7.0, 7.0), ENTITY_RADIUS);
        assert!((clamped.length() - 9.0).abs() < 1e-5);
        assert!(clamped.x < 0.0 && clamped.y > 0.0);
        assert!((clamped.x + clamped.y).abs() < 1e-5);
    }

    #[test]
    fn test_band_between_limit_and_wall() {
        // 9.2 is inside the wall face (9.5) but the entity edge pokes through
        let arena = Arena::default();
        let clamped = arena.clamp_planar(Vec2::new(0.0, 9.2), ENTITY_RADIUS);
        assert!((clamped.y - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_origin_and_idempotence() {
        let arena = Arena::default();
        assert_eq!(arena.clamp_planar(Vec2::ZERO, ENTITY_RADIUS), Vec2::ZERO);

        let once = arena.clamp_planar(Vec2::new(12.0, 5.0), ENTITY_RADIUS);
        let twice = arena.clamp_planar(once, ENTITY_RADIUS);
        assert!((once - twice).length() < 1e-5);
    }

    #[test]
    fn test_clamp_position_keeps_height() {
        let arena = Arena::default();
        let p = arena.clamp_position(Vec3::new(20.0, 3.5, 0.0), ENTITY_RADIUS);
        assert_eq!(p.y, 3.5);
        assert!((p.x - 9.0).abs() < 1e-5);
        assert!(p.z.abs() < 1e-5);
    }

    #[test]
    fn test_oversized_entity_collapses_to_center() {
        let arena = Arena::default();
        assert_eq!(arena.max_distance(20.0), 0.0);
        let p = arena.clamp_planar(Vec2::new(1.0, 1.0), 20.0);
        assert!(p.length() < 1e-5);
    }
}
