//! Ballistic intercept aiming.
//!
//! Solves `|rel + target_vel·t| = speed·t` for the smallest non-negative t,
//! where `rel` is the target's position relative to the shooter. The
//! intercept point is where a straight shot fired now meets the target.

use bevy::prelude::*;

/// Intercept point for a straight projectile, or `None` when the target
/// outruns the shot.
pub fn intercept_point(
    origin: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    projectile_speed: f32,
) -> Option<Vec2> {
    let rel = target_pos - origin;
    let a = target_vel.length_squared() - projectile_speed * projectile_speed;
    let b = 2.0 * target_vel.dot(rel);
    let c = rel.length_squared();

    let t = smallest_non_negative(solve_quadratic(a, b, c))?;
    Some(target_pos + target_vel * t)
}

/// Real roots of `a·x² + b·x + c = 0`, degenerate cases included.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Vec<f32> {
    if a.abs() < f32::EPSILON {
        // Linear: b·x + c = 0.
        if b.abs() < f32::EPSILON {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    if discriminant == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    let sqrt_d = discriminant.sqrt();
    vec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
}

fn smallest_non_negative(candidates: Vec<f32>) -> Option<f32> {
    candidates.into_iter().filter(|t| *t >= 0.0).min_by(f32::total_cmp)
}
