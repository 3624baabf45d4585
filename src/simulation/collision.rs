//! Wall collision response for the square world box

use super::states::Particle;

/// Resolve collisions with the walls of `[0, box_extent]^2`
///
/// Each axis is handled independently: a coordinate at or past a wall is
/// clamped onto the box and the matching velocity component is reversed and
/// scaled by `restitution`. A corner hit flips both components
pub fn resolve_walls(p: &mut Particle, box_extent: f64, restitution: f64) {
    for axis in 0..2 {
        if p.x[axis] <= 0.0 || p.x[axis] >= box_extent {
            p.x[axis] = p.x[axis].clamp(0.0, box_extent);
            p.v[axis] = -p.v[axis] * restitution;
        }
    }
}

/// True when the particle lies inside the box, walls included
pub fn in_box(p: &Particle, box_extent: f64) -> bool {
    p.x.iter().all(|c| (0.0..=box_extent).contains(c))
}
