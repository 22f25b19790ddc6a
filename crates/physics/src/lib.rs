#![warn(missing_docs)]
//! Physics primitives (AABB, overlap tests) for the interaction core.

use glam::Vec3;

/// Axis-aligned bounding box used for collisions.
///
/// Boxes are authored in an object's local, unscaled space and lifted into
/// world space with [`Aabb::scaled`] followed by [`Aabb::translate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// A unit cube centered on the origin.
    pub fn unit_cube() -> Self {
        Self::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    /// Tests intersection with another AABB. Bounds are inclusive, so boxes
    /// that merely touch count as overlapping.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Returns this box shifted by `offset`.
    pub fn translate(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns this box with both corners scaled component-wise by `factor`.
    /// Factors are expected to be positive.
    pub fn scaled(&self, factor: Vec3) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Lift a local-space box into world space. Scaling must happen before
    /// the translation, otherwise the scaled box drifts off the object.
    pub fn to_world(&self, size: Vec3, position: Vec3) -> Self {
        self.scaled(size).translate(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use proptest::prelude::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(vec3(0.0, 0.0, 0.0), vec3(2.0, 2.0, 2.0));
        let b = Aabb::new(vec3(1.0, 1.0, 1.0), vec3(3.0, 3.0, 3.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_boxes_intersect() {
        // Inclusive bounds: sharing a face counts as overlap.
        let a = Aabb::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
        let b = Aabb::new(vec3(1.0, 0.0, 0.0), vec3(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_on_one_axis_does_not_intersect() {
        let a = Aabb::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
        let b = Aabb::new(vec3(0.0, 5.0, 0.0), vec3(1.0, 6.0, 1.0));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn contained_box_intersects() {
        let outer = Aabb::new(vec3(-2.0, -2.0, -2.0), vec3(2.0, 2.0, 2.0));
        let inner = Aabb::new(vec3(-0.5, -0.5, -0.5), vec3(0.5, 0.5, 0.5));
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn scale_then_translate_keeps_box_on_position() {
        let local = Aabb::unit_cube();
        let world = local.to_world(vec3(2.0, 2.0, 2.0), vec3(10.0, 0.0, -4.0));
        assert_eq!(world.min, vec3(9.0, -1.0, -5.0));
        assert_eq!(world.max, vec3(11.0, 1.0, -3.0));
    }

    #[test]
    fn translate_is_exact_for_representable_offsets() {
        let a = Aabb::new(vec3(-1.0, 0.0, 2.0), vec3(1.0, 3.0, 4.0));
        let t = vec3(5.0, -2.0, 0.5);
        assert_eq!(a.translate(t).translate(-t), a);
    }

    // Integer-valued coordinates keep the float arithmetic exact, so the
    // algebraic properties below can assert strict equality.
    fn coord() -> impl Strategy<Value = f32> {
        (-100i32..=100).prop_map(|v| v as f32)
    }

    fn aabb() -> impl Strategy<Value = Aabb> {
        (
            (coord(), coord(), coord()),
            (coord(), coord(), coord()),
        )
            .prop_map(|((ax, ay, az), (bx, by, bz))| {
                Aabb::new(
                    vec3(ax.min(bx), ay.min(by), az.min(bz)),
                    vec3(ax.max(bx), ay.max(by), az.max(bz)),
                )
            })
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in aabb(), b in aabb()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn translate_round_trips(a in aabb(), tx in coord(), ty in coord(), tz in coord()) {
            let t = vec3(tx, ty, tz);
            prop_assert_eq!(a.translate(t).translate(-t), a);
        }

        #[test]
        fn translation_preserves_intersection(a in aabb(), b in aabb(), tx in coord(), ty in coord(), tz in coord()) {
            let t = vec3(tx, ty, tz);
            prop_assert_eq!(
                a.intersects(&b),
                a.translate(t).intersects(&b.translate(t))
            );
        }
    }
}
