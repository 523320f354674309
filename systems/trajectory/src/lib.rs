#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Trajectory mathematics shared by the world and the boss controller.
//!
//! Headings are expressed in degrees with 0° pointing right and 90° pointing
//! toward the top of the screen, while positions use screen coordinates where
//! y grows downward. Every function here is pure; projectile state lives in
//! the world and boss controllers, which call into this crate each update
//! pass.

use alien_invasion_core::{Point, Rect};

/// Quarter of the plane a target occupies relative to an origin.
///
/// Targets lying exactly on an axis are folded into an adjacent quadrant so
/// that classification is total for every pair of distinct points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Target is to the upper right of the origin.
    UpRight,
    /// Target is to the upper left of the origin.
    UpLeft,
    /// Target is to the lower left of the origin.
    DownLeft,
    /// Target is to the lower right of the origin.
    DownRight,
}

/// Classifies the direction from `origin` toward `target`.
///
/// # Panics
///
/// Panics when the two points coincide; callers must not aim an entity at
/// itself.
#[must_use]
pub fn classify(origin: Point, target: Point) -> Quadrant {
    let dx = target.x() - origin.x();
    let dy = target.y() - origin.y();
    if dx > 0.0 && dy < 0.0 {
        Quadrant::UpRight
    } else if dx < 0.0 && dy < 0.0 {
        Quadrant::UpLeft
    } else if dx < 0.0 && dy > 0.0 {
        Quadrant::DownLeft
    } else if dx > 0.0 && dy > 0.0 {
        Quadrant::DownRight
    } else if dx > 0.0 {
        Quadrant::DownRight
    } else if dx < 0.0 {
        Quadrant::UpLeft
    } else if dy < 0.0 {
        Quadrant::UpRight
    } else if dy > 0.0 {
        Quadrant::DownLeft
    } else {
        panic!("cannot classify a direction between identical points");
    }
}

/// Acute angle in degrees between the origin-target line and the horizontal.
///
/// The result lies in `[0, 90]` and carries no quadrant information; combine
/// it with [`fold`] to obtain a full heading. Boss volleys add their aim
/// offsets to this raw angle before folding.
#[must_use]
pub fn raw_angle(origin: Point, target: Point) -> f32 {
    let dx = target.x() - origin.x();
    let dy = target.y() - origin.y();
    let distance = dx.hypot(dy);
    (dx.abs() / distance).acos().to_degrees()
}

/// Expands an acute angle into a full heading for the provided quadrant.
#[must_use]
pub fn fold(quadrant: Quadrant, angle: f32) -> f32 {
    match quadrant {
        Quadrant::UpRight => angle,
        Quadrant::UpLeft => 180.0 - angle,
        Quadrant::DownLeft => 180.0 + angle,
        Quadrant::DownRight => 360.0 - angle,
    }
}

/// Full heading in degrees from `origin` toward `target`.
///
/// # Panics
///
/// Panics when the two points coincide, matching [`classify`].
#[must_use]
pub fn aim_heading(origin: Point, target: Point) -> f32 {
    fold(classify(origin, target), raw_angle(origin, target))
}

/// Advances a position one update pass along the provided heading.
///
/// Positive headings point up the screen, so the vertical component is
/// subtracted in screen coordinates.
#[must_use]
pub fn step(position: Point, heading: f32, speed: f32) -> Point {
    let radians = heading.to_radians();
    Point::new(
        position.x() + speed * radians.cos(),
        position.y() - speed * radians.sin(),
    )
}

/// Playfield edge a bouncing bullet touched during an update pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeContact {
    /// Top edge of the playfield.
    Top,
    /// Bottom edge of the playfield.
    Bottom,
    /// Right edge of the playfield.
    Right,
    /// Left edge of the playfield.
    Left,
}

/// Reports the first playfield edge the bounds extend past, if any.
///
/// Edges are checked in the fixed order top, bottom, right, left; a bullet
/// caught in a corner reflects off the vertical pair first.
#[must_use]
pub fn edge_contact(bounds: &Rect, field: &Rect) -> Option<EdgeContact> {
    if bounds.top() < field.top() {
        Some(EdgeContact::Top)
    } else if bounds.bottom() > field.bottom() {
        Some(EdgeContact::Bottom)
    } else if bounds.right() > field.right() {
        Some(EdgeContact::Right)
    } else if bounds.left() < field.left() {
        Some(EdgeContact::Left)
    } else {
        None
    }
}

/// Heading after reflecting off the provided edge.
#[must_use]
pub fn reflect(contact: EdgeContact, heading: f32) -> f32 {
    match contact {
        EdgeContact::Top | EdgeContact::Bottom => 360.0 - heading,
        EdgeContact::Right => (270.0 - heading).abs() + 180.0,
        EdgeContact::Left => 180.0 - heading,
    }
}

/// Reports whether the bounds lie entirely outside the playfield.
#[must_use]
pub fn left_playfield(bounds: &Rect, field: &Rect) -> bool {
    bounds.right() < field.left()
        || bounds.left() > field.right()
        || bounds.bottom() < field.top()
        || bounds.top() > field.bottom()
}

#[cfg(test)]
mod tests {
    use super::{
        aim_heading, classify, edge_contact, fold, left_playfield, raw_angle, reflect, step,
        EdgeContact, Quadrant,
    };
    use alien_invasion_core::{Extent, Point, Rect};

    const EPSILON: f32 = 1e-4;

    fn assert_close(left: f32, right: f32) {
        assert!(
            (left - right).abs() < EPSILON,
            "expected {right}, got {left}"
        );
    }

    #[test]
    fn strict_quadrants_follow_the_signs() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(
            classify(origin, Point::new(150.0, 50.0)),
            Quadrant::UpRight
        );
        assert_eq!(classify(origin, Point::new(50.0, 50.0)), Quadrant::UpLeft);
        assert_eq!(
            classify(origin, Point::new(50.0, 150.0)),
            Quadrant::DownLeft
        );
        assert_eq!(
            classify(origin, Point::new(150.0, 150.0)),
            Quadrant::DownRight
        );
    }

    #[test]
    fn axis_ties_fold_into_adjacent_quadrants() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(
            classify(origin, Point::new(150.0, 100.0)),
            Quadrant::DownRight
        );
        assert_eq!(classify(origin, Point::new(50.0, 100.0)), Quadrant::UpLeft);
        assert_eq!(classify(origin, Point::new(100.0, 50.0)), Quadrant::UpRight);
        assert_eq!(
            classify(origin, Point::new(100.0, 150.0)),
            Quadrant::DownLeft
        );
    }

    #[test]
    #[should_panic(expected = "identical points")]
    fn classifying_identical_points_panics() {
        let origin = Point::new(100.0, 100.0);
        let _ = classify(origin, origin);
    }

    #[test]
    fn raw_angle_measures_from_the_horizontal() {
        let origin = Point::new(0.0, 0.0);
        assert_close(raw_angle(origin, Point::new(10.0, -10.0)), 45.0);
        assert_close(raw_angle(origin, Point::new(10.0, 0.0)), 0.0);
        assert_close(raw_angle(origin, Point::new(0.0, 10.0)), 90.0);
    }

    #[test]
    fn folding_covers_all_four_quadrants() {
        assert_close(fold(Quadrant::UpRight, 30.0), 30.0);
        assert_close(fold(Quadrant::UpLeft, 30.0), 150.0);
        assert_close(fold(Quadrant::DownLeft, 30.0), 210.0);
        assert_close(fold(Quadrant::DownRight, 30.0), 330.0);
    }

    #[test]
    fn aim_heading_points_at_the_target() {
        let origin = Point::new(100.0, 100.0);
        assert_close(aim_heading(origin, Point::new(200.0, 0.0)), 45.0);
        assert_close(aim_heading(origin, Point::new(0.0, 200.0)), 225.0);
        // A purely horizontal right-hand aim folds through DownRight into a
        // full turn rather than zero.
        assert_close(aim_heading(origin, Point::new(200.0, 100.0)), 360.0);
    }

    #[test]
    fn stepping_respects_screen_coordinates() {
        let up = step(Point::new(10.0, 10.0), 90.0, 2.0);
        assert_close(up.x(), 10.0);
        assert_close(up.y(), 8.0);
        let right = step(Point::new(10.0, 10.0), 0.0, 2.0);
        assert_close(right.x(), 12.0);
        assert_close(right.y(), 10.0);
    }

    #[test]
    fn a_full_turn_heading_steps_like_zero() {
        let a = step(Point::new(0.0, 0.0), 360.0, 5.0);
        let b = step(Point::new(0.0, 0.0), 0.0, 5.0);
        assert_close(a.x(), b.x());
        assert_close(a.y(), b.y());
    }

    fn field() -> Rect {
        Rect::from_center(Point::new(600.0, 400.0), Extent::new(1200.0, 800.0))
    }

    #[test]
    fn edge_contact_prefers_vertical_edges() {
        let bullet = Extent::new(8.0, 16.0);
        let top = Rect::from_center(Point::new(600.0, 4.0), bullet);
        assert_eq!(edge_contact(&top, &field()), Some(EdgeContact::Top));
        let corner = Rect::from_center(Point::new(1199.0, 4.0), bullet);
        assert_eq!(edge_contact(&corner, &field()), Some(EdgeContact::Top));
        let right = Rect::from_center(Point::new(1199.0, 400.0), bullet);
        assert_eq!(edge_contact(&right, &field()), Some(EdgeContact::Right));
        let inside = Rect::from_center(Point::new(600.0, 400.0), bullet);
        assert_eq!(edge_contact(&inside, &field()), None);
    }

    #[test]
    fn reflections_mirror_the_heading() {
        assert_close(reflect(EdgeContact::Top, 45.0), 315.0);
        assert_close(reflect(EdgeContact::Bottom, 315.0), 45.0);
        assert_close(reflect(EdgeContact::Left, 135.0), 45.0);
        assert_close(reflect(EdgeContact::Right, 45.0), 405.0);
    }

    #[test]
    fn bullets_outside_every_edge_are_reported_gone() {
        let bullet = Extent::new(8.0, 16.0);
        let gone = Rect::from_center(Point::new(600.0, -40.0), bullet);
        assert!(left_playfield(&gone, &field()));
        let touching = Rect::from_center(Point::new(600.0, 2.0), bullet);
        assert!(!left_playfield(&touching, &field()));
    }
}
