//! Tests for actor spatial state

#[cfg(test)]
mod tests {
    use cavecrawl::simulation::body::{Axis, Body};
    use cavecrawl::spatial::rect::Rect;
    use glam::DVec2;

    #[test]
    fn test_hitbox_is_inset_collider() {
        let body = Body::new(DVec2::new(40.0, 24.0), [16, 16], 2);

        assert_eq!(body.collider(), Rect::new(40, 24, 16, 16));
        assert_eq!(body.hitbox(), Rect::new(42, 26, 12, 12));
        assert_eq!(body.margin(), 2);
        assert_eq!(body.center(), DVec2::new(48.0, 32.0));
    }

    // Tests rectangles follow the float position rounded to whole pixels
    #[test]
    fn test_rects_follow_rounded_position() {
        let mut body = Body::new(DVec2::ZERO, [10, 8], 1);
        body.set_position(DVec2::new(3.6, -2.4));

        assert_eq!(body.position(), DVec2::new(3.6, -2.4));
        assert_eq!(body.collider(), Rect::new(4, -2, 10, 8));
        assert_eq!(body.hitbox(), Rect::new(5, -1, 8, 6));

        body.advance(Axis::Horizontal, 10.0);
        body.advance(Axis::Vertical, -0.5);
        assert_eq!(body.collider(), Rect::new(14, -3, 10, 8));
    }

    // Tests snapping places the chosen hitbox edge exactly and moves the position with it
    // Verified by snapping the collider instead of the hitbox
    #[test]
    fn test_snap_hitbox_edges() {
        let mut body = Body::new(DVec2::new(10.3, 10.7), [16, 16], 2);

        body.snap_hitbox(Axis::Horizontal, 50, true);
        assert_eq!(body.hitbox().right(), 50);
        assert_eq!(body.position().x, 36.0);

        body.snap_hitbox(Axis::Horizontal, 20, false);
        assert_eq!(body.hitbox().left(), 20);
        assert_eq!(body.collider().left(), 18);

        body.snap_hitbox(Axis::Vertical, 64, true);
        assert_eq!(body.hitbox().bottom(), 64);
        body.snap_hitbox(Axis::Vertical, 8, false);
        assert_eq!(body.hitbox().top(), 8);
        assert_eq!(body.position().y, 6.0);
    }

    #[test]
    fn test_tile_positions() {
        let body = Body::new(DVec2::new(31.0, 47.0), [16, 16], 2);
        assert_eq!(body.tile_position(16), [1, 2]);
        assert_eq!(body.hitbox_tile(16), [2, 3]);
    }

    #[test]
    fn test_axis_helpers() {
        let rect = Rect::new(0, 0, 7, 3);
        assert_eq!(Axis::Horizontal.extent(&rect), 7);
        assert_eq!(Axis::Vertical.extent(&rect), 3);
        assert_eq!(Axis::Vertical.component(DVec2::new(1.0, -2.0)), -2.0);
    }
}
