//! Tests for crop squares, canvas sizing and margin defaults

#[cfg(test)]
mod tests {
    use fugaco::layout::geometry::{
        Point, Rect, Size, canvas_side, canvas_size, checked_canvas_side, crop_square, default_margin,
        resolve_margin,
    };

    // Tests that wide sources keep their height and are trimmed evenly on both sides
    #[test]
    fn test_crop_square_album_like() {
        let rect = crop_square(Size::new(640, 480));

        assert_eq!(rect, Rect::new(Point::new(80, 0), Size::square(480)));
    }

    // Tests that tall sources keep their width and are trimmed top and bottom
    #[test]
    fn test_crop_square_portrait() {
        let rect = crop_square(Size::new(300, 500));

        assert_eq!(rect, Rect::new(Point::new(0, 100), Size::square(300)));
    }

    // Tests that square sources are kept whole with a zero offset
    #[test]
    fn test_crop_square_square_source() {
        let rect = crop_square(Size::square(480));

        assert_eq!(rect.origin, Point::new(0, 0));
        assert_eq!(rect.size, Size::square(480));
    }

    // Tests that odd leftovers round the offset down
    #[test]
    fn test_crop_square_odd_difference() {
        assert_eq!(crop_square(Size::new(7, 4)).origin, Point::new(1, 0));
        assert_eq!(crop_square(Size::new(4, 7)).origin, Point::new(0, 1));
        assert_eq!(crop_square(Size::new(5, 4)).origin, Point::new(0, 0));
    }

    // Tests the crop formula over a sweep of aspect ratios
    #[test]
    fn test_crop_square_sweep() {
        for width in 1..40 {
            for height in 1..40 {
                let rect = crop_square(Size::new(width, height));
                let side = width.min(height);

                assert_eq!(rect.size, Size::square(side));
                if width > height {
                    assert_eq!(rect.origin, Point::new((width - height) / 2, 0));
                } else {
                    assert_eq!(rect.origin, Point::new(0, (height - width) / 2));
                }
                assert!(rect.origin.x + side <= width);
                assert!(rect.origin.y + side <= height);
            }
        }
    }

    // Tests canvas side = 4 tiles plus 5 margins
    #[test]
    fn test_canvas_side() {
        assert_eq!(canvas_side(240, 10), 1010);
        assert_eq!(canvas_side(100, 0), 400);
        assert_eq!(canvas_side(8, 3), 47);
        assert_eq!(canvas_size(240, 10), Size::square(1010));
    }

    // Tests that oversized tiles or margins report overflow instead of wrapping
    #[test]
    fn test_checked_canvas_side() {
        assert_eq!(checked_canvas_side(240, 10), Some(1010));
        assert_eq!(checked_canvas_side(8, 1_000_000_000), None);
        assert_eq!(checked_canvas_side(u32::MAX / 4, 0), Some(u32::MAX / 4 * 4));
        assert_eq!(checked_canvas_side(u32::MAX / 4 + 1, 0), None);
        assert_eq!(checked_canvas_side(u32::MAX / 4, 1), None);
    }

    // Tests the tile/24 default margin, including halfway cases
    #[test]
    fn test_default_margin() {
        assert_eq!(default_margin(240), 10);
        assert_eq!(default_margin(100), 4);
        assert_eq!(default_margin(1), 0);
        assert_eq!(default_margin(36), 2);
        assert_eq!(default_margin(60), 2);
        assert_eq!(default_margin(84), 4);
    }

    // Tests that only negative or missing margins fall back to the default
    #[test]
    fn test_resolve_margin() {
        assert_eq!(resolve_margin(None, 240), 10);
        assert_eq!(resolve_margin(Some(-1), 240), 10);
        assert_eq!(resolve_margin(Some(0), 240), 0);
        assert_eq!(resolve_margin(Some(25), 240), 25);
    }

    // Tests the WIDTHxHEIGHT rendering used in progress lines
    #[test]
    fn test_display_formats() {
        assert_eq!(Size::new(640, 480).to_string(), "640x480");
        assert_eq!(Point::new(10, 260).to_string(), "10x260");
    }

    #[test]
    fn test_album_like() {
        assert!(Size::new(2, 1).is_album_like());
        assert!(!Size::new(1, 2).is_album_like());
        assert!(!Size::square(3).is_album_like());
    }
}
