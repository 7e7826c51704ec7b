use super::*;

#[test]
fn header_switches_after_threshold() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(100.0));
    assert!(header_scrolled(100.5));
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_transform(0.0), "translateY(0px)");
    assert_eq!(parallax_transform(240.0), "translateY(120px)");
    assert_eq!(parallax_transform(15.0), "translateY(7.5px)");
}

#[test]
fn compact_below_tablet_width() {
    assert!(is_compact_viewport(767.0));
    assert!(!is_compact_viewport(768.0));
    assert!(!is_compact_viewport(1280.0));
}

#[test]
fn anchor_target_clears_header_and_gap() {
    assert_eq!(anchor_scroll_target(900.0, 80.0), 800.0);
    assert_eq!(anchor_scroll_target(50.0, 80.0), -50.0);
}

#[test]
fn badges_stagger_after_initial_pause() {
    assert_eq!(badge_delay_ms(0), 200);
    assert_eq!(badge_delay_ms(1), 300);
    assert_eq!(badge_delay_ms(3), 500);
    assert_eq!(badge_delay_ms(usize::MAX), u32::MAX);
}

#[test]
fn throttle_drops_calls_inside_window() {
    let mut throttle = Throttle::new(250.0);
    assert!(throttle.should_fire(1000.0));
    assert!(!throttle.should_fire(1100.0));
    assert!(!throttle.should_fire(1249.0));
    assert!(throttle.should_fire(1250.0));
    assert!(!throttle.should_fire(1300.0));
}

#[test]
fn window_readings_have_ssr_defaults() {
    #[cfg(not(feature = "hydrate"))]
    {
        assert_eq!(window_scroll_y(), 0.0);
        assert!(!is_compact_viewport(window_width()));
        scroll_to_section("#products");
    }
}
