use super::*;
use crate::blit::{blit_to_vec, render_reference};
use crate::direction::Direction;
use crate::test_utils::{XorShift, demo_like_world, noise_world, uniform_world, world_from_rows};
use crate::tiles::TileWorld;

/// A viewport built from scratch at `vp`'s camera position.
fn fresh_at(vp: &Viewport, world: &TileWorld) -> Viewport {
    let mut f = Viewport::new(*vp.config(), world).unwrap();
    let (x, y) = vp.camera();
    f.jump_to(world, x, y);
    f
}

/// Incremental state must be indistinguishable from a full redraw at the same camera.
fn assert_matches_full_redraw(vp: &Viewport, world: &TileWorld, context: &str) {
    let fresh = fresh_at(vp, world);
    assert_eq!(vp.fine_x(), fresh.fine_x(), "{context}: fine_x");
    assert!(
        vp.logical_cache() == fresh.logical_cache(),
        "{context}: cache diverged from full redraw at {:?} (row_head={}, col_head={})",
        vp.camera(),
        vp.row_head(),
        vp.col_head()
    );

    let (x, y) = vp.camera();
    let mut expected = vec![0; vp.config().frame_len()];
    render_reference(world, vp.config(), x as usize, y as usize, &mut expected);
    assert!(blit_to_vec(vp) == expected, "{context}: blit differs from reference");
}

fn snapshot(vp: &Viewport) -> (Vec<u8>, usize, usize, u8, (i32, i32)) {
    (
        vp.buffer().to_vec(),
        vp.row_head(),
        vp.col_head(),
        vp.fine_x(),
        vp.camera(),
    )
}

fn run_random_session(seed: u32, world: &TileWorld, config: ViewportConfig, calls: usize) {
    let mut rng = XorShift::new(seed);
    let mut vp = Viewport::new(config, world).unwrap();
    let (max_x, max_y) = vp.camera_limits();
    for i in 0..calls {
        // Raw 4-bit masks, conflicting pairs included.
        let dir = Direction::from_bits(rng.below(16) as u8);
        let sx = rng.below(10);
        let sy = rng.below(10);
        let before = vp.camera();
        let moved = vp.scroll(world, dir, sx, sy);

        let (x, y) = vp.camera();
        assert_eq!(moved, (x, y) != before, "moved flag, call {i}");
        assert!((0..=max_x).contains(&x) && (0..=max_y).contains(&y));
        assert_matches_full_redraw(&vp, world, &format!("seed {seed} call {i} dir {dir:?} stride ({sx},{sy})"));
    }
}

// -------------- Cache correctness --------------

#[test]
fn random_sessions_match_full_redraw() {
    let world = noise_world(0xC0FFEE, 40, 30);
    run_random_session(1, &world, ViewportConfig::new(6, 50), 400);
    run_random_session(2, &world, ViewportConfig::new(1, 8), 400);
    run_random_session(3, &world, ViewportConfig::new(39, 13), 200);
}

#[test]
fn random_sessions_on_tight_map() {
    // Map only one tile larger than the viewport on each axis.
    let world = noise_world(77, 5, 3);
    run_random_session(4, &world, ViewportConfig::new(4, 16), 300);
}

#[test]
fn default_viewport_demo_map_tour() {
    let world = demo_like_world(96, 48);
    let mut vp = Viewport::new(ViewportConfig::default(), &world).unwrap();
    let legs: &[(Direction, u32, u32, usize)] = &[
        (Direction::X_PLUS, 1, 1, 20),
        (Direction::X_PLUS_Y_PLUS, 3, 2, 30),
        (Direction::Y_PLUS, 1, 4, 40),
        (Direction::X_MINUS_Y_MINUS, 4, 4, 15),
        (Direction::X_PLUS_Y_MINUS, 2, 2, 25),
        (Direction::X_MINUS, 7, 1, 60),
    ];
    for &(dir, sx, sy, frames) in legs {
        for f in 0..frames {
            vp.scroll(&world, dir, sx, sy);
            assert_matches_full_redraw(&vp, &world, &format!("{dir:?} frame {f}"));
        }
    }
}

#[test]
fn strided_call_equals_single_steps() {
    let world = noise_world(5, 30, 20);
    let config = ViewportConfig::new(5, 40);
    for dir in [
        Direction::X_PLUS,
        Direction::Y_PLUS,
        Direction::X_PLUS_Y_PLUS,
        Direction::X_MINUS_Y_PLUS,
    ] {
        let mut batched = Viewport::new(config, &world).unwrap();
        let mut stepped = Viewport::new(config, &world).unwrap();
        batched.jump_to(&world, 40, 30);
        stepped.jump_to(&world, 40, 30);

        assert!(batched.scroll(&world, dir, 11, 11));
        for _ in 0..11 {
            stepped.scroll(&world, dir, 1, 1);
        }
        assert_eq!(batched.camera(), stepped.camera(), "{dir:?}");
        assert_eq!(batched.row_head(), stepped.row_head());
        assert_eq!(batched.col_head(), stepped.col_head());
        assert_eq!(batched.fine_x(), stepped.fine_x());
        assert_eq!(batched.buffer(), stepped.buffer(), "{dir:?}");
    }
}

// -------------- Edges and bounds --------------

#[test]
fn pinned_camera_noop_is_bit_identical() {
    let world = noise_world(9, 20, 12);
    let mut vp = Viewport::new(ViewportConfig::new(8, 48), &world).unwrap();

    let before = snapshot(&vp);
    for dir in [Direction::X_MINUS, Direction::Y_MINUS, Direction::X_MINUS_Y_MINUS] {
        assert!(!vp.scroll(&world, dir, 5, 5));
        assert_eq!(snapshot(&vp), before, "{dir:?} at origin");
    }

    let (max_x, max_y) = vp.camera_limits();
    vp.jump_to(&world, max_x, max_y);
    let before = snapshot(&vp);
    for dir in [Direction::X_PLUS, Direction::Y_PLUS, Direction::X_PLUS_Y_PLUS] {
        assert!(!vp.scroll(&world, dir, 3, 3));
        assert_eq!(snapshot(&vp), before, "{dir:?} at max");
    }
}

#[test]
fn bounds_are_never_crossed() {
    let world = noise_world(11, 12, 9);
    let mut vp = Viewport::new(ViewportConfig::new(4, 24), &world).unwrap();
    let (max_x, max_y) = vp.camera_limits();
    assert_eq!((max_x, max_y), (12 * 8 - 32, 9 * 8 - 24));

    for _ in 0..50 {
        vp.scroll(&world, Direction::X_MINUS_Y_MINUS, 9, 9);
        let (x, y) = vp.camera();
        assert!(x >= 0 && y >= 0);
    }

    // A long stride stops exactly on the limit and still reports motion.
    assert!(vp.scroll(&world, Direction::X_PLUS, 255, 0));
    assert_eq!(vp.camera(), (max_x, 0));
    assert!(vp.scroll(&world, Direction::Y_PLUS, 0, 1000));
    assert_eq!(vp.camera(), (max_x, max_y));
    for _ in 0..50 {
        vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 9, 9);
        assert_eq!(vp.camera(), (max_x, max_y));
    }
    assert_matches_full_redraw(&vp, &world, "at max");
}

#[test]
fn diagonal_blocked_on_one_axis_moves_the_other() {
    let world = noise_world(13, 16, 10);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    let (_, max_y) = vp.camera_limits();
    vp.jump_to(&world, 10, max_y);

    assert!(vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 3, 3));
    assert_eq!(vp.camera(), (13, max_y));

    vp.jump_to(&world, 0, 5);
    assert!(vp.scroll(&world, Direction::X_MINUS_Y_PLUS, 2, 2));
    assert_eq!(vp.camera(), (0, 7));
    assert_matches_full_redraw(&vp, &world, "blocked diagonal");
}

// -------------- Fractional offset and column ring --------------

#[test]
fn eight_right_steps_rotate_column_ring_once() {
    let world = noise_world(21, 20, 8);
    let config = ViewportConfig::new(6, 32);
    let mut vp = Viewport::new(config, &world).unwrap();
    vp.jump_to(&world, 16, 0);
    assert_eq!((vp.fine_x(), vp.col_head()), (0, 0));

    let untouched = vp.buffer().to_vec();
    for step in 1..8u8 {
        assert!(vp.scroll(&world, Direction::X_PLUS, 1, 1));
        assert_eq!(vp.fine_x(), step);
        assert_eq!(vp.col_head(), 0);
        // Sub-byte motion touches no cache bytes.
        assert_eq!(vp.buffer(), &untouched[..]);
        assert_matches_full_redraw(&vp, &world, &format!("sub-byte step {step}"));
    }

    assert!(vp.scroll(&world, Direction::X_PLUS, 1, 1));
    assert_eq!(vp.camera(), (24, 0));
    assert_eq!(vp.fine_x(), 0);
    assert_eq!(vp.col_head(), 1);

    // Only the two rightmost logical columns (W - 1 and the lookahead W) changed slots.
    let view = vp.cache_view();
    let changed: Vec<usize> = (0..config.ring_width())
        .filter(|&phys| (0..config.height_px).any(|r| {
            let i = r * config.ring_width() + phys;
            vp.buffer()[i] != untouched[i]
        }))
        .collect();
    let right = (view.col_head + config.visible_width_bytes - 1) % config.ring_width();
    let lookahead = (view.col_head + config.visible_width_bytes) % config.ring_width();
    assert!(changed.iter().all(|&c| c == right || c == lookahead), "changed slots {changed:?}");
    assert_matches_full_redraw(&vp, &world, "after wrap");
}

#[test]
fn left_step_from_aligned_retreats_column_ring() {
    let world = noise_world(23, 20, 8);
    let config = ViewportConfig::new(6, 32);
    let mut vp = Viewport::new(config, &world).unwrap();
    vp.jump_to(&world, 16, 0);

    assert!(vp.scroll(&world, Direction::X_MINUS, 1, 1));
    assert_eq!(vp.camera(), (15, 0));
    assert_eq!(vp.fine_x(), 7);
    assert_eq!(vp.col_head(), config.ring_width() - 1);
    assert_matches_full_redraw(&vp, &world, "left wrap");

    // Back again: fine_x climbs to 0 and the head returns.
    assert!(vp.scroll(&world, Direction::X_PLUS, 1, 1));
    assert_eq!((vp.fine_x(), vp.col_head()), (0, 0));
    assert_matches_full_redraw(&vp, &world, "right wrap back");
}

#[test]
fn row_ring_wraps_past_height() {
    let world = noise_world(31, 6, 12);
    let config = ViewportConfig::new(3, 20);
    let mut vp = Viewport::new(config, &world).unwrap();
    for i in 1..=23 {
        assert!(vp.scroll(&world, Direction::Y_PLUS, 1, 1));
        assert_eq!(vp.row_head(), i % 20);
    }
    assert_matches_full_redraw(&vp, &world, "row ring wrapped");
    for _ in 0..23 {
        vp.scroll(&world, Direction::Y_MINUS, 1, 1);
    }
    assert_eq!((vp.camera(), vp.row_head()), ((0, 0), 0));
}

// -------------- Direction mask policy and strides --------------

#[test]
fn diagonal_uses_smaller_stride_on_both_axes() {
    let world = noise_world(41, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    vp.jump_to(&world, 8, 8);
    assert!(vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 5, 2));
    assert_eq!(vp.camera(), (10, 10));
    assert!(vp.scroll(&world, Direction::X_MINUS_Y_PLUS, 1, 6));
    assert_eq!(vp.camera(), (9, 11));
}

#[test]
fn single_axis_uses_its_own_stride() {
    let world = noise_world(43, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    assert!(vp.scroll(&world, Direction::X_PLUS, 5, 2));
    assert_eq!(vp.camera(), (5, 0));
    assert!(vp.scroll(&world, Direction::Y_PLUS, 5, 2));
    assert_eq!(vp.camera(), (5, 2));
}

#[test]
fn zero_stride_means_one_pixel() {
    let world = noise_world(45, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    assert!(vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 0, 0));
    assert_eq!(vp.camera(), (1, 1));
}

#[test]
fn conflicting_bits_cancel_their_axis() {
    let world = noise_world(47, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    vp.jump_to(&world, 40, 40);
    let before = snapshot(&vp);

    assert!(!vp.scroll(&world, Direction::X_PLUS | Direction::X_MINUS, 3, 3));
    assert!(!vp.scroll(&world, Direction::Y_PLUS | Direction::Y_MINUS, 3, 3));
    assert!(!vp.scroll(&world, Direction::from_bits(0x0F), 3, 3));
    assert_eq!(snapshot(&vp), before);

    assert!(vp.scroll(&world, Direction::X_PLUS | Direction::X_MINUS | Direction::Y_MINUS, 2, 4));
    // Y alone: its own stride applies.
    assert_eq!(vp.camera(), (40, 36));
    assert_matches_full_redraw(&vp, &world, "cancelled x axis");
}

#[test]
fn empty_mask_is_noop() {
    let world = noise_world(49, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    assert!(!vp.scroll(&world, Direction::NONE, 4, 4));
    assert_eq!(vp.camera(), (0, 0));
}

// -------------- Scenarios --------------

#[test]
fn solid_map_single_right_step() {
    let world = uniform_world(10, 10, 1);
    let mut vp = Viewport::new(ViewportConfig::from_tiles(4, 4), &world).unwrap();
    let before = vp.buffer().to_vec();
    assert!(before.iter().all(|&b| b == 0xFF));

    assert!(vp.scroll(&world, Direction::X_PLUS, 1, 1));
    assert_eq!(vp.camera(), (1, 0));
    assert_eq!(vp.fine_x(), 1);
    assert_eq!(vp.buffer(), &before[..]);
    assert!(blit_to_vec(&vp).iter().all(|&b| b == 0xFF));
}

#[test]
fn half_tile_camera_blends_empty_into_solid() {
    let world = world_from_rows(&[&[0, 1]]);
    let config = ViewportConfig::new(1, 8);

    let mut scrolled = Viewport::new(config, &world).unwrap();
    assert!(scrolled.scroll(&world, Direction::X_PLUS, 4, 1));
    assert_eq!(blit_to_vec(&scrolled), vec![0x0F; 8]);

    let mut jumped = Viewport::new(config, &world).unwrap();
    jumped.jump_to(&world, 4, 0);
    assert_eq!(jumped.fine_x(), 4);
    assert_eq!(blit_to_vec(&jumped), vec![0x0F; 8]);
}

// -------------- Construction and teleport --------------

#[test]
fn construction_rejects_undersized_map() {
    let world = uniform_world(3, 10, 0);
    let err = Viewport::new(ViewportConfig::from_tiles(4, 2), &world).unwrap_err();
    assert_eq!(
        err,
        ScrollError::MapTooSmall {
            axis: "x",
            map_px: 24,
            viewport_px: 32
        }
    );

    let err = Viewport::new(ViewportConfig::new(2, 81), &world).unwrap_err();
    assert!(matches!(err, ScrollError::MapTooSmall { axis: "y", .. }));

    assert!(matches!(
        Viewport::new(ViewportConfig::new(0, 8), &world),
        Err(ScrollError::EmptyViewport { .. })
    ));
}

#[test]
fn map_exactly_viewport_sized_cannot_scroll() {
    let world = noise_world(51, 4, 4);
    let mut vp = Viewport::new(ViewportConfig::from_tiles(4, 4), &world).unwrap();
    assert_eq!(vp.camera_limits(), (0, 0));
    assert!(!vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 1, 1));
    assert_matches_full_redraw(&vp, &world, "fixed");
}

#[test]
fn jump_clamps_and_full_redraws() {
    let world = noise_world(53, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 13, 13);
    assert_ne!(vp.row_head(), 0);

    vp.jump_to(&world, -5, 1_000_000);
    let (_, max_y) = vp.camera_limits();
    assert_eq!(vp.camera(), (0, max_y));
    assert_eq!((vp.row_head(), vp.col_head(), vp.fine_x()), (0, 0, 0));

    vp.jump_to(&world, 29, 3);
    assert_eq!((vp.fine_x(), vp.col_head()), (5, 0));
    assert_matches_full_redraw(&vp, &world, "after jump");
}

#[test]
fn full_redraw_after_scroll_keeps_camera() {
    let world = noise_world(55, 20, 20);
    let mut vp = Viewport::new(ViewportConfig::new(4, 32), &world).unwrap();
    vp.scroll(&world, Direction::X_PLUS_Y_PLUS, 19, 19);
    let logical = vp.logical_cache();
    let camera = vp.camera();

    vp.full_redraw(&world);
    assert_eq!(vp.camera(), camera);
    assert_eq!((vp.row_head(), vp.col_head()), (0, 0));
    assert_eq!(vp.logical_cache(), logical);
}
