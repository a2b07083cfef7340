use std::time::Instant;

use ringscroll::blit::{blit_linear, render_reference};
use ringscroll::demo::demo_world;
use ringscroll::{Direction, TileWorld, Viewport, ViewportConfig};

/// Scripted camera tour: (direction, stride_x, stride_y, frames).
const TOUR: &[(Direction, u32, u32, usize)] = &[
    (Direction::X_PLUS, 1, 1, 64),
    (Direction::X_PLUS_Y_PLUS, 2, 2, 48),
    (Direction::Y_PLUS, 1, 3, 40),
    (Direction::X_PLUS, 4, 1, 80),
    (Direction::X_MINUS_Y_MINUS, 3, 3, 60),
    (Direction::X_PLUS_Y_MINUS, 1, 1, 30),
    (Direction::X_MINUS, 2, 1, 200),
];

/// Run the tour, checking every frame against a direct render. Returns mismatching frames.
fn run_tour(world: &TileWorld, viewport: &mut Viewport) -> usize {
    let config = *viewport.config();
    let mut frame = vec![0; config.frame_len()];
    let mut expected = vec![0; config.frame_len()];
    let mut mismatches = 0;
    let mut moved_frames = 0;

    let started = Instant::now();
    for &(dir, sx, sy, frames) in TOUR {
        for _ in 0..frames {
            if viewport.scroll(world, dir, sx, sy) {
                moved_frames += 1;
            }
            blit_linear(viewport, &mut frame);

            let (x, y) = viewport.camera();
            render_reference(world, &config, x as usize, y as usize, &mut expected);
            if frame != expected {
                log::warn!("frame mismatch at camera ({x}, {y})");
                mismatches += 1;
            }
        }
    }
    let elapsed = started.elapsed();
    let total: usize = TOUR.iter().map(|&(_, _, _, f)| f).sum();
    log::info!(
        "tour: {} frames ({} moved) in {:.2?}, {:.1} us/frame incl. verification",
        total,
        moved_frames,
        elapsed,
        elapsed.as_secs_f64() * 1e6 / total as f64
    );
    mismatches
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let world = demo_world()?;
    let config = ViewportConfig::default();

    #[cfg(feature = "display")]
    {
        if std::env::args().any(|a| a == "--window") {
            return ringscroll::display::run(world, config, 3, 1);
        }
    }

    let mut viewport = Viewport::new(config, &world)?;
    let mismatches = run_tour(&world, &mut viewport);

    let (x, y) = viewport.camera();
    println!("camera: ({x}, {y})");
    println!(
        "row_head: {}  col_head: {}  fine_x: {}",
        viewport.row_head(),
        viewport.col_head(),
        viewport.fine_x()
    );
    println!("mismatched frames: {mismatches}");

    #[cfg(feature = "screenshot")]
    {
        let path = std::env::args()
            .skip(1)
            .find(|a| !a.starts_with("--"))
            .unwrap_or_else(|| "viewport.png".to_string());
        ringscroll::snapshot::save_png(&viewport, &path)?;
    }

    if mismatches > 0 {
        return Err(format!("{mismatches} frames diverged from the reference render").into());
    }
    Ok(())
}
