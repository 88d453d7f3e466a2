use golife::{generate, write_gif, Config, GridError, LifeGrid, Termination};

fn make_grid(rows: &[&str]) -> LifeGrid {
    let width = rows.iter().map(|row| row.len()).max().unwrap();
    let mut grid = LifeGrid::new(width, rows.len()).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if ch == b'o' {
                grid.set(x as i64, y as i64, true).unwrap();
            }
        }
    }
    grid
}

#[test]
fn test_still_life_yields_a_single_frame() {
    let mut grid = make_grid(&["    ", " oo ", " oo ", "    "]);
    let animation = generate(&mut grid, 2, 16).unwrap();
    assert_eq!(animation.reason, Termination::StableCycleDetected);
    assert_eq!(animation.frames.len(), 1);
}

#[test]
fn test_empty_grid_is_a_fixed_point() {
    let mut grid = LifeGrid::new(3, 3).unwrap();
    let animation = generate(&mut grid, 1, 16).unwrap();
    assert_eq!(animation.reason, Termination::StableCycleDetected);
    assert_eq!(animation.frames.len(), 1);
}

#[test]
fn test_blinker_yields_both_phases_once() {
    let mut grid = make_grid(&["     ", "     ", " ooo ", "     ", "     "]);
    let animation = generate(&mut grid, 1, 16).unwrap();
    assert_eq!(animation.reason, Termination::StableCycleDetected);
    assert_eq!(animation.frames.len(), 2);
    assert_ne!(animation.frames[0], animation.frames[1]);
}

#[test]
fn test_toad_yields_both_phases_once() {
    let mut grid = make_grid(&[
        "      ", "      ", "  ooo ", " ooo  ", "      ", "      ",
    ]);
    let animation = generate(&mut grid, 1, 64).unwrap();
    assert_eq!(animation.reason, Termination::StableCycleDetected);
    assert_eq!(animation.frames.len(), 2);
}

#[test]
fn test_iteration_cap_bounds_the_output() {
    // A glider does not revisit any state within its first generations,
    // so the cap is what stops the run.
    let mut grid = make_grid(&[
        " o      ",
        "  o     ",
        "ooo     ",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
    ]);
    let animation = generate(&mut grid, 1, 3).unwrap();
    assert_eq!(animation.reason, Termination::IterationLimitReached);
    assert_eq!(animation.frames.len(), 3);
}

#[test]
fn test_iteration_cap_of_one_wins_over_cycle_detection() {
    let mut grid = make_grid(&[" oo ", " oo "]);
    let animation = generate(&mut grid, 1, 1).unwrap();
    assert_eq!(animation.reason, Termination::IterationLimitReached);
    assert_eq!(animation.frames.len(), 1);
}

#[test]
fn test_invalid_scale_is_rejected() {
    let mut grid = LifeGrid::new(3, 3).unwrap();
    assert_eq!(grid.render_frame(0).unwrap_err(), GridError::InvalidScale);
    assert_eq!(
        generate(&mut grid, 0, 16).unwrap_err(),
        GridError::InvalidScale
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let grid = make_grid(&[" o ", "o o", " o "]);
    assert_eq!(grid.render_frame(3).unwrap(), grid.render_frame(3).unwrap());
}

#[test]
fn test_frame_geometry_follows_scale() {
    let grid = make_grid(&["o  ", "  o"]);
    let frame = grid.render_frame(4).unwrap();
    assert_eq!((frame.width(), frame.height()), (12, 8));
    let alive_pixels = frame.pixels().iter().filter(|&&p| p != 0).count();
    assert_eq!(alive_pixels, 2 * 4 * 4);
}

#[test]
fn test_delay_is_the_configured_constant() {
    let mut grid = make_grid(&[" oo ", " oo "]);
    let animation = generate(&mut grid, 1, 4).unwrap();
    assert_eq!(animation.delay, Config::FRAME_DELAY);
}

#[test]
fn test_gif_sink_writes_a_gif() {
    let mut grid = make_grid(&["     ", " ooo ", "     "]);
    let animation = generate(&mut grid, 2, 8).unwrap();
    let mut buffer = Vec::new();
    write_gif(&mut buffer, &animation).unwrap();
    assert!(buffer.starts_with(b"GIF89a"));
}
