//! Sand Canvas - headless demo run

use glam::Vec2;
use sandcanvas::App;
use sandcanvas::config::CanvasConfig;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Sand Canvas");

    let mut app = App::new(CanvasConfig::load());
    let mut rng = rand::thread_rng();

    // Pour from above the center for a second's worth of frames
    let spout = Vec2::new(app.config().viewport_width as f32 / 2.0, 60.0);
    app.pointer_pressed(spout);
    for _ in 0..60 {
        app.tick(&mut rng);
    }
    app.pointer_released();
    log::info!("poured {} grains", app.particle_count());

    // Let the pile settle
    for frame in 0..600 {
        let report = app.tick(&mut rng);
        if !report.flowing {
            log::info!("pile settled after {} more frames", frame + 1);
            break;
        }
    }

    let stats = app.stats();
    log::info!(
        "done: {} grains on canvas, {} cell moves, {} spawns",
        app.particle_count(),
        stats.cells_moved,
        stats.cells_spawned
    );

    Ok(())
}
