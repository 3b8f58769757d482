//! Drift Demo
//!
//! Headless driver for the carousel engine: builds a fake page of card
//! rows, binds the engine, synthesizes a mouse flick and a touch flick,
//! then runs the cooperative tick loop at ~60 Hz until every surface has
//! settled.
//!
//! Usage:
//!   drift-demo                        # three rows, 40 px/tick flick
//!   drift-demo --rows 5 --velocity 80 # bigger page, harder throw
//!   drift-demo --config feel.toml     # override decay/epsilon

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use drift_carousel::{CarouselEngine, SurfaceQuery, DEFAULT_SELECTOR};
use drift_core::SharedSurface;
use drift_platform::{MouseButton, MouseEvent, TouchEvent, TouchPoint};
use smallvec::smallvec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod page;

use config::DemoConfig;
use page::DemoPage;

#[derive(Parser)]
#[command(name = "drift-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless drag-scroll demonstration", long_about = None)]
struct Cli {
    /// Selector the engine binds
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Number of card rows on the page
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Flick velocity in pixels per tick
    #[arg(long, default_value_t = 40.0)]
    velocity: f32,

    /// Optional TOML file overriding decay/epsilon
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let overrides = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let mut page = DemoPage::new();
    for i in 0..cli.rows {
        page.add_row("card-carousel", &format!("row-{i}"), 500.0);
    }

    let mut engine = CarouselEngine::new(overrides.drag_config());
    engine.init_with_selector(&page, &cli.selector);
    let config = engine.config();
    info!(
        bound = engine.bound_count(),
        selector = %cli.selector,
        decay = config.decay_per_step,
        epsilon = config.stop_epsilon,
        "engine initialized"
    );

    if engine.bound_count() == 0 {
        info!("no surfaces matched; nothing to drive");
        return Ok(());
    }

    let rows = page.select(&cli.selector);
    mouse_flick(&mut engine, &rows[0], cli.velocity);
    if let Some(second) = rows.get(1) {
        touch_flick(&mut engine, second, -cli.velocity);
    }

    // Cooperative refresh loop at ~60 Hz
    let mut ticks = 0u32;
    while engine.tick() {
        ticks += 1;
        if ticks % 15 == 0 {
            for (name, offset) in page.offsets() {
                tracing::debug!(row = %name, offset, "coasting");
            }
        }
        thread::sleep(Duration::from_micros(16_667));
    }

    info!(ticks, "all surfaces settled");
    for (name, offset) in page.offsets() {
        println!("{name}: offset {offset:.1}");
    }

    Ok(())
}

/// Press, pull four ticks' worth of distance, release: a mouse throw
fn mouse_flick(engine: &mut CarouselEngine, row: &SharedSurface, velocity: f32) {
    let mut x = 100.0;
    engine.handle_mouse(
        row,
        &MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x,
            y: 50.0,
            timestamp_ms: 0.0,
        },
    );
    for step in 1..=4 {
        x += velocity;
        engine.handle_mouse(
            row,
            &MouseEvent::Moved {
                x,
                y: 50.0,
                timestamp_ms: f64::from(step) * 16.0,
            },
        );
    }
    engine.handle_mouse(
        row,
        &MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x,
            y: 50.0,
            timestamp_ms: 80.0,
        },
    );
}

/// The same throw through the touch family, one finger
fn touch_flick(engine: &mut CarouselEngine, row: &SharedSurface, velocity: f32) {
    let finger = |x: f32| TouchPoint { id: 1, x, y: 60.0 };

    let mut x = 400.0;
    engine.handle_touch(
        row,
        &TouchEvent::Started {
            touches: smallvec![finger(x)],
            timestamp_ms: 0.0,
        },
    );
    for step in 1..=4 {
        x += velocity;
        engine.handle_touch(
            row,
            &TouchEvent::Moved {
                touches: smallvec![finger(x)],
                timestamp_ms: f64::from(step) * 16.0,
            },
        );
    }
    engine.handle_touch(
        row,
        &TouchEvent::Ended {
            touches: smallvec![],
            timestamp_ms: 80.0,
        },
    );
}
