//! Weiler Session Demo — drives a clipping [`Session`] without a window.
//!
//! Usage:
//! ```text
//! cargo run --example session                     # overlapping squares
//! RUST_LOG=weiler=debug cargo run --example session
//! ```
//!
//! Each scripted click appends one vertex to the polygon being edited;
//! `finalize` plays the role of the Enter key.

use weiler::math::Point2;
use weiler::{ClipError, Color, Renderer, Session};

/// Prints each polygon as a closed loop of coordinates.
struct TextRenderer;

impl Renderer for TextRenderer {
    fn draw_polygon(&mut self, points: &[Point2], color: Color) {
        let ring: Vec<String> = points
            .iter()
            .chain(points.first())
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .collect();
        println!("{color:?}: {}", ring.join(" -> "));
    }
}

fn click_all(session: &mut Session, clicks: &[(f64, f64)]) -> Result<(), ClipError> {
    for &(x, y) in clicks {
        session.add_point(Point2::new(x, y))?;
    }
    Ok(())
}

fn main() -> Result<(), ClipError> {
    // Default: WARN for everything, INFO for weiler.
    // Override with RUST_LOG env var (e.g. RUST_LOG=weiler=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("weiler=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = Session::new();

    click_all(&mut session, &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])?;
    session.finalize()?;
    click_all(&mut session, &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])?;
    session.finalize()?;
    session.render(&mut TextRenderer);

    session.reset();
    println!("-- reset, mode = {:?}", session.mode());
    Ok(())
}
