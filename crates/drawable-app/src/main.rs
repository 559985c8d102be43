mod config;

use std::io::{self, Write};

use drawable::{Circle, DrawError, Shape, Shapes, Square, Triangle, draw, draw_all};
use eyre::WrapErr;
use tracing::info;

use config::{DemoConfig, USAGE};

fn main() -> eyre::Result<()> {
    let config = DemoConfig::from_args(std::env::args().skip(1))
        .wrap_err("invalid command line (try --help)")?;

    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(&config, &mut out).wrap_err("demo failed")?;
    out.flush().wrap_err("failed to flush stdout")?;

    info!("done");
    Ok(())
}

/// Wrap, copy, reassign and draw shapes, writing every render to `out`.
fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<(), DrawError> {
    let square = Shape::new(Square::new(config.side));
    let mut circle = Shape::new(Circle::new(config.radius));
    draw(&circle, out)?;

    let another_circle = circle.clone();
    circle.clone_from(&square);

    draw(&circle, out)?;
    draw(&square, out)?;
    draw(&another_circle, out)?;

    let shapes: Shapes = vec![
        Shape::new(Circle::new(config.small)),
        Shape::new(Square::new(config.small)),
        Shape::new(Triangle),
    ];
    info!(count = shapes.len(), "drawing collection");
    draw_all(&shapes, out)
}
