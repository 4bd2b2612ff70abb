//! Builds the same small UI with each platform's widget factory and prints
//! both trees, Windows first.

use std::io::{self, Write};

use anyhow::Result;

use widget_factory::core::{
    builder::create_ui,
    factory::{factory_for, Platform},
};

/// Print a header and a freshly built tree for each platform.
fn run<W: Write>(out: &mut W, platforms: &[Platform]) -> Result<()> {
    for (i, &platform) in platforms.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {platform} UI ===")?;
        let ui = create_ui(factory_for(platform).as_ref());
        ui.render_to(out, 0)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    tracing::debug!(platforms = ?Platform::ALL, "rendering");
    let stdout = io::stdout();
    run(&mut stdout.lock(), Platform::ALL)
}
