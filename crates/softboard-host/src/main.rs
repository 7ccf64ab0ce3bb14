//! Softboard demo host.
//!
//! Wires the standard layout, the in-memory document sink, and the logging
//! renderer into a real [`KeyboardSession`], then drives a scripted typing
//! run exercising caps, screen switching, and deletion. In a production
//! embedding the `BufferTextSink` and `LoggingRenderer` are replaced by the
//! host's own `TextSink` / `Renderer` implementations; everything else runs
//! unchanged.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use softboard_core::layouts;
use softboard_host::{
    build_view, BufferTextSink, HostConfig, KeyboardSession, LoggingRenderer, Renderer, TextSink,
};

fn main() -> anyhow::Result<()> {
    // Host config; absent file yields defaults.
    let config = HostConfig::load(Path::new("softboard.toml"))?;

    // Initialise structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.session.log_level)),
        )
        .init();

    info!("softboard demo host starting");

    let table = Arc::new(layouts::standard());
    let sink = Arc::new(BufferTextSink::new());
    let renderer = Arc::new(LoggingRenderer::new());

    let mut session = KeyboardSession::with_policy(
        Arc::clone(&table),
        config.dispatch_policy(),
        Arc::clone(&sink) as Arc<dyn TextSink>,
        Arc::clone(&renderer) as Arc<dyn Renderer>,
    );

    // Scripted run: "hello WORLD 123", then fix a typo with delete.
    let script = [
        "h", "e", "l", "l", "o", "space", "capsLock", "w", "o", "r", "l", "d", "capsLock",
        "space", "switchScreen", "1", "2", "4", "delete", "3", "switchScreen", "enter", "Tr",
    ];

    for key_id in script {
        let (screen, _) = session.snapshot();
        session.handle_press(key_id, screen)?;
    }

    let (screen, caps_on) = session.snapshot();
    info!(?screen, caps_on, "script finished");

    // What a host renderer would draw next.
    let view = build_view(&table, screen, caps_on)?;
    info!(rows = view.rows.len(), "current screen view built");

    println!("typed document:\n{}", sink.contents());
    Ok(())
}
