use crate::assistant::GeminiClient;
use crate::config::Config;
use crate::effects::Effects;
use crate::images::UnsplashClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// HTTP calls are spawned on `runtime`; everything else happens on the
/// calling thread.
pub fn run(
    cfg: Config,
    config_path: &Path,
    runtime: Handle,
    initial_user: Option<String>,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);

    let assistant = GeminiClient::new(cfg.assistant)?;
    if !assistant.is_configured() {
        tracing::warn!("No assistant API key configured; replies will use the fallback text");
    }
    let images = UnsplashClient::new(cfg.images)?;
    if !images.is_configured() {
        tracing::warn!("No image search access key configured; searches will return nothing");
    }

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let effects = Effects::new(Arc::new(assistant), Arc::new(images), runtime, events.sender());

    let mut app = App::new(Some(effects));
    app.store_mut().subscribe(|state| {
        tracing::trace!(
            tasks = state.tasks.len(),
            images = state.images.len(),
            loading = state.is_loading(),
            authenticated = state.is_authenticated(),
            "State changed"
        );
    });
    if let Some(user) = initial_user.as_deref() {
        app.login_as(user);
    }

    tracing::info!(config = %config_path.display(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Dispatch(intent)) => app.dispatch(intent),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
