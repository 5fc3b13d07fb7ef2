// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::session::Session;
use crate::source::TextSource;
use notify::{Event, RecursiveMode, Watcher};
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::mpsc::channel;

/// Watch a single file and call `on_update` with the session after every
/// successful re-analysis.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by writing a temporary file and renaming it over the original
/// keep being picked up. Only events that name the watched file count.
///
/// Bursts of events are coalesced: after the first event the loop sleeps for
/// `config.watch_interval`, drains the queue, then reloads once. A failed
/// reload keeps the previous analysis and waits for the next change.
///
/// Runs until `on_update` returns `ControlFlow::Break` or the watcher shuts
/// down.
///
/// # Errors
///
/// Returns `Config` if the configuration does not name exactly one file, and
/// `Watch` if the watcher cannot be created. The initial load error is
/// returned as well.
pub fn watch_loop<F>(config: &Config, mut on_update: F) -> Result<()>
where
    F: FnMut(&Session) -> ControlFlow<()>,
{
    let [TextSource::Path(path)] = config.sources.as_slice() else {
        return Err(EngineError::Config(
            "--watch needs exactly one file path".to_string(),
        ));
    };
    let Some(file_name) = path.file_name().map(ToOwned::to_owned) else {
        return Err(EngineError::Config(format!(
            "--watch needs a file path, got {}",
            path.display()
        )));
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut session = Session::new(config.analysis);
    session.load(TextSource::Path(path.clone()))?;

    let (tx, rx) = channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()))
            {
                let _ = tx.send(event);
            }
        }
        Err(e) => log::warn!("watch error: {e:?}"),
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log::info!("watching {}", path.display());
    if on_update(&session).is_break() {
        return Ok(());
    }

    let debounce_interval = config.watch_interval;

    while rx.recv().is_ok() {
        std::thread::sleep(debounce_interval);
        while rx.try_recv().is_ok() {}

        match session.reload() {
            Ok(generation) => {
                log::debug!("re-analysed {} (generation {generation})", path.display());
                if on_update(&session).is_break() {
                    break;
                }
            }
            Err(e) => log::warn!("keeping previous analysis: {e}"),
        }
    }

    Ok(())
}
