use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

pub enum AppEvent {
    Key(KeyEvent),
    /// No input within the tick rate. Carries the time the tick fired, which
    /// drives the scheduler.
    Tick(Instant),
    Resize,
}

/// Terminal input pump. A background thread polls crossterm and forwards
/// key presses, resizes and idle ticks over a channel.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        // Release/repeat events only show up with keyboard
                        // enhancement; the forms act on presses.
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(Event::Resize(_, _)) => AppEvent::Resize,
                        Ok(_) => continue,
                        Err(err) => {
                            debug!(%err, "terminal read failed");
                            continue;
                        }
                    }
                } else {
                    AppEvent::Tick(Instant::now())
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
