use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rdev::{listen, EventType, Key};

use crate::core::ports::CancellationSignal;
use crate::global_constants::{LOG_TAG_KEYBOARD, MESSAGE_QUIT_KEY_DETECTED};

/// Watches the keyboard from a background thread and latches a cancellation
/// flag when the quit key is pressed. The latch is never cleared, so a press
/// between two polls still stops the run.
pub struct RdevCancellationListener {
    cancellation_flag: Arc<AtomicBool>,
}

impl RdevCancellationListener {
    pub fn initialize() -> Self {
        log::debug!("{} initializing quit-key listener", LOG_TAG_KEYBOARD);

        let cancellation_flag = Arc::new(AtomicBool::new(false));
        Self::spawn_keyboard_listener_thread(Arc::clone(&cancellation_flag));

        Self { cancellation_flag }
    }

    fn spawn_keyboard_listener_thread(cancellation_flag: Arc<AtomicBool>) {
        std::thread::spawn(move || {
            log::info!(
                "{} Starting global keyboard listener thread",
                LOG_TAG_KEYBOARD
            );
            if let Err(e) = listen(move |event| {
                if event_requests_cancellation(&event.event_type) {
                    log::info!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_QUIT_KEY_DETECTED);
                    cancellation_flag.store(true, Ordering::SeqCst);
                }
            }) {
                log::error!(
                    "{} Failed to start keyboard listener: {:?}. The quit key will not stop the batch early.",
                    LOG_TAG_KEYBOARD,
                    e
                );
            }
        });
    }
}

fn event_requests_cancellation(event_type: &EventType) -> bool {
    matches!(event_type, EventType::KeyPress(Key::KeyQ))
}

impl CancellationSignal for RdevCancellationListener {
    fn is_cancellation_requested(&self) -> bool {
        self.cancellation_flag.load(Ordering::SeqCst)
    }
}
