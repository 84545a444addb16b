//! Banner rotation: a pure state machine plus an async timer task.
//!
//! Every `display_interval` the rotator enters a fading state; after
//! `fade_duration` it advances to the next ad (modulo the list length)
//! and clears the fade. Lists of zero or one ads never start a timer.
//! The task stops through its [`CancellationToken`] so no tick can act
//! on stale state after teardown.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use compass_types::config::RotationConfig;

/// Rotation position over a fixed list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotatorState {
    index: usize,
    fading: bool,
}

impl RotatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// The display interval elapsed; the current ad starts fading out.
    pub fn begin_fade(&mut self) {
        self.fading = true;
    }

    /// The fade finished; move to the next ad and clear the fade.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
        self.fading = false;
    }
}

/// Whether a list of `len` ads rotates at all.
pub fn should_rotate(len: usize) -> bool {
    len > 1
}

/// A tick of the rotation timer, as observed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationEvent {
    /// The current ad began fading out.
    FadeStarted,
    /// The fade completed; `index` is now on screen.
    Advanced { index: usize },
}

/// Handle to a running rotation task.
pub struct RotatorHandle {
    events: mpsc::Receiver<RotationEvent>,
    cancel: CancellationToken,
}

impl RotatorHandle {
    /// Next rotation event, or `None` once the task has stopped.
    pub async fn recv(&mut self) -> Option<RotationEvent> {
        self.events.recv().await
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start the rotation timer for a list of `len` ads.
///
/// Returns `None` when the list has zero or one entries: nothing to
/// rotate, no timer, and the fading state is never entered.
pub fn spawn_rotator(len: usize, config: &RotationConfig) -> Option<RotatorHandle> {
    if !should_rotate(len) {
        return None;
    }

    let display_interval = config.display_interval();
    let fade_duration = config.fade_duration();
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        let mut state = RotatorState::new();
        loop {
            tokio::select! {
                _ = task_cancel.cancelled() => break,
                _ = tokio::time::sleep(display_interval) => {}
            }

            state.begin_fade();
            if tx.send(RotationEvent::FadeStarted).await.is_err() {
                break;
            }

            tokio::select! {
                _ = task_cancel.cancelled() => break,
                _ = tokio::time::sleep(fade_duration) => {}
            }

            state.advance(len);
            if tx
                .send(RotationEvent::Advanced {
                    index: state.index(),
                })
                .await
                .is_err()
            {
                break;
            }
        }
    });

    Some(RotatorHandle { events: rx, cancel })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_advances_modulo_length() {
        let mut state = RotatorState::new();
        state.begin_fade();
        assert!(state.is_fading());

        state.advance(3);
        assert_eq!(state.index(), 1);
        assert!(!state.is_fading());

        state.advance(3);
        state.advance(3);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn zero_length_advance_stays_put() {
        let mut state = RotatorState::new();
        state.advance(0);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn short_lists_do_not_rotate() {
        assert!(!should_rotate(0));
        assert!(!should_rotate(1));
        assert!(should_rotate(2));
    }

    #[tokio::test]
    async fn no_timer_for_zero_or_one_ads() {
        let config = RotationConfig::default();
        assert!(spawn_rotator(0, &config).is_none());
        assert!(spawn_rotator(1, &config).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_fades_then_advances_and_wraps() {
        let config = RotationConfig::default();
        let mut handle = spawn_rotator(3, &config).expect("timer should start");

        assert_eq!(handle.recv().await, Some(RotationEvent::FadeStarted));
        assert_eq!(
            handle.recv().await,
            Some(RotationEvent::Advanced { index: 1 })
        );
        assert_eq!(handle.recv().await, Some(RotationEvent::FadeStarted));
        assert_eq!(
            handle.recv().await,
            Some(RotationEvent::Advanced { index: 2 })
        );
        assert_eq!(handle.recv().await, Some(RotationEvent::FadeStarted));
        assert_eq!(
            handle.recv().await,
            Some(RotationEvent::Advanced { index: 0 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_stream() {
        let config = RotationConfig::default();
        let mut handle = spawn_rotator(2, &config).expect("timer should start");

        handle.cancel();
        // Drain anything already in flight; the channel must then close.
        while let Some(_event) = handle.recv().await {}
    }
}
