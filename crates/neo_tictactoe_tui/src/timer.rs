//! Effect timers on the tokio runtime.

use neo_tictactoe::{EffectTimer, Expiry};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::debug;

/// Sends each expiry back over a channel once its delay has passed.
///
/// The receiving end is drained by the UI loop, so markers are only ever
/// cleared on the loop that owns the controller.
#[derive(Debug, Clone)]
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<Expiry>,
}

impl TokioTimer {
    /// Creates a timer and the receiver its expiries arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Expiry>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EffectTimer for TokioTimer {
    fn schedule(&mut self, expiry: Expiry) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            sleep(expiry.after).await;
            if tx.send(expiry).is_err() {
                debug!(?expiry, "Expiry receiver dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_tictactoe::EffectKind;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_expiries_arrive_in_deadline_order() {
        let (mut timer, mut rx) = TokioTimer::channel();
        timer.schedule(Expiry::new(EffectKind::Confetti, 1, Duration::from_millis(2500)));
        timer.schedule(Expiry::new(EffectKind::Bounce, 2, Duration::from_millis(400)));

        let first = rx.recv().await.expect("first expiry");
        assert_eq!(first.kind, EffectKind::Bounce);
        let second = rx.recv().await.expect("second expiry");
        assert_eq!(second.kind, EffectKind::Confetti);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_not_delivered_early() {
        let (mut timer, mut rx) = TokioTimer::channel();
        timer.schedule(Expiry::new(EffectKind::Shake, 1, Duration::from_millis(1000)));
        // Let the spawned task register its sleep before the clock moves.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        let expiry = rx.recv().await.expect("expiry");
        assert_eq!(expiry.generation, 1);
    }
}
