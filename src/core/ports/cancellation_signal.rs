/// Cooperative cancellation token, polled once per capture iteration.
pub trait CancellationSignal: Send + Sync {
    fn is_cancellation_requested(&self) -> bool;
}
