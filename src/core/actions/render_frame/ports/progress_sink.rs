/// Receives `(completed, total)` row notifications from the escape pass.
///
/// Purely instrumentation: implementations must tolerate out-of-order calls,
/// since rows finish in whatever order the scheduler runs them. The
/// `completed` value itself is monotonic (it comes from one shared atomic
/// counter).
pub trait ProgressSink: Send + Sync {
    fn rows_completed(&self, completed: usize, total: usize);
}

/// Discards progress. The default for passes nobody watches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    #[inline]
    fn rows_completed(&self, _completed: usize, _total: usize) {}
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    #[inline]
    fn rows_completed(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}
