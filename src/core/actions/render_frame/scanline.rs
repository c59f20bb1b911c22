use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::core::actions::render_frame::ports::cancel_token::{CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::progress_sink::ProgressSink;

/// Runs `render_row` over every `row_width`-wide slice of `buffer` on
/// rayon's pool.
///
/// Rows are written at disjoint indices, so the pass needs no locking; the
/// only shared state is the atomic progress counter. Returns once every row
/// has completed, which is the barrier the caller's next phase relies on.
/// The cancel token is polled at each row start; on cancellation, rows
/// already dispatched finish but no further rows begin.
pub fn scan_rows<T, F, C, P>(
    buffer: &mut [T],
    row_width: usize,
    cancel: &C,
    progress: &P,
    render_row: F,
) -> Result<(), Cancelled>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
    C: CancelToken,
    P: ProgressSink,
{
    let total_rows = buffer.len() / row_width;
    let completed = AtomicUsize::new(0);

    buffer
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(row_index, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            render_row(row_index, row);

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress.rows_completed(done, total_rows);
            Ok(())
        })
}
