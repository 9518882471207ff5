//! Shortest-job-first selection
//!
//! Scans the whole level, O(queue length). Ties on `remaining_time` go to the
//! process inserted earliest, so the scan must keep the first minimum.

use crate::models::Process;
use std::collections::VecDeque;

/// Position of the waiting process with the least remaining time
pub(super) fn select_shortest(queue: &VecDeque<Process>) -> Option<usize> {
    queue
        .iter()
        .enumerate()
        .min_by_key(|(_, process)| process.remaining_time())
        .map(|(position, _)| position)
}
