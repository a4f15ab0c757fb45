// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suspend-until-substring matching over the output buffer.
//!
//! The matcher re-checks the buffer on every append event, with a coarse
//! fallback tick covering appends that race waiter registration. Matching is
//! exact and case-sensitive; callers construct the expected text including
//! whitespace and indentation. Nothing consumes matched text, so the same
//! buffer region can satisfy any number of overlapping waits.

use std::time::Duration;

use tokio::time::{timeout, Instant};

use crate::buffer::OutputBuffer;

/// Default deadline for `wait_for` calls.
///
/// The original default is not observable from the tool's behavior, so the
/// harness fixes one: deadline-based, generous enough for a loaded CI worker
/// while keeping genuine failures fast.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback re-check interval for appends that raced waiter registration.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Outcome of a single wait operation.
#[derive(Debug)]
pub(crate) enum WaitOutcome {
    /// The snippet is present in the buffer.
    Matched,
    /// Deadline elapsed; carries the buffer captured at failure time.
    Timeout(String),
    /// Stream ended without the snippet appearing; no more appends can come.
    Closed(String),
}

/// Wait until `snippet` is a substring of the buffer, the stream closes, or
/// `deadline` elapses.
///
/// Checks immediately on entry, so a snippet already present returns without
/// suspending. Waiters are independent; none holds any lock while suspended,
/// and a timeout leaves no listener behind.
pub(crate) async fn wait_for(
    buffer: &OutputBuffer,
    snippet: &str,
    deadline: Duration,
) -> WaitOutcome {
    let deadline = Instant::now() + deadline;
    loop {
        let snapshot = buffer.snapshot();
        if snapshot.contains(snippet) {
            return WaitOutcome::Matched;
        }
        if buffer.is_closed() {
            return WaitOutcome::Closed(snapshot);
        }
        let now = Instant::now();
        if now >= deadline {
            return WaitOutcome::Timeout(snapshot);
        }
        // Wake on the next append, or after the fallback tick, whichever
        // comes first. Never sleeps past the deadline.
        let tick = POLL_INTERVAL.min(deadline - now);
        let _ = timeout(tick, buffer.changed()).await;
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
