// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only accumulator for subprocess output.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

/// Shared, append-only text buffer fed by the stdout reader task.
///
/// The sole writer is the stream-consumption path; any number of readers
/// take snapshots. Once appended, text is never removed or reordered, so a
/// later snapshot is always a superstring extension of an earlier one.
#[derive(Clone, Default, Debug)]
pub struct OutputBuffer {
    inner: Arc<Inner>,
}

#[derive(Default, Debug)]
struct Inner {
    state: Mutex<State>,
    appended: Notify,
}

#[derive(Default, Debug)]
struct State {
    text: String,
    /// Trailing bytes of an incomplete UTF-8 sequence, held back until the
    /// next chunk completes them.
    partial: Vec<u8>,
    closed: bool,
}

impl State {
    /// Move the complete UTF-8 prefix of `partial` into `text`.
    ///
    /// Invalid bytes become U+FFFD; an incomplete trailing sequence stays
    /// pending so a multi-byte character split across chunks is never
    /// mangled.
    fn decode_pending(&mut self) {
        loop {
            match std::str::from_utf8(&self.partial) {
                Ok(valid) => {
                    self.text.push_str(valid);
                    self.partial.clear();
                    return;
                }
                Err(e) => {
                    let valid_len = e.valid_up_to();
                    if let Ok(valid) = std::str::from_utf8(&self.partial[..valid_len]) {
                        self.text.push_str(valid);
                    }
                    match e.error_len() {
                        Some(bad_len) => {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            self.partial.drain(..valid_len + bad_len);
                        }
                        None => {
                            // Incomplete sequence at the tail; keep it pending.
                            self.partial.drain(..valid_len);
                            return;
                        }
                    }
                }
            }
        }
    }
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw chunk from the subprocess stream and wake waiters.
    ///
    /// Chunk boundaries are arbitrary, including zero-length chunks.
    pub fn append(&self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        {
            let mut state = self.inner.state.lock();
            state.partial.extend_from_slice(chunk);
            state.decode_pending();
        }
        self.inner.appended.notify_waiters();
    }

    /// Mark end-of-stream.
    ///
    /// Any dangling partial sequence is flushed as U+FFFD; after this no
    /// further appends arrive and pending waiters are woken a final time.
    pub fn close(&self) {
        {
            let mut state = self.inner.state.lock();
            if !state.partial.is_empty() {
                state.text.push(char::REPLACEMENT_CHARACTER);
                state.partial.clear();
            }
            state.closed = true;
        }
        self.inner.appended.notify_waiters();
    }

    /// Whether the stream has ended.
    pub fn is_closed(&self) -> bool {
        self.inner.state.lock().closed
    }

    /// Buffer contents at the instant of the call. Pure read.
    pub fn snapshot(&self) -> String {
        self.inner.state.lock().text.clone()
    }

    /// Decoded length in bytes.
    pub fn len(&self) -> usize {
        self.inner.state.lock().text.len()
    }

    /// Whether nothing has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve on the next append or close.
    pub(crate) async fn changed(&self) {
        self.inner.appended.notified().await;
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
