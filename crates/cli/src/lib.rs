// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser-recorder codegen CLI simulator.
//!
//! A test crate that simulates an interactive code-generation recorder: it
//! emits a Playwright JavaScript script incrementally to stdout while a
//! scripted driver performs actions on stdin, and appends a teardown block at
//! shutdown. Emission order, field ordering, and timing match the real
//! recorder, which makes the binary a deterministic subject for streaming
//! output assertions without a browser in the loop.

pub mod actions;
pub mod cli;
pub mod devices;
pub mod recorder;
pub mod report;
pub mod script;
pub mod storage;
