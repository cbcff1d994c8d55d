// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `font_atlas`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared utilities are compiled once.
//! - Tests are grouped by topic (backends, bake, lookup, kerning, registry). Put the topic at
//!   the start of a test's name: `bake_space_has_no_pixels` rather than
//!   `space_has_no_pixels_bake`.
//! - Most tests use the synthetic rasterizer from `font_atlas_dev`, so every pixel size is
//!   predictable. The `backends` tests bake the bundled DejaVu Serif with swash and skrifa.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod backends;
mod kerning;
mod lookup;
#[macro_use]
mod util;
