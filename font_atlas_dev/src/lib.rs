// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Font Atlas Dev
//!
//! This crate provides utilities for developing Font Atlas: a deterministic
//! [`SyntheticRasterizer`] that needs no font files, a real font for exercising the vector
//! backends, and canned bake inputs.

mod samples;
mod synthetic;

pub use samples::{pictographs, DEJAVU_SERIF, LATIN_RANGES, PICTOGRAPH_START};
pub use synthetic::{SyntheticFont, SyntheticRasterizer};
