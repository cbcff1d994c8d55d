// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kerning between resolved glyphs.

use font_atlas::{BakeError, BakeSettings, CanvasBounds, CodepointRange, FontStyle};
use font_atlas_dev::{pictographs, PICTOGRAPH_START};

use crate::test_name;
use crate::util::{assert_close, latin_font, TestEnv};

fn kern(env: &TestEnv, left: char, right: char, size: f32) -> f32 {
    env.registry
        .kerning_between(left.into(), right.into(), size, FontStyle::empty())
}

#[test]
fn kerning_is_order_sensitive() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake(
        BakeSettings::new(20.0).with_kerning_table(),
        &[CodepointRange::ASCII],
    )
    .unwrap();
    assert_eq!(env.registry.kerning_table().len(), 3);

    assert_close(kern(&env, 'A', 'V', 20.0), -1.6);
    assert_close(kern(&env, 'V', 'A', 20.0), -0.8);
    assert_close(kern(&env, 'T', 'o', 20.0), -1.2);
    assert_eq!(kern(&env, 'A', 'A', 20.0), 0.0);
}

#[test]
fn kerning_scales_with_the_atlas() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake_sizes(&[10.0, 40.0]);
    env.registry.fill_kerning_table().unwrap();
    assert_close(kern(&env, 'A', 'V', 10.0), -0.8);
    assert_close(kern(&env, 'A', 'V', 40.0), -3.2);
}

#[test]
fn kerning_requires_equal_scales() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake(BakeSettings::new(12.0), &[CodepointRange::single('A'.into())])
        .unwrap();
    env.bake(
        BakeSettings::new(16.0).with_kerning_table(),
        &[CodepointRange::single('V'.into())],
    )
    .unwrap();
    // 'A' only exists at 12px and 'V' only at 16px.
    assert_eq!(kern(&env, 'A', 'V', 12.0), 0.0);
    assert_eq!(kern(&env, 'V', 'A', 16.0), 0.0);
}

#[test]
fn kerning_ignores_custom_and_unknown_glyphs() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake_in(
        BakeSettings::new(20.0).with_kerning_table(),
        CanvasBounds::default(),
        &[CodepointRange::ASCII],
        &[pictographs(1, 8)],
    )
    .unwrap();
    let kern_codepoints =
        |a: u32, b: u32| env.registry.kerning_between(a, b, 20.0, FontStyle::empty());
    assert_eq!(kern_codepoints(PICTOGRAPH_START, 'V'.into()), 0.0);
    assert_eq!(kern_codepoints('A'.into(), 0x416), 0.0);
}

#[test]
fn kerning_is_empty_until_filled() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake_sizes(&[20.0]);
    assert!(env.registry.kerning_table().is_empty());
    assert_eq!(kern(&env, 'A', 'V', 20.0), 0.0);

    assert_eq!(env.registry.fill_kerning_table(), Ok(3));
    assert_eq!(env.registry.fill_kerning_table(), Ok(3));
}

#[test]
fn kerning_needs_a_font() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.registry.remove_font();
    assert_eq!(env.registry.fill_kerning_table(), Err(BakeError::MissingFontData));
}
