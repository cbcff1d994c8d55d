// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving codepoints to glyphs in the best matching atlas.

use font_atlas::{BakeSettings, CodepointRange, FontStyle};

use crate::test_name;
use crate::util::{assert_close, latin_font, TestEnv};

#[test]
fn lookup_prefers_nearest_size() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    env.bake_sizes(&[10.0, 12.0, 16.0]);

    let (glyph, atlas) = env
        .registry
        .resolve('g'.into(), 13.0, FontStyle::empty())
        .unwrap();
    assert_eq!(atlas.size(), 12.0);
    assert_eq!(glyph.codepoint, u32::from('g'));

    let size_for = |size| {
        env.registry
            .resolve('g'.into(), size, FontStyle::empty())
            .unwrap()
            .1
            .size()
    };
    assert_eq!(size_for(4.0), 10.0);
    assert_eq!(size_for(15.0), 16.0);
    assert_eq!(size_for(100.0), 16.0);
}

#[test]
fn lookup_breaks_size_ties_by_style() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    for style in [FontStyle::empty(), FontStyle::BOLD, FontStyle::ITALIC] {
        env.bake(BakeSettings::new(12.0).with_style(style), &[CodepointRange::ASCII])
            .unwrap();
    }
    let style_for = |style| {
        env.registry
            .resolve('x'.into(), 12.0, style)
            .unwrap()
            .1
            .style()
    };
    assert_eq!(style_for(FontStyle::BOLD), FontStyle::BOLD);
    assert_eq!(style_for(FontStyle::ITALIC), FontStyle::ITALIC);
    assert_eq!(style_for(FontStyle::empty()), FontStyle::empty());
    assert_eq!(style_for(FontStyle::BOLD | FontStyle::UNDERLINE), FontStyle::BOLD);
}

#[test]
fn lookup_skips_atlases_without_the_codepoint() {
    let font = latin_font().covering(0x400, 0x4FF);
    let mut env = TestEnv::new(test_name!(), &font);
    env.bake_sizes(&[12.0]);
    env.bake(BakeSettings::new(24.0), &[CodepointRange::CYRILLIC])
        .unwrap();

    let (glyph, atlas) = env
        .registry
        .resolve(0x416, 12.0, FontStyle::empty())
        .unwrap();
    assert_eq!(atlas.size(), 24.0);
    assert_eq!(glyph.codepoint, 0x416);
    assert!(env.registry.resolve(0x3042, 12.0, FontStyle::empty()).is_none());
}

#[test]
fn lookup_line_height_uses_nearest_atlas() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    assert_eq!(env.registry.line_height(20.0, FontStyle::empty()), None);
    env.bake_sizes(&[10.0, 20.0]);
    assert_close(env.registry.line_height(19.0, FontStyle::empty()).unwrap(), 22.0);
    assert_close(env.registry.line_height(9.0, FontStyle::BOLD).unwrap(), 11.0);
}

#[test]
fn lookup_defaults_come_from_first_atlas() {
    let mut env = TestEnv::new(test_name!(), &latin_font());
    assert!(env.registry.default_atlas().is_none());
    env.bake(BakeSettings::new(18.0).with_style(FontStyle::ITALIC), &[CodepointRange::ASCII])
        .unwrap();
    env.bake_sizes(&[12.0]);
    assert_eq!(env.registry.default_size(), Some(18.0));
    assert_eq!(env.registry.default_style(), Some(FontStyle::ITALIC));
}

#[test]
fn lookup_matches_font_file_style() {
    let mut env = TestEnv::with_style(test_name!(), &latin_font(), FontStyle::BOLD);
    env.bake_sizes(&[12.0]);
    let (_, atlas) = env
        .registry
        .resolve('x'.into(), 12.0, FontStyle::BOLD)
        .unwrap();
    assert_eq!(atlas.style(), FontStyle::BOLD);
}
