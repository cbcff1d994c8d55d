// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise kerning from the legacy `kern` table, shared by the real backends.
//!
//! Horizontal format 0 (pair list) and format 2 (class array) subtables are flattened into
//! pairs. State machine, format 3, cross-stream and variation subtables are skipped.

use read_fonts::tables::kern::{Kern, Subtable, SubtableKind};
use read_fonts::types::GlyphId;
use read_fonts::{FontRef, TableProvider as _};

use super::GlyphIndex;
use crate::kerning::KerningEntry;

/// Every kerning pair in face `face_index` of a font file, or nothing if it has no `kern` table.
pub(crate) fn kerning_table(data: &[u8], face_index: u32) -> Vec<KerningEntry> {
    let Ok(font) = FontRef::from_index(data, face_index) else {
        return Vec::new();
    };
    match font.kern() {
        Ok(kern) => kerning_pairs(&kern),
        Err(err) => {
            log::trace!("no usable kern table: {err}");
            Vec::new()
        }
    }
}

/// Flattens the usable subtables of a `kern` table, in table order.
///
/// A malformed subtable is skipped; the others are still read.
pub(crate) fn kerning_pairs(kern: &Kern<'_>) -> Vec<KerningEntry> {
    let mut entries = Vec::new();
    for subtable in kern.subtables() {
        let subtable = match subtable {
            Ok(subtable) => subtable,
            Err(err) => {
                log::trace!("stopping at unreadable kern subtable: {err}");
                break;
            }
        };
        if !is_pairwise_horizontal(&subtable) {
            continue;
        }
        match subtable.kind() {
            Ok(SubtableKind::Format0(pairs)) => {
                entries.extend(pairs.pairs().iter().map(|pair| KerningEntry {
                    left: GlyphIndex(pair.left().into()),
                    right: GlyphIndex(pair.right().into()),
                    value: pair.value().into(),
                }));
            }
            Ok(SubtableKind::Format2(classes)) => {
                let glyphs = |first: u16, count: u16| {
                    let first = u32::from(first);
                    first..first + u32::from(count)
                };
                let left = &classes.left_offset_table;
                let right = &classes.right_offset_table;
                for l in glyphs(left.first_glyph().to_u16(), left.n_glyphs()) {
                    for r in glyphs(right.first_glyph().to_u16(), right.n_glyphs()) {
                        match classes.kerning(GlyphId::new(l), GlyphId::new(r)) {
                            Some(value) if value != 0 => entries.push(KerningEntry {
                                left: GlyphIndex(l),
                                right: GlyphIndex(r),
                                value,
                            }),
                            _ => {}
                        }
                    }
                }
            }
            Ok(_) => log::trace!("skipping kern subtable without a pair list"),
            Err(err) => log::trace!("skipping malformed kern subtable: {err}"),
        }
    }
    entries
}

fn is_pairwise_horizontal(subtable: &Subtable<'_>) -> bool {
    subtable.is_horizontal()
        && !subtable.is_cross_stream()
        && !subtable.is_variable()
        && !subtable.is_state_machine()
}
