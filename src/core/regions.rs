//! Splits file text into active and suppressed regions.
//!
//! A suppressed region starts at a disable token and ends after the next
//! enable token. Resolution is strictly left to right: each disable pairs with
//! the first enable after it, and nesting is not supported. A disable token
//! without a following enable suppresses the rest of the file.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Active,
    Suppressed,
}

/// A byte span of the file tagged active or suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub span: Range<usize>,
}

impl Region {
    fn new(kind: RegionKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn is_active(&self) -> bool {
        self.kind == RegionKind::Active
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

/// Partition `text` into contiguous regions covering `0..text.len()`.
///
/// Empty spans are omitted, so empty text yields no regions. An empty
/// `disable` token leaves the whole text active.
pub fn resolve_regions(text: &str, disable: &str, enable: &str) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut cursor = 0;

    if !disable.is_empty() {
        while let Some(offset) = text[cursor..].find(disable) {
            let disable_start = cursor + offset;
            let disable_end = disable_start + disable.len();
            push_region(&mut regions, RegionKind::Active, cursor..disable_start);

            match text[disable_end..].find(enable) {
                Some(offset) if !enable.is_empty() => {
                    let enable_end = disable_end + offset + enable.len();
                    push_region(&mut regions, RegionKind::Suppressed, disable_start..enable_end);
                    cursor = enable_end;
                }
                _ => {
                    push_region(&mut regions, RegionKind::Suppressed, disable_start..text.len());
                    return regions;
                }
            }
        }
    }

    push_region(&mut regions, RegionKind::Active, cursor..text.len());
    regions
}

/// Iterate over the text of active regions in order.
pub fn active_texts<'a>(text: &'a str, regions: &'a [Region]) -> impl Iterator<Item = &'a str> {
    regions
        .iter()
        .filter(|region| region.is_active())
        .map(move |region| region.text(text))
}

fn push_region(regions: &mut Vec<Region>, kind: RegionKind, span: Range<usize>) {
    if !span.is_empty() {
        regions.push(Region::new(kind, span));
    }
}
