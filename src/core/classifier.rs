//! Per-file verdict: does the text contain an unlocalized literal that is
//! not exempted by markers?

use super::{
    literal::contains_unlocalized_literal,
    markers::{Markers, SuppressionPolicy},
    regions::{active_texts, resolve_regions},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Contains an unlocalized literal in checked text.
    Flagged,
    Clean,
}

impl Verdict {
    pub fn is_flagged(self) -> bool {
        self == Verdict::Flagged
    }
}

impl From<bool> for Verdict {
    fn from(flagged: bool) -> Self {
        if flagged {
            Verdict::Flagged
        } else {
            Verdict::Clean
        }
    }
}

/// Classifies file text using a fixed set of markers and a suppression policy.
///
/// Holds no per-file state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    markers: Markers,
    policy: SuppressionPolicy,
}

impl Classifier {
    pub fn new(markers: Markers, policy: SuppressionPolicy) -> Self {
        Self { markers, policy }
    }

    pub fn policy(&self) -> SuppressionPolicy {
        self.policy
    }

    pub fn classify(&self, text: &str) -> Verdict {
        if text.contains(&self.markers.localized_call) || text.contains(&self.markers.ignore_file)
        {
            return Verdict::Clean;
        }

        match self.policy {
            SuppressionPolicy::RegionExclusion => self.classify_regions(text),
            SuppressionPolicy::PairPresence => self.classify_pair_presence(text),
        }
    }

    fn classify_regions(&self, text: &str) -> Verdict {
        let regions = resolve_regions(text, &self.markers.disable, &self.markers.enable);
        active_texts(text, &regions)
            .any(contains_unlocalized_literal)
            .into()
    }

    /// Flags a matching file unless every disable token is followed by an
    /// enable token. Where the literals sit relative to the markers is ignored.
    fn classify_pair_presence(&self, text: &str) -> Verdict {
        if !contains_unlocalized_literal(text) {
            return Verdict::Clean;
        }

        let Markers {
            disable, enable, ..
        } = &self.markers;
        if disable.is_empty() {
            return Verdict::Flagged;
        }

        let mut cursor = 0;
        let mut seen_disable = false;
        let mut enabled = true;

        while let Some(offset) = text[cursor..].find(disable.as_str()) {
            seen_disable = true;
            enabled = false;
            cursor += offset + disable.len();

            if enable.is_empty() {
                continue;
            }
            if let Some(offset) = text[cursor..].find(enable.as_str()) {
                enabled = true;
                cursor += offset + enable.len();
            }
        }

        (!seen_disable || !enabled).into()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        let variant = super::markers::MarkerVariant::default();
        Self::new(variant.markers(), variant.default_policy())
    }
}
