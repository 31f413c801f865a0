//! Repository status flags and their severity-ordered display categories

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

bitflags! {
    /// Independent facts about a working copy's synchronization state
    ///
    /// Bit positions encode severity: a higher numeric value is more actionable.
    /// The empty set is [`StatusFlags::CLEAN_AND_UP_TO_DATE`]; it is never stored
    /// alongside another flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StatusFlags: u8 {
        const OUTGOING_CHANGES = 0b001;
        const INCOMING_CHANGES = 0b010;
        const UNCOMMITTED_CHANGES = 0b100;
    }
}

impl StatusFlags {
    /// Base value before any condition is OR'd in
    pub const CLEAN_AND_UP_TO_DATE: Self = Self::empty();

    /// Composes flags from the three observed conditions
    pub fn from_conditions(uncommitted: bool, incoming: bool, outgoing: bool) -> Self {
        let mut flags = Self::CLEAN_AND_UP_TO_DATE;
        flags.set(Self::UNCOMMITTED_CHANGES, uncommitted);
        flags.set(Self::INCOMING_CHANGES, incoming);
        flags.set(Self::OUTGOING_CHANGES, outgoing);
        flags
    }

    pub fn is_clean(&self) -> bool {
        self.is_empty()
    }
}

/// Display grouping of a [`StatusFlags`] value, totally ordered by severity
///
/// Every one of the eight flag combinations is its own category. Ordering ranks
/// combinations by their most severe flag (uncommitted, then incoming, then
/// outgoing) and breaks ties on the next flag down, so clean sorts lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCategory(StatusFlags);

const CLEAN_LABEL: &str = "Clean and up to date";
const UNCOMMITTED_LABEL: &str = "Uncommitted changes";
const INCOMING_LABEL: &str = "Incoming changes";
const OUTGOING_LABEL: &str = "Outgoing changes";

impl StatusCategory {
    pub fn new(flags: StatusFlags) -> Self {
        Self(flags)
    }

    pub fn flags(&self) -> StatusFlags {
        self.0
    }

    /// Rank used for ordering; higher is more severe
    pub fn severity(&self) -> u8 {
        self.0.bits()
    }

    /// All categories, most severe first
    pub fn all_descending() -> Vec<StatusCategory> {
        let mut all: Vec<_> = (0..=StatusFlags::all().bits())
            .map(|bits| StatusCategory(StatusFlags::from_bits_truncate(bits)))
            .collect();
        all.sort_by(|a, b| b.cmp(a));
        all
    }

    /// Human readable label, e.g. "Uncommitted changes, outgoing changes"
    pub fn label(&self) -> String {
        if self.0.is_clean() {
            return CLEAN_LABEL.to_string();
        }

        let parts: Vec<&str> = [
            (StatusFlags::UNCOMMITTED_CHANGES, UNCOMMITTED_LABEL),
            (StatusFlags::INCOMING_CHANGES, INCOMING_LABEL),
            (StatusFlags::OUTGOING_CHANGES, OUTGOING_LABEL),
        ]
        .into_iter()
        .filter(|(flag, _)| self.0.contains(*flag))
        .map(|(_, label)| label)
        .collect();

        let mut label = parts[0].to_string();
        for part in &parts[1..] {
            label.push_str(", ");
            label.push_str(&part.to_lowercase());
        }
        label
    }

    /// Returns the emoji symbol for this category
    pub fn symbol(&self) -> &'static str {
        if self.0.contains(StatusFlags::UNCOMMITTED_CHANGES) {
            "🔴"
        } else if self.0.contains(StatusFlags::INCOMING_CHANGES) {
            "🟡"
        } else if self.0.contains(StatusFlags::OUTGOING_CHANGES) {
            "🟠"
        } else {
            "🟢"
        }
    }
}

impl From<StatusFlags> for StatusCategory {
    fn from(flags: StatusFlags) -> Self {
        Self(flags)
    }
}

impl Ord for StatusCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for StatusCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for StatusCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
