//! The counter table: per-face accumulators for the eleven protocol
//! event categories.
//!
//! [`StatsTable`] is owned by one tracer and keyed by [`FaceId`]. Each
//! face holds a [`FaceCounters`] direction pair. Recording is a total
//! function: an unknown face gets a fresh zero-initialised pair, an
//! already-known face accumulates.

use crate::face::FaceId;
use std::collections::BTreeMap;

/// Which side of the face an event was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// The event categories counted by the tracer.
///
/// The declaration order is the column order of the report lines, and
/// [`Category::ALL`] iterates in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    OutInterests,
    InInterests,
    DropInterests,
    OutNacks,
    InNacks,
    DropNacks,
    OutData,
    InData,
    DropData,
    SatisfiedInterests,
    TimedOutInterests,
}

impl Category {
    pub const COUNT: usize = 11;

    /// every category, in column order
    pub const ALL: [Self; Self::COUNT] = [
        Self::OutInterests,
        Self::InInterests,
        Self::DropInterests,
        Self::OutNacks,
        Self::InNacks,
        Self::DropNacks,
        Self::OutData,
        Self::InData,
        Self::DropData,
        Self::SatisfiedInterests,
        Self::TimedOutInterests,
    ];

    /// the label used for this category's columns in the trace output
    pub const fn label(self) -> &'static str {
        match self {
            Self::OutInterests => "OutInterests",
            Self::InInterests => "InInterests",
            Self::DropInterests => "DropInterests",
            Self::OutNacks => "OutNacks",
            Self::InNacks => "InNacks",
            Self::DropNacks => "DropNacks",
            Self::OutData => "OutData",
            Self::InData => "InData",
            Self::DropData => "DropData",
            Self::SatisfiedInterests => "SatisfiedInterests",
            Self::TimedOutInterests => "TimedOutInterests",
        }
    }

    /// the direction a category intrinsically belongs to
    ///
    /// Only the `Out*` events are observed on the outgoing side of a
    /// face. Drops and the pending-interest outcomes are accounted on
    /// the incoming side.
    pub const fn direction(self) -> Direction {
        match self {
            Self::OutInterests | Self::OutNacks | Self::OutData => Direction::Outgoing,
            Self::InInterests
            | Self::DropInterests
            | Self::InNacks
            | Self::DropNacks
            | Self::InData
            | Self::DropData
            | Self::SatisfiedInterests
            | Self::TimedOutInterests => Direction::Incoming,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A packet counter and its companion byte counter.
///
/// Both are monotonically non-decreasing between resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub packets: u64,
    pub bytes: u64,
}

impl Counter {
    fn record(&mut self, size: u64) {
        self.packets += 1;
        self.bytes = self.bytes.saturating_add(size);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The direction pair of accumulator records for one face.
///
/// Each direction holds a full set of category counters; a recorded
/// event lands in the record matching its category's intrinsic
/// [`Direction`].
#[derive(Debug, Clone, Default)]
pub struct FaceCounters {
    incoming: [Counter; Category::COUNT],
    outgoing: [Counter; Category::COUNT],
}

impl FaceCounters {
    fn side_mut(&mut self, direction: Direction) -> &mut [Counter; Category::COUNT] {
        match direction {
            Direction::Incoming => &mut self.incoming,
            Direction::Outgoing => &mut self.outgoing,
        }
    }

    fn side(&self, direction: Direction) -> &[Counter; Category::COUNT] {
        match direction {
            Direction::Incoming => &self.incoming,
            Direction::Outgoing => &self.outgoing,
        }
    }

    pub fn record(&mut self, category: Category, size: u64) {
        self.side_mut(category.direction())[category.index()].record(size);
    }

    /// get the counter of the given category, read from the direction
    /// record the category belongs to
    #[inline]
    pub fn get(&self, category: Category) -> Counter {
        self.side(category.direction())[category.index()]
    }

    /// the counters of one direction record, in [`Category::ALL`] order
    #[inline]
    pub fn direction(&self, direction: Direction) -> &[Counter; Category::COUNT] {
        self.side(direction)
    }

    pub fn reset(&mut self) {
        for counter in self.incoming.iter_mut().chain(self.outgoing.iter_mut()) {
            counter.reset();
        }
    }
}

/// Per-face event counters for one tracer.
///
/// # Example
///
/// ```
/// use ndn_l3_trace::{Category, FaceId, StatsTable};
///
/// let mut table = StatsTable::new();
/// table.record(FaceId::new(1), Category::InInterests, 50);
/// table.record(FaceId::new(1), Category::InInterests, 50);
///
/// let counter = table.face(FaceId::new(1)).unwrap().get(Category::InInterests);
/// assert_eq!(counter.packets, 2);
/// assert_eq!(counter.bytes, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    faces: BTreeMap<FaceId, FaceCounters>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// account one event of the given category and size against a face.
    ///
    /// A face that was never seen before gets a fresh zero-initialised
    /// [`FaceCounters`] pair. There is no error path.
    pub fn record(&mut self, face: FaceId, category: Category, size: u64) {
        self.faces.entry(face).or_default().record(category, size);
    }

    /// get the counters of a face, if the face was ever recorded
    pub fn face(&self, face: FaceId) -> Option<&FaceCounters> {
        self.faces.get(&face)
    }

    /// iterate over the known faces in ascending [`FaceId`] order
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceCounters)> {
        self.faces.iter().map(|(face, counters)| (*face, counters))
    }

    /// zero every counter but keep the face keys.
    ///
    /// Keys persist for the lifetime of the table so the set of report
    /// rows stays stable from one tick to the next.
    pub fn reset(&mut self) {
        for counters in self.faces.values_mut() {
            counters.reset();
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }
}
