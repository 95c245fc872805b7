use super::types::SegmentId;
use serde::{Deserialize, Serialize};

/// Creation counter that hands out segment ids, codes and default names.
///
/// The counter only moves forward, so ids are never reused even after the
/// segment that held them is removed. `u64::MAX` is never handed out; a
/// counter sitting there is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSequence {
    next: u64,
}

/// What a new segment receives from the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub id: SegmentId,
    pub code: String,
    pub name: String,
}

impl Default for SegmentSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SegmentSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a persisted counter value. Zero is bumped to one.
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next == u64::MAX
    }

    /// `None` once every id has been handed out.
    pub fn next_entry(&mut self) -> Option<SequenceEntry> {
        let n = self.next;
        self.next = n.checked_add(1)?;
        Some(SequenceEntry {
            id: SegmentId::new(n),
            code: number_to_code(n),
            name: format!("Segment {}", n),
        })
    }

    /// Makes sure the counter has moved past `id`. Observing the last
    /// representable id exhausts the counter.
    pub fn observe(&mut self, id: SegmentId) {
        if id.value() >= self.next {
            self.next = id.value().checked_add(1).unwrap_or(u64::MAX);
        }
    }
}

/// Spreadsheet-style column label: 1 -> A, 26 -> Z, 27 -> AA.
pub fn number_to_code(n: u64) -> String {
    let mut letters = Vec::new();
    let mut num = n;
    while num > 0 {
        let remainder = ((num - 1) % 26) as u8;
        letters.push((b'A' + remainder) as char);
        num = (num - 1) / 26;
    }
    letters.iter().rev().collect()
}
