//! Date keys and label text for conversation timestamps.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Formats message timestamps in one fixed UTC offset.
///
/// Owned and passed explicitly to whatever needs date comparisons; there is
/// no shared formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStamper {
    offset: FixedOffset,
}

impl DateStamper {
    /// Stamper for the given UTC offset.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Stamper for UTC.
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Stamper for an offset in minutes east of UTC.
    ///
    /// Returns `None` when the offset is a day or more.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::new)
    }

    /// The offset timestamps are rendered in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Month and day key (`MMdd`).
    ///
    /// The year is deliberately absent: two timestamps on the same month and
    /// day of different years produce the same key.
    pub fn day_key(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset).format("%m%d").to_string()
    }

    /// True when both timestamps share a [`day_key`](Self::day_key).
    pub fn same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.day_key(a) == self.day_key(b)
    }

    /// Date separator text (`yyyy/MM/dd`).
    pub fn date_label(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset).format("%Y/%m/%d").to_string()
    }

    /// Time label text (`HH:mm`).
    pub fn time_label(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset).format("%H:%M").to_string()
    }
}

impl Default for DateStamper {
    fn default() -> Self {
        Self::utc()
    }
}
