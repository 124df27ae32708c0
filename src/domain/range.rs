//! Selectable value ranges and their tick lists

/// Every tick whose value is a multiple of this is a major tick
pub const MAJOR_STEP: i32 = 10;

/// Inclusive bounds of the selectable values
///
/// `min <= max` is not enforced. An inverted range simply has no ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Number of ticks on the tape (0 for an inverted range)
    pub fn tick_count(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as usize
        }
    }

    /// Value of the tick at `index`, counted from `min`
    pub fn value_at(&self, index: usize) -> i32 {
        self.min.saturating_add(index as i32)
    }

    /// Clamp a value into the range, tolerating inverted bounds
    pub fn clamp(&self, value: i32) -> i32 {
        if self.min > self.max {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Apply a conversion factor to both bounds, truncating toward zero
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: (f64::from(self.min) * factor) as i32,
            max: (f64::from(self.max) * factor) as i32,
        }
    }
}

/// Visual class of a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    /// Multiple of ten: long, thick and labelled
    Major,
    Normal,
}

impl TickKind {
    pub fn of(value: i32) -> Self {
        if value.rem_euclid(MAJOR_STEP) == 0 {
            TickKind::Major
        } else {
            TickKind::Normal
        }
    }

    pub fn is_major(self) -> bool {
        self == TickKind::Major
    }
}
