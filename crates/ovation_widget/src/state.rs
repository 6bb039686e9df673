//! Clap interaction state
//!
//! Plain value type with one transition. The widget owns the only mutable
//! copy; everything else sees snapshots.

/// Most claps a single visitor may contribute
pub const MAX_USER_CLAPS: u32 = 50;

/// Running total the widget starts from unless the host supplies one
pub const DEFAULT_COUNT_TOTAL: u32 = 267;

/// Snapshot of the clap widget's state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClapState {
    /// This visitor's claps, capped at [`MAX_USER_CLAPS`]
    pub count: u32,
    /// Running total across visitors
    pub count_total: u32,
    /// True once this visitor has clapped, never cleared
    pub is_clicked: bool,
}

impl ClapState {
    /// Fresh state with a host-supplied starting total
    pub fn new(count_total: u32) -> Self {
        Self {
            count: 0,
            count_total,
            is_clicked: false,
        }
    }

    /// State after one more clap
    ///
    /// The count clamps at the cap; the total only grows while the
    /// pre-clap count is below it, so claps past the cap change nothing
    /// but keep the interaction valid.
    pub fn clapped(self) -> Self {
        Self {
            count: (self.count + 1).min(MAX_USER_CLAPS),
            count_total: if self.count < MAX_USER_CLAPS {
                self.count_total + 1
            } else {
                self.count_total
            },
            is_clicked: true,
        }
    }
}

impl Default for ClapState {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT_TOTAL)
    }
}
