//! Occupant token placed in dish cells.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A single organism. Every call to [`Bacteria::new`] yields a token distinct
/// from all others in the process; copies of a token are the same occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Bacteria {
    id: u64,
}

impl Default for Bacteria {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Bacteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bacteria#{}", self.id)
    }
}

impl Bacteria {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.id
    }
}
