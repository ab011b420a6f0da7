//! WASM entry points.

use wasm_bindgen::prelude::*;

use crate::config::BehaviorConfig;
use crate::dish::Dish;
use crate::response::Response;

/// A seeded dish driven from JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Experiment {
    dish: Dish,
}

#[wasm_bindgen]
impl Experiment {
    /// Throws a JS `Error` carrying the [`crate::ColonyError`] message for
    /// an out-of-range `size`.
    #[wasm_bindgen(constructor)]
    pub fn new(size: i32, seed: u64) -> Result<Experiment, JsError> {
        Ok(Self::try_new(size, seed)?)
    }

    /// Simulate until full or stalled. The dish keeps its final state, so a
    /// second run on a full dish reports zero days.
    pub fn run(&mut self, from: u32, to: u32, die: f64, reproduce: f64) -> Response {
        self.dish.simulate(&BehaviorConfig::new(from, to, die, reproduce))
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.dish.size()
    }

    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.dish.occupied_count() as u32
    }
}

impl Experiment {
    /// Native counterpart of the JS constructor.
    ///
    /// # Errors
    /// [`crate::ColonyError::InvalidSize`] if `size` is out of range.
    pub fn try_new(size: i32, seed: u64) -> crate::Result<Self> {
        Ok(Self {
            dish: Dish::with_seed(size, seed)?,
        })
    }
}
