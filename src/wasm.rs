//! WebAssembly bindings for the Game of Life engine.
//!
//! Provides a thin wrapper around `Universe` for browser environments. The
//! page owns the animation loop: it calls `step`, then reads `cells` (a
//! pointer into linear memory) or `cellBytes` (a copy) to repaint.

use wasm_bindgen::prelude::*;

use crate::{
    compute::{Cell, Universe, UniverseStats},
    schema::{Seed, UniverseConfig},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// WebAssembly wrapper for a Game of Life universe.
#[wasm_bindgen]
pub struct WasmUniverse {
    universe: Universe,
}

#[wasm_bindgen]
impl WasmUniverse {
    /// Create a universe with the default seed.
    ///
    /// Returns an error for zero or negative dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32) -> Result<WasmUniverse, JsValue> {
        let universe = Universe::create(width as i64, height as i64)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmUniverse { universe })
    }

    /// Create a universe from JSON configuration.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<WasmUniverse, JsValue> {
        let config = UniverseConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;

        let universe =
            Universe::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmUniverse { universe })
    }

    /// Advance one generation.
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.universe.step();
    }

    /// Advance several generations.
    #[wasm_bindgen]
    pub fn run(&mut self, steps: u64) {
        self.universe.run(steps);
    }

    /// Pointer to `width * height` cell bytes in wasm memory.
    ///
    /// Only valid until the next `step` or `reset`; read it right after
    /// fetching.
    #[wasm_bindgen]
    pub fn cells(&self) -> *const Cell {
        self.universe.read().as_ptr()
    }

    /// Copy of the current cells as `0`/`1` bytes.
    #[wasm_bindgen(js_name = cellBytes)]
    pub fn cell_bytes(&self) -> Vec<u8> {
        self.universe.read_bytes().to_vec()
    }

    /// Flip a cell; coordinates wrap around the edges.
    #[wasm_bindgen]
    pub fn toggle(&mut self, row: i32, col: i32) {
        self.universe.toggle(row as i64, col as i64);
    }

    /// Mark cells alive from parallel row/column arrays.
    #[wasm_bindgen(js_name = setAlive)]
    pub fn set_alive(&mut self, rows: &[i32], cols: &[i32]) {
        let cells: Vec<(i64, i64)> = rows
            .iter()
            .zip(cols)
            .map(|(&r, &c)| (r as i64, c as i64))
            .collect();
        self.universe.set_alive(&cells);
    }

    /// Reset with a new seed, keeping dimensions.
    #[wasm_bindgen]
    pub fn reset(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;

        self.universe
            .reset(&seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Text rendering, one line per row.
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.universe.to_string()
    }

    /// Get universe statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = UniverseStats::from_universe(&self.universe);
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Number of live cells.
    #[wasm_bindgen]
    pub fn population(&self) -> usize {
        self.universe.grid().population()
    }

    /// Get current generation.
    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.universe.generation()
    }

    /// Get grid width.
    #[wasm_bindgen(js_name = getWidth)]
    pub fn get_width(&self) -> usize {
        self.universe.width()
    }

    /// Get grid height.
    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self) -> usize {
        self.universe.height()
    }
}
