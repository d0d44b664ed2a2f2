//! WebAssembly bindings for the card input engine.
//!
//! This module provides JavaScript-friendly bindings so a browser input
//! handler can call the engine directly on every keystroke.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_card_input, format_expiry_input } from 'card_input';
//!
//! await init();
//!
//! field.addEventListener('input', () => {
//!     const state = format_card_input(field.value, field.selectionStart);
//!     field.value = state.text;
//!     field.setSelectionRange(state.caret, state.caret);
//!     if (state.network) showLogo(state.network);
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

/// Result of reformatting a card number field, returned to JavaScript.
#[wasm_bindgen]
pub struct CardInputState {
    text: String,
    caret: usize,
    network: Option<String>,
    valid: bool,
}

#[wasm_bindgen]
impl CardInputState {
    /// The reformatted display text.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Caret offset in the reformatted text.
    #[wasm_bindgen(getter)]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Name of the leading network candidate, if any.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.clone()
    }

    /// Whether the digit count completes a number for that network.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }
}

/// Result of reformatting an expiry field, returned to JavaScript.
#[wasm_bindgen]
pub struct ExpiryInputState {
    text: String,
    caret: usize,
}

#[wasm_bindgen]
impl ExpiryInputState {
    /// The reformatted `MM/YY` text.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Caret offset in the reformatted text.
    #[wasm_bindgen(getter)]
    pub fn caret(&self) -> usize {
        self.caret
    }
}

/// Reformats a card number field for one input change.
#[wasm_bindgen]
pub fn format_card_input(raw: &str, caret: usize) -> CardInputState {
    let state = crate::reformat(raw, caret);
    CardInputState {
        text: state.text,
        caret: state.caret,
        network: state.network.map(|n| n.name().to_string()),
        valid: state.valid,
    }
}

/// Reformats an expiry (MM/YY) field for one input change.
#[wasm_bindgen]
pub fn format_expiry_input(raw: &str, caret: usize) -> ExpiryInputState {
    let out = crate::format_expiry(raw, caret);
    ExpiryInputState {
        text: out.text,
        caret: out.caret,
    }
}
