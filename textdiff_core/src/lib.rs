//! Line diff engine behind the toolbox's text-diff tool.
//!
//! The pure Rust API lives in [`diff`]; the `#[wasm_bindgen]` exports below
//! wrap `_internal` functions that report failures as strings.

use console_error_panic_hook::set_once as set_panic_hook;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod diff;
pub mod error;

pub use config::DiffConfig;
pub use diff::{
    compute_diff, compute_diff_with, numbered_lines, render_report, render_unified, split_lines,
    DiffOp, DiffResult, DiffStats, EditTable, NumberedLine,
};
pub use error::{DiffError, Side};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

#[wasm_bindgen]
pub fn generate_text_diff(old_text: &str, new_text: &str) -> Result<JsValue, JsValue> {
    generate_text_diff_internal(old_text, new_text)
        .and_then(|res| serde_wasm_bindgen::to_value(&res).map_err(|err| err.to_string()))
        .map_err(|err| JsValue::from_str(&err))
}

fn generate_text_diff_internal<'a>(
    old_text: &'a str,
    new_text: &'a str,
) -> Result<DiffResult<'a>, String> {
    compute_diff_with(old_text, new_text, &DiffConfig::default()).map_err(String::from)
}

#[wasm_bindgen]
pub fn generate_numbered_text_diff(old_text: &str, new_text: &str) -> Result<JsValue, JsValue> {
    generate_text_diff_internal(old_text, new_text)
        .and_then(|res| {
            serde_wasm_bindgen::to_value(&numbered_lines(&res)).map_err(|err| err.to_string())
        })
        .map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn generate_text_diff_report(old_text: &str, new_text: &str) -> Result<String, JsValue> {
    text_diff_report_internal(old_text, new_text).map_err(|err| JsValue::from_str(&err))
}

fn text_diff_report_internal(old_text: &str, new_text: &str) -> Result<String, String> {
    let result = generate_text_diff_internal(old_text, new_text)?;
    Ok(render_report(old_text, new_text, &result))
}

/// The name the report should be saved under.
#[wasm_bindgen]
pub fn text_diff_report_file_name() -> String {
    diff::REPORT_FILE_NAME.to_string()
}

#[wasm_bindgen]
pub fn generate_unified_text_diff(
    old_text: &str,
    new_text: &str,
    old_name: &str,
    new_name: &str,
) -> Result<String, JsValue> {
    unified_text_diff_internal(old_text, new_text, old_name, new_name)
        .map_err(|err| JsValue::from_str(&err))
}

fn unified_text_diff_internal(
    old_text: &str,
    new_text: &str,
    old_name: &str,
    new_name: &str,
) -> Result<String, String> {
    let config = DiffConfig::default();
    let result = compute_diff_with(old_text, new_text, &config)?;
    Ok(render_unified(&result, old_name, new_name, config.context_lines))
}

#[cfg(test)]
mod lib_tests;
