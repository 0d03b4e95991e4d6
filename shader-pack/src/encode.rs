//! Rendering compiled bytecode as embeddable C++ array literals.
//!
//! The layout is fixed and must stay byte-stable: generated headers are
//! checked into diffs and cached by the build, so identical input must
//! produce identical text. 16 literals per row, seven-space row indent,
//! lower-case hex, no comma after the last literal.

/// Literals per output row.
const BYTES_PER_ROW: usize = 16;

/// Indent at the start of each row of literals.
const ROW_INDENT: &str = "       ";

/// Suffix appended to every generated constant name.
pub const SYMBOL_SUFFIX: &str = "Script";

/// Derive the generated constant name for a shader source filename.
///
/// Only the final extension is dropped; remaining dots become underscores so
/// the result is a valid C identifier. `basic.vert.hlsl` becomes
/// `basic_vertScript`.
pub fn symbol_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);
    let mut symbol = stem.replace('.', "_");
    symbol.push_str(SYMBOL_SUFFIX);
    symbol
}

/// Render `bytes` as a `constexpr uint8_t` array literal named `symbol`.
pub fn encode(bytes: &[u8], symbol: &str) -> String {
    let hex_digits = hex::encode(bytes);
    let mut out = format!("    constexpr uint8_t {symbol}[] = {{\n");
    for idx in 0..bytes.len() {
        if idx % BYTES_PER_ROW == 0 {
            out.push_str(ROW_INDENT);
        }
        out.push_str(" 0x");
        out.push_str(&hex_digits[2 * idx..2 * idx + 2]);
        out.push(',');
        if idx % BYTES_PER_ROW == BYTES_PER_ROW - 1 {
            out.push('\n');
        }
    }
    // The last literal keeps no separator: drop the row break (if the final
    // row was full) and the trailing comma before closing the array.
    if out.ends_with('\n') {
        out.pop();
    }
    if out.ends_with(',') {
        out.pop();
    }
    out.push_str("};\n");
    out
}
