// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt::Write as _;

use super::delay::{DelayTable, MAX_DELAY_MS, MIN_DELAY_MS};

/// Renders a self-contained Rust module with the extracted lookup table
/// and a nearest-match search.
///
/// The emitted module has no dependency on this crate so it can be
/// dropped straight into a firmware companion tool.
#[must_use]
pub fn generate_module(table: &DelayTable, table_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Auto-generated by delay-sysex-gen. Do not edit.");
    let _ = writeln!(
        out,
        "// Delay time SysEx lookup table ({MIN_DELAY_MS}ms - {MAX_DELAY_MS}ms), {count} entries.",
        count = table.entries().len(),
    );
    out.push('\n');

    let _ = writeln!(out, "pub static {table_name}: &[(u16, &[u8])] = &[");
    for entry in table.entries() {
        let _ = write!(out, "    ({}, &[", entry.delay_ms);
        for (i, byte) in entry.data.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02X}");
        }
        out.push_str("]),\n");
    }
    out.push_str("];\n");

    let _ = write!(
        out,
        "
/// Returns the `(delay_ms, data)` entry closest to `target_ms`.
///
/// `target_ms` is clamped into `[{MIN_DELAY_MS}, {MAX_DELAY_MS}]`. The table is sorted by
/// delay time and the scan stops as soon as the distance to the target
/// starts growing again. Ties prefer the lower delay time.
#[must_use]
pub fn find_closest(target_ms: u16) -> (u16, &'static [u8]) {{
    let target = target_ms.clamp({MIN_DELAY_MS}, {MAX_DELAY_MS});
    let mut closest = &{table_name}[0];
    let mut min_diff = closest.0.abs_diff(target);
    for entry in &{table_name}[1..] {{
        let diff = entry.0.abs_diff(target);
        if diff < min_diff {{
            min_diff = diff;
            closest = entry;
        }} else if diff > min_diff {{
            break;
        }}
    }}
    *closest
}}
"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysex::extract::extract;

    fn example_table() -> DelayTable {
        let entries = extract("{20, {0xF0, 0x08, 0x00, 0xF7}} {25, {0xF0, 0x08, 0x01, 0xF7}}")
            .unwrap();
        DelayTable::new(entries).unwrap()
    }

    #[test]
    fn table_literal_matches_the_entries() {
        let module = generate_module(&example_table(), "DELAY_TIME_LOOKUP");
        assert!(module.contains("pub static DELAY_TIME_LOOKUP: &[(u16, &[u8])] = &["));
        assert!(module.contains("    (20, &[0xF0, 0x08, 0x00, 0xF7]),\n"));
        assert!(module.contains("    (25, &[0xF0, 0x08, 0x01, 0xF7]),\n"));
        assert!(module.contains("2 entries"));
    }

    #[test]
    fn search_function_is_emitted_against_the_table_name() {
        let module = generate_module(&example_table(), "SPM_DELAY_TABLE");
        assert!(module.contains("pub fn find_closest(target_ms: u16) -> (u16, &'static [u8])"));
        assert!(module.contains("&SPM_DELAY_TABLE[0]"));
        assert!(module.contains("&SPM_DELAY_TABLE[1..]"));
        assert!(module.contains("target_ms.clamp(20, 1000)"));
    }

    #[test]
    fn generated_module_is_free_of_crate_references() {
        let module = generate_module(&example_table(), "DELAY_TIME_LOOKUP");
        assert!(!module.contains("pedalio"));
        assert!(!module.contains("use "));
    }
}
