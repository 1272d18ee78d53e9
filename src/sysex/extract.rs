// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

use super::delay::{DelayMillis, DelayTimeSysex};

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input contained no `{ ms, { bytes… } }` tuples at all.
    ///
    /// A lookup over an empty table is undefined, so this is reported
    /// instead of silently emitting nothing.
    #[error("no delay entries found in the input")]
    NoEntries,
    #[error("entry {entry}: invalid delay time `{token}`")]
    InvalidDelay { entry: usize, token: String },
    #[error("entry {entry}: invalid byte token `{token}`")]
    InvalidByte { entry: usize, token: String },
}

/// Extracts all `{ <delay-ms>, { <byte>, <byte>, … } }` initializer
/// tuples from C/C++ header text.
///
/// Surrounding declarations are ignored, only the tuples themselves are
/// scanned. Byte tokens may be `0x…` hex or decimal. Entries are
/// returned in declaration order.
pub fn extract(header_text: &str) -> Result<Vec<DelayTimeSysex>, ExtractError> {
    let bytes = header_text.as_bytes();
    let mut entries = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_byte(bytes, pos, b'{') {
        match scan_tuple(header_text, open) {
            Some(tuple) => {
                entries.push(parse_tuple(entries.len(), &tuple)?);
                pos = tuple.end;
            }
            None => pos = open + 1,
        }
    }
    if entries.is_empty() {
        return Err(ExtractError::NoEntries);
    }
    Ok(entries)
}

struct RawTuple<'a> {
    delay: &'a str,
    data: &'a str,
    end: usize,
}

/// Tries to read one `{ number , { … } }` tuple starting at the opening
/// brace at `open`. Returns `None` if the text at `open` is not a tuple,
/// the caller then resumes scanning behind the brace.
fn scan_tuple(text: &str, open: usize) -> Option<RawTuple<'_>> {
    let bytes = text.as_bytes();
    let mut pos = skip_whitespace(bytes, open + 1);

    let delay_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == delay_start {
        return None;
    }
    let delay = &text[delay_start..pos];

    pos = skip_whitespace(bytes, pos);
    if bytes.get(pos) != Some(&b',') {
        return None;
    }
    pos = skip_whitespace(bytes, pos + 1);
    if bytes.get(pos) != Some(&b'{') {
        return None;
    }

    // Non-greedy: the byte list ends at the first closing brace.
    let data_start = pos + 1;
    let data_end = find_byte(bytes, data_start, b'}')?;
    let data = &text[data_start..data_end];

    pos = skip_whitespace(bytes, data_end + 1);
    if bytes.get(pos) != Some(&b'}') {
        return None;
    }

    Some(RawTuple {
        delay,
        data,
        end: pos + 1,
    })
}

fn parse_tuple(index: usize, tuple: &RawTuple<'_>) -> Result<DelayTimeSysex, ExtractError> {
    let delay_ms: u16 = tuple
        .delay
        .parse()
        .map_err(|_| ExtractError::InvalidDelay {
            entry: index,
            token: tuple.delay.to_owned(),
        })?;
    let data = tuple
        .data
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_byte_token(token).ok_or_else(|| ExtractError::InvalidByte {
                entry: index,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DelayTimeSysex {
        delay_ms: DelayMillis::new(delay_ms),
        data,
    })
}

fn parse_byte_token(token: &str) -> Option<u8> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&byte| byte == needle)
        .map(|offset| from + offset)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r"
// SPM delay time commands
#include <stdint.h>

typedef struct {
    uint16_t delayMs;
    uint8_t data[38];
} DelayTimeSysex;

const DelayTimeSysex DELAY_TIME_LOOKUP[] PROGMEM = {
    {20, {0xF0, 0x08, 0x00, 0xF7}},
    {25, {0xF0, 0x08, 0x01, 0xF7}},
    {1000,
     {0xF0, 0x08,
      0x7F, 0xF7}},
};
";

    #[test]
    fn extracts_entries_in_declaration_order() {
        let entries = extract(HEADER).unwrap();
        assert_eq!(3, entries.len());
        let delays: Vec<u16> = entries.iter().map(|entry| entry.delay_ms.get()).collect();
        assert_eq!(vec![20, 25, 1000], delays);
        for entry in &entries {
            assert_eq!(4, entry.data.len());
            assert_eq!(0xF0, entry.data[0]);
            assert_eq!(0xF7, entry.data[3]);
        }
    }

    #[test]
    fn byte_lists_spanning_newlines_are_supported() {
        let entries = extract(HEADER).unwrap();
        assert_eq!(vec![0xF0, 0x08, 0x7F, 0xF7], entries[2].data);
    }

    #[test]
    fn decimal_and_hex_tokens_mix() {
        let entries = extract("{100, {240, 0x08, 127, 0xF7}}").unwrap();
        assert_eq!(vec![240, 0x08, 127, 0xF7], entries[0].data);
    }

    #[test]
    fn trailing_commas_and_blank_tokens_are_dropped() {
        let entries = extract("{100, {0xF0, , 0xF7, }}").unwrap();
        assert_eq!(vec![0xF0, 0xF7], entries[0].data);
    }

    #[test]
    fn surrounding_braces_do_not_confuse_the_scanner() {
        let text = r"
struct Foo { int bar; };
static const Entry TABLE[] = { {30, {0x01, 0x02}} };
";
        let entries = extract(text).unwrap();
        assert_eq!(1, entries.len());
        assert_eq!(30, entries[0].delay_ms.get());
        assert_eq!(vec![0x01, 0x02], entries[0].data);
    }

    #[test]
    fn no_entries_is_an_error() {
        assert!(matches!(
            extract("struct Foo { int bar; };"),
            Err(ExtractError::NoEntries)
        ));
        assert!(matches!(extract(""), Err(ExtractError::NoEntries)));
    }

    #[test]
    fn invalid_byte_token_is_reported_with_context() {
        let result = extract("{100, {0xF0, bogus, 0xF7}}");
        match result {
            Err(ExtractError::InvalidByte { entry, token }) => {
                assert_eq!(0, entry);
                assert_eq!("bogus", token);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_byte_token_is_rejected() {
        assert!(matches!(
            extract("{100, {0x1F0}}"),
            Err(ExtractError::InvalidByte { .. })
        ));
    }

    #[test]
    fn out_of_range_delay_is_rejected() {
        assert!(matches!(
            extract("{70000, {0xF0, 0xF7}}"),
            Err(ExtractError::InvalidDelay { .. })
        ));
    }
}
