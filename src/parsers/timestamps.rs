use anyhow::{Result, bail};
use chrono::NaiveDateTime;

/// Date formats the device writes after "Added on ", depending on its
/// configured locale. Tried in order; the weekday-less variants cover
/// exports from older firmware.
const ADDED_ON_FORMATS: &[&str] = &[
    // Monday, August 14, 2017 9:46:33 PM
    "%A, %B %d, %Y %I:%M:%S %p",
    // Monday, 14 August 2017 21:46:33
    "%A, %d %B %Y %H:%M:%S",
    // August 14, 2017 9:46:33 PM
    "%B %d, %Y %I:%M:%S %p",
    // 14 August 2017 21:46:33
    "%d %B %Y %H:%M:%S",
];

/// Parse the date-time text following the "Added on " marker of a metadata
/// line.
///
/// # Errors
///
/// Returns an error if the text matches none of the known locale formats.
pub fn parse_added_on(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    for format in ADDED_ON_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }
    bail!("Unrecognized date format: {:?}", text);
}
