//! crates/logging-sink/src/timestamp.rs
//! Line headers and file-name stamps derived from the wall clock.

use std::io::{self, Write};

use time::OffsetDateTime;
use time::macros::format_description;

/// Date and time header written in front of each line by a
/// [`TextLogger`](crate::TextLogger).
///
/// # Examples
///
/// ```
/// use logging_sink::TimestampMode;
/// use time::macros::datetime;
///
/// let mut header = Vec::new();
/// TimestampMode::DateTimeMicros
///     .write_header(datetime!(2016-10-10 18:09:42.444874 UTC), &mut header)
///     .unwrap();
/// assert_eq!(header, b"2016/10/10 18:09:42.444874 ");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TimestampMode {
    /// No header.
    #[default]
    Off,
    /// `YYYY/MM/DD `
    Date,
    /// `YYYY/MM/DD HH:MM:SS `
    DateTime,
    /// `YYYY/MM/DD HH:MM:SS.uuuuuu `
    DateTimeMicros,
}

impl TimestampMode {
    /// Returns `true` unless the mode is [`TimestampMode::Off`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Writes the header for `now`, including its trailing space.
    pub fn write_header<W: Write>(self, now: OffsetDateTime, out: &mut W) -> io::Result<()> {
        let written = match self {
            Self::Off => return Ok(()),
            Self::Date => now.format_into(out, format_description!("[year]/[month]/[day] ")),
            Self::DateTime => now.format_into(
                out,
                format_description!("[year]/[month]/[day] [hour]:[minute]:[second] "),
            ),
            Self::DateTimeMicros => now.format_into(
                out,
                format_description!(
                    "[year]/[month]/[day] [hour]:[minute]:[second].[subsecond digits:6] "
                ),
            ),
        };
        written.map(|_| ()).map_err(io::Error::other)
    }
}

/// Current local time, or UTC when the local offset cannot be determined.
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Sortable stamp used in log file names: `YYYY-MM-DD--HH-MM-SS.ffffffff`.
///
/// The fraction counts 10 ns units with trailing zeros removed; it is
/// omitted, together with its dot, when the time falls on a whole second.
#[must_use]
pub fn file_stamp(now: OffsetDateTime) -> String {
    let mut stamp = format!(
        "{:04}-{:02}-{:02}--{:02}-{:02}-{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    );

    let fraction = format!("{:08}", now.nanosecond() / 10);
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        stamp.push('.');
        stamp.push_str(fraction);
    }
    stamp
}
