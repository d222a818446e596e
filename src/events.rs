//! Parser for the event-fetch response body.
//!
//! The remote calendar answers a `(year, month)` query with a `-`-delimited
//! list of day numbers, e.g. `5-12-X20-25-`. A token prefixed with the
//! holiday sentinel `X` marks the start of the holiday subsequence: every
//! token from there to the end of input is a holiday, every earlier token a
//! plain event. Parsing is a single forward scan; the iterator stops at the
//! last delimiter, so a trailing token without one is ignored (matching the
//! appliance's fetch format, which always ends with a delimiter).

/// Token prefix marking the start of the holiday subsequence.
const HOLIDAY_SENTINEL: char = 'X';
/// Separator between day tokens.
const DAY_DELIMITER: char = '-';

/// One parsed event marker.
///
/// `day` is `None` when the token was not a valid day number; overlay passes
/// must treat that as a no-op rather than as day 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventRecord {
    /// Day-of-month the marker applies to, if the token parsed.
    pub day: Option<u8>,
    /// True from the holiday sentinel onward.
    pub is_holiday: bool,
}

/// Lazy iterator over the event markers in one response body.
///
/// Finite and single-pass; re-invoke [`parse`] on the original text to scan
/// again.
#[derive(Clone, Debug)]
pub struct EventList<'a> {
    rest: &'a str,
    holiday: bool,
}

/// Parse a response body into a sequence of event markers.
///
/// ```rust
/// use calendar_panel::events::parse;
///
/// let days: Vec<_> = parse("5-12-X20-25-")
///     .map(|record| (record.day, record.is_holiday))
///     .collect();
/// assert_eq!(
///     days,
///     [
///         (Some(5), false),
///         (Some(12), false),
///         (Some(20), true),
///         (Some(25), true),
///     ]
/// );
/// ```
#[must_use]
pub const fn parse(text: &str) -> EventList<'_> {
    EventList {
        rest: text,
        holiday: false,
    }
}

impl Iterator for EventList<'_> {
    type Item = EventRecord;

    fn next(&mut self) -> Option<EventRecord> {
        let split = self.rest.find(DAY_DELIMITER)?;
        let token = &self.rest[..split];
        self.rest = &self.rest[split + 1..];

        let token = match token.strip_prefix(HOLIDAY_SENTINEL) {
            Some(stripped) => {
                self.holiday = true;
                stripped
            }
            None => token,
        };

        Some(EventRecord {
            day: token.parse::<u8>().ok(),
            is_holiday: self.holiday,
        })
    }
}

impl core::iter::FusedIterator for EventList<'_> {}
