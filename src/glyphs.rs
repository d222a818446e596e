//! Hand-authored 4×6 dot-matrix glyphs for the digits 0–9.
//!
//! Each glyph lists the lit cells of a 7-segment-like numeral as `(dx, dy)`
//! offsets inside a 4-wide by 6-tall box. The shapes are fixed data tuned to
//! the panel; there is no computed font and no text rendering beyond these
//! ten digits.

/// A digit shape: the lit cells as `(dx, dy)` offsets within the glyph box.
#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    /// Lit cells, in paint order.
    pub dots: &'static [(u8, u8)],
}

/// Dot patterns for the digits 0–9, indexed by digit value.
pub const DIGITS: [Glyph; 10] = [
    // 0
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (0, 2),
            (3, 2),
            (0, 3),
            (3, 3),
            (0, 4),
            (3, 4),
            (0, 5),
            (3, 5),
            (1, 6),
            (2, 6),
        ],
    },
    // 1
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (3, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (1, 5),
            (2, 5),
            (2, 6),
        ],
    },
    // 2
    Glyph {
        dots: &[
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (0, 5),
            (3, 5),
            (1, 6),
            (2, 6),
        ],
    },
    // 3
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (3, 2),
            (3, 3),
            (1, 4),
            (2, 4),
            (3, 5),
            (1, 6),
            (2, 6),
        ],
    },
    // 4
    Glyph {
        dots: &[
            (3, 1),
            (3, 2),
            (1, 3),
            (2, 3),
            (3, 3),
            (1, 4),
            (3, 4),
            (2, 5),
            (3, 5),
            (3, 6),
        ],
    },
    // 5
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (3, 2),
            (3, 3),
            (1, 4),
            (2, 4),
            (3, 4),
            (1, 5),
            (1, 6),
            (2, 6),
            (3, 6),
        ],
    },
    // 6
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (0, 2),
            (3, 2),
            (0, 3),
            (3, 3),
            (0, 4),
            (1, 4),
            (2, 4),
            (0, 5),
            (1, 6),
            (2, 6),
        ],
    },
    // 7
    Glyph {
        dots: &[
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 4),
            (3, 5),
            (0, 6),
            (1, 6),
            (2, 6),
            (3, 6),
        ],
    },
    // 8
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (0, 2),
            (3, 2),
            (0, 3),
            (3, 3),
            (1, 4),
            (2, 4),
            (0, 5),
            (3, 5),
            (1, 6),
            (2, 6),
        ],
    },
    // 9
    Glyph {
        dots: &[
            (1, 1),
            (2, 1),
            (3, 2),
            (1, 3),
            (2, 3),
            (3, 3),
            (0, 4),
            (3, 4),
            (0, 5),
            (3, 5),
            (1, 6),
            (2, 6),
        ],
    },
];

/// The glyph for `digit`, or `None` outside 0–9.
#[must_use]
pub const fn digit_glyph(digit: u8) -> Option<&'static Glyph> {
    if digit <= 9 {
        Some(&DIGITS[digit as usize])
    } else {
        None
    }
}
