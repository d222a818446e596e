//! Coordinate mapping for serpentine-wired LED panels.
//!
//! The panel is a chained LED strip folded into `W` vertical columns of `H`
//! pixels, wired so that the strip *starts at the far end* of the panel:
//! logical column 0 is the last physical column, and adjacent columns run in
//! alternating vertical direction (the cable snakes up one column and down
//! the next). [`SerpentinePanel::pixel_index`] reproduces that routing.

/// Compile-time description of a `W`×`H` panel wired serpentine from the far
/// column, `N = W * H` LEDs total.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left
/// corner, `x` increases to the right, `y` increases downward. Out-of-range
/// coordinates are a caller contract violation, asserted in debug builds.
///
/// ```rust
/// use calendar_panel::layout::SerpentinePanel;
///
/// type Panel3x2 = SerpentinePanel<6, 3, 2>;
///
/// // Column 0 is the far end of the strip, wired bottom-to-top.
/// assert_eq!(Panel3x2::pixel_index(0, 0), 5);
/// assert_eq!(Panel3x2::pixel_index(0, 1), 4);
/// // Odd columns run top-to-bottom.
/// assert_eq!(Panel3x2::pixel_index(1, 0), 2);
/// assert_eq!(Panel3x2::pixel_index(1, 1), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerpentinePanel<const N: usize, const W: usize, const H: usize>;

impl<const N: usize, const W: usize, const H: usize> SerpentinePanel<N, W, H> {
    /// Total number of LEDs on the panel.
    pub const LEN: usize = N;
    /// Number of columns on the panel.
    pub const WIDTH: usize = W;
    /// Number of rows on the panel.
    pub const HEIGHT: usize = H;

    /// Map a logical `(x, y)` cell to its LED strip index.
    ///
    /// Odd columns are wired top-to-bottom, even columns bottom-to-top, with
    /// the strip beginning at the highest logical column.
    #[must_use]
    pub const fn pixel_index(x: usize, y: usize) -> usize {
        debug_assert!(x < W, "x must be within panel width");
        debug_assert!(y < H, "y must be within panel height");
        if x % 2 == 1 {
            H * (W - (x + 1)) + y
        } else {
            H * (W - x) - (y + 1)
        }
    }

    /// Build the full `(x, y)` → LED index table, row-major (`y * W + x`).
    ///
    /// Verifies at evaluation time (compile time when used in a `const`)
    /// that the wiring covers every LED exactly once.
    #[must_use]
    pub const fn index_map() -> [u16; N] {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(N <= u16::MAX as usize, "total LEDs must fit in u16");

        let mut seen = [false; N];
        let mut map = [0_u16; N];

        let mut x = 0;
        while x < W {
            let mut y = 0;
            while y < H {
                let index = Self::pixel_index(x, y);
                assert!(index < N, "pixel index out of range");
                assert!(!seen[index], "duplicate pixel index in wiring");
                seen[index] = true;
                map[y * W + x] = index as u16;
                y += 1;
            }
            x += 1;
        }

        map
    }
}
