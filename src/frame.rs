//! The strip-ordered frame buffer handed to the LED driver.

use core::ops::{Index, IndexMut};

use smart_leds::RGB8;

/// One display frame: `N` RGB pixels in physical LED strip order.
///
/// The frame is owned by the render cycle that is filling it; every painting
/// pass mutates it in place, and the finished frame is handed read-only to
/// the display collaborator. Pixels are addressed by LED index — use
/// [`SerpentinePanel::pixel_index`](crate::layout::SerpentinePanel::pixel_index)
/// to go from logical `(x, y)` cells to indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const N: usize>([RGB8; N]);

impl<const N: usize> Frame<N> {
    /// Total number of pixels.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.0 = [RGB8::new(0, 0, 0); N];
    }

    /// The pixels in LED strip order, as consumed by the display driver.
    #[must_use]
    pub const fn pixels(&self) -> &[RGB8; N] {
        &self.0
    }

    /// Iterate over the pixels in LED strip order.
    pub fn iter(&self) -> core::slice::Iter<'_, RGB8> {
        self.0.iter()
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for Frame<N> {
    type Output = RGB8;

    fn index(&self, pixel_index: usize) -> &Self::Output {
        &self.0[pixel_index]
    }
}

impl<const N: usize> IndexMut<usize> for Frame<N> {
    fn index_mut(&mut self, pixel_index: usize) -> &mut Self::Output {
        &mut self.0[pixel_index]
    }
}

impl<const N: usize> From<[RGB8; N]> for Frame<N> {
    fn from(pixels: [RGB8; N]) -> Self {
        Self(pixels)
    }
}

impl<const N: usize> From<Frame<N>> for [RGB8; N] {
    fn from(frame: Frame<N>) -> Self {
        frame.0
    }
}

impl<'a, const N: usize> IntoIterator for &'a Frame<N> {
    type Item = &'a RGB8;
    type IntoIter = core::slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
