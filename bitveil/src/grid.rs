use std::fmt;

use crate::error::GridError;

/// Bytes per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// Width and height of a grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of bytes an RGBA8 buffer of this size occupies.
    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// RGBA image with 8 bits per channel and tightly packed, row-major pixel data.
///
/// The dimensions are fixed at construction; only pixel values can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    dims: Dimensions,
    buf: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid with every channel of every pixel set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        let dims = Dimensions::new(width, height);
        Self {
            dims,
            buf: vec![0u8; dims.byte_len()],
        }
    }

    /// Create a grid where every pixel holds `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let dims = Dimensions::new(width, height);
        let buf = rgba
            .iter()
            .copied()
            .cycle()
            .take(dims.byte_len())
            .collect();
        Self { dims, buf }
    }

    /// Wrap an existing RGBA8 buffer.
    ///
    /// `buf` must hold exactly `width * height * 4` bytes.
    pub fn from_buf(width: u32, height: u32, buf: Vec<u8>) -> Result<Self, GridError> {
        let dims = Dimensions::new(width, height);
        let expected = dims.byte_len();
        if buf.len() != expected {
            return Err(GridError::BufferSize {
                dims,
                expected,
                actual: buf.len(),
            });
        }
        Ok(Self { dims, buf })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.dims == other.dims
    }

    /// Byte length of one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.dims.width as usize * CHANNELS
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.dims.width && y < self.dims.height,
            "pixel ({x}, {y}) outside {} grid",
            self.dims
        );
        y as usize * self.row_len() + x as usize * CHANNELS
    }

    /// Get the RGBA value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.buf[i], self.buf[i + 1], self.buf[i + 2], self.buf[i + 3]]
    }

    /// Set the RGBA value at (x, y).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.buf[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// The `width * 4` bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.dims.height, "row {y} outside {} grid", self.dims);
        let start = y as usize * self.row_len();
        &self.buf[start..start + self.row_len()]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.buf
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.buf
    }
}
