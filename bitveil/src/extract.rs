#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "parallel")]
use rayon::slice::{ParallelSlice, ParallelSliceMut};

use crate::channel::recover;
use crate::grid::PixelGrid;

/// Rebuild a hidden image from the two low bits of every channel of `source`.
///
/// Each output channel is `(source & 3) * 64`, so only the values 0, 64, 128
/// and 192 appear. Any grid is accepted.
pub fn extract(source: &PixelGrid) -> PixelGrid {
    let mut out = PixelGrid::new(source.width(), source.height());
    let row_len = out.row_len();
    if row_len == 0 {
        return out;
    }

    #[cfg(feature = "parallel")]
    {
        out.as_raw_mut()
            .par_chunks_exact_mut(row_len)
            .zip(source.as_raw().par_chunks_exact(row_len))
            .for_each(|(dst, src)| extract_row(dst, src));
    }

    #[cfg(not(feature = "parallel"))]
    {
        out.as_raw_mut()
            .chunks_exact_mut(row_len)
            .zip(source.as_raw().chunks_exact(row_len))
            .for_each(|(dst, src)| extract_row(dst, src));
    }

    out
}

fn extract_row(dst: &mut [u8], src: &[u8]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = recover(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_pair_three_becomes_192() {
        let source = PixelGrid::filled(2, 2, [3, 3, 3, 255]);
        let out = extract(&source);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(out.get(x, y), [192, 192, 192, 192], "({x}, {y})");
            }
        }
    }

    #[test]
    fn high_bits_do_not_leak() {
        let source = PixelGrid::filled(1, 1, [0xFC, 0xFD, 0xFE, 0xFF]);
        assert_eq!(extract(&source).get(0, 0), [0, 64, 128, 192]);
    }

    #[test]
    fn output_keeps_source_dimensions() {
        let source = PixelGrid::new(7, 5);
        let out = extract(&source);
        assert_eq!(out.dimensions(), source.dimensions());
    }

    #[test]
    fn zero_height_grid_extracts_to_empty() {
        let out = extract(&PixelGrid::new(4, 0));
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn every_sample_maps_to_its_low_pair() {
        let buf: Vec<u8> = (0..=255u8).collect();
        let source = PixelGrid::from_buf(8, 8, buf).unwrap();
        let out = extract(&source);
        for (i, &v) in out.as_raw().iter().enumerate() {
            assert_eq!(v, (i as u8 & 3) * 64, "sample {i}");
        }
    }
}
