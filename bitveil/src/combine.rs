#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "parallel")]
use rayon::slice::{ParallelSlice, ParallelSliceMut};

use crate::channel::embed;
use crate::error::CombineError;
use crate::grid::PixelGrid;

/// Hide `payload` in the two low bits of every channel of `carrier`.
///
/// Each output channel is `(carrier & 0xFC) | (payload / 64)`. Alpha is
/// embedded exactly like the color channels. Both grids must have the same
/// width and height; otherwise no pixel is touched and
/// [`CombineError::DimensionMismatch`] is returned.
pub fn combine(carrier: &PixelGrid, payload: &PixelGrid) -> Result<PixelGrid, CombineError> {
    if !carrier.same_dimensions(payload) {
        return Err(CombineError::DimensionMismatch {
            carrier: carrier.dimensions(),
            payload: payload.dimensions(),
        });
    }

    let mut out = PixelGrid::new(carrier.width(), carrier.height());
    let row_len = out.row_len();
    if row_len == 0 {
        return Ok(out);
    }

    #[cfg(feature = "parallel")]
    {
        out.as_raw_mut()
            .par_chunks_exact_mut(row_len)
            .zip(carrier.as_raw().par_chunks_exact(row_len))
            .zip(payload.as_raw().par_chunks_exact(row_len))
            .for_each(|((dst, src), aux)| combine_row(dst, src, aux));
    }

    #[cfg(not(feature = "parallel"))]
    {
        out.as_raw_mut()
            .chunks_exact_mut(row_len)
            .zip(carrier.as_raw().chunks_exact(row_len))
            .zip(payload.as_raw().chunks_exact(row_len))
            .for_each(|((dst, src), aux)| combine_row(dst, src, aux));
    }

    Ok(out)
}

fn combine_row(dst: &mut [u8], carrier: &[u8], payload: &[u8]) {
    for ((d, &s), &p) in dst.iter_mut().zip(carrier).zip(payload) {
        *d = embed(s, p);
    }
}
