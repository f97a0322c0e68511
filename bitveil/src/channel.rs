//! Per-channel bit packing shared by [`combine`](crate::combine) and
//! [`extract`](crate::extract).
//!
//! Every channel (R, G, B and A alike) is handled on its own. A carrier sample
//! keeps its top six bits; the bottom two hold a 4-level summary of the
//! payload sample.

/// Bits of a carrier sample that survive embedding.
pub const HIGH_MASK: u8 = 0xFC;

/// Bits of an encoded sample that hold the payload pair.
pub const LOW_MASK: u8 = 0x03;

/// Width of one quantization level in the 8-bit range.
pub const QUANT_STEP: u8 = 64;

/// Zero the two least significant bits of `s`.
#[inline]
pub fn high_bits(s: u8) -> u8 {
    s & HIGH_MASK
}

/// Reduce an 8-bit sample to one of four levels, 0..=3.
#[inline]
pub fn quantize(p: u8) -> u8 {
    p / QUANT_STEP
}

/// Map a 2-bit pair back to 0, 64, 128 or 192. Bits above the pair are ignored.
#[inline]
pub fn dequantize(pair: u8) -> u8 {
    (pair & LOW_MASK) * QUANT_STEP
}

/// Carrier's high six bits joined with the payload's quantized pair.
#[inline]
pub fn embed(carrier: u8, payload: u8) -> u8 {
    high_bits(carrier) | quantize(payload)
}

/// Rebuild a payload sample from the low bits of an encoded sample.
#[inline]
pub fn recover(encoded: u8) -> u8 {
    dequantize(encoded & LOW_MASK)
}

#[inline]
pub fn embed_pixel(carrier: [u8; 4], payload: [u8; 4]) -> [u8; 4] {
    std::array::from_fn(|c| embed(carrier[c], payload[c]))
}

#[inline]
pub fn recover_pixel(encoded: [u8; 4]) -> [u8; 4] {
    encoded.map(recover)
}
