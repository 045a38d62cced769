//! An adaptive order 0 compressor built on a binary arithmetic coder.
//! Every bit of a stream is predicted from the bits of the current byte
//! seen so far together with the last 8 bits previously observed at that
//! bit position, then coded against that prediction, so the model and
//! the coder train in lockstep on both sides.
//!
//! The codec works purely in memory over caller supplied buffers. The
//! compressed stream carries no header or checksum and delimits itself
//! with a trailing end-of-stream bit, so the same input always produces
//! the same bytes and those bytes alone reproduce the input.

mod decoder;
mod encoder;
mod error;
mod predictor;
mod statemap;
pub mod ffi;

use crate::{
    decoder::Decoder,
    encoder::Encoder,
};
pub use crate::error::CodecError;

/// Compress input into output, returning the compressed size. Returns
/// BufferTooSmall if output cannot hold the whole stream; output may
/// then contain partial data with no meaning of its own. Empty input
/// still produces a small non-empty stream.
pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
    let mut enc = Encoder::new(output);
    enc.compress(input)
}

/// Decompress a stream produced by compress into output, returning the
/// decompressed size. Returns BufferTooSmall if output fills before the
/// end of the stream. Corrupt or truncated input is not detected; the
/// decoder reads zeros past the end of input and stops at whatever
/// end-of-stream bit it decodes.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
    let mut dec = Decoder::new(input);
    dec.decompress(output)
}
