use crate::{
    predictor::Predictor,
    error::CodecError,
};

// Encoder ------------------------------------------------------------------------------------------------------------------------ Encoder

/// Binary arithmetic encoder over a caller supplied output buffer. The
/// range [low, high] is narrowed in proportion to each predicted bit
/// probability, and settled leading bytes are written out as the two
/// endpoints come to agree on them.
pub struct Encoder<'a> {
    high:       u32,          // Right endpoint of range
    low:        u32,          // Left endpoint of range
    predictor:  Predictor,    // Generates predictions
    out:        &'a mut [u8], // Compressed output
    idx:        usize,        // Number of bytes written
}
impl<'a> Encoder<'a> {
    pub fn new(out: &'a mut [u8]) -> Encoder<'a> {
        Encoder {
            high: 0xFFFFFFFF,
            low: 0,
            predictor: Predictor::new(),
            out,
            idx: 0,
        }
    }

    /// Encode one bit, returning false if the output buffer is full.
    fn encode(&mut self, bit: i32) -> bool {
        let p = self.predictor.p() as u32;
        debug_assert!(p <= 0xFFFF);

        let range = self.high - self.low;
        let mid: u32 = self.low + (range >> 16) * p
                       + ((range & 0xFFFF) * p >> 16);
        debug_assert!(mid >= self.low && mid < self.high);

        if bit == 1 {
            self.high = mid;
        }
        else {
            self.low = mid + 1;
        }
        self.predictor.update(bit);

        while ((self.high ^ self.low) & 0xFF000000) == 0 {
            if self.idx >= self.out.len() { return false; }
            self.out[self.idx] = (self.high >> 24) as u8;
            self.idx += 1;
            self.high = (self.high << 8) + 255;
            self.low <<= 8;
        }
        true
    }

    /// Compress input, framing each byte as a leading 1 followed by its
    /// 8 bits from MSB to LSB, then a single 0 marking the end of the
    /// stream. Returns the compressed size, or BufferTooSmall if the
    /// output buffer filled first.
    pub fn compress(&mut self, input: &[u8]) -> Result<usize, CodecError> {
        for byte in input.iter() {
            if !self.encode(1) { return Err(CodecError::BufferTooSmall); }
            for i in (0..=7).rev() {
                if !self.encode(((*byte >> i) & 1) as i32) {
                    return Err(CodecError::BufferTooSmall);
                }
            }
        }
        if !self.encode(0) { return Err(CodecError::BufferTooSmall); }
        if !self.flush() { return Err(CodecError::BufferTooSmall); }
        Ok(self.idx)
    }

    fn flush(&mut self) -> bool {
        while ((self.high ^ self.low) & 0xFF000000) == 0 {
            if self.idx >= self.out.len() { return false; }
            self.out[self.idx] = (self.high >> 24) as u8;
            self.idx += 1;
            self.high = (self.high << 8) + 255;
            self.low <<= 8;
        }
        // First byte on which the endpoints disagree anchors the decoder
        if self.idx >= self.out.len() { return false; }
        self.out[self.idx] = (self.high >> 24) as u8;
        self.idx += 1;
        true
    }
}
// ----------------------------------------------------------------------------------------------------------------------------------------
