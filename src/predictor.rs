use crate::statemap::StateMap;

const LIMIT: usize = 90; // Controls rate of adaptation (higher = slower) (1..255)

// Predictor -------------------------------------------------------------------------------------------------------------------- Predictor

/// A Predictor estimates the probability that the next bit of the stream
/// is a 1. The stream is an order 0 sequence of 9 bit symbols, each byte
/// preceded by a 1 and the whole stream ended by a 0, so cxt is 0 before
/// a framing bit and otherwise holds the bits of the current byte seen
/// so far behind a leading 1. Each bit position additionally remembers
/// the last 8 bits observed at that position, and partial byte plus
/// history together select the StateMap context.
pub struct Predictor {
    cxt:    usize,     // Partial byte with a leading 1, or 0 before a framing bit
    state:  [u8; 256], // Last 8 bits seen at each bit position
    sm:     StateMap,  // Maps partial byte and bit history to a prediction
}
impl Predictor {
    pub fn new() -> Predictor {
        Predictor {
            cxt:    0,
            state:  [0x66; 256],
            sm:     StateMap::new(65536),
        }
    }

    /// Return probability (0..65535) that the next bit is a 1.
    pub fn p(&mut self) -> i32 {
        self.sm.p(self.cxt << 8 | self.state[self.cxt] as usize)
    }

    /// Train the model with bit, then advance the contexts.
    pub fn update(&mut self, bit: i32) {
        debug_assert!(bit == 0 || bit == 1);
        self.sm.update(bit, LIMIT);

        self.state[self.cxt] = self.state[self.cxt] << 1 | bit as u8;

        self.cxt += self.cxt + bit as usize;
        if self.cxt >= 256 { // Byte boundary
            self.cxt = 0;
        }
    }
}
// ----------------------------------------------------------------------------------------------------------------------------------------
