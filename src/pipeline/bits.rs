/// Most-significant-bit-first bit buffer
///
/// Bits enter at the low end of a 64-bit register and leave from the top of
/// the valid region. Callers drain after every push, so at most
/// `width - 1 + 32` bits are ever held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    buffer: u64,
    bit_count: u32,
}

impl BitAccumulator {
    pub const REGISTER_BITS: u32 = u64::BITS;

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of valid bits currently held
    pub fn bit_count(&self) -> u32 {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.push_bits(u32::from(byte), 8);
    }

    /// Append the low `width` bits of `value`
    pub fn push_bits(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        debug_assert!(
            self.bit_count + width <= Self::REGISTER_BITS,
            "bit accumulator overflow: {} + {}",
            self.bit_count,
            width
        );
        self.buffer = (self.buffer << width) | (u64::from(value) & mask(width));
        self.bit_count += width;
    }

    /// Take the top `width` bits, if that many are held
    pub fn extract_chunk(&mut self, width: u32) -> Option<u32> {
        if self.bit_count < width {
            return None;
        }
        self.bit_count -= width;
        let chunk = (self.buffer >> self.bit_count) & mask(width);
        self.buffer &= mask(self.bit_count);
        Some(chunk as u32)
    }

    /// Iterator over every complete `width`-bit chunk currently held
    pub fn chunks(&mut self, width: u32) -> Chunks<'_> {
        Chunks { acc: self, width }
    }

    /// Emit the remaining bits left-aligned into one final `width`-bit chunk.
    /// Leaves the accumulator empty.
    pub fn flush(&mut self, width: u32) -> Option<u32> {
        if self.bit_count == 0 {
            return None;
        }
        debug_assert!(self.bit_count < width);
        let chunk = (self.buffer << (width - self.bit_count)) & mask(width);
        self.clear();
        Some(chunk as u32)
    }

    /// Drop any held bits
    pub fn clear(&mut self) {
        self.buffer = 0;
        self.bit_count = 0;
    }
}

/// Draining iterator returned by [`BitAccumulator::chunks`]
pub struct Chunks<'a> {
    acc: &'a mut BitAccumulator,
    width: u32,
}

impl Iterator for Chunks<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.acc.extract_chunk(self.width)
    }
}

#[inline]
fn mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
