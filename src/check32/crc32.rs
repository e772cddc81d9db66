use crate::check32::custom_crc32::CustomCrc32;
use crate::check32::{Crc32Digest, CRC32_IEEE};

use super::UpdateFn;

const CRC32_POLYNOMIAL: u32 = CRC32_IEEE.polynomial;
// the kernels below hardcode reflection and the !0 init / final xor
const _: () = assert!(
    CRC32_IEEE.width == 32
        && CRC32_IEEE.init == !0
        && CRC32_IEEE.final_xor == !0
        && CRC32_IEEE.reflect_input
        && CRC32_IEEE.reflect_output
);
const CRC32_LOOKUP_TABLE: [[u32; 256]; 16] =
    CustomCrc32::generate_lookup_table_16(CRC32_POLYNOMIAL);

/// The standard CRC-32 with its tables built at compile time.
///
/// `state` always holds a finished checksum, so a digest can be resumed by
/// feeding more data.
pub struct Crc32 {
    state: u32,
    compute: UpdateFn,
}

impl Crc32 {
    /// Creates a new `Crc32` using naive approach
    pub fn new_naive() -> Self {
        Self {
            state: 0,
            compute: Self::compute_naive,
        }
    }

    /// Creates a new `Crc32` using a table lookup approach
    pub fn new_lookup() -> Self {
        Self {
            state: 0,
            compute: Self::compute_lookup,
        }
    }

    fn compute_lookup(prev_crc: u32, data: &[u8]) -> u32 {
        !CustomCrc32::crc32_lookup(!prev_crc, &CRC32_LOOKUP_TABLE, data)
    }

    fn compute_naive(prev_crc: u32, data: &[u8]) -> u32 {
        !CustomCrc32::crc32_naive(!prev_crc, CRC32_POLYNOMIAL, data)
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new_lookup()
    }
}

impl Crc32Digest for Crc32 {
    fn update(&mut self, data: &[u8]) {
        self.state = (self.compute)(self.state, data);
    }

    fn digest(&self) -> u32 {
        self.state
    }

    fn reset(&mut self) {
        self.state = 0;
    }
}
