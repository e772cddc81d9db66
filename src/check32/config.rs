use snafu::ensure;

use super::{CrcError, UnsupportedWidthSnafu};

/// Rocksoft-style description of a CRC.
///
/// `polynomial` and `init` are written in normal (MSB-first) form regardless
/// of the reflection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcConfiguration {
    pub width: u8,
    pub polynomial: u32,
    pub init: u32,
    pub final_xor: u32,
    pub reflect_input: bool,
    pub reflect_output: bool,
}

/// The standard CRC-32 (ISO-HDLC, zlib, ethernet).
pub const CRC32_IEEE: CrcConfiguration = CrcConfiguration {
    width: 32,
    polynomial: 0x04C11DB7,
    init: 0xFFFFFFFF,
    final_xor: 0xFFFFFFFF,
    reflect_input: true,
    reflect_output: true,
};

/// CRC-32 as the UEFI boot services compute it. Same parameters as
/// [`CRC32_IEEE`], spelled out separately so both calculators get their own
/// configuration.
pub const CRC32_UEFI: CrcConfiguration = CrcConfiguration {
    width: 32,
    polynomial: 0x04C11DB7,
    init: 0xFFFFFFFF,
    final_xor: 0xFFFFFFFF,
    reflect_input: true,
    reflect_output: true,
};

impl CrcConfiguration {
    pub fn validate(&self) -> Result<(), CrcError> {
        ensure!(self.width == 32, UnsupportedWidthSnafu { width: self.width });
        Ok(())
    }

    /// Register value before any data has been folded in.
    pub(crate) const fn initial_register(&self) -> u32 {
        if self.reflect_input {
            self.init.reverse_bits()
        } else {
            self.init
        }
    }

    /// Turns a raw register into the published checksum.
    pub(crate) const fn finalize(&self, register: u32) -> u32 {
        // a reflected register already holds the reflected output
        let crc = if self.reflect_input != self.reflect_output {
            register.reverse_bits()
        } else {
            register
        };
        crc ^ self.final_xor
    }
}
