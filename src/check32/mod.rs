use snafu::Snafu;

type UpdateFn = fn(u32, &[u8]) -> u32;

pub trait Crc32Digest {
    /// Update digest with data
    fn update(&mut self, data: &[u8]);

    /// Returns crc32 digest
    fn digest(&self) -> u32;

    /// Drops everything fed so far
    fn reset(&mut self);

    /// Digest of `data` alone, discarding any previous state
    fn checksum(&mut self, data: &[u8]) -> u32 {
        self.reset();
        self.update(data);
        self.digest()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CrcError {
    #[snafu(display("unsupported crc width {width}, only 32 bit registers are implemented"))]
    UnsupportedWidth { width: u8 },
}

pub mod config;
pub mod crc32;
pub mod custom_crc32;

pub use config::{CrcConfiguration, CRC32_IEEE, CRC32_UEFI};
