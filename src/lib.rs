//! Build helpers for the kernel tree.
//!
//! - [`dispatch`] picks the cross compiler for `-arch=<token>` and hands the
//!   rest of the command line over to it.
//! - [`generate`] writes the CRC-32 known-answer header used by the CRC unit
//!   tests, computed with the calculators in [`check32`].
pub mod check32;
pub mod dispatch;
pub mod generate;

pub use check32::crc32::Crc32;
pub use check32::custom_crc32::CustomCrc32;

pub mod prelude {
    pub use crate::check32::crc32::Crc32;
    pub use crate::check32::custom_crc32::CustomCrc32;
    pub use crate::check32::{CrcConfiguration, Crc32Digest, CRC32_IEEE, CRC32_UEFI};
}
