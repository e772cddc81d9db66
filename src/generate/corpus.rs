use crate::check32::Crc32Digest;

/// Decimal strings `0..VALUE_RANGE` come first in the corpus.
pub const VALUE_RANGE: u32 = 4096;
/// The catalogue check string, always last.
pub const CHECK_STRING: &str = "123456789";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    pub value: String,
    pub ieee_crc32: u32,
    pub uefi_crc32: u32,
}

/// Every test string with both digests, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    vectors: Vec<TestVector>,
}

impl Corpus {
    pub fn build<A, B>(ieee: &mut A, uefi: &mut B) -> Self
    where
        A: Crc32Digest,
        B: Crc32Digest,
    {
        let vectors = (0..VALUE_RANGE)
            .map(|value| value.to_string())
            .chain(std::iter::once(CHECK_STRING.to_owned()))
            .map(|value| TestVector {
                ieee_crc32: ieee.checksum(value.as_bytes()),
                uefi_crc32: uefi.checksum(value.as_bytes()),
                value,
            })
            .collect();

        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[TestVector] {
        &self.vectors
    }
}
