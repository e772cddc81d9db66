#![no_main]
use buildtools::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut naive = Crc32::new_naive();
    let mut lookup = Crc32::new_lookup();
    let mut custom = CustomCrc32::new_lookup(CRC32_UEFI).unwrap();
    naive.update(data);
    lookup.update(data);
    custom.update(data);
    let naive_result = naive.digest();
    assert_eq!(naive_result, lookup.digest());
    assert_eq!(naive_result, custom.digest());
});
