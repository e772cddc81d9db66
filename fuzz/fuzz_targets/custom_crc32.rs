#![no_main]
use buildtools::prelude::*;
use libfuzzer_sys::fuzz_target;
use std::convert::TryInto;

fuzz_target!(|data: &[u8]| {
    if data.len() >= 13 {
        let config = CrcConfiguration {
            width: 32,
            polynomial: u32::from_le_bytes(data[..4].try_into().unwrap()),
            init: u32::from_le_bytes(data[4..8].try_into().unwrap()),
            final_xor: u32::from_le_bytes(data[8..12].try_into().unwrap()),
            reflect_input: data[12] & 1 == 1,
            reflect_output: data[12] & 2 == 2,
        };
        let data = &data[13..];
        let mut naive = CustomCrc32::new_naive(config).unwrap();
        let mut lookup = CustomCrc32::new_lookup(config).unwrap();
        naive.update(data);
        lookup.update(data);
        assert_eq!(naive.digest(), lookup.digest());
    }
});
