use crate::check32::{CrcConfiguration, CrcError, Crc32Digest};

enum Kernel {
    Naive,
    ReflectedLookup(Box<[[u32; 256]; 16]>),
    NormalLookup(Box<[u32; 256]>),
}

/// CRC-32 calculator for an arbitrary [`CrcConfiguration`].
pub struct CustomCrc32 {
    config: CrcConfiguration,
    kernel: Kernel,
    register: u32,
}

impl CustomCrc32 {
    /// Creates a new `CustomCrc32` using naive approach
    pub fn new_naive(config: CrcConfiguration) -> Result<Self, CrcError> {
        config.validate()?;
        Ok(Self {
            config,
            kernel: Kernel::Naive,
            register: config.initial_register(),
        })
    }

    /// Creates a new `CustomCrc32` using a table lookup approach
    /// - reflected configurations use slice-by-16 tables
    /// - otherwise a single MSB-first byte table
    pub fn new_lookup(config: CrcConfiguration) -> Result<Self, CrcError> {
        config.validate()?;
        let kernel = if config.reflect_input {
            Kernel::ReflectedLookup(Box::new(Self::generate_lookup_table_16(
                config.polynomial,
            )))
        } else {
            Kernel::NormalLookup(Box::new(Self::generate_normal_lookup_table(
                config.polynomial,
            )))
        };
        Ok(Self {
            config,
            kernel,
            register: config.initial_register(),
        })
    }

    pub fn config(&self) -> &CrcConfiguration {
        &self.config
    }

    pub const fn crc32_naive(mut crc: u32, polynomial: u32, data: &[u8]) -> u32 {
        let polynomial = polynomial.reverse_bits();
        let mut i = 0;
        let mut j = 0;
        while i < data.len() {
            crc ^= data[i] as u32;

            while j < 8 {
                if crc & 1u32 == 1u32 {
                    crc = crc >> 1 ^ polynomial;
                } else {
                    crc >>= 1;
                }
                j += 1;
            }
            j = 0;
            i += 1;
        }

        crc
    }

    pub const fn crc32_naive_normal(mut crc: u32, polynomial: u32, data: &[u8]) -> u32 {
        let mut i = 0;
        let mut j = 0;
        while i < data.len() {
            crc ^= (data[i] as u32) << 24;

            while j < 8 {
                if crc & 0x8000_0000 != 0 {
                    crc = crc << 1 ^ polynomial;
                } else {
                    crc <<= 1;
                }
                j += 1;
            }
            j = 0;
            i += 1;
        }

        crc
    }

    pub fn crc32_lookup(mut crc: u32, lookup_table: &[[u32; 256]; 16], mut data: &[u8]) -> u32 {
        while data.len() >= 16 {
            crc = lookup_table[0][data[15] as usize]
                ^ lookup_table[1][data[14] as usize]
                ^ lookup_table[2][data[13] as usize]
                ^ lookup_table[3][data[12] as usize]
                ^ lookup_table[4][data[11] as usize]
                ^ lookup_table[5][data[10] as usize]
                ^ lookup_table[6][data[9] as usize]
                ^ lookup_table[7][data[8] as usize]
                ^ lookup_table[8][data[7] as usize]
                ^ lookup_table[9][data[6] as usize]
                ^ lookup_table[10][data[5] as usize]
                ^ lookup_table[11][data[4] as usize]
                ^ lookup_table[12][data[3] as usize ^ ((crc >> 24) & 0xFF) as usize]
                ^ lookup_table[13][data[2] as usize ^ ((crc >> 16) & 0xFF) as usize]
                ^ lookup_table[14][data[1] as usize ^ ((crc >> 8) & 0xFF) as usize]
                ^ lookup_table[15][data[0] as usize ^ ((crc) & 0xFF) as usize];
            data = &data[16..];
        }
        for &b in data {
            crc = lookup_table[0][((crc as u8) ^ b) as usize] ^ (crc >> 8);
        }

        crc
    }

    pub fn crc32_lookup_normal(mut crc: u32, lookup_table: &[u32; 256], data: &[u8]) -> u32 {
        for &b in data {
            crc = lookup_table[(((crc >> 24) as u8) ^ b) as usize] ^ (crc << 8);
        }

        crc
    }

    pub(crate) const fn generate_lookup_table_16(polynomial: u32) -> [[u32; 256]; 16] {
        let mut table = [[0; 256]; 16];

        table[0] = Self::generate_lookup_table(polynomial);
        let mut length = 0;
        let mut j = 1;

        while length < 256 {
            let mut crc = table[0][length];
            while j < 16 {
                crc = (crc >> 8) ^ table[0][crc as u8 as usize];
                table[j][length] = crc;
                j += 1;
            }
            j = 1;
            length += 1;
        }

        table
    }

    pub(crate) const fn generate_lookup_table(mut polynomial: u32) -> [u32; 256] {
        let mut table = [0; 256];
        polynomial = polynomial.reverse_bits();
        let mut length = 0;
        let mut crc;
        let mut j = 0;

        while length < 256 {
            crc = length;
            while j < 8 {
                if crc & 1u32 == 1u32 {
                    crc = (crc >> 1) ^ polynomial;
                } else {
                    crc >>= 1;
                }
                j += 1;
            }
            table[length as usize] = crc;
            j = 0;
            length += 1;
        }

        table
    }

    pub(crate) const fn generate_normal_lookup_table(polynomial: u32) -> [u32; 256] {
        let mut table = [0; 256];
        let mut length = 0;
        let mut crc: u32;
        let mut j = 0;

        while length < 256 {
            crc = (length as u32) << 24;
            while j < 8 {
                if crc & 0x8000_0000 != 0 {
                    crc = (crc << 1) ^ polynomial;
                } else {
                    crc <<= 1;
                }
                j += 1;
            }
            table[length] = crc;
            j = 0;
            length += 1;
        }

        table
    }
}

impl Crc32Digest for CustomCrc32 {
    fn update(&mut self, data: &[u8]) {
        self.register = match &self.kernel {
            Kernel::Naive if self.config.reflect_input => {
                Self::crc32_naive(self.register, self.config.polynomial, data)
            }
            Kernel::Naive => Self::crc32_naive_normal(self.register, self.config.polynomial, data),
            Kernel::ReflectedLookup(table) => Self::crc32_lookup(self.register, table, data),
            Kernel::NormalLookup(table) => Self::crc32_lookup_normal(self.register, table, data),
        };
    }

    fn digest(&self) -> u32 {
        self.config.finalize(self.register)
    }

    fn reset(&mut self) {
        self.register = self.config.initial_register();
    }
}
