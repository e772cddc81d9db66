//! Emits `crc32results.h++`, the known-answer table the kernel's CRC-32
//! unit tests compare against.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use snafu::{ResultExt, Snafu};

use crate::check32::crc32::Crc32;
use crate::check32::custom_crc32::CustomCrc32;
use crate::check32::{CrcError, CRC32_UEFI};

mod corpus;
mod guard;
mod header;

pub use corpus::{Corpus, TestVector, CHECK_STRING, VALUE_RANGE};
pub use guard::{header_guard, GUARD_PREFIX};
pub use header::{GeneratedHeader, INCLUDES};

pub const DEFAULT_OUTPUT: &str = "build/generated/crc32results.h++";

#[derive(Debug, Snafu)]
pub enum GenerateError {
    #[snafu(display("crc configuration rejected: {source}"))]
    Configuration { source: CrcError },

    #[snafu(display("failed to create directory {}: {source}", path.display()))]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to open {}: {source}", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builds the corpus with the standard calculator for the ieee column and a
/// separately configured one for the uefi column.
pub fn build_corpus() -> Result<Corpus, GenerateError> {
    let mut ieee = Crc32::new_lookup();
    let mut uefi = CustomCrc32::new_lookup(CRC32_UEFI).context(ConfigurationSnafu)?;
    Ok(Corpus::build(&mut ieee, &mut uefi))
}

/// Writes `header` to `path`, creating parent directories and truncating any
/// previous file.
pub fn write_header(path: &Path, header: &GeneratedHeader<'_>) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(CreateDirectorySnafu { path: parent })?;
    }

    let file = File::create(path).context(CreateFileSnafu { path })?;
    let mut out = BufWriter::new(file);
    header
        .render(&mut out)
        .and_then(|()| out.flush())
        .context(WriteFileSnafu { path })?;

    debug!("wrote {} ({})", path.display(), header.guard_name());
    Ok(())
}

/// Full generator run: corpus, header, file.
pub fn generate(path: &Path) -> Result<Corpus, GenerateError> {
    let corpus = build_corpus()?;
    let header = GeneratedHeader::new(&path.to_string_lossy(), &corpus);
    write_header(path, &header)?;
    Ok(corpus)
}
