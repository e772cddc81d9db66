//! Redirects a whole compiler command line to an architecture specific
//! cross compiler. The build system can only name one C++ compiler per
//! project, so it names this dispatcher and passes `-arch=<token>` along.

use std::ffi::OsString;
use std::fmt;

use log::{debug, warn};
use snafu::Snafu;

mod launcher;

pub use launcher::{ExecLauncher, Launcher};

pub const ARCH_PREFIX: &str = "-arch=";

/// Architecture token to compiler executable. `ia32` and `8664` share a
/// compiler on purpose until the x86-64 toolchain lands.
pub const ARCHITECTURES: [(&str, &str); 4] = [
    ("native", "g++"),
    ("ia32", "i686-linux-gnu-g++"),
    ("8664", "i686-linux-gnu-g++"),
    ("aa64", "aarch64-linux-gnu-g++"),
];

pub fn compiler_for(architecture: &str) -> Option<&'static str> {
    ARCHITECTURES
        .iter()
        .find(|(token, _)| *token == architecture)
        .map(|(_, compiler)| *compiler)
}

#[derive(Debug, Snafu)]
pub enum DispatchError {
    #[snafu(display(
        "Cannot interpret architecture \"{architecture}\"\nArgs: {}",
        ArgList(arguments)
    ))]
    UnknownArchitecture {
        architecture: String,
        arguments: Vec<OsString>,
    },

    #[snafu(display("failed to run {program}: {source}"))]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::UnknownArchitecture { .. } => 2,
            DispatchError::Launch { .. } => 1,
        }
    }
}

struct ArgList<'a>(&'a [OsString]);

impl fmt::Display for ArgList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|arg| arg.to_string_lossy()))
            .finish()
    }
}

/// One dispatcher invocation, split into the selector and what gets forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    architecture: String,
    forwarded: Vec<OsString>,
    original: Vec<OsString>,
}

impl Invocation {
    /// `args[0]` is the dispatcher's own path; it and any later copy of it
    /// are never forwarded.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let original: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let self_path = original.first().cloned();
        let mut architecture: Option<String> = None;
        let mut forwarded = Vec::with_capacity(original.len());

        for arg in original.iter().skip(1) {
            if let Some(token) = arg.to_str().and_then(|s| s.strip_prefix(ARCH_PREFIX)) {
                if let Some(previous) = architecture.replace(token.to_owned()) {
                    warn!("architecture \"{previous}\" overridden by \"{token}\"");
                }
            } else if Some(arg) == self_path.as_ref() {
                debug!("dropping self reference {arg:?}");
            } else {
                forwarded.push(arg.clone());
            }
        }

        Self {
            architecture: architecture.unwrap_or_default(),
            forwarded,
            original,
        }
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn forwarded(&self) -> &[OsString] {
        &self.forwarded
    }

    /// The compiler to run, or the diagnostic for a token nobody knows.
    pub fn resolve(&self) -> Result<&'static str, DispatchError> {
        match compiler_for(&self.architecture) {
            Some(compiler) => {
                debug!("architecture \"{}\" -> {compiler}", self.architecture);
                Ok(compiler)
            }
            None => UnknownArchitectureSnafu {
                architecture: self.architecture.clone(),
                arguments: self.original.clone(),
            }
            .fail(),
        }
    }

    /// Hands the forwarded arguments to the resolved compiler.
    ///
    /// With [`ExecLauncher`] on Unix this only returns on failure.
    pub fn dispatch<L: Launcher>(&self, launcher: &L) -> Result<i32, DispatchError> {
        let compiler = self.resolve()?;
        launcher.launch(compiler, &self.forwarded)
    }
}
