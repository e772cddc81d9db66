use std::env;
use std::process;

use buildtools::dispatch::{DispatchError, ExecLauncher, Invocation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = Invocation::from_args(env::args_os());
    match invocation.dispatch(&ExecLauncher) {
        Ok(code) => process::exit(code),
        Err(err @ DispatchError::UnknownArchitecture { .. }) => {
            // the build log only captures stdout
            println!("{err}");
            process::exit(err.exit_code());
        }
        Err(err) => {
            eprintln!("compiler-dispatcher: {err}");
            process::exit(err.exit_code());
        }
    }
}
