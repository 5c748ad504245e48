use anyhow::Error;
use okved_config::ConfigError;
use okved_core::CoreError;
use okved_registry::RegistryError;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<RegistryError>().is_some()
            || cause.downcast_ref::<ConfigError>().is_some()
        {
            return ExitCode::from(EXIT_USAGE);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}
