//! `sheq '<expr>'`: evaluate one expression and print its value.

use std::io::{self, Write};
use std::process::ExitCode;

use sheqc::{init_tracing, run_source, Config, Error};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source] = args.as_slice() else {
        eprintln!("usage: sheq '<expr>'");
        return ExitCode::FAILURE;
    };

    let result = Config::from_env()
        .map_err(Error::from)
        .and_then(|config| run_source(source, &config));
    let written = match &result {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output)
                .and_then(|()| stdout.write_all(b"\n"))
                .and_then(|()| stdout.flush())
        }
        Err(err) => err.write_diagnostic(&mut io::stderr().lock()),
    };

    if result.is_ok() && written.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
