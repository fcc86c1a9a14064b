use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io;
use std::process;
use textscrape::setup;
use textscrape::{OutputFormatter, OutputMode, ProxySettings};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let formatter = OutputFormatter::new(OutputMode::Human);
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let dependencies = setup::dependencies();

    if !setup::check_dependencies(&dependencies) {
        let proxy = match prompt_for_proxy() {
            Ok(proxy) => proxy,
            Err(error) => {
                formatter.error(&format!("{:#}", error));
                return 1;
            }
        };

        let failures = setup::install_dependencies(&dependencies, proxy.as_ref(), &formatter);
        if !failures.is_empty() {
            formatter.warning("Some dependencies failed to install; continuing anyway");
        }
    }

    // No re-check: the extractor invocation below surfaces anything still
    // missing with its own error.
    let program = setup::extractor_program();
    match setup::run_extractor(&program, &args) {
        Ok(status) => status.code().unwrap_or(1),
        Err(error) => {
            formatter.error(&format!(
                "Failed to launch {}: {}",
                program.display(),
                error
            ));
            1
        }
    }
}

fn prompt_for_proxy() -> Result<Option<ProxySettings>> {
    let stdin = io::stdin();
    // The prompt goes to stderr so it never mixes with extracted bytes
    // when the extractor's stdout is piped to a file.
    setup::prompt_for_proxy(stdin.lock(), io::stderr())
        .context("Failed to read proxy address from the terminal")
}
