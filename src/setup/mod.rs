//! Dependency bootstrap for the extractor binary.
//!
//! The setup flow runs before extraction: verify that every named
//! dependency is available, install whatever is missing (optionally
//! through an HTTP proxy), then hand off to the extractor subprocess with
//! the original arguments. Install failures are warnings, not fatal; the
//! extractor invocation that follows surfaces any remaining problem.

use crate::error::ScrapeError;
use crate::ui::OutputFormatter;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A named external dependency and how to obtain it.
///
/// `install` is `None` when the dependency ships compiled into the
/// extractor binary and there is nothing to do at setup time.
#[derive(Debug, Clone)]
pub struct Dependency {
    pub name: String,
    pub url: String,
    pub install: Option<String>,
}

impl Dependency {
    pub fn new(name: &str, url: &str, install: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            install: install.map(str::to_string),
        }
    }
}

/// The dependencies required by the extractor.
///
/// The format libraries are linked statically and carry no install
/// command; the extractor binary itself is fetched from the registry when
/// it is not present on the system.
pub fn dependencies() -> Vec<Dependency> {
    vec![
        Dependency::new(
            "textscrape",
            "https://crates.io/crates/textscrape",
            Some("cargo install --locked textscrape"),
        ),
        Dependency::new("scraper", "https://crates.io/crates/scraper", None),
        Dependency::new("calamine", "https://crates.io/crates/calamine", None),
        Dependency::new("lopdf", "https://crates.io/crates/lopdf", None),
    ]
}

/// Proxy configuration threaded explicitly into install commands.
///
/// The address is applied to each spawned command's environment rather
/// than to this process, so nothing outside the install step sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    address: String,
}

impl ProxySettings {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn apply_to(&self, command: &mut Command) {
        command
            .env("HTTP_PROXY", &self.address)
            .env("HTTPS_PROXY", &self.address);
    }
}

/// Check whether every dependency with an install command is satisfied.
///
/// Each command is executed through the shell; the first non-zero exit
/// short-circuits to `false`. A command that cannot be spawned at all
/// counts as missing.
pub fn check_dependencies(dependencies: &[Dependency]) -> bool {
    for dependency in dependencies {
        let Some(ref command) = dependency.install else {
            continue; // nothing to install, nothing to check
        };

        match shell_command(command).status() {
            Ok(status) if status.success() => {}
            _ => return false,
        }
    }
    true
}

/// Run every install command, threading the proxy into each one.
///
/// Failures are reported as warnings and collected; the remaining
/// dependencies are still attempted.
pub fn install_dependencies(
    dependencies: &[Dependency],
    proxy: Option<&ProxySettings>,
    formatter: &OutputFormatter,
) -> Vec<ScrapeError> {
    let mut failures = Vec::new();

    for dependency in dependencies {
        let Some(ref command) = dependency.install else {
            continue;
        };

        formatter.info(&format!(
            "Installing {} from {}",
            dependency.name, dependency.url
        ));

        let mut install = shell_command(command);
        if let Some(proxy) = proxy {
            proxy.apply_to(&mut install);
        }

        match install.status() {
            Ok(status) if status.success() => {}
            _ => {
                formatter.warning(&format!("Failed to install {}", dependency.name));
                failures.push(ScrapeError::DependencyInstall {
                    name: dependency.name.clone(),
                });
            }
        }
    }

    failures
}

/// Prompt interactively for a proxy address; blank input means no proxy.
///
/// Reader and writer are injected so the prompt is testable without a
/// terminal.
pub fn prompt_for_proxy<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> io::Result<Option<ProxySettings>> {
    write!(
        writer,
        "Enter a proxy server (e.g. http://proxy.example.com:8080), or leave blank: "
    )?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let address = line.trim();
    if address.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ProxySettings::new(address)))
    }
}

/// Locate the extractor binary.
///
/// Prefers a sibling of the setup binary (the normal install layout) and
/// falls back to a PATH lookup.
pub fn extractor_program() -> PathBuf {
    if let Ok(current) = std::env::current_exe() {
        if let Some(directory) = current.parent() {
            let mut sibling = directory.join("textscrape");
            if cfg!(windows) {
                sibling.set_extension("exe");
            }
            if sibling.is_file() {
                return sibling;
            }
        }
    }
    PathBuf::from("textscrape")
}

/// Re-invoke the extractor with the original arguments and block on it.
pub fn run_extractor(program: &Path, args: &[OsString]) -> io::Result<ExitStatus> {
    Command::new(program).args(args).status()
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.args(["/C", command]);
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.args(["-c", command]);
        shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::io::Cursor;

    fn plain_formatter() -> OutputFormatter {
        OutputFormatter::new(OutputMode::Plain)
    }

    #[cfg(unix)]
    #[test]
    fn test_check_passes_when_all_commands_succeed() {
        let deps = vec![
            Dependency::new("a", "https://example.com/a", Some("true")),
            Dependency::new("b", "https://example.com/b", None),
            Dependency::new("c", "https://example.com/c", Some("true")),
        ];
        assert!(check_dependencies(&deps));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_short_circuits_on_first_failure() {
        let deps = vec![
            Dependency::new("a", "https://example.com/a", Some("false")),
            Dependency::new("b", "https://example.com/b", Some("true")),
        ];
        assert!(!check_dependencies(&deps));
    }

    #[test]
    fn test_check_ignores_already_satisfied_entries() {
        let deps = vec![Dependency::new("a", "https://example.com/a", None)];
        assert!(check_dependencies(&deps));
    }

    #[cfg(unix)]
    #[test]
    fn test_install_continues_past_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("installed");
        let touch = format!("touch {}", marker.display());
        let deps = vec![
            Dependency::new("broken", "https://example.com/broken", Some("false")),
            Dependency::new("ok", "https://example.com/ok", Some(touch.as_str())),
        ];

        let failures = install_dependencies(&deps, None, &plain_formatter());

        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            ScrapeError::DependencyInstall { ref name } if name == "broken"
        ));
        assert!(marker.exists(), "later installs must still run");
    }

    #[cfg(unix)]
    #[test]
    fn test_install_threads_proxy_into_command_environment() {
        let dir = tempfile::TempDir::new().unwrap();
        let capture = dir.path().join("proxy");
        let probe = format!(r#"printf '%s' "$HTTP_PROXY" > {}"#, capture.display());
        let deps = vec![Dependency::new(
            "probe",
            "https://example.com/probe",
            Some(probe.as_str()),
        )];
        let proxy = ProxySettings::new("http://proxy.example.com:8080");

        let failures = install_dependencies(&deps, Some(&proxy), &plain_formatter());

        assert!(failures.is_empty());
        let seen = std::fs::read_to_string(&capture).unwrap();
        assert_eq!(seen, "http://proxy.example.com:8080");
        // The proxy is scoped to the child command, not this process.
        assert_ne!(std::env::var("HTTP_PROXY").ok().as_deref(), Some(seen.as_str()));
    }

    #[test]
    fn test_prompt_accepts_proxy_address() {
        let input = Cursor::new(b"http://proxy.example.com:8080\n".to_vec());
        let mut output = Vec::new();

        let proxy = prompt_for_proxy(input, &mut output).unwrap();

        assert_eq!(
            proxy,
            Some(ProxySettings::new("http://proxy.example.com:8080"))
        );
        let prompt_text = String::from_utf8(output).unwrap();
        assert!(prompt_text.contains("proxy server"));
    }

    #[test]
    fn test_prompt_blank_input_means_no_proxy() {
        let input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let proxy = prompt_for_proxy(input, &mut output).unwrap();
        assert_eq!(proxy, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_extractor_forwards_arguments_and_exit_status() {
        let program = PathBuf::from("sh");
        let args = [OsString::from("-c"), OsString::from("exit 7")];

        let status = run_extractor(&program, &args).unwrap();
        assert_eq!(status.code(), Some(7));
    }

    #[test]
    fn test_extractor_program_falls_back_to_path_lookup() {
        // In a test build there is no sibling release binary to find.
        let program = extractor_program();
        assert!(program.to_string_lossy().contains("textscrape"));
    }
}
