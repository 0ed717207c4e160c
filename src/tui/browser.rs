//! Browser launch for console deep links.

use crate::error::{Error, Result};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Validate that a URL contains only characters from RFC 3986
/// (unreserved + reserved + percent-encoded). Rejects control characters,
/// spaces, backticks, pipes, and other non-URL characters that could be
/// misinterpreted by platform open commands.
fn is_safe_url(url: &str) -> bool {
    url.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                ':' | '/' | '.' | '-' | '_' | '~' | '?' | '#' | '[' | ']' | '@' | '!' | '$'
                    | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
            )
    })
}

/// Open a URL in the default browser without waiting for it.
///
/// The child's output is discarded so it cannot draw over the TUI.
pub fn open_in_browser(url: &str) -> Result<()> {
    if !is_safe_url(url) {
        return Err(Error::browser("URL contains unsafe characters"));
    }

    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        // explorer.exe takes the URL as a plain argument, no shell involved
        Command::new("explorer")
    } else {
        Command::new("xdg-open")
    };

    command.arg(url);
    spawn_detached(command).map_err(|e| Error::browser(e.to_string()))?;

    tracing::debug!(url, "Launched browser");
    Ok(())
}

/// Spawn `command` with null stdio and wait for it on a background thread
/// so the exited child does not linger as a zombie.
fn spawn_detached(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(exit) if !exit.success() => {
                tracing::warn!(status = %exit, "Browser launcher exited with an error");
            }
            Err(e) => tracing::warn!(error = %e, "Waiting for browser launcher failed"),
            Ok(_) => {}
        }
        status
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_urls_are_safe() {
        assert!(is_safe_url(
            "https://us-east-1.console.aws.amazon.com/cloudfront/v3/home#/distributions/E1/invalidations/details/I1"
        ));
    }

    #[test]
    fn test_rejects_shell_metacharacters() {
        assert!(!is_safe_url("https://x.com/`id`"));
        assert!(!is_safe_url("https://x.com/a b"));
        assert!(!is_safe_url("https://x.com/|cat"));
        assert!(open_in_browser("https://x.com/\nrm").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_detached_child_is_waited_for() {
        let handle = spawn_detached(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_missing_launcher_is_an_error() {
        assert!(spawn_detached(Command::new("cfinval-no-such-launcher")).is_err());
    }
}
