//! Printing through the operating system's print facility.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use tutorforge_core::{QaRecord, TutorError};

use crate::render::print_text;

/// Name of the scratch file handed to the print command. Overwritten each time.
pub const PRINT_FILE_NAME: &str = "temp_qa_print.txt";

/// Sends a text file to a printer.
pub trait PrintHandler {
    fn print_file(&self, path: &Path) -> Result<(), TutorError>;
}

/// Uses `lp` on Unix-likes and the shell `Print` verb on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPrintHandler;

impl SystemPrintHandler {
    fn command(path: &Path) -> Command {
        let (program, args) = print_invocation(path, cfg!(windows));
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

/// Program and arguments that print `path` on the given platform.
///
/// PowerShell re-joins everything after `-Command` with spaces, so the path
/// travels inside one single-quoted command string.
fn print_invocation(path: &Path, windows: bool) -> (&'static str, Vec<OsString>) {
    if windows {
        let quoted = path.display().to_string().replace('\'', "''");
        let script = format!("Start-Process -FilePath '{}' -Verb Print", quoted);
        (
            "powershell",
            vec!["-NoProfile".into(), "-Command".into(), script.into()],
        )
    } else {
        ("lp", vec![path.as_os_str().to_os_string()])
    }
}

impl PrintHandler for SystemPrintHandler {
    fn print_file(&self, path: &Path) -> Result<(), TutorError> {
        let output = Self::command(path).output()?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "Print command failed");
            Err(TutorError::Io(std::io::Error::other(format!(
                "print command exited with {}: {}",
                output.status,
                stderr.trim()
            ))))
        }
    }
}

/// Write the print layout of `record` into `dir` and hand it to `handler`.
/// Returns the path of the written file.
pub fn print_record(
    record: &QaRecord,
    dir: &Path,
    handler: &dyn PrintHandler,
) -> Result<PathBuf, TutorError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(PRINT_FILE_NAME);
    fs::write(&path, print_text(record))?;
    handler.print_file(&path)?;
    info!(path = %path.display(), "Sent record to printer");
    Ok(path)
}

/// Print the current record, or fail with [`TutorError::NoRecord`].
pub fn print_current(
    current: Option<&QaRecord>,
    dir: &Path,
    handler: &dyn PrintHandler,
) -> Result<PathBuf, TutorError> {
    let record = current.ok_or(TutorError::NoRecord)?;
    print_record(record, dir, handler)
}
