use std::{
    env,
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

use crate::lib::errors::InstallError;

const DEFAULT_PYTHON: &str = "python3";

/// `major.minor.patch` of a Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the output of `python3 --version` (for example `Python 3.10.12`).
    pub fn parse(raw: &str) -> Option<Self> {
        let version = raw.trim().strip_prefix("Python").unwrap_or(raw).trim();
        let mut parts = version.split('.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        let patch = parts.next().and_then(leading_number).unwrap_or(0);
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn leading_number(part: &str) -> Option<u32> {
    let digits = part
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();
    digits.parse().ok()
}

/// Exit status of a subprocess; `None` when it was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub exit_code: Option<i32>,
}

impl ExitOutcome {
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Abstraction for host access during installation.
pub trait PythonHost {
    fn is_privileged_user(&self) -> bool;
    fn python_version(&self) -> Result<PythonVersion, InstallError>;
    /// Platform identifier in the form of `std::env::consts::OS`.
    fn platform(&self) -> String;
    /// Whether the interpreter ships `venv` and `ensurepip`.
    fn has_venv_support(&self) -> bool;
    fn create_venv(&self, venv_dir: &Path) -> Result<ExitOutcome, InstallError>;
    fn run_in_venv(
        &self,
        venv_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExitOutcome, InstallError>;
}

/// Host that operates against the real system.
pub struct SystemPythonHost {
    python: PathBuf,
}

impl Default for SystemPythonHost {
    fn default() -> Self {
        Self {
            python: PathBuf::from(DEFAULT_PYTHON),
        }
    }
}

impl SystemPythonHost {
    fn python_command(&self) -> Command {
        Command::new(&self.python)
    }

    fn status(mut command: Command, program: &str) -> Result<ExitOutcome, InstallError> {
        let status = command.status().map_err(|source| InstallError::Spawn {
            program: program.to_string(),
            source,
        })?;
        Ok(ExitOutcome {
            exit_code: status.code(),
        })
    }
}

impl PythonHost for SystemPythonHost {
    fn is_privileged_user(&self) -> bool {
        unsafe { libc::getuid() == 0 }
    }

    fn python_version(&self) -> Result<PythonVersion, InstallError> {
        let output = self
            .python_command()
            .arg("--version")
            .output()
            .map_err(|err| InstallError::PythonUnavailable {
                message: format!("failed to run {}: {err}", self.python.display()),
            })?;
        // Python 2 printed the version on stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        PythonVersion::parse(&stdout)
            .or_else(|| PythonVersion::parse(&stderr))
            .ok_or_else(|| InstallError::PythonUnavailable {
                message: format!("unexpected `--version` output: {}", stdout.trim()),
            })
    }

    fn platform(&self) -> String {
        env::consts::OS.to_string()
    }

    fn has_venv_support(&self) -> bool {
        self.python_command()
            .args(["-c", "import ensurepip, venv"])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn create_venv(&self, venv_dir: &Path) -> Result<ExitOutcome, InstallError> {
        let mut command = self.python_command();
        command.args(["-m", "venv", "--clear"]).arg(venv_dir);
        Self::status(command, &self.python.display().to_string())
    }

    fn run_in_venv(
        &self,
        venv_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExitOutcome, InstallError> {
        Self::status(venv_command(venv_dir, program, args), program)
    }
}

/// Command for `program` inside the venv: `bin/` executable preferred, `VIRTUAL_ENV` set, `PYTHONHOME` unset.
pub fn venv_command(venv_dir: &Path, program: &str, args: &[&str]) -> Command {
    let bin_dir = venv_dir.join("bin");
    let candidate = bin_dir.join(program);
    let executable = if candidate.exists() {
        candidate
    } else {
        PathBuf::from(program)
    };

    let mut command = Command::new(executable);
    command
        .args(args)
        .env_remove("PYTHONHOME")
        .env("PATH", venv_path_value(&bin_dir, env::var_os("PATH")))
        .env("VIRTUAL_ENV", venv_dir);
    command
}

/// `PATH` for venv subprocesses: the venv `bin` directory first, then the inherited entries.
pub fn venv_path_value(bin_dir: &Path, inherited: Option<OsString>) -> OsString {
    let mut entries = vec![bin_dir.to_path_buf()];
    if let Some(inherited) = inherited {
        entries.extend(env::split_paths(&inherited));
    }
    env::join_paths(entries).unwrap_or_else(|_| bin_dir.as_os_str().to_os_string())
}
