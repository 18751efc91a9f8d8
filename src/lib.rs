pub mod tidy_args;
pub mod utils;

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use color_eyre::eyre::Result;

use crate::tidy_args::TidyArgs;

pub const TOOL_NAME: &str = "clang-tidy";

/// Exit code reserved for the wrapped tool being absent from PATH.
pub const TOOL_NOT_FOUND: i32 = 1;

pub fn locate_tool(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}

fn invoke(tool: &Path, args: Vec<String>) -> Result<i32> {
    log::debug!("invoking {:?} with args {:?}", tool, args);
    let status = Command::new(tool).args(args).status()?;
    Ok(exit_code(status))
}

fn edit_params() -> Vec<String> {
    let mut args = TidyArgs::from_cli();
    args.filter();
    args.output()
}

/// Locate clang-tidy, strip the flags it rejects, run it, and hand back
/// its exit code. Returns `TOOL_NOT_FOUND` without spawning anything when
/// the tool is absent.
pub fn run() -> Result<i32> {
    let Some(tool) = locate_tool(TOOL_NAME) else {
        eprintln!("Error: {} not found in PATH.", TOOL_NAME);
        return Ok(TOOL_NOT_FOUND);
    };
    invoke(&tool, edit_params())
}
