use clang_tidy_wrapper::run;
use clang_tidy_wrapper::utils::reports::init_report_utils;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    init_report_utils()?;
    let code = run()?;
    std::process::exit(code)
}
