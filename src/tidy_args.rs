use std::env;

/// Flags that clang-tidy / clang's driver rejects. Any argument containing
/// one of these as a substring is dropped before invocation.
pub const UNSUPPORTED_FLAGS: &[&str] = &[
    "-mno-direct-extern-access",
    "-fstack-protector-strong",
    "-fno-plt",
    "-mfunction-return=thunk-extern",
    "-mindirect-branch=thunk-extern",
    "-mrecord-mcount",
];

pub struct TidyArgs {
    args: Vec<String>,
}

impl TidyArgs {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Everything after the wrapper's own invocation name.
    pub fn from_cli() -> Self {
        Self::new(env::args().skip(1).collect())
    }

    fn is_unsupported(arg: &str) -> bool {
        UNSUPPORTED_FLAGS.iter().any(|bad| arg.contains(bad))
    }

    pub fn filter(&mut self) {
        self.args.retain(|arg| {
            let keep = !Self::is_unsupported(arg);
            if !keep {
                log::debug!("dropping unsupported flag: {}", arg);
            }
            keep
        });
    }

    pub fn output(self) -> Vec<String> {
        self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(args: &[&str]) -> Vec<String> {
        let mut args = TidyArgs::new(args.iter().map(|s| s.to_string()).collect());
        args.filter();
        args.output()
    }

    #[test]
    fn test_drops_denylisted_flags() {
        let out = filtered(&["-Wall", "-fno-plt", "-std=c++17", "-mrecord-mcount=foo"]);
        assert_eq!(out, vec!["-Wall", "-std=c++17"]);
    }

    #[test]
    fn test_substring_match_drops_embedded_flag() {
        let out = filtered(&["-Wl,-fno-plt,-O2", "-O2"]);
        assert_eq!(out, vec!["-O2"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let out = filtered(&["-FNO-PLT"]);
        assert_eq!(out, vec!["-FNO-PLT"]);
    }

    #[test]
    fn test_clean_args_survive_in_order() {
        let args = ["-checks=*", "main.cpp", "--", "-I/usr/include", "-DFOO=1"];
        let out = filtered(&args);
        assert_eq!(out, args.to_vec());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filtered(&[
            "-fstack-protector-strong",
            "-Wall",
            "-mindirect-branch=thunk-extern",
            "-c",
        ]);
        let strs: Vec<&str> = once.iter().map(String::as_str).collect();
        let twice = filtered(&strs);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_args() {
        assert!(filtered(&[]).is_empty());
    }

    #[test]
    fn test_all_denylisted_flags_dropped() {
        let strs: Vec<&str> = UNSUPPORTED_FLAGS.to_vec();
        assert!(filtered(&strs).is_empty());
    }
}
