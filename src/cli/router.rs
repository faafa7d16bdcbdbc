use std::ffi::OsString;

/// Known subcommands that should NOT trigger review insertion.
/// These match the Commands enum variants in kebab-case, plus clap's
/// built-in help subcommand.
const KNOWN_SUBCOMMANDS: &[&str] = &["review", "agent", "build", "clean", "check", "config", "help"];

/// Route CLI arguments to the appropriate command.
///
/// This function inserts "review" as the default subcommand when the user
/// omits it. This allows `review-agent src/main.rs` to work as an alias for
/// `review-agent review src/main.rs`.
///
/// # Routing Logic
///
/// The router inspects only `args[1]` (the first argument after the program name):
///
/// - If `args[1]` is `--help`, `-h`, `--version`, or `-V`: unchanged (preserve main help/version)
/// - If `args[1]` is a known subcommand: unchanged
/// - If `args[1]` starts with `-` (any flag): insert "review" after program name
/// - If `args[1]` is anything else (a file path): insert "review" after program name
///
/// # Examples
///
/// ```text
/// review-agent src/main.rs            -> review-agent review src/main.rs
/// review-agent -y src/main.rs         -> review-agent review -y src/main.rs
/// review-agent review src/main.rs     -> review-agent review src/main.rs (unchanged)
/// review-agent clean                  -> review-agent clean (unchanged)
/// review-agent --help                 -> review-agent --help (unchanged)
/// ```
///
/// A bare `review-agent` with no arguments routes to `review` as well, which
/// then fails with the usage error for the missing FILES argument.
pub fn route_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // If no args provided (just program name), default to review
    if args.len() < 2 {
        let mut routed = Vec::with_capacity(2);
        if !args.is_empty() {
            routed.push(args[0].clone());
        }
        routed.push("review".into());
        return routed;
    }

    let first_arg = args[1].to_string_lossy();

    // Preserve main --help and --version
    if first_arg == "--help" || first_arg == "-h" || first_arg == "--version" || first_arg == "-V" {
        return args;
    }

    // If first arg is a known subcommand, leave the invocation alone
    if KNOWN_SUBCOMMANDS.contains(&first_arg.as_ref()) {
        return args;
    }

    // If first arg starts with '-' (any flag) OR is not a known subcommand,
    // insert "review" after program name
    let mut routed = Vec::with_capacity(args.len() + 1);
    routed.push(args[0].clone());
    routed.push("review".into());
    routed.extend_from_slice(&args[1..]);
    routed
}
