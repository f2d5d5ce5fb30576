//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Path expression (positional, `-` reads stdin).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .required(true)
        .help("Path expression, or '-' to read it from stdin")
}

/// Index field holding tokenized paths (--field).
pub fn field_arg() -> Arg {
    Arg::new("field")
        .long("field")
        .value_name("NAME")
        .default_value(pathchain_core::DEFAULT_PATH_FIELD)
        .help("Index field holding tokenized paths")
}

/// Repeating descendant matching (--repeats).
pub fn repeats_arg() -> Arg {
    Arg::new("repeats")
        .long("repeats")
        .action(ArgAction::SetTrue)
        .help("Let descendant steps match across repeated levels")
}

/// Keep trailing `//` and `.` steps (--keep-descendant-suffix).
pub fn keep_descendant_suffix_arg() -> Arg {
    Arg::new("keep_descendant_suffix")
        .long("keep-descendant-suffix")
        .action(ArgAction::SetTrue)
        .help("Keep trailing '//' and '.' steps instead of stripping them")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print terms as a JSON array")
}

/// Include the root term (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .action(ArgAction::SetTrue)
        .help("Include the root term first")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
