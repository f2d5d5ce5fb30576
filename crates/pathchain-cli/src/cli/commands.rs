//! Command builders for the CLI.
//!
//! Every command takes the path expression plus the shared chain flags.

use clap::Command;

use super::args::*;

/// Add the flags every command shares.
fn with_chain_args(cmd: Command) -> Command {
    cmd.arg(path_arg())
        .arg(field_arg())
        .arg(repeats_arg())
        .arg(keep_descendant_suffix_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pathchain")
        .about("Inspect structural path-pattern queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(render_command())
        .subcommand(terms_command())
        .subcommand(dump_command())
}

/// Print the canonical string form.
pub fn render_command() -> Command {
    let cmd = Command::new("render")
        .about("Print the canonical string form of a path expression")
        .after_help(
            r#"EXAMPLES:
  pathchain render '/app:company_home//cm:folder'
  pathchain render '/app:company_home//' --keep-descendant-suffix
  echo '/app:company_home' | pathchain render -"#,
        );

    with_chain_args(cmd)
}

/// Print the index terms the chain reads.
pub fn terms_command() -> Command {
    let cmd = Command::new("terms")
        .about("Print the index terms a path expression reads")
        .after_help(
            r#"EXAMPLES:
  pathchain terms '/app:company_home//cm:folder'
  pathchain terms '/app:company_home' --root --json
  pathchain terms '//cm:folder' --field QNAME_PATH"#,
        )
        .arg(json_arg())
        .arg(root_arg());

    with_chain_args(cmd)
}

/// Print the per-step dump.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the steps and terms of a path expression")
        .after_help(
            r#"EXAMPLES:
  pathchain dump '/app:company_home//cm:folder'
  pathchain dump '//cm:*' --repeats --color never"#,
        )
        .arg(color_arg());

    with_chain_args(cmd)
}
