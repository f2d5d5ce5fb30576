//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command reads
//! - `Into<*Args>` impls bridge dispatch → command handlers

use clap::ArgMatches;
use pathchain_core::DEFAULT_PATH_FIELD;
use pathchain_lib::ParseOptions;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::render::RenderArgs;
use crate::commands::terms::TermsArgs;

/// Flags shared by every command.
#[derive(Debug, PartialEq, Eq)]
pub struct CommonParams {
    pub path: String,
    pub field: String,
    pub repeats: bool,
    pub keep_descendant_suffix: bool,
    pub verbose: u8,
}

impl CommonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<String>("path").cloned().unwrap_or_default(),
            field: m
                .get_one::<String>("field")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PATH_FIELD.to_string()),
            repeats: m.get_flag("repeats"),
            keep_descendant_suffix: m.get_flag("keep_descendant_suffix"),
            verbose: m.get_count("verbose"),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .path_field(self.field.as_str())
            .repeats(self.repeats)
            .strip_descendant_suffix(!self.keep_descendant_suffix)
    }
}

pub struct RenderParams {
    pub common: CommonParams,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            options: p.common.parse_options(),
            path: p.common.path,
        }
    }
}

pub struct TermsParams {
    pub common: CommonParams,
    pub json: bool,
    pub root: bool,
}

impl TermsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
            json: m.get_flag("json"),
            root: m.get_flag("root"),
        }
    }
}

impl From<TermsParams> for TermsArgs {
    fn from(p: TermsParams) -> Self {
        Self {
            options: p.common.parse_options(),
            path: p.common.path,
            json: p.json,
            root: p.root,
        }
    }
}

pub struct DumpParams {
    pub common: CommonParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            options: p.common.parse_options(),
            path: p.common.path,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
