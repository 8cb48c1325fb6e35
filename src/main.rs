use anyhow::Result;
use clap::Parser;
use confdiff::areas::output::PagedWriter;
use confdiff::areas::session::Session;
use confdiff::areas::snapshot::LoadOptions;
use confdiff::artifacts::diff::changelog::ChangeFilter;
use confdiff::artifacts::diff::profile::{IgnoreFields, Profile};
use confdiff::commands::diff::DiffOptions;
use confdiff::{ChangeDisplayFormat, ProfilePreset};
use is_terminal::IsTerminal;
use minus::Pager;
use regex::Regex;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "confdiff",
    version = "0.1.0",
    about = "Structural diff for configuration snapshots",
    long_about = "Compares two evaluated configuration snapshots and prints an \
    ordered edit script of create/update/delete entries, each addressed by a \
    path into the tree, instead of a bare equality verdict.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Snapshot to compare from")]
    old: PathBuf,
    #[arg(index = 2, help = "Snapshot to compare against")]
    new: PathBuf,

    #[arg(
        long,
        value_enum,
        default_value_t = ProfilePreset::Final,
        help = "Comparison profile preset"
    )]
    profile: ProfilePreset,
    #[arg(long, help = "Resolve disjunction defaults before comparing")]
    use_defaults: bool,
    #[arg(long, help = "Never report definition fields")]
    ignore_definitions: bool,
    #[arg(long, help = "Never report optional fields")]
    ignore_optional: bool,
    #[arg(long, help = "Never report hidden fields")]
    ignore_hidden: bool,
    #[arg(
        long,
        value_name = "N",
        help = "Abort when the traversal descends deeper than N selectors"
    )]
    max_depth: Option<usize>,

    #[arg(
        long,
        help = "Interpret type-keyword strings (int, string, ...) as type constraints"
    )]
    types: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = ChangeDisplayFormat::Long,
        help = "Changelog rendering format"
    )]
    format: ChangeDisplayFormat,
    #[arg(long, help = "Shorthand for --format name-status")]
    name_status: bool,
    #[arg(
        long,
        value_parser = parse_change_filter,
        value_name = "LETTERS",
        help = "Only show change types from this letter set (C, U, D)"
    )]
    diff_filter: Option<ChangeFilter>,
    #[arg(
        long,
        value_parser = Regex::new,
        value_name = "REGEX",
        help = "Only show changes whose rendered path matches"
    )]
    path: Option<Regex>,

    #[arg(long, help = "Never page the output")]
    no_pager: bool,
}

fn parse_change_filter(s: &str) -> Result<ChangeFilter, String> {
    ChangeFilter::try_parse(s)
        .ok_or_else(|| format!("invalid change filter '{}', expected letters from 'CUD'", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut profile = match cli.profile {
        ProfilePreset::Schema => Profile::schema(),
        ProfilePreset::Final => Profile::final_data(),
    };
    if cli.use_defaults {
        profile.use_defaults = true;
    }
    if cli.ignore_definitions {
        profile.ignore |= IgnoreFields::DEFINITIONS;
    }
    if cli.ignore_optional {
        profile.ignore |= IgnoreFields::OPTIONAL;
    }
    if cli.ignore_hidden {
        profile.ignore |= IgnoreFields::HIDDEN;
    }
    if cli.max_depth.is_some() {
        profile.max_depth = cli.max_depth;
    }

    let format = if cli.name_status {
        ChangeDisplayFormat::NameStatus
    } else {
        cli.format
    };

    let options = DiffOptions {
        profile,
        load: LoadOptions {
            interpret_types: cli.types,
        },
        format,
        filter: cli.diff_filter.unwrap_or(ChangeFilter::all()),
        path_pattern: cli.path,
    };

    if !cli.no_pager && std::io::stdout().is_terminal() {
        let pager = Pager::new();
        let session = Session::new(Box::new(PagedWriter::new(pager.clone())));
        session.diff(&cli.old, &cli.new, &options)?;
        minus::page_all(pager)?;
    } else {
        let session = Session::new(Box::new(std::io::stdout()));
        session.diff(&cli.old, &cli.new, &options)?;
    }

    Ok(())
}
