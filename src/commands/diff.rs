use crate::ChangeDisplayFormat;
use crate::areas::session::Session;
use crate::areas::snapshot::{LoadOptions, Snapshot};
use crate::artifacts::diff::changelog::{Change, ChangeFilter, ChangeType};
use crate::artifacts::diff::profile::Profile;
use crate::artifacts::value::value::Value;
use colored::Colorize;
use regex::Regex;
use std::io::Write;
use std::path::Path;

/// Options controlling a single diff invocation.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub profile: Profile,
    pub load: LoadOptions,
    pub format: ChangeDisplayFormat,
    /// Change types to render; the engine always records all of them
    pub filter: ChangeFilter,
    /// When set, only changes whose rendered path matches are shown
    pub path_pattern: Option<Regex>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            profile: Profile::final_data(),
            load: LoadOptions::default(),
            format: ChangeDisplayFormat::default(),
            filter: ChangeFilter::all(),
            path_pattern: None,
        }
    }
}

impl Session {
    /// Loads both snapshots, diffs them under the configured profile and
    /// renders the (post-filtered) changelog.
    pub fn diff(&self, old: &Path, new: &Path, options: &DiffOptions) -> anyhow::Result<()> {
        let old_snapshot = Snapshot::load(old, &options.load)?;
        let new_snapshot = Snapshot::load(new, &options.load)?;

        let changelog = options
            .profile
            .diff(&old_snapshot.root, &new_snapshot.root)?;

        let changes: Vec<&Change> = changelog
            .iter()
            .filter(|change| change.matches_filter(options.filter))
            .filter(|change| {
                options
                    .path_pattern
                    .as_ref()
                    .is_none_or(|pattern| pattern.is_match(&change.path.to_string()))
            })
            .collect();

        match options.format {
            ChangeDisplayFormat::Long => {
                self.print_long(&old_snapshot, &new_snapshot, &changes)
            }
            ChangeDisplayFormat::NameStatus => self.print_name_status(&changes),
            ChangeDisplayFormat::Json => self.print_json(&changes),
        }
    }

    fn print_long(
        &self,
        old: &Snapshot,
        new: &Snapshot,
        changes: &[&Change],
    ) -> anyhow::Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", snapshot_header(old)).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", snapshot_header(new)).bold()
        )?;

        for change in changes {
            writeln!(self.writer(), "{}", change)?;
        }

        Ok(())
    }

    fn print_name_status(&self, changes: &[&Change]) -> anyhow::Result<()> {
        for change in changes {
            let status = change.change_type.status_char().to_string();
            let status = match change.change_type {
                ChangeType::Create => status.green(),
                ChangeType::Update => status.yellow(),
                ChangeType::Delete => status.red(),
            };
            writeln!(self.writer(), "{}\t{}", status, change.path_label())?;
        }

        Ok(())
    }

    fn print_json(&self, changes: &[&Change]) -> anyhow::Result<()> {
        let entries: Vec<serde_json::Value> = changes
            .iter()
            .map(|change| {
                serde_json::json!({
                    "type": change.change_type.label(),
                    "path": change.path_label(),
                    "from": side_json(&change.from),
                    "to": side_json(&change.to),
                })
            })
            .collect();

        writeln!(
            self.writer(),
            "{}",
            serde_json::to_string_pretty(&entries)?
        )?;

        Ok(())
    }
}

fn snapshot_header(snapshot: &Snapshot) -> String {
    match snapshot.modified {
        Some(modified) => format!(
            "{}\t{}",
            snapshot.source.display(),
            modified.format("%Y-%m-%d %H:%M:%S %z")
        ),
        None => snapshot.source.display().to_string(),
    }
}

fn side_json(side: &Option<Value>) -> serde_json::Value {
    match side {
        Some(value) => serde_json::Value::String(value.to_string()),
        None => serde_json::Value::Null,
    }
}
