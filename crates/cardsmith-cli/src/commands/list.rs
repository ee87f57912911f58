//! Implementation of the `cardsmith list` command.

use serde::Serialize;

use cardsmith_core::domain::{STAT_GROUPS, StatDescriptor, StatGroup, find_group};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct StatRow<'a> {
    group: &'static str,
    #[serde(flatten)]
    stat: &'a StatDescriptor,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let groups: Vec<&'static StatGroup> = match args.group.as_deref() {
        Some(name) => vec![find_group(name).ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "unknown stat group '{name}' (expected one of: {})",
                STAT_GROUPS
                    .iter()
                    .map(|g| g.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            source: None,
        })?],
        None => STAT_GROUPS.iter().collect(),
    };

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            for group in groups {
                output.header(&format!("{}:", group.name))?;
                for stat in group.stats {
                    output.data(&format!(
                        "  {:<13} {:<13} {:<4} {}",
                        stat.key,
                        stat.label,
                        stat.kind.as_str(),
                        output.dim(stat.path)
                    ))?;
                }
            }
        }

        ListFormat::Json => {
            let table: Vec<StatRow<'_>> = rows(&groups).collect();
            output.json(&table)?;
        }

        ListFormat::List => {
            for row in rows(&groups) {
                output.data(row.stat.key)?;
            }
        }

        ListFormat::Csv => {
            output.data("group,key,label,kind,path")?;
            for row in rows(&groups) {
                output.data(&format!(
                    "{},{},{},{},{}",
                    row.group, row.stat.key, row.stat.label, row.stat.kind, row.stat.path
                ))?;
            }
        }
    }

    Ok(())
}

fn rows<'a>(groups: &'a [&'static StatGroup]) -> impl Iterator<Item = StatRow<'static>> + 'a {
    groups.iter().flat_map(|g| {
        g.stats.iter().map(move |stat| StatRow {
            group: g.name,
            stat,
        })
    })
}
