use std::{fs, path::Path, path::PathBuf};

use anyhow::Result;

use super::args::{Arguments, CheckCommand, Command, GenerateCommand};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::emitter;
use crate::loader;
use crate::task::GenerateTask;

/// Per-table statistics for verbose reporting.
pub struct TableStat {
    pub name: String,
    pub entries: usize,
}

/// Outcome of a successful command run, consumed by the report printer.
pub enum RunSummary {
    Generated {
        module_path: PathBuf,
        languages: usize,
        tables: Vec<TableStat>,
    },
    UpToDate {
        outputs: Vec<PathBuf>,
    },
    Checked {
        languages: usize,
        tables: Vec<TableStat>,
    },
    Init {
        path: PathBuf,
    },
}

pub fn run(Arguments { command }: Arguments) -> Result<RunSummary> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn generate(cmd: GenerateCommand) -> Result<RunSummary> {
    let config = Config::load()?;
    let extension = cmd.common.extension.unwrap_or(config.extension);
    let output_dir = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(config.output_dir));

    if cmd.if_stale {
        let task = GenerateTask::with_extension(&cmd.common.source, &output_dir, &extension)?;
        if !task.is_stale()? {
            return Ok(RunSummary::UpToDate {
                outputs: task.outputs().to_vec(),
            });
        }
    }

    let corpus = loader::load_directory(&cmd.common.source, &extension)?;
    let module_path = emitter::write_module(&corpus, &cmd.common.source, &output_dir)?;
    Ok(RunSummary::Generated {
        module_path,
        languages: corpus.languages.len(),
        tables: table_stats(&corpus.tables),
    })
}

fn check(cmd: CheckCommand) -> Result<RunSummary> {
    let config = Config::load()?;
    let extension = cmd.common.extension.unwrap_or(config.extension);

    let corpus = loader::load_directory(&cmd.common.source, &extension)?;
    emitter::validate(&corpus)?;
    Ok(RunSummary::Checked {
        languages: corpus.languages.len(),
        tables: table_stats(&corpus.tables),
    })
}

fn init() -> Result<RunSummary> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(RunSummary::Init {
        path: config_path.to_path_buf(),
    })
}

fn table_stats(tables: &[crate::model::TranslationTable]) -> Vec<TableStat> {
    tables
        .iter()
        .map(|t| TableStat {
            name: t.name.clone(),
            entries: t.entries.len(),
        })
        .collect()
}
