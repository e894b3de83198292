//! Build-tool integration.
//!
//! A [`GenerateTask`] describes one generation run to an outer build system:
//! which files it reads (a glob over the source directory), which files it
//! declares as outputs, and whether those outputs are stale. The task does not
//! implement a build tool; callers register the inputs/outputs with their own
//! pipeline and invoke [`GenerateTask::run`] when the pipeline decides to.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use glob::glob;

use crate::emitter;
use crate::loader;

#[derive(Debug, Clone)]
pub struct GenerateTask {
    input_dir: PathBuf,
    output_dir: PathBuf,
    extension: String,
    outputs: Vec<PathBuf>,
}

impl GenerateTask {
    /// Describe a generation run from `input_dir` into `output_dir`.
    pub fn new(input_dir: &Path, output_dir: &Path) -> Result<Self> {
        Self::with_extension(input_dir, output_dir, loader::DEFAULT_EXTENSION)
    }

    pub fn with_extension(input_dir: &Path, output_dir: &Path, extension: &str) -> Result<Self> {
        let module = emitter::module_name(input_dir)?;
        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            extension: extension.to_string(),
            outputs: vec![output_dir.join(format!("{module}.elm"))],
        })
    }

    /// Glob pattern matching every tabular input of this task.
    pub fn input_pattern(&self) -> String {
        format!("{}/*.{}", self.input_dir.display(), self.extension)
    }

    /// Current input files, sorted (glob yields them in lexical order).
    pub fn inputs(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.input_pattern();
        let paths = glob(&pattern)
            .with_context(|| format!("Invalid input pattern: {pattern}"))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to list inputs: {pattern}"))?;
        Ok(paths)
    }

    /// The files a run of this task produces.
    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    /// True when any declared output is missing or older than some input.
    pub fn is_stale(&self) -> Result<bool> {
        let mut oldest_output: Option<SystemTime> = None;
        for output in &self.outputs {
            match fs::metadata(output) {
                Ok(meta) => {
                    let modified = meta.modified().with_context(|| {
                        format!("Failed to read mtime: {}", output.display())
                    })?;
                    oldest_output = Some(match oldest_output {
                        Some(current) => current.min(modified),
                        None => modified,
                    });
                }
                Err(_) => return Ok(true),
            }
        }
        let Some(oldest_output) = oldest_output else {
            return Ok(true);
        };

        for input in self.inputs()? {
            let modified = fs::metadata(&input)
                .and_then(|m| m.modified())
                .with_context(|| format!("Failed to read mtime: {}", input.display()))?;
            if modified > oldest_output {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run the whole generation, regardless of staleness.
    pub fn run(&self) -> Result<PathBuf> {
        let corpus = loader::load_directory(&self.input_dir, &self.extension)?;
        emitter::write_module(&corpus, &self.input_dir, &self.output_dir)
    }

    /// Run the generation only when an output is stale; returns the written
    /// path, or `None` when everything was up to date.
    pub fn run_if_stale(&self) -> Result<Option<PathBuf>> {
        if self.is_stale()? {
            self.run().map(Some)
        } else {
            Ok(None)
        }
    }
}
