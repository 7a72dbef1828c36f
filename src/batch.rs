// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch driver: one translated file per target language.
//!
//! Overwrite decisions are taken up front, in language order, so that an
//! interactive prompt never races a worker. Generation then runs either
//! sequentially with a rate-limit pause between languages, or as one rayon
//! task per language on the global pool. Workers share only the read-only
//! source tree and the backend; each writes its own file.

use crate::languages::TargetLanguage;
use crate::translate::{translate_tree, TreeStats, Translator};
use crate::writer::{self, Confirm, OverwritePolicy};
use anyhow::Result;
use colored::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Configuration for a batch run
pub struct BatchConfig {
    /// Source file, recorded in the report
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub targets: Vec<TargetLanguage>,
    pub source_language: String,
    pub overwrite: OverwritePolicy,
    /// One worker per language instead of a sequential loop
    pub parallel: bool,
    /// Pause between languages in sequential mode
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Generated,
    Skipped,
    Failed,
}

/// Result for a single language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageOutcome {
    pub code: String,
    pub name: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub stats: TreeStats,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LanguageOutcome {
    fn skipped(target: &TargetLanguage) -> Self {
        Self {
            code: target.code.clone(),
            name: target.name.clone(),
            status: OutcomeStatus::Skipped,
            path: None,
            stats: TreeStats::default(),
            elapsed_ms: 0,
            error: None,
        }
    }
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub created_at: String,
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub backend: String,
    pub parallel: bool,
    pub total: usize,
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub stats: TreeStats,
    pub results: Vec<LanguageOutcome>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Decide, in order, which targets will be written.
fn plan(config: &BatchConfig, confirm: &mut dyn Confirm) -> Vec<(TargetLanguage, bool)> {
    config
        .targets
        .iter()
        .map(|target| {
            let path = writer::output_path(&config.out_dir, &target.code);
            let write = writer::should_write(&path, config.overwrite, confirm);
            if !write {
                info!(lang = %target.code, path = %path.display(), "keeping existing file");
            }
            (target.clone(), write)
        })
        .collect()
}

/// Translate and write one language. Never fails; errors land in the outcome.
pub fn generate_language(
    target: &TargetLanguage,
    tree: &Value,
    source_language: &str,
    backend: &dyn Translator,
    out_dir: &Path,
) -> LanguageOutcome {
    info!(lang = %target.code, name = %target.name, "generating {}", target.file_name());
    let started = Instant::now();
    let (translated, stats) = translate_tree(tree, source_language, &target.code, backend);

    let written = writer::write_translation(out_dir, &target.code, &translated);
    let (status, path, error) = match written {
        Ok(path) => {
            info!(lang = %target.code, path = %path.display(), "generated");
            (OutcomeStatus::Generated, Some(path), None)
        }
        Err(err) => {
            let detail = format!("{:#}", err);
            error!(lang = %target.code, error = %detail, "failed to write translation");
            (OutcomeStatus::Failed, None, Some(detail))
        }
    };

    LanguageOutcome {
        code: target.code.clone(),
        name: target.name.clone(),
        status,
        path,
        stats,
        elapsed_ms: started.elapsed().as_millis() as u64,
        error,
    }
}

/// Run the batch across every configured target.
pub fn run(
    config: &BatchConfig,
    tree: &Value,
    backend: &dyn Translator,
    confirm: &mut dyn Confirm,
) -> Result<BatchReport> {
    if config.out_dir.exists() && !config.out_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", config.out_dir.display());
    }

    let planned = plan(config, confirm);
    let source = config.source_language.as_str();

    let results: Vec<LanguageOutcome> = if config.parallel {
        planned
            .par_iter()
            .map(|(target, write)| {
                if *write {
                    let outcome = generate_language(target, tree, source, backend, &config.out_dir);
                    info!(lang = %outcome.code, "finished");
                    outcome
                } else {
                    LanguageOutcome::skipped(target)
                }
            })
            .collect()
    } else {
        let mut results = Vec::with_capacity(planned.len());
        let mut first = true;
        for (target, write) in &planned {
            if !*write {
                results.push(LanguageOutcome::skipped(target));
                continue;
            }
            if !first && !config.delay.is_zero() {
                thread::sleep(config.delay);
            }
            first = false;
            results.push(generate_language(target, tree, source, backend, &config.out_dir));
        }
        results
    };

    let count = |status: OutcomeStatus| results.iter().filter(|r| r.status == status).count();
    let generated = count(OutcomeStatus::Generated);
    let skipped = count(OutcomeStatus::Skipped);
    let failed = count(OutcomeStatus::Failed);
    let mut stats = TreeStats::default();
    for result in &results {
        stats.merge(&result.stats);
    }

    Ok(BatchReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        input: config.input.clone(),
        out_dir: config.out_dir.clone(),
        backend: backend.name().to_string(),
        parallel: config.parallel,
        total: results.len(),
        generated,
        skipped,
        failed,
        stats,
        results,
    })
}

/// Print a summary table to the terminal
pub fn print_summary(report: &BatchReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "=".repeat(50));
    println!(
        "Backend: {}  |  Mode: {}  |  Output: {}",
        report.backend,
        if report.parallel { "parallel" } else { "sequential" },
        report.out_dir.display()
    );
    println!();
    println!(
        "  {:<6} {:<12} {:<10} {:>7} {:>7} {:>7} {:>7}",
        "Code", "Language", "Status", "Trans", "Same", "Skip", "Fail"
    );
    println!("  {}", "-".repeat(62));

    for result in &report.results {
        // pad before colouring; escape codes would throw off the width
        let status = match result.status {
            OutcomeStatus::Generated => format!("{:<10}", "generated").green(),
            OutcomeStatus::Skipped => format!("{:<10}", "skipped").yellow(),
            OutcomeStatus::Failed => format!("{:<10}", "FAILED").red(),
        };
        println!(
            "  {:<6} {:<12} {} {:>7} {:>7} {:>7} {:>7}",
            result.code,
            result.name,
            status,
            result.stats.translated,
            result.stats.unchanged,
            result.stats.skipped,
            result.stats.failed,
        );
        if let Some(err) = &result.error {
            println!("         {}", err.red());
        }
    }

    println!();
    println!(
        "{} {}/{} files",
        "Successfully generated:".bold(),
        report.generated,
        report.total
    );
    if report.skipped > 0 {
        println!("Kept existing: {}", report.skipped);
    }
    if report.stats.failed > 0 {
        println!(
            "{}",
            format!(
                "{} strings kept in the source language after backend errors",
                report.stats.failed
            )
            .yellow()
        );
    }
    if report.has_failures() {
        println!("{}", "Some files failed to generate. Check the errors above.".red());
    }
}

/// Write batch report as JSON
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
