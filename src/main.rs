// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-forge: generate translated JSON localization files
//!
//! Reads a source-language catalog and writes one translated copy per target
//! language, using LibreTranslate, Google Translate, or an offline table of
//! common UI terms.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use locale_forge::batch::{self, BatchConfig};
use locale_forge::config::GeneratorProfile;
use locale_forge::languages::{self, REGISTRY};
use locale_forge::translate::{self, BackendKind, TreeTranslator};
use locale_forge::writer::{OverwritePolicy, StdinConfirm};
use locale_forge::{diagnostics, lookup, source};
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locale-forge")]
#[command(version)]
#[command(about = "Generate translated JSON localization files from a source-language catalog")]
#[command(long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one translated file per target language
    Generate {
        /// Source-language JSON file (default: en.json)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory (default: current directory, or `translations` with --parallel)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Target language codes (default: the full registry)
        #[arg(short, long, value_delimiter = ',')]
        langs: Option<Vec<String>>,

        /// Translation backend (asked interactively when omitted)
        #[arg(short, long, value_enum)]
        backend: Option<BackendArg>,

        /// One worker per language instead of a sequential loop
        #[arg(long)]
        parallel: bool,

        /// Overwrite existing files without asking
        #[arg(long, conflicts_with = "skip_existing")]
        overwrite: bool,

        /// Keep existing files without asking
        #[arg(long)]
        skip_existing: bool,

        /// Pause between languages in sequential mode, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Generator profile (JSON or YAML)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Write a JSON run report
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// LibreTranslate server URL
        #[arg(long)]
        libre_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Suppress the summary table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Translate a single string and print it
    Text {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language code
        #[arg(short, long)]
        lang: String,

        /// Translation backend
        #[arg(short, long, value_enum, default_value = "lookup")]
        backend: BackendArg,

        /// Source language code
        #[arg(short, long, default_value = "en")]
        source: String,

        /// Generator profile (JSON or YAML)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// LibreTranslate server URL
        #[arg(long)]
        libre_url: Option<String>,
    },

    /// List target languages and lookup-table coverage
    Languages,

    /// Check the source file, output directory and backend configuration
    Check {
        /// Source-language JSON file
        #[arg(short, long, default_value = source::DEFAULT_SOURCE)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum BackendArg {
    Libre,
    Google,
    Lookup,
    Passthrough,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Libre => BackendKind::Libre,
            BackendArg::Google => BackendKind::Google,
            BackendArg::Lookup => BackendKind::Lookup,
            BackendArg::Passthrough => BackendKind::Passthrough,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "locale_forge=debug,warn"
    } else {
        "locale_forge=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn prompt_backend() -> Result<BackendKind> {
    println!("\nChoose translation service:");
    println!("1. LibreTranslate (free, no API key needed)");
    println!("2. Google Translate (free web endpoint)");
    println!("3. Lookup table (offline, common UI terms only)");
    print!("Enter choice (1, 2 or 3): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("reading backend choice")?;
    let choice = answer.trim();
    BackendKind::parse(choice).with_context(|| format!("unrecognised backend choice '{}'", choice))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            out_dir,
            langs,
            backend,
            parallel,
            overwrite,
            skip_existing,
            delay_ms,
            profile,
            report: report_path,
            libre_url,
            timeout_secs,
            quiet,
        } => {
            let profile = GeneratorProfile::load_optional(profile.as_deref())?;

            let input = input
                .or_else(|| profile.input.clone())
                .unwrap_or_else(|| PathBuf::from(source::DEFAULT_SOURCE));
            let tree = match source::load_source(&input) {
                Ok(tree) => tree,
                Err(err) => {
                    eprintln!("{} {}", "Failed to load source file:".red(), err);
                    return Err(err.into());
                }
            };
            println!(
                "Loaded {} with {} top-level keys",
                input.display(),
                source::top_level_len(&tree)
            );

            let codes = langs.unwrap_or_else(|| profile.languages.clone());
            let targets = languages::resolve_targets(&codes)?;

            let kind = match backend.map(BackendKind::from).or(profile.backend) {
                Some(kind) => kind,
                None => prompt_backend()?,
            };

            let mut settings = profile.backend_settings();
            if let Some(url) = libre_url {
                settings.libre_url = url;
            }
            if let Some(secs) = timeout_secs {
                settings.timeout = Duration::from_secs(secs);
            }
            let translator = translate::build_backend(kind, &settings)?;

            let parallel = parallel || profile.parallel.unwrap_or(false);
            let out_dir = out_dir.or_else(|| profile.out_dir.clone()).unwrap_or_else(|| {
                if parallel {
                    PathBuf::from("translations")
                } else {
                    PathBuf::from(".")
                }
            });
            let overwrite = if overwrite {
                OverwritePolicy::Always
            } else if skip_existing {
                OverwritePolicy::Skip
            } else {
                profile.overwrite.unwrap_or(OverwritePolicy::Prompt)
            };
            let delay = delay_ms
                .or(profile.delay_ms)
                .map(Duration::from_millis)
                .unwrap_or_else(|| kind.default_delay());

            println!(
                "Using {} for {} languages -> {}",
                kind.to_string().bold(),
                targets.len(),
                out_dir.display()
            );
            if kind.is_remote() && !parallel {
                println!("This may take a while due to API rate limits...");
            }

            let config = BatchConfig {
                input,
                out_dir,
                targets,
                source_language: profile.source_language().to_string(),
                overwrite,
                parallel,
                delay,
            };
            let report = batch::run(&config, &tree, translator.as_ref(), &mut StdinConfirm)?;
            batch::print_summary(&report, quiet);

            if let Some(path) = report_path {
                batch::write_report(&report, &path)?;
                println!("Report saved to: {}", path.display());
            }

            if report.has_failures() {
                bail!("{} of {} languages failed", report.failed, report.total);
            }
        }

        Commands::Text {
            text,
            lang,
            backend,
            source: source_language,
            profile,
            libre_url,
        } => {
            let target = lang.trim().to_ascii_lowercase();
            if !languages::is_valid_iso639_1(&target) {
                bail!("unknown language code '{}'", lang);
            }
            let profile = GeneratorProfile::load_optional(profile.as_deref())?;
            let mut settings = profile.backend_settings();
            if let Some(url) = libre_url {
                settings.libre_url = url;
            }
            let translator = translate::build_backend(backend.into(), &settings)?;

            let leaf = Value::String(text);
            let walker = TreeTranslator::new(translator.as_ref(), &source_language, &target);
            let (translated, stats) = walker.translate(&leaf);
            if let Value::String(out) = translated {
                println!("{}", out);
            }
            if stats.skipped > 0 {
                eprintln!("{}", "(left as-is: looks like an identifier)".dimmed());
            } else if stats.failed > 0 {
                eprintln!("{}", "(backend failed; source text shown)".yellow());
            }
        }

        Commands::Languages => {
            println!("  {:<6} {:<12} {:>14}", "Code", "Language", "Lookup terms");
            println!("  {}", "-".repeat(34));
            for (code, name) in REGISTRY {
                let count = lookup::entry_count(code);
                let terms = if count > 0 {
                    count.to_string()
                } else {
                    "-".to_string()
                };
                println!("  {:<6} {:<12} {:>14}", code, name, terms);
            }
        }

        Commands::Check { input, out_dir } => {
            diagnostics::run_self_diagnostics(&input, &out_dir)?;
        }
    }

    Ok(())
}
