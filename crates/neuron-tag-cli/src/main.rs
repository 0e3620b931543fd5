use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use neuron_tag_core::{
    scan_tree, setup, Config, InlineParser, NeuronTagError, RenderContext, Result, RuleSet,
    ScanOptions, TagResolver, DIRECTIVE_NAME,
};

mod args;
use args::{Cli, Commands, ConfigAction, OutputFormat, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Resolve {
            docnames,
            format,
            nodes,
        }) => handle_resolve(&docnames, format, nodes),
        Some(Commands::Scan {
            path,
            format,
            untagged,
            include,
            exclude,
        }) => handle_scan(&base_dir, &path, format, untagged, &include, &exclude),
        Some(Commands::Check) => handle_check(),
        Some(Commands::Tables { format }) => handle_tables(format),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "neuron-tag", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("NEURON_TAG_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".neuron-tag"))
        .unwrap_or_else(|| PathBuf::from(".neuron-tag"))
}

fn handle_resolve(docnames: &[String], format: OutputFormat, nodes: bool) -> Result<()> {
    let resolver = TagResolver::new(RuleSet::builtin());
    let (registry, _) = setup()?;

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for docname in docnames {
                let resolution = resolver.resolve(docname);
                let rendered = resolution.rendered_line();
                let mut value = serde_json::json!({
                    "docname": resolution.docname,
                    "platforms": resolution.platforms,
                    "rendered_line": rendered,
                });
                if nodes {
                    let ctx = RenderContext::new(docname.as_str());
                    let parsed = registry.run(DIRECTIVE_NAME, &ctx, &InlineParser)?;
                    value["nodes"] = serde_json::to_value(parsed)?;
                }
                output.push(value);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!();
            for docname in docnames {
                let resolution = resolver.resolve(docname);

                println!("{}", resolution.docname.cyan().bold());
                if resolution.is_tagged() {
                    let labels: Vec<&str> =
                        resolution.platforms.iter().map(|p| p.as_str()).collect();
                    println!("  Platforms: {}", labels.join(", "));
                    println!("  {}", resolution.rendered_line());
                } else {
                    println!("  {}", "no applicable platforms".dimmed());
                }

                if nodes {
                    let ctx = RenderContext::new(docname.as_str());
                    let parsed = registry.run(DIRECTIVE_NAME, &ctx, &InlineParser)?;
                    for node in parsed {
                        println!("  {:?}", node);
                    }
                }
                println!();
            }
        }
    }

    Ok(())
}

fn handle_scan(
    base_dir: &Path,
    path: &Path,
    format: OutputFormat,
    untagged: bool,
    include: &[String],
    exclude: &[String],
) -> Result<()> {
    let options = build_scan_options(base_dir, include, exclude);
    let report = scan_tree(path, RuleSet::builtin(), &options)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!();
            println!(
                "Scanned {} pages under {}",
                report.len(),
                path.display().to_string().cyan()
            );
            for (platform, count) in report.platform_counts() {
                println!("  {}: {} pages", platform.as_str().cyan(), count);
            }
            println!("  untagged: {} pages", report.untagged().len());
            println!();

            for entry in &report.entries {
                if untagged && entry.resolution.is_tagged() {
                    continue;
                }

                let labels = if entry.resolution.is_tagged() {
                    entry
                        .resolution
                        .platforms
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                } else {
                    "-".to_string()
                };
                println!("  {:<56} {}", entry.resolution.docname, labels);
            }
            println!();
        }
    }

    Ok(())
}

fn handle_check() -> Result<()> {
    let warnings = RuleSet::builtin().lint();

    if warnings.is_empty() {
        println!(
            "{} builtin rule tables contain no issues",
            "OK".green().bold()
        );
        return Ok(());
    }

    for warning in &warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
    println!();
    println!("{} warning(s)", warnings.len());

    Ok(())
}

fn handle_tables(format: OutputFormat) -> Result<()> {
    let rules = RuleSet::builtin();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rules)?);
        }
        OutputFormat::Text => {
            print_table("Top-level, Inf1 only", &rules.inf1_dirs);
            print_table("Top-level, Trn1 only", &rules.trn1_dirs);
            print_table("Top-level, both platforms", &rules.common_dirs);
            print_table("Force-add Inf1", &rules.add_inf1);
            print_table("Force-add Trn1", &rules.add_trn1);
            print_table("Force-clear Inf1", &rules.clear_inf1);
            print_table("Force-clear Trn1", &rules.clear_trn1);
        }
    }

    Ok(())
}

fn print_table(title: &str, entries: &[String]) {
    println!();
    println!("{} ({})", title.cyan().bold(), entries.len());
    if entries.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return;
    }
    for entry in entries {
        println!("  {}", entry);
    }
}

/// Build ScanOptions from global config + CLI options
/// Priority: CLI options > config file > defaults
fn build_scan_options(base_dir: &Path, include: &[String], exclude: &[String]) -> ScanOptions {
    // Start with config file settings (or defaults if no config)
    let mut options = Config::load(base_dir)
        .map(|c| c.to_scan_options())
        .unwrap_or_default();

    // CLI options override/extend config
    for dir in include {
        if !options.included_dirs.contains(dir) {
            options.included_dirs.push(dir.clone());
        }
    }

    for dir in exclude {
        if !options.excluded_dirs.contains(dir) {
            options.excluded_dirs.push(dir.clone());
        }
    }

    options
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(NeuronTagError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
