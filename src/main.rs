//! modlist-changelog CLI
//!
//! Compares two mod list snapshots and writes a Markdown (or JSON) changelog.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use modlist_export::{ReportFormat, UpdatedSection};
use modlist_host::{
    create_plugin, ChangelogTool, ComparisonRequest, DisplayOutcome, FilesystemOrganizer,
    NewVersions, ToolPlugin, ToolSettings, TracingNotifier,
};
use modlist_parsers::logging::{init_with_config, TracingConfig};

/// Generate a changelog between two mod list snapshots
#[derive(Parser)]
#[command(name = "modlist-changelog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (defaults to ./modlist-changelog.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two mod lists and write a changelog
    Compare(CompareArgs),

    /// Save the installed mods' versions as a manifest
    Snapshot(SnapshotArgs),

    /// Show plugin information
    Info,
}

#[derive(Args)]
struct CompareArgs {
    /// Old mod list
    #[arg(long)]
    old: Option<PathBuf>,

    /// New mod list (defaults to the profile's modlist.txt)
    #[arg(long)]
    new: Option<PathBuf>,

    /// Version manifest for the old side
    #[arg(long)]
    old_versions: Option<PathBuf>,

    /// Version manifest for the new side
    #[arg(long)]
    new_versions: Option<PathBuf>,

    /// Installed mods directory, used for a live version snapshot
    #[arg(long)]
    mods: Option<PathBuf>,

    /// Active profile directory
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Output file (defaults to the settings' output, with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: markdown, json
    #[arg(long, default_value = "markdown")]
    format: ReportFormat,

    /// Updated section: auto, always, never
    #[arg(long)]
    updated_section: Option<UpdatedSection>,
}

#[derive(Args)]
struct SnapshotArgs {
    /// Installed mods directory
    #[arg(long)]
    mods: Option<PathBuf>,

    /// Manifest to write
    #[arg(short, long)]
    output: PathBuf,
}

fn setup_logging(verbosity: u8, settings: &ToolSettings) {
    let mut config = TracingConfig::from_verbosity(verbosity);
    if verbosity == 0 {
        if let Some(level) = &settings.log_level {
            config = config.with_level(level.clone());
        }
    }
    init_with_config(config);
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let settings = ToolSettings::discover(cli.config.as_deref(), &cwd)
        .context("Failed to load settings")?;
    setup_logging(cli.verbose, &settings);
    debug!(?settings, "Settings resolved");

    match cli.command {
        Commands::Compare(args) => cmd_compare(args, &settings, cwd),
        Commands::Snapshot(args) => cmd_snapshot(args, &settings, cwd),
        Commands::Info => cmd_info(),
    }
}

fn init_tool(profile: PathBuf, mods: Option<PathBuf>) -> ChangelogTool {
    let mut organizer = FilesystemOrganizer::new(profile);
    if let Some(mods) = mods {
        organizer = organizer.with_mods_path(mods);
    }

    let mut tool = create_plugin();
    tool.init(Arc::new(organizer));
    tool
}

fn cmd_compare(args: CompareArgs, settings: &ToolSettings, cwd: PathBuf) -> Result<ExitCode> {
    let profile = args
        .profile
        .or_else(|| settings.profile_path.clone())
        .unwrap_or(cwd);
    let mods = args.mods.or_else(|| settings.mods_path.clone());

    let new_versions = match (args.new_versions, &mods) {
        (Some(path), _) => NewVersions::Manifest(path),
        // Old manifest without a new one: compare against what is installed now
        (None, Some(_)) if args.old_versions.is_some() => NewVersions::Live,
        (None, _) => NewVersions::None,
    };

    let tool = init_tool(profile, mods);
    let request = ComparisonRequest {
        old_list: args.old,
        new_list: args.new.or_else(|| tool.default_new_modlist()),
        old_versions: args.old_versions,
        new_versions,
        output: args
            .output
            .unwrap_or_else(|| settings.output.with_extension(args.format.extension())),
        format: args.format,
        updated_section: args.updated_section.unwrap_or(settings.updated_section),
    };

    info!(
        old = ?request.old_list,
        new = ?request.new_list,
        format = %request.format,
        "Comparing mod lists"
    );

    match tool.display(&request, &TracingNotifier::new()) {
        DisplayOutcome::Saved { changelog, .. } => {
            if changelog.report.is_unchanged() {
                info!("No mods were added, removed or updated");
            }
            debug!(
                added = changelog.report.added_count(),
                removed = changelog.report.removed_count(),
                updated = changelog.report.updated_count(),
                "Changelog written"
            );
            Ok(ExitCode::SUCCESS)
        }
        DisplayOutcome::NotSaved { .. } | DisplayOutcome::Aborted(_) => Ok(ExitCode::FAILURE),
    }
}

fn cmd_snapshot(args: SnapshotArgs, settings: &ToolSettings, cwd: PathBuf) -> Result<ExitCode> {
    let profile = settings.profile_path.clone().unwrap_or(cwd);
    let mods = args
        .mods
        .or_else(|| settings.mods_path.clone())
        .context("No mods directory given (use --mods or set mods_path)")?;

    let tool = init_tool(profile, Some(mods));
    let versions = tool
        .snapshot_versions(&args.output)
        .context("Failed to snapshot installed mods")?;

    println!("Saved {} mod versions to {}", versions.len(), args.output.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_info() -> Result<ExitCode> {
    let meta = create_plugin().metadata();

    println!("{} v{}", meta.display_name, meta.version);
    println!("  Name:     {}", meta.name);
    println!("  Author:   {}", meta.author);
    println!("  Tooltip:  {}", meta.tooltip);
    println!("  {}", meta.description);

    Ok(ExitCode::SUCCESS)
}
