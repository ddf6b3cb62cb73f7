use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use load_packer_core::config::{PlacementHeuristic, SortOrder};
use load_packer_core::document::{Color, Document};
use load_packer_core::{Container, PackerConfig, PackingResult, pack_with_config, to_json};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "load-packer",
    about = "Pack rectangular loads into a container",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack the loads of a document and report what fits
    Pack(PackArgs),
    /// Create a new document with one load
    New(NewArgs),
    /// Append a load to a document
    AddLoad(AddLoadArgs),
    /// Delete a load from a document
    RemoveLoad(RemoveLoadArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Document (JSON) describing the container and loads
    #[arg(help_heading = "Input/Output")]
    document: PathBuf,
    /// YAML config file path (overrides algorithm options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Write the placement result as JSON to this file
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,

    // Algorithm
    /// Placement heuristic: bssf|blsf|baf|bl
    #[arg(long, default_value = "bssf", help_heading = "Algorithm")]
    heuristic: String,
    /// Sort order: area_desc|max_side_desc|height_desc|width_desc|none
    #[arg(long, default_value = "area_desc", help_heading = "Algorithm")]
    sort_order: String,
    /// Tolerance for geometric comparisons (container units)
    #[arg(long, help_heading = "Algorithm")]
    epsilon: Option<f64>,

    // Export
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Fail when any load is left unpacked
    #[arg(long, default_value_t = false, help_heading = "Export")]
    strict: bool,
}

#[derive(Parser, Debug, Clone)]
struct NewArgs {
    /// Path of the document to create
    path: PathBuf,
    /// Start from a 20-foot (2.44 x 6.06) container instead of 10 x 10
    #[arg(long, default_value_t = false)]
    teu: bool,
    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Parser, Debug, Clone)]
struct AddLoadArgs {
    /// Document to modify
    path: PathBuf,
    /// Load name (defaults to "Load N")
    #[arg(long)]
    name: Option<String>,
    /// Width (defaults to the previous load's width, else 1.2)
    #[arg(long)]
    width: Option<String>,
    /// Height (defaults to the previous load's height, else 1.0)
    #[arg(long)]
    height: Option<String>,
}

#[derive(Parser, Debug, Clone)]
struct RemoveLoadArgs {
    /// Document to modify
    path: PathBuf,
    /// Row to delete (1-based, as printed by `pack`)
    row: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::New(args) => run_new(args),
        Commands::AddLoad(args) => run_add_load(args),
        Commands::RemoveLoad(args) => run_remove_load(args),
    }
}

fn run_pack(cli: &PackArgs) -> anyhow::Result<()> {
    let mut cfg = PackerConfig {
        heuristic: parse_heuristic(&cli.heuristic)?,
        sort_order: parse_sort_order(&cli.sort_order)?,
        ..Default::default()
    };
    if let Some(eps) = cli.epsilon {
        cfg.epsilon = eps;
    }
    // config file sets algorithm-related options en bloc
    if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_packer_config(cfg)?;
    }
    cfg.validate()?;

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let doc = Document::load(&cli.document)
        .with_context(|| format!("load document {}", cli.document.display()))?;
    let (container, items) = doc.to_request();
    if items.is_empty() {
        warn!("no loads to pack");
    }
    info!(
        container = doc.container.display_name(),
        width = container.width,
        height = container.height,
        loads = items.len(),
        "packing"
    );

    let result = pack_with_config(&container, &items, &cfg)?;
    let stats = result.stats(&container);
    info!(
        placed = stats.num_placed,
        unpacked = stats.num_unpacked,
        occupancy = stats.occupancy,
        "packing finished"
    );

    print_report(&doc, &container, &result);

    if let Some(out) = &cli.out {
        let json = serde_json::to_string_pretty(&to_json(&container, &result))?;
        fs::write(out, json).with_context(|| format!("write {}", out.display()))?;
        info!(?out, "result written");
    }
    if let Some(stats_path) = &cli.export_stats {
        let json = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, json)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }

    if cli.strict && !result.is_complete() {
        anyhow::bail!("{} load(s) could not be fitted", result.unpacked.len());
    }
    Ok(())
}

fn print_report(doc: &Document, container: &Container, result: &PackingResult) {
    println!(
        "{} ({} x {})",
        doc.container.display_name(),
        container.width,
        container.height
    );
    for p in &result.placed {
        let color = doc
            .loads
            .get(p.item.id)
            .map(|l| l.color.to_hex())
            .unwrap_or_default();
        println!(
            "  #{:<3} {:<24} {:>8.3} x {:<8.3} at ({:.3}, {:.3}) {}",
            p.item.id + 1,
            p.item.label,
            p.item.width,
            p.item.height,
            p.x,
            p.y,
            color
        );
    }
    if result.is_complete() {
        println!("All loads fitted successfully!");
    } else {
        println!("Some loads could not be fitted into the container:");
        for item in &result.unpacked {
            println!("  #{:<3} {}", item.id + 1, item.label);
        }
    }
    println!("{}", result.stats(container).summary());
}

fn run_new(args: &NewArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    let color = Color::random(&mut rand::thread_rng());
    let doc = if args.teu {
        Document::teu(color)
    } else {
        Document::new_default(color)
    };
    save(&doc, &args.path)?;
    info!(path = ?args.path, "document created");
    Ok(())
}

fn run_add_load(args: &AddLoadArgs) -> anyhow::Result<()> {
    let mut doc = load(&args.path)?;
    let color = Color::random(&mut rand::thread_rng());
    let entry = doc.push_load(
        args.name.clone(),
        args.width.clone(),
        args.height.clone(),
        color,
    );
    info!(
        name = %entry.name,
        width = %entry.width,
        height = %entry.height,
        color = %entry.color.to_hex(),
        "load added"
    );
    save(&doc, &args.path)
}

fn run_remove_load(args: &RemoveLoadArgs) -> anyhow::Result<()> {
    let mut doc = load(&args.path)?;
    let removed = args
        .row
        .checked_sub(1)
        .and_then(|idx| doc.remove_load(idx))
        .with_context(|| {
            format!(
                "no load at row {} (document has {})",
                args.row,
                doc.loads.len()
            )
        })?;
    info!(name = %removed.name, row = args.row, "load removed");
    save(&doc, &args.path)
}

fn load(path: &Path) -> anyhow::Result<Document> {
    Document::load(path).with_context(|| format!("load document {}", path.display()))
}

fn save(doc: &Document, path: &Path) -> anyhow::Result<()> {
    doc.save(path).with_context(|| format!("write {}", path.display()))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    heuristic: Option<String>,
    sort_order: Option<String>,
    epsilon: Option<f64>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> anyhow::Result<PackerConfig> {
        if let Some(v) = self.heuristic {
            cfg.heuristic = parse_heuristic(&v)?;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = parse_sort_order(&v)?;
        }
        if let Some(v) = self.epsilon {
            cfg.epsilon = v;
        }
        Ok(cfg)
    }
}

fn parse_heuristic(s: &str) -> anyhow::Result<PlacementHeuristic> {
    s.parse().map_err(|_| anyhow::anyhow!("unknown heuristic: {}", s))
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    s.parse().map_err(|_| anyhow::anyhow!("unknown sort order: {}", s))
}
