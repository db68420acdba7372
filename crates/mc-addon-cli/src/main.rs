mod config;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use config::AddonConfig;
use mc_addon_catalog::{entity_types, item_types, Catalog};
use mc_addon_pack::{load_all_packs, load_pack, Addon, LoadedPack, OnExisting};
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "mc-addon", version, about = "Author and inspect Minecraft Bedrock add-ons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scaffold an empty add-on (manifests and language files)
    New {
        /// Project configuration
        #[arg(long, short, default_value = "addon.toml")]
        config: PathBuf,
        /// Also write a .mcaddon archive
        #[arg(long)]
        package: bool,
        /// Replace packs (and the archive) left by an earlier run
        #[arg(long, short)]
        force: bool,
    },
    /// Load packs from a directory and print a summary
    Inspect {
        /// A pack directory, or a directory containing packs
        dir: PathBuf,
    },
    /// List vanilla identifiers
    Catalog {
        kind: CatalogKind,
        /// Only identifiers containing this text
        #[arg(long, short)]
        search: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
    Items,
    Blocks,
    Entities,
    Effects,
}

impl From<CatalogKind> for Catalog {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Items => Catalog::Items,
            CatalogKind::Blocks => Catalog::Blocks,
            CatalogKind::Entities => Catalog::Entities,
            CatalogKind::Effects => Catalog::Effects,
        }
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn scaffold(config_path: &Path, package: bool, force: bool) -> CliResult {
    let config = AddonConfig::load(config_path)
        .map_err(|e| format!("failed to load {}: {e}", config_path.display()))?;
    init_logging(&config.logging.level);

    let project = &config.project;
    info!("Scaffolding '{}' v{}", project.name, project.version);
    let addon = Addon::new(
        &project.name,
        &project.description,
        project.version,
        project.min_engine_version,
    );

    let out_dir = Path::new(&config.output.directory);
    let on_existing = if force { OnExisting::Replace } else { OnExisting::Refuse };
    if package || config.output.package {
        let archive = addon.package(out_dir, on_existing)?;
        println!("Wrote {}", archive.display());
    } else {
        let summary = addon.export(out_dir, on_existing)?;
        println!(
            "Wrote {} and {} ({} files)",
            summary.behavior_dir.display(),
            summary.resource_dir.display(),
            summary.files.len()
        );
    }
    Ok(())
}

fn print_pack(pack: &LoadedPack) {
    let kind = pack.kind.map(|k| k.suffix()).unwrap_or("??");
    println!(
        "[{kind}] {} v{} ({})",
        pack.manifest.header.name,
        pack.manifest.version_string(),
        pack.manifest.header.uuid
    );
    for dep in &pack.manifest.dependencies {
        println!("  depends on {} v{}", dep.uuid, dep.version);
    }
    for e in &pack.entities {
        println!(
            "  entity {}: health {}, speed {}, {} behaviors, {} groups, {} events",
            e.identifier,
            e.max_health,
            e.movement_speed,
            e.behaviors.len(),
            e.component_groups.len(),
            e.events.len()
        );
    }
    for i in &pack.items {
        println!(
            "  item {}: stack {}, {} components",
            i.identifier,
            i.max_stack_size,
            i.components.len()
        );
    }
    for b in &pack.blocks {
        println!(
            "  block {}: hardness {}, light {}, {} states, {} permutations",
            b.identifier,
            b.hardness,
            b.light_emission,
            b.states.len(),
            b.permutations
        );
    }
    for r in &pack.recipes {
        if let Some(recipe) = r.recipe() {
            println!("  recipe {}", recipe.identifier());
        }
    }
    let mut tables: Vec<_> = pack.loot_tables.keys().collect();
    tables.sort();
    for t in tables {
        println!("  loot table {t}");
    }
    for c in &pack.client_entities {
        println!("  client entity {c}");
    }
    if let Some(lang) = &pack.language {
        println!("  {} language entries", lang.len());
    }
}

fn inspect(dir: &Path) -> CliResult {
    init_logging("warn");

    let packs = if dir.join("manifest.json").exists() {
        vec![load_pack(dir)?]
    } else {
        load_all_packs(dir)
    };
    if packs.is_empty() {
        return Err(format!("no packs found in {}", dir.display()).into());
    }
    for pack in &packs {
        print_pack(pack);
    }
    Ok(())
}

fn list_catalog(kind: CatalogKind, search: Option<&str>) {
    let ids = Catalog::from(kind)
        .ids()
        .iter()
        .filter(|id| search.map_or(true, |s| id.contains(s)));
    for id in ids {
        match kind {
            CatalogKind::Items => println!("{id} (stack {})", item_types::max_stack_size(id)),
            CatalogKind::Entities => println!("{id} ({:?})", entity_types::category(id)),
            CatalogKind::Blocks | CatalogKind::Effects => println!("{id}"),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::New { config, package, force } => scaffold(&config, package, force),
        Command::Inspect { dir } => inspect(&dir),
        Command::Catalog { kind, search } => {
            list_catalog(kind, search.as_deref());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
