//! Command dispatch.
//!
//! Builds the effective configuration (config file plus command-line
//! overrides), runs the requested command, and maps what it found onto an
//! [`ExitStatus`].

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::{
    Arguments, CheckCommand, Command, CommonArgs, ExportCommand, ExtractCommand, ResolveCommand,
};
use super::exit_status::ExitStatus;
use super::report::{self, CheckReport, LanguageCoverage};
use crate::catalog::TranslationKind;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json, load_config};
use crate::items::{ItemDisplay, ItemRegistry};
use crate::loader;
use crate::resolve::Viewer;
use crate::service::TranslationService;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// Config file merged with command-line overrides.
fn effective_config(common: &CommonArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let mut config = load_config(&cwd)?.config;
    if let Some(root) = &common.translations_root {
        config.translations_root = root.to_string_lossy().into_owned();
    }
    if let Some(language) = &common.default_language {
        config.default_language = language.clone();
    }
    config.validate()?;
    Ok(config)
}

fn load_registry(items: Option<&PathBuf>) -> Result<ItemRegistry> {
    match items {
        Some(path) => ItemRegistry::from_json_file(path),
        None => Ok(ItemRegistry::default()),
    }
}

fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let config = effective_config(&cmd.common)?;
    let (catalog, stats) = loader::load_catalog(&config, &ItemRegistry::default())?;

    let default_ids: Vec<(TranslationKind, Vec<&str>)> = TranslationKind::ALL
        .into_iter()
        .map(|kind| {
            let mut ids: Vec<&str> = catalog
                .store
                .partition(kind)
                .fixed_ids(&config.default_language)
                .collect();
            ids.sort_unstable();
            (kind, ids)
        })
        .collect();

    let coverage = stats
        .languages
        .iter()
        .map(|language| {
            let missing = if *language == config.default_language {
                Vec::new()
            } else {
                default_ids
                    .iter()
                    .flat_map(|(kind, ids)| {
                        let partition = catalog.store.partition(*kind);
                        ids.iter()
                            .filter(|id| partition.get(language, id).is_none())
                            .map(|id| (*kind, id.to_string()))
                    })
                    .collect()
            };
            LanguageCoverage {
                language: language.clone(),
                item_count: catalog
                    .store
                    .partition(TranslationKind::Item)
                    .fixed_count(language),
                lore_count: catalog
                    .store
                    .partition(TranslationKind::Lore)
                    .fixed_count(language),
                message_count: catalog
                    .store
                    .partition(TranslationKind::Message)
                    .fixed_count(language),
                missing,
            }
        })
        .collect();

    let check_report = CheckReport {
        default_language: config.default_language.clone(),
        stats,
        coverage,
    };
    report::print_check(&check_report, cmd.common.verbose);

    if check_report.finding_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let config = effective_config(&cmd.common)?;
    let registry = load_registry(cmd.items.as_ref())?;
    let service = TranslationService::new(config);
    service.load_translations(&registry)?;

    let viewer = match &cmd.language {
        Some(language) => Viewer::with_language(language.clone()),
        None => Viewer::Anonymous,
    };

    let Some(record) = service.find_translation(cmd.kind, &cmd.id, &viewer) else {
        println!(
            "{} no translation for {} \"{}\"",
            report::FAILURE_MARK,
            cmd.kind,
            cmd.id
        );
        return Ok(ExitStatus::Failure);
    };

    match cmd.kind {
        TranslationKind::Message => {
            let text = service.message(&viewer, &cmd.id, &cmd.args);
            println!("{}", text.plain_text());
            if cmd.common.verbose {
                println!("{text:#?}");
            }
        }
        TranslationKind::Lore => {
            println!("{}", service.lore(&viewer, &cmd.id, true));
        }
        TranslationKind::Item => match registry.get(&cmd.id) {
            Some(item) => {
                let mut display = ItemDisplay::new(&cmd.id, &item.name, item.lore.clone());
                service.translate_item(&viewer, &mut display);
                println!("{}", display.name);
                for line in &display.lore {
                    println!("  {line}");
                }
            }
            None => {
                // No live item state: show the raw templates.
                if let Some(name) = record.name_template() {
                    println!("{name}");
                }
                for line in record.lore_template().unwrap_or_default() {
                    println!("  {line}");
                }
            }
        },
    }
    Ok(ExitStatus::Success)
}

fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let config = effective_config(&cmd.common)?;
    let registry = ItemRegistry::from_json_file(&cmd.items)?;
    let ids: BTreeSet<String> = cmd.ids.into_iter().collect();

    let root = config.translations_root();
    let file_name =
        loader::write_export_document(&root, &cmd.language, &cmd.addon, &ids, &registry)?;
    report::success(&format!(
        "wrote {}",
        root.join(&cmd.language).join(file_name).display()
    ));
    Ok(ExitStatus::Success)
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let config = effective_config(&cmd.common)?;
    let source = cmd
        .from
        .clone()
        .or_else(|| config.bundled_root.as_ref().map(PathBuf::from));
    let Some(source) = source else {
        anyhow::bail!("No bundled root given; pass --from or set bundledRoot in the config");
    };

    let written =
        loader::extract_translations(&source, &config.translations_root(), cmd.replace)?;
    report::success(&format!("extracted {written} document(s)"));
    Ok(ExitStatus::Success)
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    report::success(&format!("created {}", CONFIG_FILE_NAME));
    Ok(ExitStatus::Success)
}
