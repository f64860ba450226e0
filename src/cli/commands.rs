//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::OptionsService;
use crate::cli::args::{Cli, Commands, ConfigCommands, SelectionArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{expand_path, global_config_path, Settings};
use crate::domain::{NestedSetStore, Node, NodeId, RootSource};
use crate::infrastructure::{load_store, InMemoryStore};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Options {
            selection,
            start_level,
            marker,
        }) => {
            let mut settings = apply_selection(settings, selection);
            if let Some(level) = start_level {
                settings.start_level = usize::from(*level);
            }
            if let Some(marker) = marker {
                settings.marker = marker.clone();
            }
            _options(selection, settings)
        }
        Some(Commands::Tree { selection }) => {
            let settings = apply_selection(settings, selection);
            _tree(selection, settings)
        }
        Some(Commands::Roots { file }) => _roots(file.as_deref(), &settings),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `nestset --help`".to_string(),
        )),
    }
}

fn apply_selection(mut settings: Settings, selection: &SelectionArgs) -> Settings {
    if let Some(order) = selection.order {
        settings.order = order;
    }
    settings
}

/// Tree file from the command line, falling back to the `tree_file` setting.
fn tree_file(file: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    file.map(expand_path)
        .or_else(|| settings.tree_file.clone())
        .ok_or_else(|| {
            CliError::Usage("no tree file given and no `tree_file` configured".to_string())
        })
}

/// Resolve root and exclusion ids against the store.
fn resolve_selection(
    store: &InMemoryStore,
    selection: &SelectionArgs,
) -> CliResult<(RootSource, Option<Node>)> {
    let source = if selection.roots.is_empty() {
        RootSource::AllRoots
    } else {
        let roots = selection
            .roots
            .iter()
            .map(|&id| store.node(NodeId(id)).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        RootSource::Explicit(roots)
    };
    let excluded = selection
        .exclude
        .map(|id| store.node(NodeId(id)).cloned())
        .transpose()?;
    Ok((source, excluded))
}

#[instrument(skip(settings))]
fn _options(selection: &SelectionArgs, settings: Settings) -> CliResult<()> {
    let path = tree_file(selection.file.as_deref(), &settings)?;
    let store = load_store(&path)?;
    let (source, excluded) = resolve_selection(&store, selection)?;

    let service = OptionsService::new(store, settings);
    for entry in service.options(source, excluded.as_ref())? {
        output::option(&entry.label, &entry.id);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(selection: &SelectionArgs, settings: Settings) -> CliResult<()> {
    let path = tree_file(selection.file.as_deref(), &settings)?;
    let store = load_store(&path)?;
    let (source, excluded) = resolve_selection(&store, selection)?;

    let service = OptionsService::new(store, settings);
    let forest = service.tree(source, excluded.as_ref())?;
    if forest.is_empty() {
        output::warning("nothing to show");
    }
    for tree in forest {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _roots(file: Option<&Path>, settings: &Settings) -> CliResult<()> {
    let path = tree_file(file, settings)?;
    let store = load_store(&path)?;
    for root in store.roots()? {
        output::option(&root.name, &root.id);
    }
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("# effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("cannot determine config directory"),
        },
    }
    Ok(())
}
