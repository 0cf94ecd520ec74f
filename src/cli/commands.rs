//! Command execution: build trees, run the demo, print results

use std::fmt::Display;
use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::errors::{TreeError, TreeResult};
use crate::ops::PathOps;
use crate::path::TreePath;
use crate::tree::{MapMutableTree, MapTree, MapValueTree};
use crate::tree_traits::{ReadableTree, TreeRender};
use crate::visit::Visit;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Demo) => _demo(&settings),
        Some(Commands::Build {
            assignments,
            copies,
            format,
        }) => _build(assignments, copies, format.unwrap_or(settings.format), &settings),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument(skip(settings))]
fn _demo(settings: &Settings) -> CliResult<()> {
    output::header("copy_branch: t4 -> t3 -> t2 -> t1 copied under t5");
    print_tree(&chain_demo(), OutputFormat::Lines, settings);

    output::header("read-only tree holding value-mutable and fully mutable children");
    print_tree(&mixed_levels_demo(), OutputFormat::Lines, settings);
    Ok(())
}

#[instrument(skip(settings))]
fn _build(
    assignments: &[String],
    copies: &[String],
    format: OutputFormat,
    settings: &Settings,
) -> CliResult<()> {
    let tree = build_tree(assignments, copies, &settings.separator)?;
    print_tree(&tree, format, settings);
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// `t5(5)` with a copy of the chain `t4(4) -> t3(3) -> t2(2) -> t1(1)` under key `t4`.
pub fn chain_demo() -> MapMutableTree<i32> {
    let t1 = MapMutableTree::leaf(1);
    let t2 = MapMutableTree::leaf(2).with_child("t1", t1);
    let t3 = MapMutableTree::leaf(3).with_child("t2", t2);
    let t4 = MapMutableTree::leaf(4).with_child("t3", t3);

    let mut t5 = MapMutableTree::leaf(5);
    t5.copy_branch(&["t4"], &t4);
    t5
}

/// Read-only root without data, one value-mutable child, one fully mutable grandchild.
pub fn mixed_levels_demo() -> MapTree<i32, MapValueTree<i32, MapMutableTree<i32>>> {
    let structure = MapMutableTree::leaf(2);
    let values = MapValueTree::leaf(1).with_child("mutable_tree", structure);
    MapTree::new(None, Default::default()).with_child("value_tree", values)
}

/// Tree built from `path=value` assignments, then `src:dest` copies in order.
#[instrument(level = "debug", skip_all)]
pub fn build_tree(
    assignments: &[String],
    copies: &[String],
    separator: &str,
) -> TreeResult<MapMutableTree<String>> {
    let mut tree = MapMutableTree::empty();

    for assignment in assignments {
        let (path, value) = parse_assignment(assignment, separator)?;
        debug!("set {} = {}", path, value);
        tree.set_value(path.segments(), value);
    }

    for spec in copies {
        let (source, destination) = parse_copy_spec(spec, separator)?;
        let branch = tree
            .get_path(source.segments())
            .cloned()
            .ok_or_else(|| TreeError::PathNotFound(source.clone()))?;
        debug!("copy {} -> {}", source, destination);
        tree.copy_branch(destination.segments(), &branch);
    }

    Ok(tree)
}

/// Split `a.b=value` into its path and value. Only the first `=` separates.
pub fn parse_assignment(assignment: &str, separator: &str) -> TreeResult<(TreePath, String)> {
    let (path, value) = assignment
        .split_once('=')
        .ok_or_else(|| TreeError::InvalidAssignment(assignment.to_string()))?;
    Ok((TreePath::parse_with(path, separator), value.to_string()))
}

/// Split `src:dest` into source and destination paths.
pub fn parse_copy_spec(spec: &str, separator: &str) -> TreeResult<(TreePath, TreePath)> {
    let (source, destination) = spec
        .split_once(':')
        .ok_or_else(|| TreeError::InvalidCopySpec(spec.to_string()))?;
    Ok((
        TreePath::parse_with(source, separator),
        TreePath::parse_with(destination, separator),
    ))
}

/// One `([root, a, b], value)` pair per visited node; absent data renders as `null`.
pub fn render_lines<T>(tree: &T, root_label: &str) -> Vec<(String, String)>
where
    T: ReadableTree,
    T::Data: Display,
{
    let mut lines = Vec::new();
    tree.visit_from(root_label, |path, value| {
        let rendered = value.map_or_else(|| "null".to_string(), |v| v.to_string());
        lines.push((format!("[{}]", path.iter().join(", ")), rendered));
    });
    lines
}

fn print_tree<T>(tree: &T, format: OutputFormat, settings: &Settings)
where
    T: ReadableTree,
    T::Data: Display,
{
    match format {
        OutputFormat::Lines => {
            for (path, value) in render_lines(tree, &settings.root_label) {
                output::node(&path, &value);
            }
        }
        OutputFormat::Tree => output::info(&tree.to_termtree(&settings.root_label)),
    }
}
