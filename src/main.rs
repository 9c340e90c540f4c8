// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dirgraph CLI entrypoint.
//!
//! Loads a graph JSON file and prints one of the derived views. Intended for inspecting
//! what the explorer would draw for a given scan.

use std::error::Error;
use std::path::PathBuf;

use dirgraph::augment::VirtualDirMode;
use dirgraph::config::BuildOptions;
use dirgraph::render::{render_explorer, render_path_tree, render_path_tree_colors};
use dirgraph::view::GraphView;
use thiserror::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <graph.json> [--tree | --colors | --explorer | --graph] [--dir-mode none|one|all] [--no-squash]\n  {program} --schema\n\n--tree (default) prints the path tree, --colors adds the computed HSV color to every entry,\n--explorer prints the file explorer with every folder expanded and --graph prints the render graph as JSON.\n--schema prints the JSON schema of the accepted input.\n\nDIRGRAPH_SQUASH and DIRGRAPH_DIR_MODE set the defaults for --no-squash and --dir-mode;\nDIRGRAPH_LOG sets the log filter (default: warn)."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Output {
    #[default]
    Tree,
    Colors,
    Explorer,
    Graph,
    Schema,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<PathBuf>,
    output: Option<Output>,
    dir_mode: Option<VirtualDirMode>,
    no_squash: bool,
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        let output = match arg.as_str() {
            "--tree" => Some(Output::Tree),
            "--colors" => Some(Output::Colors),
            "--explorer" => Some(Output::Explorer),
            "--graph" => Some(Output::Graph),
            "--schema" => Some(Output::Schema),
            _ => None,
        };
        if let Some(output) = output {
            if options.output.is_some() {
                return Err(());
            }
            options.output = Some(output);
            continue;
        }

        match arg.as_str() {
            "--dir-mode" => {
                if options.dir_mode.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.dir_mode = Some(raw.parse().map_err(|_| ())?);
            }
            "--no-squash" => {
                if options.no_squash {
                    return Err(());
                }
                options.no_squash = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(PathBuf::from(arg));
            }
        }
    }

    match (options.output, &options.input) {
        (Some(Output::Schema), None) => Ok(options),
        (Some(Output::Schema), Some(_)) | (_, None) => Err(()),
        _ => Ok(options),
    }
}

fn main() {
    dirgraph::logging::init_logging();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dirgraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let output = options.output.unwrap_or_default();
        if output == Output::Schema {
            println!(
                "{}",
                serde_json::to_string_pretty(&dirgraph::model::graph_schema())?
            );
            return Ok(());
        }

        let mut build = BuildOptions::from_env()?;
        if options.no_squash {
            build.squash = false;
        }
        if let Some(dir_mode) = options.dir_mode {
            build.dir_mode = dir_mode;
        }

        let Some(path) = options.input else {
            print_usage(&program);
            std::process::exit(2);
        };
        let json = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let mut view = GraphView::from_json(&json, &build)?;

        match output {
            Output::Tree => println!("{}", render_path_tree(view.tree())),
            Output::Colors => println!("{}", render_path_tree_colors(view.tree())),
            Output::Explorer => {
                let annotations = view.annotations_mut();
                let root = annotations.root();
                annotations.expand_all(root);
                println!("{}", render_explorer(view.annotations()));
            }
            Output::Graph => println!("{}", serde_json::to_string_pretty(view.xgraph())?),
            Output::Schema => {}
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("dirgraph: {err}");
        std::process::exit(1);
    }
}
