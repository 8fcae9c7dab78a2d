// -*- coding: utf-8 -*-
//
// Copyright (C) 2024 - 2026 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod driver;
mod libpath;
mod logging;

use crate::{
    driver::run_samples,
    libpath::{build_search_path, default_library_dir},
    logging::init_logging,
};
use anyhow::{self as ah, Context as _};
use clap::Parser;
use sample1_conf::{parse_library_name, Config, PathPolicy};
use sample1_loader::{NativeLibrary, Sample1Bindings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Opts {
    /// Override the default path to the configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional directory to search the native library in.
    ///
    /// Can be given multiple times.
    /// The directories are searched after `<cwd>/src` and after the
    /// `[LIBRARY] search-paths` from the configuration file.
    #[arg(short = 'L', long = "library-dir")]
    library_dirs: Vec<PathBuf>,

    /// Logical name of the native library.
    ///
    /// The platform specific prefix and suffix are added automatically.
    /// If not given, then the `[LIBRARY] name` from the
    /// configuration file will be used instead.
    #[arg(short, long, value_parser = parse_library_name)]
    library: Option<String>,

    /// What to do, if a search directory can't be used: warn or abort.
    ///
    /// If this option is not given, then the value
    /// from the configuration file is used instead.
    #[arg(long)]
    path_policy: Option<PathPolicy>,

    /// Show detailed information about what happens internally.
    #[arg(long)]
    verbose: bool,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

impl Opts {
    /// Get the configuration path from command line or default.
    pub fn get_config(&self) -> PathBuf {
        if let Some(config) = &self.config {
            config.clone()
        } else {
            Config::get_default_path()
        }
    }
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();

    if opts.version {
        println!("sample1 version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Read the sample1.conf configuration file.
    let mut conf = Config::new();
    conf.load(&opts.get_config())
        .context("Configuration file")?;

    init_logging(opts.verbose || conf.debug())?;
    if let Some(path) = conf.get_path() {
        tracing::debug!("Using configuration {path:?}");
    }

    let policy = opts.path_policy.unwrap_or(conf.path_policy());
    let name = opts.library.as_deref().unwrap_or(conf.library_name());

    let mut dirs = conf.search_paths().to_vec();
    dirs.extend(opts.library_dirs.iter().cloned());
    let search = build_search_path(default_library_dir(), &dirs, policy)?;

    let lib = NativeLibrary::open(&search, name)?;
    tracing::debug!("Using native library {:?}", lib.path());
    let bindings = Sample1Bindings::new(&lib)?;

    let mut stdout = std::io::stdout().lock();
    run_samples(&bindings, &mut stdout)
}

// vim: ts=4 sw=4 expandtab
