// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, Context as _};
use sample1_conf::PathPolicy;
use sample1_loader::LibrarySearchPath;
use std::path::{Path, PathBuf};

/// The directory next to the working directory that is always searched first.
const DEFAULT_LIBRARY_SUBDIR: &str = "src";

/// Apply the [PathPolicy] to a failed search path operation.
fn handle_failure(policy: PathPolicy, error: ah::Error) -> ah::Result<()> {
    match policy {
        PathPolicy::Warn => {
            tracing::warn!("Library search path: {error:#}");
            Ok(())
        }
        PathPolicy::Abort => Err(error.context("Library search path")),
    }
}

/// `<cwd>/src`
pub fn default_library_dir() -> ah::Result<PathBuf> {
    Ok(std::env::current_dir()
        .context("Get current working directory")?
        .join(DEFAULT_LIBRARY_SUBDIR))
}

fn add_dir(search: &mut LibrarySearchPath, dir: &Path, policy: PathPolicy) -> ah::Result<()> {
    match search.ensure_dir(dir) {
        Ok(true) => tracing::debug!("Added library directory {dir:?}"),
        Ok(false) => tracing::debug!("Library directory {dir:?} is already searched"),
        Err(e) => handle_failure(policy, e)?,
    }
    Ok(())
}

/// Build the library search path.
///
/// The default directory comes first, followed by `dirs` in order.
/// Duplicates are skipped.
pub fn build_search_path(
    default_dir: ah::Result<PathBuf>,
    dirs: &[PathBuf],
    policy: PathPolicy,
) -> ah::Result<LibrarySearchPath> {
    let mut search = LibrarySearchPath::new();
    match default_dir {
        Ok(dir) => add_dir(&mut search, &dir, policy)?,
        Err(e) => handle_failure(policy, e)?,
    }
    for dir in dirs {
        add_dir(&mut search, dir, policy)?;
    }
    Ok(search)
}


// vim: ts=4 sw=4 expandtab
