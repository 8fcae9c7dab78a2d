// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::search::{library_file_name, LibrarySearchPath};
use anyhow::{self as ah, Context as _};
use libloading::Library;
use std::path::{Path, PathBuf};

/// A loaded native library.
///
/// The library stays loaded for the lifetime of this object.
#[derive(Debug)]
pub struct NativeLibrary {
    path: PathBuf,
    lib: Library,
}

impl NativeLibrary {
    /// Load the library with the logical name `name`.
    ///
    /// The directories of `search` are tried first.
    /// If none of them contains the library, the default search
    /// of the operating system loader is used.
    pub fn open(search: &LibrarySearchPath, name: &str) -> ah::Result<Self> {
        if let Some(path) = search.resolve(name) {
            return Self::open_file(&path);
        }
        let file_name = library_file_name(name);
        tracing::debug!(
            "'{file_name}' not found in {} search {}. Trying the system loader.",
            search.len(),
            if search.len() == 1 {
                "directory"
            } else {
                "directories"
            }
        );
        Self::open_file(Path::new(&file_name))
    }

    /// Load a library from an explicit file path.
    pub fn open_file(path: &Path) -> ah::Result<Self> {
        tracing::debug!("Loading native library {path:?}");
        // SAFETY:
        // Loading runs the initialization routines of the library.
        // The library is part of this project and has no initializers
        // with preconditions.
        let lib = unsafe { Library::new(path) }
            .with_context(|| format!("Failed to load native library {path:?}"))?;
        tracing::info!("Loaded native library {path:?}");
        Ok(Self {
            path: path.to_path_buf(),
            lib,
        })
    }

    /// The path the library was loaded from.
    ///
    /// This is a bare file name, if the system loader resolved it.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn library(&self) -> &Library {
        &self.lib
    }
}


// vim: ts=4 sw=4 expandtab
