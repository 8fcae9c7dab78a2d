// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, format_err as err, Context as _};
use std::path::{Path, PathBuf};

#[cfg(target_os = "windows")]
const LIB_PREFIX: &str = "";
#[cfg(not(target_os = "windows"))]
const LIB_PREFIX: &str = "lib";

#[cfg(target_os = "windows")]
const LIB_SUFFIX: &str = ".dll";
#[cfg(any(target_os = "macos", target_os = "ios"))]
const LIB_SUFFIX: &str = ".dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "ios")))]
const LIB_SUFFIX: &str = ".so";

/// Map a logical library name to the platform specific file name.
///
/// `sample1_native` -> `libsample1_native.so` on Linux.
pub fn library_file_name(name: &str) -> String {
    format!("{LIB_PREFIX}{name}{LIB_SUFFIX}")
}

/// Ordered list of directories to look for a native library in.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LibrarySearchPath {
    dirs: Vec<PathBuf>,
}

impl LibrarySearchPath {
    pub fn new() -> Self {
        Default::default()
    }

    /// Append a directory, if it is not in the list already.
    ///
    /// Returns `true`, if the directory has been added.
    pub fn add(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            return false;
        }
        self.dirs.push(dir);
        true
    }

    /// Check that `dir` is an existing directory and append it.
    ///
    /// Returns `true`, if the directory has been added,
    /// and `false`, if it was present already.
    pub fn ensure_dir(&mut self, dir: &Path) -> ah::Result<bool> {
        let meta = dir
            .metadata()
            .with_context(|| format!("Library directory {dir:?}"))?;
        if !meta.is_dir() {
            return Err(err!("Library directory {dir:?} is not a directory"));
        }
        Ok(self.add(dir))
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.dirs.iter().any(|d| d == dir)
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Find the library file for a logical library name.
    ///
    /// The directories are searched in insertion order.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let file_name = library_file_name(name);
        self.dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }
}


// vim: ts=4 sw=4 expandtab
