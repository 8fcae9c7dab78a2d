// -*- coding: utf-8 -*-
//
// Copyright (C) 2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate implements the configuration file parsing of `sample1`.
//!
//! Defaults for missing configuration files
//! or missing individual configuration entries are implemented here.

#![forbid(unsafe_code)]

mod ini;
mod parse;

use crate::{
    ini::Ini,
    parse::{parse_bool, split_commaitems},
};
use anyhow::{self as ah, format_err as err, Context as _};
use std::path::{Path, PathBuf};

/// The default configuration path, relative to the install prefix.
#[cfg(not(target_os = "windows"))]
const CONF_PATH: &str = "etc/sample1.conf";
#[cfg(target_os = "windows")]
const CONF_PATH: &str = "sample1.conf";

/// The default logical name of the native library.
pub const DEFAULT_LIBRARY_NAME: &str = "sample1_native";

/// What to do, if a library search directory can't be added.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PathPolicy {
    /// Print a warning and continue loading (default).
    ///
    /// The library is then looked up in the remaining directories
    /// and in the default search locations of the operating system.
    #[default]
    Warn,

    /// Abort startup with an error.
    Abort,
}

impl std::fmt::Display for PathPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

impl std::str::FromStr for PathPolicy {
    type Err = ah::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "warn" => Ok(Self::Warn),
            "abort" => Ok(Self::Abort),
            other => Err(err!(
                "Path policy '{other}' is not valid. Valid values are: warn, abort."
            )),
        }
    }
}

/// Validate a logical library name.
pub fn parse_library_name(name: &str) -> ah::Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(err!("Library name is empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(err!(
            "Library name '{name}' must not contain path separators. \
            Use 'search-paths' to specify the directory."
        ));
    }
    Ok(name.to_string())
}

fn get_debug(ini: &Ini) -> ah::Result<bool> {
    if let Some(debug) = ini.get("GENERAL", "debug") {
        return parse_bool(debug).context("[GENERAL] debug");
    }
    Ok(false)
}

fn get_library_name(ini: &Ini) -> ah::Result<String> {
    if let Some(name) = ini.get("LIBRARY", "name") {
        return parse_library_name(name).context("[LIBRARY] name");
    }
    Ok(DEFAULT_LIBRARY_NAME.to_string())
}

fn get_search_paths(ini: &Ini) -> ah::Result<Vec<PathBuf>> {
    if let Some(paths) = ini.get("LIBRARY", "search-paths") {
        return split_commaitems(paths, |p| Ok(PathBuf::from(p))).context("[LIBRARY] search-paths");
    }
    Ok(vec![])
}

fn get_path_policy(ini: &Ini) -> ah::Result<PathPolicy> {
    if let Some(policy) = ini.get("LIBRARY", "path-policy") {
        return policy.parse::<PathPolicy>().context("[LIBRARY] path-policy");
    }
    Ok(Default::default())
}

/// Parsed sample1.conf.
#[derive(Clone, Debug)]
pub struct Config {
    path: Option<PathBuf>,
    debug: bool,
    library_name: String,
    search_paths: Vec<PathBuf>,
    path_policy: PathPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new configuration instance with all-default values.
    pub fn new() -> Self {
        Self {
            path: None,
            debug: false,
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            search_paths: vec![],
            path_policy: Default::default(),
        }
    }

    /// Get the default configuration file path.
    pub fn get_default_path() -> PathBuf {
        // The build-time environment variable SAMPLE1_CONF_PREFIX can be
        // used to give an additional prefix.
        let prefix = match option_env!("SAMPLE1_CONF_PREFIX") {
            Some(env_prefix) => env_prefix,
            None => {
                #[cfg(not(target_os = "windows"))]
                let prefix = "/";
                #[cfg(target_os = "windows")]
                let prefix = "";
                prefix
            }
        };

        let mut path = PathBuf::new();
        path.push(prefix);
        path.push(CONF_PATH);
        path
    }

    /// Get the actual path the configuration was read from.
    pub fn get_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// (Re-)load a configuration from a file.
    ///
    /// A file that does not exist leaves the defaults in place.
    /// A file that exists but can't be parsed is an error.
    pub fn load(&mut self, path: &Path) -> ah::Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let ini = Ini::new_from_file(path)
            .with_context(|| format!("Failed to load configuration {path:?}"))?;
        self.load_ini(&ini)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// (Re-)load a configuration from a string.
    pub fn load_str(&mut self, content: &str) -> ah::Result<()> {
        let mut ini = Ini::new();
        ini.parse_str(content)?;
        self.load_ini(&ini)
    }

    /// (Re-)load a configuration from a parsed [Ini] instance.
    fn load_ini(&mut self, ini: &Ini) -> ah::Result<()> {
        let debug = get_debug(ini)?;
        let library_name = get_library_name(ini)?;
        let search_paths = get_search_paths(ini)?;
        let path_policy = get_path_policy(ini)?;

        self.debug = debug;
        self.library_name = library_name;
        self.search_paths = search_paths;
        self.path_policy = path_policy;
        Ok(())
    }

    /// Get the `debug` option from `[GENERAL]` section.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Get the `name` option from `[LIBRARY]` section.
    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Get the `search-paths` option from `[LIBRARY]` section.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Get the `path-policy` option from `[LIBRARY]` section.
    pub fn path_policy(&self) -> PathPolicy {
        self.path_policy
    }
}


// vim: ts=4 sw=4 expandtab
