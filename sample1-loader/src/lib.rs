// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host side of the `sample1` native library.
//!
//! The search directories for the native library are explicit
//! configuration owned by the caller. No process global loader state
//! is modified.

mod bindings;
mod library;
mod search;

pub use crate::{
    bindings::{NativeMethods, Sample1Bindings},
    library::NativeLibrary,
    search::{library_file_name, LibrarySearchPath},
};

// vim: ts=4 sw=4 expandtab
