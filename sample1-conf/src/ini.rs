// -*- coding: utf-8 -*-
//
// Copyright (C) 2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, format_err as err, Context as _};
use std::{
    collections::HashMap,
    io::Read as _,
    path::Path,
};

/// All options from a `.ini` file section.
struct IniSection {
    options: HashMap<String, String>,
}

impl IniSection {
    fn new() -> Self {
        Self {
            options: HashMap::new(),
        }
    }

    fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    fn options_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.options
    }
}

/// Join physical lines ending in a backslash into logical lines.
///
/// Comment lines are never continued.
fn logical_lines(content: &str) -> ah::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(32);
    let mut pending: Option<String> = None;
    for line in content.lines() {
        let is_comment = pending.is_none() && line.trim_start().starts_with('#');
        let is_section = pending.is_none() && line.trim_start().starts_with('[');
        let (text, continued) = match line.trim_end().strip_suffix('\\') {
            Some(_) if is_section => {
                return Err(err!("Line continuation in section header: '{line}'"));
            }
            Some(text) if !is_comment => (text, true),
            _ => (line, false),
        };
        let text = if pending.is_some() {
            text.trim_start()
        } else {
            text
        };
        let mut logical = pending.take().unwrap_or_default();
        logical.push_str(text);
        if continued {
            pending = Some(logical);
        } else {
            lines.push(logical);
        }
    }
    if let Some(logical) = pending {
        return Err(err!("Line continuation at end of file: '{logical}'"));
    }
    Ok(lines)
}

/// Cut off a trailing `# comment` from an option value.
///
/// A `#` only starts a comment at the beginning of the value
/// or after whitespace. `a#b` stays as it is.
fn strip_comment(value: &str) -> &str {
    let mut prev_ws = true;
    for (idx, ch) in value.char_indices() {
        if ch == '#' && prev_ws {
            return value[..idx].trim_end();
        }
        prev_ws = ch.is_whitespace();
    }
    value
}

/// Simple `.ini` file parser.
pub struct Ini {
    sections: HashMap<String, IniSection>,
}

impl Ini {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    pub fn new_from_file(path: &Path) -> ah::Result<Self> {
        let mut this = Self::new();
        this.read_file(path)?;
        Ok(this)
    }

    pub fn read_file(&mut self, path: &Path) -> ah::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .context("Open configuration file")?;
        let mut buf = vec![];
        file.read_to_end(&mut buf)
            .context("Read configuration file")?;
        self.parse_bytes(buf)
    }

    pub fn parse_bytes(&mut self, content: Vec<u8>) -> ah::Result<()> {
        self.parse_str(
            &String::from_utf8(content)
                .context("Configuration content file to UTF-8 conversion")?,
        )
    }

    pub fn parse_str(&mut self, content: &str) -> ah::Result<()> {
        let mut sections: HashMap<String, IniSection> = HashMap::new();
        let mut in_section: Option<String> = None;
        for line in logical_lines(content)? {
            let line = line.trim_start();
            if line.is_empty() {
                continue; // This is an empty line.
            }
            if line.starts_with('#') {
                continue; // This is a comment.
            }
            // Section start?
            if line.starts_with('[') {
                let line = line.trim_end();
                if line.ends_with(']') {
                    let begin_chlen = '['.len_utf8();
                    let end_chlen = ']'.len_utf8();
                    let sname = &line[begin_chlen..line.len() - end_chlen];
                    if sname.is_empty() {
                        return Err(err!("Section name is empty: '{line}'"));
                    }
                    if sections.contains_key(sname) {
                        return Err(err!("Duplicate section name: '{line}'"));
                    }
                    sections.insert(sname.to_string(), IniSection::new());
                    in_section = Some(sname.to_string());
                    continue;
                } else {
                    return Err(err!("Invalid section name: '{line}'"));
                }
            }
            // Are we inside of a section?
            let Some(section) = &in_section else {
                return Err(err!("Option is not inside of a section: '{line}'"));
            };
            let Some(idx) = line.find('=') else {
                return Err(err!("Option has no equal sign '=': '{line}'"));
            };
            let chlen = '='.len_utf8();
            let opt_name = line[..idx].trim_end();
            if opt_name.is_empty() {
                return Err(err!("Option name is empty: '{line}'"));
            }
            let opt_value = strip_comment(line[idx + chlen..].trim()).to_string();
            sections
                .get_mut(section)
                .ok_or_else(|| err!("Section '{section}' vanished"))?
                .options_mut()
                .insert(opt_name.to_string(), opt_value);
        }
        self.sections = sections;
        Ok(())
    }

    /// Get the value of an option from the given section.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.options().get(option))
            .map(|o| o.as_str())
    }
}

impl Default for Ini {
    fn default() -> Self {
        Self::new()
    }
}


// vim: ts=4 sw=4 expandtab
