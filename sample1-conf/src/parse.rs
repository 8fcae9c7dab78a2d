// -*- coding: utf-8 -*-
//
// Copyright (C) 2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, format_err as err};

pub fn parse_bool(s: &str) -> ah::Result<bool> {
    let s = s.to_lowercase();
    let s = s.trim();
    match s {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(err!("Invalid boolean string")),
    }
}

/// Split a comma separated string into a vec:
/// "a, b, c" -> vec!["a", "b", "c"]
/// Empty items are skipped.
/// A conversion function is applied before inserting into the vec.
pub fn split_commaitems<T, F>(value: &str, conv: F) -> ah::Result<Vec<T>>
where
    F: Fn(&str) -> ah::Result<T>,
{
    let mut ret = Vec::with_capacity(8);
    for item in value.split(',') {
        let item = item.trim();
        if !item.is_empty() {
            ret.push(conv(item)?);
        }
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" Yes ").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("FALSE").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_split_commaitems() {
        let items = split_commaitems(" a, b ,,c ", |s| Ok(s.to_string())).unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
        let items = split_commaitems("   ", |s| Ok(s.to_string())).unwrap();
        assert!(items.is_empty());
        assert!(split_commaitems("1, x", |s| Ok(s.parse::<u8>()?)).is_err());
    }
}

// vim: ts=4 sw=4 expandtab
