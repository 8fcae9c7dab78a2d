// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native implementation of the four `Sample1` methods.
//!
//! The methods are exported twice from the shared library:
//!
//! - as JNI entry points for the Java class `Sample1` (feature `jni`),
//! - as plain C ABI functions with a `sample1_` prefix for non-JVM hosts.
//!
//! Both export flavors forward to the safe Rust functions in this module.

pub mod capi;
#[cfg(feature = "jni")]
pub mod java;

/// Square an integer.
///
/// The result wraps around on overflow, like Java `int` arithmetic does.
pub fn int_method(n: i32) -> i32 {
    n.wrapping_mul(n)
}

/// Logical negation.
pub fn boolean_method(value: bool) -> bool {
    !value
}

/// Convert a text to upper case.
pub fn string_method(text: &str) -> String {
    text.to_uppercase()
}

/// Sum up all array elements, wrapping around on overflow.
pub fn int_array_method(array: &[i32]) -> i32 {
    array.iter().fold(0_i32, |acc, x| acc.wrapping_add(*x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_method() {
        assert_eq!(int_method(5), 25);
        assert_eq!(int_method(-3), 9);
        assert_eq!(int_method(0), 0);
        assert_eq!(int_method(46341), 46341_i32.wrapping_mul(46341));
    }

    #[test]
    fn test_boolean_method() {
        assert!(!boolean_method(true));
        assert!(boolean_method(false));
    }

    #[test]
    fn test_string_method() {
        assert_eq!(string_method("JAVA"), "JAVA");
        assert_eq!(string_method("java"), "JAVA");
        assert_eq!(string_method(""), "");
        assert_eq!(string_method("grüße"), "GRÜSSE");
    }

    #[test]
    fn test_int_array_method() {
        assert_eq!(int_array_method(&[1, 1, 2, 3, 5, 8, 13]), 33);
        assert_eq!(int_array_method(&[]), 0);
        assert_eq!(int_array_method(&[i32::MAX, 1]), i32::MIN);
    }
}

// vim: ts=4 sw=4 expandtab
