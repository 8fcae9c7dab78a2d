// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, Context as _};
use sample1_loader::NativeMethods;
use std::io::Write;

const INT_SAMPLE: i32 = 5;
const BOOLEAN_SAMPLE: bool = true;
const STRING_SAMPLE: &str = "JAVA";
const INT_ARRAY_SAMPLE: [i32; 7] = [1, 1, 2, 3, 5, 8, 13];

/// Call all native methods with the fixed sample arguments
/// and write one `<method>: <result>` line per call to `out`.
///
/// All calls are done before anything is written.
pub fn run_samples(methods: &dyn NativeMethods, out: &mut dyn Write) -> ah::Result<()> {
    let square = methods.int_method(INT_SAMPLE).context("intMethod")?;
    let boolean = methods
        .boolean_method(BOOLEAN_SAMPLE)
        .context("booleanMethod")?;
    let text = methods
        .string_method(STRING_SAMPLE)
        .context("stringMethod")?;
    let sum = methods
        .int_array_method(&INT_ARRAY_SAMPLE)
        .context("intArrayMethod")?;

    writeln!(out, "intMethod: {square}")?;
    writeln!(out, "booleanMethod: {boolean}")?;
    writeln!(out, "stringMethod: {text}")?;
    writeln!(out, "intArrayMethod: {sum}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::format_err as err;
    use std::cell::RefCell;

    /// Calls the native implementation in-process.
    struct InProcess;

    impl NativeMethods for InProcess {
        fn int_method(&self, n: i32) -> ah::Result<i32> {
            Ok(sample1_native::int_method(n))
        }

        fn boolean_method(&self, value: bool) -> ah::Result<bool> {
            Ok(sample1_native::boolean_method(value))
        }

        fn string_method(&self, text: &str) -> ah::Result<String> {
            Ok(sample1_native::string_method(text))
        }

        fn int_array_method(&self, array: &[i32]) -> ah::Result<i32> {
            Ok(sample1_native::int_array_method(array))
        }
    }

    /// Records the arguments and fails the string transform.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl NativeMethods for Recorder {
        fn int_method(&self, n: i32) -> ah::Result<i32> {
            self.calls.borrow_mut().push(format!("int {n}"));
            Ok(0)
        }

        fn boolean_method(&self, value: bool) -> ah::Result<bool> {
            self.calls.borrow_mut().push(format!("boolean {value}"));
            Ok(false)
        }

        fn string_method(&self, text: &str) -> ah::Result<String> {
            self.calls.borrow_mut().push(format!("string {text}"));
            Err(err!("native fault"))
        }

        fn int_array_method(&self, array: &[i32]) -> ah::Result<i32> {
            self.calls.borrow_mut().push(format!("array {array:?}"));
            Ok(0)
        }
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run_samples(&InProcess, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "intMethod: 25\n\
             booleanMethod: false\n\
             stringMethod: JAVA\n\
             intArrayMethod: 33\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run_samples(&InProcess, &mut first).unwrap();
        run_samples(&InProcess, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_native_failure() {
        let recorder = Recorder::default();
        let mut out = Vec::new();
        let e = run_samples(&recorder, &mut out).unwrap_err();
        assert!(format!("{e:#}").contains("stringMethod"));
        assert!(out.is_empty());
        assert_eq!(
            *recorder.calls.borrow(),
            vec!["int 5", "boolean true", "string JAVA"]
        );
    }
}

// vim: ts=4 sw=4 expandtab
