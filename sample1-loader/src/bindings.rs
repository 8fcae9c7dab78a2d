// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::library::NativeLibrary;
use anyhow::{self as ah, format_err as err, Context as _};
use libc::{c_char, size_t};
use libloading::Library;
use std::{
    ffi::{CStr, CString},
    marker::PhantomData,
};

const SYM_INT_METHOD: &str = "sample1_int_method";
const SYM_BOOLEAN_METHOD: &str = "sample1_boolean_method";
const SYM_STRING_METHOD: &str = "sample1_string_method";
const SYM_STRING_FREE: &str = "sample1_string_free";
const SYM_INT_ARRAY_METHOD: &str = "sample1_int_array_method";

type IntMethodFn = unsafe extern "C" fn(i32) -> i32;
type BooleanMethodFn = unsafe extern "C" fn(bool) -> bool;
type StringMethodFn = unsafe extern "C" fn(*const c_char) -> *mut c_char;
type StringFreeFn = unsafe extern "C" fn(*mut c_char);
type IntArrayMethodFn = unsafe extern "C" fn(*const i32, size_t) -> i32;

/// The four native methods.
pub trait NativeMethods {
    /// Integer transform.
    fn int_method(&self, n: i32) -> ah::Result<i32>;

    /// Boolean transform.
    fn boolean_method(&self, value: bool) -> ah::Result<bool>;

    /// String transform.
    fn string_method(&self, text: &str) -> ah::Result<String>;

    /// Integer array reduction.
    fn int_array_method(&self, array: &[i32]) -> ah::Result<i32>;
}

/// Look up a function symbol and copy out the function pointer.
///
/// # Safety
///
/// `T` must be the function pointer type matching the exported symbol.
/// The returned pointer must not be used after `lib` has been unloaded.
unsafe fn symbol<T: Copy>(lib: &Library, name: &str) -> ah::Result<T> {
    let cname = format!("{name}\0");
    // SAFETY: The caller guarantees that `T` matches the symbol.
    let sym = unsafe { lib.get::<T>(cname.as_bytes()) }
        .with_context(|| format!("Native library does not export '{name}'"))?;
    Ok(*sym)
}

/// Typed C ABI bindings to a loaded `sample1` native library.
///
/// All symbols are resolved when the bindings are created.
pub struct Sample1Bindings<'lib> {
    int_method: IntMethodFn,
    boolean_method: BooleanMethodFn,
    string_method: StringMethodFn,
    string_free: StringFreeFn,
    int_array_method: IntArrayMethodFn,
    _lib: PhantomData<&'lib NativeLibrary>,
}

impl<'lib> Sample1Bindings<'lib> {
    pub fn new(lib: &'lib NativeLibrary) -> ah::Result<Self> {
        let l = lib.library();
        // SAFETY:
        // The types match the C ABI exports of sample1-native.
        // The pointers can't outlive `lib` due to the `'lib` lifetime.
        unsafe {
            Ok(Self {
                int_method: symbol(l, SYM_INT_METHOD)?,
                boolean_method: symbol(l, SYM_BOOLEAN_METHOD)?,
                string_method: symbol(l, SYM_STRING_METHOD)?,
                string_free: symbol(l, SYM_STRING_FREE)?,
                int_array_method: symbol(l, SYM_INT_ARRAY_METHOD)?,
                _lib: PhantomData,
            })
        }
    }
}

impl NativeMethods for Sample1Bindings<'_> {
    fn int_method(&self, n: i32) -> ah::Result<i32> {
        // SAFETY: Plain value call.
        Ok(unsafe { (self.int_method)(n) })
    }

    fn boolean_method(&self, value: bool) -> ah::Result<bool> {
        // SAFETY: Plain value call.
        Ok(unsafe { (self.boolean_method)(value) })
    }

    fn string_method(&self, text: &str) -> ah::Result<String> {
        let input = CString::new(text).context("String argument contains a NUL byte")?;
        // SAFETY: `input` is NUL terminated and outlives the call.
        let output = unsafe { (self.string_method)(input.as_ptr()) };
        if output.is_null() {
            return Err(err!("Native string transform failed on {text:?}"));
        }
        // SAFETY: A non-NULL result is a NUL terminated string
        // that stays valid until it is passed to the free function.
        let result = unsafe { CStr::from_ptr(output) }
            .to_str()
            .map(|s| s.to_string());
        // SAFETY: `output` came from the string transform and is freed exactly once.
        unsafe { (self.string_free)(output) };
        result.context("Native string transform returned invalid UTF-8")
    }

    fn int_array_method(&self, array: &[i32]) -> ah::Result<i32> {
        // SAFETY: Pointer and length describe the borrowed slice.
        Ok(unsafe { (self.int_array_method)(array.as_ptr(), array.len()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        ptr,
        sync::atomic::{AtomicUsize, Ordering},
    };

    static FREED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn stub_int(n: i32) -> i32 {
        n
    }

    unsafe extern "C" fn stub_boolean(value: bool) -> bool {
        value
    }

    unsafe extern "C" fn stub_string_null(_text: *const c_char) -> *mut c_char {
        ptr::null_mut()
    }

    unsafe extern "C" fn stub_string_invalid(_text: *const c_char) -> *mut c_char {
        CString::new(vec![0xFF_u8, 0xFE]).unwrap().into_raw()
    }

    unsafe extern "C" fn stub_string_free(text: *mut c_char) {
        FREED.fetch_add(1, Ordering::SeqCst);
        // SAFETY: Only called with pointers from `stub_string_invalid`.
        drop(unsafe { CString::from_raw(text) });
    }

    unsafe extern "C" fn stub_int_array(_array: *const i32, len: size_t) -> i32 {
        len as i32
    }

    fn stub_bindings(string_method: StringMethodFn) -> Sample1Bindings<'static> {
        Sample1Bindings {
            int_method: stub_int,
            boolean_method: stub_boolean,
            string_method,
            string_free: stub_string_free,
            int_array_method: stub_int_array,
            _lib: PhantomData,
        }
    }

    #[test]
    fn test_string_null_result() {
        let b = stub_bindings(stub_string_null);
        let e = b.string_method("java").unwrap_err();
        assert!(format!("{e}").contains("failed on \"java\""));
    }

    #[test]
    fn test_string_invalid_utf8_result() {
        let b = stub_bindings(stub_string_invalid);
        let e = b.string_method("java").unwrap_err();
        assert!(format!("{e}").contains("invalid UTF-8"));
        assert_eq!(FREED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_string_nul_argument() {
        let b = stub_bindings(stub_string_null);
        let e = b.string_method("a\0b").unwrap_err();
        assert!(format!("{e}").contains("NUL byte"));
    }

    #[test]
    fn test_value_calls() {
        let b = stub_bindings(stub_string_null);
        assert_eq!(b.int_method(7).unwrap(), 7);
        assert!(b.boolean_method(true).unwrap());
        assert_eq!(b.int_array_method(&[1, 2, 3]).unwrap(), 3);
    }
}

// vim: ts=4 sw=4 expandtab
