// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain C ABI exports.
//!
//! The symbol names are part of the library interface and are looked up
//! by name from the host side.

use libc::{c_char, size_t};
use std::{
    ffi::{CStr, CString},
    ptr, slice,
};

#[no_mangle]
pub extern "C" fn sample1_int_method(n: i32) -> i32 {
    crate::int_method(n)
}

#[no_mangle]
pub extern "C" fn sample1_boolean_method(value: bool) -> bool {
    crate::boolean_method(value)
}

/// Upper-case a NUL terminated UTF-8 string.
///
/// Returns a newly allocated NUL terminated string that must be released
/// with [sample1_string_free].
/// Returns NULL, if `text` is NULL or not valid UTF-8.
///
/// # Safety
///
/// `text` must be NULL or point to a NUL terminated string
/// that stays valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn sample1_string_method(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: The caller guarantees a valid NUL terminated string.
    let text = unsafe { CStr::from_ptr(text) };
    let Ok(text) = text.to_str() else {
        return ptr::null_mut();
    };
    match CString::new(crate::string_method(text)) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Release a string returned by [sample1_string_method].
///
/// # Safety
///
/// `text` must be NULL or a pointer returned by [sample1_string_method]
/// that has not been released before.
#[no_mangle]
pub unsafe extern "C" fn sample1_string_free(text: *mut c_char) {
    if !text.is_null() {
        // SAFETY: The pointer was created by CString::into_raw.
        drop(unsafe { CString::from_raw(text) });
    }
}

/// Sum up `len` integers starting at `array`.
///
/// A NULL `array` is treated as the empty array.
///
/// # Safety
///
/// `array` must be NULL or point to at least `len` readable `i32` values.
#[no_mangle]
pub unsafe extern "C" fn sample1_int_array_method(array: *const i32, len: size_t) -> i32 {
    if array.is_null() || len == 0 {
        return 0;
    }
    // SAFETY: The caller guarantees `len` valid elements.
    let array = unsafe { slice::from_raw_parts(array, len) };
    crate::int_array_method(array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(sample1_int_method(5), 25);
        assert!(!sample1_boolean_method(true));
    }

    #[test]
    fn test_string() {
        let input = CString::new("java").unwrap();
        unsafe {
            let out = sample1_string_method(input.as_ptr());
            assert!(!out.is_null());
            assert_eq!(CStr::from_ptr(out).to_str().unwrap(), "JAVA");
            sample1_string_free(out);

            assert!(sample1_string_method(ptr::null()).is_null());
            sample1_string_free(ptr::null_mut());
        }
    }

    #[test]
    fn test_string_invalid_utf8() {
        let input = [0xFF_u8, 0xFE, 0x00];
        let out = unsafe { sample1_string_method(input.as_ptr().cast()) };
        assert!(out.is_null());
    }

    #[test]
    fn test_int_array() {
        let array = [1, 1, 2, 3, 5, 8, 13];
        unsafe {
            assert_eq!(sample1_int_array_method(array.as_ptr(), array.len()), 33);
            assert_eq!(sample1_int_array_method(array.as_ptr(), 0), 0);
            assert_eq!(sample1_int_array_method(ptr::null(), 0), 0);
            assert_eq!(sample1_int_array_method(ptr::null(), 7), 0);
        }
    }
}

// vim: ts=4 sw=4 expandtab
