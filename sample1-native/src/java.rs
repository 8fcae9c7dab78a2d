// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JNI entry points for the Java class `Sample1` (default package):
//!
//! ```java
//! public native int intMethod(int n);
//! public native boolean booleanMethod(boolean bool);
//! public native String stringMethod(String text);
//! public native int intArrayMethod(int[] intArray);
//! ```

use jni::{
    errors::Result as JniResult,
    objects::{JIntArray, JObject, JString},
    sys::{jboolean, jint, jstring, JNI_FALSE, JNI_TRUE},
    JNIEnv,
};
use std::ptr;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Raise a Java exception for a failed marshaling operation.
fn throw(env: &mut JNIEnv<'_>, error: jni::errors::Error) {
    if env.exception_check().unwrap_or(false) {
        return; // The JVM already has a pending exception.
    }
    // Nothing else can be done, if throwing fails.
    let _ = env.throw_new(RUNTIME_EXCEPTION, format!("sample1-native: {error}"));
}

fn do_string_method<'local>(
    env: &mut JNIEnv<'local>,
    text: &JString<'local>,
) -> JniResult<jstring> {
    let text: String = env.get_string(text)?.into();
    let output = env.new_string(crate::string_method(&text))?;
    Ok(output.into_raw())
}

fn do_int_array_method<'local>(
    env: &mut JNIEnv<'local>,
    array: &JIntArray<'local>,
) -> JniResult<jint> {
    let len = env.get_array_length(array)?;
    let mut buf: Vec<jint> = vec![0; usize::try_from(len).unwrap_or(0)];
    env.get_int_array_region(array, 0, &mut buf)?;
    Ok(crate::int_array_method(&buf))
}

#[no_mangle]
pub extern "system" fn Java_Sample1_intMethod<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    n: jint,
) -> jint {
    crate::int_method(n)
}

#[no_mangle]
pub extern "system" fn Java_Sample1_booleanMethod<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    value: jboolean,
) -> jboolean {
    if crate::boolean_method(value != JNI_FALSE) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

#[no_mangle]
pub extern "system" fn Java_Sample1_stringMethod<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    text: JString<'local>,
) -> jstring {
    match do_string_method(&mut env, &text) {
        Ok(output) => output,
        Err(e) => {
            throw(&mut env, e);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_Sample1_intArrayMethod<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    array: JIntArray<'local>,
) -> jint {
    match do_int_array_method(&mut env, &array) {
        Ok(sum) => sum,
        Err(e) => {
            throw(&mut env, e);
            0
        }
    }
}

// vim: ts=4 sw=4 expandtab
