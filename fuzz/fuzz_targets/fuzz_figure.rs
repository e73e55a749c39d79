// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use schematic_core::loader::json;

fuzz_target!(|data: &[u8]| {
    if let Ok(figure) = json::from_slice(data) {
        if figure.items.len() <= 4 {
            let _ = figure.bounds();
        }
    }
});
