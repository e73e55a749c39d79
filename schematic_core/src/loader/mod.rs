// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: figure loaders

pub mod json;
