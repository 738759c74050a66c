// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the gro CLI.
//!
//! The test files under `cli/` are wired into the gro crate as `[[test]]`
//! targets so they run against the built binary.
