// ABOUTME: Sports-science formula algorithms used by the progression analyzers
// ABOUTME: Currently the Epley one-rep-max estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

/// Epley one-rep-max estimation
pub mod epley;

pub use epley::estimate_one_rep_max;
