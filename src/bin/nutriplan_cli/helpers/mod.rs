// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for nutriplan-cli
// ABOUTME: Provides output and error display utilities

pub mod display;
