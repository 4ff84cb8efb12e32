// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod components;
pub mod config;
pub mod system;
pub mod viewport;
