// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

mod interval;
mod r#type;

pub use interval::Interval;
pub use r#type::Type;
