// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Stratum

/// Separator between a base column name and a per-entry suffix.
///
/// Part of the persisted naming contract: composite names built with it
/// end up in index metadata and are parsed back at query time. Changing it
/// is a breaking format change.
pub const MAP_SEPARATOR: char = '$';

/// Returns the base column name of a composite name: the portion before
/// the first [`MAP_SEPARATOR`], or the input unchanged when no separator
/// is present.
///
/// Exact inverse of [`Column::full_name`](crate::Column::full_name) for
/// base names that do not themselves contain the separator. A base name
/// containing `$` is ambiguous here; the first segment wins.
pub fn separate_map_keys(input: &str) -> &str {
	match input.find(MAP_SEPARATOR) {
		Some(idx) => &input[..idx],
		None => input,
	}
}

/// Joins a base name and an optional suffix into a full column name.
pub(crate) fn full_name(base: &str, suffix: Option<&str>) -> String {
	match suffix {
		Some(suffix) => format!("{}{}{}", base, MAP_SEPARATOR, suffix),
		None => base.to_string(),
	}
}
