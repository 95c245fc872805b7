//! Regions: every non-empty combination of segment membership, the lookup
//! from a point to its region, and the formula for a selection.

pub mod types;
pub mod enumerate;
pub mod classify;
pub mod formula;

#[cfg(test)]
mod tests_enumerate;
#[cfg(test)]
mod tests_classify;
#[cfg(test)]
mod tests_formula;

pub use classify::{classify_point, membership_at, region_contains_point};
pub use enumerate::{
    apply_selected_ids, enumerate_regions, merge_selection, recompute_regions,
    selected_region_ids, MAX_ENUMERABLE,
};
pub use formula::{generate_formula, region_formula, EMPTY_FORMULA};
pub use types::{Region, RegionId};
