//! Set-algebra rendering of selected regions.

use super::types::Region;
use crate::segment::SegmentStore;

pub const INTERSECTION: &str = " \u{2229} ";
pub const DIFFERENCE: &str = " - ";
pub const UNION: &str = " \u{222A} ";
/// Output when nothing is selected.
pub const EMPTY_FORMULA: &str = "-";

/// `A ∩ B` when the region covers every segment, `(A ∩ B) - C - D` otherwise.
pub fn region_formula(region: &Region, segments: &SegmentStore) -> String {
    let mut in_codes: Vec<String> = region
        .segment_ids
        .iter()
        .map(|id| {
            segments
                .get(*id)
                .map(|s| s.code.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    in_codes.sort();

    let mut out_codes: Vec<&str> = segments
        .iter()
        .filter(|s| !region.has_member(s.id))
        .map(|s| s.code.as_str())
        .collect();
    out_codes.sort_unstable();

    let in_expr = in_codes.join(INTERSECTION);
    if out_codes.is_empty() {
        in_expr
    } else {
        format!("({}){}{}", in_expr, DIFFERENCE, out_codes.join(DIFFERENCE))
    }
}

/// Formula for all selected regions, in region-list order.
pub fn generate_formula(regions: &[Region], segments: &SegmentStore) -> String {
    let formulas: Vec<String> = regions
        .iter()
        .filter(|r| r.selected)
        .map(|r| region_formula(r, segments))
        .collect();

    match formulas.len() {
        0 => EMPTY_FORMULA.to_string(),
        1 => formulas.into_iter().next().unwrap_or_default(),
        _ => formulas
            .iter()
            .map(|f| format!("({})", f))
            .collect::<Vec<_>>()
            .join(UNION),
    }
}
