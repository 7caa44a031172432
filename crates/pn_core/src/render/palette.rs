//! # Color Palette
//!
//! Fixed colors for the two derived views. Pure lookup tables; nothing in
//! here feeds back into classification or aggregation.

use crate::analysis::classifier::PassType;

/// Pitch surface colors for the network view.
pub const PITCH_BACKGROUND: &str = "#0D182E";
pub const PITCH_LINE: &str = "#5B6378";

/// Base color of network edges; opacity is scaled separately.
pub const EDGE_BASE: &str = "#507293";

/// Arrow color per pass classification.
pub fn pass_color(pass_type: PassType) -> &'static str {
    match pass_type {
        PassType::Unsuccessful => "#848585",
        PassType::Successful => "#0793BC",
        PassType::Progressive => "#0CD127",
        PassType::KeyPass => "#DBE110",
        PassType::Assist => "#F52825",
    }
}

/// Node fill color, bucketed by completion percentage.
pub fn completion_color(pct: f32) -> &'static str {
    if pct <= 60.0 {
        "#A61608"
    } else if pct <= 70.0 {
        "#E57E03"
    } else if pct <= 80.0 {
        "#E5DE05"
    } else if pct <= 85.0 {
        "#63A51D"
    } else {
        "#58802E"
    }
}

/// Node outline color from substitution flags; subbed-in wins when both are
/// set.
pub fn marker_edge_color(subbed_in: bool, subbed_out: bool) -> &'static str {
    if subbed_in {
        "#018B22"
    } else if subbed_out {
        "#A02C04"
    } else {
        "#FEFEFC"
    }
}

/// One legend row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend for the arrow view.
pub fn pass_type_legend() -> [LegendEntry; 5] {
    [
        LegendEntry { label: "Successful", color: pass_color(PassType::Successful) },
        LegendEntry { label: "Unsuccessful", color: pass_color(PassType::Unsuccessful) },
        LegendEntry { label: "Progressive pass", color: pass_color(PassType::Progressive) },
        LegendEntry { label: "Key pass", color: pass_color(PassType::KeyPass) },
        LegendEntry { label: "Assist", color: pass_color(PassType::Assist) },
    ]
}

/// Legend for the network view's completion-percentage buckets.
pub fn completion_legend() -> [LegendEntry; 5] {
    [
        LegendEntry { label: "<= 60%", color: "#A61608" },
        LegendEntry { label: "60% - 70%", color: "#E57E03" },
        LegendEntry { label: "70% - 80%", color: "#E5DE05" },
        LegendEntry { label: "80% - 85%", color: "#63A51D" },
        LegendEntry { label: "+ 85%", color: "#58802E" },
    ]
}
