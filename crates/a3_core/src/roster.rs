//! The fixed troupe roster.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// All 20 troupe members, five per troupe.
pub const ROSTER: [&str; 20] = [
    // Spring
    "咲也", "真澄", "綴", "至", "シトロン",
    // Summer
    "天馬", "幸", "椋", "三角", "一成",
    // Autumn
    "万里", "十座", "太一", "臣", "左京",
    // Winter
    "紬", "丞", "密", "誉", "東",
];

/// Membership set over [`ROSTER`].
pub static ROSTER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ROSTER.iter().copied().collect());

/// Maps a user-supplied name to its canonical roster entry.
pub fn canonical(name: &str) -> Option<&'static str> {
    ROSTER.iter().copied().find(|member| *member == name)
}
