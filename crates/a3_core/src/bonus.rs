//! Bonus rule table and team scoring.
//!
//! A rule fires when its full trigger set is present in the team; points
//! accumulate per category, and a team may fire any number of rules.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Bonus category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusCategory {
    Co,
    Ac,
    Sr,
}

impl fmt::Display for BonusCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BonusCategory::Co => write!(f, "co"),
            BonusCategory::Ac => write!(f, "ac"),
            BonusCategory::Sr => write!(f, "sr"),
        }
    }
}

/// A bonus rule: `points` in `category` when every member of the trigger set
/// is in the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusRule {
    pub category: BonusCategory,
    pub points: u32,
    pub members: &'static [&'static str],
}

const fn rule(
    category: BonusCategory,
    points: u32,
    members: &'static [&'static str],
) -> BonusRule {
    BonusRule { category, points, members }
}

use BonusCategory::{Ac, Co, Sr};

/// The full rule table. Iteration order is irrelevant to scoring.
pub static BONUS_RULES: &[BonusRule] = &[
    rule(Co, 50, &["天馬", "幸", "椋", "三角", "一成"]),
    rule(Co, 40, &["椋", "十座", "密", "東"]),
    rule(Co, 30, &["咲也", "真澄", "丞"]),
    rule(Co, 30, &["シトロン", "三角", "誉"]),
    rule(Co, 30, &["幸", "椋", "誉"]),
    rule(Co, 30, &["椋", "一成", "左京"]),
    rule(Co, 30, &["三角", "紬", "東"]),
    rule(Co, 10, &["綴", "シトロン"]),
    rule(Co, 10, &["綴", "誉"]),
    rule(Co, 10, &["至", "誉"]),
    rule(Co, 10, &["天馬", "万里"]),
    rule(Co, 10, &["幸", "臣"]),
    rule(Co, 10, &["一成", "太一"]),
    rule(Co, 10, &["一成", "誉"]),
    rule(Ac, 50, &["万里", "十座", "太一", "臣", "左京"]),
    rule(Ac, 40, &["咲也", "天馬", "万里", "紬"]),
    rule(Ac, 30, &["綴", "臣", "丞"]),
    rule(Ac, 30, &["シトロン", "幸", "丞"]),
    rule(Ac, 30, &["天馬", "十座", "太一"]),
    rule(Ac, 30, &["椋", "三角", "密"]),
    rule(Ac, 10, &["咲也", "十座"]),
    rule(Ac, 10, &["真澄", "天馬"]),
    rule(Ac, 10, &["真澄", "幸"]),
    rule(Ac, 10, &["至", "万里"]),
    rule(Ac, 10, &["至", "太一"]),
    rule(Ac, 10, &["一成", "東"]),
    rule(Ac, 10, &["紬", "丞"]),
    rule(Ac, 10, &["密", "誉"]),
    rule(Sr, 50, &["咲也", "真澄", "綴", "至", "シトロン"]),
    rule(Sr, 50, &["紬", "丞", "密", "誉", "東"]),
    rule(Sr, 40, &["シトロン", "一成", "左京", "東"]),
    rule(Sr, 30, &["咲也", "真澄", "万里"]),
    rule(Sr, 30, &["咲也", "密", "東"]),
    rule(Sr, 30, &["三角", "左京", "東"]),
    rule(Sr, 10, &["真澄", "密"]),
    rule(Sr, 10, &["綴", "臣"]),
    rule(Sr, 10, &["至", "紬"]),
    rule(Sr, 10, &["天馬", "幸"]),
    rule(Sr, 10, &["椋", "十座"]),
    rule(Sr, 10, &["太一", "丞"]),
    rule(Sr, 10, &["臣", "左京"]),
];

/// Per-category point totals for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub co: u32,
    pub ac: u32,
    pub sr: u32,
}

impl ScoreBreakdown {
    pub fn add(&mut self, category: BonusCategory, points: u32) {
        match category {
            BonusCategory::Co => self.co += points,
            BonusCategory::Ac => self.ac += points,
            BonusCategory::Sr => self.sr += points,
        }
    }

    pub fn get(&self, category: BonusCategory) -> u32 {
        match category {
            BonusCategory::Co => self.co,
            BonusCategory::Ac => self.ac,
            BonusCategory::Sr => self.sr,
        }
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "co={} ac={} sr={}", self.co, self.ac, self.sr)
    }
}

/// Scores one team against the rule table.
///
/// Containment is a set-membership test: the team's size and ordering beyond
/// the trigger set are irrelevant.
pub fn score_team(team: &HashSet<&str>, rules: &[BonusRule]) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    for rule in rules {
        if rule.members.iter().all(|member| team.contains(member)) {
            breakdown.add(rule.category, rule.points);
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ROSTER_SET;

    fn team(members: &[&'static str]) -> HashSet<&'static str> {
        members.iter().copied().collect()
    }

    #[test]
    fn test_rules_are_drawn_from_roster() {
        for rule in BONUS_RULES {
            assert!(!rule.members.is_empty(), "Trigger set must be non-empty");
            for member in rule.members {
                assert!(
                    ROSTER_SET.contains(member),
                    "Rule member {} not in roster",
                    member
                );
            }
        }
        assert_eq!(BONUS_RULES.len(), 41);
    }

    #[test]
    fn test_summer_troupe_combo() {
        // The 50-point co rule plus the 天馬+幸 sr pair.
        let breakdown = score_team(&team(&["天馬", "幸", "椋", "三角", "一成"]), BONUS_RULES);
        assert_eq!(breakdown, ScoreBreakdown { co: 50, ac: 0, sr: 10 });
    }

    #[test]
    fn test_spring_troupe_combo() {
        // The 50-point sr rule plus the 綴+シトロン co pair.
        let breakdown = score_team(&team(&["咲也", "真澄", "綴", "至", "シトロン"]), BONUS_RULES);
        assert_eq!(breakdown, ScoreBreakdown { co: 10, ac: 0, sr: 50 });
    }

    #[test]
    fn test_points_accumulate_within_a_category() {
        // 天馬+万里 (co 10) and 天馬+幸 (sr 10) both fire alongside the
        // five-member summer combo once 万里 replaces nobody in a 6-slot team.
        let breakdown =
            score_team(&team(&["天馬", "幸", "椋", "三角", "一成", "万里"]), BONUS_RULES);
        assert_eq!(breakdown.co, 60);
        assert_eq!(breakdown.sr, 10);
    }

    #[test]
    fn test_empty_team_scores_zero() {
        let breakdown = score_team(&team(&[]), BONUS_RULES);
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_rule_order_is_irrelevant() {
        let reversed: Vec<BonusRule> = BONUS_RULES.iter().rev().copied().collect();
        let members = team(&["椋", "十座", "密", "東", "一成"]);
        assert_eq!(score_team(&members, BONUS_RULES), score_team(&members, &reversed));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let members = team(&["咲也", "密", "東", "真澄", "綴"]);
        assert_eq!(
            score_team(&members, BONUS_RULES),
            score_team(&members, BONUS_RULES)
        );
    }

    #[test]
    fn test_superset_keeps_fired_rules() {
        let base = team(&["天馬", "幸", "椋", "三角", "一成"]);
        let base_score = score_team(&base, BONUS_RULES);

        for extra in ["万里", "十座", "密", "東"] {
            let mut grown = base.clone();
            grown.insert(extra);
            let grown_score = score_team(&grown, BONUS_RULES);
            for category in [BonusCategory::Co, BonusCategory::Ac, BonusCategory::Sr] {
                assert!(
                    grown_score.get(category) >= base_score.get(category),
                    "Adding {} must not lose {} points",
                    extra,
                    category
                );
            }
        }
    }

    #[test]
    fn test_breakdown_display() {
        let breakdown = ScoreBreakdown { co: 50, ac: 10, sr: 0 };
        assert_eq!(breakdown.to_string(), "co=50 ac=10 sr=0");
    }

    #[test]
    fn test_breakdown_serializes_with_lowercase_tags() {
        let json = serde_json::to_string(&ScoreBreakdown { co: 30, ac: 0, sr: 10 }).unwrap();
        assert_eq!(json, r#"{"co":30,"ac":0,"sr":10}"#);
    }
}
