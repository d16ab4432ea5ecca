//! JSON serialization types for check reports

use crate::checker::TseitinChecker;
use crate::justification::Justification;
use crate::logic::TermBank;
use serde::{Deserialize, Serialize};

/// Outcome for a single justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationReport {
    /// Position in the log, starting at 0
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Literals rendered as SMT-LIB terms
    pub clause: Vec<String>,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl JustificationReport {
    pub fn from_justification(
        index: usize,
        jst: &Justification,
        checker: &TseitinChecker<'_>,
        bank: &TermBank,
    ) -> Self {
        let verdict = checker.verdict(jst);
        JustificationReport {
            index,
            name: jst.name.clone(),
            clause: jst.literals.iter().map(|&l| bank.display(l).to_string()).collect(),
            accepted: verdict.accepted(),
            main: verdict.main.map(|m| bank.display(m).to_string()),
            rule: verdict.rule.map(|r| r.name().to_string()),
        }
    }
}

/// Summary of checking every justification in a log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub results: Vec<JustificationReport>,
}

impl CheckReport {
    pub fn from_justifications(
        checker: &TseitinChecker<'_>,
        bank: &TermBank,
        justifications: &[Justification],
    ) -> Self {
        let results: Vec<JustificationReport> = justifications
            .iter()
            .enumerate()
            .map(|(i, jst)| JustificationReport::from_justification(i, jst, checker, bank))
            .collect();
        let accepted = results.iter().filter(|r| r.accepted).count();
        CheckReport {
            total: results.len(),
            accepted,
            rejected: results.len() - accepted,
            results,
        }
    }

    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_and_fields() {
        let mut bank = TermBank::new();
        let a = bank.mk_bool_const("a");
        let b = bank.mk_bool_const("b");
        let and = bank.mk_and(vec![a, b]).unwrap();
        let not_a = bank.mk_not(a).unwrap();
        let not_b = bank.mk_not(b).unwrap();
        let good = Justification::named("def", vec![and, not_a, not_b]);
        let bad = Justification::new(vec![and, not_a]);

        let checker = TseitinChecker::new(&bank);
        let report = CheckReport::from_justifications(&checker, &bank, &[good, bad]);

        assert_eq!(report.total, 2);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert!(!report.all_accepted());

        let first = &report.results[0];
        assert_eq!(first.name.as_deref(), Some("def"));
        assert_eq!(first.clause, vec!["(and a b)", "(not a)", "(not b)"]);
        assert_eq!(first.rule.as_deref(), Some("and"));
        assert_eq!(first.main.as_deref(), Some("(and a b)"));

        let second = &report.results[1];
        assert_eq!(second.index, 1);
        assert!(!second.accepted);
        assert_eq!(second.rule, None);
    }

    #[test]
    fn test_json_omits_missing_fields() {
        let bank = TermBank::new();
        let checker = TseitinChecker::new(&bank);
        let report = CheckReport::from_justifications(&checker, &bank, &[Justification::new(vec![])]);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["rejected"], 1);
        let entry = &value["results"][0];
        assert_eq!(entry["accepted"], false);
        assert!(entry.get("name").is_none());
        assert!(entry.get("rule").is_none());
        assert!(entry.get("main").is_none());
    }
}
