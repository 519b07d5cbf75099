use super::analyzer::Analysis;
use crate::Count;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Serialization-shaped view of one full analysis.
///
/// Holds are keyed by their stable render, kept cards in dealt position and
/// XX for discards, so consumers can diff runs and look up patterns without
/// understanding the bit encoding. Counts are itemized through the payout
/// table, so bonus tables show their tier buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub hand: String,
    pub best: String,
    pub expected_val: f64,
    pub holds: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub expected_val: f64,
    pub counts: BTreeMap<String, Count>,
}

impl From<&Analysis> for Report {
    fn from(analysis: &Analysis) -> Self {
        Self {
            hand: analysis.deal().to_string(),
            best: analysis.best().hold.render(analysis.deal()),
            expected_val: analysis.best().value,
            holds: analysis
                .choices()
                .iter()
                .map(|choice| {
                    (
                        choice.hold.render(analysis.deal()),
                        Entry {
                            expected_val: choice.value,
                            counts: analysis.table().itemize(&choice.counts),
                        },
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::payout::PayoutTable;

    fn report(hand: &str, table: PayoutTable) -> Report {
        let analysis = Analyzer::try_from((hand, table)).unwrap().analyze().unwrap();
        Report::from(&analysis)
    }

    #[test]
    fn keys_every_pattern_by_its_render() {
        let report = report("qd9c8d5c2c", PayoutTable::jacks_or_better());
        assert_eq!(report.holds.len(), 32);
        assert_eq!(report.hand, "Qd9c8d5c2c");
        assert!(report.holds.contains_key("XXXXXXXXXX"));
        assert!(report.holds.contains_key("Qd9c8d5c2c"));
        assert!(report.holds.contains_key("QdXX8dXXXX"));
    }

    #[test]
    fn itemizes_the_best_pattern() {
        let report = report("qd9c8d5c2c", PayoutTable::jacks_or_better());
        assert_eq!(report.best, "QdXXXXXXXX");
        assert!((report.expected_val - 0.47419617077341408).abs() < 1e-9);

        let counts = &report.holds.get("QdXXXXXXXX").unwrap().counts;
        let golden = BTreeMap::from([
            ("full_house".to_string(), 288),
            ("three_kind".to_string(), 4102),
            ("four_kind".to_string(), 52),
            ("straight".to_string(), 590),
            ("straight_flush".to_string(), 1),
            ("royal_flush".to_string(), 1),
            ("flush".to_string(), 328),
            ("pair_jqka".to_string(), 45456),
            ("two_pair".to_string(), 8874),
        ]);
        assert_eq!(counts, &golden);
    }

    #[test]
    fn bonus_tables_surface_their_tiers() {
        let report = report("tc9d6h5s2c", PayoutTable::aces_and_eights());
        let counts = &report.holds.get("XXXXXXXXXX").unwrap().counts;
        assert_eq!(counts.get("four_kind"), Some(&215));
        assert_eq!(counts.get("four_kind7"), Some(&43));
        assert_eq!(counts.get("four_kindA8"), Some(&86));
    }

    #[test]
    fn survives_the_wire() {
        let report = report("qd9c8dacad", PayoutTable::triple_bonus_plus());
        let json = serde_json::to_string(&report).unwrap();
        let echo: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(echo.best, report.best);
        assert_eq!(echo.holds.len(), report.holds.len());
        assert_eq!(
            echo.holds.get("XXXXXXAcAd").unwrap().counts,
            report.holds.get("XXXXXXAcAd").unwrap().counts
        );
    }
}
