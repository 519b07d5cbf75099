use super::counter::Counts;
use super::error::Error;
use super::ranking::Ranking;
use crate::cards::rank::Rank;
use crate::Count;
use crate::Payout;
use crate::Utility;
use std::collections::BTreeMap;

const BASE: [&str; 10] = [
    "nothing",
    "pair_jqka",
    "two_pair",
    "three_kind",
    "straight",
    "flush",
    "full_house",
    "four_kind",
    "straight_flush",
    "royal_flush",
];

/// A bonus four-of-a-kind bucket. Tables like Aces and Eights pay quads in
/// some ranks at their own rate, so those ranks leave the generic bucket and
/// resolve here instead. Parsed once at table construction from keys of the
/// form four_kind + rank characters, e.g. four_kindA8.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    name: String,
    ranks: Vec<Rank>,
    payout: Payout,
}

/// Category payouts per unit bet.
///
/// Validated eagerly: all ten base categories must be priced, payouts must be
/// non-negative, and bonus tiers must claim disjoint rank sets so that every
/// four-of-a-kind rank resolves to exactly one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutTable {
    nothing: Payout,
    pair_jqka: Payout,
    two_pair: Payout,
    three_kind: Payout,
    straight: Payout,
    flush: Payout,
    full_house: Payout,
    four_kind: Payout,
    straight_flush: Payout,
    royal_flush: Payout,
    tiers: Vec<Tier>,
}

impl PayoutTable {
    /// the full-pay 9/6 Jacks or Better schedule
    pub fn jacks_or_better() -> Self {
        Self {
            nothing: 0.,
            pair_jqka: 1.,
            two_pair: 2.,
            three_kind: 3.,
            straight: 4.,
            flush: 6.,
            full_house: 9.,
            four_kind: 25.,
            straight_flush: 50.,
            royal_flush: 800.,
            tiers: vec![],
        }
    }

    /// Aces and Eights. bonus quads on sevens, and on aces and eights
    pub fn aces_and_eights() -> Self {
        Self {
            nothing: 0.,
            pair_jqka: 1.,
            two_pair: 2.,
            three_kind: 3.,
            straight: 4.,
            flush: 5.,
            full_house: 8.,
            four_kind: 25.,
            straight_flush: 50.,
            royal_flush: 800.,
            tiers: vec![
                Tier {
                    name: "four_kind7".to_string(),
                    ranks: vec![Rank::Seven],
                    payout: 50.,
                },
                Tier {
                    name: "four_kindA8".to_string(),
                    ranks: vec![Rank::Ace, Rank::Eight],
                    payout: 80.,
                },
            ],
        }
    }

    /// Triple Bonus Plus. bonus quads on twos through fours, and on aces
    pub fn triple_bonus_plus() -> Self {
        Self {
            nothing: 0.,
            pair_jqka: 1.,
            two_pair: 1.,
            three_kind: 3.,
            straight: 4.,
            flush: 5.,
            full_house: 9.,
            four_kind: 50.,
            straight_flush: 100.,
            royal_flush: 800.,
            tiers: vec![
                Tier {
                    name: "four_kind234".to_string(),
                    ranks: vec![Rank::Two, Rank::Three, Rank::Four],
                    payout: 120.,
                },
                Tier {
                    name: "four_kindA".to_string(),
                    ranks: vec![Rank::Ace],
                    payout: 240.,
                },
            ],
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "jacks-or-better" | "jacks_or_better" | "jb" => Some(Self::jacks_or_better()),
            "aces-and-eights" | "aces8s" => Some(Self::aces_and_eights()),
            "triple-bonus-plus" | "tripbonusplus" => Some(Self::triple_bonus_plus()),
            _ => None,
        }
    }

    /// the payout of a final-hand category
    pub fn pay(&self, ranking: &Ranking) -> Payout {
        match ranking {
            Ranking::Nothing => self.nothing,
            Ranking::HighPair => self.pair_jqka,
            Ranking::TwoPair => self.two_pair,
            Ranking::ThreeOAK => self.three_kind,
            Ranking::Straight => self.straight,
            Ranking::Flush => self.flush,
            Ranking::FullHouse => self.full_house,
            Ranking::FourOAK(rank) => self.quad(rank),
            Ranking::StraightFlush => self.straight_flush,
            Ranking::RoyalFlush => self.royal_flush,
        }
    }

    /// the payout of four of a kind in this rank. at most one tier can claim
    /// a rank, so lookup order is immaterial.
    pub fn quad(&self, rank: &Rank) -> Payout {
        self.tiers
            .iter()
            .find(|tier| tier.ranks.contains(rank))
            .map(|tier| tier.payout)
            .unwrap_or(self.four_kind)
    }

    /// expected value of a hold whose winning draws have been counted
    pub fn value(&self, counts: &Counts) -> Utility {
        let reward = counts.royal_flush as Payout * self.royal_flush
            + counts.straight_flush as Payout * self.straight_flush
            + Rank::all()
                .iter()
                .map(|rank| counts.four_kind[u8::from(*rank) as usize] as Payout * self.quad(rank))
                .sum::<Payout>()
            + counts.full_house as Payout * self.full_house
            + counts.flush as Payout * self.flush
            + counts.straight as Payout * self.straight
            + counts.three_kind as Payout * self.three_kind
            + counts.two_pair as Payout * self.two_pair
            + counts.pair_jqka as Payout * self.pair_jqka
            + counts.nothing as Payout * self.nothing;
        reward / counts.total as Payout
    }

    /// the paying buckets this table distinguishes, zeros included. quads
    /// split across the generic bucket and the bonus tiers.
    pub fn itemize(&self, counts: &Counts) -> BTreeMap<String, Count> {
        let mut buckets = BTreeMap::new();
        buckets.insert("royal_flush".to_string(), counts.royal_flush);
        buckets.insert("straight_flush".to_string(), counts.straight_flush);
        buckets.insert("full_house".to_string(), counts.full_house);
        buckets.insert("flush".to_string(), counts.flush);
        buckets.insert("straight".to_string(), counts.straight);
        buckets.insert("three_kind".to_string(), counts.three_kind);
        buckets.insert("two_pair".to_string(), counts.two_pair);
        buckets.insert("pair_jqka".to_string(), counts.pair_jqka);
        buckets.insert(
            "four_kind".to_string(),
            Rank::all()
                .iter()
                .filter(|rank| self.tiers.iter().all(|tier| !tier.ranks.contains(rank)))
                .map(|rank| counts.four_kind[u8::from(*rank) as usize])
                .sum(),
        );
        for tier in self.tiers.iter() {
            buckets.insert(
                tier.name.clone(),
                tier.ranks
                    .iter()
                    .map(|rank| counts.four_kind[u8::from(*rank) as usize])
                    .sum(),
            );
        }
        buckets
    }
}

impl TryFrom<BTreeMap<String, Payout>> for PayoutTable {
    type Error = Error;
    fn try_from(map: BTreeMap<String, Payout>) -> Result<Self, Self::Error> {
        if let Some((name, payout)) = map.iter().find(|(_, p)| !p.is_finite() || **p < 0.) {
            return Err(Error::InvalidPayoutTable(format!(
                "{} pays {}",
                name, payout
            )));
        }
        let mut tiers = Vec::new();
        for (name, payout) in map.iter() {
            if BASE.contains(&name.as_str()) {
                continue;
            }
            let suffix = name
                .strip_prefix("four_kind")
                .filter(|suffix| !suffix.is_empty())
                .ok_or_else(|| {
                    Error::InvalidPayoutTable(format!("unrecognized category {}", name))
                })?;
            let ranks = suffix
                .chars()
                .map(|c| Rank::try_from(c.to_string().as_str()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| {
                    Error::InvalidPayoutTable(format!("unrecognized rank in {}", name))
                })?;
            tiers.push(Tier {
                name: name.clone(),
                ranks,
                payout: *payout,
            });
        }
        let mut claimed: Vec<Rank> = Vec::new();
        for rank in tiers.iter().flat_map(|tier| tier.ranks.iter()) {
            match claimed.contains(rank) {
                true => {
                    return Err(Error::InvalidPayoutTable(format!(
                        "four of a kind {} priced twice",
                        rank
                    )))
                }
                false => claimed.push(*rank),
            }
        }
        let require = |name: &str| {
            map.get(name)
                .copied()
                .ok_or_else(|| Error::InvalidPayoutTable(format!("missing category {}", name)))
        };
        Ok(Self {
            nothing: require("nothing")?,
            pair_jqka: require("pair_jqka")?,
            two_pair: require("two_pair")?,
            three_kind: require("three_kind")?,
            straight: require("straight")?,
            flush: require("flush")?,
            full_house: require("full_house")?,
            four_kind: require("four_kind")?,
            straight_flush: require("straight_flush")?,
            royal_flush: require("royal_flush")?,
            tiers,
        })
    }
}

/// JSON isomorphism, through the flat name-to-payout mapping
impl TryFrom<&str> for PayoutTable {
    type Error = Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<BTreeMap<String, Payout>>(json)
            .map_err(|e| Error::InvalidPayoutTable(e.to_string()))
            .and_then(Self::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::counter::Counter;
    use crate::analysis::hold::Hold;
    use crate::cards::deal::Deal;

    fn counts(hand: &str, kept: [bool; 5]) -> Counts {
        let deal = Deal::try_from(hand).unwrap();
        let hold = Hold::from(kept);
        Counter::try_from((&deal, &hold)).unwrap().counts()
    }

    #[test]
    fn presets_resolve_by_alias() {
        assert_eq!(PayoutTable::preset("jb"), Some(PayoutTable::jacks_or_better()));
        assert_eq!(PayoutTable::preset("jacks-or-better"), Some(PayoutTable::jacks_or_better()));
        assert_eq!(PayoutTable::preset("aces8s"), Some(PayoutTable::aces_and_eights()));
        assert_eq!(PayoutTable::preset("tripbonusplus"), Some(PayoutTable::triple_bonus_plus()));
        assert_eq!(PayoutTable::preset("deuces-wild"), None);
    }

    #[test]
    fn parses_from_json() {
        let json = r#"{
            "nothing": 0, "pair_jqka": 1, "two_pair": 2, "three_kind": 3,
            "straight": 4, "flush": 5, "full_house": 8, "four_kind": 25,
            "four_kind7": 50, "four_kindA8": 80,
            "straight_flush": 50, "royal_flush": 800
        }"#;
        assert_eq!(PayoutTable::try_from(json).unwrap(), PayoutTable::aces_and_eights());
    }

    #[test]
    fn rejects_missing_category() {
        let json = r#"{
            "nothing": 0, "pair_jqka": 1, "two_pair": 2, "three_kind": 3,
            "straight": 4, "full_house": 9, "four_kind": 25,
            "straight_flush": 50, "royal_flush": 800
        }"#;
        assert!(PayoutTable::try_from(json).is_err());
    }

    #[test]
    fn rejects_unrecognized_category() {
        let mut map = BTreeMap::new();
        for name in BASE {
            map.insert(name.to_string(), 1.);
        }
        map.insert("kicker".to_string(), 2.);
        assert!(PayoutTable::try_from(map).is_err());
    }

    #[test]
    fn rejects_malformed_tier() {
        let mut map = BTreeMap::new();
        for name in BASE {
            map.insert(name.to_string(), 1.);
        }
        map.insert("four_kindZ".to_string(), 100.);
        assert!(PayoutTable::try_from(map).is_err());
    }

    #[test]
    fn rejects_overlapping_tiers() {
        let mut map = BTreeMap::new();
        for name in BASE {
            map.insert(name.to_string(), 1.);
        }
        map.insert("four_kindA".to_string(), 240.);
        map.insert("four_kindA8".to_string(), 80.);
        assert!(PayoutTable::try_from(map).is_err());
    }

    #[test]
    fn rejects_negative_payout() {
        let mut map = BTreeMap::new();
        for name in BASE {
            map.insert(name.to_string(), 1.);
        }
        map.insert("flush".to_string(), -6.);
        assert!(PayoutTable::try_from(map).is_err());
    }

    #[test]
    fn quads_resolve_to_their_tier() {
        let aces8s = PayoutTable::aces_and_eights();
        assert_eq!(aces8s.quad(&Rank::Seven), 50.);
        assert_eq!(aces8s.quad(&Rank::Ace), 80.);
        assert_eq!(aces8s.quad(&Rank::Eight), 80.);
        assert_eq!(aces8s.quad(&Rank::Queen), 25.);

        let tbp = PayoutTable::triple_bonus_plus();
        assert_eq!(tbp.quad(&Rank::Ace), 240.);
        assert_eq!(tbp.quad(&Rank::Two), 120.);
        assert_eq!(tbp.quad(&Rank::Queen), 50.);
    }

    #[test]
    fn pays_by_ranking() {
        let table = PayoutTable::jacks_or_better();
        assert_eq!(table.pay(&Ranking::RoyalFlush), 800.);
        assert_eq!(table.pay(&Ranking::StraightFlush), 50.);
        assert_eq!(table.pay(&Ranking::FourOAK(Rank::Seven)), 25.);
        assert_eq!(table.pay(&Ranking::FullHouse), 9.);
        assert_eq!(table.pay(&Ranking::Flush), 6.);
        assert_eq!(table.pay(&Ranking::Straight), 4.);
        assert_eq!(table.pay(&Ranking::ThreeOAK), 3.);
        assert_eq!(table.pay(&Ranking::TwoPair), 2.);
        assert_eq!(table.pay(&Ranking::HighPair), 1.);
        assert_eq!(table.pay(&Ranking::Nothing), 0.);

        let aces8s = PayoutTable::aces_and_eights();
        assert_eq!(aces8s.pay(&Ranking::FourOAK(Rank::Seven)), 50.);
        assert_eq!(aces8s.pay(&Ranking::FourOAK(Rank::Eight)), 80.);
    }

    #[test]
    fn values_a_counted_hold() {
        let holdq = counts("qd9c8d5c2c", [true, false, false, false, false]);
        let ev = PayoutTable::jacks_or_better().value(&holdq);
        assert!((ev - 0.47419617077341408).abs() < 1e-9);
        let ev = PayoutTable::aces_and_eights().value(&holdq);
        assert!((ev - 0.47119109690802569).abs() < 1e-9);
    }

    #[test]
    fn values_a_pat_hand() {
        let pat = counts("qdqcqh2s2d", [true; 5]);
        assert_eq!(PayoutTable::jacks_or_better().value(&pat), 9.);
        assert_eq!(PayoutTable::aces_and_eights().value(&pat), 8.);
    }

    #[test]
    fn itemizes_quads_into_tiers() {
        let holdq = counts("qd9c8d5c2c", [true, false, false, false, false]);
        let plain = PayoutTable::jacks_or_better().itemize(&holdq);
        assert_eq!(plain.get("four_kind"), Some(&52));
        assert_eq!(plain.get("four_kind7"), None);

        let bonus = PayoutTable::aces_and_eights().itemize(&holdq);
        assert_eq!(bonus.get("four_kind"), Some(&50));
        assert_eq!(bonus.get("four_kind7"), Some(&1));
        assert_eq!(bonus.get("four_kindA8"), Some(&1));

        let discard = counts("tc9d6h5s2c", [false; 5]);
        let bonus = PayoutTable::aces_and_eights().itemize(&discard);
        assert_eq!(bonus.get("four_kind"), Some(&215));
        assert_eq!(bonus.get("four_kind7"), Some(&43));
        assert_eq!(bonus.get("four_kindA8"), Some(&86));

        let bonus = PayoutTable::triple_bonus_plus().itemize(&discard);
        assert_eq!(bonus.get("four_kind"), Some(&215));
        assert_eq!(bonus.get("four_kindA"), Some(&43));
        assert_eq!(bonus.get("four_kind234"), Some(&86));
    }

    #[test]
    fn itemizes_zeros() {
        let pat = counts("qdqcqh2s2d", [true; 5]);
        let buckets = PayoutTable::jacks_or_better().itemize(&pat);
        assert_eq!(buckets.len(), 9);
        assert_eq!(buckets.get("full_house"), Some(&1));
        assert_eq!(buckets.get("royal_flush"), Some(&0));
        assert_eq!(buckets.get("nothing"), None);
    }

    #[test]
    fn counts_do_not_depend_on_the_table() {
        let a = counts("qd9c8d5c2c", [true, false, false, false, false]);
        let b = counts("qd9c8d5c2c", [true, false, false, false, false]);
        assert_eq!(a, b);
        let jb = PayoutTable::jacks_or_better().itemize(&a);
        let a8 = PayoutTable::aces_and_eights().itemize(&a);
        assert_eq!(
            jb.get("four_kind").copied().unwrap_or(0),
            a8.get("four_kind").copied().unwrap_or(0)
                + a8.get("four_kind7").copied().unwrap_or(0)
                + a8.get("four_kindA8").copied().unwrap_or(0)
        );
    }
}
