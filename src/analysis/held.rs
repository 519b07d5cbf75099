use super::error::Error;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::Count;
use std::collections::BTreeMap;

/// The kept cards of one hold pattern, regrouped for counting.
///
/// The counting formulas never ask which positions were kept. They ask how
/// many cards of each rank are held, how many of each suit, and whether a
/// specific card is among them. So a Held is the same five-or-fewer cards
/// pivoted twice, rank first and suit first.
///
/// Construction rejects groupings that no 52-card deck can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Held {
    by_rank: BTreeMap<Rank, Vec<Suit>>,
    by_suit: BTreeMap<Suit, Vec<Rank>>,
}

impl Held {
    /// how many cards are held
    pub fn n(&self) -> usize {
        self.by_rank.values().map(|suits| suits.len()).sum()
    }

    /// how many held cards have this rank
    pub fn count(&self, rank: &Rank) -> Count {
        self.by_rank
            .get(rank)
            .map(|suits| suits.len() as Count)
            .unwrap_or(0)
    }

    /// how many held cards have this suit
    pub fn in_suit(&self, suit: &Suit) -> usize {
        self.by_suit.get(suit).map(|ranks| ranks.len()).unwrap_or(0)
    }

    /// how many distinct suits appear among the held cards
    pub fn suits(&self) -> usize {
        self.by_suit.len()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.by_rank
            .get(&card.rank())
            .map(|suits| suits.contains(&card.suit()))
            .unwrap_or(false)
    }

    /// no rank held more than once
    pub fn pairless(&self) -> bool {
        self.by_rank.values().all(|suits| suits.len() == 1)
    }

    /// the held ranks with their held suits
    pub fn ranks(&self) -> impl Iterator<Item = (&Rank, &Vec<Suit>)> {
        self.by_rank.iter()
    }

    /// u16 presence mask of the held ranks
    pub fn mask(&self) -> u16 {
        self.by_rank
            .keys()
            .map(|rank| u16::from(*rank))
            .fold(0u16, |a, b| a | b)
    }
}

impl TryFrom<Vec<Card>> for Held {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() > 5 {
            return Err(Error::InvalidHeldPartition(format!(
                "{} cards held, at most 5 possible",
                cards.len()
            )));
        }
        let mut by_rank: BTreeMap<Rank, Vec<Suit>> = BTreeMap::new();
        let mut by_suit: BTreeMap<Suit, Vec<Rank>> = BTreeMap::new();
        for card in cards {
            let rank = card.rank();
            let suit = card.suit();
            if by_rank.get(&rank).map(|suits| suits.contains(&suit)) == Some(true) {
                return Err(Error::InvalidHeldPartition(format!("{} held twice", card)));
            }
            by_rank.entry(rank).or_default().push(suit);
            by_suit.entry(suit).or_default().push(rank);
        }
        Ok(Self { by_rank, by_suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::hold::Hold;
    use crate::cards::deal::Deal;

    fn held(hand: &str, kept: [bool; 5]) -> Held {
        let deal = Deal::try_from(hand).unwrap();
        Held::try_from(Hold::from(kept).apply(&deal)).unwrap()
    }

    #[test]
    fn pivots_both_ways() {
        let held = held("ahjcts7s4h", [true, true, false, false, false]);
        assert_eq!(held.n(), 2);
        assert_eq!(held.count(&Rank::Ace), 1);
        assert_eq!(held.count(&Rank::Jack), 1);
        assert_eq!(held.count(&Rank::Ten), 0);
        assert_eq!(held.in_suit(&Suit::Heart), 1);
        assert_eq!(held.in_suit(&Suit::Club), 1);
        assert_eq!(held.suits(), 2);
    }

    #[test]
    fn tracks_multiplicity() {
        let held = held("qdqcqh2s2d", [true, true, true, false, false]);
        assert_eq!(held.n(), 3);
        assert_eq!(held.count(&Rank::Queen), 3);
        assert!(!held.pairless());
        assert_eq!(held.mask(), u16::from(Rank::Queen));
    }

    #[test]
    fn rejects_duplicates() {
        let ace = Card::try_from("Ah").unwrap();
        assert!(Held::try_from(vec![ace, ace]).is_err());
    }

    #[test]
    fn rejects_excess_cards() {
        let cards = Card::parse("2c3c4c5c6c7c").unwrap();
        assert!(Held::try_from(cards).is_err());
    }

    #[test]
    fn empty_hold_is_valid() {
        let held = Held::try_from(Vec::new()).unwrap();
        assert_eq!(held.n(), 0);
        assert_eq!(held.suits(), 0);
        assert!(held.pairless());
    }
}
