use super::card::Card;
use super::hand::Hand;
use crate::analysis::error::Error;
use crate::Arbitrary;

/// The five cards on the machine, in the order they came off the shuffle.
///
/// Unlike [`Hand`], a Deal is ordered. The position of each card matters
/// because discard decisions are expressed positionally: "hold the first and
/// third card" is only meaningful against the dealt order. Construction
/// validates cardinality and distinctness, so every Deal is a legal deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal([Card; 5]);

impl Deal {
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
}

/// Vec<Card> conversion, fallible on cardinality and duplicates
impl TryFrom<Vec<Card>> for Deal {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let n = cards.len();
        if n != 5 {
            return Err(Error::InvalidHand(format!("expected 5 cards, got {}", n)));
        }
        if Hand::from(cards.clone()).size() != 5 {
            return Err(Error::InvalidHand(format!(
                "duplicate card in {}",
                cards.iter().map(|c| c.to_string()).collect::<String>()
            )));
        }
        let mut deal = [cards[0]; 5];
        deal.copy_from_slice(&cards);
        Ok(Self(deal))
    }
}

/// str conversion
/// accepts concatenated ("qdqcqh2s2d") and whitespaced ("Qd Qc Qh 2s 2d") notations
impl TryFrom<&str> for Deal {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s).map_err(Error::InvalidHand)?)
    }
}

/// one-way projection into the unordered set
impl From<&Deal> for Hand {
    fn from(deal: &Deal) -> Self {
        Hand::from(deal.0.to_vec())
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl Arbitrary for Deal {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut cards = (0..52).map(Card::from).collect::<Vec<_>>();
        cards.shuffle(rng);
        cards.truncate(5);
        Self::try_from(cards).expect("five off the top of a shuffle are distinct")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order() {
        let deal = Deal::try_from("qdqcqh2s2d").unwrap();
        assert_eq!(deal.to_string(), "QdQcQh2s2d");
        assert_eq!(deal.cards()[0], Card::try_from("Qd").unwrap());
        assert_eq!(deal.cards()[4], Card::try_from("2d").unwrap());
    }

    #[test]
    fn parse_accepts_whitespace() {
        let a = Deal::try_from("Ah Jc Ts 7s 4h").unwrap();
        let b = Deal::try_from("ahjcts7s4h").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_wrong_cardinality() {
        assert!(Deal::try_from("ahjcts7s").is_err());
        assert!(Deal::try_from("ahjcts7s4h2c").is_err());
        assert!(Deal::try_from("").is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Deal::try_from("ahahts7s4h").is_err());
    }

    #[test]
    fn fails_with_invalid_hand() {
        for bad in ["qd9c8d5c", "ahjcts7s4h2c", "ahahts7s4h", "zz9c8d5c2c"] {
            match Deal::try_from(bad) {
                Err(Error::InvalidHand(_)) => continue,
                other => panic!("{} gave {:?}", bad, other),
            }
        }
    }

    #[test]
    fn projects_into_hand() {
        let deal = Deal::random();
        assert_eq!(Hand::from(&deal).size(), 5);
    }
}
