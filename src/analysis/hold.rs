use crate::cards::card::Card;
use crate::cards::deal::Deal;
use crate::Arbitrary;

/// One of the 32 keep-or-discard decisions over a five-card deal.
///
/// Bit i set means the card at position i is kept. Enumeration via
/// [`Hold::exhaust`] is in ascending numeric order, which fixes a canonical
/// ordering of patterns. Downstream reporting keys on this ordering, and
/// expected-value ties resolve to the earliest pattern.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hold(u8);

impl Hold {
    /// every pattern, 0b00000 (draw five) through 0b11111 (stand pat)
    pub fn exhaust() -> impl Iterator<Item = Self> {
        (0..32).map(Self)
    }

    /// how many cards this pattern keeps
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// how many replacement cards this pattern draws
    pub fn discards(&self) -> usize {
        5 - self.size()
    }
    pub fn contains(&self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    /// the kept cards, in dealt order
    pub fn apply(&self, deal: &Deal) -> Vec<Card> {
        deal.cards()
            .iter()
            .enumerate()
            .filter(|(i, _)| self.contains(*i))
            .map(|(_, card)| *card)
            .collect()
    }

    /// the stable result key. kept positions show their card, discarded show XX
    /// QdXX8dXXXX
    pub fn render(&self, deal: &Deal) -> String {
        deal.cards()
            .iter()
            .enumerate()
            .map(|(i, card)| match self.contains(i) {
                true => card.to_string(),
                false => "XX".to_string(),
            })
            .collect()
    }
}

/// u8 isomorphism over the 5 LSBs
impl From<u8> for Hold {
    fn from(n: u8) -> Self {
        assert!(n < 32);
        Self(n)
    }
}
impl From<Hold> for u8 {
    fn from(hold: Hold) -> Self {
        hold.0
    }
}

impl From<[bool; 5]> for Hold {
    fn from(kept: [bool; 5]) -> Self {
        Self(
            kept.iter()
                .enumerate()
                .filter(|(_, keep)| **keep)
                .map(|(i, _)| 1 << i)
                .fold(0u8, |a, b| a | b),
        )
    }
}

impl Arbitrary for Hold {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self(rng.random_range(0..32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_two_patterns() {
        assert_eq!(Hold::exhaust().count(), 32);
        assert_eq!(Hold::exhaust().next(), Some(Hold::from(0u8)));
        assert_eq!(Hold::exhaust().last(), Some(Hold::from(31u8)));
    }

    #[test]
    fn sizes_complement() {
        let hold = Hold::random();
        assert_eq!(hold.size() + hold.discards(), 5);
    }

    #[test]
    fn applies_in_dealt_order() {
        let deal = Deal::try_from("ahjcts7s4h").unwrap();
        let hold = Hold::from([true, true, false, false, false]);
        let kept = hold.apply(&deal);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], Card::try_from("Ah").unwrap());
        assert_eq!(kept[1], Card::try_from("Jc").unwrap());
    }

    #[test]
    fn renders_stable_keys() {
        let deal = Deal::try_from("qd9c8d5c2c").unwrap();
        assert_eq!(Hold::from([true, false, false, false, false]).render(&deal), "QdXXXXXXXX");
        assert_eq!(Hold::from([true, false, true, false, false]).render(&deal), "QdXX8dXXXX");
        assert_eq!(Hold::from([false; 5]).render(&deal), "XXXXXXXXXX");
        assert_eq!(Hold::from([true; 5]).render(&deal), "Qd9c8d5c2c");
    }
}
