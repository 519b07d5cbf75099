use super::hand::Hand;

/// DrawIterator visits every distinct k-card draw that avoids a set of blocked cards.
/// it holds a u64 cursor (and mask) and walks same-popcount bitstrings in increasing order
/// it is memory efficient because it never materializes the set of draws
/// it is deterministic because it always iterates in the same order
/// it is fast because each step is a handful of bitwise operations
pub struct DrawIterator {
    next: u64,
    mask: u64,
}

impl DrawIterator {
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - 52) > self.next.leading_zeros()
        }
    }

    /// Gosper's hack. next same-popcount bitstring above the cursor.
    fn permute(&self) -> u64 {
        let x = /* 000_100 */ self.next;
        let a = /* 000_111 smear the lowest set bit down      */ x | (x - 1);
        let b = /* 001_000 carry into the next free position  */ a + 1;
        let c = /* 001_000 isolate the carried bit            */ b & !a;
        let d = /* 000_000 refill the popcount at the bottom  */ (c - 1) >> (1 + x.trailing_zeros());
        b | d
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for DrawIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let draw = Hand::from(self.next);
            self.advance();
            Some(draw)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for DrawIterator {
    fn from((k, blocked): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << k) - 1,
            mask: u64::from(blocked),
        };
        while this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = DrawIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = DrawIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1010_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1011_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1100_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1101_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1110_00_0)));
    }

    #[test]
    fn blocked_cards_never_drawn() {
        let blocked = Hand::from(0b_1010101);
        for draw in DrawIterator::from((2, blocked)) {
            assert_eq!(u64::from(draw) & u64::from(blocked), 0);
        }
    }
}
