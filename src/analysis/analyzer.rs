use super::counter::Counter;
use super::counter::Counts;
use super::error::Error;
use super::evaluator::Evaluator;
use super::hold::Hold;
use super::payout::PayoutTable;
use crate::cards::deal::Deal;
use crate::Payout;
use crate::Utility;

/// One evaluated hold pattern, its winning-draw counts and expected value.
#[derive(Debug, Clone)]
pub struct Choice {
    pub hold: Hold,
    pub counts: Counts,
    pub value: Utility,
}

/// The complete evaluation of one deal under one payout table. The 32
/// choices sit in canonical pattern order, draw-five first, stand-pat last.
#[derive(Debug, Clone)]
pub struct Analysis {
    deal: Deal,
    table: PayoutTable,
    choices: Vec<Choice>,
}

impl Analysis {
    pub fn deal(&self) -> &Deal {
        &self.deal
    }
    pub fn table(&self) -> &PayoutTable {
        &self.table
    }
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// the highest-value pattern. strictly-greater comparison keeps the
    /// earliest of tied maxima, so ties resolve by canonical order.
    pub fn best(&self) -> &Choice {
        self.choices
            .iter()
            .reduce(|best, next| match next.value > best.value {
                true => next,
                false => best,
            })
            .expect("at least one hold pattern")
    }
}

/// Evaluates a deal: enumerate the 32 patterns, count each one exactly,
/// price the counts, rank the results.
///
/// Per-pattern work is independent, so with the rayon feature the patterns
/// fan out across a worker pool and merge back in canonical order.
pub struct Analyzer {
    deal: Deal,
    table: PayoutTable,
}

impl Analyzer {
    pub fn new(deal: Deal, table: PayoutTable) -> Self {
        Self { deal, table }
    }

    pub fn analyze(&self) -> Result<Analysis, Error> {
        let holds = Hold::exhaust().collect::<Vec<_>>();
        #[cfg(feature = "rayon")]
        let choices = {
            use rayon::prelude::*;
            holds
                .into_par_iter()
                .map(|hold| self.choice(hold))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let choices = holds
            .into_iter()
            .map(|hold| self.choice(hold))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Analysis {
            deal: self.deal,
            table: self.table.clone(),
            choices,
        })
    }

    pub fn best(&self) -> Result<Choice, Error> {
        Ok(self.analyze()?.best().clone())
    }

    /// what the dealt hand pays as it stands, the zero-discard baseline
    pub fn standing(&self) -> Payout {
        self.table.pay(&Evaluator::from(&self.deal).classify())
    }

    fn choice(&self, hold: Hold) -> Result<Choice, Error> {
        let counts = Counter::try_from((&self.deal, &hold))?.counts();
        let value = self.table.value(&counts);
        log::debug!("{} {:.6}", hold.render(&self.deal), value);
        Ok(Choice {
            hold,
            counts,
            value,
        })
    }
}

impl TryFrom<(&str, PayoutTable)> for Analyzer {
    type Error = Error;
    fn try_from((hand, table): (&str, PayoutTable)) -> Result<Self, Self::Error> {
        let deal = Deal::try_from(hand)?;
        Ok(Self::new(deal, table))
    }
}
