//! Video Poker Analyzer
//!
//! Computes exact expected values for all 32 hold patterns of a dealt hand
//! and reports the optimal discard strategy. One-shot with arguments, or an
//! interactive prompt without.

use drawpoker::*;

fn main() {
    log();
    analysis::CLI::run();
}
