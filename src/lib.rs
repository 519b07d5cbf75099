pub mod analysis;
pub mod cards;

/// Exact draw counts out of C(47, discards).
pub type Count = u64;
/// Payout multipliers in units of one bet.
pub type Payout = f64;
/// Expected values in units of one bet.
pub type Utility = f64;

/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging. INFO to terminal, no location/target noise.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
