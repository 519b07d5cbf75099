use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(
        about = "Expected value of every hold pattern for a dealt hand",
        alias = "ev"
    )]
    Analyze {
        #[arg(required = true)]
        hand: String,
        #[arg(long, default_value = "jacks-or-better")]
        table: String,
        #[arg(long)]
        json: bool,
    },
    #[command(
        about = "The single best hold pattern and its expected value",
        alias = "b"
    )]
    Best {
        #[arg(required = true)]
        hand: String,
        #[arg(long, default_value = "jacks-or-better")]
        table: String,
    },
    #[command(
        about = "What the dealt hand pays as it stands, no draw",
        alias = "pay"
    )]
    Payout {
        #[arg(required = true)]
        hand: String,
        #[arg(long, default_value = "jacks-or-better")]
        table: String,
    },
}
