use super::analyzer::Analyzer;
use super::evaluator::Evaluator;
use super::payout::PayoutTable;
use super::query::Query;
use super::report::Report;
use crate::cards::deal::Deal;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

pub struct CLI;

impl CLI {
    /// one-shot when invoked with arguments, interactive otherwise
    pub fn run() {
        match std::env::args().count() > 1 {
            true => {
                if let Err(e) = Self::handle(Query::parse()) {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            }
            false => Self::repl(),
        }
    }

    fn repl() {
        log::info!("interactive analyzer. quit to exit");
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush().unwrap();
            if std::io::stdin().read_line(input).unwrap() == 0 {
                break;
            }
            match input.trim() {
                "quit" => break,
                "exit" => break,
                _ => match Query::try_parse_from(
                    std::iter::once("> ").chain(input.split_whitespace()),
                )
                .map_err(Into::into)
                .and_then(Self::handle)
                {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
    }

    fn handle(query: Query) -> anyhow::Result<()> {
        match query {
            Query::Analyze { hand, table, json } => {
                let analyzer = Analyzer::try_from((hand.as_str(), Self::table(&table)?))?;
                let analysis = analyzer.analyze()?;
                match json {
                    true => Ok(println!(
                        "{}",
                        serde_json::to_string_pretty(&Report::from(&analysis))?
                    )),
                    false => Ok(println!(
                        "{}",
                        analysis
                            .choices()
                            .iter()
                            .map(|choice| {
                                let row = format!(
                                    "{} {:>9.6}",
                                    choice.hold.render(analysis.deal()),
                                    choice.value
                                );
                                match choice.hold == analysis.best().hold {
                                    true => row.green().to_string(),
                                    false => row,
                                }
                            })
                            .collect::<Vec<String>>()
                            .join("\n")
                    )),
                }
            }
            Query::Best { hand, table } => {
                let analyzer = Analyzer::try_from((hand.as_str(), Self::table(&table)?))?;
                let analysis = analyzer.analyze()?;
                let best = analysis.best();
                Ok(println!(
                    "hold {} for {:.6}",
                    best.hold.render(analysis.deal()),
                    best.value
                ))
            }
            Query::Payout { hand, table } => {
                let table = Self::table(&table)?;
                let deal = Deal::try_from(hand.as_str())?;
                let ranking = Evaluator::from(&deal).classify();
                let pay = table.pay(&ranking);
                let reward = match pay > 0. {
                    true => format!("+{}", pay).green(),
                    false => format!("{}", pay).normal(),
                };
                Ok(println!("{} {}", ranking, reward))
            }
        }
    }

    /// a preset name or a path to a JSON table file
    fn table(source: &str) -> anyhow::Result<PayoutTable> {
        match PayoutTable::preset(source) {
            Some(table) => Ok(table),
            None => Ok(PayoutTable::try_from(
                std::fs::read_to_string(source)
                    .map_err(|e| anyhow::anyhow!("no preset or table file {}: {}", source, e))?
                    .as_str(),
            )?),
        }
    }
}
