use std::io::{self, Write, BufRead};

use anyhow::{Context, Result};
use balance::BalanceChecker;
use structopt::StructOpt;

#[macro_use]
mod stack;
mod balance;
mod example;


#[derive(Debug, StructOpt)]
#[structopt(about = "Stack examples and a parenthesis balance checker")]
struct Options {
    /// Text to check for balanced parentheses
    #[structopt(short, long)]
    text: Option<String>,

    /// Check lines read from stdin until EOF
    #[structopt(short, long)]
    interactive: bool,

    /// Print the checker's stack after every step
    #[structopt(long)]
    trace: bool
}

fn main() -> Result<()> {
    let options = Options::from_args();
    let mut checker = BalanceChecker::new(options.trace);

    match options {
        Options { text: Some(text), .. } => {
            report(&mut checker, &text);
            Ok(())
        },
        Options { interactive: true, .. } => run_prompt(&mut checker),
        _ => example::run_all()
    }
}

fn run_prompt(checker: &mut BalanceChecker) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("stdin failed")?;
        if read == 0 {
            return Ok(())
        }
        report(checker, line.trim_end_matches(&['\r', '\n'][..]));
    }
}

fn report(checker: &mut BalanceChecker, text: &str) {
    if checker.check(text) {
        println!("balanced");
    } else {
        println!("unbalanced");
    }
}
