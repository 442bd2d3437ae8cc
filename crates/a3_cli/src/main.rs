//! Team combination CLI
//!
//! Enumerates every possible team for the troupe roster and prints one line
//! per team with its co/ac/sr bonus breakdown. Validation failures abort
//! before any team is printed.

use std::collections::HashSet;
use std::io::Write;

use a3_core::{score_team, Selection, BONUS_RULES};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "a3_teams")]
#[command(about = "Enumerate troupe team combinations and their bonus scores", long_about = None)]
struct Cli {
    /// Member names forced into every generated team
    #[arg(short, long, value_name = "member", num_args = 1..)]
    members: Vec<String>,

    /// Allow a sixth guest slot
    #[arg(short, long)]
    guest: bool,

    /// Emit one JSON object per team instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let selection = Selection::new(&cli.members, cli.guest)?;
    log::info!(
        "enumerating {}-member teams, {} forced",
        selection.slots() + selection.fixed().len(),
        selection.fixed().len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for team in selection.teams() {
        let set: HashSet<&str> = team.iter().copied().collect();
        let bonus = score_team(&set, BONUS_RULES);
        if cli.json {
            let line = serde_json::json!({ "team": team, "bonus": bonus });
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}: {}", team.join(" "), bonus)?;
        }
    }

    Ok(())
}
