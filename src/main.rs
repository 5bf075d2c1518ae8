use anyhow::Result;
use crossterm::style::Stylize;
use gof_patterns::catalog::{Group, Pattern};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);

    match args.next() {
        None => run_all().await,
        Some(name) => match Pattern::parse(&name) {
            Ok(pattern) => run_one(pattern).await,
            Err(err) => {
                // Unknown names report and list the catalogue; by design
                // this is not a failure exit.
                println!("{} {}", "error:".red().bold(), err);
                print_catalogue();
            }
        },
    }

    Ok(())
}

async fn run_all() {
    let mut current_group = None;
    for pattern in Pattern::ALL {
        if current_group != Some(pattern.group()) {
            current_group = Some(pattern.group());
            println!();
            println!(
                "{}",
                format!("═══ {} patterns ═══", pattern.group().name())
                    .cyan()
                    .bold()
            );
        }
        run_one(pattern).await;
    }
}

async fn run_one(pattern: Pattern) {
    println!();
    println!("{}", format!("── {} ──", pattern.key()).green().bold());
    pattern.run().await;
}

fn print_catalogue() {
    println!("Available patterns:");
    for group in Group::ALL {
        println!("  {}", group.name().cyan());
        for pattern in Pattern::ALL.iter().filter(|p| p.group() == group) {
            println!("    {}", pattern.key());
        }
    }
}
