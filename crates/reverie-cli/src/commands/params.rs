//! Parameter listing command.

use clap::Args;
use reverie_engine::PARAMS;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print one `key=default` line per parameter instead of a table
    #[arg(long)]
    defaults: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    if args.defaults {
        for p in &PARAMS {
            println!("{}={}", p.key, p.default);
        }
        return Ok(());
    }

    println!("Reverb parameters:\n");
    println!(
        "  {:<3} {:<8} {:<8} {:>14} {:>8}",
        "ID", "Name", "Flag", "Range", "Default"
    );
    for p in &PARAMS {
        let flag = format!("--{}", p.key);
        let range = format!("{}..={}", p.min, p.max);
        println!(
            "  {:<3} {:<8} {:<8} {:>14} {:>8}{}",
            p.id,
            p.name,
            flag,
            range,
            p.default,
            p.unit.suffix()
        );
    }
    println!("\nOut-of-range values are clamped.");

    Ok(())
}
