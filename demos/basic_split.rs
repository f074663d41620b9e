//! Basic split generation walkthrough.
//!
//! Run with: cargo run --example basic_split

use cpcv::prelude::*;

fn main() -> Result<()> {
    let config = CpcvConfig::new(1000, 10, 2, EmbargoConfig::symmetric(5)).with_verbose(true);
    let splitter = CpcvSplitter::new(config)?;

    let maps = splitter.split();
    println!("{}", splitter.summary());

    // Walk the first few simulations and show the partition sizes a
    // caller would slice their dataset into.
    for (k, simulation) in splitter.simulations().iter().take(5).enumerate() {
        let test = maps.test_column(k).iter().filter(|&&b| b).count();
        let embargoed = maps.embargo_column(k).iter().filter(|&&b| b).count();
        let train = maps.train_ticks(k).len();
        println!(
            "simulation {k}: test folds {:?} -> {test} test / {embargoed} embargoed / {train} train ticks",
            simulation.test_folds
        );
    }

    // Persist the masks for a Python training loop.
    let exporter = SplitExporter::new("target/cpcv_demo");
    exporter.export(&splitter, &maps)?;
    println!("masks written to target/cpcv_demo/");

    Ok(())
}
