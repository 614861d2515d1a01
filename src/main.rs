use std::fs;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::{info, warn};

use tag_catalog_worker::{
    classification::{Classifier, Taxonomy},
    config::Config,
    ingest::RawTagRecord,
    observability, output, pipeline,
    pipeline::organize::CategoryTree,
};

fn main() -> anyhow::Result<()> {
    observability::init_tracing();
    let config = Config::parse();

    // An unreadable source is skipped, never fatal: the catalog is built
    // from whatever sources remain.
    let mut records: Vec<RawTagRecord> = Vec::new();
    for adapter in config.sources() {
        match adapter.collect() {
            Ok(batch) => {
                info!(source = adapter.name(), records = batch.len(), "source ingested");
                records.extend(batch);
            }
            Err(error) => {
                warn!(source = adapter.name(), error = %error, "skipping unreadable source");
            }
        }
    }

    let taxonomy = Taxonomy::builtin();
    let classifier = Classifier::new(&taxonomy).context("failed to build keyword classifier")?;
    let run = pipeline::run(records, &classifier, &taxonomy);

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;
    output::write_projections(&run.tree, &config.output_dir)?;

    print_summary(&run.tree);
    Ok(())
}

/// Per-category tag counts, printed after the projections are written.
fn print_summary(tree: &CategoryTree) {
    println!();
    println!("{}", style("Tag catalog summary").bold());
    for (main_category, buckets) in tree.iter() {
        let total: usize = buckets.values().map(Vec::len).sum();
        println!("{} ({total} tags)", style(main_category).cyan());
        for (sub_category, tags) in buckets {
            println!("  - {sub_category}: {} tags", tags.len());
        }
    }
    println!(
        "{} {} unique tags",
        style("total:").bold(),
        tree.total_tags()
    );
}
