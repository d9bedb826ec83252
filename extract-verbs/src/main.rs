use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use extract_verbs::builder::CorpusBuilder;

/// Default rng seed for the thinning filter. Override with
/// EXTRACT_VERBS_SEED to regenerate the corpus with different sampling.
const DEFAULT_SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let input_path = PathBuf::from(args.get(1).map_or("./data/verbs.jsonl", String::as_str));
    let output_path = PathBuf::from(args.get(2).map_or("./out/corpus.json", String::as_str));
    let seed = read_seed()?;

    println!("Reading word records from {}", input_path.display());
    let file = File::open(&input_path)
        .context(format!("Failed to open input file: {input_path:?}"))?;
    let reader = BufReader::new(file);

    let mut builder = CorpusBuilder::new(seed);
    let mut total_records = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context(format!("Failed to read line {idx}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .context(format!("Failed to deserialize line {idx}: {line}"))?;
        builder.process(record)?;
        total_records += 1;
    }
    println!("Processed {total_records} word records");

    let (tables, stats) = builder.finish()?;

    println!();
    println!("Books:       {}", stats.books);
    println!("Roots:       {}", stats.roots);
    println!("Verb forms:  {}", stats.forms);
    println!("Parsings:    {}", stats.parsings);
    println!("Verses:      {}", stats.verses);
    println!("Occurrences: {}", stats.occurrences);
    println!();
    println!(
        "Skipped {} non-verb/excluded tokens, {} unsupported stems, {} thinned out",
        stats.skipped, stats.unsupported_stems, stats.dropped
    );
    println!(
        "Occurrences with a disagreeing secondary analysis: {}",
        stats.with_secondary
    );
    for (label, totals) in ["tagged", "positional"].iter().zip(stats.marker_totals) {
        println!(
            "Markers ({label}): paragogic nun {}, paragogic heh {}, cohortative {}, energic nun {}",
            totals.paragogic_nun, totals.paragogic_heh, totals.cohortative, totals.energic_nun
        );
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create output directory")?;
    }
    let json = serde_json::to_string(&tables).context("Failed to serialize corpus")?;
    std::fs::write(&output_path, json)
        .context(format!("Failed to write output file: {output_path:?}"))?;
    println!();
    println!("Corpus written to: {}", output_path.display());

    Ok(())
}

fn read_seed() -> anyhow::Result<u64> {
    match std::env::var("EXTRACT_VERBS_SEED") {
        Ok(value) => value
            .parse()
            .context(format!("Failed to parse EXTRACT_VERBS_SEED: {value:?}")),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_SEED),
        Err(error) => Err(error).context("Failed to read EXTRACT_VERBS_SEED"),
    }
}
