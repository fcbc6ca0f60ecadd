//! The `classify` command: fetch the roster once, classify each input batch
//! against it, write classified outputs, and print the tracking summaries.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;

use kolmatch_engine::{classify_batch, ReferenceIndex};
use kolmatch_roster::{RefreshPolicy, RosterCache, RosterClient};

use crate::batch::read_batch;
use crate::output::{render_summary, write_classified};

pub async fn run(inputs: &[PathBuf], output_dir: Option<&Path>) -> anyhow::Result<()> {
    let cfg = kolmatch_core::load_app_config()?;
    let client = RosterClient::new(&cfg)?;
    let mut cache = RosterCache::new(RefreshPolicy::from_ttl_secs(cfg.roster_cache_ttl_secs));

    for input in inputs {
        // A failed fetch aborts before any row of this batch is touched. The
        // cache makes every batch after the first reuse the same snapshot.
        let records = cache
            .get_or_fetch(&client)
            .await
            .context("fetching reference roster")?;
        let index = ReferenceIndex::build(records);

        let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
        let batch = read_batch(BufReader::new(file))
            .with_context(|| format!("reading batch {}", input.display()))?;

        let report = classify_batch(&batch.mentions, &index);

        let out_path = output_path(input, output_dir);
        let out_file = File::create(&out_path)
            .with_context(|| format!("creating {}", out_path.display()))?;
        write_classified(BufWriter::new(out_file), &batch, &report.decisions)
            .with_context(|| format!("writing {}", out_path.display()))?;

        tracing::info!(
            input = %input.display(),
            output = %out_path.display(),
            rows = batch.rows.len(),
            "wrote classified batch"
        );

        println!(
            "{}: {} KOL, {} Organic ({} rows)",
            input.display(),
            report.kol_count,
            report.organic_count,
            batch.rows.len()
        );
        if !report.instagram_summary.is_empty() {
            println!();
            print!(
                "{}",
                render_summary("Instagram KOL tracking", &report.instagram_summary)
            );
        }
        if !report.tiktok_summary.is_empty() {
            println!();
            print!(
                "{}",
                render_summary("TikTok KOL tracking", &report.tiktok_summary)
            );
        }
    }

    Ok(())
}

/// Output path for a classified batch: `<stem>_classified.csv`, either next
/// to the input or under `output_dir` when given.
fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "batch".to_owned(), |s| s.to_string_lossy().into_owned());
    let file_name = format!("{stem}_classified.csv");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
