use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use quillnote_core::{
    chapter_stats, load_sync_config, normalize, smart_insert_with_config, SyncConfig,
    SyncPayload,
};

use crate::cli::{NormalizeArgs, OutputArgs, StatsArgs, SyncArgs};

pub fn normalize_file(args: NormalizeArgs) -> Result<()> {
    let raw = read_text(&args.input)?;
    let normalized = normalize(&raw);
    info!(
        "event=normalize module=cli status=ok changed={} bytes_in={} bytes_out={}",
        normalized != raw,
        raw.len(),
        normalized.len()
    );
    write_result(&args.input, &args.output, &normalized)
}

pub fn sync_file(args: SyncArgs) -> Result<()> {
    let raw = read_text(&args.document)?;
    let payload = read_payload(&args.payload)?;
    let config = match &args.config {
        Some(path) => load_sync_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SyncConfig::default(),
    };

    let document = if args.normalize { normalize(&raw) } else { raw };
    let outcome = smart_insert_with_config(&document, &payload, &config);
    let report = &outcome.report;
    info!(
        "event=sync module=cli status=ok changed={} characters_added={} locations_added={} summary={:?}",
        report.changed(),
        report.added_characters.len(),
        report.added_locations.len(),
        report.summary
    );

    if args.report {
        eprintln!("characters ({}): +{:?}", report.characters_heading, report.added_characters);
        eprintln!("setting ({}): +{:?}", report.setting_heading, report.added_locations);
        eprintln!(
            "outline ({}): added={} summary={:?}",
            report.outline_heading, report.outline_added, report.summary
        );
    }

    write_result(&args.document, &args.output, &outcome.document)
}

pub fn print_stats(args: StatsArgs) -> Result<()> {
    let payload = read_payload(&args.payload)?;
    let stats = chapter_stats(&payload);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_payload(path: &Path) -> Result<SyncPayload> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse payload {}", path.display()))
}

fn write_result(input: &Path, output: &OutputArgs, text: &str) -> Result<()> {
    let target = if output.in_place {
        Some(input)
    } else {
        output.output.as_deref()
    };

    match target {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
