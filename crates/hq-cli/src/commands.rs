use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use hq_cross::{AnalyzerOptions, analyze_cross_source};
use hq_ingest::{DiscoveredFile, classify, discover_sources};
use hq_model::FileProfile;
use hq_profile::{ProfileOptions, profile_batch, profile_file};
use hq_report::{
    cross_report_path, fields_tsv_path, profile_report_paths, write_cross_report_json,
    write_fields_tsv, write_markdown, write_profile_json,
};

use crate::cli::{AllArgs, CrossArgs, FileArgs};
use crate::types::ScanResult;

pub fn run_all(args: &AllArgs) -> Result<ScanResult> {
    let span = info_span!("scan", data_dir = %args.data_dir.display());
    let _guard = span.enter();

    let output_dir = resolve_output_dir(args.output_dir.as_ref(), &args.data_dir);
    let profiles = profile_data_dir(&args.data_dir, args.sample)?;

    for profile in &profiles {
        write_file_reports(profile, &output_dir)?;
    }

    let fields_tsv = fields_tsv_path(&output_dir);
    write_fields_tsv(&profiles, &fields_tsv).context("write aggregated fields TSV")?;

    let report = analyze_cross_source(&profiles, AnalyzerOptions::default());
    let cross_path = cross_report_path(&output_dir);
    write_cross_report_json(&report, &cross_path).context("write cross-source report")?;

    info!(files = profiles.len(), "scan complete");
    Ok(ScanResult {
        output_dir,
        profiles,
        cross_report: Some(cross_path),
        fields_tsv: Some(fields_tsv),
    })
}

pub fn run_file(args: &FileArgs) -> Result<ScanResult> {
    let kind = classify(&args.path)
        .ok_or_else(|| anyhow!("unsupported file type: {}", args.path.display()))?;
    if !args.path.is_file() {
        return Err(anyhow!("file not found: {}", args.path.display()));
    }

    let source = args
        .path
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("local")
        .to_string();
    let file = DiscoveredFile {
        source,
        path: args.path.clone(),
        kind,
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));
    let profile = profile_file(
        &file,
        ProfileOptions {
            sample_rows: args.sample,
        },
    );
    write_file_reports(&profile, &output_dir)?;

    Ok(ScanResult {
        output_dir,
        profiles: vec![profile],
        cross_report: None,
        fields_tsv: None,
    })
}

pub fn run_cross(args: &CrossArgs) -> Result<ScanResult> {
    let output_dir = resolve_output_dir(args.output_dir.as_ref(), &args.data_dir);
    let profiles = profile_data_dir(&args.data_dir, args.sample)?;

    let mut options = AnalyzerOptions::default();
    if let Some(threshold) = args.similarity_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(anyhow!("similarity threshold must be between 0 and 1"));
        }
        options.similarity_threshold = threshold;
    }
    let report = analyze_cross_source(&profiles, options);
    let cross_path = cross_report_path(&output_dir);
    write_cross_report_json(&report, &cross_path).context("write cross-source report")?;

    Ok(ScanResult {
        output_dir,
        profiles,
        cross_report: Some(cross_path),
        fields_tsv: None,
    })
}

fn profile_data_dir(data_dir: &Path, sample: Option<usize>) -> Result<Vec<FileProfile>> {
    let files = discover_sources(data_dir).context("discover data files")?;
    if files.is_empty() {
        return Err(anyhow!(
            "no analyzable files under {}",
            data_dir.display()
        ));
    }
    info!(files = files.len(), "profiling batch");
    Ok(profile_batch(
        &files,
        ProfileOptions {
            sample_rows: sample,
        },
    ))
}

fn write_file_reports(profile: &FileProfile, output_dir: &Path) -> Result<()> {
    let paths = profile_report_paths(output_dir, profile);
    write_profile_json(profile, &paths.json)
        .with_context(|| format!("write profile for {}", profile.filename))?;
    write_markdown(profile, &paths.markdown)
        .with_context(|| format!("write report for {}", profile.filename))?;
    write_fields_tsv(std::slice::from_ref(profile), &paths.fields_tsv)
        .with_context(|| format!("write fields TSV for {}", profile.filename))?;
    Ok(())
}

fn resolve_output_dir(output_dir: Option<&PathBuf>, data_dir: &Path) -> PathBuf {
    output_dir.cloned().unwrap_or_else(|| {
        data_dir
            .parent()
            .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
    })
}
