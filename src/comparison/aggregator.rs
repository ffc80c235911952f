//! Per-defect aggregation and classification.
//!
//! Each defect in a project directory is a triple of measurement files named
//! by convention: `<id>b_complexity.csv` (buggy snapshot),
//! `<id>f_complexity.csv` (fixed snapshot), and
//! `<id>_modified_files_complexity.csv` (only the files the fix touched).
//! Discovery keys off the buggy file and derives its two companions.
//!
//! Aggregation is a pure fold: defects become `ComplexityRecord`s first,
//! summaries are derived from the records afterwards. Nothing here mutates
//! shared state.

use crate::config::{self, DataLayout, CHANGE_THRESHOLD};
use crate::core::{
    round2, ComparisonResults, ComplexityChange, ComplexityRecord, DefectmapError,
    DefectmapResult, Measurement, OverallSummary, ProjectSummary, Row,
};
use crate::extraction::extract_complexity;
use crate::io::load_rows;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref BUGGY_FILE_RE: Regex =
        Regex::new(r"^(\d+)b_complexity\.csv$").expect("valid regex");
}

/// The measurement-file triple for one defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectFiles {
    pub id: String,
    pub buggy: PathBuf,
    pub fixed: PathBuf,
    pub modified: PathBuf,
}

/// Find every defect in a project directory by its buggy-version file.
///
/// Defects are sorted by numeric id; directory listing order is not
/// deterministic across platforms.
pub fn discover_defects(dir: &Path) -> DefectmapResult<Vec<DefectFiles>> {
    let entries = fs::read_dir(dir).map_err(|source| DefectmapError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut defects: Vec<DefectFiles> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let id = BUGGY_FILE_RE.captures(&name)?.get(1)?.as_str().to_string();
            Some(DefectFiles {
                buggy: dir.join(&name),
                fixed: dir.join(format!("{id}f_complexity.csv")),
                modified: dir.join(format!("{id}_modified_files_complexity.csv")),
                id,
            })
        })
        .collect();

    defects.sort_by_key(|d| d.id.parse::<u64>().unwrap_or(u64::MAX));
    Ok(defects)
}

/// Mean of the extracted complexity values over a row set.
///
/// Rows without a complexity message count as zero; the mean over an empty
/// set is zero by the `max(len, 1)` divisor guard.
pub fn mean_complexity(rows: &[Row]) -> f64 {
    let total: f64 = rows
        .iter()
        .map(|row| f64::from(extract_complexity(row).unwrap_or(0)))
        .sum();
    total / rows.len().max(1) as f64
}

/// Classify a complexity change against the fixed tolerance band.
pub fn classify_change(buggy: f64, fixed: f64) -> ComplexityChange {
    if buggy + CHANGE_THRESHOLD < fixed {
        ComplexityChange::Increased
    } else if buggy > fixed + CHANGE_THRESHOLD {
        ComplexityChange::Decreased
    } else {
        ComplexityChange::Unchanged
    }
}

/// Load one defect's row sets and produce its comparison record.
///
/// Classification and the percent change use the unrounded means; the record
/// itself carries two-decimal values. A zero buggy mean makes the percent
/// change non-finite, which is carried through as-is.
pub fn analyze_defect(files: &DefectFiles) -> DefectmapResult<ComplexityRecord> {
    let buggy_rows = load_rows(&files.buggy)?;
    let fixed_rows = load_rows(&files.fixed)?;
    let modified_rows = load_rows(&files.modified)?;

    let buggy = mean_complexity(&buggy_rows);
    let fixed = mean_complexity(&fixed_rows);
    let modified = if modified_rows.is_empty() {
        Measurement::NotApplicable
    } else {
        Measurement::Value(round2(mean_complexity(&modified_rows)))
    };

    log::debug!(
        "defect {}: buggy={buggy:.2}, fixed={fixed:.2}",
        files.id
    );

    Ok(ComplexityRecord {
        id: files.id.clone(),
        buggy_complexity: round2(buggy),
        fixed_complexity: round2(fixed),
        modified_files_complexity: modified,
        complexity_change: classify_change(buggy, fixed),
        percent_change: round2((fixed - buggy) / buggy * 100.0),
    })
}

/// Fold records into a project summary. Counters always sum to the record
/// count.
pub fn summarize(defects: Vec<ComplexityRecord>) -> ProjectSummary {
    let counted = defects.iter().fold((0, 0, 0), |(inc, dec, unc), record| {
        match record.complexity_change {
            ComplexityChange::Increased => (inc + 1, dec, unc),
            ComplexityChange::Decreased => (inc, dec + 1, unc),
            ComplexityChange::Unchanged => (inc, dec, unc + 1),
        }
    });

    ProjectSummary {
        complexity_increased: counted.0,
        complexity_decreased: counted.1,
        complexity_unchanged: counted.2,
        total_defects: defects.len(),
        defects,
    }
}

/// Analyze all defects of one project.
///
/// Returns `None` when the project has no data directory; the caller skips
/// it and moves on to the next project.
pub fn scan_project(layout: &DataLayout, project: &str) -> DefectmapResult<Option<ProjectSummary>> {
    let dir = layout.project_dir(project);
    if !dir.is_dir() {
        log::warn!("no data for {project}, skipping");
        return Ok(None);
    }

    log::info!("processing {project}");

    let records = discover_defects(&dir)?
        .iter()
        .map(analyze_defect)
        .collect::<DefectmapResult<Vec<_>>>()?;

    Ok(Some(summarize(records)))
}

/// Derive the cross-project summary from the per-project ones.
pub fn overall_summary(by_project: &BTreeMap<String, ProjectSummary>) -> OverallSummary {
    let (increased, decreased, unchanged) =
        by_project
            .values()
            .fold((0, 0, 0), |(inc, dec, unc), summary| {
                (
                    inc + summary.complexity_increased,
                    dec + summary.complexity_decreased,
                    unc + summary.complexity_unchanged,
                )
            });
    let total = increased + decreased + unchanged;

    let percent_of = |count: usize| {
        (total > 0).then(|| round2(count as f64 / total as f64 * 100.0))
    };

    OverallSummary {
        complexity_increased: increased,
        complexity_decreased: decreased,
        complexity_unchanged: unchanged,
        total_defects: total,
        percent_increased: percent_of(increased),
        percent_decreased: percent_of(decreased),
        percent_unchanged: percent_of(unchanged),
    }
}

/// Run the comparison over every configured project.
pub fn compare_projects(layout: &DataLayout) -> DefectmapResult<ComparisonResults> {
    let by_project: BTreeMap<String, ProjectSummary> = config::PROJECTS
        .iter()
        .filter_map(|project| match scan_project(layout, project) {
            Ok(Some(summary)) => Some(Ok((project.to_string(), summary))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        })
        .collect::<DefectmapResult<_>>()?;

    Ok(ComparisonResults {
        overall: overall_summary(&by_project),
        by_project,
    })
}
