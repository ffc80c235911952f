// End-to-end tests for the compare command: fixture CSV trees in a tempdir
// through to the JSON and HTML artifacts.

use anyhow::Result;
use defectmap::config::DataLayout;
use defectmap::{ComparisonResults, ComplexityChange, Measurement};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Lang has two defects; Math has one; the other four projects have no data.
fn build_fixture() -> Result<TempDir> {
    let tmp = TempDir::new()?;

    let lang = tmp.path().join("data/complexity-comparison/Lang");
    fs::create_dir_all(&lang)?;

    // Defect 1: buggy mean 4.0, fixed mean 5.0 -> increased, +25%
    write_csv(
        &lang,
        "1b_complexity.csv",
        indoc! {"
            file,message
            A.java,method a() has a cyclomatic complexity of 3.
            B.java,method b() has a cyclomatic complexity of 5.
        "},
    );
    write_csv(
        &lang,
        "1f_complexity.csv",
        indoc! {"
            file,message
            A.java,method a() has a cyclomatic complexity of 4.
            B.java,method b() has a cyclomatic complexity of 6.
        "},
    );
    write_csv(
        &lang,
        "1_modified_files_complexity.csv",
        indoc! {"
            file,message
            A.java,method a() has a cyclomatic complexity of 6.
        "},
    );

    // Defect 2: fixed and modified files absent -> fixed mean 0, decreased
    write_csv(
        &lang,
        "2b_complexity.csv",
        indoc! {"
            file,message
            C.java,method c() has a cyclomatic complexity of 5.
        "},
    );

    let math = tmp.path().join("data/complexity-comparison/Math");
    fs::create_dir_all(&math)?;

    // Single defect with identical means -> unchanged
    write_csv(
        &math,
        "7b_complexity.csv",
        indoc! {"
            file,message
            M.java,method m() has a cyclomatic complexity of 5.
        "},
    );
    write_csv(
        &math,
        "7f_complexity.csv",
        indoc! {"
            file,message
            M.java,method m() has a cyclomatic complexity of 5.
        "},
    );

    Ok(tmp)
}

fn run_and_load(tmp: &TempDir) -> Result<ComparisonResults> {
    defectmap::commands::compare::run(tmp.path())?;
    let layout = DataLayout::new(tmp.path());
    let json = fs::read_to_string(layout.comparison_results_json())?;
    Ok(serde_json::from_str(&json)?)
}

#[test]
fn compare_aggregates_defects_per_project() -> Result<()> {
    let tmp = build_fixture()?;
    let results = run_and_load(&tmp)?;

    assert_eq!(results.overall.total_defects, 3);
    assert_eq!(results.overall.complexity_increased, 1);
    assert_eq!(results.overall.complexity_decreased, 1);
    assert_eq!(results.overall.complexity_unchanged, 1);
    assert_eq!(results.overall.percent_increased, Some(33.33));

    let lang = &results.by_project["Lang"];
    assert_eq!(lang.total_defects, 2);
    assert_eq!(
        lang.complexity_increased + lang.complexity_decreased + lang.complexity_unchanged,
        lang.total_defects
    );
    Ok(())
}

#[test]
fn compare_records_carry_rounded_values() -> Result<()> {
    let tmp = build_fixture()?;
    let results = run_and_load(&tmp)?;

    let defect1 = &results.by_project["Lang"].defects[0];
    assert_eq!(defect1.id, "1");
    assert_eq!(defect1.buggy_complexity, 4.0);
    assert_eq!(defect1.fixed_complexity, 5.0);
    assert_eq!(defect1.modified_files_complexity, Measurement::Value(6.0));
    assert_eq!(defect1.complexity_change, ComplexityChange::Increased);
    assert_eq!(defect1.percent_change, 25.0);
    Ok(())
}

#[test]
fn missing_fixed_file_counts_as_zero_complexity() -> Result<()> {
    let tmp = build_fixture()?;
    let results = run_and_load(&tmp)?;

    let defect2 = &results.by_project["Lang"].defects[1];
    assert_eq!(defect2.id, "2");
    assert_eq!(defect2.buggy_complexity, 5.0);
    assert_eq!(defect2.fixed_complexity, 0.0);
    assert_eq!(defect2.complexity_change, ComplexityChange::Decreased);
    assert_eq!(defect2.percent_change, -100.0);
    Ok(())
}

#[test]
fn absent_modified_files_keep_the_sentinel() -> Result<()> {
    let tmp = build_fixture()?;
    defectmap::commands::compare::run(tmp.path())?;

    let layout = DataLayout::new(tmp.path());
    let json = fs::read_to_string(layout.comparison_results_json())?;
    // The artifact must carry the literal sentinel, not a numeric zero
    assert!(json.contains(r#""modifiedFilesComplexity": "N/A""#));

    let results: ComparisonResults = serde_json::from_str(&json)?;
    let defect2 = &results.by_project["Lang"].defects[1];
    assert_eq!(defect2.modified_files_complexity, Measurement::NotApplicable);
    Ok(())
}

#[test]
fn projects_without_data_are_skipped() -> Result<()> {
    let tmp = build_fixture()?;
    let results = run_and_load(&tmp)?;

    assert!(!results.by_project.contains_key("Closure"));
    assert!(!results.by_project.contains_key("Mockito"));
    assert_eq!(results.by_project.len(), 2);

    // Math's lone unchanged defect is unaffected by its missing siblings
    let math = &results.by_project["Math"];
    assert_eq!(math.total_defects, 1);
    assert_eq!(math.complexity_unchanged, 1);
    Ok(())
}

#[test]
fn compare_writes_the_html_report() -> Result<()> {
    let tmp = build_fixture()?;
    defectmap::commands::compare::run(tmp.path())?;

    let layout = DataLayout::new(tmp.path());
    let html = fs::read_to_string(layout.comparison_report_html())?;
    assert!(html.contains("<h3>Lang</h3>"));
    assert!(html.contains("<h3>Math</h3>"));
    assert!(html.contains("type: 'pie'"));
    assert!(html.contains("data: [1, 1, 1]"));
    Ok(())
}

#[test]
fn empty_data_tree_produces_empty_results() -> Result<()> {
    let tmp = TempDir::new()?;
    let results = run_and_load(&tmp)?;

    assert_eq!(results.overall.total_defects, 0);
    assert!(results.by_project.is_empty());
    assert_eq!(results.overall.percent_increased, None);
    Ok(())
}
