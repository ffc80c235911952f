// Smoke tests for the installed binary surface.

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn compare_runs_cleanly_on_an_empty_tree() -> Result<()> {
    let tmp = TempDir::new()?;

    let output = Command::cargo_bin("defectmap")?
        .arg("compare")
        .arg("--root")
        .arg(tmp.path())
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Analyzed 0 defects"));
    assert!(stdout.contains("complexity-comparison-results.json"));

    assert!(tmp
        .path()
        .join("data/results/complexity-comparison-results.json")
        .exists());
    Ok(())
}

#[test]
fn correlate_exits_nonzero_without_input() -> Result<()> {
    let tmp = TempDir::new()?;

    let output = Command::cargo_bin("defectmap")?
        .arg("correlate")
        .arg("--root")
        .arg(tmp.path())
        .output()?;

    assert!(!output.status.success());
    Ok(())
}

#[test]
fn help_lists_all_subcommands() -> Result<()> {
    let output = Command::cargo_bin("defectmap")?.arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("compare"));
    assert!(stdout.contains("correlate"));
    assert!(stdout.contains("visualize"));
    Ok(())
}
