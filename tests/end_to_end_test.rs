// tests/end_to_end_test.rs

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;

use life_patterns::error::{RunError, SaveError};
use life_patterns::orchestrator::{run, RunConfig};
use life_patterns::pattern_kind::PatternKind;

// One day after the birthdate keeps every plot small.
fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_run_writes_all_five_images() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        output_dir: dir.path().to_path_buf(),
    };
    let mut out = Vec::new();

    let summary = run("2000-01-01\n", fixed_now(), &config, &mut out).unwrap();

    assert_eq!(summary.elapsed.get(), 86_400);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.saved.len(), 5);

    for kind in PatternKind::ALL {
        let path = dir.path().join(kind.filename());
        let size = fs::metadata(&path).unwrap().len();
        assert!(size > 0, "{} is empty", kind.filename());

        let image = image::open(&path).unwrap();
        assert!(image.width() > 0 && image.height() > 0);
    }

    let text = String::from_utf8(out).unwrap();
    let alive = text.find("Alive seconds: 86,400").expect("alive seconds line");
    let first_save = text.find("Saved:").expect("save confirmation");
    assert!(alive < first_save);
    assert_eq!(text.matches("Saved:").count(), 5);
    assert!(text.contains("All personalized pattern images saved as PNGs!"));
}

#[test]
fn test_tight_crop_removes_figure_margins() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        output_dir: dir.path().to_path_buf(),
    };
    run("2000-01-01", fixed_now(), &config, &mut Vec::new()).unwrap();

    let image = image::open(dir.path().join("spirograph.png")).unwrap();
    assert!(image.width() <= 1800 && image.height() <= 1800);
    assert!(image.width() < 1800 || image.height() < 1800);
}

#[test]
fn test_invalid_birthdate_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        output_dir: dir.path().to_path_buf(),
    };
    let mut out = Vec::new();

    let result = run("01/01/2000", fixed_now(), &config, &mut out);

    assert!(matches!(result, Err(RunError::Age(_))));
    assert!(out.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_future_birthdate_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        output_dir: dir.path().to_path_buf(),
    };

    let result = run("2030-01-01", fixed_now(), &config, &mut Vec::new());

    assert!(matches!(result, Err(RunError::Age(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_save_errors_are_reported_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        output_dir: dir.path().join("missing"),
    };
    let mut out = Vec::new();

    let summary = run("2000-01-01", fixed_now(), &config, &mut out).unwrap();

    assert!(summary.saved.is_empty());
    assert_eq!(summary.failed.len(), 5);
    assert!(summary
        .failed
        .iter()
        .all(|err| matches!(err, SaveError::Encode { .. })));

    let text = String::from_utf8(out).unwrap();
    for kind in PatternKind::ALL {
        assert!(
            text.contains(&format!("Error saving {}:", kind.filename())),
            "missing error line for {}",
            kind.filename()
        );
    }
    assert!(text.contains("Finished with 0 of 5 images saved."));
}
