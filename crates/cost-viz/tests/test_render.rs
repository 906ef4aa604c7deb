//! Output file tests for the renderer

use cost_viz::{render, render_html, Error, PlotStyle, HTML_FILE_NAME, PNG_FILE_NAME};
use std::fs;

fn raw_points() -> Vec<(f64, f64)> {
    (1..=20).map(|i| (i as f64 * 10.0, (i as f64 * 10.0).log2())).collect()
}

fn fit_points() -> Vec<(f64, f64)> {
    (0..50)
        .map(|i| {
            let x = 10f64.powf(8.0 * i as f64 / 49.0);
            (x, x.log2())
        })
        .collect()
}

#[test]
fn test_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not_here");

    let result = render(&missing, &raw_points(), &fit_points(), &PlotStyle::default());
    match result {
        Err(Error::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!missing.join(PNG_FILE_NAME).exists());
}

#[test]
fn test_html_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HTML_FILE_NAME);
    fs::write(&path, "stale").unwrap();

    let style = PlotStyle::default();
    render_html(&path, &raw_points(), &fit_points(), &style).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    assert_ne!(first, "stale");
    assert!(first.contains(&style.title));

    render_html(&path, &raw_points(), &fit_points(), &style).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_render_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        let plots = render(dir.path(), &raw_points(), &fit_points(), &PlotStyle::default())
            .unwrap();
        assert!(fs::metadata(&plots.png).unwrap().len() > 0);
        assert!(fs::metadata(&plots.html).unwrap().len() > 0);
    }
}

#[test]
fn test_render_twice_writes_or_reports_render_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(HTML_FILE_NAME), "stale").unwrap();

    for _ in 0..2 {
        match render(dir.path(), &raw_points(), &fit_points(), &PlotStyle::default()) {
            Ok(plots) => {
                assert_eq!(plots.png, dir.path().join(PNG_FILE_NAME));
                assert_eq!(plots.html, dir.path().join(HTML_FILE_NAME));
                assert!(fs::metadata(&plots.png).unwrap().len() > 0);
                let html = fs::read_to_string(&plots.html).unwrap();
                assert!(html.contains(&PlotStyle::default().title));
            }
            // Bitmap text needs system fonts
            Err(Error::Render(_)) => break,
            Err(other) => panic!("expected plots or a render error, got {other:?}"),
        }
    }
}
