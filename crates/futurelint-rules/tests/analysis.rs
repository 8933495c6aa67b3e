//! Integration tests: built-in rules end-to-end via the analyzer.
//!
//! Fixture files are written into a tempdir and analyzed through the full
//! scan -> flags -> rules pipeline.

use futurelint_core::{Analyzer, LintResult, Violation, ViolationSink};
use futurelint_rules::default_rules;
use std::fs;
use std::path::Path;

#[derive(Default)]
struct CollectSink(Vec<String>);

impl ViolationSink for CollectSink {
    fn report(&mut self, violation: &Violation) {
        self.0.push(violation.to_string());
    }
}

fn analyze(path: &Path, py26: bool) -> (LintResult, Vec<String>) {
    let mut builder = Analyzer::builder().path(path);
    for rule in default_rules(py26) {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().expect("analyzer should build");
    let mut sink = CollectSink::default();
    let result = analyzer.analyze(&mut sink).expect("analysis should succeed");
    (result, sink.0)
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

#[test]
fn absolute_import_alone_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(
        dir.path(),
        "a.py",
        "from __future__ import absolute_import\n",
    );

    let (result, emitted) = analyze(&file, false);
    assert!(result.violations.is_empty());
    assert!(emitted.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn with_usage_without_import_yields_exactly_one_violation() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(
        dir.path(),
        "b.py",
        "from __future__ import absolute_import\nwith open('x') as fh:\n    fh.read()\n",
    );

    let (result, _) = analyze(&file, false);
    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["FL002"]);
}

#[test]
fn debug_print_in_bare_file_yields_two_violations() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(dir.path(), "c.py", "print(\"ERROR: bad\")\n");

    let (result, emitted) = analyze(&file, false);
    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["FL001", "FL003"]);
    assert_eq!(emitted.len(), 2);
    assert!(emitted[1].ends_with("left over print statement"));
}

#[test]
fn py26_mode_never_reports_missing_with_import() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(
        dir.path(),
        "d.py",
        "from __future__ import absolute_import\nwith open('x') as fh:\n    fh.read()\n",
    );

    let (result, _) = analyze(&file, true);
    assert!(result.violations.is_empty());
}

#[test]
fn noqa_line_is_invisible_to_rules() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(
        dir.path(),
        "e.py",
        "from __future__ import absolute_import\nprint(\"ERROR: dbg\")  # noqa\n",
    );

    let (result, _) = analyze(&file, false);
    assert!(result.violations.is_empty());
}

#[test]
fn all_comment_file_is_never_penalized() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(
        dir.path(),
        "f.py",
        "# header\n\"\"\"\nmodule docstring\n\"\"\"\n# trailer\n",
    );

    let (result, _) = analyze(&file, false);
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn directory_walk_aggregates_per_file_results() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        dir.path(),
        "clean.py",
        "from __future__ import absolute_import\nx = 1\n",
    );
    write_fixture(dir.path(), "dirty.py", "x = 1\n");
    write_fixture(dir.path(), "ignored.txt", "x = 1\n");

    let (result, _) = analyze(dir.path(), false);
    assert_eq!(result.files_checked, 2);
    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["FL001"]);
    assert!(result.violations[0].path.ends_with("dirty.py"));
}

#[test]
fn identical_runs_produce_identical_results() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.py", "with lock:\n    pass\n");
    write_fixture(dir.path(), "b.py", "print(\"XXX\")\n");

    let (first, first_emitted) = analyze(dir.path(), false);
    let (second, second_emitted) = analyze(dir.path(), false);
    assert_eq!(first.violations, second.violations);
    assert_eq!(first_emitted, second_emitted);
}

#[test]
fn sink_observes_every_returned_violation() {
    // Swapping the sink is the quiet mechanism; the returned list must be
    // unaffected by what the sink does.
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(dir.path(), "g.py", "print(\"ERROR: dbg\")\n");

    let (result, emitted) = analyze(&file, false);
    assert_eq!(result.violations.len(), emitted.len());

    let mut builder = Analyzer::builder().path(&file);
    for rule in default_rules(false) {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().unwrap();
    let quiet_result = analyzer
        .analyze(&mut futurelint_core::NullSink)
        .expect("analysis should succeed");
    assert_eq!(quiet_result.violations.len(), result.violations.len());
}
