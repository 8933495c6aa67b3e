//! Orchestration of a lint run over files and directories.

use crate::config::{Config, ConfigError};
use crate::flags::FileFlags;
use crate::patterns::{PatternError, PatternSet};
use crate::report::ViolationSink;
use crate::rule::{FileSummary, Rule, RuleBox};
use crate::scanner::Scanner;
use crate::types::{FileAnalysis, LintResult, ScanFailure};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File extension recognized during directory recursion.
pub const SOURCE_EXTENSION: &str = "py";

/// Errors that can occur while setting up or running an analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// No input paths were supplied.
    #[error("no input files or directories")]
    NoInput,

    /// IO error reading a file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Built-in pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    paths: Vec<PathBuf>,
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one input path (file or directory).
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds multiple input paths.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::NoInput`] when no paths were added (the
    /// usage-error case), or [`AnalyzerError::Pattern`] if the built-in
    /// pattern set fails to compile.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        if self.paths.is_empty() {
            return Err(AnalyzerError::NoInput);
        }

        Ok(Analyzer {
            paths: self.paths,
            rules: self.rules,
            patterns: PatternSet::new()?,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// The main analyzer, driving the scanner and rules over each input.
///
/// Use [`Analyzer::builder()`] to construct an instance. Analysis of one
/// file never depends on or mutates state from any other file.
pub struct Analyzer {
    paths: Vec<PathBuf>,
    rules: Vec<RuleBox>,
    patterns: PatternSet,
    config: Config,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("paths", &self.paths)
            .field("rules", &self.rules.len())
            .field("patterns", &self.patterns)
            .field("config", &self.config)
            .finish()
    }
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes every input path and returns the aggregate result.
    ///
    /// Explicit file arguments are analyzed as-is; directories are walked
    /// recursively in name-sorted order, keeping `.py` files. A missing or
    /// unreadable path is recorded as a [`ScanFailure`] and the run
    /// continues with the remaining inputs.
    ///
    /// # Errors
    ///
    /// Only infrastructure failures propagate; per-path IO problems are
    /// returned inside the result.
    pub fn analyze(&self, sink: &mut dyn ViolationSink) -> Result<LintResult, AnalyzerError> {
        info!("starting analysis of {} path(s)", self.paths.len());

        let mut result = LintResult::new();
        for path in &self.paths {
            if path.is_dir() {
                for file in self.walk(path, &mut result) {
                    self.process(&file, sink, &mut result);
                }
            } else if path.is_file() {
                self.process(path, sink, &mut result);
            } else {
                warn!("input path does not exist: {}", path.display());
                result
                    .failures
                    .push(ScanFailure::new(path.clone(), "path does not exist"));
            }
        }

        info!(
            "analysis complete: {} violation(s), {} failure(s) in {} file(s)",
            result.violations.len(),
            result.failures.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file: scan, accumulate flags, evaluate rules.
    ///
    /// Rules run only when the scanner produced at least one significant
    /// line; an effectively empty file yields no violations. Each violation
    /// is reported to `sink` at the moment it is produced.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Io`] when the file cannot be read.
    pub fn analyze_file(
        &self,
        path: &Path,
        sink: &mut dyn ViolationSink,
    ) -> Result<FileAnalysis, AnalyzerError> {
        debug!("analyzing {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut flags = FileFlags::new();
        let mut significant_lines = 0;
        for line in Scanner::new(&self.patterns).scan(content.lines()) {
            significant_lines += 1;
            flags.observe(&self.patterns, line);
        }

        let mut violations = Vec::new();
        if significant_lines > 0 {
            let summary = FileSummary {
                path,
                flags: &flags,
                significant_lines,
            };
            for rule in &self.rules {
                if let Some(violation) = rule.check(&summary) {
                    sink.report(&violation);
                    violations.push(violation);
                }
            }
        }

        Ok(FileAnalysis {
            path: path.to_path_buf(),
            flags,
            significant_lines,
            violations,
        })
    }

    fn process(&self, path: &Path, sink: &mut dyn ViolationSink, result: &mut LintResult) {
        match self.analyze_file(path, sink) {
            Ok(analysis) => result.record(analysis),
            Err(AnalyzerError::Io { path, source }) => {
                warn!("skipping {}: {}", path.display(), source);
                result.failures.push(ScanFailure::new(path, source.to_string()));
            }
            // No other error variant is reachable from analyze_file, but the
            // taxonomy may grow; treat anything unexpected as a failure too.
            Err(e) => result.failures.push(ScanFailure::new(path, e.to_string())),
        }
    }

    /// Expands a directory into its `.py` files, name-sorted for
    /// reproducible output and exit codes.
    fn walk(&self, dir: &Path, result: &mut LintResult) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let walker = walkdir::WalkDir::new(dir).sort_by_file_name();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file()
                        && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
                        && !self.should_exclude(path)
                    {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                    warn!("cannot traverse {}: {}", path.display(), e);
                    result.failures.push(ScanFailure::new(path, e.to_string()));
                }
            }
        }
        files
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.config
            .exclude
            .iter()
            .any(|pattern| path_str.contains(pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NullSink;
    use std::fs;

    #[test]
    fn build_without_paths_is_a_usage_error() {
        let err = Analyzer::builder().build().unwrap_err();
        assert!(matches!(err, AnalyzerError::NoInput));
    }

    #[test]
    fn walks_only_py_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not python\n").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/c.py"), "x = 1\n").unwrap();

        let analyzer = Analyzer::builder().path(dir.path()).build().unwrap();
        let mut result = LintResult::new();
        let files = analyzer.walk(dir.path(), &mut result);

        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "pkg/c.py"]);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn exclude_patterns_filter_walked_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/gen.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("main.py"), "x = 1\n").unwrap();

        let config = Config {
            exclude: vec!["build/".to_string()],
            ..Config::default()
        };
        let analyzer = Analyzer::builder()
            .path(dir.path())
            .config(config)
            .build()
            .unwrap();

        let mut result = LintResult::new();
        let files = analyzer.walk(dir.path(), &mut result);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("main.py"));
    }

    #[test]
    fn missing_path_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.py"), "x = 1\n").unwrap();

        let analyzer = Analyzer::builder()
            .path(dir.path().join("ok.py"))
            .path(dir.path().join("gone.py"))
            .build()
            .unwrap();

        let result = analyzer.analyze(&mut NullSink).unwrap();
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].path.ends_with("gone.py"));
        assert!(!result.has_violations());
    }

    #[test]
    fn explicit_file_argument_ignores_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script");
        fs::write(&path, "x = 1\n").unwrap();

        let analyzer = Analyzer::builder().path(&path).build().unwrap();
        let result = analyzer.analyze(&mut NullSink).unwrap();
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn empty_file_runs_no_rules() {
        struct Panics;
        impl Rule for Panics {
            fn name(&self) -> &'static str {
                "panics"
            }
            fn code(&self) -> &'static str {
                "TEST999"
            }
            fn check(&self, _summary: &FileSummary<'_>) -> Option<crate::Violation> {
                panic!("rule must not run for files without significant lines");
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.py");
        fs::write(&path, "# only a comment\n\"\"\"\ndocstring\n\"\"\"\n").unwrap();

        let analyzer = Analyzer::builder().path(&path).rule(Panics).build().unwrap();
        let result = analyzer.analyze(&mut NullSink).unwrap();
        assert_eq!(result.files_checked, 1);
        assert!(result.violations.is_empty());
    }
}
