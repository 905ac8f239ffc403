use serde::Serialize;
use std::path::PathBuf;

use super::pattern::HeaderPattern;
use crate::config::RewriteConfig;
use crate::error::{Error, ErrorCode, Result};
use crate::io::{read_file, write_file};

/// Planned (or applied) rewrite of one target file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRewrite {
    /// Fixed target path, relative to the root.
    pub file: String,
    /// Resolved path on disk.
    #[serde(skip)]
    pub path: PathBuf,
    /// Number of legacy headers replaced.
    pub replacements: usize,
    /// Labels of the replaced headers, in source order.
    pub labels: Vec<String>,
    /// Content after all replacements.
    #[serde(skip)]
    pub new_content: String,
}

/// Outcome of a header rewrite run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteReport {
    pub files: Vec<FileRewrite>,
    pub total_replacements: usize,
    /// Whether the new content was written to disk.
    pub applied: bool,
}

/// Read and transform every target file without writing anything.
///
/// Both files are read before either is written, so a read failure leaves the
/// tree untouched.
pub fn plan_rewrite(config: &RewriteConfig) -> Result<RewriteReport> {
    let pattern = HeaderPattern::new()?;
    let mut files = Vec::new();

    for target in config.targets() {
        let content = read_file(&target.path).map_err(|e| missing_target_hint(e, config))?;
        let rewrite = pattern.rewrite(&content);

        crate::log_status!(
            "headers",
            "{}: {} legacy header(s)",
            target.relative,
            rewrite.replacements()
        );

        files.push(FileRewrite {
            file: target.relative,
            path: target.path,
            replacements: rewrite.replacements(),
            labels: rewrite.labels,
            new_content: rewrite.content,
        });
    }

    let total_replacements = files.iter().map(|f| f.replacements).sum();

    Ok(RewriteReport {
        files,
        total_replacements,
        applied: false,
    })
}

fn missing_target_hint(err: Error, config: &RewriteConfig) -> Error {
    if err.code != ErrorCode::FileNotFound {
        return err;
    }
    err.with_hint(format!(
        "Targets resolve against '{}'; run from the project root or pass --root <DIR>",
        config.root.display()
    ))
}

/// Write every planned file back in place, including files with no matches.
///
/// A write failure stops the run; files written before it stay written.
pub fn apply_rewrite(report: &mut RewriteReport) -> Result<()> {
    for file in &report.files {
        write_file(&file.path, &file.new_content)?;
        crate::log_status!("headers", "Wrote {}", file.file);
    }

    report.applied = true;
    Ok(())
}

/// Plan the rewrite and, unless `config.dry_run` is set, apply it.
pub fn rewrite_headers(config: &RewriteConfig) -> Result<RewriteReport> {
    let mut report = plan_rewrite(config)?;

    if !config.dry_run {
        apply_rewrite(&mut report)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{PURCHASE_ORDERS_FILE, QUOTES_FILE};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const LEGACY: &str = r#"<button onClick={handleSort} className="flex items-center space-x-1 hover:text-gray-700"><span>Quote #</span><ArrowUpDown className="w-3 h-3" /></button>"#;

    fn write_target(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn plan_does_not_touch_disk() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);
        write_target(dir.path(), PURCHASE_ORDERS_FILE, "no headers\n");

        let report = plan_rewrite(&RewriteConfig::new(dir.path())).unwrap();

        assert!(!report.applied);
        assert_eq!(report.total_replacements, 1);
        assert_eq!(report.files[0].file, QUOTES_FILE);
        assert_eq!(report.files[0].labels, vec!["Quote #".to_string()]);
        assert_eq!(report.files[1].replacements, 0);
        assert_eq!(
            fs::read_to_string(dir.path().join(QUOTES_FILE)).unwrap(),
            LEGACY
        );
    }

    #[test]
    fn rewrite_headers_writes_both_files() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);
        write_target(dir.path(), PURCHASE_ORDERS_FILE, LEGACY);

        let report = rewrite_headers(&RewriteConfig::new(dir.path())).unwrap();

        assert!(report.applied);
        assert_eq!(report.total_replacements, 2);
        for relative in [QUOTES_FILE, PURCHASE_ORDERS_FILE] {
            let content = fs::read_to_string(dir.path().join(relative)).unwrap();
            assert!(content.contains("handleSort('quoteNbr')"));
            assert!(!content.contains("<button"));
        }
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);
        write_target(dir.path(), PURCHASE_ORDERS_FILE, LEGACY);

        let config = RewriteConfig::new(dir.path()).dry_run(true);
        let report = rewrite_headers(&config).unwrap();

        assert!(!report.applied);
        assert_eq!(report.total_replacements, 2);
        assert_eq!(
            fs::read_to_string(dir.path().join(PURCHASE_ORDERS_FILE)).unwrap(),
            LEGACY
        );
    }

    #[test]
    fn missing_second_file_aborts_before_any_write() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);

        let err = rewrite_headers(&RewriteConfig::new(dir.path())).unwrap_err();

        assert_eq!(err.code.as_str(), "file.not_found");
        assert_eq!(err.hints.len(), 1);
        assert!(err.hints[0].message.contains("--root"));
        assert_eq!(
            fs::read_to_string(dir.path().join(QUOTES_FILE)).unwrap(),
            LEGACY
        );
    }

    #[test]
    fn unreadable_target_gets_no_root_hint() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);
        fs::create_dir_all(dir.path().join(PURCHASE_ORDERS_FILE)).unwrap();

        let err = plan_rewrite(&RewriteConfig::new(dir.path())).unwrap_err();

        assert_eq!(err.code.as_str(), "file.not_readable");
        assert!(err.hints.is_empty());
    }

    #[test]
    fn report_serializes_without_content() {
        let dir = TempDir::new().unwrap();
        write_target(dir.path(), QUOTES_FILE, LEGACY);
        write_target(dir.path(), PURCHASE_ORDERS_FILE, "");

        let report = plan_rewrite(&RewriteConfig::new(dir.path())).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["totalReplacements"], 1);
        assert_eq!(json["files"][0]["labels"][0], "Quote #");
        assert!(json["files"][0].get("newContent").is_none());
        assert!(json["files"][0].get("path").is_none());
    }
}
