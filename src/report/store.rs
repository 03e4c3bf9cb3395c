use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::AnalysisReport;

const STORE_DIR: &str = ".vibecheck";
const REPORT_FILE: &str = "report.json";

/// Local cache for the most recently fetched report.
///
/// Commands render from this cache; `analyze` and `fetch` refresh it.
pub struct ReportStore {
    pub dir: PathBuf,
}

impl ReportStore {
    /// Open or create the cache directory in the given project root
    pub fn open(project_root: &Path) -> Result<Self> {
        let dir = project_root.join(STORE_DIR);
        std::fs::create_dir_all(&dir).context("Failed to create .vibecheck directory")?;
        Ok(Self { dir })
    }

    /// Check if a cached report exists for the project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(STORE_DIR).join(REPORT_FILE).exists()
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE)
    }

    pub fn load(&self) -> Result<AnalysisReport> {
        let path = self.report_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Malformed report cache at {}", path.display()))
    }

    pub fn save(&self, report: &AnalysisReport) -> Result<()> {
        let path = self.report_path();
        let content = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
