use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use triage_core::{AnalyzedTask, Strategy};

/// Most recent analysis, kept on disk so `suggest` can answer without a
/// fresh payload. The store belongs to this layer; the engine never
/// sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastAnalysis {
    pub strategy: Strategy,
    pub analyzed_on: NaiveDate,
    pub tasks: Vec<AnalyzedTask>,
}

pub fn triage_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TRIAGE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".triage"))
}

pub fn ensure_triage_home() -> Result<PathBuf> {
    let dir = triage_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn last_analysis_path() -> Result<PathBuf> {
    Ok(ensure_triage_home()?.join("last_analysis.json"))
}

pub fn write_last_analysis(analysis: &LastAnalysis) -> Result<()> {
    let p = last_analysis_path()?;
    let json = serde_json::to_string_pretty(analysis)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Returns `None` when no analysis has been saved yet.
pub fn read_last_analysis() -> Result<Option<LastAnalysis>> {
    let p = last_analysis_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(Some(serde_json::from_str(&s)?))
}
