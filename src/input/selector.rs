//! Input workbook and worksheet selection.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

use crate::error::{AuditError, AuditResult};

/// Finds the most recently modified `.xlsx` file in `dir` whose name contains
/// `keyword`, ignoring case.
///
/// Office lock files (`~$...`) are skipped. Files with equal modification
/// times are ordered by name so the choice is deterministic.
///
/// # Errors
///
/// - `DataDirNotFound` if `dir` does not exist
/// - `InputNotFound` if no file matches
///
/// # Example
///
/// ```no_run
/// use fund_audit::input::select_input_file;
/// use std::path::Path;
///
/// let path = select_input_file(Path::new("dados"), "aposentado")?;
/// println!("Arquivo selecionado: {}", path.display());
/// # Ok::<(), fund_audit::error::AuditError>(())
/// ```
pub fn select_input_file(dir: &Path, keyword: &str) -> AuditResult<PathBuf> {
    if !dir.is_dir() {
        return Err(AuditError::DataDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let keyword = keyword.to_lowercase();
    let entries = fs::read_dir(dir).map_err(|e| AuditError::io(dir, &e))?;

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AuditError::io(dir, &e))?;
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.starts_with("~$") || !name.ends_with(".xlsx") || !name.contains(&keyword) {
            continue;
        }
        let path = entry.path();
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| AuditError::io(&path, &e))?;
        debug!(path = %path.display(), "Candidate input workbook");
        candidates.push((modified, path));
    }

    candidates.sort_by(|(ta, pa), (tb, pb)| tb.cmp(ta).then_with(|| pa.cmp(pb)));

    match candidates.into_iter().next() {
        Some((_, path)) => {
            info!(path = %path.display(), "Input workbook selected");
            Ok(path)
        }
        None => Err(AuditError::InputNotFound {
            keyword,
            dir: dir.display().to_string(),
        }),
    }
}

/// Picks the first worksheet whose name contains `keyword` (ignoring case),
/// falling back to the first worksheet. Returns `None` only when `names` is
/// empty.
///
/// # Example
///
/// ```
/// use fund_audit::input::select_sheet;
///
/// let names = vec!["Resumo".to_string(), "APOSENTADOS 2025".to_string()];
/// assert_eq!(select_sheet(&names, "aposentado"), Some("APOSENTADOS 2025"));
/// assert_eq!(select_sheet(&names, "pensionista"), Some("Resumo"));
/// ```
pub fn select_sheet<'a>(names: &'a [String], keyword: &str) -> Option<&'a str> {
    let keyword = keyword.to_lowercase();
    names
        .iter()
        .find(|name| name.to_lowercase().contains(&keyword))
        .or_else(|| names.first())
        .map(String::as_str)
}
