//! Output target checks run before any feed is fetched.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Validate the export target.
///
/// The path must not be a directory and its parent must exist. An existing
/// file is replaced only with `force` or after an explicit "y"/"yes" on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    check_target(path)?;

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Replace it with the new export? [y/N]: ");
    io::stdout().flush().ok();

    if confirm(io::stdin().lock())? {
        info("Existing file will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled, {} left untouched",
            path.display()
        )))
    }
}

fn check_target(path: &Path) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "{} is a directory, expected a file path",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(AppError::Export(format!(
            "output directory {} does not exist",
            parent.display()
        )));
    }

    Ok(())
}

/// Reads one answer line. Anything but "y"/"yes" (case-insensitive), EOF included, is a no.
fn confirm(mut input: impl BufRead) -> AppResult<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn confirm_accepts_only_yes() {
        assert!(confirm(Cursor::new("y\n")).unwrap());
        assert!(confirm(Cursor::new("  YES \n")).unwrap());
        assert!(!confirm(Cursor::new("n\n")).unwrap());
        assert!(!confirm(Cursor::new("yep\n")).unwrap());
        assert!(!confirm(Cursor::new("")).unwrap());
    }

    #[test]
    fn directory_target_is_rejected_even_with_force() {
        let dir = std::env::temp_dir();
        let err = ensure_writable(&dir, true).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn missing_parent_is_rejected() {
        let path = std::env::temp_dir()
            .join("quakemap_no_such_dir")
            .join("out.html");
        let err = ensure_writable(&path, true).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
