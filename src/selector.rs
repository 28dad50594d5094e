// src/selector.rs

//! The file selection stage.

use crate::constants;
use crate::core_types::{FileReference, Selection};
use crate::dialog::FilePicker;
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Returns the directory the picker should open in.
///
/// The `src` subdirectory of `working_dir` when it exists and is a directory,
/// otherwise `working_dir` itself.
pub fn preferred_start_dir(working_dir: &Path) -> PathBuf {
    let src_dir = working_dir.join(constants::PREFERRED_SUBDIR);
    if src_dir.is_dir() {
        src_dir
    } else {
        working_dir.to_path_buf()
    }
}

/// Asks `picker` for a file, starting in `start_dir`.
///
/// Dismissing the picker yields [`Selection::Cancelled`], which is not an error.
///
/// # Errors
/// Only failures of the picker itself are returned.
pub fn select_file(picker: &mut dyn FilePicker, start_dir: &Path) -> Result<Selection> {
    let selection = match picker.pick_file(constants::PICKER_TITLE, start_dir)? {
        Some(path) => {
            log::debug!("User selected '{}'", path.display());
            Selection::Chosen(FileReference::new(path))
        }
        None => {
            log::info!("File selection cancelled by user.");
            Selection::Cancelled
        }
    };
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct FixedPicker {
        answer: Option<PathBuf>,
        seen: Vec<(String, PathBuf)>,
    }

    impl FilePicker for FixedPicker {
        fn pick_file(&mut self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
            self.seen.push((title.to_string(), start_dir.to_path_buf()));
            Ok(self.answer.clone())
        }
    }

    #[test]
    fn test_prefers_src_subdirectory() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("src"))?;
        assert_eq!(preferred_start_dir(temp.path()), temp.path().join("src"));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_falls_back_to_working_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        assert_eq!(preferred_start_dir(temp.path()), temp.path());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_src_file_is_not_used_as_start_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("src"), "not a directory")?;
        assert_eq!(preferred_start_dir(temp.path()), temp.path());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_select_file_chosen() -> anyhow::Result<()> {
        let mut picker = FixedPicker {
            answer: Some(PathBuf::from("/data/report.txt")),
            seen: Vec::new(),
        };
        let selection = select_file(&mut picker, Path::new("/data"))?;

        assert_eq!(
            selection,
            Selection::Chosen(FileReference::new("/data/report.txt"))
        );
        assert_eq!(
            picker.seen,
            vec![(
                "Select a text file to inspect".to_string(),
                PathBuf::from("/data")
            )]
        );
        Ok(())
    }

    #[test]
    fn test_select_file_cancelled() -> anyhow::Result<()> {
        let mut picker = FixedPicker {
            answer: None,
            seen: Vec::new(),
        };
        assert_eq!(
            select_file(&mut picker, Path::new("/data"))?,
            Selection::Cancelled
        );
        Ok(())
    }
}
