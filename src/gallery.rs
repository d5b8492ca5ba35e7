//! Output-folder bookkeeping. A gallery is a flat folder of images named
//! `<index>.jpeg` with a zero-padded decimal index starting at 1. The highest
//! index found at startup determines where a resumed run continues; anything
//! that doesn't parse as an index is ignored.

use std::{
    ffi::OsStr,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use log::info;

#[derive(Debug)]
pub struct Gallery {
    dir: PathBuf,
    next_index: u32,
}

impl Gallery {
    /// Opens the gallery folder, creating it if absent, and scans it for
    /// existing images to compute the index the next image gets.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("creating output folder {}", dir.display()))?;

        let mut indices = vec![];
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(index) = parse_index(&entry.file_name()) {
                indices.push(index);
            }
        }

        let next_index = match indices.iter().max() {
            Some(&max) => {
                let next = max.checked_add(1).ok_or_else(|| {
                    eyre!("Image index {max} in {} leaves no room to continue", dir.display())
                })?;
                info!(
                    "Found {} existing images in {}, latest index {max}, resuming at {next}",
                    indices.len(),
                    dir.display(),
                );
                next
            }
            None => 1,
        };

        Ok(Self { dir, next_index })
    }

    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(file_name(index))
    }

    /// Writes the image under the given index. Fails if a file for that index
    /// already exists; an index is never overwritten.
    pub fn save(&self, index: u32, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(index);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .wrap_err_with(|| format!("creating {}", path.display()))?;
        file.write_all(bytes)?;
        Ok(path)
    }
}

fn file_name(index: u32) -> String {
    format!("{index:03}.jpeg")
}

fn parse_index(name: &OsStr) -> Option<u32> {
    let stem = name.to_str()?.strip_suffix(".jpeg")?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}
