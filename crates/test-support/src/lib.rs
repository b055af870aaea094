#![deny(unsafe_code)]

//! Shared fixtures for mirrorgen tests.
//!
//! The main entry point is [`sample_library`], which describes a small media
//! collection of movies, tv seasons, and music albums as a [`FixtureTree`].
//! Tests materialize the tree into a scratch directory with
//! [`FixtureTree::create`] and run builds over it.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const VIDEO_EXTENSIONS: &[&str] = &[".avi", ".mp4", ".mkv", ".mpeg", ".mpg", ".wmv"];
const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".flac", ".wav"];

/// Description of one folder in a fixture tree: its files and subfolders.
#[derive(Clone, Debug)]
pub struct FixtureTree {
    path: PathBuf,
    files: Vec<String>,
    children: Vec<FixtureTree>,
}

impl FixtureTree {
    /// Creates an empty folder description rooted at `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a file to this folder.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }

    /// Adds a subfolder.
    #[must_use]
    pub fn child(mut self, child: FixtureTree) -> Self {
        self.children.push(child);
        self
    }

    /// Root path of the described tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of folders in the tree, this one included.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FixtureTree::folder_count)
            .sum::<usize>()
    }

    /// Number of files in the whole tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .iter()
                .map(FixtureTree::file_count)
                .sum::<usize>()
    }

    /// Materializes the tree on disk, folders breadth-first, each file
    /// holding its own name as content.
    pub fn create(&self) -> io::Result<()> {
        let mut pending = VecDeque::new();
        pending.push_back(self);
        while let Some(node) = pending.pop_front() {
            fs::create_dir_all(&node.path)?;
            for file in &node.files {
                fs::write(node.path.join(file), file.as_bytes())?;
            }
            for child in &node.children {
                pending.push_back(child);
            }
        }
        Ok(())
    }

    /// Deletes the materialized tree.
    pub fn remove(&self) -> io::Result<()> {
        fs::remove_dir_all(&self.path)
    }
}

/// Builds the sample media library used across integration tests: six movie
/// folders, six series of six seasons, three artists with three albums each.
#[must_use]
pub fn sample_library<P: Into<PathBuf>>(root: P) -> FixtureTree {
    let root = root.into();
    FixtureTree::new(&root)
        .child(movies(&root))
        .child(tv(&root))
        .child(music(&root))
}

/// Materializes [`sample_library`] under a fresh temporary directory.
pub fn temp_library() -> io::Result<(tempfile::TempDir, FixtureTree)> {
    let temp = tempfile::tempdir()?;
    let tree = sample_library(temp.path().join("library"));
    tree.create()?;
    Ok((temp, tree))
}

fn movies(root: &Path) -> FixtureTree {
    let base = root.join("movies");
    let mut tree = FixtureTree::new(&base);
    for (index, extension) in VIDEO_EXTENSIONS.iter().enumerate() {
        let name = format!("movie {:02}", index + 1);
        let folder = FixtureTree::new(base.join(&name)).file(format!("{name}{extension}"));
        tree = tree.child(folder);
    }
    tree
}

fn tv(root: &Path) -> FixtureTree {
    let base = root.join("tv");
    let mut tree = FixtureTree::new(&base);
    for series_index in 1..=VIDEO_EXTENSIONS.len() {
        let series_name = format!("Series {series_index:02}");
        let mut series = FixtureTree::new(base.join(&series_name));
        for (season_index, extension) in VIDEO_EXTENSIONS.iter().enumerate() {
            let season = season_index + 1;
            let mut folder =
                FixtureTree::new(series.path.join(format!("Season {season:02}")));
            for episode in 1..=VIDEO_EXTENSIONS.len() {
                folder = folder.file(format!(
                    "{series_name}.s{season:02}e{episode:02}{extension}"
                ));
            }
            series = series.child(folder);
        }
        tree = tree.child(series);
    }
    tree
}

fn music(root: &Path) -> FixtureTree {
    let base = root.join("music");
    let mut tree = FixtureTree::new(&base);
    for artist_index in 1..=AUDIO_EXTENSIONS.len() {
        let mut artist = FixtureTree::new(base.join(format!("Artist {artist_index:02}")));
        for (album_index, extension) in AUDIO_EXTENSIONS.iter().enumerate() {
            let mut album =
                FixtureTree::new(artist.path.join(format!("Album {:02}", album_index + 1)));
            for track in 1..=AUDIO_EXTENSIONS.len() {
                album = album.file(format!("{track:02} - Title {track}{extension}"));
            }
            artist = artist.child(album);
        }
        tree = tree.child(artist);
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_library_has_expected_shape() {
        let tree = sample_library("/fixtures/library");
        // root + movies subtree (1 + 6) + tv subtree (1 + 6 + 36) + music
        // subtree (1 + 3 + 9).
        assert_eq!(tree.folder_count(), 64);
        assert_eq!(tree.file_count(), 6 + 6 * 6 * 6 + 3 * 3 * 3);
    }

    #[test]
    fn create_materializes_folders_and_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let tree = sample_library(temp.path().join("library"));
        tree.create().expect("create fixture");

        assert!(temp.path().join("library/movies/movie 01").is_dir());
        assert!(
            temp.path()
                .join("library/movies/movie 01/movie 01.avi")
                .is_file()
        );
        assert!(
            temp.path()
                .join("library/tv/Series 03/Season 02/Series 03.s02e04.mp4")
                .is_file()
        );
        assert!(
            temp.path()
                .join("library/music/Artist 02/Album 03/01 - Title 1.wav")
                .is_file()
        );
    }
}
