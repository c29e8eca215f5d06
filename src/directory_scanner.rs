// SPDX-License-Identifier: MPL-2.0
//! Directory listing and the background thumbnail worker.
//!
//! [`build_thumbnails`] runs off the UI thread. It decodes every regular file
//! in the ticket's directory, keeps the ones that decode, and stops early when
//! its ticket is superseded by a newer rebuild.

use crate::config::{Config, SortOrder, DEFAULT_THUMBNAIL_SIZE};
use crate::error::Result;
use crate::media::{self, ImageData};
use crate::viewer::thumbnails::{RebuildTicket, Thumbnail, ThumbnailBatch};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Parameters of a thumbnail rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailOptions {
    /// Edge of the bounding box, in pixels.
    pub size: u32,
    pub sort_order: SortOrder,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_THUMBNAIL_SIZE,
            sort_order: SortOrder::default(),
        }
    }
}

impl From<&Config> for ThumbnailOptions {
    fn from(config: &Config) -> Self {
        Self {
            size: config.thumbnail_size(),
            sort_order: config.sort_order(),
        }
    }
}

/// How a rebuild ended.
#[derive(Debug, Clone)]
pub enum RebuildOutcome {
    Complete(ThumbnailBatch),
    /// A newer rebuild started before this one finished.
    Cancelled,
}

/// Lists the regular files in `directory`.
///
/// With [`SortOrder::Directory`] the order is whatever the filesystem
/// enumerates.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read.
pub fn list_entries(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)?.map(|entry| entry.map(|e| e.path()));
    let mut files = regular_files(entries);

    sort_files(&mut files, sort_order);
    Ok(files)
}

/// Keeps the entries that are regular files. An entry that cannot be read is
/// skipped without affecting the rest of the listing.
fn regular_files(entries: impl IntoIterator<Item = io::Result<PathBuf>>) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                log::debug!("skipping unreadable directory entry: {err}");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}

/// Builds thumbnails for every decodable file in the ticket's directory.
///
/// Files that fail to decode are skipped. The token is checked before each
/// entry, so a superseded rebuild returns [`RebuildOutcome::Cancelled`]
/// without finishing the directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn build_thumbnails(ticket: &RebuildTicket, options: ThumbnailOptions) -> Result<RebuildOutcome> {
    let paths = list_entries(&ticket.directory, options.sort_order)?;
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        if ticket.token.is_cancelled() {
            log::debug!(
                "thumbnail rebuild {} for {} cancelled",
                ticket.generation,
                ticket.directory.display()
            );
            return Ok(RebuildOutcome::Cancelled);
        }

        match media::decode(&path) {
            Ok(image) => {
                let thumbnail = media::make_thumbnail(&image, options.size);
                entries.push(Thumbnail {
                    path,
                    image: ImageData::from_dynamic(&thumbnail),
                });
            }
            Err(err) => log::debug!("skipping thumbnail: {err}"),
        }
    }

    Ok(RebuildOutcome::Complete(ThumbnailBatch {
        generation: ticket.generation,
        directory: ticket.directory.clone(),
        entries,
    }))
}

fn sort_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Directory => {}
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}
