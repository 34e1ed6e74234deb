/*!
 * Directory traversal and permission rewriting
 */

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::{Config, SymlinkMode};
use crate::summary::RunSummary;

/// Walks a directory tree and rewrites permission bits per the configuration
pub struct Walker {
    config: Config,
}

impl Walker {
    /// Create a new walker
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the walk and return the counters accumulated along the way
    ///
    /// Every I/O failure is local to the entry that caused it: the walk
    /// carries on with siblings and ancestors, and nothing is counted as
    /// changed unless the chmod actually succeeded.
    pub fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        if self.config.change_dirs && self.config.include_root {
            // The root is only ever treated as a directory
            self.apply_entry(&self.config.target_dir, false, true, &mut summary);
        }
        self.walk_directory(&self.config.target_dir, &mut summary);
        summary
    }

    /// Process one directory level, recursing when configured to
    fn walk_directory(&self, dir: &Path, summary: &mut RunSummary) {
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // An unreadable directory skips that level only
                    if self.config.output.shows_errors() {
                        eprintln!("Error: cannot open directory {}: {}", dir.display(), e);
                    }
                    continue;
                }
            };

            self.apply_entry(
                entry.path(),
                self.config.change_files,
                self.config.change_dirs,
                summary,
            );

            // Descend on the enumerated kind: a symlink to a directory is
            // never recursed into, whatever the symlink policy says.
            if self.config.recursive && entry.file_type().is_dir() {
                self.walk_directory(entry.path(), summary);
            }
        }
    }

    /// The per-entry procedure: resolve the symlink policy, compute the
    /// new mode and chmod when the entry kind was requested
    fn apply_entry(
        &self,
        path: &Path,
        change_files: bool,
        change_dirs: bool,
        summary: &mut RunSummary,
    ) {
        let output = self.config.output;

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                if output.shows_errors() {
                    eprintln!("Error: cannot access {}: {}", path.display(), e);
                }
                return;
            }
        };

        let mut file_type = metadata.file_type();
        let mut mode_bits = metadata.permissions().mode();

        if file_type.is_symlink() {
            match self.config.symlinks {
                SymlinkMode::Skip => {
                    summary.symlinks_skipped += 1;
                    if output.shows_progress() {
                        println!("(L -> SKIP) {}", path.display());
                    }
                    return;
                }
                SymlinkMode::Follow => match fs::metadata(path) {
                    Ok(target) => {
                        summary.symlinks_followed += 1;
                        if output.is_verbose() {
                            println!("(L -> FOLLOW) {}", path.display());
                        }
                        // Continue as if this were the target itself
                        file_type = target.file_type();
                        mode_bits = target.permissions().mode();
                    }
                    Err(e) => {
                        if output.shows_errors() {
                            eprintln!(
                                "Skipping: cannot follow symlink {}: {}",
                                path.display(),
                                e
                            );
                        }
                        return;
                    }
                },
                SymlinkMode::Error => {
                    summary.symlink_errors += 1;
                    if output.shows_errors() {
                        eprintln!("Error: symlink found: {}", path.display());
                    }
                    return;
                }
            }
        }

        let old_mode = mode_bits & 0o777;
        let new_mode = self.config.mode_spec.apply(old_mode);

        // Nothing to do; a notice is only worth printing when the entry
        // kind was targeted, or under -v.
        if old_mode == new_mode {
            if output.shows_progress() {
                if file_type.is_dir() && (change_dirs || output.is_verbose()) {
                    println!("(D -> S) {}", path.display());
                } else if file_type.is_file() && (change_files || output.is_verbose()) {
                    println!("(F -> S) {}", path.display());
                }
            }
            return;
        }

        if file_type.is_dir() && change_dirs {
            self.set_mode(path, "D", old_mode, new_mode, &mut summary.dirs_changed);
        } else if file_type.is_file() && change_files {
            self.set_mode(path, "F", old_mode, new_mode, &mut summary.files_changed);
        }
    }

    /// Chmod one entry, counting and narrating the change
    fn set_mode(&self, path: &Path, tag: &str, old_mode: u32, new_mode: u32, changed: &mut usize) {
        let output = self.config.output;
        match fs::set_permissions(path, fs::Permissions::from_mode(new_mode)) {
            Ok(()) => {
                *changed += 1;
                if output.shows_progress() {
                    println!(
                        "({} {:o} -> [{}] {:o}) {}",
                        tag,
                        old_mode,
                        self.config.mode_spec,
                        new_mode,
                        path.display()
                    );
                }
            }
            Err(e) => {
                if output.shows_errors() {
                    eprintln!(
                        "Error: cannot change permissions of {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }
    }
}
