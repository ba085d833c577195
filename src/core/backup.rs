use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest`, optionally zipped.
    /// Returns the path actually written.
    pub fn backup(
        store: &SqliteAlarmStore,
        db_path: &str,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(db_path);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if is_same_file(src, &target)? {
            return Err(AppError::Backup(format!(
                "'{}' is the database itself",
                target.display()
            )));
        }
        ensure_writable(&target, force)?;

        if compress {
            compress_backup(src, &target)?;
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        store.audit(
            "backup",
            &target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(target)
    }
}

/// `target` resolves to the same file as `db`.
///
/// A target that does not exist yet is compared through its parent directory.
fn is_same_file(db: &Path, target: &Path) -> AppResult<bool> {
    let db = fs::canonicalize(db)?;

    let resolved = if target.exists() {
        fs::canonicalize(target)?
    } else {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => fs::canonicalize(p)?,
            _ => std::env::current_dir()?,
        };
        match target.file_name() {
            Some(name) => parent.join(name),
            None => return Ok(false),
        }
    };

    Ok(resolved == db)
}

/// Write `src` into a new zip archive at `zip_path`, streaming from the
/// database file directly.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "ralarm.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Backup created and compressed: {}", zip_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("ralarm_backup_{}", name));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn store_at(path: &Path) -> SqliteAlarmStore {
        SqliteAlarmStore::open(&path.to_string_lossy()).unwrap()
    }

    #[test]
    fn zip_next_to_the_database_keeps_it() {
        let dir = temp_dir("zip_beside_db");
        let db = dir.join("ralarm.sqlite");
        let store = store_at(&db);

        let out = BackupLogic::backup(
            &store,
            &db.to_string_lossy(),
            &dir.join("ralarm.zip"),
            true,
            true,
        )
        .unwrap();

        assert_eq!(out, dir.join("ralarm.zip"));
        assert!(db.exists());
        assert!(out.exists());
    }

    #[test]
    fn unrelated_sqlite_files_are_left_alone() {
        let dir = temp_dir("zip_sibling");
        let db = dir.join("ralarm.sqlite");
        let store = store_at(&db);
        let notes = dir.join("notes.sqlite");
        fs::write(&notes, "keep me").unwrap();

        BackupLogic::backup(
            &store,
            &db.to_string_lossy(),
            &dir.join("notes.zip"),
            true,
            true,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&notes).unwrap(), "keep me");
    }

    #[test]
    fn database_itself_is_never_a_target() {
        let dir = temp_dir("onto_db");
        let db = dir.join("ralarm.sqlite");
        let store = store_at(&db);
        let size = fs::metadata(&db).unwrap().len();

        let plain = BackupLogic::backup(&store, &db.to_string_lossy(), &db, false, true);
        assert!(matches!(plain, Err(AppError::Backup(_))));

        // Same file reached through a different spelling
        let dotted = dir.join(".").join("ralarm.sqlite");
        let again = BackupLogic::backup(&store, &db.to_string_lossy(), &dotted, false, true);
        assert!(matches!(again, Err(AppError::Backup(_))));

        assert_eq!(fs::metadata(&db).unwrap().len(), size);
    }
}
