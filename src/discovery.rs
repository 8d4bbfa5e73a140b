//! SVG discovery and output path derivation.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SVG_SUFFIX: &str = ".svg";
const PNG_SUFFIX: &str = ".png";

/// Recursively collects every file under `root` whose name ends with `.svg`.
///
/// The suffix match is exact and case-sensitive (`logo.SVG` is skipped).
/// Symlinked directories are not descended into; a symlink to a file is
/// treated as a file. Entries that cannot be read, including a missing
/// `root`, are skipped silently. Results come back in traversal order.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            let file_type = entry.file_type();
            if file_type.is_dir() {
                return false;
            }
            // Symlinks to directories are listed like directories, never as files
            !(file_type.is_symlink() && entry.path().is_dir())
        })
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(SVG_SUFFIX))
        .map(|entry| entry.into_path())
        .collect()
}

/// Derives the PNG output path for `svg_path`.
///
/// The first `.svg` anywhere in the path string is replaced with `.png`, so
/// `a.svg.svg` becomes `a.png.svg`. On unix the same rule is applied to the raw
/// bytes of non-UTF-8 paths; elsewhere those get their extension swapped.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use svg2png_batch::png_path_for;
///
/// assert_eq!(png_path_for(Path::new("icons/star.svg")), PathBuf::from("icons/star.png"));
/// ```
pub fn png_path_for(svg_path: &Path) -> PathBuf {
    match svg_path.to_str() {
        Some(text) => PathBuf::from(text.replacen(SVG_SUFFIX, PNG_SUFFIX, 1)),
        None => replace_first_in_raw(svg_path),
    }
}

#[cfg(unix)]
fn replace_first_in_raw(svg_path: &Path) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = svg_path.as_os_str().as_bytes();
    let needle = SVG_SUFFIX.as_bytes();
    match bytes.windows(needle.len()).position(|w| w == needle) {
        Some(at) => {
            let mut replaced = Vec::with_capacity(bytes.len());
            replaced.extend_from_slice(&bytes[..at]);
            replaced.extend_from_slice(PNG_SUFFIX.as_bytes());
            replaced.extend_from_slice(&bytes[at + needle.len()..]);
            PathBuf::from(OsStr::from_bytes(&replaced))
        }
        None => svg_path.to_path_buf(),
    }
}

#[cfg(not(unix))]
fn replace_first_in_raw(svg_path: &Path) -> PathBuf {
    svg_path.with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_discover_filters_svg_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("x.svg"), "<svg/>").unwrap();
        fs::write(temp_dir.path().join("y.svg"), "<svg/>").unwrap();
        fs::write(temp_dir.path().join("z.png"), b"png").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "text").unwrap();

        let found = discover(temp_dir.path());
        assert_eq!(file_names(&found), vec!["x.svg", "y.svg"]);
    }

    #[test]
    fn test_discover_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("icons").join("ui");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("logo.svg"), "<svg/>").unwrap();
        fs::write(nested.join("close.svg"), "<svg/>").unwrap();

        let found = discover(temp_dir.path());
        assert_eq!(found.len(), 2);
        assert!(found.contains(&nested.join("close.svg")));
        assert!(found.contains(&temp_dir.path().join("logo.svg")));
    }

    #[test]
    fn test_discover_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("upper.SVG"), "<svg/>").unwrap();
        fs::write(temp_dir.path().join("mixed.Svg"), "<svg/>").unwrap();
        fs::write(temp_dir.path().join("lower.svg"), "<svg/>").unwrap();

        let found = discover(temp_dir.path());
        assert_eq!(file_names(&found), vec!["lower.svg"]);
    }

    #[test]
    fn test_discover_skips_directories_named_svg() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("folder.svg");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.svg"), "<svg/>").unwrap();

        let found = discover(temp_dir.path());
        assert_eq!(found, vec![dir.join("inner.svg")]);
    }

    #[test]
    fn test_discover_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let found = discover(&temp_dir.path().join("does-not-exist"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover(temp_dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let real_dir = temp_dir.path().join("real");
        fs::create_dir(&real_dir).unwrap();
        fs::write(real_dir.join("a.svg"), "<svg/>").unwrap();

        let scan_dir = temp_dir.path().join("scan");
        fs::create_dir(&scan_dir).unwrap();
        symlink(&real_dir, scan_dir.join("linked.svg")).unwrap();
        symlink(real_dir.join("a.svg"), scan_dir.join("alias.svg")).unwrap();

        let found = discover(&scan_dir);
        assert_eq!(found, vec![scan_dir.join("alias.svg")]);
    }

    #[test]
    fn test_png_path_simple() {
        assert_eq!(png_path_for(Path::new("icon.svg")), PathBuf::from("icon.png"));
        assert_eq!(
            png_path_for(Path::new("client/src/assets/cat.svg")),
            PathBuf::from("client/src/assets/cat.png")
        );
    }

    #[test]
    fn test_png_path_replaces_first_occurrence_only() {
        assert_eq!(png_path_for(Path::new("a.svg.svg")), PathBuf::from("a.png.svg"));
        assert_eq!(
            png_path_for(Path::new("art.svg/star.svg")),
            PathBuf::from("art.png/star.svg")
        );
    }

    #[test]
    fn test_png_path_without_svg_text() {
        assert_eq!(png_path_for(Path::new("README")), PathBuf::from("README"));
    }

    #[cfg(unix)]
    #[test]
    fn test_png_path_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"bad\xffname.svg");
        let png = png_path_for(Path::new(raw));
        assert_eq!(png.as_os_str().as_bytes(), b"bad\xffname.png");

        // First occurrence wins, same as for UTF-8 paths
        let doubled = OsStr::from_bytes(b"bad\xff.svg.svg");
        let png = png_path_for(Path::new(doubled));
        assert_eq!(png.as_os_str().as_bytes(), b"bad\xff.png.svg");

        let no_svg = OsStr::from_bytes(b"bad\xffname");
        assert_eq!(png_path_for(Path::new(no_svg)), PathBuf::from(no_svg));
    }
}
