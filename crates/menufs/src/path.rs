/// Split a slash-delimited absolute path into its non-empty components.
///
/// Leading, trailing, and doubled slashes all produce empty fragments,
/// which are dropped. An empty result addresses the root itself. The
/// driver hands over already-normalized paths, so `.` and `..` are not
/// given special treatment here; neither ever matches a child.
pub fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}
