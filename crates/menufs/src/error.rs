use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

// errno values reported at the driver boundary.
const ENOENT: i32 = 2;
const EACCES: i32 = 13;
const EEXIST: i32 = 17;
const ENOTDIR: i32 = 20;
const EISDIR: i32 = 21;
const EINVAL: i32 = 22;
const EOPNOTSUPP: i32 = 95;

/// Represents errors that can occur in virtual filesystem operations.
///
/// Every fault is request-scoped: a failed query never invalidates the
/// shared root or affects other in-flight operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NotFound(PathBuf),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
    AccessDenied(PathBuf),
    AlreadyExists(PathBuf),
    Unsupported(String),
    InvalidArgument(String),
}

impl Error {
    pub fn not_found<P: AsRef<Path>>(path: P) -> Self {
        Error::NotFound(path.as_ref().to_path_buf())
    }

    pub fn not_a_directory<P: AsRef<Path>>(path: P) -> Self {
        Error::NotADirectory(path.as_ref().to_path_buf())
    }

    pub fn not_a_file<P: AsRef<Path>>(path: P) -> Self {
        Error::NotAFile(path.as_ref().to_path_buf())
    }

    pub fn access_denied<P: AsRef<Path>>(path: P) -> Self {
        Error::AccessDenied(path.as_ref().to_path_buf())
    }

    pub fn already_exists<P: AsRef<Path>>(path: P) -> Self {
        Error::AlreadyExists(path.as_ref().to_path_buf())
    }

    pub fn unsupported<S: AsRef<str>>(what: S) -> Self {
        Error::Unsupported(what.as_ref().to_string())
    }

    pub fn invalid_argument<S: AsRef<str>>(what: S) -> Self {
        Error::InvalidArgument(what.as_ref().to_string())
    }

    /// Attach the request path to an error raised below the facade.
    ///
    /// Entities don't know where in the tree they live, so path-carrying
    /// variants they produce start out empty; the facade fills in the
    /// path the driver asked about.
    pub fn with_path<P: AsRef<Path>>(self, path: P) -> Self {
        match self {
            Error::NotFound(_) => Error::not_found(path),
            Error::NotADirectory(_) => Error::not_a_directory(path),
            Error::NotAFile(_) => Error::not_a_file(path),
            Error::AccessDenied(_) => Error::access_denied(path),
            Error::AlreadyExists(_) => Error::already_exists(path),
            other => other,
        }
    }

    /// The errno the driver boundary reports for this fault.
    pub fn errno(&self) -> i32 {
        match self {
            Error::NotFound(_) => ENOENT,
            Error::NotADirectory(_) => ENOTDIR,
            Error::NotAFile(_) => EISDIR,
            Error::AccessDenied(_) => EACCES,
            Error::AlreadyExists(_) => EEXIST,
            Error::Unsupported(_) => EOPNOTSUPP,
            Error::InvalidArgument(_) => EINVAL,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "Path not found: {}", path.display()),
            Error::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            Error::NotAFile(path) => write!(f, "Not a file: {}", path.display()),
            Error::AccessDenied(path) => write!(f, "Access denied: {}", path.display()),
            Error::AlreadyExists(path) => write!(f, "Entry already exists: {}", path.display()),
            Error::Unsupported(what) => write!(f, "Operation not supported: {}", what),
            Error::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_translation() {
        assert_eq!(Error::not_found("/missing").errno(), 2);
        assert_eq!(Error::access_denied("/file").errno(), 13);
        assert_eq!(Error::already_exists("dup").errno(), 17);
        assert_eq!(Error::not_a_directory("/file").errno(), 20);
        assert_eq!(Error::not_a_file("/dir").errno(), 21);
        assert_eq!(Error::invalid_argument("offset").errno(), 22);
        assert_eq!(Error::unsupported("read on directory").errno(), 95);
    }

    #[test]
    fn test_with_path_fills_request_path() {
        let err = Error::access_denied("").with_path("/Applications/a.desktop");
        assert_eq!(err, Error::access_denied("/Applications/a.desktop"));

        // Non-path variants pass through untouched
        let err = Error::unsupported("open on directory").with_path("/x");
        assert_eq!(err, Error::unsupported("open on directory"));
    }
}
