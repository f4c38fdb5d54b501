//! Directory/filename split

/// Characters treated as path separators regardless of platform
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// A path split at its last separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// Everything before the last separator, empty when there is none
    pub directory: &'a str,
    /// Everything after the last separator
    pub filename: &'a str,
}

/// Split `path` at its last `/` or `\`
pub fn split_path(path: &str) -> PathParts<'_> {
    match path.rfind(&PATH_SEPARATORS[..]) {
        Some(index) => PathParts {
            directory: &path[..index],
            filename: &path[index + 1..],
        },
        None => PathParts {
            directory: "",
            filename: path,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_path() {
        let parts = split_path(r"C:\Users\alice\Documents\report_final_v2.docx");
        assert_eq!(parts.directory, r"C:\Users\alice\Documents");
        assert_eq!(parts.filename, "report_final_v2.docx");
    }

    #[test]
    fn test_unix_path() {
        let parts = split_path("/home/alice/notes.md");
        assert_eq!(parts.directory, "/home/alice");
        assert_eq!(parts.filename, "notes.md");
    }

    #[test]
    fn test_mixed_separators_use_last() {
        let parts = split_path(r"C:\data/logs\today.log");
        assert_eq!(parts.directory, r"C:\data/logs");
        assert_eq!(parts.filename, "today.log");
    }

    #[test]
    fn test_bare_filename() {
        let parts = split_path("readme.txt");
        assert_eq!(parts.directory, "");
        assert_eq!(parts.filename, "readme.txt");
    }

    #[test]
    fn test_trailing_separator_and_root() {
        assert_eq!(
            split_path("/var/log/"),
            PathParts {
                directory: "/var/log",
                filename: ""
            }
        );
        assert_eq!(
            split_path("/etc"),
            PathParts {
                directory: "",
                filename: "etc"
            }
        );
    }
}
