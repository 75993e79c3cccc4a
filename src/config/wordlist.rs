use crate::ConfigError;
use std::path::Path;

/// Loads a wordlist file into path segments
///
/// One segment per line; empty lines are dropped and surrounding whitespace
/// is trimmed so CRLF wordlists behave the same as LF ones. File order is
/// preserved.
///
/// # Errors
///
/// Returns `ConfigError::Wordlist` when the file cannot be read.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parses a comma-separated accepted-codes argument
///
/// An entry that does not parse as an integer becomes the sentinel -1, which
/// can never match a real HTTP status code.
pub fn parse_status_codes(raw: &str) -> Vec<i32> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<i32>().unwrap_or(-1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_wordlist(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_wordlist_skips_empty_lines() {
        let file = create_wordlist("admin\n\nlogin\n\n\nbackup\n");
        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["admin", "login", "backup"]);
    }

    #[test]
    fn test_load_wordlist_trims_crlf() {
        let file = create_wordlist("admin\r\nlogin\r\n");
        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["admin", "login"]);
    }

    #[test]
    fn test_load_wordlist_missing_file() {
        let result = load_wordlist(Path::new("/nonexistent/words.txt"));
        assert!(matches!(result, Err(ConfigError::Wordlist(_))));
    }

    #[test]
    fn test_parse_status_codes() {
        assert_eq!(parse_status_codes("200,302,304"), vec![200, 302, 304]);
        assert_eq!(parse_status_codes("200, 301"), vec![200, 301]);
    }

    #[test]
    fn test_parse_status_codes_sentinel() {
        assert_eq!(parse_status_codes("200,ok,301"), vec![200, -1, 301]);
    }

    #[test]
    fn test_parse_status_codes_empty_entries() {
        assert_eq!(parse_status_codes("200,,301,"), vec![200, 301]);
    }
}
