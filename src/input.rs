//! Reading lists of CIDR blocks from files.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::path::Path;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"#.*$").expect("Invalid Regex?");
}

/// Extract one CIDR per line, dropping blank lines and `#` comments.
pub fn parse_cidr_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| COMMENT.replace(line, ""))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Read a file of CIDR blocks, one per line.
///
/// Entries are returned as written; they are validated when used.
pub fn read_cidr_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading CIDR file {}: {e}", path.display()))?;
    let cidrs = parse_cidr_list(&text);
    log::info!("Read {} CIDR blocks from {}", cidrs.len(), path.display());
    Ok(cidrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_list() {
        let text = "10.0.0.0/8\n\n  192.168.0.0/16  \n# private ranges\n172.16.0.0/12 # rfc1918\n";
        assert_eq!(
            parse_cidr_list(text),
            vec!["10.0.0.0/8", "192.168.0.0/16", "172.16.0.0/12"]
        );
        assert!(parse_cidr_list("").is_empty());
    }

    #[test]
    fn test_parse_cidr_list_crlf() {
        assert_eq!(
            parse_cidr_list("10.0.0.0/8\r\n10.1.0.0/16\r\n"),
            vec!["10.0.0.0/8", "10.1.0.0/16"]
        );
    }

    #[test]
    fn test_read_cidr_file() {
        let path = std::env::temp_dir().join(format!("cider_input_{}.txt", std::process::id()));
        std::fs::write(&path, "10.0.0.0/8\n10.1.0.0/16\n").expect("write fixture");
        let cidrs = read_cidr_file(&path).expect("Error reading CIDR file");
        std::fs::remove_file(&path).ok();
        assert_eq!(cidrs, vec!["10.0.0.0/8", "10.1.0.0/16"]);
    }

    #[test]
    fn test_read_cidr_file_missing() {
        let err = read_cidr_file("does/not/exist.txt").unwrap_err();
        assert!(
            err.to_string().starts_with("Error reading CIDR file does/not/exist.txt"),
            "{err}"
        );
    }
}
