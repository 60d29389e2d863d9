//! YAML file loading functionality.
//!
//! Input comes from a file on disk or from standard input. Gzip input is
//! recognized by a `.gz` extension or by the gzip magic bytes, line endings
//! are normalized to `\n`, and the text is parsed into a [`YamlFile`].

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::document::tree::YamlFile;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a YAML file from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use yamlnav::file::loader::load_yaml_file;
///
/// let file = load_yaml_file("config.yaml").unwrap();
/// println!("{} documents", file.documents().len());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read or decompressed
/// - The file is empty
/// - The file contents are not valid YAML
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<YamlFile> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        decompress_gzip_bytes(&bytes)?
    } else {
        decode(bytes)?
    };

    info!(path = %path.display(), bytes = content.len(), "loaded file");
    parse_content(&content)
}

/// Loads and parses YAML from standard input until EOF.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, is empty, or is not valid YAML.
pub fn load_yaml_from_stdin() -> Result<YamlFile> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode(buffer)?;
    info!(bytes = content.len(), "loaded stdin");
    parse_content(&content)
}

/// Normalizes and parses YAML text.
///
/// # Errors
///
/// Returns an error if the text is empty or not valid YAML.
pub fn parse_content(content: &str) -> Result<YamlFile> {
    let content = normalize_line_endings(content);
    if content.trim().is_empty() {
        bail!("input cannot be empty");
    }
    let file = YamlFile::parse(&content).context("Failed to parse YAML")?;
    debug!(documents = file.documents().len(), "parsed input");
    Ok(file)
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Decodes raw input, decompressing it first if it starts with the gzip magic.
fn decode(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        return decompress_gzip_bytes(&bytes);
    }
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
///
/// # Errors
///
/// Returns an error if the bytes are not valid gzip or the decompressed
/// content is not valid UTF-8.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip input - it may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a: 1\r\nb: 2\r\n"), "a: 1\nb: 2\n");
        assert_eq!(normalize_line_endings("a: 1\rb: 2"), "a: 1\nb: 2");
        assert_eq!(normalize_line_endings("a: 1\n"), "a: 1\n");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = parse_content("  \n\n").unwrap_err();
        assert!(err.to_string().contains("input cannot be empty"));
    }

    #[test]
    fn test_invalid_yaml_has_context() {
        let err = parse_content("a: [1, 2\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }

    #[test]
    fn test_decode_detects_gzip_magic() {
        let bytes = gzip("a: 1\n");
        assert_eq!(decode(bytes).unwrap(), "a: 1\n");
        assert_eq!(decode(b"b: 2\n".to_vec()).unwrap(), "b: 2\n");
    }

    #[test]
    fn test_corrupted_gzip() {
        let err = decompress_gzip_bytes(&[0x1f, 0x8b, 0, 1, 2]).unwrap_err();
        assert!(err.to_string().contains("decompress"));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(decode(vec![0xff, 0xfe, 0xfd]).is_err());
    }
}
