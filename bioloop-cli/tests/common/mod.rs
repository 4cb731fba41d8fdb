#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds a bioloop command with logging silenced so stderr only carries errors
pub fn bioloop() -> Command {
    let mut cmd = Command::cargo_bin("bioloop").unwrap();
    cmd.env("RUST_LOG", "error");
    cmd
}

/// Runs the bioloop CLI with given arguments and returns stdout
pub fn run_bioloop(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = bioloop().args(args).assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Writes `contents` to a temporary input file
pub fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Path of a temporary file as `&str`
pub fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// A FASTA record wrapped at 60 columns
pub fn fasta(id: &str, seq: &str) -> String {
    let mut text = format!(">{id}\n");
    for chunk in seq.as_bytes().chunks(60) {
        text.push_str(std::str::from_utf8(chunk).unwrap());
        text.push('\n');
    }
    text
}
