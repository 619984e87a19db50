//! Black-box tests for the `littlesearch` facade.
//!
//! Only the public API of `littlesearch` is used here, the way an external
//! crate would see it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `(name, text)` documents plus a document list and a noise-word file
/// into `dir`. Returns the paths of the list and the noise file.
pub fn write_corpus(
    dir: &Path,
    docs: &[(&str, &str)],
    noise: &[&str],
) -> io::Result<(PathBuf, PathBuf)> {
    let mut list = String::new();
    for (name, text) in docs {
        fs::write(dir.join(name), text)?;
        list.push_str(name);
        list.push('\n');
    }

    let docs_path = dir.join("docs.txt");
    let noise_path = dir.join("noisewords.txt");
    fs::write(&docs_path, list)?;
    fs::write(&noise_path, noise.join("\n"))?;
    Ok((docs_path, noise_path))
}
