use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::types::RunResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` (or an empty value) means stdout.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "-" => Destination::Stdout,
            path => Destination::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// JSON array with 4-space indentation.
pub fn render(run: &RunResult) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    run.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_results(dest: &Destination, run: &RunResult) -> Result<()> {
    let text = render(run)?;
    match dest {
        Destination::Stdout => {
            let mut out = io::stdout();
            writeln!(out, "{text}")?;
            out.flush()?;
        }
        Destination::File(path) => write_file(path, &text)?,
    }
    Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::types::SiteResult;
    use crate::wp::{ContentType, Record};

    fn sample() -> RunResult {
        let mut site = SiteResult::new();
        site.insert(ContentType::Posts, vec![Record::Url("http://x/?p=1".into())]);
        let mut run = RunResult::new();
        run.push("http://x", site);
        run
    }

    #[test]
    fn renders_with_four_space_indent() {
        let expected = "[\n    {\n        \"http://x\": {\n            \"posts\": [\n                \"http://x/?p=1\"\n            ]\n        }\n    }\n]";
        assert_eq!(render(&sample()).unwrap(), expected);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordpress_sites.txt");
        write_results(&Destination::File(path.clone()), &sample()).unwrap();
        let back: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back[0]["http://x"]["posts"][0], "http://x/?p=1");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.json");
        assert!(write_results(&Destination::File(path), &sample()).is_err());
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(Destination::parse("-"), Destination::Stdout);
        assert_eq!(Destination::parse("out.json"), Destination::File(PathBuf::from("out.json")));
        assert_eq!(Destination::File(PathBuf::from("out.json")).to_string(), "out.json");
    }
}
