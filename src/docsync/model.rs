use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One documentation fragment and the application directory it is copied into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Fragment file, relative to the working directory.
    pub source: PathBuf,
    /// Application directory, relative to the apps directory.
    pub destination: PathBuf,
}

impl Entry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Resolves the readme this entry writes to.
    pub fn readme_path(&self, apps_dir: &Path, readme_name: &str) -> PathBuf {
        apps_dir.join(&self.destination).join(readme_name)
    }
}

/// How far an image reference extends once `GUID` has been found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Stop at the first `.png` after `GUID`.
    #[default]
    Shortest,
    /// Run to the last `.png` on the line.
    Longest,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Shortest => "shortest",
            MatchMode::Longest => "longest",
        }
    }
}

const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        "GUID-E6E00EA3-D4B8-4D63-B2E1-5A828AF8B02B.md",
        &["icm_with_ecc_error_injection"],
    ),
    (
        "GUID-A0F66FE7-EA1B-4B61-9461-94959D430725.md",
        &["ip1553", "ip1553_bc_operation_blocking"],
    ),
    (
        "GUID-0E61B769-C9D2-4263-9241-E920B25B5942.md",
        &["ip1553", "ip1553_bc_operation_interrupt"],
    ),
    (
        "GUID-3A0F79CC-21A9-4AA4-9784-D4E205639D98.md",
        &["ip1553", "ip1553_rt_operation_blocking"],
    ),
    (
        "GUID-60FE74B7-3F9C-429D-BBB6-D8DD7A0CFD84.md",
        &["ip1553", "ip1553_rt_operation_interrupt"],
    ),
    (
        "GUID-99D30EC0-EEB4-4E4B-B241-7B486A7FF621.md",
        &["spw", "spw_escChar_tch_loopback"],
    ),
    (
        "GUID-A3B89BE3-4E24-4B98-B35C-691436D071DA.md",
        &["spw", "spw_loopback"],
    ),
    (
        "GUID-77C55A1B-0D29-4366-93A1-E69564C3DFA2.md",
        &["spw", "spw_rmap_loopback"],
    ),
];

/// The fragments shipped with the application docs, in processing order.
pub fn builtin_entries() -> Vec<Entry> {
    BUILTIN_ENTRIES
        .iter()
        .map(|(source, segments)| {
            let destination: PathBuf = segments.iter().collect();
            Entry::new(*source, destination)
        })
        .collect()
}
