use serde::{Deserialize, Serialize};

/// Metadata describing one release, captured once from the command line.
///
/// Every field is carried verbatim into the generated document; the builder
/// performs no validation of its own. Date format and release-type choice
/// are enforced at the CLI boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub name: String,
    /// Git tag for the release (e.g. `v1.2.0`).
    pub tag: String,
    /// Release channel: `LTS`, `dev`, `experimental` or `early-access`.
    /// Compared by string equality only.
    #[serde(rename = "type")]
    pub release_type: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub project_url: String,
    pub software_name: String,
    pub software_version: String,
    /// Free-form comments. The key is omitted from the JSON entirely when
    /// the list is empty; downstream consumers rely on its absence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl ReleaseMetadata {
    /// Whether the checklist gets a top-level Publication group.
    ///
    /// Dev releases are never published; every other channel is.
    pub fn includes_publication(&self) -> bool {
        self.release_type != "dev"
    }
}
