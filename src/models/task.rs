use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ReleaseMetadata;

/// One release-process checklist item.
///
/// Tasks form a tree: a node exclusively owns its children and no node has
/// more than one parent. The default template is two levels deep, but the
/// format supports arbitrary nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    pub title: String,
    /// Ordered description lines, joined into the issue body on publish.
    pub description: Vec<String>,
    /// Software name this task belongs to, copied from the release metadata.
    pub project: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Sub-tasks. The key is omitted from the JSON entirely when empty, so
    /// leaf nodes carry no empty-array noise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TaskNode::node_count).sum::<usize>()
    }
}

/// The persisted artifact: one release paired with its task forest.
///
/// Built in memory during the generate flow, serialized to disk, and parsed
/// back as an independent copy during the publish flow. The two flows share
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDocument {
    pub release: ReleaseMetadata,
    pub tasks: Vec<TaskNode>,
}

impl TaskDocument {
    /// Total number of tasks across the whole forest, children included.
    pub fn node_count(&self) -> usize {
        self.tasks.iter().map(TaskNode::node_count).sum()
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let document = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a valid checklist document", path.display()))?;
        Ok(document)
    }

    /// Serialize and write the document as pretty-printed JSON.
    ///
    /// Writes to a temporary sibling path and renames it into place, so a
    /// failed write never leaves a partial file at the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);

        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Serialize to pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
