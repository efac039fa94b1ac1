//! Walks a task document and creates one GitHub issue per task.
//!
//! Traversal is pre-order: a parent's issue is requested before any of its
//! children's, and sibling order is preserved. Calls are strictly
//! sequential. One node's failure never aborts the walk; every node appears
//! in the final report.

use tracing::{debug, info, warn};

use crate::github::{IssueClient, IssueError, NewIssue, RepoId};
use crate::models::{TaskDocument, TaskNode};

/// What happened to one task during a publish run.
#[derive(Debug)]
pub enum IssueOutcome {
    /// Issue created, carrying the assigned number and URL.
    Created { number: u64, url: String },
    /// Dry run, no call performed.
    Skipped,
    /// The creation call failed; the walk continued.
    Failed(IssueError),
}

/// Per-task result, in the same pre-order as the walk.
#[derive(Debug)]
pub struct IssueCreationResult {
    pub title: String,
    pub outcome: IssueOutcome,
}

/// Aggregate outcome of a publish run.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub results: Vec<IssueCreationResult>,
}

impl PublishReport {
    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::Created { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&IssueOutcome) -> bool) -> usize {
        self.results
            .iter()
            .filter(|result| predicate(&result.outcome))
            .count()
    }
}

/// Create one issue per task, parents before children, siblings in order.
///
/// With `dry_run` set, no network call is made at all and every node yields
/// a skipped result; the traversal itself is never pruned.
pub async fn publish_document<C: IssueClient>(
    client: &C,
    repo: &RepoId,
    document: &TaskDocument,
    dry_run: bool,
) -> PublishReport {
    let mut report = PublishReport::default();

    for task in preorder(&document.tasks) {
        let outcome = if dry_run {
            info!(title = %task.title, "dry run, would create issue");
            IssueOutcome::Skipped
        } else {
            create_one(client, repo, task).await
        };

        report.results.push(IssueCreationResult {
            title: task.title.clone(),
            outcome,
        });
    }

    report
}

async fn create_one<C: IssueClient>(client: &C, repo: &RepoId, task: &TaskNode) -> IssueOutcome {
    let issue = to_issue(task);
    debug!(title = %issue.title, labels = ?issue.labels, "creating issue");

    match client.create_issue(repo, &issue).await {
        Ok(created) => {
            info!(title = %task.title, number = created.number, "created issue");
            IssueOutcome::Created {
                number: created.number,
                url: created.html_url,
            }
        }
        Err(error) => {
            warn!(title = %task.title, %error, "failed to create issue");
            IssueOutcome::Failed(error)
        }
    }
}

/// Flatten the forest parent-first, preserving sibling order.
fn preorder(tasks: &[TaskNode]) -> Vec<&TaskNode> {
    let mut nodes = Vec::new();
    for task in tasks {
        collect(task, &mut nodes);
    }
    nodes
}

fn collect<'a>(task: &'a TaskNode, into: &mut Vec<&'a TaskNode>) {
    into.push(task);
    for child in &task.children {
        collect(child, into);
    }
}

/// Render one task as an issue payload.
///
/// The body is the description lines followed by the task's metadata; the
/// label set is the task's tags plus its category, deduplicated.
fn to_issue(task: &TaskNode) -> NewIssue {
    let mut body = task.description.join("\n");
    body.push_str("\n\n");
    body.push_str(&format!("Project: {}\n", task.project));
    body.push_str(&format!("Category: {}\n", task.category));
    body.push_str(&format!("Tags: {}", task.tags.join(", ")));

    let mut labels = task.tags.clone();
    if !labels.contains(&task.category) {
        labels.push(task.category.clone());
    }

    NewIssue {
        title: task.title.clone(),
        body,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str) -> TaskNode {
        TaskNode {
            title: title.to_string(),
            description: vec!["line one".to_string(), "line two".to_string()],
            project: "aurora".to_string(),
            tags: vec!["ci".to_string()],
            category: "testing".to_string(),
            children: vec![],
        }
    }

    #[test]
    fn preorder_lists_parents_before_children() {
        let mut parent = leaf("parent");
        parent.children = vec![leaf("first child"), leaf("second child")];
        let forest = vec![parent, leaf("sibling")];

        let titles: Vec<&str> = preorder(&forest)
            .iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["parent", "first child", "second child", "sibling"]
        );
    }

    #[test]
    fn issue_body_joins_description_and_metadata() {
        let issue = to_issue(&leaf("Unit Tests"));
        assert_eq!(
            issue.body,
            "line one\nline two\n\nProject: aurora\nCategory: testing\nTags: ci"
        );
    }

    #[test]
    fn labels_are_tags_plus_category() {
        let issue = to_issue(&leaf("Unit Tests"));
        assert_eq!(issue.labels, ["ci", "testing"]);
    }

    #[test]
    fn category_is_not_duplicated_in_labels() {
        let mut task = leaf("Unit Tests");
        task.tags = vec!["testing".to_string(), "ci".to_string()];
        let issue = to_issue(&task);
        assert_eq!(issue.labels, ["testing", "ci"]);
    }
}
