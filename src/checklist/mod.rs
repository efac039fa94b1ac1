//! Builds the release checklist from a fixed task-hierarchy template.
//!
//! The template is static: titles, tags and categories are literals, and
//! only description lines are substituted from the release metadata. The
//! structure is five top-level groups of two sub-tasks each, plus a
//! Publication group for every release channel except `dev`.

use crate::models::{ReleaseMetadata, TaskDocument, TaskNode};

/// Build the task document for a release.
///
/// Pure function of the metadata: the same input always yields the same
/// tree, and empty metadata fields are substituted verbatim.
pub fn build_document(release: &ReleaseMetadata) -> TaskDocument {
    let mut tasks = vec![
        quality_gates(release),
        testing(release),
        packaging(release),
        documentation(release),
        release_preparation(release),
    ];

    if release.includes_publication() {
        tasks.push(publication(release));
    }

    TaskDocument {
        release: release.clone(),
        tasks,
    }
}

fn node(
    release: &ReleaseMetadata,
    title: &str,
    category: &str,
    tags: &[&str],
    description: Vec<String>,
    children: Vec<TaskNode>,
) -> TaskNode {
    TaskNode {
        title: title.to_string(),
        description,
        project: release.software_name.clone(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        category: category.to_string(),
        children,
    }
}

fn quality_gates(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Quality Gates",
        "quality",
        &["release", "quality"],
        vec![
            format!(
                "Quality gates for {} {}.",
                release.software_name, release.software_version
            ),
            format!("Release: {} ({})", release.name, release.tag),
        ],
        vec![
            node(
                release,
                "Run Linters",
                "quality",
                &["ci"],
                vec![format!("Run the full lint suite against {}.", release.tag)],
                vec![],
            ),
            node(
                release,
                "Run Static Analysis",
                "quality",
                &["ci"],
                vec![format!(
                    "Run static analysis on {} and triage every finding.",
                    release.tag
                )],
                vec![],
            ),
        ],
    )
}

fn testing(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Testing",
        "testing",
        &["release", "testing"],
        vec![
            format!(
                "Test coverage sign-off for {} {}.",
                release.software_name, release.software_version
            ),
            format!("Release: {} ({})", release.name, release.tag),
        ],
        vec![
            node(
                release,
                "Unit Tests",
                "testing",
                &["ci"],
                vec![format!(
                    "Run the unit test suite against {} on all supported platforms.",
                    release.tag
                )],
                vec![],
            ),
            node(
                release,
                "Integration Tests",
                "testing",
                &["ci"],
                vec![format!(
                    "Run the integration test suite against {}.",
                    release.tag
                )],
                vec![],
            ),
        ],
    )
}

fn packaging(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Packaging",
        "packaging",
        &["release", "build"],
        vec![
            format!(
                "Build and verify distributable packages for {} {}.",
                release.software_name, release.software_version
            ),
            format!("Release: {} ({})", release.name, release.tag),
        ],
        vec![
            node(
                release,
                "Build Distribution Packages",
                "packaging",
                &["build"],
                vec![format!(
                    "Build the {} {} distribution packages from tag {}.",
                    release.software_name, release.software_version, release.tag
                )],
                vec![],
            ),
            node(
                release,
                "Verify Package Installation",
                "packaging",
                &["build"],
                vec![format!(
                    "Install the built {} packages into a clean environment and smoke-test them.",
                    release.software_name
                )],
                vec![],
            ),
        ],
    )
}

fn documentation(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Documentation",
        "docs",
        &["release", "docs"],
        vec![
            format!(
                "Documentation updates for {} {}.",
                release.software_name, release.software_version
            ),
            format!("Project: {}", release.project_url),
        ],
        vec![
            node(
                release,
                "Update Changelog",
                "docs",
                &["docs"],
                vec![format!(
                    "Update the changelog with every change shipped in {}.",
                    release.tag
                )],
                vec![],
            ),
            node(
                release,
                "Write Release Notes",
                "docs",
                &["docs"],
                vec![format!(
                    "Write the {} release notes for the {} release.",
                    release.software_name, release.name
                )],
                vec![],
            ),
        ],
    )
}

fn release_preparation(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Release Preparation",
        "process",
        &["release", "process"],
        vec![
            format!(
                "Prepare the {} release of {} {}, scheduled for {}.",
                release.release_type, release.software_name, release.software_version, release.date
            ),
        ],
        vec![
            node(
                release,
                "Create Release Branch",
                "process",
                &["scm"],
                vec![format!(
                    "Cut the release branch for {} from the main line.",
                    release.name
                )],
                vec![],
            ),
            node(
                release,
                "Tag Release",
                "process",
                &["scm"],
                vec![format!(
                    "Tag the release commit as {} and push the tag to {}.",
                    release.tag, release.project_url
                )],
                vec![],
            ),
        ],
    )
}

fn publication(release: &ReleaseMetadata) -> TaskNode {
    node(
        release,
        "Publication",
        "publication",
        &["release", "publication"],
        vec![
            format!(
                "Publish {} {} ({}).",
                release.software_name, release.software_version, release.tag
            ),
            format!("Scheduled for {}.", release.date),
        ],
        vec![
            node(
                release,
                "PyPI Publication",
                "publication",
                &["pypi"],
                vec![format!(
                    "Upload the {} {} distribution to PyPI and verify the listing.",
                    release.software_name, release.software_version
                )],
                vec![],
            ),
            node(
                release,
                "GitHub Release",
                "publication",
                &["github"],
                vec![format!(
                    "Create the GitHub release for tag {} on {}.",
                    release.tag, release.project_url
                )],
                vec![],
            ),
        ],
    )
}
