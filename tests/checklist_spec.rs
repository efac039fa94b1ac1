use relprocotron::checklist::build_document;
use relprocotron::models::ReleaseMetadata;
use speculate2::speculate;

fn release(release_type: &str) -> ReleaseMetadata {
    ReleaseMetadata {
        name: "Test".to_string(),
        tag: "v1.0.0".to_string(),
        release_type: release_type.to_string(),
        date: "2025-01-20".to_string(),
        project_url: "https://github.com/test/test".to_string(),
        software_name: "Test Software".to_string(),
        software_version: "1.0.0".to_string(),
        comments: vec![],
    }
}

speculate! {
    describe "build_document" {
        it "produces five top-level groups for a dev release" {
            let document = build_document(&release("dev"));

            assert_eq!(document.tasks.len(), 5);
            assert!(document.tasks.iter().all(|task| task.title != "Publication"));
        }

        it "produces six top-level groups for an LTS release" {
            let document = build_document(&release("LTS"));

            assert_eq!(document.tasks.len(), 6);
            let last = document.tasks.last().expect("at least one task");
            assert_eq!(last.title, "Publication");
            assert_eq!(last.children.len(), 2);
            assert_eq!(last.children[0].title, "PyPI Publication");
            assert_eq!(last.children[1].title, "GitHub Release");
        }

        it "appends publication for every non-dev channel" {
            for channel in ["LTS", "experimental", "early-access"] {
                let document = build_document(&release(channel));
                assert_eq!(document.tasks.len(), 6, "channel {}", channel);
            }
        }

        it "is deterministic" {
            let first = build_document(&release("LTS"));
            let second = build_document(&release("LTS"));
            assert_eq!(first, second);
        }

        it "carries the release metadata unchanged" {
            let document = build_document(&release("dev"));
            assert_eq!(document.release, release("dev"));
        }

        it "copies the software name into every node" {
            let document = build_document(&release("LTS"));
            for task in &document.tasks {
                assert_eq!(task.project, "Test Software");
                for child in &task.children {
                    assert_eq!(child.project, "Test Software");
                }
            }
        }

        it "substitutes the release tag into description lines" {
            let document = build_document(&release("dev"));
            let mentions_tag = document
                .tasks
                .iter()
                .flat_map(|task| &task.children)
                .any(|child| child.description.iter().any(|line| line.contains("v1.0.0")));
            assert!(mentions_tag);
        }

        it "counts children in the node total" {
            assert_eq!(build_document(&release("dev")).node_count(), 15);
            assert_eq!(build_document(&release("LTS")).node_count(), 18);
        }
    }
}
