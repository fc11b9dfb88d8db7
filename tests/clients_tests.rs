//! Request-shape tests for the async resource clients.
//!
//! Every test drives a client over a `RecordingConnection` and checks the
//! method, path, query parameters and body that went out.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use octohub::testing::RecordingConnection;
use octohub::types::{ForkSort, IssueSort, IssueState, ItemStateFilter, SortDirection};
use octohub::{
    ApiError, ApiOptions, Error, GitHubClient, IssueUpdate, NewIssue, NewRelease, NewRepository,
    NewRepositoryFork, ReleaseUpdate, RepositoryForksListRequest, RepositoryIssueRequest,
    RepositoryRequest, RepositoryUpdate,
};

fn recorded() -> (Arc<RecordingConnection>, GitHubClient) {
    let recorder = Arc::new(RecordingConnection::new());
    let client = GitHubClient::with_connection(recorder.clone());
    (recorder, client)
}

fn repository_json(id: i64, full_name: &str) -> Value {
    let (owner, name) = full_name.split_once('/').unwrap();
    json!({
        "id": id,
        "name": name,
        "full_name": full_name,
        "owner": {"login": owner, "id": 1, "type": "User"},
        "html_url": format!("https://github.com/{full_name}"),
        "url": format!("https://api.github.com/repos/{full_name}"),
    })
}

fn issue_json(number: u64) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": "Found a bug",
        "state": "open",
        "html_url": format!("https://github.com/fake/repo/issues/{number}"),
        "url": format!("https://api.github.com/repos/fake/repo/issues/{number}"),
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

fn release_json(id: i64, tag: &str) -> Value {
    json!({
        "id": id,
        "tag_name": tag,
        "url": format!("https://api.github.com/repos/fake/repo/releases/{id}"),
        "html_url": format!("https://github.com/fake/repo/releases/{tag}"),
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn pages_build_json() -> Value {
    json!({
        "url": "https://api.github.com/repos/fake/repo/pages/builds/5472601",
        "status": "built",
        "error": {"message": null},
        "commit": "351391cdcb88ffae71ec3028c91f375a8036a26b",
        "duration": 2104,
        "created_at": "2014-02-10T19:00:49Z",
        "updated_at": "2014-02-10T19:00:51Z"
    })
}

fn param(recorder: &RecordingConnection, index: usize, key: &str) -> Option<String> {
    recorder.requests()[index].parameters.get(key).cloned()
}

fn assert_invalid(result: Result<impl std::fmt::Debug, Error>, field: &str) {
    match result {
        Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, field),
        other => panic!("expected InvalidArgument for {field}, got {other:?}"),
    }
}

// ============================================================================
// Pages
// ============================================================================

mod pages {
    use super::*;

    #[tokio::test]
    async fn test_get_requests_pages_url() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(
            200,
            json!({"url": "https://api.github.com/repos/fake/repo/pages", "status": "built"}),
        );

        let page = client.repository().pages().get(("fake", "repo")).await.unwrap();

        assert!(page.status.is_some());
        let request = recorder.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "repos/fake/repo/pages");
    }

    #[tokio::test]
    async fn test_get_with_repository_id() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, json!({"url": "https://api.github.com/repositories/1/pages"}));

        client.repository().pages().get(1_i64).await.unwrap();

        assert_eq!(recorder.last_request().unwrap().path, "repositories/1/pages");
    }

    #[tokio::test]
    async fn test_get_all_requests_builds() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, json!([pages_build_json()]));

        let builds = client
            .repository()
            .pages()
            .get_all(("fake", "repo"), &ApiOptions::none())
            .await
            .unwrap();

        assert_eq!(builds.len(), 1);
        assert_eq!(recorder.last_request().unwrap().path, "repos/fake/repo/pages/builds");
        assert!(recorder.last_request().unwrap().parameters.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_passes_options() {
        let (recorder, client) = recorded();
        let options = ApiOptions::none()
            .with_page_size(1)
            .with_page_count(1)
            .with_start_page(1);

        client
            .repository()
            .pages()
            .get_all(("fake", "repo"), &options)
            .await
            .unwrap();

        assert_eq!(param(&recorder, 0, "per_page").as_deref(), Some("1"));
        assert_eq!(param(&recorder, 0, "page").as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_get_latest_and_request_build() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, pages_build_json());
        recorder.enqueue_json(
            201,
            json!({"url": "https://api.github.com/repositories/1/pages/builds/latest", "status": "queued"}),
        );

        client.repository().pages().get_latest(("fake", "repo")).await.unwrap();
        let queued = client.repository().pages().request_build(1_i64).await.unwrap();

        assert_eq!(queued.status, "queued");
        let requests = recorder.requests();
        assert_eq!(requests[0].path, "repos/fake/repo/pages/builds/latest");
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].path, "repositories/1/pages/builds");
        assert!(requests[1].body.is_none());
    }

    #[tokio::test]
    async fn test_blank_arguments_send_nothing() {
        let (recorder, client) = recorded();
        let pages = client.repository().pages();

        assert_invalid(pages.get(("", "repo")).await, "owner");
        assert_invalid(pages.get(("owner", " ")).await, "name");
        assert_invalid(pages.get_all(("", "repo"), &ApiOptions::none()).await, "owner");
        assert_invalid(pages.get_latest(("owner", "")).await, "name");
        assert_invalid(pages.request_build(("", "")).await, "owner");
        assert_invalid(
            pages
                .get_all(("owner", "repo"), &ApiOptions::none().with_page_count(0))
                .await,
            "page_count",
        );

        assert_eq!(recorder.request_count(), 0);
    }
}

// ============================================================================
// Forks
// ============================================================================

mod forks {
    use super::*;

    #[tokio::test]
    async fn test_get_all_requests_forks_url() {
        let (recorder, client) = recorded();

        client
            .repository()
            .forks()
            .get_all(("fake", "repo"), &ApiOptions::none())
            .await
            .unwrap();

        let request = recorder.last_request().unwrap();
        assert_eq!(request.path, "repos/fake/repo/forks");
        assert!(request.parameters.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_with_repository_id_and_options() {
        let (recorder, client) = recorded();
        let options = ApiOptions::none().with_page_size(1).with_start_page(1);

        client.repository().forks().get_all(1_i64, &options).await.unwrap();

        let request = recorder.last_request().unwrap();
        assert_eq!(request.path, "repositories/1/forks");
        assert_eq!(request.parameters.len(), 2);
        assert_eq!(request.parameters["per_page"], "1");
        assert_eq!(request.parameters["page"], "1");
    }

    #[tokio::test]
    async fn test_get_all_with_request_sends_sort() {
        let (recorder, client) = recorded();
        let request = RepositoryForksListRequest {
            sort: ForkSort::Stargazers,
        };

        client
            .repository()
            .forks()
            .get_all_with_request(("fake", "repo"), &request, &ApiOptions::none())
            .await
            .unwrap();

        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.path, "repos/fake/repo/forks");
        assert_eq!(sent.parameters.len(), 1);
        assert_eq!(sent.parameters["sort"], "stargazers");
    }

    #[tokio::test]
    async fn test_get_all_with_request_and_options() {
        let (recorder, client) = recorded();
        let options = ApiOptions::none()
            .with_page_size(1)
            .with_page_count(1)
            .with_start_page(1);

        client
            .repository()
            .forks()
            .get_all_with_request(1_i64, &RepositoryForksListRequest::default(), &options)
            .await
            .unwrap();

        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.path, "repositories/1/forks");
        assert_eq!(sent.parameters.len(), 3);
        assert_eq!(sent.parameters["sort"], "newest");
        assert_eq!(sent.parameters["per_page"], "1");
        assert_eq!(sent.parameters["page"], "1");
    }

    #[tokio::test]
    async fn test_get_all_decodes_repositories() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(
            200,
            json!([repository_json(2, "someone/repo"), repository_json(3, "other/repo")]),
        );

        let forks = client
            .repository()
            .forks()
            .get_all(("fake", "repo"), &ApiOptions::none())
            .await
            .unwrap();

        let names: Vec<_> = forks.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["someone/repo", "other/repo"]);
    }

    #[tokio::test]
    async fn test_create_posts_fork_body() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(202, repository_json(4, "org/repo"));
        let fork = NewRepositoryFork {
            organization: Some("org".to_string()),
            ..NewRepositoryFork::default()
        };

        let created = client
            .repository()
            .forks()
            .create(("fake", "repo"), &fork)
            .await
            .unwrap();

        assert_eq!(created.full_name, "org/repo");
        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "repos/fake/repo/forks");
        assert_eq!(sent.body, Some(json!({"organization": "org"})));
    }

    #[tokio::test]
    async fn test_create_with_empty_body() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(202, repository_json(5, "me/repo"));

        client
            .repository()
            .forks()
            .create(1_i64, &NewRepositoryFork::default())
            .await
            .unwrap();

        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.path, "repositories/1/forks");
        assert_eq!(sent.body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_blank_arguments_send_nothing() {
        let (recorder, client) = recorded();
        let forks = client.repository().forks();
        let request = RepositoryForksListRequest::default();

        assert_invalid(forks.get_all(("", "repo"), &ApiOptions::none()).await, "owner");
        assert_invalid(forks.get_all(("owner", ""), &ApiOptions::none()).await, "name");
        assert_invalid(
            forks
                .get_all_with_request(("", "repo"), &request, &ApiOptions::none())
                .await,
            "owner",
        );
        assert_invalid(
            forks
                .get_all_with_request(("owner", "\t"), &request, &ApiOptions::none())
                .await,
            "name",
        );
        assert_invalid(
            forks.create(("", "repo"), &NewRepositoryFork::default()).await,
            "owner",
        );
        assert_invalid(
            forks
                .get_all(1_i64, &ApiOptions::none().with_page_size(0))
                .await,
            "page_size",
        );

        assert_eq!(recorder.request_count(), 0);
    }
}

// ============================================================================
// Repositories
// ============================================================================

mod repositories {
    use super::*;

    #[tokio::test]
    async fn test_get_by_name_and_id() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, repository_json(1, "fake/repo"));
        recorder.enqueue_json(200, repository_json(1, "fake/repo"));

        let by_name = client.repository().get(("fake", "repo")).await.unwrap();
        let by_id = client.repository().get(1_i64).await.unwrap();

        assert_eq!(by_name, by_id);
        let requests = recorder.requests();
        assert_eq!(requests[0].path, "repos/fake/repo");
        assert_eq!(requests[1].path, "repositories/1");
    }

    #[tokio::test]
    async fn test_list_endpoints() {
        let (recorder, client) = recorded();
        let repos = client.repository();
        let request = RepositoryRequest {
            direction: Some(SortDirection::Ascending),
            ..RepositoryRequest::default()
        };

        repos.get_all_for_current(&request, &ApiOptions::none()).await.unwrap();
        repos.get_all_for_user("octocat", &ApiOptions::none()).await.unwrap();
        repos.get_all_for_org("github", &ApiOptions::none()).await.unwrap();

        let requests = recorder.requests();
        assert_eq!(requests[0].path, "user/repos");
        assert_eq!(requests[0].parameters["direction"], "asc");
        assert_eq!(requests[1].path, "users/octocat/repos");
        assert_eq!(requests[2].path, "orgs/github/repos");
    }

    #[tokio::test]
    async fn test_create_edit_delete() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(201, repository_json(1, "me/hello"));
        recorder.enqueue_json(201, repository_json(2, "github/hello"));
        recorder.enqueue_json(200, repository_json(1, "me/renamed"));
        recorder.enqueue_json(204, Value::Null);
        let repos = client.repository();

        repos.create(&NewRepository::new("hello")).await.unwrap();
        repos
            .create_for_org("github", &NewRepository::new("hello"))
            .await
            .unwrap();
        let update = RepositoryUpdate {
            name: Some("renamed".to_string()),
            ..RepositoryUpdate::default()
        };
        let edited = repos.edit(("me", "hello"), &update).await.unwrap();
        repos.delete(("me", "renamed")).await.unwrap();

        assert_eq!(edited.name, "renamed");
        let requests = recorder.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "user/repos");
        assert_eq!(requests[0].body, Some(json!({"name": "hello"})));
        assert_eq!(requests[1].path, "orgs/github/repos");
        assert_eq!(requests[2].method, Method::PATCH);
        assert_eq!(requests[2].path, "repos/me/hello");
        assert_eq!(requests[2].body, Some(json!({"name": "renamed"})));
        assert_eq!(requests[3].method, Method::DELETE);
        assert_eq!(requests[3].path, "repos/me/renamed");
    }

    #[tokio::test]
    async fn test_blank_arguments_send_nothing() {
        let (recorder, client) = recorded();
        let repos = client.repository();

        assert_invalid(repos.get(("", "repo")).await, "owner");
        assert_invalid(repos.get_all_for_user("", &ApiOptions::none()).await, "login");
        assert_invalid(repos.get_all_for_org(" ", &ApiOptions::none()).await, "organization");
        assert_invalid(repos.create(&NewRepository::new("")).await, "name");
        assert_invalid(
            repos.create_for_org("", &NewRepository::new("hello")).await,
            "organization",
        );
        assert_invalid(
            repos.edit(("owner", ""), &RepositoryUpdate::default()).await,
            "name",
        );
        assert_invalid(repos.delete(("", "")).await, "owner");

        assert_eq!(recorder.request_count(), 0);
    }

    #[tokio::test]
    async fn test_not_found_surfaces_api_error() {
        let (recorder, client) = recorded();
        recorder.enqueue_error(404, "Not Found");

        let err = client.repository().get(("fake", "missing")).await.unwrap_err();

        assert!(matches!(err.api(), Some(ApiError::NotFound { .. })));
    }
}

// ============================================================================
// Issues
// ============================================================================

mod issues {
    use super::*;

    #[tokio::test]
    async fn test_get_issue() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, issue_json(42));

        let issue = client.issue().get(("fake", "repo"), 42).await.unwrap();

        assert_eq!(issue.number, 42);
        assert_eq!(recorder.last_request().unwrap().path, "repos/fake/repo/issues/42");
    }

    #[tokio::test]
    async fn test_get_all_for_repository_sends_default_filter() {
        let (recorder, client) = recorded();

        client
            .issue()
            .get_all_for_repository(("fake", "repo"), &ApiOptions::none())
            .await
            .unwrap();

        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.path, "repos/fake/repo/issues");
        assert_eq!(sent.parameters.len(), 3);
        assert_eq!(sent.parameters["state"], "open");
        assert_eq!(sent.parameters["sort"], "created");
        assert_eq!(sent.parameters["direction"], "desc");
    }

    #[tokio::test]
    async fn test_get_all_with_request_and_options() {
        let (recorder, client) = recorded();
        let request = RepositoryIssueRequest {
            state: ItemStateFilter::Closed,
            sort: IssueSort::Updated,
            labels: vec!["bug".to_string()],
            creator: Some("octocat".to_string()),
            ..RepositoryIssueRequest::default()
        };

        client
            .issue()
            .get_all_for_repository_with_request(1_i64, &request, &ApiOptions::none().with_page_size(10))
            .await
            .unwrap();

        let sent = recorder.last_request().unwrap();
        assert_eq!(sent.path, "repositories/1/issues");
        assert_eq!(sent.parameters["state"], "closed");
        assert_eq!(sent.parameters["sort"], "updated");
        assert_eq!(sent.parameters["labels"], "bug");
        assert_eq!(sent.parameters["creator"], "octocat");
        assert_eq!(sent.parameters["per_page"], "10");
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(201, issue_json(7));
        recorder.enqueue_json(200, issue_json(7));

        client
            .issue()
            .create(("fake", "repo"), &NewIssue::new("Found a bug"))
            .await
            .unwrap();
        let update = IssueUpdate {
            state: Some(IssueState::Closed),
            ..IssueUpdate::default()
        };
        client.issue().update(("fake", "repo"), 7, &update).await.unwrap();

        let requests = recorder.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "repos/fake/repo/issues");
        assert_eq!(requests[0].body, Some(json!({"title": "Found a bug"})));
        assert_eq!(requests[1].method, Method::PATCH);
        assert_eq!(requests[1].path, "repos/fake/repo/issues/7");
        assert_eq!(requests[1].body, Some(json!({"state": "closed"})));
    }

    #[tokio::test]
    async fn test_blank_arguments_send_nothing() {
        let (recorder, client) = recorded();
        let issues = client.issue();

        assert_invalid(issues.get(("", "repo"), 1).await, "owner");
        assert_invalid(
            issues.get_all_for_repository(("owner", ""), &ApiOptions::none()).await,
            "name",
        );
        assert_invalid(
            issues.create(("owner", "repo"), &NewIssue::new("  ")).await,
            "title",
        );
        assert_invalid(
            issues.update(("", "repo"), 1, &IssueUpdate::default()).await,
            "owner",
        );

        assert_eq!(recorder.request_count(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_is_typed() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(
            422,
            json!({
                "message": "Validation Failed",
                "errors": [{"resource": "Issue", "field": "title", "code": "missing_field"}]
            }),
        );

        let err = client
            .issue()
            .create(("fake", "repo"), &NewIssue::new("x"))
            .await
            .unwrap_err();

        match err.api() {
            Some(ApiError::Validation { errors, .. }) => {
                assert_eq!(errors[0].field.as_deref(), Some("title"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

// ============================================================================
// Releases
// ============================================================================

mod releases {
    use super::*;

    #[tokio::test]
    async fn test_read_endpoints() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(200, json!([release_json(1, "v1.0.0")]));
        recorder.enqueue_json(200, release_json(1, "v1.0.0"));
        recorder.enqueue_json(200, release_json(2, "v1.1.0"));
        let releases = client.repository().releases();

        let all = releases.get_all(("fake", "repo"), &ApiOptions::none()).await.unwrap();
        let one = releases.get(("fake", "repo"), 1).await.unwrap();
        let latest = releases.get_latest(1_i64).await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(one.tag_name, "v1.0.0");
        assert_eq!(latest.tag_name, "v1.1.0");
        let requests = recorder.requests();
        assert_eq!(requests[0].path, "repos/fake/repo/releases");
        assert_eq!(requests[1].path, "repos/fake/repo/releases/1");
        assert_eq!(requests[2].path, "repositories/1/releases/latest");
    }

    #[tokio::test]
    async fn test_write_endpoints() {
        let (recorder, client) = recorded();
        recorder.enqueue_json(201, release_json(3, "v2.0.0"));
        recorder.enqueue_json(200, release_json(3, "v2.0.0"));
        recorder.enqueue_json(204, Value::Null);
        let releases = client.repository().releases();

        releases
            .create(("fake", "repo"), &NewRelease::new("v2.0.0"))
            .await
            .unwrap();
        let update = ReleaseUpdate {
            draft: Some(false),
            ..ReleaseUpdate::default()
        };
        releases.edit(("fake", "repo"), 3, &update).await.unwrap();
        releases.delete(("fake", "repo"), 3).await.unwrap();

        let requests = recorder.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].body, Some(json!({"tag_name": "v2.0.0"})));
        assert_eq!(requests[1].method, Method::PATCH);
        assert_eq!(requests[1].path, "repos/fake/repo/releases/3");
        assert_eq!(requests[1].body, Some(json!({"draft": false})));
        assert_eq!(requests[2].method, Method::DELETE);
        assert_eq!(requests[2].path, "repos/fake/repo/releases/3");
    }

    #[tokio::test]
    async fn test_blank_arguments_send_nothing() {
        let (recorder, client) = recorded();
        let releases = client.repository().releases();

        assert_invalid(releases.get_all(("", "repo"), &ApiOptions::none()).await, "owner");
        assert_invalid(releases.get(("owner", ""), 1).await, "name");
        assert_invalid(releases.get_latest(("", "repo")).await, "owner");
        assert_invalid(
            releases.create(("owner", "repo"), &NewRelease::new("")).await,
            "tag_name",
        );
        assert_invalid(
            releases.edit(("", "repo"), 1, &ReleaseUpdate::default()).await,
            "owner",
        );
        assert_invalid(releases.delete(("owner", " "), 1).await, "name");

        assert_eq!(recorder.request_count(), 0);
    }
}
