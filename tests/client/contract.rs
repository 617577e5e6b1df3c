use lang_portal_client::client::{Error, Resource};
use lang_portal_client_test_helpers::backend::{Backend, Reply, Script};
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::client::client_for;
use crate::common::logging::{tracing_stderr_init, INIT};

mod passing_the_body_through {
    use reqwest::Method;

    use super::*;

    #[tokio::test]
    async fn it_should_resolve_to_the_words_body_exactly() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("words", Reply::ok(r#"[{"id":1,"french":"chat"}]"#))).await;

        let words = client_for(&backend).fetch_words().await.unwrap();

        assert_eq!(words, json!([{"id": 1, "french": "chat"}]));

        backend.stop();
    }

    #[tokio::test]
    async fn it_should_resolve_to_an_empty_object_for_the_sessions() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("study_sessions", Reply::ok("{}"))).await;

        let sessions = client_for(&backend).fetch_sessions().await.unwrap();

        assert_eq!(sessions, json!({}));

        backend.stop();
    }

    #[tokio::test]
    async fn each_accessor_should_resolve_to_the_body_of_its_own_endpoint() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(
            Script::new()
                .on("study_activities", Reply::ok(r#"{"resource": "study_activities"}"#))
                .on("words", Reply::ok(r#"{"resource": "words"}"#))
                .on("groups", Reply::ok(r#"{"resource": "groups"}"#))
                .on("study_sessions", Reply::ok(r#"{"resource": "study_sessions"}"#)),
        )
        .await;

        let client = client_for(&backend);

        assert_eq!(
            client.fetch_study_activities().await.unwrap(),
            json!({"resource": "study_activities"})
        );
        assert_eq!(client.fetch_words().await.unwrap(), json!({"resource": "words"}));
        assert_eq!(client.fetch_groups().await.unwrap(), json!({"resource": "groups"}));
        assert_eq!(client.fetch_sessions().await.unwrap(), json!({"resource": "study_sessions"}));

        backend.stop();
    }

    #[tokio::test]
    async fn it_should_send_a_plain_get_without_query_to_the_resource_endpoint() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("study_activities", Reply::ok("[]"))).await;

        client_for(&backend).fetch_study_activities().await.unwrap();

        let requests = backend.received_requests();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "/api/study_activities");
        assert_eq!(requests[0].query, None);

        backend.stop();
    }

    #[tokio::test]
    async fn it_should_accept_a_base_url_with_a_trailing_slash() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("groups", Reply::ok("[]"))).await;

        let base_url = format!("{}/", backend.base_url()).parse().unwrap();

        let client = lang_portal_client::client::Client::new(base_url, None).unwrap();

        assert_eq!(client.fetch_groups().await.unwrap(), json!([]));
        assert_eq!(backend.received_requests()[0].path, "/api/groups");

        backend.stop();
    }
}

mod failing_on_an_unsuccessful_status {
    use reqwest::StatusCode;

    use super::*;

    #[tokio::test]
    async fn it_should_fail_with_a_static_message_naming_the_groups() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("groups", Reply::with_status(500, r#"{"error": "Database error"}"#))).await;

        let err = client_for(&backend).fetch_groups().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch groups");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.resource(), Some(Resource::Groups));

        backend.stop();
    }

    #[tokio::test]
    async fn each_accessor_should_name_its_resource_in_the_failure() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        // Nothing scripted: the backend answers `404` to every request.
        let backend = Backend::start(Script::new()).await;

        let client = client_for(&backend);

        assert_eq!(
            client.fetch_study_activities().await.unwrap_err().to_string(),
            "Failed to fetch study activities"
        );
        assert_eq!(client.fetch_words().await.unwrap_err().to_string(), "Failed to fetch words");
        assert_eq!(client.fetch_groups().await.unwrap_err().to_string(), "Failed to fetch groups");
        assert_eq!(client.fetch_sessions().await.unwrap_err().to_string(), "Failed to fetch sessions");

        backend.stop();
    }

    #[tokio::test]
    async fn the_failure_message_should_not_include_the_status_or_the_body() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("words", Reply::with_status(400, r#"{"error": "Invalid sort_by field"}"#))).await;

        let err = client_for(&backend).fetch_words().await.unwrap_err();

        assert!(matches!(
            err,
            Error::UnsuccessfulResponse {
                resource: Resource::Words,
                status: StatusCode::BAD_REQUEST
            }
        ));
        assert!(!err.to_string().contains("400"));
        assert!(!err.to_string().contains("sort_by"));

        backend.stop();
    }
}

mod failing_on_a_malformed_body {
    use super::*;

    #[tokio::test]
    async fn it_should_fail_with_a_parse_error_when_the_body_is_not_json() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("words", Reply::ok("not json"))).await;

        let err = client_for(&backend).fetch_words().await.unwrap_err();

        assert!(matches!(err, Error::InvalidJson {
            resource: Resource::Words,
            ..
        }));
        assert_eq!(err.status(), None);

        backend.stop();
    }

    #[tokio::test]
    async fn it_should_fail_with_a_parse_error_when_a_success_status_has_no_body() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("study_sessions", Reply::with_status(204, ""))).await;

        let err = client_for(&backend).fetch_sessions().await.unwrap_err();

        assert!(matches!(err, Error::InvalidJson {
            resource: Resource::StudySessions,
            ..
        }));

        backend.stop();
    }
}

mod failing_on_the_transport {
    use std::net::TcpListener;
    use std::time::Duration;

    use lang_portal_client::client::Client;
    use lang_portal_client_test_helpers::configuration;
    use url::Url;

    use super::*;

    #[tokio::test]
    async fn it_should_fail_with_a_response_error_when_nothing_is_listening() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = Client::new(Url::parse(&format!("http://{addr}/api")).unwrap(), None).unwrap();

        let err = client.fetch_groups().await.unwrap_err();

        assert!(matches!(err, Error::ResponseError {
            resource: Resource::Groups,
            ..
        }));

        assert!(err.to_string().starts_with("Failed to fetch groups: "));
    }

    #[tokio::test]
    async fn it_should_give_up_when_the_configured_timeout_elapses() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("words", Reply::ok("[]").after(Duration::from_secs(5)))).await;

        let config = configuration::ephemeral_with_timeout(backend.base_url(), 1);

        let client = Client::new(config.api.base_url.clone(), config.api.timeout()).unwrap();

        let err = client.fetch_words().await.unwrap_err();

        assert!(matches!(err, Error::ResponseError {
            resource: Resource::Words,
            ..
        }));

        backend.stop();
    }
}

mod parsing_typed_listings {
    use super::*;
    use crate::common::fixtures;

    #[tokio::test]
    async fn it_should_parse_every_listing_into_its_typed_form() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(
            Script::new()
                .on("study_activities", Reply::ok(&fixtures::study_activities_body()))
                .on("words", Reply::ok(&fixtures::words_body()))
                .on("groups", Reply::ok(&fixtures::groups_body()))
                .on("study_sessions", Reply::ok(&fixtures::study_sessions_body())),
        )
        .await;

        let client = client_for(&backend);

        let activities = client.study_activities().await.unwrap();
        assert_eq!(activities.study_activities[0].name, "Flashcards");
        assert_eq!(activities.study_activities[1].thumbnail_url, None);

        let words = client.words().await.unwrap();
        assert_eq!(words.words[0].french_word, "chat");
        assert_eq!(words.words[0].review_count(), 7);

        let groups = client.groups().await.unwrap();
        assert_eq!(groups.groups[1].name, "Transport");
        assert_eq!(groups.groups[1].word_count, 8);

        let sessions = client.study_sessions().await.unwrap();
        assert!(sessions.study_sessions[0].is_open());
        assert!(!sessions.study_sessions[1].is_open());
        assert!(sessions.pagination.is_last_page());

        backend.stop();
    }

    #[tokio::test]
    async fn a_well_formed_body_with_the_wrong_shape_should_only_fail_the_typed_accessor() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("words", Reply::ok(r#"[{"id":1,"french":"chat"}]"#))).await;

        let client = client_for(&backend);

        assert!(client.fetch_words().await.is_ok());

        let err = client.words().await.unwrap_err();

        assert!(matches!(err, Error::SchemaMismatch {
            resource: Resource::Words,
            ..
        }));

        backend.stop();
    }

    #[tokio::test]
    async fn the_typed_accessors_should_keep_the_status_failure() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(Script::new().on("study_sessions", Reply::with_status(503, ""))).await;

        let err = client_for(&backend).study_sessions().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch sessions");

        backend.stop();
    }
}

mod running_concurrently {
    use super::*;

    #[tokio::test]
    async fn concurrent_fetches_should_not_affect_each_other() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let backend = Backend::start(
            Script::new()
                .on("study_activities", Reply::ok("not json"))
                .on("words", Reply::ok(r#"[{"id":1,"french":"chat"}]"#))
                .on("groups", Reply::with_status(500, ""))
                .on("study_sessions", Reply::ok("{}")),
        )
        .await;

        let client = client_for(&backend);
        let base_url = client.base_url().clone();

        let (activities, words, groups, sessions) = tokio::join!(
            client.fetch_study_activities(),
            client.fetch_words(),
            client.fetch_groups(),
            client.fetch_sessions()
        );

        assert!(matches!(activities, Err(Error::InvalidJson { .. })));
        assert_eq!(words.unwrap(), json!([{"id": 1, "french": "chat"}]));
        assert_eq!(groups.unwrap_err().to_string(), "Failed to fetch groups");
        assert_eq!(sessions.unwrap(), json!({}));

        assert_eq!(client.base_url(), &base_url);
        assert_eq!(backend.received_requests().len(), 4);

        backend.stop();
    }
}
