// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use schedview_api::{ApiConfig, ApiError, ScheduleApi, ScheduleId, ScheduleQuery};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_api(server: &MockServer) -> ScheduleApi {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    ScheduleApi::new(config).expect("Failed to create client")
}

fn summary_json(id: i64) -> serde_json::Value {
    json!({
        "schedule_id": id,
        "total_credits": 14,
        "total_instructor_score": 4.3,
        "num_sections": 4,
        "meets_mon": true,
        "meets_tue": false,
        "meets_wed": true,
        "meets_thu": false,
        "meets_fri": true,
        "meets_sat": false,
        "earliest_start": "09:00:00",
        "latest_end": "15:30:00",
        "campus_pattern": "Annandale-only",
        "created_at": "2026-01-15T08:00:00",
        "sections": [
            {
                "subject_code": "CSC",
                "course_number": 223,
                "section_code": "001N",
                "course_title": "Data Structures and Algorithms",
                "credits": 4,
                "instructor_name": "A. Instructor",
                "instructor_rating": 4.3,
                "meetings": [
                    {
                        "day_of_week": "Mon",
                        "start_time": "09:00:00",
                        "end_time": "10:15:00",
                        "campus": "Annandale"
                    }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn client_list_schedules_sends_page_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/schedules"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .and(query_param_is_missing("favorites_only"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([summary_json(1), summary_json(2)])),
        )
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let query = ScheduleQuery {
        pager: Some((50, 0).into()),
        ..Default::default()
    };

    let page = api
        .list_schedules(&query)
        .await
        .expect("Failed to list schedules");

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].schedule_id, ScheduleId::new(1));
    assert_eq!(page[0].total_credits, 14);
    assert_eq!(page[0].sections.len(), 1);
    assert_eq!(page[0].sections[0].meetings[0].campus, "Annandale");
}

#[tokio::test]
async fn client_list_schedules_repeats_filter_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/schedules"))
        .and(query_param("favorites_only", "true"))
        .and(query_param("campuses", "Online"))
        .and(query_param("times", "Morning"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let query = ScheduleQuery {
        favorites_only: true,
        campuses: vec!["Online".to_string()],
        times: vec!["Morning".to_string(), "Evening".to_string()],
        pager: Some((25, 50).into()),
    };

    let page = api
        .list_schedules(&query)
        .await
        .expect("Failed to list schedules");

    assert!(page.is_empty());
}

#[tokio::test]
async fn client_fetches_favorite_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([3, 17, 42])))
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let ids = api.favorites().await.expect("Failed to fetch favorites");

    assert_eq!(
        ids,
        vec![ScheduleId::new(3), ScheduleId::new(17), ScheduleId::new(42)]
    );
}

#[tokio::test]
async fn client_favorite_returns_ack() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/favorite/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule_id": 7,
            "favorited_at": "2026-02-01T12:00:00",
            "message": "Schedule favorited successfully"
        })))
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let ack = api
        .favorite(ScheduleId::new(7))
        .await
        .expect("Failed to favorite");

    assert_eq!(ack.schedule_id, ScheduleId::new(7));
    assert!(ack.favorited_at.is_some());
}

#[tokio::test]
async fn client_favorite_maps_404_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/favorite/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Schedule 999 not found"})),
        )
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let err = api
        .favorite(ScheduleId::new(999))
        .await
        .expect_err("Expected a 404 error");

    assert!(matches!(err, ApiError::NotFound(id) if id == ScheduleId::new(999)));
}

#[tokio::test]
async fn client_unfavorite_maps_404_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/favorite/5"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "Schedule 5 is not favorited"})),
        )
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let err = api
        .unfavorite(ScheduleId::new(5))
        .await
        .expect_err("Expected a 404 error");

    assert!(matches!(err, ApiError::NotFound(id) if id == ScheduleId::new(5)));
}

#[tokio::test]
async fn client_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    let api = test_api(&mock_server);
    let health = api.health().await.expect("Failed health check");

    assert_eq!(health.status, "ok");
}
