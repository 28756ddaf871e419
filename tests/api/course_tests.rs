//! Course API Tests

use std::collections::HashSet;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{course_url, unique_course_name, TestApp, COURSES_URL};

#[tokio::test]
async fn test_retrieve_course() {
    let app = TestApp::new();
    let id = app.create_course("Test Course").await;

    let response = app.get(&course_url(id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "id": id, "name": "Test Course" }));
}

#[tokio::test]
async fn test_list_courses() {
    let app = TestApp::new();
    let names: Vec<String> = (0..3).map(|_| unique_course_name()).collect();
    for name in &names {
        app.create_course(name).await;
    }

    let response = app.get(COURSES_URL).await;

    assert_eq!(response.status, StatusCode::OK);
    let listed: HashSet<String> = response
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|course| course["name"].as_str().unwrap().to_string())
        .collect();
    for name in &names {
        assert!(listed.contains(name), "{name} missing from list");
    }
}

#[tokio::test]
async fn test_list_courses_empty() {
    let app = TestApp::new();

    let response = app.get(COURSES_URL).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_filter_courses_by_id() {
    let app = TestApp::new();
    app.create_course("Filtered Course 1").await;
    let target = app.create_course("Filtered Course 2").await;
    app.create_course("Filtered Course 3").await;

    let response = app.get(&format!("{COURSES_URL}?id={target}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([{ "id": target, "name": "Filtered Course 2" }])
    );
}

#[tokio::test]
async fn test_filter_courses_by_name_is_exact() {
    let app = TestApp::new();
    app.create_course("DjangoBasics").await;
    app.create_course("PythonAdvanced").await;
    app.create_course("DjangoBasicsExtended").await;

    let response = app.get(&format!("{COURSES_URL}?name=DjangoBasics")).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.json();
    let data = data.as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "DjangoBasics");
}

#[tokio::test]
async fn test_filter_courses_by_name_returns_every_match() {
    let app = TestApp::new();
    let first = app.create_course("Shared Name").await;
    app.create_course("Other").await;
    let second = app.create_course("Shared Name").await;

    let response = app.get(&format!("{COURSES_URL}?name=Shared%20Name")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            { "id": first, "name": "Shared Name" },
            { "id": second, "name": "Shared Name" }
        ])
    );
}

#[tokio::test]
async fn test_filter_courses_by_id_and_name() {
    let app = TestApp::new();
    let id = app.create_course("Algebra").await;
    app.create_course("Geometry").await;

    let matching = app
        .get(&format!("{COURSES_URL}?id={id}&name=Algebra"))
        .await;
    assert_eq!(matching.json(), json!([{ "id": id, "name": "Algebra" }]));

    let conflicting = app
        .get(&format!("{COURSES_URL}?id={id}&name=Geometry"))
        .await;
    assert_eq!(conflicting.status, StatusCode::OK);
    assert_eq!(conflicting.json(), json!([]));
}

#[tokio::test]
async fn test_filter_with_empty_values_lists_everything() {
    let app = TestApp::new();
    app.create_course("One").await;
    app.create_course("Two").await;

    let response = app.get(&format!("{COURSES_URL}?id=&name=")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_filter_by_non_numeric_id_is_rejected() {
    let app = TestApp::new();

    let response = app.get(&format!("{COURSES_URL}?id=abc")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "id");
}

#[tokio::test]
async fn test_create_course() {
    let app = TestApp::new();

    let response = app
        .post_json(COURSES_URL, &json!({ "name": "NewCourse" }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.json();
    assert_eq!(data["name"], "NewCourse");
    let id = data["id"].as_i64().expect("id should be an integer");

    let stored = app.get(&format!("{COURSES_URL}?id={id}")).await;
    assert_eq!(stored.json().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_course_trims_name() {
    let app = TestApp::new();

    let response = app
        .post_json(COURSES_URL, &json!({ "name": "  Spaced Out  " }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["name"], "Spaced Out");
}

#[tokio::test]
async fn test_create_course_without_name_fails() {
    let app = TestApp::new();

    let response = app.post_json(COURSES_URL, &json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["errors"],
        json!([{ "field": "name", "message": "This field is required." }])
    );
}

#[tokio::test]
async fn test_create_course_with_blank_name_fails() {
    let app = TestApp::new();

    let response = app.post_json(COURSES_URL, &json!({ "name": "   " })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "name");

    let listed = app.get(COURSES_URL).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_create_course_with_malformed_body_fails() {
    let app = TestApp::new();

    let broken = app
        .post_raw(COURSES_URL, "application/json", "{\"name\": ")
        .await;
    assert_eq!(broken.status, StatusCode::BAD_REQUEST);

    let wrong_type = app.post_json(COURSES_URL, &json!({ "name": 5 })).await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    let body = wrong_type.json();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "name");

    let not_json = app.post_raw(COURSES_URL, "text/plain", "name=Course").await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_object_bodies_are_rejected() {
    let app = TestApp::new();
    let id = app.create_course("Stable").await;

    for body in [json!(["x"]), json!("x")] {
        let created = app.post_json(COURSES_URL, &body).await;
        assert_eq!(created.status, StatusCode::BAD_REQUEST, "POST {body}");
        assert_eq!(created.json()["code"], 10002);

        let patched = app.patch_json(&course_url(id), &body).await;
        assert_eq!(patched.status, StatusCode::BAD_REQUEST, "PATCH {body}");

        let replaced = app.put_json(&course_url(id), &body).await;
        assert_eq!(replaced.status, StatusCode::BAD_REQUEST, "PUT {body}");
    }

    assert_eq!(
        app.get(COURSES_URL).await.json(),
        json!([{ "id": id, "name": "Stable" }])
    );
}

#[tokio::test]
async fn test_null_name_is_rejected() {
    let app = TestApp::new();
    let id = app.create_course("Not Null").await;

    let patched = app.patch_json(&course_url(id), &json!({ "name": null })).await;
    assert_eq!(patched.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        patched.json()["errors"],
        json!([{ "field": "name", "message": "This field may not be null." }])
    );

    let created = app.post_json(COURSES_URL, &json!({ "name": null })).await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get(&course_url(id)).await.json()["name"], "Not Null");
}

#[tokio::test]
async fn test_repeated_query_parameter_returns_json_error() {
    let app = TestApp::new();
    app.create_course("Repeated").await;

    let response = app.get(&format!("{COURSES_URL}?id=1&id=1")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 10002);
}

#[tokio::test]
async fn test_retrieve_missing_course_returns_404() {
    let app = TestApp::new();

    let response = app.get(&course_url(404)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], 10001);

    let non_numeric = app.get("/api/v1/courses/abc/").await;
    assert_eq!(non_numeric.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_course() {
    let app = TestApp::new();
    let id = app.create_course("OldName").await;

    let response = app
        .patch_json(&course_url(id), &json!({ "name": "UpdatedName" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "id": id, "name": "UpdatedName" }));

    let refreshed = app.get(&course_url(id)).await;
    assert_eq!(refreshed.json()["name"], "UpdatedName");
}

#[tokio::test]
async fn test_update_course_with_empty_payload_keeps_record() {
    let app = TestApp::new();
    let id = app.create_course("Unchanged").await;

    let response = app.patch_json(&course_url(id), &json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "id": id, "name": "Unchanged" }));
}

#[tokio::test]
async fn test_update_course_with_blank_name_fails() {
    let app = TestApp::new();
    let id = app.create_course("Keep Me").await;

    let response = app.patch_json(&course_url(id), &json!({ "name": "" })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get(&course_url(id)).await.json()["name"], "Keep Me");
}

#[tokio::test]
async fn test_update_missing_course_returns_404() {
    let app = TestApp::new();

    let response = app
        .patch_json(&course_url(77), &json!({ "name": "Ghost" }))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_course() {
    let app = TestApp::new();
    let id = app.create_course("Draft").await;

    let response = app
        .put_json(&course_url(id), &json!({ "name": "Final" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "id": id, "name": "Final" }));

    let missing_name = app.put_json(&course_url(id), &json!({})).await;
    assert_eq!(missing_name.status, StatusCode::BAD_REQUEST);

    let missing_course = app
        .put_json(&course_url(id + 100), &json!({ "name": "Final" }))
        .await;
    assert_eq!(missing_course.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_course() {
    let app = TestApp::new();
    let id = app.create_course("ToBeDeleted").await;

    let response = app.delete(&course_url(id)).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    assert_eq!(app.get(&course_url(id)).await.status, StatusCode::NOT_FOUND);
    let filtered = app.get(&format!("{COURSES_URL}?id={id}")).await;
    assert_eq!(filtered.json(), json!([]));
}

#[tokio::test]
async fn test_delete_missing_course_keeps_returning_404() {
    let app = TestApp::new();
    let id = app.create_course("Once").await;

    assert_eq!(app.delete(&course_url(id)).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&course_url(id)).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&course_url(id)).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::new();
    let first = app.create_course("First").await;
    app.delete(&course_url(first)).await;

    let second = app.create_course("Second").await;

    assert!(second > first);
}

#[tokio::test]
async fn test_routes_accept_paths_without_trailing_slash() {
    let app = TestApp::new();

    let created = app
        .post_json("/api/v1/courses", &json!({ "name": "NoSlash" }))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.json()["id"].as_i64().unwrap();

    let fetched = app.get(&format!("/api/v1/courses/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["name"], "NoSlash");

    let listed = app.get("/api/v1/courses").await;
    assert_eq!(listed.json().as_array().unwrap().len(), 1);

    let deleted = app.delete(&format!("/api/v1/courses/{id}")).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}
