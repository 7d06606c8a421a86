mod common;

use common::*;
use http::StatusCode;

const HAL_JSON: &str = "application/hal+json";
const PROBLEM_JSON: &str = "application/problem+json";
const SUBMISSION_TITLE: &str = "Bad Request. Please provide a valid JSON value";

#[tokio::test]
async fn test_create_employee_denormalizes_role() {
    let app = app().await;
    let response = post(
        &app,
        "/employees",
        r#"{"firstName":"Ana","lastName":"Ruiz","role":{"id":2}}"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.content_type(), HAL_JSON);
    assert!(response.body.contains(r#""annualSalary":47000.00"#), "{}", response.body);

    let view = response.json();
    assert_eq!(view["firstName"], "Ana");
    assert_eq!(view["lastName"], "Ruiz");
    assert_eq!(view["jobTitle"], "Data Scientist");

    let id = view["id"].as_i64().unwrap();
    let self_href = format!("http://localhost:8080/employees/{id}");
    assert_eq!(view["_links"]["self"]["href"], self_href);
    assert_eq!(response.location(), Some(self_href.as_str()));
}

#[tokio::test]
async fn test_employee_view_links() {
    let app = app().await;
    let id = hire(&app, "Ana", "Ruiz", 2).await;

    let view = get(&app, &format!("/employees/{id}")).await.json();
    let links = &view["_links"];
    let base = "http://localhost:8080";
    assert_eq!(links["all"]["href"], format!("{base}/employees"));
    assert_eq!(links["create"]["href"], format!("{base}/employees"));
    assert_eq!(links["update"]["href"], format!("{base}/employees/{id}"));
    assert_eq!(links["delete"]["href"], format!("{base}/employees/{id}"));
    assert_eq!(links["getByRoleId"]["href"], format!("{base}/employees/roleid/2"));
    assert_eq!(
        links["getByRolePathVariable"]["href"],
        format!("{base}/employees/role/Data%20Scientist")
    );
    assert_eq!(
        links["getByRoleRequestParam"]["href"],
        format!("{base}/employees/role?job=Data+Scientist")
    );
    assert!(links["create"]["title"].as_str().unwrap().contains("firstName"));

    // Every advertised link resolves
    for rel in ["self", "getByRoleId", "getByRolePathVariable", "getByRoleRequestParam"] {
        let href = links[rel]["href"].as_str().unwrap();
        let path = href.strip_prefix(base).unwrap();
        assert_eq!(get(&app, path).await.status, StatusCode::OK, "{rel} -> {href}");
    }
}

#[tokio::test]
async fn test_create_with_unknown_role_is_rejected() {
    let app = app().await;
    let response = post(
        &app,
        "/employees",
        r#"{"firstName":"Ana","lastName":"Ruiz","role":{"id":42}}"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.content_type(), PROBLEM_JSON);
    let problem = response.json();
    assert_eq!(problem["title"], SUBMISSION_TITLE);
    assert_eq!(
        problem["detail"],
        r#"{"firstName":"value1", "lastName":"value2", "role": {"id": [1-11]}}"#
    );
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["reason"], "Could not find role 42");

    // Nothing was persisted
    let list = get(&app, "/employees").await.json();
    assert!(list.get("_embedded").is_none());
}

#[tokio::test]
async fn test_create_without_role_id_is_rejected() {
    let app = app().await;
    for body in [
        r#"{"firstName":"Ana","lastName":"Ruiz"}"#,
        r#"{"firstName":"Ana","lastName":"Ruiz","role":{}}"#,
    ] {
        let response = post(&app, "/employees", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let problem = response.json();
        assert_eq!(problem["title"], SUBMISSION_TITLE);
        assert_eq!(problem["reason"], "role.id is required");
    }
}

#[tokio::test]
async fn test_create_with_blank_name_is_rejected() {
    let app = app().await;
    let response = post(
        &app,
        "/employees",
        r#"{"firstName":"","lastName":"Ruiz","role":{"id":1}}"#,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["reason"], "firstName must not be empty");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = app().await;
    for body in [r#"{"firstName":"Ana","#, r#"{"role":{"id":"two"}}"#, "42"] {
        let response = post(&app, "/employees", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.content_type(), PROBLEM_JSON);
        assert_eq!(response.json()["title"], SUBMISSION_TITLE);
    }
}

#[tokio::test]
async fn test_update_replaces_fields_and_role() {
    let app = app().await;
    let id = hire(&app, "Ana", "Ruiz", 1).await;

    let response = put(
        &app,
        &format!("/employees/{id}"),
        r#"{"firstName":"Ana","lastName":"Ortega","role":{"id":10}}"#,
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let view = response.json();
    assert_eq!(view["id"], id);
    assert_eq!(view["lastName"], "Ortega");
    assert_eq!(view["jobTitle"], "IT Director");
    assert_eq!(view["annualSalary"].to_string(), "67000.00");
}

#[tokio::test]
async fn test_update_unknown_id_creates_employee() {
    let app = app().await;
    let response = put(
        &app,
        "/employees/99",
        r#"{"firstName":"Kai","lastName":"Moe","role":{"id":3}}"#,
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.location(), Some("http://localhost:8080/employees/99"));

    let fetched = get(&app, "/employees/99").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["firstName"], "Kai");
}

#[tokio::test]
async fn test_update_with_unknown_role_is_rejected() {
    let app = app().await;
    let id = hire(&app, "Ana", "Ruiz", 1).await;
    let response = put(
        &app,
        &format!("/employees/{id}"),
        r#"{"firstName":"Ana","lastName":"Ruiz","role":{"id":0}}"#,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["reason"], "Could not find role 0");
    assert_eq!(get(&app, &format!("/employees/{id}")).await.json()["jobTitle"], "Software Engineer");
}

#[tokio::test]
async fn test_update_without_role_id_is_rejected() {
    let app = app().await;
    let id = hire(&app, "Ana", "Ruiz", 2).await;
    let before = get(&app, &format!("/employees/{id}")).await.json();

    for body in [
        r#"{"firstName":"A","lastName":"B"}"#,
        r#"{"firstName":"A","lastName":"B","role":{}}"#,
    ] {
        let response = put(&app, &format!("/employees/{id}"), body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.content_type(), PROBLEM_JSON);
        let problem = response.json();
        assert_eq!(problem["title"], SUBMISSION_TITLE);
        assert_eq!(problem["reason"], "role.id is required");
        assert_eq!(problem["details"]["field"], "role.id");
    }

    assert_eq!(get(&app, &format!("/employees/{id}")).await.json(), before);
}

#[tokio::test]
async fn test_generated_ids_survive_upsert_at_max_id() {
    let app = app().await;
    let body = r#"{"firstName":"Max","lastName":"Id","role":{"id":1}}"#;

    let response = put(&app, &format!("/employees/{}", i64::MAX), body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.json()["id"].as_i64(), Some(i64::MAX));

    let first = hire(&app, "Ana", "Ruiz", 2).await;
    let second = hire(&app, "Bo", "Lind", 3).await;
    assert_ne!(first, i64::MAX);
    assert_ne!(second, i64::MAX);
    assert_ne!(first, second);
    assert_eq!(get(&app, &format!("/employees/{first}")).await.json()["firstName"], "Ana");
    assert_eq!(get(&app, &format!("/employees/{}", i64::MAX)).await.json()["firstName"], "Max");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("staff.db").display());
    let app = app_with_database(&url).await;

    let writes: Vec<_> = (0..40i64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = format!(r#"{{"firstName":"W{i}","lastName":"Test","role":{{"id":{}}}}}"#, i % 11 + 1);
                if i % 2 == 0 {
                    post(&app, "/employees", &body).await
                } else {
                    put(&app, &format!("/employees/{}", 1000 + i), &body).await
                }
            })
        })
        .collect();

    for write in writes {
        let response = write.await.unwrap();
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }

    let ids = embedded_ids(&get(&app, "/employees").await.json());
    assert_eq!(ids.len(), 40);

    let deletes: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let app = app.clone();
            tokio::spawn(async move { delete(&app, &format!("/employees/{id}")).await })
        })
        .collect();
    for removal in deletes {
        let response = removal.await.unwrap();
        assert_eq!(response.status, StatusCode::NO_CONTENT, "{}", response.body);
    }

    assert!(get(&app, "/employees").await.json().get("_embedded").is_none());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app().await;
    let id = hire(&app, "Ana", "Ruiz", 1).await;

    let response = delete(&app, &format!("/employees/{id}")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let response = get(&app, &format!("/employees/{id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.content_type(), "text/plain; charset=utf-8");
    assert_eq!(response.body, format!("Could not find employee {id}"));

    assert_eq!(delete(&app, &format!("/employees/{id}")).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_filters_return_identical_sets() {
    let app = app().await;
    let ana = hire(&app, "Ana", "Ruiz", 2).await;
    hire(&app, "Bo", "Lind", 1).await;
    let cy = hire(&app, "Cy", "Dahl", 2).await;

    let by_id = get(&app, "/employees/roleid/2").await;
    let by_path = get(&app, "/employees/role/Data%20Scientist").await;
    let by_param = get(&app, "/employees/role?job=data+scientist").await;

    for response in [&by_id, &by_path, &by_param] {
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.content_type(), HAL_JSON);
        assert_eq!(embedded_ids(&response.json()), vec![ana, cy]);
    }

    assert_eq!(
        by_param.json()["_links"]["self"]["href"],
        "http://localhost:8080/employees/role?job=data+scientist"
    );
    assert_eq!(
        by_id.json()["_links"]["self"]["href"],
        "http://localhost:8080/employees/roleid/2"
    );
}

#[tokio::test]
async fn test_role_filter_with_no_employees_is_empty() {
    let app = app().await;
    hire(&app, "Ana", "Ruiz", 2).await;

    let response = get(&app, "/employees/roleid/5").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert!(body.get("_embedded").is_none());
    assert!(body["_links"]["self"].is_object());
}

#[tokio::test]
async fn test_role_filters_with_unknown_role_are_not_found() {
    let app = app().await;

    let response = get(&app, "/employees/roleid/42").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Could not find role 42");

    let response = get(&app, "/employees/role/Astronaut").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Could not find role Astronaut");

    let response = get(&app, "/employees/role?job=Astronaut").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Could not find role Astronaut");
}

#[tokio::test]
async fn test_missing_job_parameter_is_bad_request() {
    let app = app().await;
    let response = get(&app, "/employees/role").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.content_type(), PROBLEM_JSON);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app().await;
    for uri in ["/employees/abc", "/employees/roleid/x", "/roles/two"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.content_type(), PROBLEM_JSON);
        assert_eq!(response.json()["status"], 400);
    }
}

#[tokio::test]
async fn test_list_employees() {
    let app = app().await;

    let empty = get(&app, "/employees").await;
    assert_eq!(empty.status, StatusCode::OK);
    let body = empty.json();
    assert!(body.get("_embedded").is_none());
    assert_eq!(body["_links"]["self"]["href"], "http://localhost:8080/employees");

    let a = hire(&app, "Ana", "Ruiz", 2).await;
    let b = hire(&app, "Bo", "Lind", 11).await;
    let body = get(&app, "/employees").await.json();
    assert_eq!(embedded_ids(&body), vec![a, b]);
    assert_eq!(body["_embedded"]["employeeDtoList"][1]["jobTitle"], "Cloud System Engineer");
}
