#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::{Value, json};

use common::{ROOT_EMAIL, ROOT_PASSWORD, get, post, seeded_storage};

fn entry(room_id: i64, teacher_id: i64, start: &str, end: &str) -> Value {
    json!({
        "room_id": room_id,
        "teacher_id": teacher_id,
        "subject": "Algorithmique",
        "day": "MONDAY",
        "start_time": start,
        "end_time": end,
        "academic_year": "2025-2026"
    })
}

macro_rules! school_fixture {
    ($app:expr) => {{
        let root = login!($app, ROOT_EMAIL, ROOT_PASSWORD);
        let (_, admin) = school_with_admin!($app, root, "SCH");
        let (status, body) = call!(
            $app,
            post(
                "/api/v1/rooms",
                &admin,
                json!({ "name": "Salle 12", "capacity": 35 }),
            )
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let room_id = body["data"]["id"].as_i64().unwrap();
        let (status, body) = call!(
            $app,
            post(
                "/api/v1/teachers",
                &admin,
                json!({
                    "nom": "Fall",
                    "prenom": "Cheikh",
                    "email": "cheikh@ecole.sn",
                    "telephone": "+221 77 000 00 00",
                    "type": "VACATAIRE",
                    "grade": "ASSISTANT"
                }),
            )
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let teacher_id = body["data"]["teacher"]["id"].as_i64().unwrap();
        (admin, room_id, teacher_id)
    }};
}

#[actix_web::test]
async fn test_partial_batch_reports_failed_indexes() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let (admin, room_id, teacher_id) = school_fixture!(app);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/schedules/batch",
            &admin,
            json!({
                "entries": [
                    entry(room_id, teacher_id, "08:00", "10:00"),
                    entry(999, teacher_id, "10:00", "12:00"),
                    entry(room_id, teacher_id, "14:00", "16:00")
                ]
            }),
        )
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["code"], 6004);
    assert_eq!(body["data"]["requested"], 3);
    assert_eq!(body["data"]["created"].as_array().unwrap().len(), 2);
    let failed = body["data"]["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["index"], 1);
    assert!(failed[0]["message"].as_str().unwrap().contains("room_id"));

    let (_, body) = call!(app, get("/api/v1/schedules", &admin));
    assert_eq!(body["data"]["total"], 2);
}

#[actix_web::test]
async fn test_atomic_batch_creates_nothing_on_invalid_entry() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let (admin, room_id, teacher_id) = school_fixture!(app);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/schedules/batch",
            &admin,
            json!({
                "atomic": true,
                "entries": [
                    entry(room_id, teacher_id, "08:00", "10:00"),
                    entry(room_id, teacher_id, "12:00", "11:00")
                ]
            }),
        )
    );
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], 3000);
    assert_eq!(body["data"]["failed"][0]["index"], 1);

    let (_, body) = call!(app, get("/api/v1/schedules", &admin));
    assert_eq!(body["data"]["total"], 0);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/schedules/batch",
            &admin,
            json!({
                "atomic": true,
                "entries": [
                    entry(room_id, teacher_id, "08:00", "10:00"),
                    entry(room_id, teacher_id, "10:00", "12:00")
                ]
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["created"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_empty_batch_rejected() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let (admin, _, _) = school_fixture!(app);

    let (status, body) = call!(
        app,
        post("/api/v1/schedules/batch", &admin, json!({ "entries": [] }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn test_duplicate_applies_overrides() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let (admin, room_id, teacher_id) = school_fixture!(app);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/schedules",
            &admin,
            entry(room_id, teacher_id, "08:00", "10:00"),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let source_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        post(
            &format!("/api/v1/schedules/{source_id}/duplicate"),
            &admin,
            json!({ "day": "FRIDAY" }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_ne!(body["data"]["id"].as_i64().unwrap(), source_id);
    assert_eq!(body["data"]["day"], "FRIDAY");
    assert_eq!(body["data"]["start_time"], "08:00");
    assert_eq!(body["data"]["subject"], "Algorithmique");

    let (status, body) = call!(
        app,
        post(
            &format!("/api/v1/schedules/{source_id}/duplicate"),
            &admin,
            json!({ "start_time": "11:00", "end_time": "09:00" }),
        )
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3000);
}
