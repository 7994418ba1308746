#[macro_use]
mod common;

use actix_web::http::{StatusCode, header::CONTENT_DISPOSITION};
use serde_json::json;

use common::{ROOT_EMAIL, ROOT_PASSWORD, get, post, seeded_storage};

#[actix_web::test]
async fn test_student_export_is_semicolon_csv_with_bom() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "EXP");

    for (matricule, nom) in [("E-002", "Ndiaye"), ("E-001", "Diallo")] {
        let (status, body) = call!(
            app,
            post(
                "/api/v1/students",
                &admin,
                json!({
                    "matricule": matricule,
                    "nom": nom,
                    "prenom": "Fatou",
                    "filiere": "Informatique",
                    "niveau": "L3"
                }),
            )
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
    }

    let resp = actix_web::test::call_service(
        &app,
        get("/api/v1/students/export?sort=matricule", &admin).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains(".csv"));

    let bytes = actix_web::test::read_body(resp).await;
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("matricule;nom"));
    assert!(lines.next().unwrap().starts_with("E-001;Diallo;Fatou"));
    assert!(lines.next().unwrap().starts_with("E-002;Ndiaye;Fatou"));
    assert!(lines.next().is_none());
}

#[actix_web::test]
async fn test_payment_export_and_receipt_numbers() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "PAY");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/students",
            &admin,
            json!({
                "matricule": "P-001",
                "nom": "Gueye",
                "prenom": "Aminata",
                "filiere": "Finance",
                "niveau": "M1"
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let student_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        post(
            "/api/v1/payments",
            &admin,
            json!({ "student_id": 4242, "amount": 150000, "payment_type": "REGISTRATION", "method": "CASH" }),
        )
    );
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["data"][0]["field"], "student_id");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/payments",
            &admin,
            json!({ "student_id": student_id, "amount": 150000, "payment_type": "REGISTRATION", "method": "CASH" }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let receipt = body["data"]["receipt_number"].as_str().unwrap().to_string();
    assert!(!receipt.is_empty());

    let resp = actix_web::test::call_service(
        &app,
        get("/api/v1/payments/export", &admin).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = actix_web::test::read_body(resp).await;
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("receipt_number;student_id;amount"));
    assert!(lines.next().unwrap().starts_with(&format!("{receipt};{student_id};")));
}
