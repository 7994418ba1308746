#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{ROOT_EMAIL, ROOT_PASSWORD, delete, get, post, put, seeded_storage};

#[actix_web::test]
async fn test_login_rejects_wrong_password() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);

    let req = actix_web::test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": ROOT_EMAIL, "password": "nope" }));
    let (status, body) = call!(app, req);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 2000);

    let (status, _) = call!(app, actix_web::test::TestRequest::get().uri("/api/v1/students"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_teacher_creation_returns_credentials() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "LSD");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({
                "nom": "Diop",
                "prenom": "Awa",
                "email": "awa@ecole.sn",
                "telephone": "70000000",
                "type": "PERMANENT",
                "grade": "MAITRE_ASSISTANT"
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let credentials = &body["data"]["credentials"];
    assert_eq!(credentials["email"], "awa@ecole.sn");
    let password = credentials["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 12);

    // 新账号可以直接登录，并只拥有教师权限
    let teacher = login!(app, "awa@ecole.sn", password);
    let (status, body) = call!(app, get("/api/v1/auth/permissions", &teacher));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "teacher");
    assert_eq!(body["data"]["permissions"]["students"], json!(["view"]));

    let (status, body) = call!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({
                "nom": "Diop",
                "prenom": "Awa",
                "email": "awa@ecole",
                "telephone": "7000",
                "type": "PERMANENT",
                "grade": "ASSISTANT"
            }),
        )
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3000);
    let fields: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["email", "telephone"]);
}

#[actix_web::test]
async fn test_other_school_is_not_found() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin_a) = school_with_admin!(app, root, "A1");
    let (school_b, _) = school_with_admin!(app, root, "B2");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/students",
            &root,
            json!({
                "matricule": "B-001",
                "nom": "Sow",
                "prenom": "Ibrahima",
                "filiere": "Gestion",
                "niveau": "L2",
                "school_id": school_b
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let uri = format!("/api/v1/students/{}", body["data"]["id"]);

    let (status, _) = call!(app, get(&uri, &admin_a));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call!(app, put(&uri, &admin_a, json!({ "nom": "X" })));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call!(app, delete(&uri, &admin_a));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(app, get("/api/v1/students", &admin_a));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["message"], "No results");

    // 超级管理员创建租户内资源必须指定学校
    let (status, body) = call!(
        app,
        post(
            "/api/v1/rooms",
            &root,
            json!({ "name": "Salle 1", "capacity": 30 }),
        )
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
}

#[actix_web::test]
async fn test_staff_limited_to_granted_actions() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "STF");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/staff",
            &admin,
            json!({
                "email": "moussa@ecole.sn",
                "display_name": "Moussa Ndiaye",
                "permissions": [{ "category": "students", "action": "view" }]
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let staff_id = body["data"]["staff"]["id"].as_i64().unwrap();
    let password = body["data"]["credentials"]["password"]
        .as_str()
        .unwrap()
        .to_string();
    let staff = login!(app, "moussa@ecole.sn", password);

    let (status, _) = call!(app, get("/api/v1/students", &staff));
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/students",
            &staff,
            json!({
                "matricule": "S-001",
                "nom": "Ba",
                "prenom": "Mariama",
                "filiere": "Droit",
                "niveau": "L1"
            }),
        )
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 1003);

    let (status, _) = call!(app, get("/api/v1/rooms", &staff));
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 员工不能修改自己的授权
    let (status, _) = call!(
        app,
        put(
            &format!("/api/v1/staff/{staff_id}/permissions"),
            &staff,
            json!({ "permissions": [{ "category": "students", "action": "create" }] }),
        )
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call!(
        app,
        put(
            &format!("/api/v1/staff/{staff_id}/permissions"),
            &admin,
            json!({ "permissions": [
                { "category": "students", "action": "view" },
                { "category": "students", "action": "create" }
            ] }),
        )
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        app,
        post(
            "/api/v1/students",
            &staff,
            json!({
                "matricule": "S-001",
                "nom": "Ba",
                "prenom": "Mariama",
                "filiere": "Droit",
                "niveau": "L1"
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[actix_web::test]
async fn test_created_rooms_listed_and_deleted_rooms_absent() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "RM");

    let mut ids = Vec::new();
    for (name, capacity) in [("Salle A", 40), ("Amphi 1", 200)] {
        let (status, body) = call!(
            app,
            post(
                "/api/v1/rooms",
                &admin,
                json!({ "name": name, "capacity": capacity }),
            )
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let (status, body) = call!(
        app,
        post(
            "/api/v1/rooms",
            &admin,
            json!({ "name": "Salle A", "capacity": 10 }),
        )
    );
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (_, body) = call!(app, get("/api/v1/rooms?sort=capacity&order=desc", &admin));
    let names: Vec<_> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Amphi 1", "Salle A"]);

    let (status, _) = call!(app, delete(&format!("/api/v1/rooms/{}", ids[1]), &admin));
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(app, get("/api/v1/rooms", &admin));
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["id"], ids[0]);
}

#[actix_web::test]
async fn test_suspended_or_deleted_accounts_lose_access() {
    let storage = seeded_storage().await;
    let app = init_app!(storage);
    let root = login!(app, ROOT_EMAIL, ROOT_PASSWORD);
    let (_, admin) = school_with_admin!(app, root, "SUS");

    let (status, body) = call!(
        app,
        post(
            "/api/v1/staff",
            &admin,
            json!({
                "email": "khady@ecole.sn",
                "display_name": "Khady Sarr",
                "permissions": [{ "category": "students", "action": "view" }]
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let staff_uri = format!("/api/v1/staff/{}", body["data"]["staff"]["id"]);
    let password = body["data"]["credentials"]["password"]
        .as_str()
        .unwrap()
        .to_string();
    let staff = login!(app, "khady@ecole.sn", password);

    // 第一次请求写入会话缓存
    let (status, _) = call!(app, get("/api/v1/students", &staff));
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(app, put(&staff_uri, &admin, json!({ "status": "suspended" })));
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], "suspended");

    let (status, body) = call!(app, get("/api/v1/students", &staff));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, _) = call!(app, put(&staff_uri, &admin, json!({ "status": "active" })));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, get("/api/v1/students", &staff));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(app, delete(&staff_uri, &admin));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, get("/api/v1/students", &staff));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 删除教师同时删除其登录账号
    let (status, body) = call!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({
                "nom": "Faye",
                "prenom": "Ousmane",
                "email": "ousmane@ecole.sn",
                "telephone": "77 111 22 33",
                "type": "CONTRACTUEL",
                "grade": "PROFESSEUR"
            }),
        )
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let teacher_uri = format!("/api/v1/teachers/{}", body["data"]["teacher"]["id"]);
    let password = body["data"]["credentials"]["password"]
        .as_str()
        .unwrap()
        .to_string();
    let teacher = login!(app, "ousmane@ecole.sn", password);

    let (status, _) = call!(app, get("/api/v1/rooms", &teacher));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, delete(&teacher_uri, &admin));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call!(app, get("/api/v1/rooms", &teacher));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
