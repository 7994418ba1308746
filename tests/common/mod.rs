#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::test::TestRequest;
use serde_json::Value;

use rust_ecole_next::models::users::entities::{NewUser, UserRole};
use rust_ecole_next::storage::Storage;
use rust_ecole_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_ecole_next::utils::password::hash_password;

pub const ROOT_EMAIL: &str = "root@ecole.sn";
pub const ROOT_PASSWORD: &str = "Root-Passw0rd";

/// 已迁移的内存数据库，含一个超级管理员
pub async fn seeded_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    storage
        .create_user(NewUser {
            school_id: None,
            email: ROOT_EMAIL.to_string(),
            password_hash: hash_password(ROOT_PASSWORD).unwrap(),
            role: UserRole::SuperAdmin,
            display_name: Some("Root".to_string()),
        })
        .await
        .unwrap();
    Arc::new(storage)
}

fn authed(req: TestRequest, token: &str) -> TestRequest {
    req.insert_header(("Authorization", format!("Bearer {token}")))
}

pub fn get(uri: &str, token: &str) -> TestRequest {
    authed(TestRequest::get().uri(uri), token)
}

pub fn post(uri: &str, token: &str, body: Value) -> TestRequest {
    authed(TestRequest::post().uri(uri).set_json(body), token)
}

pub fn put(uri: &str, token: &str, body: Value) -> TestRequest {
    authed(TestRequest::put().uri(uri).set_json(body), token)
}

pub fn delete(uri: &str, token: &str) -> TestRequest {
    authed(TestRequest::delete().uri(uri), token)
}

/// 以完整路由构建测试服务，会话用户缓存与生产一致地启用
macro_rules! init_app {
    ($storage:expr) => {{
        let cache = rust_ecole_next::cache::create_object_cache().await.unwrap();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_ecole_next::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(rust_ecole_next::utils::query_error_handler),
                )
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(actix_web::web::Data::new(cache))
                .configure(rust_ecole_next::routes::configure_api_routes),
        )
        .await
    }};
}

/// 发出请求，返回状态码与 JSON 响应体
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = actix_web::test::read_body(resp).await;
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }};
}

/// 登录并返回 access token
macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "email": $email, "password": $password }));
        let (status, body) = call!($app, req);
        assert_eq!(status, actix_web::http::StatusCode::OK, "{body}");
        body["data"]["access_token"].as_str().unwrap().to_string()
    }};
}

/// 超级管理员创建学校及其管理员，返回 (school_id, 管理员 token)
macro_rules! school_with_admin {
    ($app:expr, $root:expr, $code:expr) => {{
        let admin_email = format!("admin.{}@ecole.sn", $code.to_lowercase());
        let (status, body) = call!(
            $app,
            crate::common::post(
                "/api/v1/schools",
                &$root,
                serde_json::json!({
                    "name": format!("Ecole {}", $code),
                    "code": $code,
                    "admin": { "email": admin_email }
                }),
            )
        );
        assert_eq!(status, actix_web::http::StatusCode::CREATED, "{body}");
        let school_id = body["data"]["school"]["id"].as_i64().unwrap();
        let password = body["data"]["admin_credentials"]["password"]
            .as_str()
            .unwrap()
            .to_string();
        (school_id, login!($app, admin_email, password))
    }};
}
