//! # Authentication HTTP Handlers
//!
//! 인증이 필요 없는 공개 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/register` | 사용자 등록 | 200 + 사용자 레코드 |
//! | `POST` | `/login` | 로그인 | 200 `{"token": ...}` |

use actix_web::{post, web, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, TokenResponse};
use crate::errors::AppError;

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("register:: 요청 수신 ({})", payload.email);

    let user = state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("login:: 요청 수신 ({})", payload.email);

    let user = state.user_service.login(payload.into_inner()).await?;

    let token = state.token_service.generate_token(&user.email)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::routes::configure_all_routes;
    use crate::services::users::INVALID_CREDENTIALS_MESSAGE;
    use crate::test_support::test_state;

    #[actix_web::test]
    async fn test_register_then_login() {
        let state = test_state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "alice", "email": "alice@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let user: Value = test::read_body_json(resp).await;
        assert_eq!(user["email"], "alice@example.com");
        assert!(user.get("password").is_none());
        assert!(user["accountNumber"].is_string());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "alice@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap();

        let claims = state.token_service.verify_token(token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_login_failures_share_one_response() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "alice", "email": "alice@example.com", "password": "pw" }))
            .to_request();
        test::call_service(&app, req).await;

        let mut bodies = Vec::new();
        for (email, password) in [("nobody@example.com", "pw"), ("alice@example.com", "wrong")] {
            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(json!({ "email": email, "password": password }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            bodies.push(test::read_body_json::<Value, _>(resp).await);
        }

        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[0]["err"], INVALID_CREDENTIALS_MESSAGE);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_server_error() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure_all_routes)).await;
        let body = json!({ "username": "alice", "email": "alice@example.com", "password": "pw" });

        let first = test::call_service(&app, test::TestRequest::post().uri("/register").set_json(&body).to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(&app, test::TestRequest::post().uri("/register").set_json(&body).to_request()).await;
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: Value = test::read_body_json(second).await;
        assert!(err["err"].is_string());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_server_error() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["err"].is_string());
    }
}
