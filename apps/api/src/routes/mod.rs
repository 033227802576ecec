pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers as search;
use crate::state::AppState;
use crate::tokens::handlers as tokens;
use crate::vocabulary::handlers as vocabulary;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/vocabulary",
            get(vocabulary::handle_vocabulary_summary),
        )
        .route("/api/v1/words/search", post(search::handle_search))
        .route("/api/v1/words/export", post(search::handle_export))
        .route(
            "/api/v1/tokens/validate",
            post(tokens::handle_validate_token),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::tokens::AlphabeticTokenValidator;
    use crate::vocabulary::{Vocabulary, VocabularyCache};

    fn app_with(cache: VocabularyCache) -> Router {
        build_router(AppState {
            vocabulary: Arc::new(cache),
            token_validator: Arc::new(AlphabeticTokenValidator),
        })
    }

    fn app(words: &[&str]) -> Router {
        let vocabulary = Vocabulary::new(words.iter().map(|w| w.to_string()).collect(), "test");
        app_with(VocabularyCache::preloaded(vocabulary))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(&[])
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_returns_sorted_annotated_words() {
        let response = post_json(
            app(&["roma", "amor", "maromba", "zebra"]),
            "/api/v1/words/search",
            json!({ "mandatory": "a", "complementary": "morxyz" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "found");
        assert_eq!(body["count"], 2);
        assert_eq!(body["words"][0]["word"], "amor");
        assert_eq!(body["words"][0]["length"], 4);
        assert_eq!(body["words"][0]["highlighted"], "<mark>a</mark>mor");
        assert_eq!(body["words"][1]["word"], "roma");
    }

    #[tokio::test]
    async fn test_search_lowercases_input() {
        let response = post_json(
            app(&["casa", "casas", "mesa"]),
            "/api/v1/words/search",
            json!({ "mandatory": "A", "complementary": "CSMEAO" }),
        )
        .await;
        let body = body_json(response).await;
        let words: Vec<&str> = body["words"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["word"].as_str().unwrap())
            .collect();
        assert_eq!(words, vec!["casa", "mesa"]);
    }

    #[tokio::test]
    async fn test_search_applies_length_range() {
        let response = post_json(
            app(&["amor", "aroma", "amoras"]),
            "/api/v1/words/search",
            json!({ "mandatory": "a", "complementary": "morsxy", "min_length": 5, "max_length": 5 }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["words"][0]["word"], "aroma");
    }

    #[tokio::test]
    async fn test_search_empty_result() {
        let response = post_json(
            app(&["zebra"]),
            "/api/v1/words/search",
            json!({ "mandatory": "a", "complementary": "morxyz" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "empty");
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_search_rejects_bad_letters() {
        for body in [
            json!({ "complementary": "morxyz" }),
            json!({ "mandatory": "ab", "complementary": "morxyz" }),
            json!({ "mandatory": "a", "complementary": "morxy" }),
            json!({ "mandatory": "a", "complementary": "morxyzw" }),
        ] {
            let response = post_json(app(&["amor"]), "/api/v1/words/search", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        for body in [
            json!({ "mandatory": "a", "complementary": "morxyz", "min_length": -1 }),
            json!({ "mandatory": "a", "complementary": "morxyz", "max_length": 6.5 }),
            json!({ "mandatory": 5, "complementary": "morxyz" }),
        ] {
            let response = post_json(app(&["amor"]), "/api/v1/words/search", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        for uri in [
            "/api/v1/words/search",
            "/api/v1/words/export",
            "/api/v1/tokens/validate",
        ] {
            let response = app(&["amor"])
                .oneshot(
                    Request::post(uri)
                        .body(Body::from(r#"{"mandatory":"a","complementary":"morxyz"}"#))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_validation_runs_before_vocabulary_load() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(VocabularyCache::new(dir.path().join("missing.txt")));
        let response = post_json(
            app,
            "/api/v1/words/search",
            json!({ "mandatory": "", "complementary": "morxyz" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_vocabulary_is_service_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(VocabularyCache::new(dir.path().join("missing.txt")));
        let response = post_json(
            app,
            "/api/v1/words/search",
            json!({ "mandatory": "a", "complementary": "morxyz" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VOCABULARY_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_export_is_plain_text_attachment() {
        let response = post_json(
            app(&["roma", "amor", "aroma"]),
            "/api/v1/words/export",
            json!({ "mandatory": "a", "complementary": "morxyz" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"palavras_encontradas.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"amor\nroma\naroma");
    }

    #[tokio::test]
    async fn test_vocabulary_summary() {
        let response = app(&["amor", "roma"])
            .oneshot(
                Request::get("/api/v1/vocabulary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["entries"], 2);
        assert_eq!(body["source"], "test");
    }

    #[tokio::test]
    async fn test_validate_token() {
        let response = post_json(
            app(&[]),
            "/api/v1/tokens/validate",
            json!({ "word": "bom dia" }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["backend"], "alphabetic");
    }
}
