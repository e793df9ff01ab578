mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::ApiContext;
use nutrimatch_core::domain::{
    food_analysis::entities::AnalysisResult, history::entities::HistorySnapshot,
};
use serde_json::Value;
use test_context::test_context;

fn assert_valid_shape(result: &AnalysisResult) {
    assert!(!result.ingredients.is_empty());
    assert!(result.percentages().iter().all(|p| *p <= 100));
    assert!(result.ingredients_analyzed >= 1);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_text_without_model(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze/text")
        .form(&[("profile_id", "keto"), ("ingredients", "sugar, wheat flour, water")])
        .await;

    response.assert_status_ok();
    let result: AnalysisResult = response.json();
    assert_eq!(result.persona_used, "Keto (Low-Carb)");
    assert_eq!(result.ingredients_analyzed, 3);
    assert_valid_shape(&result);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_text_with_empty_ingredients(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze/text")
        .form(&[("profile_id", "keto"), ("ingredients", "")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_text_without_ingredients_field(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze/text")
        .form(&[("profile_id", "keto")])
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_without_any_input(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze")
        .form(&[("profile_id", "celiac")])
        .await;

    response.assert_status_bad_request();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_without_profile(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze")
        .form(&[("ingredients", "water")])
        .await;

    response.assert_status_bad_request();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_unknown_profile_uses_default(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/analyze")
        .form(&[("profile_id", "astronaut"), ("ingredients", "water, salt")])
        .await;

    response.assert_status_ok();
    let result: AnalysisResult = response.json();
    assert_eq!(result.persona_used, "Clean Label Purist");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_multipart_with_unreadable_image(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("profile_id", "diabetic").add_part(
        "image",
        Part::bytes(b"definitely not a picture".to_vec())
            .file_name("label.png")
            .mime_type("image/png"),
    );

    let response = ctx.server.post("/analyze").multipart(form).await;

    response.assert_status_ok();
    let result: AnalysisResult = response.json();
    assert_eq!(result.persona_used, "Diabetic (Low-Glycemic)");
    assert_valid_shape(&result);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_analyze_multipart_text_only(ctx: &mut ApiContext) {
    let form = MultipartForm::new()
        .add_text("profile_id", "bodybuilder")
        .add_text("ingredients", "whey protein, cocoa")
        .add_text("allergies", "soy");

    let response = ctx.server.post("/analyze").multipart(form).await;

    response.assert_status_ok();
    let result: AnalysisResult = response.json();
    assert_eq!(result.persona_used, "Bodybuilder (High-Protein)");
    assert_eq!(result.ingredients_analyzed, 2);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_history_keeps_the_last_ten_scans(ctx: &mut ApiContext) {
    for _ in 0..15 {
        ctx.server
            .post("/analyze/text")
            .form(&[("profile_id", "migraine"), ("ingredients", "msg, salt")])
            .await
            .assert_status_ok();
    }

    let response = ctx.server.get("/history").await;

    response.assert_status_ok();
    let history: HistorySnapshot = response.json();
    assert_eq!(history.total_scans, 10);
    assert_eq!(history.recent_scans.len(), 3);
    assert!(history.recent_scans.iter().all(|r| r.profile == "migraine"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_history_starts_empty(ctx: &mut ApiContext) {
    let history: HistorySnapshot = ctx.server.get("/history").await.json();

    assert_eq!(history.total_scans, 0);
    assert!(history.recent_scans.is_empty());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_available_models_reports_error_in_body(ctx: &mut ApiContext) {
    let response = ctx.server.get("/available-models").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert!(body.get("models").is_none());
}
