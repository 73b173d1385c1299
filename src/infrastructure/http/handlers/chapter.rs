//! Chapter HTTP Handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::{ApplicationError, SplitNovelFile, SplitNovelText};
use crate::domain::SplitMode;
use crate::infrastructure::http::dto::{ApiResponse, SplitResponse, SplitTextRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 用请求参数覆盖默认分章参数
fn resolve_options(
    state: &AppState,
    mode: Option<&str>,
    target_chars: Option<usize>,
) -> Result<(SplitMode, usize), ApiError> {
    let mode = match mode {
        Some(mode) => mode
            .parse::<SplitMode>()
            .map_err(ApplicationError::from)?,
        None => state.defaults.mode,
    };
    Ok((mode, target_chars.unwrap_or(state.defaults.target_chars)))
}

/// 对 JSON 提交的文本分章
pub async fn split_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SplitTextRequest>,
) -> Result<Json<ApiResponse<SplitResponse>>, ApiError> {
    let (mode, target_chars) =
        resolve_options(&state, request.mode.as_deref(), request.target_chars)?;

    let result = state
        .split_text_handler
        .handle(SplitNovelText {
            text: request.text,
            mode,
            target_chars,
        })
        .await?;

    Ok(Json(ApiResponse::success(SplitResponse::new(result, None))))
}

/// 上传稿件（.txt / .docx / .pdf）并分章
///
/// multipart 字段：file（必填）、mode、targetChars
pub async fn upload_and_split(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<SplitResponse>>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut mode: Option<String> = None;
    let mut target_chars: Option<usize> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload.txt").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                file = Some((file_name, bytes.to_vec()));
            }
            "mode" => {
                mode = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read mode: {}", e)))?,
                );
            }
            "targetChars" => {
                let raw = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read targetChars: {}", e))
                })?;
                target_chars = Some(raw.trim().parse().map_err(|_| {
                    ApiError::BadRequest(format!("targetChars must be a positive integer: {}", raw))
                })?);
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| ApiError::BadRequest("File is required".to_string()))?;
    let (mode, target_chars) = resolve_options(&state, mode.as_deref(), target_chars)?;

    tracing::info!(
        file_name = %file_name,
        bytes = bytes.len(),
        mode = %mode,
        target_chars,
        "Manuscript uploaded for splitting"
    );

    let result = state
        .split_file_handler
        .handle(SplitNovelFile {
            file_name: file_name.clone(),
            bytes,
            mode,
            target_chars,
        })
        .await?;

    Ok(Json(ApiResponse::success(SplitResponse::new(
        result,
        Some(file_name),
    ))))
}
