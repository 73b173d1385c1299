//! Ping Handler
//!
//! 健康检查，同时返回当前生效的默认分章参数

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub default_mode: &'static str,
    pub default_target_chars: usize,
}

pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        default_mode: state.defaults.mode.as_str(),
        default_target_chars: state.defaults.target_chars,
    })
}
