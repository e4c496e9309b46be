use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::models::{AnalysisRequest, ErrorBody};
use crate::orchestrator::app::AppState;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.public_message().to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /analyze`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("请求体无法解析: {}", rejection.body_text());
            return AppError::invalid_input(rejection.body_text()).into_response();
        }
    };

    let Some(text) = request.text else {
        return AppError::invalid_input("缺少 text 字段").into_response();
    };

    match state.flow.run(&text).await {
        Ok(response) => {
            let body = response.into_body(state.scores_version);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            if !matches!(e, AppError::InvalidInput(_)) {
                error!("❌ 分析失败: {}", e);
            }
            e.into_response()
        }
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

/// 记录每个 HTTP 请求
pub async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        "http request"
    );
    response
}
