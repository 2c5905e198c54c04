//! 공통 응답 엔벨로프
//!
//! 성공/실패를 불문하고 모든 API 응답에 사용되는 표준 구조를 정의합니다.

use serde::Serialize;

/// API 응답의 표준 엔벨로프
///
/// 모든 엔드포인트는 `{success, message, data}` 형태로 응답하며,
/// `data`가 없는 경우 필드 자체가 생략됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseModel<T = serde_json::Value> {
    /// 요청 처리 성공 여부
    pub success: bool,
    /// 사용자에게 보여줄 메시지
    pub message: String,
    /// 응답 데이터 (없으면 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ResponseModel<T> {
    /// 데이터를 포함한 성공 응답을 생성합니다
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ResponseModel {
    /// 데이터 없는 실패 응답을 생성합니다
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
