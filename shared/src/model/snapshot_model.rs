//! 스냅샷 데이터 모델
//!
//! 벤더 스냅샷 서브시스템과 주고받는 메타데이터/응답 구조체 정의입니다.
//! 스냅샷 바이트와 메타데이터 스키마 자체는 벤더 백엔드 소유입니다.

use bytes::Bytes;
use std::time::Duration;

use crate::model::status::{ResponseStatus, UiStatus};

/// 벤더 측이 보유한 스냅샷 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMetadata {
    /// 스냅샷 슬롯 파일명
    pub file_name: String,
    /// 저장 설명 문구
    pub description: String,
    /// 누적 플레이 시간
    pub played_time: Duration,
    /// 커버 이미지 (PNG 바이트, 비어 있을 수 있음)
    pub cover_image: Bytes,
}

impl SnapshotMetadata {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            description: String::new(),
            played_time: Duration::ZERO,
            cover_image: Bytes::new(),
        }
    }
}

/// 커밋 시 함께 보낼 메타데이터 변경분
///
/// 기존 메타데이터와 실제로 달라진 필드만 채웁니다.
/// 모든 필드가 None이면 페이로드 교체만 일어납니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotMetadataChange {
    pub description: Option<String>,
    pub played_time: Option<Duration>,
    pub cover_image: Option<Bytes>,
}

impl SnapshotMetadataChange {
    /// 변경된 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.played_time.is_none() && self.cover_image.is_none()
    }
}

/// 스냅샷 open 응답
#[derive(Debug, Clone)]
pub struct OpenResponse {
    pub status: ResponseStatus,
    /// 성공 시 열린 슬롯의 메타데이터
    pub data: Option<SnapshotMetadata>,
}

/// 스냅샷 read 응답
#[derive(Debug, Clone)]
pub struct ReadResponse {
    pub status: ResponseStatus,
    /// 성공 시 슬롯 페이로드 바이트
    pub data: Bytes,
}

/// 스냅샷 commit 응답
#[derive(Debug, Clone)]
pub struct CommitResponse {
    pub status: ResponseStatus,
    /// 성공 시 커밋된 슬롯의 갱신된 메타데이터
    pub data: Option<SnapshotMetadata>,
}

/// 스냅샷 선택 UI 응답
#[derive(Debug, Clone)]
pub struct SnapshotSelectUiResponse {
    pub status: UiStatus,
    /// 사용자가 실제 데이터가 있는 슬롯을 고른 경우에만 Some
    pub data: Option<SnapshotMetadata>,
}
