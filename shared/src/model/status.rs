//! 게임 서비스 상태 코드 정의
//!
//! 벤더 SDK가 오퍼레이션 계열별로 돌려주는 상태 코드를 열거형으로 정의합니다.
//! 계열별 열거형을 합치지 않고 그대로 유지하며, 처리 측에서는 default 분기 없이
//! 전체 매칭을 강제합니다.

use serde::{Deserialize, Serialize};

/// 인증 오퍼레이션 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOperation {
    SignIn,
    SignOut,
}

impl AuthOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthOperation::SignIn => "SIGN_IN",
            AuthOperation::SignOut => "SIGN_OUT",
        }
    }
}

/// 인증 결과 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStatus {
    Valid,
    ErrorInternal,
    ErrorNotAuthorized,
    ErrorVersionUpdateRequired,
    ErrorTimeout,
}

impl AuthStatus {
    /// 로그인 성공 여부
    pub fn is_valid(&self) -> bool {
        matches!(self, AuthStatus::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthStatus::Valid => "VALID",
            AuthStatus::ErrorInternal => "ERROR_INTERNAL",
            AuthStatus::ErrorNotAuthorized => "ERROR_NOT_AUTHORIZED",
            AuthStatus::ErrorVersionUpdateRequired => "ERROR_VERSION_UPDATE_REQUIRED",
            AuthStatus::ErrorTimeout => "ERROR_TIMEOUT",
        }
    }
}

/// 일반 응답 상태 (스냅샷 open/read/commit 계열)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Valid,
    ValidButStale,
    ErrorLicenseCheckFailed,
    ErrorInternal,
    ErrorNotAuthorized,
    ErrorVersionUpdateRequired,
    ErrorTimeout,
}

impl ResponseStatus {
    /// 성공으로 취급되는 상태인지 확인 (stale 데이터도 유효한 응답으로 취급)
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::Valid | ResponseStatus::ValidButStale)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Valid => "VALID",
            ResponseStatus::ValidButStale => "VALID_BUT_STALE",
            ResponseStatus::ErrorLicenseCheckFailed => "ERROR_LICENSE_CHECK_FAILED",
            ResponseStatus::ErrorInternal => "ERROR_INTERNAL",
            ResponseStatus::ErrorNotAuthorized => "ERROR_NOT_AUTHORIZED",
            ResponseStatus::ErrorVersionUpdateRequired => "ERROR_VERSION_UPDATE_REQUIRED",
            ResponseStatus::ErrorTimeout => "ERROR_TIMEOUT",
        }
    }
}

/// UI 오퍼레이션 상태 (업적/리더보드/스냅샷 선택 UI 계열)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiStatus {
    Valid,
    ErrorInternal,
    ErrorNotAuthorized,
    ErrorVersionUpdateRequired,
    ErrorTimeout,
    ErrorCanceled,
    ErrorUiBusy,
    ErrorLeftRoom,
}

impl UiStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, UiStatus::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiStatus::Valid => "VALID",
            UiStatus::ErrorInternal => "ERROR_INTERNAL",
            UiStatus::ErrorNotAuthorized => "ERROR_NOT_AUTHORIZED",
            UiStatus::ErrorVersionUpdateRequired => "ERROR_VERSION_UPDATE_REQUIRED",
            UiStatus::ErrorTimeout => "ERROR_TIMEOUT",
            UiStatus::ErrorCanceled => "ERROR_CANCELED",
            UiStatus::ErrorUiBusy => "ERROR_UI_BUSY",
            UiStatus::ErrorLeftRoom => "ERROR_LEFT_ROOM",
        }
    }
}

/// 스냅샷 충돌 해결 정책
///
/// 여러 기기에서 저장본이 갈라진 경우 어느 쪽을 택할지 벤더 측에 지시합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotConflictPolicy {
    /// 기록된 플레이 시간이 더 긴 쪽을 선택
    LongestPlaytime,
    /// 가장 최근에 수정된 쪽을 선택
    MostRecentlyModified,
}

/// 벤더 로그 싱크 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogVerbosity {
    Verbose,
    Info,
    Warning,
    Error,
}

/// 인증 진행 이벤트
///
/// 벤더 클라이언트가 비동기로 통지하는 인증 진행 상황입니다.
/// 채널을 통해 세션 서비스의 이벤트 펌프로 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    Started(AuthOperation),
    Finished(AuthOperation, AuthStatus),
}
