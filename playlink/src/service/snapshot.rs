//! 클라우드 스냅샷 저장/선택 워크플로
//!
//! 유일하게 분기 로직이 있는 부분입니다.
//! - 저장: (이름 생성) → open → 메타데이터 diff → commit
//! - 선택: select UI → open → read
//!
//! 순서 불변식: open이 항상 read/commit에 선행하며, open 실패는 이후
//! 체인을 중단시킵니다. 중첩 콜백 대신 순차 await로 구성합니다.

use bytes::Bytes;
use std::time::Duration;
use tracing::{debug, info, warn};

use shared::model::{
    ResponseStatus, SnapshotConflictPolicy, SnapshotMetadata, SnapshotMetadataChange, UiStatus,
};
use shared::tool::error::AppError;
use shared::tool::CurrentTime;

use super::session_service::SessionService;

impl SessionService {
    /// 스냅샷 저장
    ///
    /// 활성 스냅샷 이름이 없으면 `save_YYYYMMDDHHMMSS` 형식으로 생성해
    /// 기록한 뒤 그 이름으로 저장합니다. 같은 초 안의 두 번째 저장은 같은
    /// 이름을 다시 쓰는 한계가 있습니다.
    ///
    /// open 실패 시 요청은 폐기됩니다(재시도/전파 없음).
    pub async fn save_snapshot(
        &self,
        description: &str,
        playtime: Duration,
        cover_png: Bytes,
        payload: Bytes,
    ) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("save_snapshot");
                return;
            }
        };

        let file_name = {
            let mut current = self.current_snapshot.lock();
            if current.is_empty() {
                *current = CurrentTime::snapshot_stamp();
                info!("New snapshot name is: {}", current);
            }
            current.clone()
        };

        info!("Saving snapshot {}", file_name);
        debug!("Snapshot description: {}", description);

        let open = client
            .open_snapshot(&file_name, SnapshotConflictPolicy::LongestPlaytime)
            .await;

        if !open.status.is_success() {
            // open 실패 → 저장 요청 폐기
            warn!(
                "Snapshot OpenResponse {} - dropping save request",
                open.status.as_str()
            );
            return;
        }

        let metadata = open
            .data
            .unwrap_or_else(|| SnapshotMetadata::new(&file_name));
        let change = diff_metadata(&metadata, description, playtime, &cover_png);

        let commit = client.commit_snapshot(&metadata, change, payload).await;
        log_snapshot_response("CommitResponse", commit.status);
    }

    /// 스냅샷 선택 UI 표시
    ///
    /// 데이터가 있는 슬롯을 고르면 그 파일명을 활성 스냅샷으로 기록하고
    /// open → read까지 진행합니다. 데이터 없는 유효 선택이면 활성 스냅샷을
    /// 해제하고, 에러 상태면 상태만 로그로 남기고 아무것도 바꾸지 않습니다.
    pub async fn select_snapshot(
        &self,
        title: &str,
        max_snapshots: u32,
        allow_delete: bool,
        allow_create: bool,
    ) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("select_snapshot");
                return;
            }
        };

        info!("Listing snapshots");
        debug!("Select UI title: {}", title);

        let response = client
            .show_snapshot_select_ui(allow_create, allow_delete, max_snapshots, title)
            .await;

        match response.status {
            UiStatus::Valid => match response.data {
                Some(selected) => {
                    {
                        let mut current = self.current_snapshot.lock();
                        *current = selected.file_name.clone();
                    }
                    info!("Loading snapshot {}", selected.file_name);

                    let open = client
                        .open_snapshot(
                            &selected.file_name,
                            SnapshotConflictPolicy::LongestPlaytime,
                        )
                        .await;

                    if !open.status.is_success() {
                        warn!("Snapshot OpenResponse {}", open.status.as_str());
                        return;
                    }

                    info!("Reading file");
                    let opened = open.data.unwrap_or(selected);
                    let read = client.read_snapshot(&opened).await;
                    log_snapshot_response("ReadResponse", read.status);
                }
                None => {
                    // 유효하지만 데이터 없는 선택 → 활성 스냅샷 해제
                    self.current_snapshot.lock().clear();
                    info!("Selection valid but empty, clearing current snapshot");
                }
            },
            UiStatus::ErrorInternal => warn!("Snapshot SelectUIResponse ERROR_INTERNAL"),
            UiStatus::ErrorNotAuthorized => {
                warn!("Snapshot SelectUIResponse ERROR_NOT_AUTHORIZED")
            }
            UiStatus::ErrorVersionUpdateRequired => {
                warn!("Snapshot SelectUIResponse ERROR_VERSION_UPDATE_REQUIRED")
            }
            UiStatus::ErrorTimeout => warn!("Snapshot SelectUIResponse ERROR_TIMEOUT"),
            UiStatus::ErrorCanceled => warn!("Snapshot SelectUIResponse ERROR_CANCELED"),
            UiStatus::ErrorUiBusy => warn!("Snapshot SelectUIResponse ERROR_UI_BUSY"),
            UiStatus::ErrorLeftRoom => warn!("Snapshot SelectUIResponse ERROR_LEFT_ROOM"),
        }
    }
}

/// 기존 메타데이터와 저장 요청의 차이만 변경분으로 구성
///
/// 설명/플레이 시간은 기존 값과 다를 때만, 커버 이미지는 요청에 실제
/// 바이트가 있을 때만 포함합니다.
fn diff_metadata(
    existing: &SnapshotMetadata,
    description: &str,
    playtime: Duration,
    cover_png: &Bytes,
) -> SnapshotMetadataChange {
    let mut change = SnapshotMetadataChange::default();

    if existing.description != description {
        change.description = Some(description.to_string());
    }
    if existing.played_time != playtime {
        change.played_time = Some(playtime);
    }
    if !cover_png.is_empty() {
        change.cover_image = Some(cover_png.clone());
    }

    change
}

/// 스냅샷 응답 상태 로깅
///
/// 상태값별로 구분되는 한 줄을 남깁니다. 구분은 `as_str`의 전체 매칭이
/// 보증합니다.
fn log_snapshot_response(family: &str, status: ResponseStatus) {
    if status.is_success() {
        info!("Snapshot {} {}", family, status.as_str());
    } else {
        warn!("Snapshot {} {}", family, status.as_str());
    }
}
