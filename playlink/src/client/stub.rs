//! 인프로세스 스텁 벤더 클라이언트
//!
//! 실제 플랫폼 게임 서비스 없이 세션 계층을 돌려보기 위한 구현입니다.
//! 슬롯은 메모리 해시맵에 저장되며, 인증은 항상 성공하는 것으로
//! 시뮬레이션합니다. 스모크 하네스(main)와 통합 테스트가 사용합니다.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use shared::config::PlatformConfig;
use shared::model::{
    AuthEvent, AuthOperation, AuthStatus, CommitResponse, OpenResponse, ReadResponse,
    ResponseStatus, SnapshotConflictPolicy, SnapshotMetadata, SnapshotMetadataChange,
    SnapshotSelectUiResponse, UiStatus,
};
use shared::traits::{ClientBuildSettings, ClientFactory, GameServicesClient};

/// 메모리에 저장되는 스냅샷 슬롯
#[derive(Debug, Clone)]
struct StoredSlot {
    metadata: SnapshotMetadata,
    payload: Bytes,
}

/// 스텁 게임 서비스 클라이언트
pub struct StubGameServices {
    authorized: AtomicBool,
    auth_events: UnboundedSender<AuthEvent>,
    snapshots_enabled: bool,
    slots: Mutex<HashMap<String, StoredSlot>>,
    unlocked: Mutex<Vec<String>>,
    submitted: Mutex<Vec<(String, u64)>>,
    /// 통합 테스트용: 다음 선택 UI 응답을 강제로 지정
    select_script: Mutex<VecDeque<SnapshotSelectUiResponse>>,
}

impl StubGameServices {
    fn new(settings: ClientBuildSettings) -> Self {
        Self {
            authorized: AtomicBool::new(false),
            auth_events: settings.auth_events,
            snapshots_enabled: settings.enable_snapshots,
            slots: Mutex::new(HashMap::new()),
            unlocked: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            select_script: Mutex::new(VecDeque::new()),
        }
    }

    /// 지금까지 해제된 업적 ID 목록
    pub fn unlocked(&self) -> Vec<String> {
        self.unlocked.lock().clone()
    }

    /// 지금까지 제출된 (리더보드, 점수) 목록
    pub fn submitted(&self) -> Vec<(String, u64)> {
        self.submitted.lock().clone()
    }

    /// 저장된 슬롯 개수
    pub fn slot_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// 슬롯 페이로드 조회 (하네스 검증용)
    pub fn slot_payload(&self, file_name: &str) -> Option<Bytes> {
        self.slots.lock().get(file_name).map(|s| s.payload.clone())
    }

    /// 다음 선택 UI 호출이 돌려줄 응답을 지정
    pub fn script_select_response(&self, response: SnapshotSelectUiResponse) {
        self.select_script.lock().push_back(response);
    }

    /// 기본 선택 동작: 플레이 시간이 가장 긴 슬롯을 고른 것으로 시뮬레이션
    fn pick_longest_playtime(&self) -> Option<SnapshotMetadata> {
        self.slots
            .lock()
            .values()
            .max_by_key(|slot| slot.metadata.played_time)
            .map(|slot| slot.metadata.clone())
    }
}

#[async_trait]
impl GameServicesClient for StubGameServices {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }

    async fn start_authorization_ui(&self) {
        let _ = self
            .auth_events
            .send(AuthEvent::Started(AuthOperation::SignIn));
        // 스텁 환경에서는 로그인이 항상 성공
        self.authorized.store(true, Ordering::SeqCst);
        let _ = self
            .auth_events
            .send(AuthEvent::Finished(AuthOperation::SignIn, AuthStatus::Valid));
    }

    async fn sign_out(&self) {
        let _ = self
            .auth_events
            .send(AuthEvent::Started(AuthOperation::SignOut));
        self.authorized.store(false, Ordering::SeqCst);
        let _ = self.auth_events.send(AuthEvent::Finished(
            AuthOperation::SignOut,
            AuthStatus::ErrorNotAuthorized,
        ));
    }

    fn unlock_achievement(&self, achievement_id: &str) {
        debug!("스텁: 업적 해제 {}", achievement_id);
        self.unlocked.lock().push(achievement_id.to_string());
    }

    fn submit_score(&self, leaderboard_id: &str, score: u64) {
        debug!("스텁: 점수 제출 {} -> {}", score, leaderboard_id);
        self.submitted.lock().push((leaderboard_id.to_string(), score));
    }

    async fn show_achievements_ui(&self) -> UiStatus {
        UiStatus::Valid
    }

    async fn show_leaderboard_ui(&self, _leaderboard_id: &str) -> UiStatus {
        UiStatus::Valid
    }

    async fn open_snapshot(
        &self,
        file_name: &str,
        _policy: SnapshotConflictPolicy,
    ) -> OpenResponse {
        if !self.snapshots_enabled {
            warn!("스텁: 스냅샷 기능이 비활성화된 클라이언트");
            return OpenResponse {
                status: ResponseStatus::ErrorInternal,
                data: None,
            };
        }

        // create-or-reuse: 없으면 빈 슬롯 생성
        let mut slots = self.slots.lock();
        let slot = slots
            .entry(file_name.to_string())
            .or_insert_with(|| StoredSlot {
                metadata: SnapshotMetadata::new(file_name),
                payload: Bytes::new(),
            });

        OpenResponse {
            status: ResponseStatus::Valid,
            data: Some(slot.metadata.clone()),
        }
    }

    async fn read_snapshot(&self, metadata: &SnapshotMetadata) -> ReadResponse {
        match self.slots.lock().get(&metadata.file_name) {
            Some(slot) => ReadResponse {
                status: ResponseStatus::Valid,
                data: slot.payload.clone(),
            },
            None => ReadResponse {
                status: ResponseStatus::ErrorInternal,
                data: Bytes::new(),
            },
        }
    }

    async fn commit_snapshot(
        &self,
        metadata: &SnapshotMetadata,
        change: SnapshotMetadataChange,
        payload: Bytes,
    ) -> CommitResponse {
        let mut slots = self.slots.lock();
        let slot = slots
            .entry(metadata.file_name.clone())
            .or_insert_with(|| StoredSlot {
                metadata: metadata.clone(),
                payload: Bytes::new(),
            });

        if let Some(description) = change.description {
            slot.metadata.description = description;
        }
        if let Some(played_time) = change.played_time {
            slot.metadata.played_time = played_time;
        }
        if let Some(cover_image) = change.cover_image {
            slot.metadata.cover_image = cover_image;
        }
        slot.payload = payload;

        CommitResponse {
            status: ResponseStatus::Valid,
            data: Some(slot.metadata.clone()),
        }
    }

    async fn show_snapshot_select_ui(
        &self,
        _allow_create: bool,
        _allow_delete: bool,
        _max_snapshots: u32,
        _title: &str,
    ) -> SnapshotSelectUiResponse {
        if let Some(scripted) = self.select_script.lock().pop_front() {
            return scripted;
        }

        SnapshotSelectUiResponse {
            status: UiStatus::Valid,
            data: self.pick_longest_playtime(),
        }
    }
}

/// 스텁 클라이언트 팩토리
///
/// 생성 횟수를 세고 마지막으로 만든 클라이언트를 보관해 하네스와
/// 테스트가 내부 상태를 들여다볼 수 있게 합니다.
pub struct StubClientFactory {
    created: AtomicUsize,
    client: Mutex<Option<Arc<StubGameServices>>>,
}

impl StubClientFactory {
    pub fn new() -> Self {
        Self {
            created: AtomicUsize::new(0),
            client: Mutex::new(None),
        }
    }

    /// 팩토리가 실제로 생성한 클라이언트 수
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> Option<Arc<StubGameServices>> {
        self.client.lock().clone()
    }
}

impl Default for StubClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientFactory for StubClientFactory {
    fn create(
        &self,
        config: &PlatformConfig,
        settings: ClientBuildSettings,
    ) -> Result<Arc<dyn GameServicesClient>> {
        debug!("스텁 클라이언트 생성: {}", config.package_name);
        self.created.fetch_add(1, Ordering::SeqCst);
        let client = Arc::new(StubGameServices::new(settings));
        *self.client.lock() = Some(client.clone());
        Ok(client)
    }
}
