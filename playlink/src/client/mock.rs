//! 테스트용 기록 클라이언트
//!
//! 벤더로 나가는 호출을 전부 기록하고, open/select 응답을 스크립트로
//! 밀어넣을 수 있는 목입니다. 인증 완료 통지는 테스트가 직접 발생시킵니다.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use shared::config::PlatformConfig;
use shared::model::{
    AuthEvent, AuthOperation, AuthStatus, CommitResponse, LogVerbosity, OpenResponse,
    ReadResponse, ResponseStatus, SnapshotConflictPolicy, SnapshotMetadata,
    SnapshotMetadataChange, SnapshotSelectUiResponse, UiStatus,
};
use shared::traits::{ClientBuildSettings, ClientFactory, GameServicesClient};

pub struct MockGameServices {
    authorized: AtomicBool,
    auth_events: UnboundedSender<AuthEvent>,
    pub log_verbosity: LogVerbosity,
    pub snapshots_enabled: bool,

    auth_ui_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
    ui_shown_calls: AtomicUsize,
    unlocked: Mutex<Vec<String>>,
    submitted: Mutex<Vec<(String, u64)>>,

    opens: Mutex<Vec<String>>,
    reads: Mutex<Vec<String>>,
    commits: Mutex<Vec<(SnapshotMetadata, SnapshotMetadataChange, Bytes)>>,
    open_script: Mutex<VecDeque<OpenResponse>>,
    select_script: Mutex<VecDeque<SnapshotSelectUiResponse>>,
}

impl MockGameServices {
    fn new(settings: ClientBuildSettings) -> Self {
        Self {
            authorized: AtomicBool::new(false),
            auth_events: settings.auth_events,
            log_verbosity: settings.log_verbosity,
            snapshots_enabled: settings.enable_snapshots,
            auth_ui_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
            ui_shown_calls: AtomicUsize::new(0),
            unlocked: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            opens: Mutex::new(Vec::new()),
            reads: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            open_script: Mutex::new(VecDeque::new()),
            select_script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn set_authorized(&self, value: bool) {
        self.authorized.store(value, Ordering::SeqCst);
    }

    /// 벤더 측 비동기 인증 완료 통지 시뮬레이션
    pub fn emit_auth_finished(&self, op: AuthOperation, status: AuthStatus) {
        let _ = self.auth_events.send(AuthEvent::Finished(op, status));
    }

    pub fn auth_ui_calls(&self) -> usize {
        self.auth_ui_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    pub fn ui_shown_calls(&self) -> usize {
        self.ui_shown_calls.load(Ordering::SeqCst)
    }

    pub fn unlocked(&self) -> Vec<String> {
        self.unlocked.lock().clone()
    }

    pub fn submitted(&self) -> Vec<(String, u64)> {
        self.submitted.lock().clone()
    }

    pub fn opens(&self) -> Vec<String> {
        self.opens.lock().clone()
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }

    pub fn commits(&self) -> Vec<(SnapshotMetadata, SnapshotMetadataChange, Bytes)> {
        self.commits.lock().clone()
    }

    pub fn script_open_response(&self, response: OpenResponse) {
        self.open_script.lock().push_back(response);
    }

    pub fn script_select_response(&self, response: SnapshotSelectUiResponse) {
        self.select_script.lock().push_back(response);
    }
}

#[async_trait]
impl GameServicesClient for MockGameServices {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::SeqCst)
    }

    async fn start_authorization_ui(&self) {
        self.auth_ui_calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.auth_events.send(AuthEvent::Started(AuthOperation::SignIn));
    }

    async fn sign_out(&self) {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .auth_events
            .send(AuthEvent::Started(AuthOperation::SignOut));
    }

    fn unlock_achievement(&self, achievement_id: &str) {
        self.unlocked.lock().push(achievement_id.to_string());
    }

    fn submit_score(&self, leaderboard_id: &str, score: u64) {
        self.submitted.lock().push((leaderboard_id.to_string(), score));
    }

    async fn show_achievements_ui(&self) -> UiStatus {
        self.ui_shown_calls.fetch_add(1, Ordering::SeqCst);
        UiStatus::Valid
    }

    async fn show_leaderboard_ui(&self, _leaderboard_id: &str) -> UiStatus {
        self.ui_shown_calls.fetch_add(1, Ordering::SeqCst);
        UiStatus::Valid
    }

    async fn open_snapshot(
        &self,
        file_name: &str,
        _policy: SnapshotConflictPolicy,
    ) -> OpenResponse {
        self.opens.lock().push(file_name.to_string());
        if let Some(scripted) = self.open_script.lock().pop_front() {
            return scripted;
        }
        OpenResponse {
            status: ResponseStatus::Valid,
            data: Some(SnapshotMetadata::new(file_name)),
        }
    }

    async fn read_snapshot(&self, metadata: &SnapshotMetadata) -> ReadResponse {
        self.reads.lock().push(metadata.file_name.clone());
        ReadResponse {
            status: ResponseStatus::Valid,
            data: Bytes::new(),
        }
    }

    async fn commit_snapshot(
        &self,
        metadata: &SnapshotMetadata,
        change: SnapshotMetadataChange,
        payload: Bytes,
    ) -> CommitResponse {
        self.commits
            .lock()
            .push((metadata.clone(), change, payload));
        CommitResponse {
            status: ResponseStatus::Valid,
            data: Some(metadata.clone()),
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
            data: None,
        }
    }
}

pub struct MockClientFactory {
    created: AtomicUsize,
    client: Mutex<Option<Arc<MockGameServices>>>,
}

impl MockClientFactory {
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

    pub fn client(&self) -> Option<Arc<MockGameServices>> {
        self.client.lock().clone()
    }
}

impl ClientFactory for MockClientFactory {
    fn create(
        &self,
        _config: &PlatformConfig,
        settings: ClientBuildSettings,
    ) -> Result<Arc<dyn GameServicesClient>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        let client = Arc::new(MockGameServices::new(settings));
        *self.client.lock() = Some(client.clone());
        Ok(client)
    }
}
