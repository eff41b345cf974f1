//! 게임 서비스 세션 관리
//!
//! 벤더 게임 서비스 클라이언트(인증, 업적, 리더보드, 클라우드 스냅샷)에 대한
//! 세션 계층입니다. 모든 오퍼레이션은 권한 확인 후 벤더로 전달만 하며,
//! 실패는 이 계층에서 종결됩니다(로그만 남기고 폐기).
//!
//! 전역 싱글턴 대신 명시적으로 생성/주입하는 서비스 객체로 구성되어
//! 테스트가 독립 인스턴스를 들 수 있습니다.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use shared::config::PlatformConfig;
use shared::model::{AuthEvent, AuthOperation, AuthStatus, LogVerbosity, UiStatus};
use shared::tool::error::AppError;
use shared::traits::{ClientBuildSettings, ClientFactory, GameServicesClient};

use crate::error::{PlayLinkError, PlayLinkResult};

/// 게임 서비스 세션 서비스
///
/// 벤더 클라이언트 핸들을 단독 소유합니다. 핸들은 `initialize`에서 최대
/// 한 번만 생성되며, 생성 전의 모든 오퍼레이션은 로그만 남기는 무시 동작입니다.
pub struct SessionService {
    factory: Arc<dyn ClientFactory>,
    client: Mutex<Option<Arc<dyn GameServicesClient>>>,
    signed_in: Arc<AtomicBool>,
    pub(crate) current_snapshot: Mutex<String>,
}

impl SessionService {
    /// 새 세션 서비스 생성 (클라이언트는 아직 만들지 않음)
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            factory,
            client: Mutex::new(None),
            signed_in: Arc::new(AtomicBool::new(false)),
            current_snapshot: Mutex::new(String::new()),
        }
    }

    /// 벤더 클라이언트 초기화 (멱등)
    ///
    /// 첫 호출에서만 팩토리를 통해 클라이언트를 생성하고 인증 이벤트 펌프를
    /// 띄웁니다. 이미 핸들이 있으면 로그만 남기고 반환합니다.
    pub fn initialize(&self, config: &PlatformConfig) -> PlayLinkResult<()> {
        info!("Initializing services");

        let mut guard = self.client.lock();
        if guard.is_some() {
            info!("Services already created, skipping");
            return Ok(());
        }

        config
            .validate()
            .map_err(|e| PlayLinkError::ConfigError(e.to_string()))?;

        let (tx, rx) = mpsc::unbounded_channel();
        let settings = ClientBuildSettings {
            auth_events: tx,
            log_verbosity: LogVerbosity::Verbose,
            enable_snapshots: true,
        };

        let client = self
            .factory
            .create(config, settings)
            .map_err(|e| PlayLinkError::ClientBuildError(e.to_string()))?;

        *guard = Some(client);
        drop(guard);

        self.spawn_auth_pump(rx);
        info!("Created");
        Ok(())
    }

    /// 인증 이벤트 펌프 기동
    ///
    /// 세션 상태(signed_in) 변경은 오직 이 태스크 안에서만 일어납니다.
    /// 호출 측은 전달 호출이 동기적으로 완료됐다고 가정하면 안 됩니다.
    fn spawn_auth_pump(&self, mut rx: mpsc::UnboundedReceiver<AuthEvent>) {
        let signed_in = Arc::clone(&self.signed_in);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    AuthEvent::Started(op) => {
                        info!("Auth action started: {}", op.as_str());
                        match op {
                            AuthOperation::SignIn => info!("Signing in"),
                            AuthOperation::SignOut => info!("Signing out"),
                        }
                    }
                    AuthEvent::Finished(op, status) => {
                        info!(
                            "Auth action finished: {} with status {}",
                            op.as_str(),
                            status.as_str()
                        );
                        signed_in.store(status.is_valid(), Ordering::SeqCst);
                        match status {
                            AuthStatus::Valid => info!("Signed in"),
                            AuthStatus::ErrorInternal
                            | AuthStatus::ErrorNotAuthorized
                            | AuthStatus::ErrorVersionUpdateRequired
                            | AuthStatus::ErrorTimeout => {
                                warn!("Sign-in failure: {}", status.as_str())
                            }
                        }
                    }
                }
            }
            debug!("Auth event channel closed");
        });
    }

    /// 현재 클라이언트 핸들을 얻습니다.
    pub(crate) fn client(&self) -> PlayLinkResult<Arc<dyn GameServicesClient>> {
        self.client
            .lock()
            .clone()
            .ok_or(PlayLinkError::NotInitialized)
    }

    /// 마지막 인증 통지 기준의 로그인 상태
    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    /// 현재 활성 스냅샷 파일명 (빈 문자열 = 없음)
    pub fn current_snapshot(&self) -> String {
        self.current_snapshot.lock().clone()
    }

    /// 사용자 주도 로그인 시작
    ///
    /// 미인증 상태일 때만 벤더 로그인 플로우를 띄웁니다. 결과는 인증
    /// 이벤트로 도착합니다.
    pub async fn begin_sign_in(&self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("begin_sign_in");
                return;
            }
        };

        if !client.is_authorized() {
            info!("StartAuthorizationUI");
            client.start_authorization_ui().await;
        }
    }

    /// 로그아웃
    ///
    /// 인증 상태일 때만 전달합니다.
    pub async fn sign_out(&self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("sign_out");
                return;
            }
        };

        if client.is_authorized() {
            info!("SignOut");
            client.sign_out().await;
        }
    }

    /// 업적 해제 (fire-and-forget)
    pub fn unlock_achievement(&self, achievement_id: &str) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("unlock_achievement");
                return;
            }
        };

        if client.is_authorized() {
            info!("Achievement unlocked: {}", achievement_id);
            client.unlock_achievement(achievement_id);
        }
    }

    /// 리더보드 점수 제출 (fire-and-forget)
    pub fn submit_score(&self, leaderboard_id: &str, score: u64) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("submit_score");
                return;
            }
        };

        if client.is_authorized() {
            info!("High score submitted: {} -> {}", score, leaderboard_id);
            client.submit_score(leaderboard_id, score);
        }
    }

    /// 전체 업적 UI 표시
    pub async fn show_achievements_ui(&self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("show_achievements_ui");
                return;
            }
        };

        if client.is_authorized() {
            info!("Show achievements");
            let status = client.show_achievements_ui().await;
            log_ui_dismissed("Achievements", status);
        }
    }

    /// 리더보드 UI 표시
    pub async fn show_leaderboard_ui(&self, leaderboard_id: &str) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                AppError::from(e).log("show_leaderboard_ui");
                return;
            }
        };

        if client.is_authorized() {
            info!("Show leaderboard: {}", leaderboard_id);
            let status = client.show_leaderboard_ui(leaderboard_id).await;
            log_ui_dismissed("Leaderboard", status);
        }
    }
}

/// UI 종료 상태 로깅 (상태만 남기고 상태 변경 없음)
fn log_ui_dismissed(which: &str, status: UiStatus) {
    if status.is_valid() {
        info!("{} UI shown", which);
    } else {
        warn!("{} UI dismissed with {}", which, status.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockClientFactory;
    use std::time::Duration;

    async fn wait_for_pump() {
        // 펌프 태스크가 이벤트를 소비할 시간
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    fn new_service() -> (SessionService, Arc<MockClientFactory>) {
        let factory = Arc::new(MockClientFactory::new());
        let service = SessionService::new(factory.clone());
        (service, factory)
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (service, factory) = new_service();

        service.initialize(&PlatformConfig::default()).unwrap();
        service.initialize(&PlatformConfig::default()).unwrap();
        service.initialize(&PlatformConfig::default()).unwrap();

        assert_eq!(factory.created_count(), 1);
    }

    #[tokio::test]
    async fn test_initialize_registers_snapshot_capability() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();

        let client = factory.client().unwrap();
        assert!(client.snapshots_enabled);
        assert_eq!(client.log_verbosity, LogVerbosity::Verbose);
    }

    #[tokio::test]
    async fn test_initialize_rejects_invalid_config() {
        let (service, factory) = new_service();
        let config = PlatformConfig {
            client_id: "".to_string(),
            ..Default::default()
        };

        let result = service.initialize(&config);
        assert!(matches!(result, Err(PlayLinkError::ConfigError(_))));
        assert_eq!(factory.created_count(), 0);
    }

    #[tokio::test]
    async fn test_operations_before_initialize_are_ignored() {
        let (service, _factory) = new_service();

        // 클라이언트가 없으면 모두 무시 동작
        service.begin_sign_in().await;
        service.unlock_achievement("ach1");
        service.submit_score("lb1", 100);
        service.show_achievements_ui().await;
        assert!(!service.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_guard() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();
        let client = factory.client().unwrap();

        // 미인증 → 로그인 플로우 시작
        service.begin_sign_in().await;
        assert_eq!(client.auth_ui_calls(), 1);

        // 이미 인증됨 → 재호출 무시
        client.set_authorized(true);
        service.begin_sign_in().await;
        assert_eq!(client.auth_ui_calls(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_guard() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();
        let client = factory.client().unwrap();

        // 미인증 → 무시
        service.sign_out().await;
        assert_eq!(client.sign_out_calls(), 0);

        client.set_authorized(true);
        service.sign_out().await;
        assert_eq!(client.sign_out_calls(), 1);
    }

    #[tokio::test]
    async fn test_forwarding_requires_authorization() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();
        let client = factory.client().unwrap();

        service.unlock_achievement("ach1");
        service.submit_score("lb1", 500);
        service.show_achievements_ui().await;
        service.show_leaderboard_ui("lb1").await;

        assert!(client.unlocked().is_empty());
        assert!(client.submitted().is_empty());
        assert_eq!(client.ui_shown_calls(), 0);

        client.set_authorized(true);
        service.unlock_achievement("ach1");
        service.submit_score("lb1", 500);
        service.show_achievements_ui().await;
        service.show_leaderboard_ui("lb1").await;

        assert_eq!(client.unlocked(), vec!["ach1".to_string()]);
        assert_eq!(client.submitted(), vec![("lb1".to_string(), 500)]);
        assert_eq!(client.ui_shown_calls(), 2);
    }

    #[tokio::test]
    async fn test_auth_outcome_mapping() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();
        let client = factory.client().unwrap();

        client.emit_auth_finished(AuthOperation::SignIn, AuthStatus::Valid);
        wait_for_pump().await;
        assert!(service.is_signed_in());

        client.emit_auth_finished(AuthOperation::SignIn, AuthStatus::ErrorTimeout);
        wait_for_pump().await;
        assert!(!service.is_signed_in());

        client.emit_auth_finished(AuthOperation::SignIn, AuthStatus::Valid);
        wait_for_pump().await;
        assert!(service.is_signed_in());

        client.emit_auth_finished(AuthOperation::SignOut, AuthStatus::ErrorNotAuthorized);
        wait_for_pump().await;
        assert!(!service.is_signed_in());
    }

    #[tokio::test]
    async fn test_submit_score_end_to_end() {
        let (service, factory) = new_service();
        service.initialize(&PlatformConfig::default()).unwrap();
        let client = factory.client().unwrap();

        // 미인증 → 제출 안 됨
        service.submit_score("lb1", 500);
        assert!(client.submitted().is_empty());

        // 인증 성공 시뮬레이션 후 재호출 → 정확히 한 번 전달
        client.set_authorized(true);
        client.emit_auth_finished(AuthOperation::SignIn, AuthStatus::Valid);
        wait_for_pump().await;
        assert!(service.is_signed_in());

        service.submit_score("lb1", 500);
        assert_eq!(client.submitted(), vec![("lb1".to_string(), 500)]);
    }
}
