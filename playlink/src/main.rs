//! PlayLink 세션 스모크 하네스
//!
//! 스텁 벤더 클라이언트에 대고 전체 플로우(로그인 → 업적/점수 → 스냅샷
//! 저장 → 선택/로드 → 로그아웃)를 한 번 돌려봅니다. 실제 플랫폼 서비스는
//! 필요 없습니다.

use anyhow::Result;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use playlink::{SessionService, StubClientFactory};
use shared::config::PlatformConfig;
use shared::logging::{init_logging, ServiceType};
use shared::tool::error::AppError;
use shared::tool::CurrentTime;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(ServiceType::PlayLink)?;

    let config = PlatformConfig::from_env();
    info!(
        "🎮 PlayLink 세션 하네스 시작 ({})",
        CurrentTime::new().current_time
    );
    info!("설정: {}", serde_json::to_string(&config)?);

    let factory = Arc::new(StubClientFactory::new());
    let session = SessionService::new(factory.clone());

    if let Err(e) = session.initialize(&config) {
        AppError::from(e).log("service initialize");
        anyhow::bail!("세션 초기화 실패");
    }

    // 로그인
    session.begin_sign_in().await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    info!("로그인 상태: {}", session.is_signed_in());

    // 업적/리더보드
    session.unlock_achievement("ach_first_run");
    session.submit_score("lb_high_score", 500);
    session.show_achievements_ui().await;
    session.show_leaderboard_ui("lb_high_score").await;

    // 스냅샷 저장 → 선택/로드
    session
        .save_snapshot(
            "첫 저장",
            Duration::from_secs(90),
            Bytes::new(),
            Bytes::from_static(b"game-state-v1"),
        )
        .await;
    info!("현재 스냅샷: {}", session.current_snapshot());

    session
        .select_snapshot("저장 파일 선택", 5, true, true)
        .await;

    if let Some(client) = factory.client() {
        info!("✅ 해제된 업적: {:?}", client.unlocked());
        info!("✅ 제출된 점수: {:?}", client.submitted());
        info!("✅ 저장된 슬롯 수: {}", client.slot_count());
    }

    // 로그아웃
    session.sign_out().await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    info!("로그인 상태: {}", session.is_signed_in());

    info!("=== 하네스 완료 ===");
    Ok(())
}
