use chrono::{DateTime, Local};

pub struct CurrentTime {
    pub current_time: String,
}

impl CurrentTime {
    pub fn new() -> Self {
        let now: DateTime<Local> = Local::now();
        Self {
            current_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// 스냅샷 기본 파일명 스탬프 생성
    ///
    /// `save_` 접두사 + 14자리(연월일시분초) 로컬 시각.
    /// 같은 초 안에서 두 번 저장하면 같은 이름이 나오는 한계가 있습니다.
    pub fn snapshot_stamp() -> String {
        let now: DateTime<Local> = Local::now();
        now.format("save_%Y%m%d%H%M%S").to_string()
    }
}

impl Default for CurrentTime {
    fn default() -> Self {
        Self::new()
    }
}
