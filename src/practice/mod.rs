//! 타자 연습 엔진
//!
//! 목표 문장과 학습자의 입력 버퍼를 받아 글자별 검증, 통계, 다음 키 안내, 문장 큐
//! 진행을 담당합니다. 화면 표시와 기록 저장은 호출자가 맡습니다.
//!
//! # 사용 예시
//!
//! ```
//! use taja::practice::{Phase, Session, Status};
//!
//! let mut session = Session::new("가나");
//! session.on_input("간"); // ㄴ이 아직 받침에 붙어 있는 중
//! assert_eq!(session.statuses(), &[Status::Pending]);
//! assert_eq!(session.on_input("가나"), Phase::Complete);
//! ```

pub mod advisor;
pub mod content;
pub mod metrics;
pub mod queue;
pub mod session;
pub mod validator;

pub use advisor::{advise, Advice};
pub use content::{load_items, ContentError, PracticeItem, PracticeKind};
pub use metrics::SessionStats;
pub use queue::{ItemResult, PracticeQueue, QueueEvent, QueueTotals};
pub use session::{Phase, Session};
pub use validator::{check_input, Status};
