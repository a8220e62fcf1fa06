//! 연습 문장 하나에 대한 세션 상태 기계
//!
//! `Idle -> Composing -> Complete`. 검증 결과와 통계는 입력 버퍼와 목표 문장에서 매번
//! 새로 계산하며, 저장해 두는 것은 한 번이라도 틀렸던 위치 집합뿐입니다.

use std::collections::BTreeSet;
use std::time::Instant;

use super::advisor::{advise, Advice};
use super::metrics::{self, SessionStats};
use super::validator::{check_committed, check_input, Status};

/// 세션 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 아직 입력 없음
    Idle,
    /// 입력 중
    Composing,
    /// 목표 문장을 정확히 입력함
    Complete,
}

/// 타자 연습 세션
#[derive(Debug, Clone)]
pub struct Session {
    target: Vec<char>,
    input: Vec<char>,
    statuses: Vec<Status>,
    /// 한 번이라도 Incorrect였던 위치
    error_indices: BTreeSet<usize>,
    phase: Phase,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    /// 다음 글자 초성이 받침으로 붙는 경우를 대기로 볼지 여부
    lookahead: bool,
}

impl Session {
    /// 목표 문장으로 새 세션 생성 (빈 문장은 바로 완료 상태)
    pub fn new(target: impl Into<String>) -> Self {
        let mut session = Self {
            target: Vec::new(),
            input: Vec::new(),
            statuses: Vec::new(),
            error_indices: BTreeSet::new(),
            phase: Phase::Idle,
            started_at: None,
            finished_at: None,
            lookahead: true,
        };
        session.reset(Some(target.into()));
        session
    }

    /// 받침 이동 예측 사용 여부 설정
    pub fn with_lookahead(mut self, enabled: bool) -> Self {
        self.lookahead = enabled;
        self
    }

    pub fn set_lookahead(&mut self, enabled: bool) {
        self.lookahead = enabled;
        self.revalidate();
    }

    /// 입력 버퍼가 바뀔 때 호출 (현재 시각 기준)
    pub fn on_input(&mut self, buffer: &str) -> Phase {
        self.on_input_at(buffer, Instant::now())
    }

    /// 입력 버퍼가 바뀔 때 호출
    ///
    /// `buffer`는 입력기가 보여주는 전체 텍스트이며, 마지막 글자는 조합 중일 수 있음
    pub fn on_input_at(&mut self, buffer: &str, now: Instant) -> Phase {
        if self.target.is_empty() {
            return self.phase;
        }

        let mut chars: Vec<char> = buffer.chars().collect();
        if chars.len() > self.target.len() {
            log::warn!(
                "입력이 목표 문장보다 깁니다 ({} > {}), 초과분 무시",
                chars.len(),
                self.target.len()
            );
            chars.truncate(self.target.len());
        }

        if self.started_at.is_none() && !chars.is_empty() {
            log::debug!("첫 입력, 시간 측정 시작");
            self.started_at = Some(now);
        }

        self.input = chars;
        self.revalidate();

        let next_phase = if self.is_fully_correct() {
            Phase::Complete
        } else if self.started_at.is_some() {
            Phase::Composing
        } else {
            Phase::Idle
        };

        if next_phase == Phase::Complete && self.phase != Phase::Complete {
            self.finished_at = Some(now);
            log::info!(
                "문장 완료: {} (오타 위치 {}개)",
                self.target_text(),
                self.error_indices.len()
            );
        } else if next_phase != Phase::Complete {
            self.finished_at = None;
        }

        if next_phase != self.phase {
            log::debug!("세션 단계 변경: {:?} -> {:?}", self.phase, next_phase);
        }
        self.phase = next_phase;
        self.phase
    }

    /// 입력/통계/단계를 초기화하고, 새 목표 문장이 있으면 교체
    pub fn reset(&mut self, new_target: Option<String>) {
        if let Some(target) = new_target {
            self.target = target.chars().collect();
        }
        self.input.clear();
        self.statuses.clear();
        self.error_indices.clear();
        self.started_at = None;
        self.finished_at = None;
        self.phase = if self.target.is_empty() {
            Phase::Complete
        } else {
            Phase::Idle
        };
        log::debug!("세션 초기화: {:?}", self.target_text());
    }

    /// 모든 위치의 상태를 다시 계산
    ///
    /// 마지막 글자만 조합 중일 수 있고, 그 앞은 입력기가 이미 확정한 글자
    fn revalidate(&mut self) {
        let last = self.input.len().checked_sub(1);
        self.statuses = self
            .input
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let target = self.target[i];
                if Some(i) == last {
                    let next = if self.lookahead {
                        self.target.get(i + 1).copied()
                    } else {
                        None
                    };
                    check_input(target, Some(c), next)
                } else {
                    check_committed(target, c)
                }
            })
            .collect();

        for (i, status) in self.statuses.iter().enumerate() {
            if *status == Status::Incorrect && self.error_indices.insert(i) {
                log::debug!(
                    "오타: {}번째 글자 {:?} (목표 {:?})",
                    i,
                    self.input[i],
                    self.target[i]
                );
            }
        }
    }

    fn is_fully_correct(&self) -> bool {
        let all_correct = self.statuses.iter().all(|s| *s == Status::Correct);
        all_correct && self.input.len() == self.target.len()
    }

    /// 목표 문장
    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    /// 현재 입력 버퍼
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// 입력된 위치의 검증 상태 (길이 = 입력 버퍼 길이)
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// 임의 위치의 상태 (입력 전 위치는 Pending)
    pub fn status_at(&self, index: usize) -> Status {
        *self.statuses.get(index).unwrap_or(&Status::Pending)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// 한 번이라도 틀렸던 위치 수
    pub fn error_count(&self) -> usize {
        self.error_indices.len()
    }

    /// 현재 시각 기준 통계
    pub fn stats(&self) -> SessionStats {
        self.stats_at(Instant::now())
    }

    /// 주어진 시각 기준 통계 (완료 후에는 완료 시각에서 멈춤)
    pub fn stats_at(&self, now: Instant) -> SessionStats {
        metrics::compute(
            &self.input,
            &self.statuses,
            self.error_indices.len(),
            self.started_at,
            self.finished_at.unwrap_or(now),
        )
    }

    /// 다음에 눌러야 할 키
    pub fn advice(&self) -> Advice {
        advise(&self.target, &self.input, &self.statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_initial_state() {
        let session = Session::new("안녕");
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.statuses().is_empty());
        assert_eq!(session.status_at(0), Status::Pending);
        assert_eq!(session.stats().started_at, None);
    }

    #[test]
    fn test_first_input_starts_clock() {
        let mut session = Session::new("안녕");
        let t0 = Instant::now();
        assert_eq!(session.on_input_at("ㅇ", t0), Phase::Composing);
        session.on_input_at("아", t0 + Duration::from_secs(1));
        assert_eq!(session.stats_at(t0).started_at, Some(t0));
    }

    #[test]
    fn test_completion_freezes_elapsed() {
        let mut session = Session::new("가나");
        let t0 = Instant::now();
        session.on_input_at("가", t0);
        assert_eq!(
            session.on_input_at("가나", t0 + Duration::from_secs(6)),
            Phase::Complete
        );
        let stats = session.stats_at(t0 + Duration::from_secs(60));
        assert_eq!(stats.elapsed, Duration::from_secs(6));
        assert_eq!(stats.wpm, 20);
    }

    #[test]
    fn test_migration_keeps_previous_char_pending() {
        let mut session = Session::new("가나");
        let t0 = Instant::now();
        session.on_input_at("간", t0);
        assert_eq!(session.statuses(), &[Status::Pending]);
        assert_eq!(session.error_count(), 0);

        let mut strict = Session::new("가나").with_lookahead(false);
        strict.on_input_at("간", t0);
        assert_eq!(strict.statuses(), &[Status::Incorrect]);
        assert_eq!(strict.error_count(), 1);
    }

    #[test]
    fn test_committed_positions_are_strict() {
        let mut session = Session::new("있어요");
        // 있 다음에 ㅇ 없이 ㅓ를 쳐서 받침이 넘어감
        session.on_input_at("이써", Instant::now());
        assert_eq!(session.statuses(), &[Status::Incorrect, Status::Incorrect]);
        assert_eq!(session.error_count(), 2);
    }

    #[test]
    fn test_error_count_is_monotonic() {
        let mut session = Session::new("가나다");
        let t0 = Instant::now();
        session.on_input_at("가너", t0);
        session.on_input_at("가너다", t0);
        assert_eq!(session.error_count(), 1);
        session.on_input_at("가", t0);
        session.on_input_at("가나다", t0);
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.error_count(), 1);
    }

    #[test]
    fn test_backspace_leaves_complete() {
        let mut session = Session::new("가");
        let t0 = Instant::now();
        session.on_input_at("가", t0);
        assert!(session.is_complete());
        assert_eq!(session.on_input_at("", t0), Phase::Composing);
        assert!(session.statuses().is_empty());
    }

    #[test]
    fn test_overlong_input_is_truncated() {
        let mut session = Session::new("가");
        session.on_input_at("가나", Instant::now());
        assert_eq!(session.input(), &['가']);
        assert!(session.is_complete());
    }

    #[test]
    fn test_empty_target_is_complete() {
        let mut session = Session::new("");
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.on_input("아무거나"), Phase::Complete);
        let stats = session.stats();
        assert_eq!(stats.typed_chars, 0);
        assert_eq!(stats.wpm, 0);
        assert_eq!(stats.accuracy, 100);
    }

    #[test]
    fn test_reset_installs_new_target() {
        let mut session = Session::new("가");
        let t0 = Instant::now();
        session.on_input_at("나", t0);
        assert_eq!(session.error_count(), 1);

        session.reset(Some("다".to_string()));
        assert_eq!(session.target_text(), "다");
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.error_count(), 0);
        assert!(session.input().is_empty());

        session.on_input_at("다", t0);
        session.reset(None);
        assert_eq!(session.target_text(), "다");
        assert_eq!(session.phase(), Phase::Idle);
    }
}
