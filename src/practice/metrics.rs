//! 타자 속도/정확도 계산
//!
//! 한국어 타자 연습 관례에 따라 속도는 단어 수가 아닌 글자 처리량(분당 글자 수)으로
//! 계산하고, 보조 지표로 두벌식 키 입력 수 기준 타수도 함께 제공합니다.

use std::time::{Duration, Instant};

use crate::core::keymap::char_keys;

use super::validator::Status;

/// 현재 목표 문장에 대한 실시간 통계
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    /// 분당 글자 수 (반올림)
    pub wpm: u32,
    /// 분당 타수: 입력한 글자를 만드는 데 필요한 두벌식 키 수 기준
    pub keystrokes_per_minute: u32,
    /// 정확도 (0~100, 시도한 글자가 없으면 100)
    pub accuracy: u32,
    /// 한 번이라도 틀렸던 위치 수
    pub error_count: usize,
    /// 입력 버퍼 글자 수
    pub typed_chars: usize,
    /// 첫 글자 입력 시각
    pub started_at: Option<Instant>,
    /// 첫 입력부터 경과 시간 (완료 후에는 고정)
    pub elapsed: Duration,
}

impl SessionStats {
    /// 입력 전 상태
    pub fn empty() -> Self {
        Self {
            wpm: 0,
            keystrokes_per_minute: 0,
            accuracy: 100,
            error_count: 0,
            typed_chars: 0,
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }
}

/// 정확도: 맞은 글자 / (맞은 글자 + 틀린 글자) × 100
pub fn accuracy(statuses: &[Status]) -> u32 {
    let correct = statuses.iter().filter(|s| **s == Status::Correct).count();
    let incorrect = statuses.iter().filter(|s| **s == Status::Incorrect).count();
    let attempted = correct + incorrect;
    if attempted == 0 {
        return 100;
    }
    ((correct as f64 / attempted as f64) * 100.0).round() as u32
}

/// 분당 횟수 (경과 시간이 0이면 0)
pub fn per_minute(count: usize, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0;
    }
    (count as f64 / minutes).round() as u32
}

/// 입력한 글자들을 만드는 데 필요한 키 입력 수
pub fn keystroke_count(input: &[char]) -> usize {
    input.iter().map(|&c| char_keys(c).chars().count()).sum()
}

/// 입력 버퍼와 검증 결과로 통계 계산
///
/// `until`은 계산 기준 시각 (진행 중이면 현재, 완료되었으면 완료 시각)
pub fn compute(
    input: &[char],
    statuses: &[Status],
    error_count: usize,
    started_at: Option<Instant>,
    until: Instant,
) -> SessionStats {
    let Some(start) = started_at else {
        return SessionStats {
            error_count,
            ..SessionStats::empty()
        };
    };
    let elapsed = until.saturating_duration_since(start);
    SessionStats {
        wpm: per_minute(input.len(), elapsed),
        keystrokes_per_minute: per_minute(keystroke_count(input), elapsed),
        accuracy: accuracy(statuses),
        error_count,
        typed_chars: input.len(),
        started_at: Some(start),
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[]), 100);
        assert_eq!(accuracy(&[Status::Pending]), 100);
        assert_eq!(accuracy(&[Status::Correct, Status::Incorrect]), 50);
        let statuses = [
            Status::Correct,
            Status::Correct,
            Status::Incorrect,
            Status::Pending,
        ];
        assert_eq!(accuracy(&statuses), 67);
    }

    #[test]
    fn test_accuracy_never_drops_on_correct_append() {
        let mut statuses = vec![Status::Incorrect, Status::Correct, Status::Incorrect];
        let mut previous = accuracy(&statuses);
        for _ in 0..20 {
            statuses.push(Status::Correct);
            let current = accuracy(&statuses);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_per_minute() {
        assert_eq!(per_minute(5, Duration::from_secs(10)), 30);
        assert_eq!(per_minute(100, Duration::from_secs(60)), 100);
        assert_eq!(per_minute(5, Duration::ZERO), 0);
    }

    #[test]
    fn test_keystroke_count() {
        let input: Vec<char> = "안녕".chars().collect();
        assert_eq!(keystroke_count(&input), 6); // dkssud
        let input: Vec<char> = "와 !".chars().collect();
        assert_eq!(keystroke_count(&input), 5);
    }

    #[test]
    fn test_compute() {
        let start = Instant::now();
        let input: Vec<char> = "안녕하세요".chars().collect();
        let statuses = vec![Status::Correct; 5];
        let end = start + Duration::from_secs(10);
        let stats = compute(&input, &statuses, 1, Some(start), end);
        assert_eq!(stats.wpm, 30);
        assert_eq!(stats.keystrokes_per_minute, 72); // 12타 / 10초
        assert_eq!(stats.accuracy, 100);
        assert_eq!(stats.error_count, 1);
        assert_eq!(stats.typed_chars, 5);
        assert_eq!(stats.elapsed, Duration::from_secs(10));
    }

    #[test]
    fn test_compute_before_start() {
        let stats = compute(&[], &[], 0, None, Instant::now());
        assert_eq!(stats, SessionStats::empty());
    }
}
