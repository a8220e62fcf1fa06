//! 연습 문장 큐
//!
//! 문장을 완료하면 확인 시간 뒤에 다음 문장으로 넘어갑니다. 넘어가기 전에 학습자가
//! 글자를 지우면 예약된 전환은 취소되고 세션은 입력 중 상태로 돌아갑니다.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::content::{paragraph_items, PracticeItem};
use super::session::Session;

/// 예약된 다음 문장 전환
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub due: Instant,
}

impl ScheduledAdvance {
    fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// 완료한 문장 하나의 최종 결과 (외부 저장용)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResult {
    pub index: usize,
    pub text: String,
    pub wpm: u32,
    pub keystrokes_per_minute: u32,
    pub accuracy: u32,
    pub error_count: usize,
    pub typed_chars: usize,
    pub elapsed_ms: u64,
}

/// 큐 전체 누적 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueueTotals {
    pub items_completed: usize,
    pub characters_typed: usize,
    pub error_count: usize,
    pub elapsed_ms: u64,
}

impl QueueTotals {
    fn add(&mut self, result: &ItemResult) {
        self.items_completed += 1;
        self.characters_typed += result.typed_chars;
        self.error_count += result.error_count;
        self.elapsed_ms += result.elapsed_ms;
    }
}

/// 큐 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum QueueEvent {
    /// 변화 없음
    None,
    /// 새 문장 시작 (세션 reset 호출됨)
    ItemStarted { index: usize, target: String },
    /// 현재 문장 완료, 다음 문장 전환 예약됨
    ItemComplete(ItemResult),
    /// 완료 후 입력이 바뀌어 예약된 전환 취소
    AdvanceCancelled,
    /// 마지막 문장까지 완료
    Exhausted(QueueTotals),
}

/// 연습 문장 큐 컨트롤러
#[derive(Debug)]
pub struct PracticeQueue {
    items: Vec<PracticeItem>,
    cursor: usize,
    session: Session,
    confirm_delay: Duration,
    scheduled: Option<ScheduledAdvance>,
    /// 현재 문장의 ItemComplete를 이미 알렸는지
    completion_reported: bool,
    results: Vec<ItemResult>,
    totals: QueueTotals,
    exhausted: bool,
}

impl PracticeQueue {
    pub fn new(items: Vec<PracticeItem>, confirm_delay: Duration) -> Self {
        let first = items
            .first()
            .map(|item| item.text.clone())
            .unwrap_or_default();
        Self {
            items,
            cursor: 0,
            session: Session::new(first),
            confirm_delay,
            scheduled: None,
            completion_reported: false,
            results: Vec::new(),
            totals: QueueTotals::default(),
            exhausted: false,
        }
    }

    /// 문단을 줄 단위로 나눈 큐
    pub fn from_paragraph(text: &str, confirm_delay: Duration) -> Self {
        Self::new(paragraph_items(text), confirm_delay)
    }

    /// 받침 이동 예측 사용 여부 (모든 문장에 적용)
    pub fn set_lookahead(&mut self, enabled: bool) {
        self.session.set_lookahead(enabled);
    }

    pub fn start(&mut self) -> QueueEvent {
        self.start_at(Instant::now())
    }

    /// 첫 문장으로 시작 (처음부터 다시)
    pub fn start_at(&mut self, now: Instant) -> QueueEvent {
        self.cursor = 0;
        self.scheduled = None;
        self.results.clear();
        self.totals = QueueTotals::default();
        self.exhausted = false;
        if self.items.is_empty() {
            return self.finish();
        }
        self.begin_item(now)
    }

    pub fn on_input(&mut self, buffer: &str) -> QueueEvent {
        self.on_input_at(buffer, Instant::now())
    }

    /// 입력 버퍼 변경을 세션에 전달하고 완료/취소 처리
    pub fn on_input_at(&mut self, buffer: &str, now: Instant) -> QueueEvent {
        if self.exhausted {
            log::warn!("모든 문장을 완료한 뒤의 입력은 무시됩니다");
            return QueueEvent::None;
        }
        self.session.on_input_at(buffer, now);

        match (self.scheduled.is_some(), self.session.is_complete()) {
            (false, true) => {
                self.schedule(now);
                self.report_completion()
            }
            (true, false) => {
                log::debug!("완료 후 입력이 바뀌어 다음 문장 전환 취소");
                self.scheduled = None;
                self.completion_reported = false;
                QueueEvent::AdvanceCancelled
            }
            _ => QueueEvent::None,
        }
    }

    pub fn tick(&mut self) -> QueueEvent {
        self.tick_at(Instant::now())
    }

    /// 확인 시간이 지났으면 다음 문장으로 전환
    ///
    /// 입력 없이 완료된 문장(빈 문장)은 먼저 `ItemComplete`를 알리고, 다음 호출에서
    /// 확인 시간이 지났으면 넘어감
    pub fn tick_at(&mut self, now: Instant) -> QueueEvent {
        match self.scheduled {
            Some(_) if !self.completion_reported => self.report_completion(),
            Some(advance) if advance.is_due(now) => self.advance(now),
            _ => QueueEvent::None,
        }
    }

    /// 현재 문장을 처음부터 다시
    pub fn retry(&mut self) -> QueueEvent {
        self.retry_at(Instant::now())
    }

    pub fn retry_at(&mut self, now: Instant) -> QueueEvent {
        if self.exhausted {
            return QueueEvent::None;
        }
        self.scheduled = None;
        self.begin_item(now)
    }

    fn advance(&mut self, now: Instant) -> QueueEvent {
        self.scheduled = None;
        let result = self.current_result();
        log::info!(
            "{}번째 문장 결과: {}타/분, 정확도 {}%",
            result.index + 1,
            result.keystrokes_per_minute,
            result.accuracy
        );
        self.totals.add(&result);
        self.results.push(result);

        self.cursor += 1;
        if self.cursor >= self.items.len() {
            return self.finish();
        }
        self.begin_item(now)
    }

    /// 현재 커서의 문장으로 세션 reset
    fn begin_item(&mut self, now: Instant) -> QueueEvent {
        let target = self.items[self.cursor].text.clone();
        self.session.reset(Some(target.clone()));
        self.completion_reported = false;
        if self.session.is_complete() {
            // 빈 문장은 입력 없이 완료
            self.schedule(now);
        }
        QueueEvent::ItemStarted {
            index: self.cursor,
            target,
        }
    }

    fn finish(&mut self) -> QueueEvent {
        self.exhausted = true;
        log::info!(
            "연습 완료: {}문장, {}글자",
            self.totals.items_completed,
            self.totals.characters_typed
        );
        QueueEvent::Exhausted(self.totals.clone())
    }

    fn report_completion(&mut self) -> QueueEvent {
        self.completion_reported = true;
        QueueEvent::ItemComplete(self.current_result())
    }

    fn schedule(&mut self, now: Instant) {
        self.scheduled = Some(ScheduledAdvance {
            due: now + self.confirm_delay,
        });
    }

    fn current_result(&self) -> ItemResult {
        let stats = self.session.stats();
        ItemResult {
            index: self.cursor,
            text: self.session.target_text(),
            wpm: stats.wpm,
            keystrokes_per_minute: stats.keystrokes_per_minute,
            accuracy: stats.accuracy,
            error_count: stats.error_count,
            typed_chars: stats.typed_chars,
            elapsed_ms: stats.elapsed.as_millis() as u64,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[PracticeItem] {
        &self.items
    }

    /// 지금까지 완료한 문장 결과
    pub fn results(&self) -> &[ItemResult] {
        &self.results
    }

    pub fn totals(&self) -> &QueueTotals {
        &self.totals
    }

    /// 예약된 전환 시각
    pub fn pending_advance(&self) -> Option<Instant> {
        self.scheduled.map(|advance| advance.due)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
