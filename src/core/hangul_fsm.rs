//! 두벌식 입력기 조합 상태 기계
//!
//! 학습자의 키 입력이 입력기에서 어떤 글자로 보이는지 재현합니다.
//! 조합 중인 글자(preedit)는 확정되기 전까지 바뀔 수 있으며, 받침 뒤에 모음이 오면
//! 받침이 다음 글자의 초성으로 넘어갑니다.

use crate::core::jamo_mapper::Jamo;
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jungseong_to_jamo_char, split_jongseong,
};

/// 조합 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 조합 중인 글자 없음
    Empty,
    /// 초성만 입력됨
    Choseong(u32),
    /// 초성 + 중성
    Open { cho: u32, jung: u32 },
    /// 초성 + 중성 + 종성
    Closed { cho: u32, jung: u32, jong: u32 },
}

impl State {
    /// 현재 상태가 화면에 보이는 글자
    fn preedit(self) -> Option<char> {
        match self {
            State::Empty => None,
            State::Choseong(cho) => choseong_to_jamo_char(cho),
            State::Open { cho, jung } => compose_syllable(cho, jung, 0),
            State::Closed { cho, jung, jong } => compose_syllable(cho, jung, jong),
        }
    }
}

/// 한글 조합 FSM
#[derive(Debug, Clone)]
pub struct HangulFsm {
    state: State,
    /// 확정된 출력
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            output: String::new(),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(jung_index),
        }
    }

    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) {
        self.state = match (self.state, jong_index) {
            (State::Open { cho, jung }, Some(jong)) => State::Closed { cho, jung, jong },
            (State::Closed { cho, jung, jong }, Some(next)) => match combine_jongseong(jong, next) {
                Some(combined) => State::Closed {
                    cho,
                    jung,
                    jong: combined,
                },
                None => {
                    self.commit();
                    State::Choseong(cho_index)
                }
            },
            _ => {
                // 초성만 있던 자리, 받침이 될 수 없는 쌍자음(ㄸ ㅃ ㅉ) 포함
                self.commit();
                State::Choseong(cho_index)
            }
        };
    }

    fn feed_vowel(&mut self, jung_index: u32) {
        let current = self.state;
        self.state = match current {
            State::Empty => {
                self.push_jungseong(jung_index);
                State::Empty
            }
            State::Choseong(cho) => State::Open {
                cho,
                jung: jung_index,
            },
            State::Open { cho, jung } => match combine_jungseong(jung, jung_index) {
                Some(combined) => State::Open {
                    cho,
                    jung: combined,
                },
                None => {
                    self.commit();
                    self.push_jungseong(jung_index);
                    State::Empty
                }
            },
            State::Closed { cho, jung, jong } => {
                // 받침이 다음 초성으로 이동 (겹받침이면 뒤 자음만)
                let moved = match split_jongseong(jong) {
                    Some((remaining, next_cho)) => Some((remaining, next_cho)),
                    None => jongseong_to_choseong(jong).map(|next_cho| (0, next_cho)),
                };
                match moved {
                    Some((remaining, next_cho)) => {
                        self.state = State::Closed {
                            cho,
                            jung,
                            jong: remaining,
                        };
                        self.commit();
                        State::Open {
                            cho: next_cho,
                            jung: jung_index,
                        }
                    }
                    None => {
                        self.commit();
                        self.push_jungseong(jung_index);
                        State::Empty
                    }
                }
            }
        };
    }

    fn push_jungseong(&mut self, jung: u32) {
        if let Some(c) = jungseong_to_jamo_char(jung) {
            self.output.push(c);
        }
    }

    /// 조합 중인 글자를 확정
    fn commit(&mut self) {
        if let Some(c) = self.state.preedit() {
            self.output.push(c);
        }
        self.state = State::Empty;
    }

    /// 변환 불가 문자 처리 (숫자, 공백, 문장부호 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.commit();
        self.output.push(c);
    }

    /// 지금 화면에 보이는 전체 텍스트 (확정 + 조합 중)
    pub fn snapshot(&self) -> String {
        let mut text = self.output.clone();
        if let Some(c) = self.state.preedit() {
            text.push(c);
        }
        text
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.commit();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}
