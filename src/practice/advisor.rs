//! 다음 입력 키 안내
//!
//! 화면 키보드에서 강조할 키를 결정합니다. 틀린 글자가 있으면 앞으로 나아갈 키 대신
//! 백스페이스를 안내합니다.

use crate::core::jamo_mapper::map_to_jamo;
use crate::core::keymap::{char_keys, resolve_key_id, Key};

use super::validator::Status;

/// 조합 중인 글자가 다음 글자의 초성을 빌려 쓸 수 있으므로 한 글자 더 내다봄
const LOOKAHEAD_CHARS: usize = 2;

/// 안내 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    /// 눌러야 할 키 (Shift 포함)
    Press { jamo: char, keys: Vec<Key> },
    /// 지워야 함
    ///
    /// Incorrect인 글자가 있을 때와 함께, 검증은 Pending이지만 키를 더 눌러서는 목표
    /// 글자가 될 수 없는 조합일 때도 해당함. `있어`를 치다 `있ㅓ`가 된 경우 ㅓ 앞에
    /// ㅇ을 넣을 방법이 없으므로 ㅓ를 지우고 `ㅇ`부터 다시 쳐야 함
    Backspace,
    /// 자판에 없는 문자라 강조할 키 없음
    Unmapped(char),
    /// 목표 문장을 모두 맞게 입력함
    Done,
}

impl Advice {
    pub fn needs_backspace(&self) -> bool {
        matches!(self, Advice::Backspace)
    }

    /// 강조할 키 목록 (없으면 빈 슬라이스)
    pub fn keys(&self) -> &[Key] {
        match self {
            Advice::Press { keys, .. } => keys,
            _ => &[],
        }
    }
}

/// 키 식별자 하나를 안내 결과로 변환
fn press(key_id: char) -> Advice {
    let jamo = map_to_jamo(key_id)
        .and_then(|jamo| jamo.to_char())
        .unwrap_or(key_id);
    match resolve_key_id(key_id) {
        Some(stroke) => Advice::Press {
            jamo,
            keys: stroke.keys(),
        },
        None => Advice::Unmapped(key_id),
    }
}

/// 목표 문장, 입력 버퍼, 검증 결과로 다음 키 결정
pub fn advise(target: &[char], input: &[char], statuses: &[Status]) -> Advice {
    // 검증 결과는 입력된 위치까지만 있음
    let index = match statuses.iter().position(|s| *s != Status::Correct) {
        Some(i) => i,
        None if statuses.len() < target.len() => statuses.len(),
        None => return Advice::Done,
    };

    match statuses.get(index) {
        Some(Status::Incorrect) => Advice::Backspace,
        None => match char_keys(target[index]).chars().next() {
            Some(key_id) => press(key_id),
            None => Advice::Unmapped(target[index]),
        },
        Some(Status::Pending) => {
            let typed = char_keys(input[index]);
            let end = (index + LOOKAHEAD_CHARS).min(target.len());
            let needed: String = target[index..end].iter().map(|&c| char_keys(c)).collect();
            let remaining = needed.strip_prefix(typed.as_str());
            match remaining.and_then(|rest| rest.chars().next()) {
                Some(key_id) => press(key_id),
                None => {
                    // 키를 더 눌러서는 목표 글자가 될 수 없는 조합
                    log::debug!(
                        "조합 중인 {:?}에서 {:?}로 갈 수 없음",
                        input[index],
                        target[index]
                    );
                    Advice::Backspace
                }
            }
        }
        Some(Status::Correct) => Advice::Done,
    }
}
