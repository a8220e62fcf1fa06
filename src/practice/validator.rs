//! 글자 단위 입력 검증
//!
//! 입력기는 여러 키를 하나의 글자로 조합하므로, 목표 글자와 다르다고 곧바로 오타는
//! 아닙니다. 조합 도중의 글자(`ㄱ` -> `가` -> `각`)와 다음 글자의 초성이 잠시 받침으로
//! 붙은 글자(`가` 다음 `나`를 치는 중의 `간`)는 대기 상태로 봅니다.

use crate::core::converter::composition_steps;
use crate::core::jamo_mapper::is_consonant_key;
use crate::core::keymap::char_keys;
use crate::core::unicode::{decompose, jungseong_to_jamo_char, split_jungseong};

/// 위치별 검증 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 아직 입력 전이거나 조합 중
    Pending,
    Correct,
    Incorrect,
}

/// 조합 중인 입력 글자를 목표 글자와 비교
///
/// - `input`이 None이면 Pending
/// - 같으면 Correct
/// - 목표 글자를 조합하는 도중의 모양이면 Pending
/// - `next_target`의 초성이 받침으로 잠시 붙은 모양이면 Pending
/// - 그 외에는 Incorrect
pub fn check_input(target: char, input: Option<char>, next_target: Option<char>) -> Status {
    let Some(input) = input else {
        return Status::Pending;
    };
    if input == target {
        return Status::Correct;
    }
    if is_partial_composition(target, input) {
        return Status::Pending;
    }
    if let Some(next) = next_target {
        if borrows_next_choseong(target, input, next) {
            return Status::Pending;
        }
    }
    Status::Incorrect
}

/// 입력기가 이미 확정한 위치의 검증 (조합 중일 수 없음)
pub fn check_committed(target: char, input: char) -> Status {
    if input == target {
        Status::Correct
    } else {
        Status::Incorrect
    }
}

/// `input`이 `target`을 입력하는 도중에 보이는 글자인지
fn is_partial_composition(target: char, input: char) -> bool {
    let keys = char_keys(target);
    let steps = composition_steps(&keys);
    // 마지막 단계는 완성된 목표 글자 자신
    let in_progress = steps.len().saturating_sub(1);
    if steps[..in_progress]
        .iter()
        .any(|step| single_char(step) == Some(input))
    {
        return true;
    }
    bare_vowel_matches(target, input)
}

/// 초성이 앞 글자 받침에 머물러 있어 모음만 보이는 경우 (`있ㅓ`의 `ㅓ`)
fn bare_vowel_matches(target: char, input: char) -> bool {
    let Some(syllable) = decompose(target) else {
        return false;
    };
    if syllable.jungseong_jamo() == Some(input) {
        return true;
    }
    // 겹모음의 첫 모음 (ㅘ를 치다 ㅗ만 보이는 경우)
    let first = split_jungseong(syllable.jungseong).map(|(first, _)| first);
    first.and_then(jungseong_to_jamo_char) == Some(input)
}

/// 다음 글자의 첫 자음이 현재 글자의 받침으로 붙어 있는지 (`가` + `나` 입력 중의 `간`)
///
/// 모음이 이어 입력되면 입력기가 그 자음을 다음 글자로 옮기므로 아직 오타가 아님
fn borrows_next_choseong(target: char, input: char, next_target: char) -> bool {
    if decompose(target).is_none() || decompose(next_target).is_none() {
        return false;
    }
    let Some(first_key) = char_keys(next_target).chars().next() else {
        return false;
    };
    if !is_consonant_key(first_key) {
        return false;
    }
    let mut keys = char_keys(target);
    keys.push(first_key);
    composition_steps(&keys)
        .last()
        .and_then(|text| single_char(text))
        == Some(input)
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
