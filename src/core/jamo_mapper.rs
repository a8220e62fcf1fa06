//! 두벌식 자판 키 <-> 한글 자모 매핑

use crate::core::unicode::{choseong_to_jamo_char, jungseong_to_jamo_char};

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 화면 표시용 호환 자모
    pub fn to_char(&self) -> Option<char> {
        match self {
            Jamo::Consonant { cho_index, .. } => choseong_to_jamo_char(*cho_index),
            Jamo::Vowel { jung_index } => jungseong_to_jamo_char(*jung_index),
        }
    }
}

/// 자음 키 배치: (키, 초성 인덱스, 종성 인덱스)
///
/// ㄸ ㅃ ㅉ 은 받침으로 쓸 수 없음
#[rustfmt::skip]
pub(crate) const CONSONANT_KEYS: [(char, u32, Option<u32>); 19] = [
    ('r', 0, Some(1)),   // ㄱ
    ('R', 1, Some(2)),   // ㄲ
    ('s', 2, Some(4)),   // ㄴ
    ('e', 3, Some(7)),   // ㄷ
    ('E', 4, None),      // ㄸ
    ('f', 5, Some(8)),   // ㄹ
    ('a', 6, Some(16)),  // ㅁ
    ('q', 7, Some(17)),  // ㅂ
    ('Q', 8, None),      // ㅃ
    ('t', 9, Some(19)),  // ㅅ
    ('T', 10, Some(20)), // ㅆ
    ('d', 11, Some(21)), // ㅇ
    ('w', 12, Some(22)), // ㅈ
    ('W', 13, None),     // ㅉ
    ('c', 14, Some(23)), // ㅊ
    ('z', 15, Some(24)), // ㅋ
    ('x', 16, Some(25)), // ㅌ
    ('v', 17, Some(26)), // ㅍ
    ('g', 18, Some(27)), // ㅎ
];

/// 단일 모음 키 배치: (키, 중성 인덱스)
///
/// 복합 모음(ㅘ ㅝ ㅢ 등)은 전용 키가 없고 두 키를 연달아 입력함
#[rustfmt::skip]
pub(crate) const VOWEL_KEYS: [(char, u32); 14] = [
    ('k', 0),  // ㅏ
    ('o', 1),  // ㅐ
    ('i', 2),  // ㅑ
    ('O', 3),  // ㅒ
    ('j', 4),  // ㅓ
    ('p', 5),  // ㅔ
    ('u', 6),  // ㅕ
    ('P', 7),  // ㅖ
    ('h', 8),  // ㅗ
    ('y', 12), // ㅛ
    ('n', 13), // ㅜ
    ('b', 17), // ㅠ
    ('m', 18), // ㅡ
    ('l', 20), // ㅣ
];

/// 영문 키 하나를 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자, 공백 등)는 None
pub fn map_to_jamo(key: char) -> Option<Jamo> {
    if let Some(&(_, cho_index, jong_index)) = CONSONANT_KEYS.iter().find(|(k, ..)| *k == key) {
        return Some(Jamo::Consonant {
            cho_index,
            jong_index,
        });
    }
    VOWEL_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, jung_index)| Jamo::Vowel { jung_index })
}

/// 영문 키가 자음인지 확인
pub fn is_consonant_key(key: char) -> bool {
    map_to_jamo(key).is_some_and(|jamo| jamo.is_consonant())
}
