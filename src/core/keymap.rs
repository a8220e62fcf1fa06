//! 한글 -> 두벌식 자판 키 매핑
//!
//! 완성형 음절을 두벌식 영문 키 시퀀스로 역변환하고, 자모 하나가 어느 물리 키에
//! 있는지 알려줍니다. 키 식별자는 US 자판 기준 문자이며 대문자는 Shift 입력을 뜻합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::jamo_mapper::{CONSONANT_KEYS, VOWEL_KEYS};
use crate::core::unicode::{
    choseong_to_jamo_char, decompose, jongseong_to_choseong, jongseong_to_jamo_char,
    jungseong_to_jamo_char, split_jongseong, split_jungseong, JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

lazy_static! {
    /// 호환용 자모 -> 키 식별자
    ///
    /// 복합 모음은 첫 모음의 키(ㅘ ㅙ ㅚ -> h), 겹받침은 첫 자음의 키(ㄺ -> f)를 공유함
    static ref JAMO_KEYS: HashMap<char, char> = {
        let mut map = HashMap::new();
        for &(key, cho, _) in CONSONANT_KEYS.iter() {
            if let Some(jamo) = choseong_to_jamo_char(cho) {
                map.insert(jamo, key);
            }
        }
        for jung in 0..JUNGSEONG_COUNT {
            let mut keys = String::new();
            push_jungseong_keys(jung, &mut keys);
            if let (Some(jamo), Some(key)) = (jungseong_to_jamo_char(jung), keys.chars().next()) {
                map.insert(jamo, key);
            }
        }
        for jong in 1..JONGSEONG_COUNT {
            let mut keys = String::new();
            push_jongseong_keys(jong, &mut keys);
            if let (Some(jamo), Some(key)) = (jongseong_to_jamo_char(jong), keys.chars().next()) {
                map.entry(jamo).or_insert(key);
            }
        }
        map
    };
}

/// 물리 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// 문자 키 (소문자, 숫자, Shift 없는 기호)
    Char(char),
    Space,
    Shift,
}

/// 한 글자를 입력하기 위한 키 조합
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Key,
    pub shift: bool,
}

impl KeyStroke {
    /// 눌러야 할 키 목록 (Shift가 필요하면 앞에 추가)
    pub fn keys(&self) -> Vec<Key> {
        if self.shift {
            vec![Key::Shift, self.key]
        } else {
            vec![self.key]
        }
    }
}

/// US 자판에서 Shift로 입력하는 기호 -> 기본 키
fn shifted_symbol_base(c: char) -> Option<char> {
    let base = match c {
        '!' => '1',
        '@' => '2',
        '#' => '3',
        '$' => '4',
        '%' => '5',
        '^' => '6',
        '&' => '7',
        '*' => '8',
        '(' => '9',
        ')' => '0',
        '_' => '-',
        '+' => '=',
        '{' => '[',
        '}' => ']',
        '|' => '\\',
        ':' => ';',
        '"' => '\'',
        '<' => ',',
        '>' => '.',
        '?' => '/',
        '~' => '`',
        _ => return None,
    };
    Some(base)
}

/// 키 식별자(자판 위 문자)를 실제 키 조합으로 해석
///
/// 매핑할 수 없는 문자는 None
pub fn resolve_key_id(id: char) -> Option<KeyStroke> {
    if id == ' ' {
        return Some(KeyStroke {
            key: Key::Space,
            shift: false,
        });
    }
    if id.is_ascii_uppercase() {
        return Some(KeyStroke {
            key: Key::Char(id.to_ascii_lowercase()),
            shift: true,
        });
    }
    if id.is_ascii_lowercase() || id.is_ascii_digit() || ".,/;'-=[]\\`".contains(id) {
        return Some(KeyStroke {
            key: Key::Char(id),
            shift: false,
        });
    }
    shifted_symbol_base(id).map(|base| KeyStroke {
        key: Key::Char(base),
        shift: true,
    })
}

/// 호환용 자모 -> 키 식별자
pub fn jamo_to_key(jamo: char) -> Option<char> {
    JAMO_KEYS.get(&jamo).copied()
}

fn consonant_key(cho: u32) -> Option<char> {
    CONSONANT_KEYS
        .iter()
        .find(|(_, c, _)| *c == cho)
        .map(|&(key, ..)| key)
}

fn vowel_key(jung: u32) -> Option<char> {
    VOWEL_KEYS
        .iter()
        .find(|(_, j)| *j == jung)
        .map(|&(key, _)| key)
}

fn push_jungseong_keys(jung: u32, out: &mut String) {
    let parts = match split_jungseong(jung) {
        Some((first, second)) => [Some(first), Some(second)],
        None => [Some(jung), None],
    };
    out.extend(parts.into_iter().flatten().filter_map(vowel_key));
}

fn push_jongseong_keys(jong: u32, out: &mut String) {
    let (first, second) = match split_jongseong(jong) {
        Some((remaining, next_cho)) => (jongseong_to_choseong(remaining), Some(next_cho)),
        None => (jongseong_to_choseong(jong), None),
    };
    let parts = [first, second].into_iter().flatten();
    out.extend(parts.filter_map(consonant_key));
}

/// 글자 하나를 입력하는 두벌식 키 시퀀스
///
/// 음절은 자모 단위로 풀고, 호환용 자모는 해당 키, 그 외 문자는 그대로 반환
pub fn char_keys(c: char) -> String {
    let mut keys = String::new();
    if let Some(syllable) = decompose(c) {
        keys.extend(consonant_key(syllable.choseong));
        push_jungseong_keys(syllable.jungseong, &mut keys);
        if let Some(jong) = syllable.jongseong {
            push_jongseong_keys(jong, &mut keys);
        }
    } else if let Some(key) = jamo_to_key(c) {
        keys.push(key);
    } else {
        keys.push(c);
    }
    keys
}

/// 한글 문자열을 두벌식 영문 키 시퀀스로 역변환
///
/// ```
/// use taja::core::keymap::korean_to_eng;
/// assert_eq!(korean_to_eng("안녕"), "dkssud");
/// assert_eq!(korean_to_eng("있어요"), "dlTdjdy");
/// ```
pub fn korean_to_eng(input: &str) -> String {
    input.chars().map(char_keys).collect()
}
