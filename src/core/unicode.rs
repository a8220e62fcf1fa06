//! 유니코드 한글 음절 분해/조합
//!
//! 완성형 음절(U+AC00 ~ U+D7A3)은 초성·중성·종성 인덱스의 산술식으로 배치되어 있으므로
//! 테이블 없이 분해와 재조합이 가능합니다. 호환용 자모(U+3131 ~ U+318E)는 순서가
//! 다르기 때문에 인덱스와 직접 매핑합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 종성 인덱스 순서의 호환용 자모 (0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_JAMO: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 완성형 음절 하나를 분해한 결과 (초성, 중성, 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// 초성 인덱스 (0~18)
    pub choseong: u32,
    /// 중성 인덱스 (0~20)
    pub jungseong: u32,
    /// 종성 인덱스 (1~27), 받침이 없으면 None
    pub jongseong: Option<u32>,
}

impl Syllable {
    /// 다시 완성형 문자로 조합
    pub fn compose(&self) -> Option<char> {
        compose_syllable(self.choseong, self.jungseong, self.jongseong.unwrap_or(0))
    }

    /// 중성 자모 (호환용)
    pub fn jungseong_jamo(&self) -> Option<char> {
        jungseong_to_jamo_char(self.jungseong)
    }
}

/// 완성형 음절을 초성/중성/종성으로 분해
///
/// 음절 영역 밖의 문자(공백, 문장부호, 라틴 문자, 낱자모)는 None
pub fn decompose(c: char) -> Option<Syllable> {
    decompose_syllable(c).map(|(choseong, jungseong, jongseong)| Syllable {
        choseong,
        jungseong,
        jongseong: (jongseong != 0).then_some(jongseong),
    })
}

/// 완성형 음절 여부
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 인덱스 산술로 완성형 음절 생성 (`jongseong` 0 = 받침 없음)
///
/// 범위를 벗어난 인덱스는 None
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    let in_range =
        choseong < CHOSEONG_COUNT && jungseong < JUNGSEONG_COUNT && jongseong < JONGSEONG_COUNT;
    if !in_range {
        return None;
    }
    let index = (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong;
    char::from_u32(HANGUL_SYLLABLE_BASE + index)
}

/// 완성형 음절의 (초성, 중성, 종성) 인덱스, 받침이 없으면 종성 0
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let index = c as u32 - HANGUL_SYLLABLE_BASE;
    let (lead, jongseong) = (index / JONGSEONG_COUNT, index % JONGSEONG_COUNT);
    Some((lead / JUNGSEONG_COUNT, lead % JUNGSEONG_COUNT, jongseong))
}

/// 겹모음 (앞 중성, 뒤 중성, 겹모음 중성)
#[rustfmt::skip]
const COMPOUND_JUNGSEONG: [(u32, u32, u32); 7] = [
    (8, 0, 9),    // ㅘ
    (8, 1, 10),   // ㅙ
    (8, 20, 11),  // ㅚ
    (13, 4, 14),  // ㅝ
    (13, 5, 15),  // ㅞ
    (13, 20, 16), // ㅟ
    (18, 20, 19), // ㅢ
];

/// 겹받침 (앞 종성, 뒤 종성, 겹받침 종성)
#[rustfmt::skip]
const COMPOUND_JONGSEONG: [(u32, u32, u32); 11] = [
    (1, 19, 3),   // ㄳ
    (4, 22, 5),   // ㄵ
    (4, 27, 6),   // ㄶ
    (8, 1, 9),    // ㄺ
    (8, 16, 10),  // ㄻ
    (8, 17, 11),  // ㄼ
    (8, 19, 12),  // ㄽ
    (8, 25, 13),  // ㄾ
    (8, 26, 14),  // ㄿ
    (8, 27, 15),  // ㅀ
    (17, 19, 18), // ㅄ
];

fn lookup_compound(table: &[(u32, u32, u32)], first: u32, second: u32) -> Option<u32> {
    table
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(.., compound)| compound)
}

fn lookup_parts(table: &[(u32, u32, u32)], compound: u32) -> Option<(u32, u32)> {
    table
        .iter()
        .find(|&&(.., c)| c == compound)
        .map(|&(a, b, _)| (a, b))
}

/// 중성 두 개가 겹모음이 되면 그 인덱스
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    lookup_compound(&COMPOUND_JUNGSEONG, first, second)
}

/// 겹모음을 (앞 중성, 뒤 중성)으로 분리, 단일 모음이면 None
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    lookup_parts(&COMPOUND_JUNGSEONG, jung)
}

/// 종성 두 개가 겹받침이 되면 그 인덱스
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    lookup_compound(&COMPOUND_JONGSEONG, first, second)
}

/// 겹받침 분리
///
/// 반환: (남는 종성, 다음 글자 초성이 될 자음의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    let (kept, moved) = lookup_parts(&COMPOUND_JONGSEONG, jong)?;
    Some((kept, jongseong_to_choseong(moved)?))
}

/// 홑받침의 초성 인덱스 (겹받침은 초성이 될 수 없어 None)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    jongseong_to_jamo_char(jong).and_then(jamo_char_to_choseong)
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모 (ㅏ U+314F ~ ㅣ U+3163 연속 배치)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(0x314F + jung)
    } else {
        None
    }
}

/// 종성 인덱스 -> 호환용 자모
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_JAMO.get(jong as usize).copied().flatten()
}

/// 호환용 자음 -> 초성 인덱스 (ㄳ 같은 겹받침 자모는 초성이 될 수 없음)
pub fn jamo_char_to_choseong(c: char) -> Option<u32> {
    let index = CHOSEONG_JAMO.iter().position(|&j| j == c)?;
    Some(index as u32)
}
