//! 두벌식 키 시퀀스 -> 화면 텍스트

use crate::core::hangul_fsm::HangulFsm;
use crate::core::jamo_mapper::map_to_jamo;

fn feed_key(fsm: &mut HangulFsm, key: char) {
    match map_to_jamo(key) {
        Some(jamo) => fsm.feed(jamo),
        None => fsm.feed_passthrough(key),
    }
}

/// 키 시퀀스를 입력기에 넣었을 때의 최종 텍스트
/// 자모로 매핑되지 않는 문자(숫자, 공백, 문장부호)는 그대로 유지
pub fn convert(keys: &str) -> String {
    let mut fsm = HangulFsm::new();
    for key in keys.chars() {
        feed_key(&mut fsm, key);
    }
    fsm.finish()
}

/// 키를 하나씩 누를 때마다 화면에 보이는 텍스트
///
/// `composition_steps("rks")` == `["ㄱ", "가", "간"]`
pub fn composition_steps(keys: &str) -> Vec<String> {
    let mut fsm = HangulFsm::new();
    keys.chars()
        .map(|key| {
            feed_key(&mut fsm, key);
            fsm.snapshot()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_words() {
        assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
        assert_eq!(convert("dlTdjdy"), "있어요");
        assert_eq!(convert("dhksfy"), "완료");
        assert_eq!(convert("rk!sk"), "가!나");
    }

    #[test]
    fn test_composition_steps() {
        assert_eq!(composition_steps("rks"), vec!["ㄱ", "가", "간"]);
        assert_eq!(composition_steps("dhk"), vec!["ㅇ", "오", "와"]);
        assert_eq!(composition_steps("rksk"), vec!["ㄱ", "가", "간", "가나"]);
        assert!(composition_steps("").is_empty());
    }
}
