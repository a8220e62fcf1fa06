//! 한글 코덱: 음절 분해/조합, 두벌식 자판 매핑, 입력기 조합 재현

pub mod converter;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod keymap;
pub mod unicode;
