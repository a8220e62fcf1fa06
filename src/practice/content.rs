//! 연습 문장 데이터
//!
//! 문장/단어/문단 목록은 외부에서 JSON으로 공급됩니다.
//!
//! # 파일 형식
//! ```json
//! [
//!   "안녕하세요",
//!   { "text": "사과", "kind": "word" },
//!   { "text": "오늘은 날씨가 좋네요.", "kind": "sentence" }
//! ]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// 연습 항목 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    Word,
    #[default]
    Sentence,
    Paragraph,
}

/// 연습 항목 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeItem {
    pub text: String,
    #[serde(default)]
    pub kind: PracticeKind,
}

impl PracticeItem {
    pub fn new(text: impl Into<String>, kind: PracticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn sentence(text: impl Into<String>) -> Self {
        Self::new(text, PracticeKind::Sentence)
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::new(text, PracticeKind::Word)
    }
}

/// 파일 항목: 문자열만 쓰면 문장으로 취급
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Item(PracticeItem),
}

/// 연습 데이터 로드 에러
#[derive(Debug)]
pub enum ContentError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 연습 항목이 하나도 없음
    Empty,
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            ContentError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            ContentError::Empty => write!(f, "연습 항목이 없습니다"),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(e: std::io::Error) -> Self {
        ContentError::IoError(e)
    }
}

fn collect_entries(entries: Vec<Entry>) -> Result<Vec<PracticeItem>, ContentError> {
    let items: Vec<PracticeItem> = entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Text(text) => PracticeItem::sentence(text),
            Entry::Item(item) => item,
        })
        .collect();
    if items.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(items)
}

/// JSON 파일에서 연습 항목 로드
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<PracticeItem>, ContentError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let entries: Vec<Entry> =
        serde_json::from_reader(reader).map_err(|e| ContentError::ParseError(e.to_string()))?;
    log::debug!(
        "연습 항목 {}개 로드: {}",
        entries.len(),
        path.as_ref().display()
    );
    collect_entries(entries)
}

/// JSON 문자열에서 연습 항목 로드
pub fn items_from_json(json_str: &str) -> Result<Vec<PracticeItem>, ContentError> {
    let entries: Vec<Entry> =
        serde_json::from_str(json_str).map_err(|e| ContentError::ParseError(e.to_string()))?;
    collect_entries(entries)
}

/// 문단을 줄 단위 연습 항목으로 분리 (빈 줄 제외)
pub fn paragraph_items(text: &str) -> Vec<PracticeItem> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| PracticeItem::new(line, PracticeKind::Paragraph))
        .collect()
}

const SAMPLE_SENTENCES: [&str; 4] = [
    "안녕하세요",
    "있어요",
    "한글 타자 연습",
    "오늘은 날씨가 좋네요.",
];

/// 데이터 파일이 없을 때 쓰는 기본 문장
pub fn sample_items() -> Vec<PracticeItem> {
    SAMPLE_SENTENCES
        .into_iter()
        .map(PracticeItem::sentence)
        .collect()
}
