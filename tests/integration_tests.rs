//! 통합 테스트 - 입력 검증, 세션, 통계, 키 안내, 문장 큐

use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

use taja::core::keymap::Key;
use taja::core::unicode::decompose;
use taja::practice::content::{items_from_json, PracticeItem};
use taja::practice::metrics;
use taja::{
    check_input, convert, korean_to_eng, Advice, Phase, PracticeQueue, QueueEvent, Session, Status,
};

#[test]
fn test_decompose_recompose_whole_block() {
    for code in 0xAC00u32..=0xD7A3 {
        let c = char::from_u32(code).unwrap();
        assert_eq!(decompose(c).and_then(|s| s.compose()), Some(c));
    }
}

#[test]
fn test_ime_composition() {
    assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    assert_eq!(convert("dlTdjdy"), "있어요");
    assert_eq!(korean_to_eng("안녕하세요"), "dkssudgktpdy");
}

#[test]
fn test_pure_validator() {
    assert_eq!(check_input('가', None, None), Status::Pending);
    assert_eq!(check_input('가', Some('가'), None), Status::Correct);
    assert_eq!(check_input('가', Some('나'), None), Status::Incorrect);
}

#[test]
fn test_bare_medial_is_pending() {
    let mut session = Session::new("있어요");
    let t0 = Instant::now();
    session.on_input_at("있ㅓ", t0);
    assert_eq!(session.statuses(), &[Status::Correct, Status::Pending]);
    assert_eq!(session.error_count(), 0);

    session.on_input_at("있어", t0);
    assert_eq!(session.statuses(), &[Status::Correct, Status::Correct]);
    assert_eq!(session.phase(), Phase::Composing);
}

#[test]
fn test_keystroke_by_keystroke_never_errors() {
    // 입력기가 보여주는 화면을 키 하나씩 재현
    let target = "안녕하세요";
    let keys = korean_to_eng(target);
    let mut session = Session::new(target);
    let t0 = Instant::now();
    for end in 1..=keys.len() {
        session.on_input_at(&convert(&keys[..end]), t0);
        assert!(
            !session.statuses().contains(&Status::Incorrect),
            "{:?} 입력 중 오타 판정",
            &keys[..end]
        );
    }
    assert!(session.is_complete());
    assert_eq!(session.error_count(), 0);
}

#[test]
fn test_accuracy_non_decreasing_on_correct_append() {
    let mut session = Session::new("가나다라");
    let t0 = Instant::now();
    session.on_input_at("거", t0);
    session.on_input_at("거나", t0);
    let mut last = session.stats_at(t0).accuracy;
    for buffer in ["거나다", "거나다라"] {
        session.on_input_at(buffer, t0);
        let accuracy = session.stats_at(t0).accuracy;
        assert!(accuracy >= last);
        last = accuracy;
    }
    assert_eq!(last, 75);
}

#[test]
fn test_error_count_survives_correction() {
    let mut session = Session::new("가나");
    let t0 = Instant::now();
    session.on_input_at("고", t0);
    assert_eq!(session.status_at(0), Status::Incorrect);
    assert_eq!(session.error_count(), 1);

    session.on_input_at("", t0);
    session.on_input_at("가나", t0);
    assert_eq!(session.status_at(0), Status::Correct);
    assert_eq!(session.error_count(), 1);
    assert_eq!(session.stats_at(t0).error_count, 1);
}

#[test]
fn test_wpm_scenario() {
    let mut session = Session::new("안녕하세요");
    let t0 = Instant::now();
    session.on_input_at("ㅇ", t0);
    session.on_input_at("안녕하세", t0 + Duration::from_secs(7));
    assert_eq!(
        session.on_input_at("안녕하세요", t0 + Duration::from_secs(10)),
        Phase::Complete
    );

    let stats = session.stats_at(t0 + Duration::from_secs(30));
    assert_eq!(stats.wpm, 30);
    assert_eq!(stats.accuracy, 100);
    assert_eq!(stats.elapsed, Duration::from_secs(10));
    assert_eq!(
        stats.keystrokes_per_minute,
        metrics::per_minute(12, Duration::from_secs(10))
    );
}

#[test]
fn test_queue_resets_for_each_item() {
    let texts = ["가나", "다라", "마바"];
    let delay = Duration::from_millis(500);
    let mut queue = PracticeQueue::new(
        texts.iter().map(|t| PracticeItem::sentence(*t)).collect(),
        delay,
    );
    let mut now = Instant::now();
    let mut started = Vec::new();

    if let QueueEvent::ItemStarted { target, .. } = queue.start_at(now) {
        started.push(target);
    }
    let mut exhausted = None;
    for text in texts {
        assert_eq!(queue.session().phase(), Phase::Idle);
        assert!(matches!(
            queue.on_input_at(text, now),
            QueueEvent::ItemComplete(_)
        ));
        now += delay;
        match queue.tick_at(now) {
            QueueEvent::ItemStarted { target, .. } => started.push(target),
            QueueEvent::Exhausted(totals) => exhausted = Some(totals),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    assert_eq!(started, vec!["가나", "다라", "마바"]);
    let totals = exhausted.expect("queue should be exhausted");
    assert_eq!(totals.items_completed, 3);
    assert_eq!(totals.characters_typed, 6);
    assert_eq!(queue.results().len(), 3);
}

#[test]
fn test_queue_cancel_then_complete_again() {
    let delay = Duration::from_millis(500);
    let items = vec![PracticeItem::word("가"), PracticeItem::word("나")];
    let mut queue = PracticeQueue::new(items, delay);
    let t0 = Instant::now();
    queue.start_at(t0);
    queue.on_input_at("가", t0);
    assert_eq!(queue.on_input_at("", t0), QueueEvent::AdvanceCancelled);
    assert_eq!(queue.session().phase(), Phase::Composing);
    assert_eq!(queue.tick_at(t0 + delay), QueueEvent::None);

    let t1 = t0 + Duration::from_secs(1);
    assert!(matches!(
        queue.on_input_at("가", t1),
        QueueEvent::ItemComplete(_)
    ));
    assert_eq!(queue.pending_advance(), Some(t1 + delay));
}

#[test]
fn test_advisor_backspace_regardless_of_rest() {
    let mut session = Session::new("가나다");
    let t0 = Instant::now();
    session.on_input_at("가너다", t0);
    assert!(session.advice().needs_backspace());

    session.on_input_at("가너", t0);
    assert!(session.advice().needs_backspace());

    session.on_input_at("가", t0);
    assert_eq!(
        session.advice(),
        Advice::Press {
            jamo: 'ㄴ',
            keys: vec![Key::Char('s')],
        }
    );
}

#[test]
fn test_advisor_shift_key() {
    let mut session = Session::new("있");
    session.on_input_at("이", Instant::now());
    assert_eq!(
        session.advice(),
        Advice::Press {
            jamo: 'ㅆ',
            keys: vec![Key::Shift, Key::Char('t')],
        }
    );
}

#[test]
fn test_json_content_into_queue() {
    let items = items_from_json(r#"["하나", {"text": "둘", "kind": "word"}]"#).unwrap();
    let mut queue = PracticeQueue::new(items, Duration::ZERO);
    let t0 = Instant::now();
    queue.start_at(t0);
    queue.on_input_at("하나", t0);
    assert_eq!(
        queue.tick_at(t0),
        QueueEvent::ItemStarted {
            index: 1,
            target: "둘".into(),
        }
    );
}
