//! taja - 두벌식 한글 타자 연습
//!
//! 표준 입력 한 줄을 입력기 화면 상태(입력 버퍼) 하나로 보고, 줄마다 검증 결과와
//! 통계, 다음 키 안내를 출력합니다.

use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use taja::config::{load_config, save_config};
use taja::core::keymap::Key;
use taja::practice::content::{load_items, paragraph_items, sample_items};
use taja::practice::{Advice, PracticeQueue, QueueEvent, Session, Status};

/// Hangul typing practice on the 2-set keyboard layout
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// JSON file with practice items
    #[clap(short = 'c', long)]
    content: Option<PathBuf>,

    /// plain text file practiced line by line
    #[clap(short = 'p', long, conflicts_with = "content")]
    paragraph: Option<PathBuf>,

    /// confirmation delay before the next item (ms)
    #[clap(short = 'd', long)]
    delay_ms: Option<u64>,

    /// hide next-key hints
    #[clap(long)]
    no_hint: bool,

    /// write the effective settings to the config file
    #[clap(long)]
    save_config: bool,
}

fn status_line(session: &Session) -> String {
    (0..session.target().len())
        .map(|i| match session.status_at(i) {
            Status::Correct => 'O',
            Status::Incorrect => 'X',
            Status::Pending if i < session.input().len() => '~',
            Status::Pending => '.',
        })
        .collect()
}

fn describe_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|key| match key {
            Key::Char(c) => c.to_string(),
            Key::Space => "Space".to_string(),
            Key::Shift => "Shift".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn print_progress(session: &Session, show_hint: bool) {
    let stats = session.stats();
    println!("  {}", session.target_text());
    println!("  {}", status_line(session));
    println!(
        "  {}자/분 {}타/분 정확도 {}% 오타 {}",
        stats.wpm, stats.keystrokes_per_minute, stats.accuracy, stats.error_count
    );
    if show_hint {
        match session.advice() {
            Advice::Press { jamo, keys } => {
                println!("  다음: {} ({})", jamo, describe_keys(&keys))
            }
            Advice::Backspace => println!("  다음: Backspace"),
            Advice::Unmapped(c) => println!("  다음: {:?} (자판 안내 없음)", c),
            Advice::Done => {}
        }
    }
}

/// 이벤트 출력, 큐가 끝나면 false
fn report(event: &QueueEvent) -> bool {
    match event {
        QueueEvent::ItemStarted { index, target } => {
            println!("[{}] {}", index + 1, target);
        }
        QueueEvent::ItemComplete(result) => match serde_json::to_string(result) {
            Ok(json) => println!("완료: {}", json),
            Err(e) => log::error!("결과 직렬화 실패: {}", e),
        },
        QueueEvent::AdvanceCancelled => println!("다음 문장 전환 취소"),
        QueueEvent::Exhausted(totals) => {
            println!(
                "연습 끝: {}문장, {}글자, 오타 {}",
                totals.items_completed, totals.characters_typed, totals.error_count
            );
            return false;
        }
        QueueEvent::None => {}
    }
    true
}

/// 남은 큐 이벤트를 모두 처리 (완료 후 전환, 빈 문장), 큐가 끝나면 false
fn drain(queue: &mut PracticeQueue, delay: Duration) -> bool {
    loop {
        let event = queue.tick();
        if event == QueueEvent::None {
            return true;
        }
        if !report(&event) {
            return false;
        }
        if let QueueEvent::ItemComplete(_) = event {
            // 줄 단위 입력이라 확인 시간 동안 대기 후 바로 전환
            thread::sleep(delay);
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config();
    if let Some(ms) = cli.delay_ms {
        config.confirm_delay_ms = ms;
    }
    if cli.no_hint {
        config.show_next_key = false;
    }
    if cli.save_config {
        if let Err(e) = save_config(&config) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let items = if let Some(path) = &cli.content {
        match load_items(path) {
            Ok(items) => items,
            Err(e) => {
                eprintln!("연습 데이터를 불러올 수 없습니다: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else if let Some(path) = &cli.paragraph {
        match std::fs::read_to_string(path) {
            Ok(text) => paragraph_items(&text),
            Err(e) => {
                eprintln!("문단 파일을 읽을 수 없습니다: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        sample_items()
    };

    let mut queue = PracticeQueue::new(items, config.confirm_delay());
    queue.set_lookahead(config.lookahead);

    if !report(&queue.start()) || !drain(&mut queue, config.confirm_delay()) {
        return ExitCode::SUCCESS;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let event = queue.on_input(&line);
        print_progress(queue.session(), config.show_next_key);
        report(&event);

        if let QueueEvent::ItemComplete(_) = event {
            thread::sleep(config.confirm_delay());
            if !drain(&mut queue, config.confirm_delay()) {
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
