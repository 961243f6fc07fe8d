//! Interactive storyboard chat loop.
//!
//! Minimal presentation adapter over the library: timestamped transcript,
//! the storyboard's 800ms display delay before each reply, and a crop-detail
//! dump on `/crop <id>`. The delay is cosmetic only; resolution itself is
//! synchronous and instant.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use agrobuddy_core::{CropCatalog, RuleSet};

/// Perceived-latency delay before showing a reply, per the storyboard.
const REPLY_DELAY: Duration = Duration::from_millis(800);

fn stamp() -> String {
    Local::now().format("[%H:%M]").to_string()
}

fn print_crop(catalog: &CropCatalog, id: &str) {
    match catalog.get(id) {
        Ok(crop) => {
            println!("  {} (시작일 {})", crop.name, crop.start_date);
            println!("  화분 크기: {}", crop.container_size);
            println!("  물 주는 양: {}", crop.water_volume);
            println!("  물 주는 주기: {}", crop.watering_interval);
            println!("  흙 종류: {}", crop.soil_mix);
            println!("  성장 진행도: {}", crop.progress_display());
        }
        Err(err) => println!("  {}", err),
    }
}

fn main() -> Result<()> {
    let catalog = CropCatalog::builtin();
    let rules = RuleSet::storyboard();

    println!("AgroBuddy 챗봇");
    println!("{}", "=".repeat(60));
    let mut ids: Vec<&str> = catalog.ids().collect();
    ids.sort();
    println!("등록된 작물: {} (/crop <id> 로 상세 보기)", ids.join(", "));
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if let Some(id) = message.strip_prefix("/crop ") {
            print_crop(&catalog, id.trim());
            continue;
        }

        println!("{} 나: {}", stamp(), message);
        thread::sleep(REPLY_DELAY);
        println!("{} AgroBuddy 챗봇: {}", stamp(), rules.resolve(message));
    }

    Ok(())
}
