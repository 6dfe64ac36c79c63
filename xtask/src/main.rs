//! # xtask - Автоматизация сборки проекта
//!
//! Команды для проверки воркспейса: форматирование, clippy, тесты и
//! генерация тестовых данных.
//!
//! См. [`HELP_TEXT`] для полного списка команд.
use anyhow::{Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда> [аргументы]

Команды:
  help              Показать это сообщение
  fmt               Запустить rustfmt
  fmt-check         Проверить форматирование (CI)
  clippy            Запустить clippy (воркспейс)
  test              Запустить тесты через nextest (воркспейс)
  ci                Запустить fmt-check + clippy + test (профиль CI)
  sample [N] [FILE] Сгенерировать N записей (по умолчанию 1000000) в FILE
                    (по умолчанию target/people.csv) и найти 10 самых молодых

Примечание:
  cargo-nextest устанавливается автоматически при первом запуске тестов
"#;

const DEFAULT_SAMPLE_ROWS: &str = "1000000";
const DEFAULT_SAMPLE_FILE: &str = "target/people.csv";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo +nightly fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo +nightly fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?),
        "test" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            // nextest не запускает doctests
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        "ci" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo +nightly fmt --all -- --check").run()?;
            cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?;
            cmd!(sh, "cargo nextest run --workspace --profile ci").run()?;
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        "sample" => {
            let rows = args.next().unwrap_or_else(|| DEFAULT_SAMPLE_ROWS.to_string());
            let file = args.next().unwrap_or_else(|| DEFAULT_SAMPLE_FILE.to_string());
            sample(&sh, &rows, &file)
        }
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

/// Сгенерировать файл через `people-gen` и прогнать по нему `youngest`
/// (обе утилиты в release-профиле).
fn sample(sh: &Shell, rows: &str, file: &str) -> Result<()> {
    if !matches!(rows.parse::<u64>(), Ok(n) if n > 0) {
        bail!("Количество записей должно быть положительным числом: {rows}");
    }

    cmd!(sh, "cargo run --release -q -p people-gen -- {file} {rows}").run()?;
    cmd!(sh, "cargo run --release -q -p youngest -- {file} 10").run()?;
    Ok(())
}

/// Проверить наличие cargo-nextest и установить при необходимости.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    // quiet, чтобы не выводить версию в консоль
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest не найден, устанавливаю...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest успешно установлен");
    Ok(())
}
