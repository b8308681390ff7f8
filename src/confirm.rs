//! リネーム確認の入力
//!
//! 端末なら dialoguer のプロンプト、パイプ入力なら1行ずつ読む。

use crate::error::{Result, TellMeMoreError};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

const CONFIRM_PROMPT: &str = "Do you want to rename the file? (y/n)";

pub trait Prompter {
    /// 提案名でリネームしてよいか確認
    fn confirm(&mut self, suggestion: &str) -> Result<bool>;
}

/// "y"（大文字小文字無視、前後空白無視）のみ肯定
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// 対話端末用（dialoguer）
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, _suggestion: &str) -> Result<bool> {
        let input: String = Input::new()
            .with_prompt(CONFIRM_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TellMeMoreError::Prompt(e.to_string()))?;
        Ok(is_affirmative(&input))
    }
}

/// 任意の入出力から1行ずつ読む
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&mut self, _suggestion: &str) -> Result<bool> {
        write!(self.writer, "{}: ", CONFIRM_PROMPT)?;
        self.writer.flush()?;

        // EOF と UTF-8 でない入力は否定扱い
        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        Ok(is_affirmative(&String::from_utf8_lossy(&line)))
    }
}

/// 標準入力に応じたプロンプタを作成
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        ))
    }
}
