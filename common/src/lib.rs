//! tell-me-more Common Library
//!
//! CLIから使われる純粋なロジック（I/Oなし）:
//! ファイル名判定、ファイル名サニタイズ、プロンプト生成、APIレスポンスのパース

pub mod classifier;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod sanitizer;
pub mod types;

pub use classifier::is_target_file;
pub use error::{Error, Result};
pub use parser::{parse_chat_response, parse_gemini_response, parse_vision_response};
pub use prompts::{build_suggestion_prompt, DESCRIBE_IMAGE_PROMPT, MAX_SUGGESTION_CHARS};
pub use sanitizer::sanitize_file_name;
pub use types::Description;
