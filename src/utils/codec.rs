//! base64 编解码
//!
//! 评测服务要求代码、输入输出均以标准 base64 传输。
//! 服务端返回的 base64 每 60 个字符换行，解码前需去掉空白。

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine};

/// 编码文本
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// 解码为原始字节
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}

/// 解码为文本，`None` 视为空字符串，非 UTF-8 字节会被替换
pub fn decode_text(encoded: Option<&str>) -> Result<String, DecodeError> {
    match encoded {
        None => Ok(String::new()),
        Some(value) => {
            let bytes = decode(value)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
