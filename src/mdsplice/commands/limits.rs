use crate::chunk::DEFAULT_CHUNK_BYTES;
use crate::commands::CmdResult;
use crate::error::Result;
use serde::Serialize;

/// Known size limits and how the tool mitigates them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsInfo {
    pub default_chunk_bytes: usize,
    pub effective_chunk_bytes: usize,
    pub recommended: Vec<String>,
    pub notes: Vec<String>,
}

pub fn run(effective_chunk_bytes: usize) -> Result<CmdResult> {
    let info = LimitsInfo {
        default_chunk_bytes: DEFAULT_CHUNK_BYTES,
        effective_chunk_bytes,
        recommended: vec![
            "Use split --chunk-bytes to tune chunk size for stricter payload limits.".to_string(),
            "Use replace for section-scoped edits instead of rewriting whole documents."
                .to_string(),
        ],
        notes: vec![
            "Chunks break on paragraph boundaries first, then lines, then raw bytes.".to_string(),
            "Chunking is not fence-aware: a long fenced code block may be split mid-fence."
                .to_string(),
        ],
    };
    Ok(CmdResult::default().with_limits(info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_default_and_effective_budgets() {
        let result = run(20000).unwrap();
        let info = result.limits.unwrap();
        assert_eq!(info.default_chunk_bytes, DEFAULT_CHUNK_BYTES);
        assert_eq!(info.effective_chunk_bytes, 20000);
        assert!(!info.notes.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = run(DEFAULT_CHUNK_BYTES).unwrap();
        let json = serde_json::to_string(&result.limits.unwrap()).unwrap();
        assert!(json.contains("\"defaultChunkBytes\":30000"));
    }
}
