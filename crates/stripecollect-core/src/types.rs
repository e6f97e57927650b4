//! 公共类型（对外暴露）

/// 输出记录：工具 stdout 解析后的通用 JSON 值，原样（紧凑）写入 ndjson 的一行
pub type OutputRecord = serde_json::Value;
