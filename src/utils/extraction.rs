// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators::is_valid_email;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// 字段未命中时使用的哨兵值
pub const UNKNOWN_FIELD: &str = "unknown";

/// 邮箱形状的模式
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

/// 宽松的带分隔符数字模式（电话号码）
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s().\-]{7,}\d").unwrap());

/// 公司标签同义词，后随分隔符并捕获该行剩余部分
static COMPANY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:company|empresa|organization|firm)\b\s*[:\-]\s*([^\r\n]+)").unwrap()
});

/// 职位标签同义词，后随分隔符并捕获该行剩余部分
static ROLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:role|cargo|position|title)\b\s*[:\-]\s*([^\r\n]+)").unwrap()
});

/// 辅助字段抽取结果
///
/// 每个字段在未命中时为哨兵值 `"unknown"`，
/// 绝不静默缺失，下游始终有可展示的值。
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryFields {
    pub company: String,
    pub role: String,
    pub phone: String,
}

/// 字段抽取器
///
/// 对文本块应用模式匹配，抽取邮箱、电话以及松散标注的
/// 公司/职位字段。标签邻近匹配是有意为之的启发式做法，
/// 并非结构化解析，对缺少显式标注字段的大多数输入
/// 预期产出 `"unknown"`。
pub struct FieldExtractor;

impl FieldExtractor {
    /// 抽取文本中所有通过验证的邮箱
    ///
    /// 调用内按首次出现顺序去重（保证快照阶段的确定性输出），
    /// 并经由 [`is_valid_email`] 过滤；无存活候选时返回空向量。
    pub fn extract_emails(text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut emails = Vec::new();

        for m in EMAIL_REGEX.find_iter(text) {
            let candidate = m.as_str();
            if !is_valid_email(candidate) {
                continue;
            }
            if seen.insert(candidate.to_string()) {
                emails.push(candidate.to_string());
            }
        }

        emails
    }

    /// 尽力抽取公司、职位和电话字段
    pub fn extract_auxiliary_fields(text: &str) -> AuxiliaryFields {
        AuxiliaryFields {
            company: Self::labeled_field(&COMPANY_REGEX, text),
            role: Self::labeled_field(&ROLE_REGEX, text),
            phone: PHONE_REGEX
                .find(text)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        }
    }

    /// 捕获标签后该行的剩余部分，未命中时返回哨兵值
    fn labeled_field(pattern: &Regex, text: &str) -> String {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
    }
}
