// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// HTML清理器
///
/// 将 HTML 文档缩减为人类可读的可见文本，
/// 移除 script、style、注释和所有标记。
pub struct HtmlCleaner {
    script_regex: Regex,
    style_regex: Regex,
    comment_regex: Regex,
    tag_regex: Regex,
    whitespace_regex: Regex,
}

/// 全局清理器实例
static CLEANER: Lazy<HtmlCleaner> = Lazy::new(HtmlCleaner::new);

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlCleaner {
    /// 创建新的HTML清理器
    pub fn new() -> Self {
        Self {
            script_regex: Regex::new(r#"(?is)<script[^>]*>.*?</script>"#).unwrap(),
            style_regex: Regex::new(r#"(?is)<style[^>]*>.*?</style>"#).unwrap(),
            comment_regex: Regex::new(r#"(?is)<!--.*?-->"#).unwrap(),
            tag_regex: Regex::new(r#"(?is)<[^>]+>"#).unwrap(),
            whitespace_regex: Regex::new(r#"\s+"#).unwrap(),
        }
    }

    /// 获取全局清理器实例
    pub fn global() -> &'static Self {
        &CLEANER
    }

    /// 从HTML中提取可见文本
    pub fn extract_text(&self, html: &str) -> String {
        // 移除script标签
        let text = self.script_regex.replace_all(html, "");

        // 移除style标签
        let text = self.style_regex.replace_all(&text, "");

        // 移除HTML注释
        let text = self.comment_regex.replace_all(&text, "");

        // 替换HTML标签为空格
        let text = self.tag_regex.replace_all(&text, " ");

        // 解码HTML实体
        let text = html_escape::decode_html_entities(&text).to_string();

        // 移除不可见字符（但保留空白字符）
        let text: String = text
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();

        // 规范化空白字符
        let text = self.whitespace_regex.replace_all(&text, " ");

        text.trim().to_string()
    }
}

/// 便捷函数：将 HTML 文档缩减为可见文本
pub fn visible_text(html: &str) -> String {
    HtmlCleaner::global().extract_text(html)
}
