// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::budget::{Locale, SearchBudget};
use serde::Deserialize;
use validator::Validate;

/// 线索搜索请求
///
/// 由（范围之外的）UI 层提供的自由文本查询和地域输入，
/// 在进入流水线前经过验证。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadSearchRequest {
    /// 搜索查询词
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    /// 目标联系人数量上限
    #[validate(range(min = 1, message = "target_count must be positive"))]
    pub target_count: usize,
    /// 国家
    #[serde(default = "default_country")]
    pub country: String,
    /// 语言代码
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_country() -> String {
    "us".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl LeadSearchRequest {
    /// 构造本次运行的搜索预算
    pub fn budget(&self, page_size: usize) -> SearchBudget {
        SearchBudget::new(self.target_count, page_size)
    }

    /// 构造本次运行的地域设置
    pub fn locale(&self) -> Locale {
        Locale::new(self.country.clone(), self.language.clone())
    }
}
