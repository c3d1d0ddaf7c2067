// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索预算
///
/// 调用方提供的上限，控制请求多少页结果以及抽取何时停止。
/// 不变式：`target_count > 0`。分页和聚合都必须遵守该上限，
/// 两者各自都可能成为限制因素。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SearchBudget {
    /// 目标联系人数量
    pub target_count: usize,
    /// 每页请求的结果数量
    pub page_size: usize,
}

impl SearchBudget {
    pub fn new(target_count: usize, page_size: usize) -> Self {
        Self {
            target_count,
            page_size: page_size.max(1),
        }
    }
}

/// 搜索地域设置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Locale {
    /// 国家，例如 "Spain"
    pub country: String,
    /// 语言代码，例如 "es"
    pub language: String,
}

impl Locale {
    pub fn new(country: String, language: String) -> Self {
        Self { country, language }
    }
}
