// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索 API 返回的单条自然结果
///
/// 由分页器产生、聚合器消费，创建后不可变。
/// `link` 在 API 未返回链接时为空字符串。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResultItem {
    pub fn new(title: String, snippet: String, link: String) -> Self {
        Self {
            title,
            snippet,
            link,
        }
    }
}
