// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 抽取流水线的输出单元
///
/// 身份键为 `email`（大小写敏感的精确字符串），创建后不可变。
/// `company`、`role` 和 `phone` 在未能抽取到对应字段时
/// 为哨兵值 `"unknown"`，保证下游始终有可展示的值。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub name: String,
    pub company: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}
