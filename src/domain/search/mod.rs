// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索抽象模块
///
/// 定义搜索 API 的抽象接口和错误类型
pub mod provider;
