// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 实现网页抓取引擎，为聚合器提供页面可见文本
pub mod fetch_engine;
pub mod traits;
