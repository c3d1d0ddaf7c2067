// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索基础设施模块
///
/// 包含搜索 API 客户端、结果分页器和联系人聚合器
pub mod aggregator;
pub mod paginator;
pub mod serp_client;
