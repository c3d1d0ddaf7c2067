// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试主模块
///
/// 使用 wiremock 模拟搜索 API 和被抓取的页面，
/// 覆盖分页、聚合和完整的线索搜索流水线
pub mod helpers;
pub mod lead_pipeline_test;
