// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索结果（search_result）：搜索 API 返回的单条自然结果
/// - 联系人（contact）：抽取流水线的输出单元
/// - 搜索预算（budget）：控制分页和聚合停止条件的上限
pub mod budget;
pub mod contact;
pub mod search_result;
