// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序的核心业务逻辑和用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和搜索抽象接口
pub mod domain;

/// 引擎模块
///
/// 实现网页抓取引擎和可见文本提取
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如搜索 API 客户端、分页和聚合
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
