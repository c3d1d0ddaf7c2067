// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 页面引擎 trait 定义
///
/// 所有页面抓取引擎都必须实现此 trait。
/// 实现必须可以在独立输入上被大量并行调用，
/// 且不持有共享可变状态。
#[async_trait]
pub trait PageEngine: Send + Sync {
    /// 抓取页面并缩减为可见文本
    ///
    /// 页面抓取失败是非致命的：HTTP 非成功状态或任何传输层
    /// 错误（超时、DNS、连接）都返回空字符串而不是传播错误。
    async fn fetch_visible_text(&self, url: &str) -> String;

    /// 获取引擎名称
    fn name(&self) -> &'static str;
}
