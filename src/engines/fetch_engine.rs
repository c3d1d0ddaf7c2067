// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::PageEngine;
use crate::utils::html_text;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎。
/// 仅持有不可变的 HTTP 客户端，可安全地并行调用。
pub struct FetchEngine {
    client: reqwest::Client,
}

impl FetchEngine {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次 GET 请求的超时时间
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageEngine for FetchEngine {
    /// 执行HTTP抓取并提取可见文本
    ///
    /// 失败降级为空字符串，绝不中断批处理
    async fn fetch_visible_text(&self, url: &str) -> String {
        // Only plain http(s) links are fetchable
        match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            _ => {
                warn!("Skipping unfetchable link: {}", url);
                return String::new();
            }
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Page fetch failed for {}: {}", url, e);
                return String::new();
            }
        };

        if !response.status().is_success() {
            warn!("Page fetch for {} returned status {}", url, response.status());
            return String::new();
        }

        match response.text().await {
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), url);
                html_text::visible_text(&body)
            }
            Err(e) => {
                warn!("Failed to read response body from {}: {}", url, e);
                String::new()
            }
        }
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "fetch"
    }
}
