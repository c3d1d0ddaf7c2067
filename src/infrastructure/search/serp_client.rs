// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::models::budget::Locale;
use crate::domain::models::search_result::SearchResultItem;
use crate::domain::search::provider::{SearchError, SearchProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// 搜索 API 客户端
///
/// 通过 POST-JSON 协议调用第三方搜索端点，
/// 凭证作为不透明的 `X-API-KEY` 头传递。
pub struct SerpClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

/// 搜索 API 响应结构
#[derive(Debug, Default, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic: Vec<SerpOrganicItem>,
}

/// 单条自然结果条目
#[derive(Debug, Deserialize)]
struct SerpOrganicItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl SerpClient {
    /// 创建新的搜索 API 客户端
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// 从配置创建客户端
    pub fn from_settings(settings: &SearchSettings) -> Result<Self, SearchError> {
        Self::new(
            settings.endpoint.clone(),
            settings.api_key.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// 解析响应体中的自然结果
    ///
    /// 缺失 `organic` 字段或格式错误的 JSON 都按零结果处理
    /// （等同于结果耗尽），绝不造成崩溃。
    fn parse_organic(body: &str) -> Vec<SearchResultItem> {
        match serde_json::from_str::<SerpResponse>(body) {
            Ok(parsed) => parsed
                .organic
                .into_iter()
                .map(|item| SearchResultItem::new(item.title, item.snippet, item.link))
                .collect(),
            Err(e) => {
                warn!("Malformed search API response treated as empty page: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SearchProvider for SerpClient {
    async fn search_page(
        &self,
        query: &str,
        locale: &Locale,
        start: usize,
        page_size: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let body = json!({
            "q": query,
            "location": locale.country,
            "gl": locale.country,
            "hl": locale.language,
            "start": start,
            "num": page_size,
        });

        debug!("Search API request: start={} num={}", start, page_size);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(SearchError::HttpStatus(response.status().as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::NetworkError(format!("Failed to read response body: {}", e)))?;

        Ok(Self::parse_organic(&text))
    }

    fn name(&self) -> &'static str {
        "serp"
    }
}
