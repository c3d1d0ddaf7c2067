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

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含搜索 API 和页面抓取的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 搜索 API 配置
    pub search: SearchSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
}

/// 搜索 API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索 API 端点
    pub endpoint: String,
    /// API 凭证（不透明的 bearer 凭证）
    pub api_key: String,
    /// 单次搜索请求超时时间（秒）
    pub timeout_secs: u64,
    /// 每页返回的结果数量
    pub page_size: usize,
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 单次页面抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 并发抓取任务数上限
    pub concurrency: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LEADRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 内建默认值，不含文件和环境变量来源
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Default Search settings
            .set_default("search.endpoint", "https://google.serper.dev/search")?
            .set_default("search.api_key", "")?
            .set_default("search.timeout_secs", 10)?
            .set_default("search.page_size", 10)?
            // Default Fetch settings
            .set_default("fetch.timeout_secs", 10)?
            .set_default("fetch.concurrency", 10)
    }
}
