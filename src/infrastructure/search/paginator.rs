// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::budget::{Locale, SearchBudget};
use crate::domain::models::search_result::SearchResultItem;
use crate::domain::search::provider::{SearchError, SearchProvider};
use crate::utils::extraction::FieldExtractor;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// 分页停止原因
#[derive(Debug, Clone, PartialEq)]
pub enum PaginationHalt {
    /// 摘要中累计的有效去重邮箱数已达到目标
    TargetReached,
    /// API 返回了空的自然结果列表（结果耗尽，非错误）
    Exhausted,
    /// 某次请求失败；已累计的部分结果被保留
    Failed(SearchError),
}

/// 分页结果
///
/// 请求失败不会丢弃已取得的数据：`items` 始终包含
/// 停止前按请求顺序拼接的所有页面，失败通过 `halt` 上报。
#[derive(Debug)]
pub struct PaginationOutcome {
    pub items: Vec<SearchResultItem>,
    pub halt: PaginationHalt,
}

/// 结果分页器
///
/// 以 `page_size` 为步长驱动对搜索 API 的连续请求，
/// 累计原始结果条目直到预算或耗尽条件满足。
///
/// 停止谓词是统一的：摘要中累计的有效去重邮箱数达到
/// `target_count` 即停止，否则持续请求直到结果耗尽。
/// 聚合器随后独立地对最终联系人数量施加同一上限。
pub struct ResultPaginator {
    provider: Arc<dyn SearchProvider>,
}

impl ResultPaginator {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// 抓取结果页面直到停止条件满足
    ///
    /// 停止条件（任一满足即停止）：
    /// 1. 摘要中累计的有效去重邮箱数 >= `budget.target_count`
    /// 2. 某一页返回零条自然结果（耗尽）
    /// 3. 某次请求失败（保留部分结果并上报）
    pub async fn fetch_result_pages(
        &self,
        query: &str,
        budget: &SearchBudget,
        locale: &Locale,
    ) -> PaginationOutcome {
        let mut items: Vec<SearchResultItem> = Vec::new();
        let mut seen_emails: HashSet<String> = HashSet::new();
        let mut start = 0;

        loop {
            match self
                .provider
                .search_page(query, locale, start, budget.page_size)
                .await
            {
                Ok(page) => {
                    if page.is_empty() {
                        info!(
                            "Search exhausted at offset {} with {} items accumulated",
                            start,
                            items.len()
                        );
                        return PaginationOutcome {
                            items,
                            halt: PaginationHalt::Exhausted,
                        };
                    }

                    for item in &page {
                        seen_emails.extend(FieldExtractor::extract_emails(&item.snippet));
                    }
                    items.extend(page);

                    if seen_emails.len() >= budget.target_count {
                        info!(
                            "Pagination target reached: {} validated snippet emails across {} items",
                            seen_emails.len(),
                            items.len()
                        );
                        return PaginationOutcome {
                            items,
                            halt: PaginationHalt::TargetReached,
                        };
                    }

                    start += budget.page_size;
                }
                Err(e) => {
                    warn!(
                        "Search request via {} at offset {} failed: {} ({} items kept)",
                        self.provider.name(),
                        start,
                        e,
                        items.len()
                    );
                    return PaginationOutcome {
                        items,
                        halt: PaginationHalt::Failed(e),
                    };
                }
            }
        }
    }
}
