// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::lead_search_request::LeadSearchRequest;
use crate::domain::models::contact::Contact;
use crate::domain::search::provider::{SearchError, SearchProvider};
use crate::engines::traits::PageEngine;
use crate::infrastructure::search::aggregator::ContactAggregator;
use crate::infrastructure::search::paginator::{PaginationHalt, ResultPaginator};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Debug, Error)]
pub enum LeadSearchError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Search API unreachable: {0}")]
    SearchUnavailable(SearchError),
}

/// 一次线索搜索的结果报告
///
/// 区分"搜索成功但没有可抽取的联系人"与传输错误：
/// 前者通过 `is_empty()` 报告，后者在首页就失败时
/// 作为 [`LeadSearchError::SearchUnavailable`] 返回。
#[derive(Debug)]
pub struct LeadSearchReport {
    /// 去重后的联系人，长度不超过目标数量
    pub contacts: Vec<Contact>,
    /// 分页阶段扫描过的原始结果条数
    pub items_seen: usize,
    /// 分页停止原因；`Failed` 表示保留部分结果的非致命失败
    pub halt: PaginationHalt,
}

impl LeadSearchReport {
    /// 搜索成功但没有抽取到任何联系人
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// 线索搜索用例
///
/// 编排分页器和聚合器完成一次完整的搜索运行。
/// 所有实体的生命周期都限定在单次调用内，运行之间不共享状态。
pub struct LeadSearchUseCase {
    paginator: ResultPaginator,
    aggregator: ContactAggregator,
}

impl LeadSearchUseCase {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        engine: Arc<dyn PageEngine>,
        concurrency: usize,
    ) -> Self {
        Self {
            paginator: ResultPaginator::new(provider),
            aggregator: ContactAggregator::new(engine, concurrency),
        }
    }

    /// 执行一次线索搜索
    pub async fn execute(
        &self,
        request: &LeadSearchRequest,
        page_size: usize,
    ) -> Result<LeadSearchReport, LeadSearchError> {
        request
            .validate()
            .map_err(|e| LeadSearchError::ValidationError(e.to_string()))?;

        let budget = request.budget(page_size);
        let locale = request.locale();

        let outcome = self
            .paginator
            .fetch_result_pages(&request.query, &budget, &locale)
            .await;

        // First request failed with nothing accumulated: the run cannot proceed
        if outcome.items.is_empty() {
            if let PaginationHalt::Failed(err) = &outcome.halt {
                return Err(LeadSearchError::SearchUnavailable(err.clone()));
            }
        }

        let contacts = self.aggregator.aggregate(&outcome.items, &budget).await;

        if contacts.is_empty() {
            info!(
                "Search for '{}' succeeded but nothing was extractable ({} items scanned)",
                request.query,
                outcome.items.len()
            );
        } else {
            info!(
                "Extracted {} contacts from {} items for '{}'",
                contacts.len(),
                outcome.items.len(),
                request.query
            );
        }

        Ok(LeadSearchReport {
            items_seen: outcome.items.len(),
            contacts,
            halt: outcome.halt,
        })
    }
}
