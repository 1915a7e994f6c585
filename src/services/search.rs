//! Web search service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::search::*;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const SEARCH: Operation = Operation::post("search.search", "search/v1/search");
const ANSWER: Operation = Operation::post("search.answer", "search/v1/answer");

/// `search/v1`
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a Client,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Run a web search
    pub async fn search(
        &self,
        params: impl Into<Item<SearchParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<SearchResponse> {
        let body = payload::<SearchParams>(params.into())?;
        self.client.request(&SEARCH, &[], Some(body), options).await
    }

    /// Answer a question with cited sources
    pub async fn answer(
        &self,
        params: impl Into<Item<AnswerParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<AnswerResponse> {
        let body = payload::<AnswerParams>(params.into())?;
        self.client.request(&ANSWER, &[], Some(body), options).await
    }
}
