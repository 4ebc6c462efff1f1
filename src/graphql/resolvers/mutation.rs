use async_graphql::{FieldResult, Json, Object};
use serde_json::Value;

use crate::graphql::types::NormalizeResult;
use crate::normalizer;

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Normalize a loosely structured cargo payload into typed records
    async fn normalize(
        &self,
        source: String,
        payload: Json<Value>,
    ) -> FieldResult<NormalizeResult> {
        let (item_types, items) = normalizer::normalize_raw(&source, &payload.0)?;
        Ok(NormalizeResult {
            item_types: item_types.into_iter().map(Into::into).collect(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}
