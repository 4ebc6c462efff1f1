use async_graphql::Object;

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Liveness probe exposed through the schema
    async fn health(&self) -> &str {
        "ok"
    }
}
