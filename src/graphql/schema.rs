use crate::graphql::resolvers::{Mutation, Query};
use async_graphql::{EmptySubscription, Schema};

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema
pub fn create_schema() -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription).finish()
}
