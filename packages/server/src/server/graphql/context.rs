use sqlx::PgPool;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
