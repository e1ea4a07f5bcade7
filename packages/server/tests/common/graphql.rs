//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::Variables;
use serde_json::Value;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use sqlx::PgPool;

/// GraphQL client for executing queries in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Gets a value at the given dotted JSON path (`"cars.view.sortSelected"`).
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl GraphQLClient {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(db_pool),
        }
    }

    pub async fn query(&self, query: &str) -> GraphQLResult {
        self.query_with_vars(query, Variables::new()).await
    }

    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        match juniper::execute(query, None, &self.schema, &variables, &self.context).await {
            Ok((value, errors)) => GraphQLResult {
                data: Some(serde_json::to_value(&value).expect("GraphQL value is JSON")),
                errors: errors
                    .iter()
                    .map(|e| e.error().message().to_string())
                    .collect(),
            },
            Err(e) => GraphQLResult {
                data: None,
                errors: vec![e.to_string()],
            },
        }
    }
}
