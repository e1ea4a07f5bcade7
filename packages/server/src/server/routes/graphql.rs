use axum::{extract::State, http::StatusCode, response::Html, Json};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest, GraphQLResponse};

use crate::server::app::AppState;
use crate::server::graphql::GraphQLContext;

/// GraphQL endpoint (`POST /graphql`)
///
/// Execution errors answer 400 with the GraphQL error body.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<GraphQLRequest>,
) -> (StatusCode, Json<GraphQLResponse>) {
    let context = GraphQLContext::new(state.db_pool.clone());
    let response = request.execute(&state.schema, &context).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}

/// GraphiQL explorer (`GET /graphql`, debug builds)
pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source("/graphql", None))
}
