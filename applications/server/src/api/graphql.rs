/// GraphQL endpoint
use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};

/// POST /graphql
/// Execute a `{query, variables}` request and answer `{data}` or `{errors}`
///
/// Headers set by resolvers are copied onto the HTTP response.
pub async fn graphql(
    State(app_state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> impl IntoResponse {
    let mut response = app_state.schema.execute(request).await;
    let headers = std::mem::take(&mut response.http_headers);
    (headers, Json(response))
}

/// GET /graphql
/// Interactive GraphiQL page
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
