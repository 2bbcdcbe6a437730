//! The GraphQL surface: one query field, `ask(prompt: String!): String!`.

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{FromRequest, Request, State};
use axum::response::{Html, IntoResponse, Response};

use crate::application::AskUseCase;

use super::server::GatewayState;

pub type AskSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    // Forwards `prompt` to the completion service and returns its answer.
    async fn ask(&self, ctx: &Context<'_>, prompt: String) -> async_graphql::Result<String> {
        let use_case = ctx.data::<AskUseCase>()?;
        Ok(use_case.execute(&prompt).await.into_field_value())
    }
}

pub fn build_schema(ask: AskUseCase) -> AskSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(ask)
        .finish()
}

pub async fn graphql_post(State(state): State<GatewayState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET executes a query passed in the query string; without one it serves
/// GraphiQL when the page is enabled.
pub async fn graphql_get(State(state): State<GatewayState>, request: Request) -> Response {
    if state.config.graphiql_enabled() && request.uri().query().is_none() {
        return Html(
            GraphiQLSource::build()
                .endpoint(&state.config.graphql_endpoint)
                .finish(),
        )
        .into_response();
    }

    match <GraphQLRequest as FromRequest<GatewayState>>::from_request(request, &state).await {
        Ok(req) => GraphQLResponse::from(state.schema.execute(req.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}
