//! GraphQL transport: HTTP execution, WebSocket subscriptions, playground.

use actix_web::{HttpRequest, HttpResponse, Result, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};

use crate::schema::ForumSchema;

/// POST /query
pub async fn execute(schema: web::Data<ForumSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET /query (WebSocket upgrade)
pub async fn subscription(
    schema: web::Data<ForumSchema>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse> {
    GraphQLSubscription::new(schema.as_ref().clone()).start(&req, payload)
}

/// GET /
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            GraphiQLSource::build()
                .endpoint("/query")
                .subscription_endpoint("/query")
                .finish(),
        )
}

/// GET /schema
pub async fn sdl(schema: web::Data<ForumSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(schema.sdl())
}
