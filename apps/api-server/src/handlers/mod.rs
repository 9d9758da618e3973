//! HTTP handlers and route configuration.

mod health;
mod resource;


use actix_web::web;
use newsroom_core::services::{
    AuthorService, CommentService, CrudService, NewsScopedService, NewsService, TagService,
};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health::health_check))
    .service(crud_routes::<NewsService>(web::scope("/news")))
    .service(scoped_routes::<AuthorService>(web::scope("/author")))
    .service(scoped_routes::<CommentService>(web::scope("/comment")))
    .service(scoped_routes::<TagService>(web::scope("/tag")));
}

/// Collection and item routes shared by every resource.
fn crud_routes<S: CrudService>(scope: actix_web::Scope) -> actix_web::Scope {
    scope
        .route("", web::get().to(resource::list::<S>))
        .route("", web::post().to(resource::create::<S>))
        .route("/{id}", web::get().to(resource::get_by_id::<S>))
        .route("/{id}", web::patch().to(resource::update::<S>))
        .route("/{id}", web::delete().to(resource::delete::<S>))
}

/// Resources that also list by the news item they belong to.
fn scoped_routes<S: NewsScopedService>(scope: actix_web::Scope) -> actix_web::Scope {
    crud_routes::<S>(scope.route("/news/{id}", web::get().to(resource::list_by_news_id::<S>)))
}
