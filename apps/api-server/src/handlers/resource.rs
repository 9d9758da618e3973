//! Resource handlers, generic over the service behind each route scope.

use actix_web::{HttpRequest, HttpResponse, web};
use newsroom_core::pagination::paginate;
use newsroom_core::services::{CrudService, NewsScopedService};
use newsroom_shared::dto::PageQuery;
use validator::Validate;

use crate::middleware::error::{AppError, AppResult};

/// List every entity, optionally as one sorted page.
///
/// GET /{resource}?page=&limit=&sort=
pub async fn list<S: CrudService>(
    req: HttpRequest,
    service: web::Data<S>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let items = service.list().await?;
    if items.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }

    let page = paginate(items, &query, req.path())?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /{resource}/{id}
pub async fn get_by_id<S: CrudService>(
    service: web::Data<S>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let item = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// POST /{resource}
pub async fn create<S: CrudService>(
    service: web::Data<S>,
    body: web::Json<S::Create>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let item = service.create(input).await?;
    tracing::info!(entity = S::ENTITY, "Entity created");
    Ok(HttpResponse::Created().json(item))
}

/// PATCH /{resource}/{id}
pub async fn update<S: CrudService>(
    service: web::Data<S>,
    path: web::Path<i64>,
    body: web::Json<S::Update>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;

    let item = service.update(input, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /{resource}/{id}
pub async fn delete<S: CrudService>(
    service: web::Data<S>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !service.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!(
            "{} with id {} not found",
            S::ENTITY,
            id
        )));
    }

    tracing::info!(entity = S::ENTITY, id, "Entity deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Entities attached to one news item, unpaged.
///
/// GET /{resource}/news/{id}
pub async fn list_by_news_id<S: NewsScopedService>(
    service: web::Data<S>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let items = service.list_by_news_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(items))
}
