use super::CatalogEntity;
use crate::error::KennelError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use kennel_api_structs::{get_entity::PathParams, Response};
use kennel_domain::{EntityKind, ID};
use kennel_infra::KennelContext;
use std::marker::PhantomData;

pub async fn get_entity_controller<E: CatalogEntity>(
    path: web::Path<PathParams>,
    ctx: web::Data<KennelContext>,
) -> Result<HttpResponse, KennelError> {
    let usecase = GetEntityUseCase::<E> {
        entity_id: path.id.clone(),
        _entity: PhantomData,
    };

    execute(usecase, &ctx)
        .await
        .map(|entity| {
            let message = format!("{} found", entity.display_name());
            HttpResponse::Ok().json(Response::success(message, Some(entity)))
        })
        .map_err(KennelError::from)
}

#[derive(Debug)]
struct GetEntityUseCase<E> {
    entity_id: ID,
    _entity: PhantomData<E>,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(EntityKind, ID),
    StorageError(EntityKind),
}

impl From<UseCaseError> for KennelError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(kind, id) => {
                Self::NotFound(format!("The {} with id: {}, was not found.", kind, id))
            }
            UseCaseError::StorageError(kind) => {
                Self::InternalError(format!("An error occurred while fetching the {}", kind))
            }
        }
    }
}

/// Tombstoned entities are still returned, flagged with `isDeleted`
#[async_trait::async_trait(?Send)]
impl<E: CatalogEntity> UseCase for GetEntityUseCase<E> {
    type Response = E;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEntity";

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error> {
        match E::repo(&ctx.repos).find(&self.entity_id).await {
            Ok(Some(entity)) => Ok(entity),
            Ok(None) => Err(UseCaseError::NotFound(E::KIND, self.entity_id.clone())),
            Err(_) => Err(UseCaseError::StorageError(E::KIND)),
        }
    }
}
