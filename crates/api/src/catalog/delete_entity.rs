use super::CatalogEntity;
use crate::error::KennelError;
use crate::shared::{
    tombstone::{Deleted, TombstoneDeletionPolicy},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use kennel_api_structs::delete_entity::PathParams;
use kennel_domain::{DeletionError, DeletionTarget};
use kennel_infra::KennelContext;
use std::marker::PhantomData;

pub async fn delete_entity_controller<E: CatalogEntity>(
    path: web::Path<PathParams>,
    ctx: web::Data<KennelContext>,
) -> Result<HttpResponse, KennelError> {
    let usecase = DeleteEntityUseCase::<E>::new(DeletionTarget::new(path.id.clone()));

    execute(usecase, &ctx)
        .await
        .map(|deleted| HttpResponse::Ok().json(deleted.into_response()))
        .map_err(KennelError::from)
}

#[derive(Debug)]
pub struct DeleteEntityUseCase<E> {
    target: DeletionTarget,
    _entity: PhantomData<E>,
}

impl<E> DeleteEntityUseCase<E> {
    pub fn new(target: DeletionTarget) -> Self {
        Self {
            target,
            _entity: PhantomData,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<E: CatalogEntity> UseCase for DeleteEntityUseCase<E> {
    type Response = Deleted<E>;

    type Error = DeletionError;

    const NAME: &'static str = "DeleteEntity";

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error> {
        let store = E::repo(&ctx.repos);
        TombstoneDeletionPolicy::new(store.as_ref())
            .delete(&self.target)
            .await
    }
}
