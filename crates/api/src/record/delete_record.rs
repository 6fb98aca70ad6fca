use super::RecordEntity;
use crate::error::KennelError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use kennel_api_structs::{delete_entity::PathParams, Response};
use kennel_domain::ID;
use kennel_infra::KennelContext;
use std::marker::PhantomData;
use tracing::info;

pub async fn delete_record_controller<R: RecordEntity>(
    path: web::Path<PathParams>,
    ctx: web::Data<KennelContext>,
) -> Result<HttpResponse, KennelError> {
    let usecase = DeleteRecordUseCase::<R> {
        record_id: path.id.clone(),
        _record: PhantomData,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            let message = format!("The {} with id: {} was deleted", R::LABEL, path.id);
            HttpResponse::Ok().json(Response::<()>::success(message, None))
        })
        .map_err(KennelError::from)
}

/// Records carry no tombstone, so they are erased on the first request
#[derive(Debug)]
struct DeleteRecordUseCase<R> {
    record_id: ID,
    _record: PhantomData<R>,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(&'static str, ID),
    StorageError(&'static str),
}

impl From<UseCaseError> for KennelError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(label, id) => {
                Self::NotFound(format!("The {} with id: {}, was not found.", label, id))
            }
            UseCaseError::StorageError(label) => {
                Self::InternalError(format!("An error occurred while deleting the {}", label))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<R: RecordEntity> UseCase for DeleteRecordUseCase<R> {
    type Response = R;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteRecord";

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error> {
        match R::repo(&ctx.repos).delete(&self.record_id).await {
            Ok(Some(record)) => {
                info!("{} with id: {} deleted", R::LABEL, self.record_id);
                Ok(record)
            }
            Ok(None) => Err(UseCaseError::NotFound(R::LABEL, self.record_id.clone())),
            Err(_) => Err(UseCaseError::StorageError(R::LABEL)),
        }
    }
}
