use super::RecordEntity;
use crate::error::KennelError;
use crate::shared::{
    references::{ensure_references_active, ReferenceError},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use kennel_api_structs::Response;
use kennel_domain::{EntityKind, ID};
use kennel_infra::KennelContext;

pub async fn create_record_controller<R: RecordEntity>(
    body: web::Json<R::Body>,
    ctx: web::Data<KennelContext>,
) -> Result<HttpResponse, KennelError> {
    let usecase = CreateRecordUseCase {
        record: R::from_body(body.into_inner()),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| {
            let message = format!("The {} with id: {} was created", R::LABEL, record.id());
            HttpResponse::Created().json(Response::success(message, Some(record)))
        })
        .map_err(KennelError::from)
}

#[derive(Debug)]
struct CreateRecordUseCase<R> {
    record: R,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidTimespan,
    InactiveReference(EntityKind, ID),
    StorageError(&'static str),
}

impl From<UseCaseError> for KennelError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The booking has to end after it starts.".into())
            }
            UseCaseError::InactiveReference(kind, id) => Self::BadClientData(format!(
                "The {} with id: {}, was not found.",
                kind, id
            )),
            UseCaseError::StorageError(label) => {
                Self::InternalError(format!("An error occurred while creating the {}", label))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<R: RecordEntity> UseCase for CreateRecordUseCase<R> {
    type Response = R;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateRecord";

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error> {
        if !self.record.is_valid() {
            return Err(UseCaseError::InvalidTimespan);
        }
        self.record.stamp_created(ctx.sys.get_timestamp_millis());

        ensure_references_active(&self.record, ctx)
            .await
            .map_err(|e| match e {
                ReferenceError::Inactive(kind, id) => UseCaseError::InactiveReference(kind, id),
                ReferenceError::StorageError => UseCaseError::StorageError(R::LABEL),
            })?;

        R::repo(&ctx.repos)
            .insert(&self.record)
            .await
            .map_err(|_| UseCaseError::StorageError(R::LABEL))?;

        Ok(self.record.clone())
    }
}
