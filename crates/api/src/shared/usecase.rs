use kennel_infra::KennelContext;
use std::fmt::Debug;
use tracing::error;

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &KennelContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
