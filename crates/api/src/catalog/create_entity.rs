use super::CatalogEntity;
use crate::error::KennelError;
use crate::shared::{
    references::{ensure_references_active, ReferenceError},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use kennel_api_structs::Response;
use kennel_domain::{EntityKind, ID};
use kennel_infra::KennelContext;

pub async fn create_entity_controller<E: CatalogEntity>(
    body: web::Json<E::Body>,
    ctx: web::Data<KennelContext>,
) -> Result<HttpResponse, KennelError> {
    let usecase = CreateEntityUseCase {
        entity: E::from_body(body.into_inner()),
    };

    execute(usecase, &ctx)
        .await
        .map(|entity| {
            let message = format!("{} created", entity.display_name());
            HttpResponse::Created().json(Response::success(message, Some(entity)))
        })
        .map_err(KennelError::from)
}

#[derive(Debug)]
struct CreateEntityUseCase<E> {
    entity: E,
}

#[derive(Debug)]
enum UseCaseError {
    InactiveReference(EntityKind, ID),
    StorageError(EntityKind),
}

impl From<UseCaseError> for KennelError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InactiveReference(kind, id) => Self::BadClientData(format!(
                "The {} with id: {}, was not found.",
                kind, id
            )),
            UseCaseError::StorageError(kind) => {
                Self::InternalError(format!("An error occurred while creating the {}", kind))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<E: CatalogEntity> UseCase for CreateEntityUseCase<E> {
    type Response = E;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEntity";

    async fn execute(&mut self, ctx: &KennelContext) -> Result<Self::Response, Self::Error> {
        ensure_references_active(&self.entity, ctx)
            .await
            .map_err(|e| match e {
                ReferenceError::Inactive(kind, id) => UseCaseError::InactiveReference(kind, id),
                ReferenceError::StorageError => UseCaseError::StorageError(E::KIND),
            })?;

        E::repo(&ctx.repos)
            .insert(&self.entity)
            .await
            .map_err(|_| UseCaseError::StorageError(E::KIND))?;

        Ok(self.entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kennel_domain::{Deletable, Pet, PetBreed, PetType};
    use kennel_infra::InMemoryDatabase;
    use std::sync::Arc;

    fn setup() -> KennelContext {
        KennelContext::create_inmemory(Arc::new(InMemoryDatabase::new()))
    }

    #[actix_web::main]
    #[test]
    async fn creates_pet_with_active_references() {
        let ctx = setup();
        let pet_type = PetType::new("Dog");
        let breed = PetBreed::new("Beagle", pet_type.id.clone());
        ctx.repos.pet_types.insert(&pet_type).await.unwrap();
        ctx.repos.pet_breeds.insert(&breed).await.unwrap();

        let pet = Pet::new("Rex", "Ada", pet_type.id.clone(), breed.id.clone());
        let mut usecase = CreateEntityUseCase { entity: pet.clone() };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res, pet);
        assert_eq!(ctx.repos.pets.find(&pet.id).await.unwrap(), Some(pet));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reference_to_tombstoned_entity() {
        let ctx = setup();
        let mut pet_type = PetType::new("Dog");
        pet_type.mark_deleted();
        ctx.repos.pet_types.insert(&pet_type).await.unwrap();

        let breed = PetBreed::new("Beagle", pet_type.id.clone());
        let mut usecase = CreateEntityUseCase {
            entity: breed.clone(),
        };
        let err = usecase.execute(&ctx).await.unwrap_err();
        assert_eq!(
            KennelError::from(err).to_string(),
            format!("The pet type with id: {}, was not found.", pet_type.id)
        );
        assert!(ctx.repos.pet_breeds.find(&breed.id).await.unwrap().is_none());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reference_to_missing_entity() {
        let ctx = setup();
        let pet_type = PetType::new("Dog");
        ctx.repos.pet_types.insert(&pet_type).await.unwrap();

        let missing_breed = ID::default();
        let pet = Pet::new("Rex", "Ada", pet_type.id.clone(), missing_breed.clone());
        let mut usecase = CreateEntityUseCase { entity: pet };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(
            res,
            Err(UseCaseError::InactiveReference(EntityKind::PetBreed, ref id)) if *id == missing_breed
        ));
    }
}
