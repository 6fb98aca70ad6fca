use crate::Response;
use kennel_domain::{Pet, PetBreed, PetType, ID};
use serde::{Deserialize, Serialize};

pub mod create_pet_type {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = Response<PetType>;
}

pub mod create_pet_breed {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub pet_type_id: ID,
    }

    pub type APIResponse = Response<PetBreed>;
}

pub mod create_pet {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub owner_name: String,
        pub pet_type_id: ID,
        pub pet_breed_id: ID,
    }

    pub type APIResponse = Response<Pet>;
}
