use kennel_domain::ID;
use serde::Deserialize;

/// Path of the routes addressing a single row, `/{kind}/{id}`
pub mod get_entity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub id: ID,
    }
}

pub mod delete_entity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub id: ID,
    }
}
