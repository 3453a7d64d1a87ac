//! Client records as seen by workshop staff.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{user::UserRepository, vehicle::VehicleRepository},
        error::AppError,
        model::user::{ClientDetail, ClientSummary, UpdateUserParams, User},
        util::validation::optional_text,
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active clients with their active vehicle counts.
    ///
    /// # Arguments
    /// - `search` - Case-insensitive name or email substring; blank means no filter
    pub async fn list(&self, search: Option<String>) -> Result<Vec<ClientSummary>, AppError> {
        let search = optional_text(search);
        let clients = UserRepository::new(self.db)
            .search_clients(search.as_deref())
            .await?;

        let ids = clients.iter().map(|c| c.id).collect();
        let counts = VehicleRepository::new(self.db)
            .count_active_by_owners(ids)
            .await?;

        Ok(clients
            .into_iter()
            .map(|client| ClientSummary {
                vehicle_count: counts.get(&client.id).copied().unwrap_or(0),
                client,
            })
            .collect())
    }

    /// # Returns
    /// - `Ok(ClientDetail)` - Client with active vehicles
    /// - `Err(AppError::NotFound)` - Not an active client
    pub async fn get(&self, id: i32) -> Result<ClientDetail, AppError> {
        let client = self.find_client(id).await?;
        let vehicles = VehicleRepository::new(self.db).get_active(Some(id)).await?;

        Ok(ClientDetail { client, vehicles })
    }

    /// Updates a client's name, phone, or email.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Not an active client
    /// - `Err(AppError::Conflict)` - Email belongs to another account
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        self.find_client(id).await?;

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::Conflict("Email is already registered".to_string()));
                }
            }
        }

        user_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    /// Soft deletes a client.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.find_client(id).await?;
        UserRepository::new(self.db).deactivate(id).await?;

        Ok(())
    }

    async fn find_client(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active_with_role(id, Role::Client)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }
}
