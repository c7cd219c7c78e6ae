use crate::{
    api::{
        CreateUserRequest, CreateUserResult, DeleteUserRequest, DeleteUserResult, GetUserRequest,
        GetUserResult, NoParams, UpdateUserRequest, UpdateUserResult,
    },
    endpoint::Endpoint,
    Client,
};

impl Client {
    /// Create a new user.
    pub async fn create_user(&self, req: &CreateUserRequest) -> eyre::Result<CreateUserResult> {
        self.call(Endpoint::CreateUser, req).await
    }

    /// Fetch a user by username or user ID.
    pub async fn get_user(&self, req: &GetUserRequest) -> eyre::Result<GetUserResult> {
        self.call(
            Endpoint::GetUser(req.username_or_user_id.clone()),
            &NoParams,
        )
        .await
    }

    /// Update the fields set in `req.user` of an existing user.
    pub async fn update_user(&self, req: &UpdateUserRequest) -> eyre::Result<UpdateUserResult> {
        self.call(Endpoint::UpdateUser(req.username_or_user_id.clone()), req).await
    }

    /// Delete a user by username or user ID.
    pub async fn delete_user(&self, req: &DeleteUserRequest) -> eyre::Result<DeleteUserResult> {
        self.call(
            Endpoint::DeleteUser(req.username_or_user_id.clone()),
            &NoParams,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{CreateUserRequest, DeleteUserRequest, GetUserRequest, UpdateUserRequest, UserData},
        test::{with_api_server, TOKEN},
        ApiUrl, Client,
    };

    #[tokio::test]
    async fn test_user_lifecycle() {
        let server = with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), TOKEN).unwrap();

        let user = client.get_user(&GetUserRequest::new("jdoe")).await.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.user.full_name, "John Doe");

        let req = UpdateUserRequest {
            username_or_user_id: "jdoe".to_owned(),
            user: UserData {
                mobile: "+49 40 0000000".to_owned(),
                ..Default::default()
            },
        };
        let updated = client.update_user(&req).await.unwrap();
        assert_eq!(updated.id, 42);

        let deleted = client
            .delete_user(&DeleteUserRequest::new("jdoe"))
            .await
            .unwrap();
        assert!(deleted.info.success);
        assert_eq!(deleted.id, 42);
    }

    #[tokio::test]
    async fn test_create_user() {
        let server = with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), TOKEN).unwrap();

        let req = CreateUserRequest {
            user: UserData {
                full_name: "Jane Roe".to_owned(),
                email: "jroe@example.com".to_owned(),
                username: "jroe".to_owned(),
                password: "correct horse battery staple".to_owned(),
                roles: vec!["PROCUREMENT".to_owned()],
                ..Default::default()
            },
        };
        let res = client.create_user(&req).await.unwrap();

        assert_eq!(res.id, 43);
        assert_eq!(res.username, "jroe");
        assert_eq!(res.roles, ["PROCUREMENT"]);
    }
}
