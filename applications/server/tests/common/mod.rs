/// Common test utilities and fixtures
use roster_server::AppState;
use roster_storage::{Store, StoreOptions};
use tempfile::TempDir;

/// Test application backed by a real SQLite file
pub struct TestApp {
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", temp_dir.path().join("roster.db").display());

        let store = Store::open(&StoreOptions::new(url))
            .await
            .expect("Failed to open store");

        Self {
            state: AppState::new(store),
            _temp_dir: temp_dir,
        }
    }

    /// Run a GraphQL request against the schema and return the JSON response
    pub async fn execute(&self, query: &str, variables: serde_json::Value) -> serde_json::Value {
        let response = self.execute_raw(query, variables).await;
        serde_json::to_value(&response).expect("Failed to serialize response")
    }

    /// Run a GraphQL request and keep the full response, headers included
    #[allow(dead_code)]
    pub async fn execute_raw(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> async_graphql::Response {
        let request = async_graphql::Request::new(query)
            .variables(async_graphql::Variables::from_json(variables));
        self.state.schema.execute(request).await
    }
}

/// GraphQL documents used across tests
#[allow(dead_code)]
pub mod fixtures {
    pub const ADA_BIRTHDAY: &str = "1985-12-10T00:00:00.000Z";

    pub const USER_FIELDS: &str = "id name birthday quantity avatar";

    pub const CREATE_USER_FLAT: &str = r#"
        mutation CreateUser($name: String, $birthday: String, $quantity: Int, $avatar: String) {
            createUser(name: $name, birthday: $birthday, quantity: $quantity, avatar: $avatar) {
                id name birthday quantity avatar
            }
        }
    "#;

    pub const CREATE_USER_INPUT: &str = r#"
        mutation CreateUser($input: CreateUserInput) {
            createUser(input: $input) { id name birthday quantity avatar }
        }
    "#;

    pub const GET_USER: &str = r#"
        query GetUser($id: ID!) {
            user(id: $id) { id name birthday quantity avatar }
        }
    "#;

    pub const GET_USERS: &str = r#"
        query GetUsers {
            users { id name birthday quantity avatar }
        }
    "#;
}
