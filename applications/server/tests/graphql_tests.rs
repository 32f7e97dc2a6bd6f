/// GraphQL contract tests
/// Runs operations through the schema against a real database
mod common;

use common::{fixtures::*, TestApp};
use roster_server::graphql::UPDATE_OUTCOME_HEADER;
use serde_json::{json, Value};

async fn create_ada(app: &TestApp) -> Value {
    let response = app
        .execute(
            CREATE_USER_FLAT,
            json!({ "name": "Ada", "birthday": ADA_BIRTHDAY, "quantity": 3 }),
        )
        .await;
    assert!(response.get("errors").is_none(), "{response}");
    response["data"]["createUser"].clone()
}

fn first_error(response: &Value) -> &str {
    response["errors"][0]["message"]
        .as_str()
        .expect("response carries no error")
}

/// Test the create scenario: assigned id, then visible in users
#[tokio::test]
async fn test_create_user_then_list() {
    let app = TestApp::new().await;

    let created = create_ada(&app).await;
    assert!(created["id"].is_string());
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["birthday"], ADA_BIRTHDAY);
    assert_eq!(created["quantity"], 3);
    assert_eq!(created["avatar"], Value::Null);

    let response = app.execute(GET_USERS, json!({})).await;
    let users = response["data"]["users"].as_array().unwrap();
    assert!(users.contains(&created));
}

#[tokio::test]
async fn test_create_user_with_input_object() {
    let app = TestApp::new().await;

    let response = app
        .execute(
            CREATE_USER_INPUT,
            json!({ "input": {
                "name": "Grace",
                "birthday": "1906-12-09T00:00:00.000Z",
                "quantity": 1,
                "avatar": "https://example.com/grace.png"
            }}),
        )
        .await;

    let created = &response["data"]["createUser"];
    assert_eq!(created["name"], "Grace");
    assert_eq!(created["avatar"], "https://example.com/grace.png");

    let fetched = app
        .execute(GET_USER, json!({ "id": created["id"] }))
        .await;
    assert_eq!(&fetched["data"]["user"], created);
}

#[tokio::test]
async fn test_create_user_missing_field_is_generic_error() {
    let app = TestApp::new().await;

    let response = app
        .execute(
            CREATE_USER_FLAT,
            json!({ "name": "Ada", "quantity": 3 }),
        )
        .await;

    assert_eq!(first_error(&response), "Failed to create user");
    // Constraint details stay on the server
    assert!(!response.to_string().contains("NOT NULL"));

    let users = app.execute(GET_USERS, json!({})).await;
    assert_eq!(users["data"]["users"], json!([]));
}

#[tokio::test]
async fn test_get_unknown_user_is_null() {
    let app = TestApp::new().await;

    let response = app.execute(GET_USER, json!({ "id": "404" })).await;
    assert!(response.get("errors").is_none());
    assert_eq!(response["data"]["user"], Value::Null);
}

#[tokio::test]
async fn test_get_user_with_malformed_id() {
    let app = TestApp::new().await;

    let response = app.execute(GET_USER, json!({ "id": "abc" })).await;
    assert_eq!(first_error(&response), "Failed to fetch user");
}

/// Test updating quantity leaves the name alone
#[tokio::test]
async fn test_update_user_partial() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUser(id: $id, quantity: 10) { id name birthday quantity } }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    let updated = &response["data"]["updateUser"];
    assert_eq!(updated["quantity"], 10);
    assert_eq!(updated["name"], "Ada");
    assert_eq!(updated["birthday"], ADA_BIRTHDAY);

    let fetched = app.execute(GET_USER, json!({ "id": created["id"] })).await;
    assert_eq!(fetched["data"]["user"]["quantity"], 10);
    assert_eq!(fetched["data"]["user"]["name"], "Ada");
}

#[tokio::test]
async fn test_update_user_with_input_object() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!, $input: UpdateUserInput) {
                updateUser(id: $id, input: $input) { id name birthday quantity avatar }
            }"#,
            json!({ "id": created["id"], "input": { "name": "Ada Lovelace", "avatar": "a.png" } }),
        )
        .await;

    let updated = &response["data"]["updateUser"];
    assert_eq!(updated["name"], "Ada Lovelace");
    assert_eq!(updated["avatar"], "a.png");
    assert_eq!(updated["quantity"], 3);
}

#[tokio::test]
async fn test_update_user_clears_avatar_with_null() {
    let app = TestApp::new().await;
    let created = app
        .execute(
            CREATE_USER_FLAT,
            json!({ "name": "Ada", "birthday": ADA_BIRTHDAY, "quantity": 3, "avatar": "a.png" }),
        )
        .await["data"]["createUser"]
        .clone();

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUser(id: $id, avatar: null) { name avatar } }"#,
            json!({ "id": created["id"] }),
        )
        .await;

    assert_eq!(response["data"]["updateUser"]["avatar"], Value::Null);
    assert_eq!(response["data"]["updateUser"]["name"], "Ada");
}

#[tokio::test]
async fn test_update_user_null_name_is_rejected() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUser(id: $id, name: null) { name } }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    assert_eq!(first_error(&response), "Failed to update user");

    let fetched = app.execute(GET_USER, json!({ "id": created["id"] })).await;
    assert_eq!(fetched["data"]["user"], created);
}

/// Test an update without fields is a no-op returning null
#[tokio::test]
async fn test_update_user_without_fields() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUser(id: $id) { id } }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    assert!(response.get("errors").is_none());
    assert_eq!(response["data"]["updateUser"], Value::Null);

    let fetched = app.execute(GET_USER, json!({ "id": created["id"] })).await;
    assert_eq!(fetched["data"]["user"], created);
}

/// Test the outcome header separates a no-op from an unknown id
#[tokio::test]
async fn test_update_outcome_header() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;
    let empty_update = r#"mutation($id: ID!) { updateUser(id: $id) { id } }"#;
    let rename = r#"mutation($id: ID!) { updateUser(id: $id, name: "Grace") { id } }"#;

    let outcome = |response: &async_graphql::Response| {
        response
            .http_headers
            .get(UPDATE_OUTCOME_HEADER)
            .map(|value| value.to_str().unwrap().to_string())
    };

    let response = app.execute_raw(empty_update, json!({ "id": created["id"] })).await;
    assert_eq!(outcome(&response).as_deref(), Some("nothing-to-update"));

    let response = app.execute_raw(rename, json!({ "id": "999" })).await;
    assert_eq!(outcome(&response).as_deref(), Some("missing"));

    let response = app.execute_raw(rename, json!({ "id": created["id"] })).await;
    assert!(response.errors.is_empty());
    assert_eq!(outcome(&response), None);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;
    let delete = r#"mutation($id: ID!) { deleteUser(id: $id) }"#;

    let response = app.execute(delete, json!({ "id": created["id"] })).await;
    assert_eq!(response["data"]["deleteUser"], true);

    let fetched = app.execute(GET_USER, json!({ "id": created["id"] })).await;
    assert_eq!(fetched["data"]["user"], Value::Null);

    // Second delete finds nothing
    let response = app.execute(delete, json!({ "id": created["id"] })).await;
    assert_eq!(response["data"]["deleteUser"], false);
}

#[tokio::test]
async fn test_update_user_quantity() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUserQuantity(id: $id, quantity: 0) { id name birthday quantity avatar } }"#,
            json!({ "id": created["id"] }),
        )
        .await;

    let mut expected = created.clone();
    expected["quantity"] = json!(0);
    assert_eq!(response["data"]["updateUserQuantity"], expected);
}

#[tokio::test]
async fn test_update_user_birthday() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;

    let response = app
        .execute(
            r#"mutation($id: ID!, $birthday: String!) {
                updateUserBirthday(id: $id, birthday: $birthday) { id name birthday quantity avatar }
            }"#,
            json!({ "id": created["id"], "birthday": "1815-12-10T00:00:00.000Z" }),
        )
        .await;

    let mut expected = created.clone();
    expected["birthday"] = json!("1815-12-10T00:00:00.000Z");
    assert_eq!(response["data"]["updateUserBirthday"], expected);
}

#[tokio::test]
async fn test_single_field_update_on_unknown_user_is_null() {
    let app = TestApp::new().await;

    let response = app
        .execute(
            r#"mutation { updateUserQuantity(id: "77", quantity: 1) { id } }"#,
            json!({}),
        )
        .await;
    assert!(response.get("errors").is_none());
    assert_eq!(response["data"]["updateUserQuantity"], Value::Null);
}

/// Test store failures surface as generic per-operation messages
#[tokio::test]
async fn test_store_failure_is_generic_error() {
    let app = TestApp::new().await;
    let created = create_ada(&app).await;
    app.state.store.close().await;

    let response = app.execute(GET_USERS, json!({})).await;
    assert_eq!(first_error(&response), "Failed to fetch users");

    let response = app.execute(GET_USER, json!({ "id": created["id"] })).await;
    assert_eq!(first_error(&response), "Failed to fetch user");

    let response = app
        .execute(
            r#"mutation($id: ID!) { deleteUser(id: $id) }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    assert_eq!(first_error(&response), "Failed to delete user");

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUserQuantity(id: $id, quantity: 2) { id } }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    assert_eq!(first_error(&response), "Failed to update user quantity");

    let response = app
        .execute(
            r#"mutation($id: ID!) { updateUserBirthday(id: $id, birthday: "2000-01-01") { id } }"#,
            json!({ "id": created["id"] }),
        )
        .await;
    assert_eq!(first_error(&response), "Failed to update user birthday");
}

#[tokio::test]
async fn test_schema_exposes_birthday_not_birthdate() {
    let app = TestApp::new().await;
    let sdl = app.state.schema.sdl();

    assert!(sdl.contains("birthday: String!"));
    assert!(!sdl.contains("birthdate"));
    assert!(sdl.contains("updateUserBirthday"));
    assert!(sdl.contains("updateUserQuantity"));
}
