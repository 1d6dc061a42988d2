use crate::common::api_helpers::*;
use crate::common::models::VerifyResponse;
use crate::common::utils::admin_credentials;

#[tokio::test]
#[ignore = "requires BASE_URL, ADMIN_USER and ADMIN_PASSWORD"]
async fn e2e_login_then_verify() {
    let (user, password) = admin_credentials().expect("ADMIN_USER/ADMIN_PASSWORD not set");
    let client = http_client();

    let token = token_from_login(login(&client, &user, &password).await).await;

    let response = verify(&client, Some(&token)).await;
    assert_eq!(response.status(), 200);
    let body: VerifyResponse = response.json().await.expect("Invalid verify JSON");
    assert!(body.ok);
    assert_eq!(body.data.username, user);
    assert!(body.data.iat > 0);
}

#[tokio::test]
#[ignore = "requires BASE_URL of a deployed stage"]
async fn e2e_login_with_wrong_password_is_rejected() {
    let client = http_client();
    let user = admin_credentials()
        .map(|(user, _)| user)
        .unwrap_or_else(|| "admin".to_string());

    let response = login(&client, &user, "definitely-not-the-password").await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore = "requires BASE_URL of a deployed stage"]
async fn e2e_verify_rejects_missing_and_forged_tokens() {
    let client = http_client();

    assert_eq!(verify(&client, None).await.status(), 400);

    let forged = format!("eyJpYXQiOjEsInVzZXJuYW1lIjoiYWRtaW4ifQ==.{}", "0".repeat(64));
    assert_eq!(verify(&client, Some(&forged)).await.status(), 401);
}
